//! String helpers built on [`Matcher<char>`](crate::filter::Matcher).
//!
//! Offsets are byte offsets into UTF-8 text. Functions that take an offset
//! return `None` when it is past the end or falls inside a character, the
//! same rule [`str::get`] applies.
//!
//! # Examples
//!
//! ```rust
//! use setwise::text::{any_of, span, span_not, strip};
//!
//! let digits = |c: &char| c.is_ascii_digit();
//! assert_eq!(span("123abc", 0, &digits), Some(3));
//! assert_eq!(span_not("abc123", 0, &digits), Some(3));
//! assert_eq!(strip("a-b_c", &any_of("-_")), "abc");
//! ```

use std::fmt::Display;

use crate::filter::Matcher;

/// Joins the `Display` form of `items` with `separator`.
///
/// # Examples
///
/// ```rust
/// use setwise::text::join;
///
/// assert_eq!(join([1, 2, 3], ", "), "1, 2, 3");
/// assert_eq!(join(Vec::<i32>::new(), ", "), "");
/// ```
pub fn join<I>(items: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut joined = String::new();
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            joined.push_str(separator);
        }
        joined.push_str(&item.to_string());
    }
    joined
}

/// Returns a matcher accepting any char that occurs in `chars`.
pub fn any_of(chars: &str) -> impl Matcher<char> + Clone + use<> {
    let chars = chars.to_owned();
    move |candidate: &char| chars.contains(*candidate)
}

/// Returns a copy of `source` without the chars `removals` accepts.
pub fn strip<M>(source: &str, removals: &M) -> String
where
    M: Matcher<char> + ?Sized,
{
    source.chars().filter(|c| !removals.matches(c)).collect()
}

/// Returns `Some(other.len())` if `other` occurs in `text` at `offset`.
///
/// # Examples
///
/// ```rust
/// use setwise::text::matches_at;
///
/// assert_eq!(matches_at("setwise", 3, "wise"), Some(4));
/// assert_eq!(matches_at("setwise", 3, "wiser"), None);
/// assert_eq!(matches_at("setwise", 99, ""), None);
/// ```
pub fn matches_at(text: &str, offset: usize, other: &str) -> Option<usize> {
    text.get(offset..)?
        .starts_with(other)
        .then_some(other.len())
}

/// Returns the offset of the first char at or after `offset` that `set`
/// rejects, or `text.len()` if there is none.
pub fn span<M>(text: &str, offset: usize, set: &M) -> Option<usize>
where
    M: Matcher<char> + ?Sized,
{
    scan(text, offset, |c| !set.matches(c))
}

/// Returns the offset of the first char at or after `offset` that `set`
/// accepts, or `text.len()` if there is none.
pub fn span_not<M>(text: &str, offset: usize, set: &M) -> Option<usize>
where
    M: Matcher<char> + ?Sized,
{
    scan(text, offset, |c| set.matches(c))
}

fn scan(text: &str, offset: usize, mut stop: impl FnMut(&char) -> bool) -> Option<usize> {
    let rest = text.get(offset..)?;
    let end = rest
        .char_indices()
        .find(|(_, c)| stop(c))
        .map_or(rest.len(), |(index, _)| index);
    Some(offset + end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[], "")]
    #[case(&["a"], "a")]
    #[case(&["a", "b", "c"], "a/b/c")]
    fn test_join(#[case] items: &[&str], #[case] expected: &str) {
        assert_eq!(join(items, "/"), expected);
    }

    #[rstest]
    fn test_join_formats_display_items() {
        assert_eq!(join([1.5, -2.0], "; "), "1.5; -2");
        assert_eq!(join(['a', 'b'], ""), "ab");
    }

    #[rstest]
    fn test_strip_multibyte() {
        assert_eq!(strip("naïve café", &any_of("ïé ")), "navecaf");
        assert_eq!(strip("", &any_of("x")), "");
    }

    #[rstest]
    #[case("hello", 0, "he", Some(2))]
    #[case("hello", 3, "lo", Some(2))]
    #[case("hello", 3, "lox", None)]
    #[case("hello", 5, "", Some(0))]
    #[case("hello", 6, "", None)]
    #[case("é", 1, "", None)]
    fn test_matches_at(
        #[case] text: &str,
        #[case] offset: usize,
        #[case] other: &str,
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(matches_at(text, offset, other), expected);
    }

    #[rstest]
    #[case("   x", 0, Some(3))]
    #[case("   x", 3, Some(3))]
    #[case("    ", 1, Some(4))]
    #[case("", 0, Some(0))]
    #[case("ab", 3, None)]
    fn test_span_whitespace(
        #[case] text: &str,
        #[case] offset: usize,
        #[case] expected: Option<usize>,
    ) {
        let blank = |c: &char| c.is_whitespace();
        assert_eq!(span(text, offset, &blank), expected);
    }

    #[rstest]
    fn test_span_not_stops_at_first_match() {
        let vowels = any_of("aeiou");
        assert_eq!(span_not("rhythm and", 0, &vowels), Some(7));
        assert_eq!(span_not("rhythm", 0, &vowels), Some(6));
        assert_eq!(span_not("ééa", 2, &vowels), Some(4));
    }

    #[rstest]
    fn test_span_and_span_not_partition() {
        let digits = |c: &char| c.is_ascii_digit();
        let text = "12ab34";
        let first = span(text, 0, &digits).unwrap();
        let second = span_not(text, first, &digits).unwrap();
        assert_eq!((first, second), (2, 4));
        assert_eq!(span(text, second, &digits), Some(6));
    }
}
