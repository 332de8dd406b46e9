use regex::Regex;

use super::Matcher;
use crate::error::Result;

/// Includes strings that match a regular expression in full.
///
/// The pattern is anchored at both ends, so `"ab"` matches `"ab"` but not
/// `"abc"` or `"cab"`.
///
/// # Examples
///
/// ```rust
/// use setwise::filter::{Matcher, RegexMatcher};
///
/// let version = RegexMatcher::new(r"\d+\.\d+")?;
/// assert!(version.matches("1.92"));
/// assert!(!version.matches("v1.92"));
/// assert_eq!(version.as_str(), r"\d+\.\d+");
/// # Ok::<(), setwise::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    pattern: String,
    regex: Regex,
}

impl RegexMatcher {
    /// Compiles `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPattern`] if `pattern` is not a valid
    /// regular expression.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(&format!("^(?:{pattern})$"))?;
        Ok(Self {
            pattern: pattern.to_owned(),
            regex,
        })
    }

    /// Returns the pattern as given, without the anchors.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.pattern
    }
}

impl<T: AsRef<str> + ?Sized> Matcher<T> for RegexMatcher {
    #[inline]
    fn matches(&self, item: &T) -> bool {
        self.regex.is_match(item.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use rstest::rstest;

    #[rstest]
    #[case("a|b", "a", true)]
    #[case("a|b", "ab", false)]
    #[case("[0-9]+", "2026", true)]
    #[case("[0-9]+", "20x26", false)]
    #[case("", "", true)]
    fn test_full_match(#[case] pattern: &str, #[case] input: &str, #[case] expected: bool) {
        let matcher = RegexMatcher::new(pattern).unwrap();
        assert_eq!(matcher.matches(input), expected);
    }

    #[rstest]
    fn test_invalid_pattern() {
        assert!(matches!(
            RegexMatcher::new("(unclosed"),
            Err(Error::InvalidPattern(_))
        ));
    }
}
