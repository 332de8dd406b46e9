//! Predicates and lazily filtered iteration.
//!
//! This module provides:
//!
//! - [`Matcher`]: an inclusion predicate, implemented by every `Fn(&T) -> bool`
//! - [`Inverse`]: the negation of another matcher, built with
//!   [`MatcherExt::inverted`]
//! - [`PrefixMatcher`]: strings starting with a prefix
//! - [`RegexMatcher`]: strings matching a regular expression in full
//!   (feature `regex`)
//! - [`FilteredIter`]: a single-pass iterator yielding only matched items
//!
//! # Examples
//!
//! ```rust
//! use setwise::filter::{FilterExt, MatcherExt};
//!
//! let even = |value: &i32| value % 2 == 0;
//! let evens: Vec<i32> = (1..=5).filtered_by(even).collect();
//! assert_eq!(evens, vec![2, 4]);
//!
//! let odds: Vec<i32> = (1..=5).filtered_by(even.inverted()).collect();
//! assert_eq!(odds, vec![1, 3, 5]);
//! ```

mod filtered_iter;
mod prefix;
#[cfg(feature = "regex")]
mod pattern;

pub use filtered_iter::FilteredIter;
pub use filtered_iter::prefixed;
pub use prefix::PrefixMatcher;

#[cfg(feature = "regex")]
pub use filtered_iter::regex_matched;
#[cfg(feature = "regex")]
pub use pattern::RegexMatcher;

/// Decides whether an item is included.
///
/// Implemented for every `Fn(&T) -> bool`. Matchers are expected not to
/// panic; a panic propagates to the caller of the iterator.
pub trait Matcher<T: ?Sized> {
    /// Returns `true` if `item` is included.
    fn matches(&self, item: &T) -> bool;
}

impl<T: ?Sized, F> Matcher<T> for F
where
    F: Fn(&T) -> bool,
{
    #[inline]
    fn matches(&self, item: &T) -> bool {
        self(item)
    }
}

/// Combinators available on every matcher.
///
/// Carries no item type, so it also applies to matchers implemented for many
/// item types, such as [`PrefixMatcher`].
pub trait MatcherExt: Sized {
    /// Returns a matcher that includes exactly what `self` excludes.
    #[must_use]
    fn inverted(self) -> Inverse<Self> {
        Inverse::new(self)
    }
}

impl<M> MatcherExt for M {}

/// The negation of a matcher.
///
/// # Examples
///
/// ```rust
/// use setwise::filter::{Inverse, Matcher, PrefixMatcher};
///
/// let not_draft = Inverse::new(PrefixMatcher::new("draft-"));
/// assert!(not_draft.matches("final-report"));
/// assert!(!not_draft.matches("draft-report"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inverse<M> {
    inner: M,
}

impl<M> Inverse<M> {
    /// Wraps `inner`.
    #[must_use]
    pub const fn new(inner: M) -> Self {
        Self { inner }
    }

    /// Returns the negated matcher.
    pub const fn inner(&self) -> &M {
        &self.inner
    }

    /// Unwraps the negated matcher.
    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<T: ?Sized, M: Matcher<T>> Matcher<T> for Inverse<M> {
    #[inline]
    fn matches(&self, item: &T) -> bool {
        !self.inner.matches(item)
    }
}

/// Adds [`FilterExt::filtered_by`] to every iterator.
pub trait FilterExt: Iterator + Sized {
    /// Wraps `self` in a [`FilteredIter`] that yields items accepted by `matcher`.
    fn filtered_by<M>(self, matcher: M) -> FilteredIter<Self, M>
    where
        M: Matcher<Self::Item>,
    {
        FilteredIter::new(self, matcher)
    }
}

impl<I: Iterator> FilterExt for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_closure_is_matcher() {
        let positive = |value: &i32| *value > 0;
        assert!(positive.matches(&1));
        assert!(!positive.matches(&-1));
    }

    #[rstest]
    fn test_inverse_negates() {
        let positive = |value: &i32| *value > 0;
        let not_positive = positive.inverted();
        assert!(!not_positive.matches(&1));
        assert!(not_positive.matches(&0));
    }

    #[rstest]
    fn test_double_inverse_restores() {
        let positive = |value: &i32| *value > 0;
        let restored = Inverse::new(Inverse::new(positive));
        assert!(restored.matches(&3));
        assert!(!restored.matches(&-3));
    }

    #[rstest]
    fn test_inverted_prefix_matcher_infers_item_type() {
        let not_tmp = PrefixMatcher::new("tmp/").inverted();
        assert!(not_tmp.matches("src/lib.rs"));
        assert!(!not_tmp.matches(&String::from("tmp/a")));

        let tmp_again = not_tmp.inverted();
        assert!(tmp_again.matches("tmp/b"));
    }

    #[rstest]
    fn test_matcher_on_unsized_type() {
        let short = |text: &str| text.len() < 3;
        assert!(short.matches("ab"));
        assert!(!short.matches("abc"));
    }
}
