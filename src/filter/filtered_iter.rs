//! A lookahead-buffered filtering iterator.

use std::fmt;
use std::iter::FusedIterator;

use tracing::debug;

use super::{Matcher, PrefixMatcher};
use crate::error::{Error, Result};

#[cfg(feature = "regex")]
use super::RegexMatcher;

/// State of the one-element lookahead buffer.
enum Lookahead<T> {
    /// Nothing buffered; the base must be consulted.
    Empty,
    /// The base is exhausted.
    Done,
    /// The next included element.
    Value(T),
}

/// An iterator yielding only the elements of `base` accepted by a [`Matcher`].
///
/// At most one element is buffered ahead. [`FilteredIter::has_next`] and
/// [`FilteredIter::peek`] pull from the base until an included element is
/// found or the base is exhausted; excluded elements are dropped on the way.
/// Once the base is exhausted the iterator stays exhausted.
///
/// The view is read-only: [`FilteredIter::remove`] always fails.
///
/// # Examples
///
/// ```rust
/// use setwise::filter::FilteredIter;
///
/// let mut evens = FilteredIter::new(1..=5, |value: &i32| value % 2 == 0);
/// assert!(evens.has_next());
/// assert_eq!(evens.next(), Some(2));
/// assert_eq!(evens.next(), Some(4));
/// assert!(!evens.has_next());
/// assert_eq!(evens.next(), None);
/// assert!(evens.remove().is_err());
/// ```
pub struct FilteredIter<I: Iterator, M> {
    base: I,
    matcher: M,
    lookahead: Lookahead<I::Item>,
}

impl<I, M> FilteredIter<I, M>
where
    I: Iterator,
    M: Matcher<I::Item>,
{
    /// Creates a filtered view of `base`. Nothing is pulled until first use.
    #[must_use]
    pub const fn new(base: I, matcher: M) -> Self {
        Self {
            base,
            matcher,
            lookahead: Lookahead::Empty,
        }
    }

    fn fill(&mut self) {
        if matches!(self.lookahead, Lookahead::Empty) {
            let matcher = &self.matcher;
            self.lookahead = match self.base.find(|item| matcher.matches(item)) {
                Some(item) => Lookahead::Value(item),
                None => Lookahead::Done,
            };
        }
    }

    /// Returns `true` if another included element exists.
    ///
    /// Repeated calls without an intervening `next` pull nothing further.
    pub fn has_next(&mut self) -> bool {
        self.fill();
        matches!(self.lookahead, Lookahead::Value(_))
    }

    /// Returns the next included element without consuming it.
    pub fn peek(&mut self) -> Option<&I::Item> {
        self.fill();
        match &self.lookahead {
            Lookahead::Value(item) => Some(item),
            Lookahead::Empty | Lookahead::Done => None,
        }
    }

    /// Returns the matcher.
    pub const fn matcher(&self) -> &M {
        &self.matcher
    }

    /// Removal through a filtered view is not supported.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::UnsupportedOperation`].
    pub fn remove(&mut self) -> Result<()> {
        debug!(view = "FilteredIter", "rejected remove through filtered view");
        Err(Error::UnsupportedOperation {
            view: "FilteredIter",
            operation: "remove",
        })
    }
}

impl<I, M> Iterator for FilteredIter<I, M>
where
    I: Iterator,
    M: Matcher<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.fill();
        match std::mem::replace(&mut self.lookahead, Lookahead::Empty) {
            Lookahead::Value(item) => Some(item),
            Lookahead::Empty | Lookahead::Done => {
                self.lookahead = Lookahead::Done;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.lookahead {
            Lookahead::Done => (0, Some(0)),
            Lookahead::Empty => (0, self.base.size_hint().1),
            Lookahead::Value(_) => (
                1,
                self.base
                    .size_hint()
                    .1
                    .and_then(|upper| upper.checked_add(1)),
            ),
        }
    }
}

impl<I, M> FusedIterator for FilteredIter<I, M>
where
    I: Iterator,
    M: Matcher<I::Item>,
{
}

impl<I, M> fmt::Debug for FilteredIter<I, M>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = formatter.debug_struct("FilteredIter");
        debug.field("base", &self.base);
        match &self.lookahead {
            Lookahead::Empty => debug.field("lookahead", &"Empty"),
            Lookahead::Done => debug.field("lookahead", &"Done"),
            Lookahead::Value(item) => debug.field("lookahead", item),
        };
        debug.finish_non_exhaustive()
    }
}

/// Filters `base` down to the strings starting with `prefix`.
///
/// # Examples
///
/// ```rust
/// use setwise::filter::prefixed;
///
/// let names = ["alpha", "beta", "alphabet"];
/// let matched: Vec<&str> = prefixed(names.into_iter(), "alpha").collect();
/// assert_eq!(matched, vec!["alpha", "alphabet"]);
/// ```
pub fn prefixed<I>(base: I, prefix: impl Into<String>) -> FilteredIter<I, PrefixMatcher>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    FilteredIter::new(base, PrefixMatcher::new(prefix))
}

/// Filters `base` down to the strings matching `pattern` in full.
///
/// # Errors
///
/// Returns [`Error::InvalidPattern`] if `pattern` does not compile.
///
/// # Examples
///
/// ```rust
/// use setwise::filter::regex_matched;
///
/// let codes = ["a1", "b22", "c3x"];
/// let matched: Vec<&str> = regex_matched(codes.into_iter(), r"[a-z]\d+")?.collect();
/// assert_eq!(matched, vec!["a1", "b22"]);
/// # Ok::<(), setwise::Error>(())
/// ```
#[cfg(feature = "regex")]
pub fn regex_matched<I>(base: I, pattern: &str) -> Result<FilteredIter<I, RegexMatcher>>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    Ok(FilteredIter::new(base, RegexMatcher::new(pattern)?))
}
