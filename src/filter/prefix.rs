use super::Matcher;

/// Includes strings that start with a fixed prefix.
///
/// # Examples
///
/// ```rust
/// use setwise::filter::{Matcher, PrefixMatcher};
///
/// let matcher = PrefixMatcher::new("net.");
/// assert!(matcher.matches("net.ipv4"));
/// assert!(!matcher.matches("kernel.net"));
/// assert!(PrefixMatcher::new("").matches("anything"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrefixMatcher {
    prefix: String,
}

impl PrefixMatcher {
    /// Creates a matcher for `prefix`. The empty prefix matches everything.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Returns the prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl<T: AsRef<str> + ?Sized> Matcher<T> for PrefixMatcher {
    #[inline]
    fn matches(&self, item: &T) -> bool {
        item.as_ref().starts_with(self.prefix.as_str())
    }
}
