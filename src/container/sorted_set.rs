//! A sorted, deduplicated vector set with an optional explicit orderer.
//!
//! [`SortedSet`] keeps its elements in a `Vec` sorted under either the
//! elements' natural order or an attached [`Orderer`]. Membership uses
//! binary search; insertion and removal shift the tail of the vector.
//!
//! # Time Complexity
//!
//! | Operation  | Cost        |
//! |------------|-------------|
//! | `contains` | O(log n)    |
//! | `insert`   | O(n)        |
//! | `remove`   | O(n)        |
//! | `collect`  | O(n log n)  |
//! | `iter`     | O(1) + O(n) |
//!
//! # Examples
//!
//! ```rust
//! use setwise::container::{Orderer, SortedSet};
//!
//! let natural: SortedSet<i32> = [3, 1, 2, 3].into_iter().collect();
//! assert_eq!(natural.as_slice(), &[1, 2, 3]);
//!
//! let descending = Orderer::new(|left: &i32, right: &i32| right.cmp(left));
//! let reversed = SortedSet::from_iter_with(descending, [3, 1, 2]);
//! assert_eq!(reversed.as_slice(), &[3, 2, 1]);
//! ```

use std::cmp::Ordering;

use super::{Container, Orderer, Sortedness};

/// How a [`SortedSet`] orders its elements.
enum SetOrder<T> {
    /// `Ord::cmp`, captured when the set was created.
    Natural(fn(&T, &T) -> Ordering),
    Explicit(Orderer<T>),
}

impl<T> SetOrder<T> {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        match self {
            Self::Natural(compare) => compare(left, right),
            Self::Explicit(orderer) => orderer.compare(left, right),
        }
    }
}

impl<T> Clone for SetOrder<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Natural(compare) => Self::Natural(*compare),
            Self::Explicit(orderer) => Self::Explicit(orderer.clone()),
        }
    }
}

/// A set stored as a strictly sorted vector.
///
/// Elements comparing `Equal` under the set's order are duplicates; the
/// first one inserted is kept.
///
/// # Type Parameters
///
/// * `T` - The element type. Natural-order sets require `T: Ord`; sets with
///   an explicit [`Orderer`] accept any `T`.
///
/// # Examples
///
/// ```rust
/// use setwise::container::{Container, SortedSet};
///
/// let mut set = SortedSet::new();
/// assert!(set.insert("pear"));
/// assert!(set.insert("apple"));
/// assert!(!set.insert("pear"));
///
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec!["apple", "pear"]);
/// assert!(set.sortedness().is_natural());
/// ```
pub struct SortedSet<T> {
    elements: Vec<T>,
    order: SetOrder<T>,
}

impl<T: Ord> SortedSet<T> {
    /// Creates an empty set ordered by `Ord`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            order: SetOrder::Natural(T::cmp),
        }
    }
}

impl<T> SortedSet<T> {
    /// Creates an empty set ordered by `orderer`.
    #[must_use]
    pub const fn with_orderer(orderer: Orderer<T>) -> Self {
        Self {
            elements: Vec::new(),
            order: SetOrder::Explicit(orderer),
        }
    }

    /// Creates a set ordered by `orderer` holding the given elements.
    ///
    /// Later duplicates are dropped.
    #[must_use]
    pub fn from_iter_with<I>(orderer: Orderer<T>, iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = Self::with_orderer(orderer);
        set.extend(iter);
        set
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the attached orderer, or `None` for a natural-order set.
    #[must_use]
    pub const fn orderer(&self) -> Option<&Orderer<T>> {
        match &self.order {
            SetOrder::Natural(_) => None,
            SetOrder::Explicit(orderer) => Some(orderer),
        }
    }

    /// Returns the elements in order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over the elements in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns the smallest element.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the largest element.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Returns `true` if an element equal to `value` under the set's order is present.
    pub fn contains(&self, value: &T) -> bool {
        self.position(value).is_ok()
    }

    /// Inserts `value`, returning `false` if an equal element was already present.
    pub fn insert(&mut self, value: T) -> bool {
        match self.position(&value) {
            Ok(_) => false,
            Err(position) => {
                self.elements.insert(position, value);
                true
            }
        }
    }

    /// Removes the element equal to `value`, returning it if present.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        self.position(value)
            .ok()
            .map(|position| self.elements.remove(position))
    }

    /// Keeps only the elements for which `keep` returns `true`.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.elements.retain(keep);
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Consumes the set, returning the sorted vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    fn position(&self, value: &T) -> Result<usize, usize> {
        self.elements
            .binary_search_by(|probe| self.order.compare(probe, value))
    }

    /// Restores the invariant after a bulk append.
    fn normalize(&mut self) {
        let order = &self.order;
        self.elements.sort_by(|left, right| order.compare(left, right));
        self.elements
            .dedup_by(|later, earlier| order.compare(later, earlier) == Ordering::Equal);
    }
}

impl<T> Container for SortedSet<T> {
    type Item = T;
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.elements.iter()
    }

    #[inline]
    fn contains(&self, item: &T) -> bool {
        Self::contains(self, item)
    }

    fn sortedness(&self) -> Sortedness<'_, T> {
        match &self.order {
            SetOrder::Natural(compare) => Sortedness::natural_from(*compare),
            SetOrder::Explicit(orderer) => Sortedness::by(orderer),
        }
    }
}

impl<T: Ord> Default for SortedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SortedSet<T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            order: self.order.clone(),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SortedSet<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_set().entries(self.elements.iter()).finish()
    }
}

/// Compares elements only; the orderers are not compared.
impl<T: PartialEq> PartialEq for SortedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for SortedSet<T> {}

impl<T> Extend<T> for SortedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let before = self.elements.len();
        self.elements.extend(iter);
        if self.elements.len() != before {
            self.normalize();
        }
    }
}

impl<T: Ord> FromIterator<T> for SortedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a, T> IntoIterator for &'a SortedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Owning iterator over a [`SortedSet`], in order.
pub type SortedSetIntoIterator<T> = std::vec::IntoIter<T>;

impl<T> IntoIterator for SortedSet<T> {
    type Item = T;
    type IntoIter = SortedSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for SortedSet<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.elements.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SortedSet<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let elements = Vec::<T>::deserialize(deserializer)?;
        Ok(elements.into_iter().collect())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn descending() -> Orderer<i32> {
        Orderer::new(|left: &i32, right: &i32| right.cmp(left))
    }

    #[rstest]
    fn test_new_creates_empty() {
        let set: SortedSet<i32> = SortedSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.orderer().is_none());
    }

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![1], vec![1])]
    #[case(vec![3, 1, 2], vec![1, 2, 3])]
    #[case(vec![2, 2, 1, 1], vec![1, 2])]
    fn test_collect_sorts_and_deduplicates(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
        let set: SortedSet<i32> = input.into_iter().collect();
        assert_eq!(set.as_slice(), expected.as_slice());
    }

    #[rstest]
    fn test_insert_keeps_order() {
        let mut set = SortedSet::new();
        assert!(set.insert(5));
        assert!(set.insert(1));
        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert_eq!(set.as_slice(), &[1, 3, 5]);
        assert_eq!(set.first(), Some(&1));
        assert_eq!(set.last(), Some(&5));
    }

    #[rstest]
    fn test_remove_returns_element() {
        let mut set: SortedSet<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(set.remove(&2), Some(2));
        assert_eq!(set.remove(&2), None);
        assert_eq!(set.as_slice(), &[1, 3]);
    }

    #[rstest]
    fn test_explicit_orderer_controls_order() {
        let set = SortedSet::from_iter_with(descending(), [1, 4, 2, 4]);
        assert_eq!(set.as_slice(), &[4, 2, 1]);
        assert!(set.contains(&2));
        assert!(!set.contains(&3));
        assert!(set.orderer().is_some());
    }

    #[rstest]
    fn test_orderer_equality_defines_duplicates() {
        let by_length = Orderer::new(|left: &&str, right: &&str| left.len().cmp(&right.len()));
        let set = SortedSet::from_iter_with(by_length, ["bb", "a", "cc", "ddd"]);
        assert_eq!(set.as_slice(), &["a", "bb", "ddd"]);
        assert!(set.contains(&"zz"));
    }

    #[rstest]
    fn test_sortedness_reports_orderer_instance() {
        let orderer = descending();
        let set = SortedSet::from_iter_with(orderer.clone(), [1, 2]);
        let reported = set.sortedness().orderer().unwrap();
        assert!(Orderer::same(reported, &orderer));
    }

    #[rstest]
    fn test_retain_preserves_order() {
        let mut set: SortedSet<i32> = (1..=6).collect();
        set.retain(|value| value % 2 == 0);
        assert_eq!(set.as_slice(), &[2, 4, 6]);
    }

    #[rstest]
    fn test_equality_ignores_orderer_identity() {
        let first = SortedSet::from_iter_with(descending(), [1, 2]);
        let second = SortedSet::from_iter_with(descending(), [2, 1]);
        assert_eq!(first, second);
    }

    #[rstest]
    fn test_debug_formats_as_set() {
        let set: SortedSet<i32> = [2, 1].into_iter().collect();
        assert_eq!(format!("{set:?}"), "{1, 2}");
    }
}
