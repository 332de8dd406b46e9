//! Lexicographic composition of comparators.

use std::cmp::Ordering;

use smallvec::SmallVec;

use super::Rank;
use crate::container::{CompareFn, Orderer};

/// Comparators kept inline before spilling to the heap.
const INLINE_COMPARATORS: usize = 4;

/// A boxed comparator stored in a [`MultiComparator`].
pub type BoxedComparator<T> = Box<dyn CompareFn<T>>;

/// Composes comparators into one lexicographic ordering.
///
/// The comparators are consulted in order; the first one that does not
/// return `Equal` decides. [`MultiComparator::compare`] reports the decision
/// as a [`Rank`], which also records which comparator decided.
///
/// # Examples
///
/// ```rust
/// use setwise::compare::MultiComparator;
/// use std::cmp::Ordering;
///
/// let by_length_then_alpha = MultiComparator::empty()
///     .then(|left: &str, right: &str| left.len().cmp(&right.len()))
///     .then(|left: &str, right: &str| left.cmp(right));
///
/// // The length comparator decides, whatever the alphabetical order says.
/// assert_eq!(by_length_then_alpha.compare("bb", "a").get(), 1);
/// assert_eq!(by_length_then_alpha.compare("a", "bb").get(), -1);
///
/// // Equal lengths: the alphabetical comparator decides.
/// assert_eq!(by_length_then_alpha.compare("ab", "aa").get(), 2);
/// assert_eq!(by_length_then_alpha.ordering("ab", "ab"), Ordering::Equal);
/// ```
pub struct MultiComparator<T: ?Sized> {
    comparators: SmallVec<[BoxedComparator<T>; INLINE_COMPARATORS]>,
}

impl<T: ?Sized> MultiComparator<T> {
    /// Creates a multi-comparator from boxed comparators, highest priority first.
    #[must_use]
    pub fn new<I>(comparators: I) -> Self
    where
        I: IntoIterator<Item = BoxedComparator<T>>,
    {
        Self {
            comparators: comparators.into_iter().collect(),
        }
    }

    /// Creates a multi-comparator with no comparators; every pair is equal.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            comparators: SmallVec::new(),
        }
    }

    /// Appends a comparator with lower priority than those already present.
    #[must_use]
    pub fn then<F>(mut self, comparator: F) -> Self
    where
        F: CompareFn<T> + 'static,
    {
        self.comparators.push(Box::new(comparator));
        self
    }

    /// Returns the number of comparators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.comparators.len()
    }

    /// Returns `true` if there are no comparators.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.comparators.is_empty()
    }

    /// Compares two values, reporting which comparator decided.
    ///
    /// Evaluation stops at the first comparator that does not return `Equal`.
    pub fn compare(&self, left: &T, right: &T) -> Rank {
        self.comparators
            .iter()
            .enumerate()
            .find_map(|(index, comparator)| match comparator(left, right) {
                Ordering::Equal => None,
                decided => Some(Rank::decided(index, decided)),
            })
            .unwrap_or(Rank::EQUAL)
    }

    /// Compares two values, for use with `sort_by` and friends.
    pub fn ordering(&self, left: &T, right: &T) -> Ordering {
        self.compare(left, right).ordering()
    }
}

impl<T: ?Sized> Default for MultiComparator<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: ?Sized> std::fmt::Debug for MultiComparator<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("MultiComparator")
            .field("comparators", &self.comparators.len())
            .finish()
    }
}

/// Turns the chain into an [`Orderer`] so it can order a sorted container.
impl<T: ?Sized + 'static> From<MultiComparator<T>> for Orderer<T> {
    fn from(chain: MultiComparator<T>) -> Self {
        Self::new(move |left: &T, right: &T| chain.ordering(left, right))
    }
}

/// Builds a [`MultiComparator`] from comparators, highest priority first.
///
/// # Examples
///
/// ```rust
/// use setwise::multi_comparator;
///
/// let by_parity_then_value = multi_comparator![
///     |left: &i32, right: &i32| (left % 2).cmp(&(right % 2)),
///     |left: &i32, right: &i32| left.cmp(right),
/// ];
///
/// let mut values = vec![3, 2, 1, 4];
/// values.sort_by(|left, right| by_parity_then_value.ordering(left, right));
/// assert_eq!(values, vec![2, 4, 1, 3]);
/// ```
#[macro_export]
macro_rules! multi_comparator {
    ($($comparator:expr),* $(,)?) => {
        $crate::compare::MultiComparator::empty()$(.then($comparator))*
    };
}
