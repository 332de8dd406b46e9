//! The container contract consumed by the relation queries.
//!
//! A [`Container`] is a read-only sequence with a membership test. Two
//! optional capabilities are reported at runtime through
//! [`Container::sortedness`]:
//!
//! - **sortedness**: elements are visited in a strict total order;
//! - **orderer**: that order comes from an explicit [`Orderer`] rather than
//!   from the elements' own `Ord` implementation.
//!
//! The capability belongs to the instance, not the type: a [`SortedSet`]
//! built with one orderer and a [`SortedSet`] built with another have the
//! same type but cannot be merged against each other.
//!
//! # Implementations
//!
//! | Type              | Sortedness | `contains` cost |
//! |-------------------|------------|-----------------|
//! | `BTreeSet<T>`     | natural    | O(log n)        |
//! | `SortedSet<T>`    | natural or by orderer | O(log n) |
//! | `HashSet<T, S>`   | unsorted   | O(1)            |
//! | `Vec<T>`, `VecDeque<T>`, `[T]`, `[T; N]` | unsorted | O(n) |
//!
//! # Examples
//!
//! ```rust
//! use setwise::container::{Container, SortedSet};
//! use std::collections::HashSet;
//!
//! let sorted: SortedSet<i32> = [3, 1, 2].into_iter().collect();
//! assert!(sorted.sortedness().is_sorted());
//!
//! let hashed: HashSet<i32> = [3, 1, 2].into_iter().collect();
//! assert!(!hashed.sortedness().is_sorted());
//! assert!(Container::contains(&hashed, &2));
//! ```

mod orderer;
mod sorted_set;
mod std_impls;

pub use orderer::CompareFn;
pub use orderer::Orderer;
pub use sorted_set::SortedSet;
pub use sorted_set::SortedSetIntoIterator;

use std::cmp::Ordering;

/// A read-only collection that the relation queries can inspect.
///
/// # Required Methods
///
/// - `len`: number of elements
/// - `iter`: traversal over every element, in order when sorted
/// - `contains`: membership test
///
/// # Provided Methods
///
/// - `is_empty`: `len() == 0`
/// - `contains_all`: probes every element of another container
/// - `sortedness`: reports no ordering capability
///
/// # Sortedness contract
///
/// An implementation that reports [`Sortedness::natural`] or
/// [`Sortedness::by`] promises that `iter` visits elements in strictly
/// ascending order under that ordering. The relation queries trust this
/// promise without checking it; a false claim gives unspecified results.
pub trait Container {
    /// The element type.
    type Item;

    /// Iterator returned by [`Container::iter`].
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Visits every element. Sorted containers visit them in order.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns `true` if `item` is a member.
    fn contains(&self, item: &Self::Item) -> bool;

    /// Returns `true` if every element of `other` is a member of `self`.
    ///
    /// The default probes each element of `other` with [`Container::contains`].
    fn contains_all<C>(&self, other: &C) -> bool
    where
        C: Container<Item = Self::Item> + ?Sized,
    {
        other.iter().all(|item| self.contains(item))
    }

    /// Reports the ordering capability of this instance.
    fn sortedness(&self) -> Sortedness<'_, Self::Item> {
        Sortedness::unsorted()
    }
}

// =============================================================================
// Sortedness
// =============================================================================

/// The ordering capability reported by a [`Container`] instance.
///
/// # Examples
///
/// ```rust
/// use setwise::container::{Orderer, Sortedness};
///
/// let orderer = Orderer::new(|left: &i32, right: &i32| right.cmp(left));
///
/// assert!(!Sortedness::<i32>::unsorted().is_sorted());
/// assert!(Sortedness::<i32>::natural().is_sorted());
/// assert!(Sortedness::by(&orderer).orderer().is_some());
/// ```
pub struct Sortedness<'a, T> {
    kind: SortednessKind<'a, T>,
}

enum SortednessKind<'a, T> {
    Unsorted,
    Natural(fn(&T, &T) -> Ordering),
    ByOrderer(&'a Orderer<T>),
}

impl<'a, T> Sortedness<'a, T> {
    /// No ordering promise.
    #[must_use]
    pub const fn unsorted() -> Self {
        Self {
            kind: SortednessKind::Unsorted,
        }
    }

    /// Elements are visited in ascending `Ord` order.
    #[must_use]
    pub fn natural() -> Self
    where
        T: Ord,
    {
        Self::natural_from(T::cmp)
    }

    /// Elements are visited in ascending order under `orderer`.
    #[must_use]
    pub const fn by(orderer: &'a Orderer<T>) -> Self {
        Self {
            kind: SortednessKind::ByOrderer(orderer),
        }
    }

    /// Builds a natural sortedness from a stored `Ord::cmp` pointer.
    ///
    /// Callers must only pass `<T as Ord>::cmp`.
    pub(crate) const fn natural_from(compare: fn(&T, &T) -> Ordering) -> Self {
        Self {
            kind: SortednessKind::Natural(compare),
        }
    }

    /// Returns `true` if the container promises an order.
    #[must_use]
    pub const fn is_sorted(&self) -> bool {
        !matches!(self.kind, SortednessKind::Unsorted)
    }

    /// Returns `true` if the order is the elements' natural order.
    #[must_use]
    pub const fn is_natural(&self) -> bool {
        matches!(self.kind, SortednessKind::Natural(_))
    }

    /// Returns the explicit orderer, if any.
    #[must_use]
    pub fn orderer(&self) -> Option<&'a Orderer<T>> {
        match self.kind {
            SortednessKind::ByOrderer(orderer) => Some(orderer),
            _ => None,
        }
    }

    /// Returns the ordering both containers are sorted by, if they share one.
    ///
    /// Two natural orders are shared. Two orderers are shared only when they
    /// are the same instance ([`Orderer::same`]); orderers that merely compare
    /// alike are not recognised.
    pub(crate) fn shared_with(&self, other: &Self) -> Option<Comparison<'a, T>> {
        match (self.kind, other.kind) {
            (SortednessKind::Natural(compare), SortednessKind::Natural(_)) => {
                Some(Comparison::Natural(compare))
            }
            (SortednessKind::ByOrderer(left), SortednessKind::ByOrderer(right))
                if Orderer::same(left, right) =>
            {
                Some(Comparison::ByOrderer(left))
            }
            _ => None,
        }
    }
}

impl<T> Clone for Sortedness<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Sortedness<'_, T> {}

impl<T> Clone for SortednessKind<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SortednessKind<'_, T> {}

impl<T> std::fmt::Debug for Sortedness<'_, T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            SortednessKind::Unsorted => formatter.write_str("Sortedness::Unsorted"),
            SortednessKind::Natural(_) => formatter.write_str("Sortedness::Natural"),
            SortednessKind::ByOrderer(orderer) => formatter
                .debug_tuple("Sortedness::ByOrderer")
                .field(orderer)
                .finish(),
        }
    }
}

/// An ordering shared by two sorted containers.
pub(crate) enum Comparison<'a, T> {
    Natural(fn(&T, &T) -> Ordering),
    ByOrderer(&'a Orderer<T>),
}

impl<T> Comparison<'_, T> {
    #[inline]
    pub(crate) fn compare(&self, left: &T, right: &T) -> Ordering {
        match self {
            Self::Natural(compare) => compare(left, right),
            Self::ByOrderer(orderer) => orderer.compare(left, right),
        }
    }

    pub(crate) const fn name(&self) -> &'static str {
        match self {
            Self::Natural(_) => "natural",
            Self::ByOrderer(_) => "orderer",
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_unsorted_shares_nothing() {
        let unsorted = Sortedness::<i32>::unsorted();
        let natural = Sortedness::<i32>::natural();
        assert!(unsorted.shared_with(&natural).is_none());
        assert!(natural.shared_with(&unsorted).is_none());
        assert!(unsorted.shared_with(&unsorted).is_none());
    }

    #[rstest]
    fn test_natural_is_shared_with_natural() {
        let left = Sortedness::<i32>::natural();
        let right = Sortedness::<i32>::natural();
        let comparison = left.shared_with(&right).unwrap();
        assert_eq!(comparison.name(), "natural");
        assert_eq!(comparison.compare(&1, &2), Ordering::Less);
    }

    #[rstest]
    fn test_same_orderer_is_shared() {
        let orderer = Orderer::new(|left: &i32, right: &i32| right.cmp(left));
        let alias = orderer.clone();
        let comparison = Sortedness::by(&orderer)
            .shared_with(&Sortedness::by(&alias))
            .unwrap();
        assert_eq!(comparison.name(), "orderer");
        assert_eq!(comparison.compare(&1, &2), Ordering::Greater);
    }

    #[rstest]
    fn test_distinct_but_equivalent_orderers_are_not_shared() {
        let first = Orderer::new(|left: &i32, right: &i32| left.cmp(right));
        let second = Orderer::new(|left: &i32, right: &i32| left.cmp(right));
        assert!(
            Sortedness::by(&first)
                .shared_with(&Sortedness::by(&second))
                .is_none()
        );
    }

    #[rstest]
    fn test_natural_and_orderer_are_not_shared() {
        let orderer = Orderer::natural();
        assert!(
            Sortedness::<i32>::natural()
                .shared_with(&Sortedness::by(&orderer))
                .is_none()
        );
    }

    #[rstest]
    fn test_sortedness_debug() {
        assert_eq!(
            format!("{:?}", Sortedness::<i32>::unsorted()),
            "Sortedness::Unsorted"
        );
        assert_eq!(
            format!("{:?}", Sortedness::<i32>::natural()),
            "Sortedness::Natural"
        );
    }
}
