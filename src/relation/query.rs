//! Relation queries between two containers.

use tracing::trace;

use super::ContainmentRelation;
use super::merge::{MergeCursor, MergeStep};
use crate::container::{Comparison, Container};

/// Returns `true` if `a` and `b` are the same object.
///
/// Sub-slices can start at the same address, so the lengths must agree too.
#[inline]
fn same_instance<A, B>(a: &A, b: &B) -> bool
where
    A: Container + ?Sized,
    B: Container<Item = A::Item> + ?Sized,
{
    std::ptr::addr_eq(std::ptr::from_ref(a), std::ptr::from_ref(b)) && a.len() == b.len()
}

/// Returns the ordering both containers are sorted by, if any.
#[inline]
fn shared_order<'a, A, B>(a: &'a A, b: &'a B) -> Option<Comparison<'a, A::Item>>
where
    A: Container + ?Sized,
    B: Container<Item = A::Item> + ?Sized,
{
    a.sortedness().shared_with(&b.sortedness())
}

/// Returns `true` if `a` and `b` share at least one element.
///
/// # Algorithm
///
/// - Either container empty: `false`.
/// - Same container passed twice: `true` (it is known to be non-empty).
/// - Both sorted under the natural order, or under the same [`Orderer`]
///   instance: a linear merge of the two sequences, stopping at the first
///   match.
/// - Otherwise: each element of `a` is probed in `b`.
///
/// Sorted containers are trusted to be sorted; see [`Container`].
///
/// [`Orderer`]: crate::container::Orderer
///
/// # Examples
///
/// ```rust
/// use setwise::relation::contains_some;
/// use std::collections::{BTreeSet, HashSet};
///
/// let odd: BTreeSet<i32> = [1, 3, 5].into_iter().collect();
/// let middle: BTreeSet<i32> = [2, 3, 4].into_iter().collect();
/// assert!(contains_some(&odd, &middle));
///
/// let even: HashSet<i32> = [2, 4].into_iter().collect();
/// assert!(!contains_some(&odd, &even));
/// ```
pub fn contains_some<A, B>(a: &A, b: &B) -> bool
where
    A: Container + ?Sized,
    B: Container<Item = A::Item> + ?Sized,
{
    if a.is_empty() || b.is_empty() {
        return false;
    }
    // Identity implies both are non-empty, which was just established.
    if same_instance(a, b) {
        return true;
    }

    if let Some(comparison) = shared_order(a, b) {
        trace!(mode = "merge", ordering = comparison.name(), "contains_some");
        return MergeCursor::new(a.iter(), b.iter(), comparison)
            .any(|step| step == MergeStep::Matched);
    }

    trace!(mode = "probe", "contains_some");
    a.iter().any(|item| b.contains(item))
}

/// Returns `true` if every element of `b` is in `a` (A ⊇ B).
///
/// # Algorithm
///
/// - Same container passed twice, or `b` empty: `true`.
/// - `a` empty: `false`.
/// - Both sorted under a shared ordering: a linear merge that fails as soon
///   as an element of `b` is skipped, and succeeds once `b` is exhausted.
/// - Otherwise: [`Container::contains_all`] of `a`.
///
/// # Examples
///
/// ```rust
/// use setwise::relation::contains_all;
/// use std::collections::BTreeSet;
///
/// let all: BTreeSet<i32> = (1..=5).collect();
/// let some: BTreeSet<i32> = [2, 4].into_iter().collect();
/// assert!(contains_all(&all, &some));
/// assert!(!contains_all(&some, &all));
/// assert!(contains_all(&some, &BTreeSet::<i32>::new()));
/// ```
pub fn contains_all<A, B>(a: &A, b: &B) -> bool
where
    A: Container + ?Sized,
    B: Container<Item = A::Item> + ?Sized,
{
    if same_instance(a, b) || b.is_empty() {
        return true;
    }
    if a.is_empty() {
        return false;
    }

    if let Some(comparison) = shared_order(a, b) {
        trace!(mode = "merge", ordering = comparison.name(), "contains_all");
        let mut cursor = MergeCursor::new(a.iter(), b.iter(), comparison);
        if cursor.any(|step| step == MergeStep::RightBehind) {
            return false;
        }
        return cursor.right_exhausted();
    }

    trace!(mode = "probe", "contains_all");
    a.contains_all(b)
}

/// Returns `true` if `a` and `b` share no element.
///
/// Always the negation of [`contains_some`].
///
/// # Examples
///
/// ```rust
/// use setwise::relation::contains_none;
///
/// assert!(contains_none(&vec![1, 2], &vec![3]));
/// assert!(!contains_none(&vec![1, 2], &vec![2]));
/// ```
pub fn contains_none<A, B>(a: &A, b: &B) -> bool
where
    A: Container + ?Sized,
    B: Container<Item = A::Item> + ?Sized,
{
    !contains_some(a, b)
}

/// Computes every containment fact between `a` and `b` at once.
///
/// The result has `NOT_SUBSET` set if some element of `a` is missing from
/// `b`, `NOT_SUPERSET` if some element of `b` is missing from `a`, and
/// `NOT_DISJOINT` if they share an element.
///
/// # Algorithm
///
/// Membership probing in both directions, whether or not the containers are
/// sorted. The sizes alone say nothing here, because the two containers may
/// use different notions of equality. The scan of `a` stops once both
/// `NOT_DISJOINT` and `NOT_SUBSET` are known; the scan of `b` stops once
/// both `NOT_DISJOINT` and `NOT_SUPERSET` are known.
///
/// # Examples
///
/// ```rust
/// use setwise::relation::{containment_relation, ContainmentRelation};
///
/// let relation = containment_relation(&vec![1, 3, 5], &vec![2, 3, 4]);
/// assert_eq!(relation, ContainmentRelation::PROPER_OVERLAPS);
///
/// let relation = containment_relation(&vec![1, 2], &vec![1, 2, 3]);
/// assert!(relation.is_subset());
/// assert!(!relation.is_superset());
/// ```
pub fn containment_relation<A, B>(a: &A, b: &B) -> ContainmentRelation
where
    A: Container + ?Sized,
    B: Container<Item = A::Item> + ?Sized,
{
    if a.is_empty() {
        return if b.is_empty() {
            ContainmentRelation::ALL_EMPTY
        } else {
            ContainmentRelation::NOT_SUPERSET
        };
    }
    if b.is_empty() {
        return ContainmentRelation::NOT_SUBSET;
    }

    let mut relation = ContainmentRelation::ALL_EMPTY;
    for item in a.iter() {
        if relation == ContainmentRelation::PROPER_SUPERSET {
            break;
        }
        relation |= if b.contains(item) {
            ContainmentRelation::NOT_DISJOINT
        } else {
            ContainmentRelation::NOT_SUBSET
        };
    }
    for item in b.iter() {
        if relation.contains(ContainmentRelation::PROPER_SUBSET) {
            break;
        }
        relation |= if a.contains(item) {
            ContainmentRelation::NOT_DISJOINT
        } else {
            ContainmentRelation::NOT_SUPERSET
        };
    }
    trace!(relation = relation.bits(), "containment_relation");
    relation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{Orderer, SortedSet};
    use rstest::rstest;
    use std::collections::{BTreeSet, HashSet};

    fn tree(elements: &[i32]) -> BTreeSet<i32> {
        elements.iter().copied().collect()
    }

    fn hashed(elements: &[i32]) -> HashSet<i32> {
        elements.iter().copied().collect()
    }

    #[rstest]
    #[case(&[], &[], false)]
    #[case(&[1], &[], false)]
    #[case(&[], &[1], false)]
    #[case(&[1, 3, 5], &[2, 3, 4], true)]
    #[case(&[1, 3, 5], &[2, 4, 6], false)]
    #[case(&[1, 2], &[3, 4], false)]
    #[case(&[5], &[1, 2, 3, 4, 5], true)]
    fn test_contains_some_agrees_across_modes(
        #[case] left: &[i32],
        #[case] right: &[i32],
        #[case] expected: bool,
    ) {
        assert_eq!(contains_some(&tree(left), &tree(right)), expected);
        assert_eq!(contains_some(&hashed(left), &hashed(right)), expected);
        assert_eq!(contains_some(&tree(left), &hashed(right)), expected);
        assert_eq!(contains_some(left, right), expected);
    }

    #[rstest]
    #[case(&[], &[], true)]
    #[case(&[1], &[], true)]
    #[case(&[], &[1], false)]
    #[case(&[1, 2, 3], &[1, 3], true)]
    #[case(&[1, 2, 3], &[3, 4], false)]
    #[case(&[2, 3], &[1], false)]
    #[case(&[1], &[1, 2], false)]
    #[case(&[1, 2], &[1, 2], true)]
    fn test_contains_all_agrees_across_modes(
        #[case] left: &[i32],
        #[case] right: &[i32],
        #[case] expected: bool,
    ) {
        assert_eq!(contains_all(&tree(left), &tree(right)), expected);
        assert_eq!(contains_all(&hashed(left), &hashed(right)), expected);
        assert_eq!(contains_all(left, &tree(right)), expected);
    }

    #[rstest]
    fn test_same_instance_fast_paths() {
        let empty = tree(&[]);
        assert!(!contains_some(&empty, &empty));
        assert!(contains_all(&empty, &empty));

        let values = hashed(&[1, 2]);
        assert!(contains_some(&values, &values));
        assert!(contains_all(&values, &values));
    }

    #[rstest]
    fn test_prefix_slices_are_not_the_same_instance() {
        let values = [1, 2, 3];
        assert!(!contains_all(&values[..1], &values[..2]));
        assert!(contains_all(&values[..2], &values[..1]));
    }

    #[rstest]
    fn test_shared_orderer_takes_merge_path() {
        let descending = Orderer::new(|left: &i32, right: &i32| right.cmp(left));
        let a = SortedSet::from_iter_with(descending.clone(), [1, 3, 5]);
        let b = SortedSet::from_iter_with(descending, [5, 1]);
        assert!(contains_some(&a, &b));
        assert!(contains_all(&a, &b));
        assert!(!contains_all(&b, &a));
    }

    #[rstest]
    fn test_distinct_orderers_fall_back_to_probing() {
        let a = SortedSet::from_iter_with(Orderer::natural(), [1, 3, 5]);
        let b = SortedSet::from_iter_with(Orderer::natural().reversed(), [5, 3]);
        assert!(contains_some(&a, &b));
        assert!(contains_all(&a, &b));
    }

    #[rstest]
    #[case(&[], &[], 0)]
    #[case(&[], &[1], 1)]
    #[case(&[1, 2], &[], 4)]
    #[case(&[1, 3, 5], &[2, 3, 4], 7)]
    #[case(&[1, 2], &[3, 4], 5)]
    #[case(&[1, 2], &[1, 2], 2)]
    #[case(&[1], &[1, 2], 3)]
    #[case(&[1, 2], &[2], 6)]
    fn test_containment_relation(
        #[case] left: &[i32],
        #[case] right: &[i32],
        #[case] expected: u8,
    ) {
        assert_eq!(containment_relation(&tree(left), &tree(right)).bits(), expected);
        assert_eq!(containment_relation(left, right).bits(), expected);
    }

    #[rstest]
    fn test_contains_none_negates_contains_some() {
        assert!(contains_none(&tree(&[1]), &tree(&[2])));
        assert!(!contains_none(&tree(&[1]), &tree(&[1])));
        assert!(contains_none(&tree(&[]), &tree(&[])));
    }
}
