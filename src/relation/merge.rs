//! Lock-step traversal of two sorted containers.
//!
//! [`MergeCursor`] walks two iterators that are both strictly ascending
//! under one shared ordering. Each step compares the two current elements
//! and advances the side that is behind, or both sides on a match. The walk
//! ends as soon as either side is exhausted; the caller then asks which side
//! ran out to finish its verdict.
//!
//! The cursor never checks that its inputs are actually sorted. Feeding it
//! unsorted input yields meaningless steps, never a panic.

use std::cmp::Ordering;

use crate::container::Comparison;

/// One step of a merge walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MergeStep {
    /// The left element is smaller and is absent from the right side.
    LeftBehind,
    /// The right element is smaller and is absent from the left side.
    RightBehind,
    /// Both elements are equal; both cursors advanced.
    Matched,
}

/// Two cursors advancing over sorted sequences in lock-step.
pub(crate) struct MergeCursor<'a, T, L, R>
where
    L: Iterator<Item = &'a T>,
    R: Iterator<Item = &'a T>,
    T: 'a,
{
    left: L,
    right: R,
    left_head: Option<&'a T>,
    right_head: Option<&'a T>,
    comparison: Comparison<'a, T>,
}

impl<'a, T, L, R> MergeCursor<'a, T, L, R>
where
    L: Iterator<Item = &'a T>,
    R: Iterator<Item = &'a T>,
{
    /// Positions both cursors on their first element.
    pub(crate) fn new(mut left: L, mut right: R, comparison: Comparison<'a, T>) -> Self {
        let left_head = left.next();
        let right_head = right.next();
        Self {
            left,
            right,
            left_head,
            right_head,
            comparison,
        }
    }

    /// Returns `true` once every element of the right side has been consumed.
    pub(crate) const fn right_exhausted(&self) -> bool {
        self.right_head.is_none()
    }
}

impl<'a, T, L, R> Iterator for MergeCursor<'a, T, L, R>
where
    L: Iterator<Item = &'a T>,
    R: Iterator<Item = &'a T>,
{
    type Item = MergeStep;

    fn next(&mut self) -> Option<MergeStep> {
        let left = self.left_head?;
        let right = self.right_head?;
        let step = match self.comparison.compare(left, right) {
            Ordering::Less => {
                self.left_head = self.left.next();
                MergeStep::LeftBehind
            }
            Ordering::Greater => {
                self.right_head = self.right.next();
                MergeStep::RightBehind
            }
            Ordering::Equal => {
                self.left_head = self.left.next();
                self.right_head = self.right.next();
                MergeStep::Matched
            }
        };
        Some(step)
    }
}

impl<'a, T, L, R> std::iter::FusedIterator for MergeCursor<'a, T, L, R>
where
    L: Iterator<Item = &'a T>,
    R: Iterator<Item = &'a T>,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Orderer;
    use rstest::rstest;

    fn natural() -> Comparison<'static, i32> {
        Comparison::Natural(i32::cmp)
    }

    fn walk(left: &[i32], right: &[i32]) -> (Vec<MergeStep>, bool) {
        let mut cursor = MergeCursor::new(left.iter(), right.iter(), natural());
        let steps: Vec<MergeStep> = cursor.by_ref().collect();
        (steps, cursor.right_exhausted())
    }

    #[rstest]
    fn test_interleaved_walk() {
        let (steps, right_exhausted) = walk(&[1, 3, 5], &[2, 3, 4]);
        assert_eq!(
            steps,
            vec![
                MergeStep::LeftBehind,
                MergeStep::RightBehind,
                MergeStep::Matched,
                MergeStep::RightBehind,
            ]
        );
        assert!(right_exhausted);
    }

    #[rstest]
    fn test_left_runs_out_first() {
        let (steps, right_exhausted) = walk(&[1], &[1, 2]);
        assert_eq!(steps, vec![MergeStep::Matched]);
        assert!(!right_exhausted);
    }

    #[rstest]
    fn test_empty_side_ends_immediately() {
        let (steps, right_exhausted) = walk(&[], &[1]);
        assert!(steps.is_empty());
        assert!(!right_exhausted);

        let (steps, right_exhausted) = walk(&[1], &[]);
        assert!(steps.is_empty());
        assert!(right_exhausted);
    }

    #[rstest]
    fn test_walk_under_orderer() {
        let descending = Orderer::new(|left: &i32, right: &i32| right.cmp(left));
        let left = [9, 5, 1];
        let right = [5, 4];
        let cursor = MergeCursor::new(
            left.iter(),
            right.iter(),
            Comparison::ByOrderer(&descending),
        );
        assert_eq!(
            cursor.collect::<Vec<_>>(),
            vec![
                MergeStep::LeftBehind,
                MergeStep::Matched,
                MergeStep::RightBehind,
            ]
        );
    }
}
