//! The signed result of a multi-comparator.

use std::cmp::Ordering;

/// The outcome of [`MultiComparator::compare`].
///
/// Zero when every comparator found the pair equal. Otherwise `±(i + 1)`
/// where `i` is the index of the first comparator that told the pair apart,
/// positive when the left value sorts after the right one.
///
/// # Examples
///
/// ```rust
/// use setwise::compare::Rank;
/// use std::cmp::Ordering;
///
/// let rank = Rank::decided(1, Ordering::Less);
/// assert_eq!(rank.get(), -2);
/// assert_eq!(rank.discriminator(), Some(1));
/// assert_eq!(rank.ordering(), Ordering::Less);
///
/// assert_eq!(Rank::EQUAL.discriminator(), None);
/// ```
///
/// [`MultiComparator::compare`]: super::MultiComparator::compare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rank(i32);

impl Rank {
    /// No comparator distinguished the pair.
    pub const EQUAL: Self = Self(0);

    /// The rank for comparator `index` returning `ordering`.
    ///
    /// Indices beyond `i32::MAX - 1` saturate.
    #[must_use]
    pub fn decided(index: usize, ordering: Ordering) -> Self {
        let magnitude = i32::try_from(index.saturating_add(1)).unwrap_or(i32::MAX);
        match ordering {
            Ordering::Less => Self(-magnitude),
            Ordering::Equal => Self::EQUAL,
            Ordering::Greater => Self(magnitude),
        }
    }

    /// Returns the raw signed rank.
    #[inline]
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Returns the sign of the rank as an `Ordering`.
    #[inline]
    #[must_use]
    pub const fn ordering(self) -> Ordering {
        if self.0 < 0 {
            Ordering::Less
        } else if self.0 > 0 {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Returns the index of the comparator that decided, if any.
    #[must_use]
    pub fn discriminator(self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        usize::try_from(self.0.unsigned_abs()).ok().map(|magnitude| magnitude - 1)
    }

    /// Returns `true` if no comparator distinguished the pair.
    #[inline]
    #[must_use]
    pub const fn is_equal(self) -> bool {
        self.0 == 0
    }
}

impl From<Rank> for i32 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl From<Rank> for Ordering {
    fn from(rank: Rank) -> Self {
        rank.ordering()
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
