//! The Venn-diagram relation code.

use std::ops::{BitAnd, BitOr, BitOrAssign};

use crate::error::Error;

/// A 3-bit summary of how two containers relate.
///
/// Each bit records that one region of the Venn diagram of A and B is
/// non-empty:
///
/// | Bit              | Value | Meaning             |
/// |------------------|-------|---------------------|
/// | `NOT_SUPERSET`   | 1     | B \ A is non-empty  |
/// | `NOT_DISJOINT`   | 2     | A ∩ B is non-empty  |
/// | `NOT_SUBSET`     | 4     | A \ B is non-empty  |
///
/// Relations are read back by masking: A ⊇ B iff `NOT_SUPERSET` is clear,
/// A ⊆ B iff `NOT_SUBSET` is clear, A = B iff both are clear, and A and B
/// are disjoint iff `NOT_DISJOINT` is clear.
///
/// # Examples
///
/// ```rust
/// use setwise::relation::ContainmentRelation;
///
/// let relation = ContainmentRelation::NOT_SUBSET | ContainmentRelation::NOT_DISJOINT;
/// assert_eq!(relation, ContainmentRelation::PROPER_SUPERSET);
/// assert!(relation.is_superset());
/// assert!(!relation.is_subset());
/// assert!(relation.overlaps());
/// assert_eq!(relation.bits(), 6);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct ContainmentRelation(u8);

impl ContainmentRelation {
    /// Both containers are empty.
    pub const ALL_EMPTY: Self = Self(0);
    /// Some element of B is missing from A.
    pub const NOT_SUPERSET: Self = Self(1);
    /// A and B share at least one element.
    pub const NOT_DISJOINT: Self = Self(2);
    /// Some element of A is missing from B.
    pub const NOT_SUBSET: Self = Self(4);
    /// Mask of the bits that must be clear for A = B.
    pub const NOT_EQUALS: Self = Self(Self::NOT_SUBSET.0 | Self::NOT_SUPERSET.0);
    /// A is a proper subset of B.
    pub const PROPER_SUBSET: Self = Self(Self::NOT_DISJOINT.0 | Self::NOT_SUPERSET.0);
    /// A is a proper superset of B.
    pub const PROPER_SUPERSET: Self = Self(Self::NOT_SUBSET.0 | Self::NOT_DISJOINT.0);
    /// A and B overlap and each has elements the other lacks.
    pub const PROPER_OVERLAPS: Self =
        Self(Self::NOT_SUBSET.0 | Self::NOT_DISJOINT.0 | Self::NOT_SUPERSET.0);

    const ALL_BITS: u8 = Self::PROPER_OVERLAPS.0;

    /// Returns the raw bitmask.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Builds a relation from a raw bitmask.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRelationBits`] if any bit above the third is set.
    pub fn from_bits(bits: u8) -> Result<Self, Error> {
        if bits & !Self::ALL_BITS == 0 {
            Ok(Self(bits))
        } else {
            Err(Error::InvalidRelationBits(bits))
        }
    }

    /// Returns `true` if every bit of `other` is set in `self`.
    #[inline]
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if no bit of `other` is set in `self`.
    #[inline]
    #[must_use]
    pub const fn excludes(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    /// A ⊇ B.
    #[inline]
    #[must_use]
    pub const fn is_superset(self) -> bool {
        self.excludes(Self::NOT_SUPERSET)
    }

    /// A ⊆ B.
    #[inline]
    #[must_use]
    pub const fn is_subset(self) -> bool {
        self.excludes(Self::NOT_SUBSET)
    }

    /// A = B.
    #[inline]
    #[must_use]
    pub const fn is_equal(self) -> bool {
        self.excludes(Self::NOT_EQUALS)
    }

    /// A ∩ B = ∅.
    #[inline]
    #[must_use]
    pub const fn is_disjoint(self) -> bool {
        self.excludes(Self::NOT_DISJOINT)
    }

    /// A ∩ B ≠ ∅.
    #[inline]
    #[must_use]
    pub const fn overlaps(self) -> bool {
        !self.is_disjoint()
    }

    /// The relation of B to A: the subset and superset bits trade places.
    #[must_use]
    pub const fn swapped(self) -> Self {
        let superset = self.0 & Self::NOT_SUPERSET.0;
        let subset = self.0 & Self::NOT_SUBSET.0;
        Self((self.0 & Self::NOT_DISJOINT.0) | (superset << 2) | (subset >> 2))
    }
}

static_assertions::const_assert_eq!(ContainmentRelation::NOT_EQUALS.bits(), 5);
static_assertions::const_assert_eq!(ContainmentRelation::PROPER_SUBSET.bits(), 3);
static_assertions::const_assert_eq!(ContainmentRelation::PROPER_SUPERSET.bits(), 6);
static_assertions::const_assert_eq!(ContainmentRelation::PROPER_OVERLAPS.bits(), 7);

impl BitOr for ContainmentRelation {
    type Output = Self;

    fn bitor(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl BitOrAssign for ContainmentRelation {
    fn bitor_assign(&mut self, other: Self) {
        self.0 |= other.0;
    }
}

impl BitAnd for ContainmentRelation {
    type Output = Self;

    fn bitand(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }
}

impl From<ContainmentRelation> for u8 {
    fn from(relation: ContainmentRelation) -> Self {
        relation.0
    }
}

impl TryFrom<u8> for ContainmentRelation {
    type Error = Error;

    fn try_from(bits: u8) -> Result<Self, Error> {
        Self::from_bits(bits)
    }
}

impl std::fmt::Debug for ContainmentRelation {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "ContainmentRelation({self})")
    }
}

/// Lists the set bits by name, or `ALL_EMPTY` when none are set.
impl std::fmt::Display for ContainmentRelation {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 == 0 {
            return formatter.write_str("ALL_EMPTY");
        }
        let names = [
            (Self::NOT_SUPERSET, "NOT_SUPERSET"),
            (Self::NOT_DISJOINT, "NOT_DISJOINT"),
            (Self::NOT_SUBSET, "NOT_SUBSET"),
        ];
        let mut first = true;
        for (flag, name) in names {
            if self.contains(flag) {
                if !first {
                    formatter.write_str(" | ")?;
                }
                formatter.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ContainmentRelation::ALL_EMPTY, true, true, true, true)]
    #[case(ContainmentRelation::NOT_SUPERSET, false, true, false, true)]
    #[case(ContainmentRelation::NOT_SUBSET, true, false, false, true)]
    #[case(ContainmentRelation::NOT_DISJOINT, true, true, true, false)]
    #[case(ContainmentRelation::PROPER_SUBSET, false, true, false, false)]
    #[case(ContainmentRelation::PROPER_SUPERSET, true, false, false, false)]
    #[case(ContainmentRelation::PROPER_OVERLAPS, false, false, false, false)]
    fn test_derived_predicates(
        #[case] relation: ContainmentRelation,
        #[case] superset: bool,
        #[case] subset: bool,
        #[case] equal: bool,
        #[case] disjoint: bool,
    ) {
        assert_eq!(relation.is_superset(), superset);
        assert_eq!(relation.is_subset(), subset);
        assert_eq!(relation.is_equal(), equal);
        assert_eq!(relation.is_disjoint(), disjoint);
        assert_eq!(relation.overlaps(), !disjoint);
    }

    #[rstest]
    fn test_from_bits_accepts_three_bits() {
        for bits in 0..=7 {
            assert_eq!(ContainmentRelation::from_bits(bits).unwrap().bits(), bits);
        }
    }

    #[rstest]
    #[case(8)]
    #[case(9)]
    #[case(255)]
    fn test_from_bits_rejects_high_bits(#[case] bits: u8) {
        assert!(matches!(
            ContainmentRelation::from_bits(bits),
            Err(Error::InvalidRelationBits(rejected)) if rejected == bits
        ));
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 4)]
    #[case(2, 2)]
    #[case(3, 6)]
    #[case(4, 1)]
    #[case(5, 5)]
    #[case(7, 7)]
    fn test_swapped_trades_subset_and_superset(#[case] bits: u8, #[case] expected: u8) {
        let relation = ContainmentRelation::from_bits(bits).unwrap();
        assert_eq!(relation.swapped().bits(), expected);
        assert_eq!(relation.swapped().swapped(), relation);
    }

    #[rstest]
    fn test_bit_operators() {
        let mut relation = ContainmentRelation::ALL_EMPTY;
        relation |= ContainmentRelation::NOT_SUBSET;
        relation |= ContainmentRelation::NOT_DISJOINT;
        assert_eq!(relation, ContainmentRelation::PROPER_SUPERSET);
        assert_eq!(
            relation & ContainmentRelation::NOT_EQUALS,
            ContainmentRelation::NOT_SUBSET
        );
        assert_eq!(u8::from(relation), 6);
    }

    #[rstest]
    #[case(ContainmentRelation::ALL_EMPTY, "ALL_EMPTY")]
    #[case(ContainmentRelation::NOT_SUBSET, "NOT_SUBSET")]
    #[case(
        ContainmentRelation::PROPER_OVERLAPS,
        "NOT_SUPERSET | NOT_DISJOINT | NOT_SUBSET"
    )]
    fn test_display(#[case] relation: ContainmentRelation, #[case] expected: &str) {
        assert_eq!(relation.to_string(), expected);
        assert_eq!(format!("{relation:?}"), format!("ContainmentRelation({expected})"));
    }
}
