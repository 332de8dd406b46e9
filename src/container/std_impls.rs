//! `Container` implementations for the standard collections.

use std::collections::{BTreeSet, HashSet, VecDeque, btree_set, hash_set, vec_deque};
use std::hash::{BuildHasher, Hash};
use std::slice;

use super::{Container, Sortedness};

impl<T: Ord> Container for BTreeSet<T> {
    type Item = T;
    type Iter<'a>
        = btree_set::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        Self::iter(self)
    }

    #[inline]
    fn contains(&self, item: &T) -> bool {
        Self::contains(self, item)
    }

    fn sortedness(&self) -> Sortedness<'_, T> {
        Sortedness::natural()
    }
}

impl<T, S> Container for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    type Item = T;
    type Iter<'a>
        = hash_set::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        Self::iter(self)
    }

    #[inline]
    fn contains(&self, item: &T) -> bool {
        Self::contains(self, item)
    }
}

impl<T: PartialEq> Container for Vec<T> {
    type Item = T;
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }

    #[inline]
    fn contains(&self, item: &T) -> bool {
        self.as_slice().contains(item)
    }
}

impl<T: PartialEq> Container for VecDeque<T> {
    type Item = T;
    type Iter<'a>
        = vec_deque::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        Self::iter(self)
    }

    #[inline]
    fn contains(&self, item: &T) -> bool {
        Self::contains(self, item)
    }
}

impl<T: PartialEq> Container for [T] {
    type Item = T;
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        <[T]>::iter(self)
    }

    #[inline]
    fn contains(&self, item: &T) -> bool {
        <[T]>::contains(self, item)
    }
}

impl<T: PartialEq, const N: usize> Container for [T; N] {
    type Item = T;
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }

    #[inline]
    fn contains(&self, item: &T) -> bool {
        self.as_slice().contains(item)
    }
}
