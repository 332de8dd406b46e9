//! Destructive helpers over std collections and [`SortedSet`].
//!
//! Unlike the relation queries, everything here mutates its argument in
//! place:
//!
//! | Function            | Effect                                         |
//! |---------------------|------------------------------------------------|
//! | [`remove_matching`] | drops every element the matcher accepts        |
//! | [`retain_matching`] | drops every element the matcher rejects        |
//! | [`remove_keys`]     | drops every listed key from a map              |
//! | [`as_map`]          | inserts pairs into a map, optionally reversed  |
//!
//! [`best_by`] is the odd one out: it consumes an iterator and returns the
//! first strictly best element under a comparator.
//!
//! # Examples
//!
//! ```rust
//! use setwise::collection::{remove_matching, retain_matching};
//! use setwise::filter::PrefixMatcher;
//!
//! let mut paths = vec!["tmp/a", "src/lib.rs", "tmp/b"];
//! remove_matching(&mut paths, PrefixMatcher::new("tmp/"));
//! assert_eq!(paths, vec!["src/lib.rs"]);
//!
//! let mut numbers = vec![1, 2, 3, 4];
//! retain_matching(&mut numbers, |value: &i32| value % 2 == 0).push(6);
//! assert_eq!(numbers, vec![2, 4, 6]);
//! ```
//!
//! [`SortedSet`]: crate::container::SortedSet

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

use tracing::trace;

use crate::container::SortedSet;
use crate::filter::Matcher;

/// A collection that can drop elements in place.
pub trait Retain {
    /// The element type.
    type Item;

    /// Keeps only the elements for which `keep` returns `true`.
    fn retain_by<F>(&mut self, keep: F)
    where
        F: FnMut(&Self::Item) -> bool;

    /// Returns the number of elements.
    fn element_count(&self) -> usize;
}

impl<T> Retain for Vec<T> {
    type Item = T;

    fn retain_by<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.retain(keep);
    }

    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T> Retain for VecDeque<T> {
    type Item = T;

    fn retain_by<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.retain(keep);
    }

    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T, S> Retain for HashSet<T, S> {
    type Item = T;

    fn retain_by<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.retain(keep);
    }

    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T: Ord> Retain for BTreeSet<T> {
    type Item = T;

    fn retain_by<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.retain(keep);
    }

    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T> Retain for SortedSet<T> {
    type Item = T;

    fn retain_by<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.retain(keep);
    }

    fn element_count(&self) -> usize {
        self.len()
    }
}

/// Removes every element of `container` that `matcher` accepts.
///
/// Returns `container` for chaining.
///
/// # Examples
///
/// ```rust
/// use setwise::collection::remove_matching;
/// use std::collections::BTreeSet;
///
/// let mut values: BTreeSet<i32> = (1..=6).collect();
/// remove_matching(&mut values, |value: &i32| *value > 3);
/// assert_eq!(values.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
pub fn remove_matching<C, M>(container: &mut C, matcher: M) -> &mut C
where
    C: Retain + ?Sized,
    M: Matcher<C::Item>,
{
    let before = container.element_count();
    container.retain_by(|item| !matcher.matches(item));
    trace!(
        removed = before - container.element_count(),
        "remove_matching"
    );
    container
}

/// Removes every element of `container` that `matcher` rejects.
///
/// Returns `container` for chaining.
pub fn retain_matching<C, M>(container: &mut C, matcher: M) -> &mut C
where
    C: Retain + ?Sized,
    M: Matcher<C::Item>,
{
    let before = container.element_count();
    container.retain_by(|item| matcher.matches(item));
    trace!(
        removed = before - container.element_count(),
        "retain_matching"
    );
    container
}

/// Which end of an ordering [`best_by`] selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The smallest element wins.
    Least,
    /// The largest element wins.
    Greatest,
}

impl Direction {
    /// Returns `true` if `candidate` compared against the current best by
    /// `ordering` should replace it.
    const fn prefers(self, ordering: Ordering) -> bool {
        matches!(
            (self, ordering),
            (Self::Least, Ordering::Less) | (Self::Greatest, Ordering::Greater)
        )
    }
}

/// Returns the best element of `items` under `compare`.
///
/// Ties keep the earliest element: a later element replaces the current best
/// only if it is strictly better. Returns `None` for an empty input.
///
/// # Examples
///
/// ```rust
/// use setwise::collection::{best_by, Direction};
///
/// let words = ["pear", "fig", "kiwi", "yam"];
/// let by_length = |left: &&str, right: &&str| left.len().cmp(&right.len());
///
/// assert_eq!(best_by(words, by_length, Direction::Least), Some("fig"));
/// assert_eq!(best_by(words, by_length, Direction::Greatest), Some("pear"));
/// assert_eq!(best_by(Vec::<&str>::new(), by_length, Direction::Least), None);
/// ```
pub fn best_by<I, F>(items: I, mut compare: F, direction: Direction) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    items.into_iter().reduce(|best, candidate| {
        if direction.prefers(compare(&candidate, &best)) {
            candidate
        } else {
            best
        }
    })
}

/// A map that can drop entries by key.
pub trait RemoveKey<Q: ?Sized> {
    /// Removes the entry for `key`, returning `true` if one existed.
    fn remove_key(&mut self, key: &Q) -> bool;
}

impl<K, V, S, Q> RemoveKey<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    fn remove_key(&mut self, key: &Q) -> bool {
        self.remove(key).is_some()
    }
}

impl<K, V, Q> RemoveKey<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    fn remove_key(&mut self, key: &Q) -> bool {
        self.remove(key).is_some()
    }
}

/// Removes every key in `keys` from `map`.
///
/// Keys that are absent are ignored. Returns the number of entries removed.
///
/// # Examples
///
/// ```rust
/// use setwise::collection::remove_keys;
/// use std::collections::HashMap;
///
/// let mut ages: HashMap<String, u32> =
///     [("ann".to_string(), 31), ("bob".to_string(), 42)].into_iter().collect();
///
/// assert_eq!(remove_keys(&mut ages, ["bob", "eve"]), 1);
/// assert_eq!(ages.len(), 1);
/// assert!(ages.contains_key("ann"));
/// ```
pub fn remove_keys<'k, M, Q, I>(map: &mut M, keys: I) -> usize
where
    M: RemoveKey<Q> + ?Sized,
    Q: ?Sized + 'k,
    I: IntoIterator<Item = &'k Q>,
{
    keys.into_iter().filter(|key| map.remove_key(*key)).count()
}

/// A map that accepts new entries.
pub trait Insert<K, V> {
    /// Inserts `value` under `key`, returning the value it replaced.
    fn insert_entry(&mut self, key: K, value: V) -> Option<V>;
}

impl<K, V, S> Insert<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn insert_entry(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }
}

impl<K: Ord, V> Insert<K, V> for BTreeMap<K, V> {
    fn insert_entry(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }
}

/// Inserts every `(first, second)` row of `rows` into `target`.
///
/// Rows map `first` to `second`, or `second` to `first` when `reverse` is
/// set. Later rows overwrite earlier rows with the same key. Returns
/// `target` for chaining.
///
/// # Examples
///
/// ```rust
/// use setwise::collection::as_map;
/// use std::collections::BTreeMap;
///
/// let rows = [("en", "English"), ("fr", "French")];
///
/// let mut names = BTreeMap::new();
/// as_map(rows, &mut names, false);
/// assert_eq!(names.get("fr"), Some(&"French"));
///
/// let mut codes = BTreeMap::new();
/// as_map(rows, &mut codes, true);
/// assert_eq!(codes.get("English"), Some(&"en"));
/// ```
pub fn as_map<T, I, M>(rows: I, target: &mut M, reverse: bool) -> &mut M
where
    I: IntoIterator<Item = (T, T)>,
    M: Insert<T, T> + ?Sized,
{
    let mut replaced = 0_usize;
    for (first, second) in rows {
        let (key, value) = if reverse {
            (second, first)
        } else {
            (first, second)
        };
        if target.insert_entry(key, value).is_some() {
            replaced += 1;
        }
    }
    trace!(reverse, replaced, "as_map");
    target
}
