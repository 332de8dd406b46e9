//! # setwise
//!
//! Set-relation queries over ordered and unordered containers, plus a
//! lexicographic multi-comparator and a lazy filtering iterator.
//!
//! ## Overview
//!
//! - **Relation queries**: `contains_some`, `contains_all`, `contains_none`
//!   and the Venn-diagram bitmask `containment_relation`. Sorted containers
//!   sharing an ordering are compared with a linear merge; everything else
//!   falls back to membership probing.
//! - **Containers**: the [`Container`](container::Container) contract, an
//!   explicit [`Orderer`](container::Orderer), a sorted vector set and
//!   implementations for the std collections.
//! - **Multi-comparator**: compose per-field comparators into one ordering
//!   whose result also reports which comparator decided.
//! - **Filtered iteration**: a lookahead-buffered filter over any iterator,
//!   with prefix and regular-expression matchers.
//! - **Helpers**: destructive removal by matcher, best-element selection,
//!   string joining and char spans.
//!
//! ## Feature Flags
//!
//! - `container`: the `Container` trait and its implementations
//! - `relation`: relation queries (implies `container`)
//! - `compare`: `MultiComparator`
//! - `filter`: `Matcher` and `FilteredIter`
//! - `regex`: `RegexMatcher`
//! - `collection`: destructive collection helpers
//! - `text`: string helpers
//! - `serde`: serialization of relation codes and sorted sets
//! - `arc`: thread-safe `Orderer` (`Arc` instead of `Rc`)
//! - `full`: Enable all features except `arc`
//!
//! ## Example
//!
//! ```rust
//! use setwise::prelude::*;
//! use std::collections::BTreeSet;
//!
//! let a: BTreeSet<i32> = [1, 3, 5].into_iter().collect();
//! let b: BTreeSet<i32> = [2, 3, 4].into_iter().collect();
//!
//! assert!(contains_some(&a, &b));
//! assert!(!contains_all(&a, &b));
//! assert_eq!(containment_relation(&a, &b), ContainmentRelation::PROPER_OVERLAPS);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use setwise::prelude::*;
/// ```
pub mod prelude {

    pub use crate::error::{Error, Result};

    #[cfg(feature = "container")]
    pub use crate::container::*;

    #[cfg(feature = "relation")]
    pub use crate::relation::*;

    #[cfg(feature = "compare")]
    pub use crate::compare::*;

    #[cfg(feature = "filter")]
    pub use crate::filter::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "text")]
    pub use crate::text::*;
}

pub mod error;

pub use error::{Error, Result};

#[cfg(feature = "container")]
pub mod container;

#[cfg(feature = "relation")]
pub mod relation;

#[cfg(feature = "compare")]
pub mod compare;

#[cfg(feature = "filter")]
pub mod filter;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "text")]
pub mod text;
