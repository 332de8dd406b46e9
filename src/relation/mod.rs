//! Set-relation queries over arbitrary containers.
//!
//! This module answers "do A and B overlap?", "does A contain all of B?"
//! and the combined Venn-diagram question for any two [`Container`]s with
//! the same element type:
//!
//! - [`contains_some`]: A ∩ B ≠ ∅
//! - [`contains_all`]: A ⊇ B
//! - [`contains_none`]: A ∩ B = ∅
//! - [`containment_relation`]: all of the above as a [`ContainmentRelation`]
//!
//! # Evaluation Modes
//!
//! `contains_some` and `contains_all` inspect the [`Sortedness`] of both
//! arguments on every call:
//!
//! | Left             | Right                 | Mode  | Cost                |
//! |------------------|-----------------------|-------|---------------------|
//! | natural          | natural               | merge | O(n + m)            |
//! | orderer `o`      | the same `o` instance | merge | O(n + m)            |
//! | anything else    |                       | probe | O(n · cost(contains)) |
//!
//! Both modes give the same answer whenever merge mode is applicable.
//! `containment_relation` always probes.
//!
//! # Examples
//!
//! ```rust
//! use setwise::relation::{containment_relation, contains_all, contains_some};
//! use std::collections::BTreeSet;
//!
//! let a: BTreeSet<i32> = [1, 2].into_iter().collect();
//! let b: BTreeSet<i32> = BTreeSet::new();
//!
//! assert!(contains_all(&a, &b));
//! assert!(!contains_some(&a, &b));
//! assert_eq!(containment_relation(&a, &b).bits(), 4);
//! ```
//!
//! [`Container`]: crate::container::Container
//! [`Sortedness`]: crate::container::Sortedness

mod code;
mod merge;
mod query;

pub use code::ContainmentRelation;
pub use query::containment_relation;
pub use query::contains_all;
pub use query::contains_none;
pub use query::contains_some;
