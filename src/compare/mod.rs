//! Composite orderings.
//!
//! [`MultiComparator`] chains comparators by priority: the first comparator
//! that tells two values apart decides. Its [`Rank`] result keeps the index
//! of that comparator, which makes a composite ordering easy to debug.
//!
//! # Examples
//!
//! ```rust
//! use setwise::compare::MultiComparator;
//! use setwise::container::{Orderer, SortedSet};
//!
//! #[derive(Debug, PartialEq)]
//! struct Locale {
//!     language: &'static str,
//!     region: &'static str,
//! }
//!
//! let by_language_then_region = MultiComparator::empty()
//!     .then(|left: &Locale, right: &Locale| left.language.cmp(right.language))
//!     .then(|left: &Locale, right: &Locale| left.region.cmp(right.region));
//!
//! let fr_ca = Locale { language: "fr", region: "CA" };
//! let fr_fr = Locale { language: "fr", region: "FR" };
//! assert_eq!(by_language_then_region.compare(&fr_ca, &fr_fr).discriminator(), Some(1));
//!
//! let locales = SortedSet::from_iter_with(Orderer::from(by_language_then_region), [fr_fr, fr_ca]);
//! assert_eq!(locales.first().map(|locale| locale.region), Some("CA"));
//! ```

mod multi_comparator;
mod rank;

pub use multi_comparator::BoxedComparator;
pub use multi_comparator::MultiComparator;
pub use rank::Rank;
