//! Error types for setwise.
//!
//! Relation queries are total and never fail. The errors here cover the
//! few operations that can: removal through a read-only filtered view,
//! compiling a matcher pattern, and decoding a relation code.

use thiserror::Error;

/// Errors produced by setwise operations.
///
/// # Examples
///
/// ```rust
/// use setwise::Error;
///
/// let error = Error::UnsupportedOperation {
///     view: "FilteredIter",
///     operation: "remove",
/// };
/// assert_eq!(format!("{error}"), "FilteredIter does not support remove");
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The operation is not available on this view.
    #[error("{view} does not support {operation}")]
    UnsupportedOperation {
        /// Name of the view that rejected the operation.
        view: &'static str,
        /// Name of the rejected operation.
        operation: &'static str,
    },

    /// A matcher pattern failed to compile.
    #[cfg(feature = "regex")]
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A relation code used bits outside `0..=7`.
    #[error("invalid containment relation bits: {0:#05b}")]
    InvalidRelationBits(u8),
}

/// Result alias with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;
