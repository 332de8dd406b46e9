//! Explicit comparators attached to sorted containers.

use std::cmp::Ordering;

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

/// A comparison function usable as an [`Orderer`].
///
/// Blanket-implemented for every `Fn(&T, &T) -> Ordering`. With the `arc`
/// feature the function must also be `Send + Sync`.
#[cfg(feature = "arc")]
pub trait CompareFn<T: ?Sized>: Fn(&T, &T) -> Ordering + Send + Sync {}

#[cfg(feature = "arc")]
impl<T: ?Sized, F> CompareFn<T> for F where F: Fn(&T, &T) -> Ordering + Send + Sync {}

/// A comparison function usable as an [`Orderer`].
///
/// Blanket-implemented for every `Fn(&T, &T) -> Ordering`. With the `arc`
/// feature the function must also be `Send + Sync`.
#[cfg(not(feature = "arc"))]
pub trait CompareFn<T: ?Sized>: Fn(&T, &T) -> Ordering {}

#[cfg(not(feature = "arc"))]
impl<T: ?Sized, F> CompareFn<T> for F where F: Fn(&T, &T) -> Ordering {}

/// A shared comparator that defines the order of a sorted container.
///
/// Cloning an `Orderer` shares the underlying function, and the clones are
/// the *same* orderer as far as [`Orderer::same`] is concerned. Two orderers
/// built separately are never the same, even from identical closures. The
/// relation queries only merge two sorted containers whose orderers are the
/// same instance.
///
/// # Examples
///
/// ```rust
/// use setwise::container::Orderer;
/// use std::cmp::Ordering;
///
/// let descending = Orderer::new(|left: &i32, right: &i32| right.cmp(left));
/// assert_eq!(descending.compare(&1, &2), Ordering::Greater);
///
/// let shared = descending.clone();
/// assert!(Orderer::same(&descending, &shared));
///
/// let lookalike = Orderer::new(|left: &i32, right: &i32| right.cmp(left));
/// assert!(!Orderer::same(&descending, &lookalike));
/// ```
pub struct Orderer<T: ?Sized> {
    function: ReferenceCounter<dyn CompareFn<T>>,
}

impl<T: ?Sized> Orderer<T> {
    /// Wraps a comparison function.
    #[must_use]
    pub fn new<F>(function: F) -> Self
    where
        F: CompareFn<T> + 'static,
    {
        Self {
            function: ReferenceCounter::new(function),
        }
    }

    /// Compares two values.
    #[inline]
    pub fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.function)(left, right)
    }

    /// Returns `true` if both handles refer to the same comparator instance.
    #[inline]
    #[must_use]
    pub fn same(left: &Self, right: &Self) -> bool {
        ReferenceCounter::ptr_eq(&left.function, &right.function)
    }

    /// Returns a new orderer that sorts in the opposite direction.
    ///
    /// The result is a distinct instance and is not [`Orderer::same`] as `self`.
    #[must_use]
    pub fn reversed(&self) -> Self
    where
        T: 'static,
    {
        let inner = self.clone();
        Self::new(move |left: &T, right: &T| inner.compare(right, left))
    }
}

impl<T: Ord + 'static> Orderer<T> {
    /// Returns an orderer that delegates to `Ord::cmp`.
    ///
    /// Each call creates a new instance; share it by cloning.
    #[must_use]
    pub fn natural() -> Self {
        Self::new(T::cmp)
    }
}

impl<T: ?Sized> Clone for Orderer<T> {
    fn clone(&self) -> Self {
        Self {
            function: ReferenceCounter::clone(&self.function),
        }
    }
}

impl<T: ?Sized> std::fmt::Debug for Orderer<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Orderer")
            .field(
                "instance",
                &ReferenceCounter::as_ptr(&self.function).cast::<()>(),
            )
            .finish()
    }
}

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Orderer<i32>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Orderer<i32>: Send, Sync);
