//! Persistent (immutable) unrolled linked list.
//!
//! This module provides [`UnrolledList`], an immutable sequence in which
//! each node stores a small fixed-capacity batch of elements. Structural
//! sharing ensures that operations like prepending, removing, or appending
//! create new versions without copying unchanged sub-chains.
//!
//! # Structural Sharing
//!
//! ```rust
//! use unrolled::persistent::UnrolledList;
//!
//! let list = UnrolledList::from_slice(&[1, 2, 3]);
//! let extended = list.cons(0);
//!
//! assert_eq!(list.len(), 3);     // Original unchanged
//! assert_eq!(extended.len(), 4); // New list with prepended element
//! ```

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

mod unrolled;

pub use unrolled::DEFAULT_CHUNK_CAPACITY;
pub use unrolled::UnrolledList;
pub use unrolled::UnrolledListIntoIterator;
pub use unrolled::UnrolledListIterator;
pub use unrolled::ZeroChunkCapacity;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod reference_counter_tests {
    use super::ReferenceCounter;
    use rstest::rstest;

    #[rstest]
    fn test_reference_counter_clone() {
        let reference_counter: ReferenceCounter<i32> = ReferenceCounter::new(42);
        let reference_counter_clone = reference_counter.clone();
        assert_eq!(*reference_counter, *reference_counter_clone);
    }

    #[rstest]
    fn test_reference_counter_strong_count() {
        let reference_counter: ReferenceCounter<i32> = ReferenceCounter::new(42);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
        let reference_counter_clone = reference_counter.clone();
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 2);
        drop(reference_counter_clone);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
    }
}
