//! # unrolled
//!
//! A persistent (immutable) unrolled linked list for Rust.
//!
//! ## Overview
//!
//! An unrolled linked list stores a small fixed-capacity batch of elements
//! per node instead of a single element, reducing per-element pointer
//! overhead versus a plain cons list. This crate provides a *persistent*
//! rendition: every mutating operation returns a new list, existing
//! references stay valid, and unmodified sub-chains are shared between
//! versions instead of copied.
//!
//! - **Persistent Data Structure**: [`persistent::UnrolledList`], with
//!   `cons`, `remove_first`, `reverse`, `append`, `filter`, `map`,
//!   `intersection`, and `rebalance` as pure operations
//! - **Type Classes**: the minimal algebraic vocabulary the list
//!   implements — Functor, Foldable, Semigroup, Monoid
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Foldable, Semigroup, Monoid)
//! - `persistent`: The unrolled list itself
//! - `arc`: Use `Arc` instead of `Rc` for node sharing (thread-safe)
//! - `serde`: Serialize/Deserialize support (sequence form)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use unrolled::persistent::UnrolledList;
//!
//! let list: UnrolledList<i32> = UnrolledList::from_slice(&[1, 2, 3, 4, 5]);
//! let extended = list.cons(0);
//!
//! // Structural sharing: the original list is preserved
//! assert_eq!(list.len(), 5);
//! assert_eq!(extended.len(), 6);
//! assert_eq!(extended.head(), Some(&0));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use unrolled::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "persistent")]
pub mod persistent;
