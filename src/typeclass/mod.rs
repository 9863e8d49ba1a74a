//! Type classes for the algebraic structure of the unrolled list.
//!
//! This module provides the small trait vocabulary that
//! [`UnrolledList`](crate::persistent::UnrolledList) implements:
//!
//! - [`TypeConstructor`]: higher-kinded type encoding via GATs
//! - [`Functor`]: structure-preserving element transformation
//! - [`Foldable`]: collapsing a structure to a single value
//! - [`Semigroup`] / [`Monoid`]: associative combination with identity
//!
//! The [`Sum`] and [`Product`] wrappers give numeric types distinct
//! `Semigroup`/`Monoid` instances for use with folds.

mod foldable;
mod functor;
mod higher;
mod monoid;
mod semigroup;
mod wrappers;

pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::Product;
pub use wrappers::Sum;
