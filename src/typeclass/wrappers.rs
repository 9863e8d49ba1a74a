//! Numeric wrapper types for different algebraic operations.
//!
//! The same underlying number type can be combined by addition or by
//! multiplication; these newtypes pick one interpretation each so that
//! `Semigroup`/`Monoid` instances stay unambiguous.

/// A newtype wrapper that represents the additive semigroup/monoid.
///
/// `Sum(a).combine(Sum(b))` equals `Sum(a + b)`; the identity is `Sum(0)`.
///
/// # Examples
///
/// ```rust
/// use unrolled::typeclass::{Semigroup, Sum};
///
/// assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sum<T>(pub T);

impl<T> Sum<T> {
    /// Wraps a value in the additive interpretation.
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Unwraps the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// A newtype wrapper that represents the multiplicative semigroup/monoid.
///
/// `Product(a).combine(Product(b))` equals `Product(a * b)`; the identity
/// is `Product(1)`.
///
/// # Examples
///
/// ```rust
/// use unrolled::typeclass::{Product, Semigroup};
///
/// assert_eq!(Product(3).combine(Product(5)), Product(15));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<T>(pub T);

impl<T> Product<T> {
    /// Wraps a value in the multiplicative interpretation.
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Unwraps the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}
