//! Monoid type class - semigroups with an identity element.

use std::ops::{Add, Mul};

use super::Semigroup;
use super::wrappers::{Product, Sum};

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// For all `a`:
///
/// ## Left identity
///
/// ```text
/// Monoid::empty().combine(a) == a
/// ```
///
/// ## Right identity
///
/// ```text
/// a.combine(Monoid::empty()) == a
/// ```
///
/// # Examples
///
/// ```rust
/// use unrolled::typeclass::{Monoid, Semigroup};
///
/// let value = String::from("identity");
/// assert_eq!(String::empty().combine(value.clone()), value);
/// ```
pub trait Monoid: Semigroup {
    /// The identity element for [`Semigroup::combine`].
    #[must_use]
    fn empty() -> Self;
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Add<Output = T> + Default> Monoid for Sum<T> {
    fn empty() -> Self {
        Self(T::default())
    }
}

impl<T: Mul<Output = T> + From<u8>> Monoid for Product<T> {
    fn empty() -> Self {
        Self(T::from(1))
    }
}
