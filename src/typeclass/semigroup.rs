//! Semigroup type class - types with an associative binary operation.

use std::ops::{Add, Mul};

use super::wrappers::{Product, Sum};

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// For all `a`, `b`, `c`:
///
/// ## Associativity
///
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
///
/// # Examples
///
/// ```rust
/// use unrolled::typeclass::Semigroup;
///
/// let hello = String::from("Hello, ");
/// let world = String::from("World!");
/// assert_eq!(hello.combine(world), "Hello, World!");
///
/// let vec1 = vec![1, 2];
/// let vec2 = vec![3, 4];
/// assert_eq!(vec1.combine(vec2), vec![1, 2, 3, 4]);
/// ```
pub trait Semigroup {
    /// Combines two values associatively.
    #[must_use]
    fn combine(self, other: Self) -> Self;
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl<T: Add<Output = T>> Semigroup for Sum<T> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<T: Mul<Output = T>> Semigroup for Product<T> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}
