//! Functor type class - mappable structures.

use super::TypeConstructor;

/// A type class for structures whose elements can be transformed while
/// preserving the structure's shape.
///
/// # Laws
///
/// For all `fa`, `f`, `g`:
///
/// ## Identity
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
///
/// # Examples
///
/// ```rust
/// use unrolled::persistent::UnrolledList;
/// use unrolled::typeclass::Functor;
///
/// let list: UnrolledList<i32> = UnrolledList::from_slice(&[1, 2, 3]);
/// let doubled = list.fmap(|element| element * 2);
/// assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
/// ```
pub trait Functor: TypeConstructor {
    /// Transforms every element, consuming the structure.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Transforms every element by reference, leaving the original intact.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;
}
