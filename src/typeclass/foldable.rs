//! Foldable type class - structures that can be collapsed to a value.

use super::TypeConstructor;

/// A type class for structures that can be folded element by element into
/// a single result.
///
/// `fold_left` visits elements in the structure's natural order and is the
/// canonical "reduce": seeded with an initial accumulator, it returns that
/// seed unchanged for an empty structure.
///
/// # Examples
///
/// ```rust
/// use unrolled::persistent::UnrolledList;
/// use unrolled::typeclass::Foldable;
///
/// let list: UnrolledList<i32> = UnrolledList::from_slice(&[1, 2, 3, 4]);
/// let sum = list.fold_left(0, |accumulator, element| accumulator + element);
/// assert_eq!(sum, 10);
///
/// let empty: UnrolledList<i32> = UnrolledList::new();
/// assert_eq!(empty.fold_left(0, |accumulator, element| accumulator + element), 0);
/// ```
pub trait Foldable: TypeConstructor {
    /// Left fold: `state = function(state, element)` per element, front to back.
    fn fold_left<B, F>(self, initial: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Right fold: combines elements back to front.
    fn fold_right<B, F>(self, initial: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// The number of elements in the structure.
    fn length(&self) -> usize;

    /// Returns `true` if the structure holds no elements.
    fn is_empty(&self) -> bool {
        self.length() == 0
    }
}
