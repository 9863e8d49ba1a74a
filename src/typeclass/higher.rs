//! Higher-kinded type encoding.
//!
//! Rust has no native higher-kinded types, so type constructors are encoded
//! with a generic associated type: `F<T>` knows its element type (`Inner`)
//! and how to name `F<B>` for any other element type (`WithType<B>`).

/// A type that is parameterized over one element type.
///
/// Implementing this trait lets [`Functor`](super::Functor) and
/// [`Foldable`](super::Foldable) talk about "the same structure with a
/// different element type".
///
/// # Examples
///
/// ```rust
/// use unrolled::persistent::UnrolledList;
/// use unrolled::typeclass::TypeConstructor;
///
/// fn element_count<F: TypeConstructor>(_: &F) -> &'static str {
///     "one type parameter"
/// }
///
/// let list: UnrolledList<i32> = UnrolledList::new();
/// assert_eq!(element_count(&list), "one type parameter");
/// ```
pub trait TypeConstructor {
    /// The element type of this structure.
    type Inner;

    /// The same structure holding elements of type `B`.
    type WithType<B>;
}
