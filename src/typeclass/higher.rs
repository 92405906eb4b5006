//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Option<_>` or `Validation<E, _>` as type
//! constructors directly. [`TypeConstructor`] records the currently applied
//! type (`Inner`) together with the same constructor applied to any other
//! type (`WithType<B>`), which is all `Functor` and friends need.
//!
//! # Example
//!
//! ```rust
//! use validus::typeclass::TypeConstructor;
//!
//! fn transform_type<T: TypeConstructor>(value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let some_int: Option<i32> = Some(42);
//! let none_string: Option<String> = transform_type(some_int);
//! assert_eq!(none_string, None);
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
///
/// For two-parameter types such as `Result<T, E>` and `Validation<E, A>`
/// the error parameter is fixed and only the success type varies.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}
