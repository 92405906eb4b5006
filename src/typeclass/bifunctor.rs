//! Bifunctor type class - mapping over two type parameters.
//!
//! For error-carrying types the first parameter is the error and the second
//! the success value, so `first` rewrites errors and `second` agrees with
//! `Functor::fmap`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use validus::typeclass::{Bifunctor, Functor};
//!
//! let result: Result<i32, String> = Ok(42);
//! let by_fmap = result.clone().fmap(|x| x * 2);
//! let by_second = result.second(|x| x * 2);
//! assert_eq!(by_fmap, by_second);
//!
//! let failed: Result<i32, String> = Err("bad".to_string());
//! assert_eq!(failed.first(|e| e.len()), Err(3));
//! ```

/// A type class for types with two type parameters that can have functions
/// mapped over both.
pub trait Bifunctor<A, B> {
    /// The same type constructor applied to `C` and `D`.
    type Target<C, D>;

    /// Applies one function to whichever side is present.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Maps the first (error) parameter only.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        Self: Sized,
        F: FnOnce(A) -> C,
    {
        self.bimap(function, |value| value)
    }

    /// Maps the second (success) parameter only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        Self: Sized,
        G: FnOnce(B) -> D,
    {
        self.bimap(|value| value, function)
    }
}

/// `Result<T, E>` is a `Bifunctor<E, T>`: `first` is `map_err`, `second` is `map`.
impl<T, E> Bifunctor<E, T> for Result<T, E> {
    type Target<C, D> = Result<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Result<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        match self {
            Ok(value) => Ok(second_function(value)),
            Err(error) => Err(first_function(error)),
        }
    }
}
