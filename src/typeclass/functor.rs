//! Functor type class - mapping over container values.
//!
//! A `Functor` can have a function applied to the value(s) it holds while
//! its shape stays exactly the same: no elements are added, removed or
//! reordered, and a sum type never changes variant.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use validus::typeclass::Functor;
//!
//! let some_value: Option<i32> = Some(5);
//! let transformed: Option<String> = some_value.fmap(|n| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//!
//! let numbers = vec![1, 2, 3];
//! assert_eq!(numbers.fmap(|n| n * 2), vec![2, 4, 6]);
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// The mapping function is `FnMut` so that containers holding several
/// values (`Vec`, `NonEmptyList`) transform every one of them. Containers
/// holding at most one value call it at most once.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
///
/// # Examples
///
/// ```rust
/// use validus::typeclass::Functor;
///
/// let x: Option<i32> = Some(5);
/// let y: Option<String> = x.fmap(|n| n.to_string());
/// assert_eq!(y, Some("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to every value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::typeclass::Functor;
    ///
    /// let x: Result<i32, String> = Ok(5);
    /// assert_eq!(x.fmap(|n| n * 2), Ok(10));
    ///
    /// let y: Result<i32, String> = Err("boom".to_string());
    /// assert_eq!(y.fmap(|n| n * 2), Err("boom".to_string()));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Replaces every value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::typeclass::Functor;
    ///
    /// assert_eq!(Some(5).replace("replaced"), Some("replaced"));
    /// assert_eq!(vec![1, 2].replace('x'), vec!['x', 'x']);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone,
    {
        self.fmap(move |_| value.clone())
    }

    /// Discards the values inside the functor, keeping only its shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::typeclass::Functor;
    ///
    /// assert_eq!(Some(5).void(), Some(()));
    /// assert_eq!(None::<i32>.void(), None);
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        self.map(function)
    }
}

impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnMut(T) -> B,
    {
        self.map(function)
    }
}

impl<T> Functor for Vec<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }
}
