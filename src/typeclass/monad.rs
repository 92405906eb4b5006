//! Monad type class - sequencing dependent computations.
//!
//! `Monad` extends `Applicative` with `flat_map`, where the next computation
//! is chosen from the value produced by the previous one. Because the
//! second step does not exist until the first succeeds, `flat_map` always
//! short-circuits on failure. Prefer `Applicative` combinators when the
//! steps are independent and every error should be reported.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use validus::typeclass::Monad;
//!
//! fn parse_positive(s: &str) -> Option<i32> {
//!     s.parse::<i32>().ok().filter(|&n| n > 0)
//! }
//!
//! let result = Some("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Some(n * 2));
//! assert_eq!(result, Some(84));
//! ```

use super::applicative::Applicative;

/// A type class for types that support sequencing of computations.
///
/// # Examples
///
/// ```rust
/// use validus::typeclass::Monad;
///
/// let x = Some(5);
/// assert_eq!(x.flat_map(|n| Some(n * 2)), Some(10));
/// ```
pub trait Monad: Applicative {
    /// Applies a function returning a new monad to the inner value and
    /// flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::typeclass::Monad;
    ///
    /// let z = Some(5);
    /// assert_eq!(z.flat_map(|n| if n > 10 { Some(n) } else { None }), None);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` matching `Option::and_then`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first value.
    ///
    /// A failure in `self` propagates and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).then(Some("hello")), Some("hello"));
    /// assert_eq!(None::<i32>.then(Some("hello")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

/// Stops at the first `None`. `Validation::flat_map` short-circuits the same
/// way, since the next step needs the previous value.
impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

impl<T, E> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        self.and_then(function)
    }
}
