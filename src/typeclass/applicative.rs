//! Applicative type class - applying functions within contexts.
//!
//! `Applicative` extends `Functor` with the ability to lift plain values
//! (`pure`) and to combine several *independent* computations (`map2`,
//! `apply`, ...). Because neither side depends on the other, an instance is
//! free to look at both before deciding the outcome. `Option` and `Result`
//! stop at the first failure; `Validation` keeps going and merges every
//! error it sees.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use validus::typeclass::Applicative;
//!
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x, Some(42));
//!
//! let c = Some(1).map2(Some(2), |x, y| x + y);
//! assert_eq!(c, Some(3));
//!
//! assert_eq!(Some(1).product(Some("hello")), Some((1, "hello")));
//! ```

use super::functor::Functor;

/// A type class for types that support lifting values and combining contexts.
///
/// See the module documentation for the laws every instance satisfies.
///
/// # Examples
///
/// ```rust
/// use validus::typeclass::Applicative;
///
/// let sum = Some(3).map2(Some(4), |x, y| x + y);
/// assert_eq!(sum, Some(7));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::typeclass::Applicative;
    ///
    /// let y: Result<String, ()> = <Result<(), ()>>::pure("hello".to_string());
    /// assert_eq!(y, Ok("hello".to_string()));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).map2(Some(2), |x, y| x + y), Some(3));
    /// assert_eq!(Some(1).map2(None::<i32>, |x, y| x + y), None);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::typeclass::Applicative;
    ///
    /// let sum = Some(1).map3(Some(2), Some(3), |x, y, z| x + y + z);
    /// assert_eq!(sum, Some(6));
    /// ```
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates both applicatives and keeps the left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product_left(Some(2)), Some(1));
    /// assert_eq!(Some(1).product_left(None::<i32>), None);
    /// ```
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates both applicatives and keeps the right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product_right(Some(2)), Some(2));
    /// assert_eq!(None::<i32>.product_right(Some(2)), None);
    /// ```
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::typeclass::Applicative;
    ///
    /// let function: Option<fn(i32) -> i32> = Some((|x: i32| x + 1) as fn(i32) -> i32);
    /// assert_eq!(function.apply(Some(5)), Some(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

/// `None` carries no reason, so there is nothing to merge: one missing
/// input empties the whole combination. Reach for `Validation` when the
/// caller needs to know which inputs were missing.
impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.zip(other).map(|(a, b)| function(a, b))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        self.zip(second)
            .zip(third)
            .map(|((a, b), c)| function(a, b, c))
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

/// `Result` is the fail-fast counterpart of `Validation`: when both sides
/// fail, only the left error survives.
impl<T, E> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Ok(a), Ok(b)) => Ok(function(a, b)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Result<B, E>,
        third: Result<C, E>,
        function: F,
    ) -> Result<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Ok(a), Ok(b), Ok(c)) => Ok(function(a, b, c)),
            (Err(error), _, _) | (_, Err(error), _) | (_, _, Err(error)) => Err(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Result<B, E>) -> Result<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}
