//! Type class instances for `Validation`.
//!
//! Each instance delegates to the inherent method of the same meaning, so
//! generic code over `Functor` or `Applicative` behaves exactly like direct
//! calls. `Applicative` and `Monad` require `E: Semigroup`; `Functor` and
//! `Bifunctor` work for any error type.

use super::Validation;
use crate::typeclass::{Applicative, Bifunctor, Functor, Monad, Semigroup, TypeConstructor};

impl<E, A> TypeConstructor for Validation<E, A> {
    type Inner = A;
    type WithType<B> = Validation<E, B>;
}

impl<E, A> Functor for Validation<E, A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Validation<E, B>
    where
        F: FnMut(A) -> B,
    {
        self.map(function)
    }
}

/// Accumulating applicative: when both sides fail, the errors are combined.
impl<E: Semigroup, A> Applicative for Validation<E, A> {
    #[inline]
    fn pure<B>(value: B) -> Validation<E, B> {
        Validation::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Validation<E, B>, function: F) -> Validation<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        Self::map2(self, other, function)
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Validation<E, B>,
        third: Validation<E, C>,
        function: F,
    ) -> Validation<E, D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Self::map3(self, second, third, function)
    }

    #[inline]
    fn apply<B, Output>(self, other: Validation<E, B>) -> Validation<E, Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.ap(other)
    }
}

/// Short-circuiting: the first failure wins and later steps are skipped.
impl<E: Semigroup, A> Monad for Validation<E, A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> Validation<E, B>,
    {
        Self::flat_map(self, function)
    }
}

impl<E, A> Bifunctor<E, A> for Validation<E, A> {
    type Target<C, D> = Validation<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Validation<C, D>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(A) -> D,
    {
        match self {
            Self::Success(value) => Validation::Success(second_function(value)),
            Self::Failure(error) => Validation::Failure(first_function(error)),
        }
    }
}
