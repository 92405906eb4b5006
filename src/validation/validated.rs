//! The `Validation` sum type and its combinators.

use std::fmt;

use super::NoSuchElementError;
use crate::compose::identity;
use crate::persistent::NonEmptyList;
use crate::typeclass::Semigroup;

/// The outcome of a check: a value, or the errors that prevented it.
///
/// Unlike `Result`, combining two failed validations with [`ap`](Self::ap)
/// keeps both errors, merged through `E`'s [`Semigroup`] instance in
/// left-to-right order. Use [`flat_map`](Self::flat_map) when a later check
/// genuinely depends on an earlier value; it short-circuits like `Result`.
///
/// The `Semigroup` bound is only required by the combinators that merge
/// errors (`ap` and the functions built on it). A `Validation` with any
/// error type can be created, mapped, inspected and folded.
///
/// # Examples
///
/// ```rust
/// use validus::validation::Validation;
///
/// let name: Validation<Vec<&str>, &str> = Validation::failure(vec!["name is empty"]);
/// let age: Validation<Vec<&str>, u32> = Validation::failure(vec!["age is negative"]);
///
/// let both = name.map2(age, |name, age| (name, age));
/// assert_eq!(both, Validation::failure(vec!["name is empty", "age is negative"]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Validation<E, A> {
    /// A value that passed validation.
    Success(A),
    /// The error, possibly accumulated from several checks.
    Failure(E),
}

/// A `Validation` whose errors are collected in a [`NonEmptyList`].
///
/// Validators producing a single `E` become accumulating ones through
/// [`Validation::into_nel`].
pub type ValidationNel<E, A> = Validation<NonEmptyList<E>, A>;

impl<E, A> Validation<E, A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a successful validation.
    #[inline]
    pub const fn success(value: A) -> Self {
        Self::Success(value)
    }

    /// Creates a failed validation.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns `Success(value)` when `test` holds and `Failure(error)` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::validation::Validation;
    ///
    /// let age = 200;
    /// let checked = Validation::from_condition(age <= 120, age, "Age must be 0..120");
    /// assert_eq!(checked, Validation::failure("Age must be 0..120"));
    /// ```
    #[inline]
    pub fn from_condition(test: bool, value: A, error: E) -> Self {
        if test {
            Self::Success(value)
        } else {
            Self::Failure(error)
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Converts into the value, discarding any error.
    #[inline]
    pub fn into_success(self) -> Option<A> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts into the error, discarding any value.
    #[inline]
    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Returns a reference to the value, if any.
    #[inline]
    pub const fn success_ref(&self) -> Option<&A> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the error, if any.
    #[inline]
    pub const fn failure_ref(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts from `&Validation<E, A>` to `Validation<&E, &A>`.
    #[inline]
    pub const fn as_ref(&self) -> Validation<&E, &A> {
        match self {
            Self::Success(value) => Validation::Success(value),
            Self::Failure(error) => Validation::Failure(error),
        }
    }

    /// Returns the value of a `Success`.
    ///
    /// Reading the value of a `Failure` is a programming error, not a
    /// validation outcome. Match on the variants, or use
    /// [`into_success`](Self::into_success), when either side is possible.
    ///
    /// # Panics
    ///
    /// Panics with [`NoSuchElementError::MissingValue`] if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::validation::Validation;
    ///
    /// let valid: Validation<String, i32> = Validation::success(42);
    /// assert_eq!(valid.unwrap_success(), 42);
    /// ```
    ///
    /// ```should_panic
    /// use validus::validation::Validation;
    ///
    /// let invalid: Validation<&str, i32> = Validation::failure("Error!");
    /// invalid.unwrap_success();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_success(self) -> A {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("{}", NoSuchElementError::MissingValue),
        }
    }

    /// Returns the error of a `Failure`.
    ///
    /// # Panics
    ///
    /// Panics with [`NoSuchElementError::MissingError`] if this is a `Success`.
    #[inline]
    #[track_caller]
    pub fn unwrap_failure(self) -> E {
        match self {
            Self::Success(_) => panic!("{}", NoSuchElementError::MissingError),
            Self::Failure(error) => error,
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Transforms the value of a `Success`. A `Failure` passes through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::validation::Validation;
    ///
    /// let valid: Validation<&str, i32> = Validation::success(42);
    /// assert_eq!(valid.map(|x| x.to_string()), Validation::success("42".to_string()));
    ///
    /// let invalid: Validation<&str, i32> = Validation::failure("e");
    /// assert_eq!(invalid.map(|x| x.to_string()), Validation::failure("e"));
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Success(value) => Validation::Success(function(value)),
            Self::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transforms the error of a `Failure`. A `Success` passes through untouched.
    #[inline]
    pub fn map_failure<E2, F>(self, function: F) -> Validation<E2, A>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Success(value) => Validation::Success(value),
            Self::Failure(error) => Validation::Failure(function(error)),
        }
    }

    /// Chains a validation that depends on the value of this one.
    ///
    /// A `Failure` short-circuits: `function` is not called and no errors
    /// from later steps are collected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::validation::Validation;
    ///
    /// fn parse(input: &str) -> Validation<String, i32> {
    ///     input.parse::<i32>().map_err(|_| format!("{input} is not a number")).into()
    /// }
    ///
    /// fn positive(number: i32) -> Validation<String, i32> {
    ///     Validation::from_condition(number > 0, number, format!("{number} is not positive"))
    /// }
    ///
    /// assert_eq!(parse("7").flat_map(positive), Validation::success(7));
    /// assert_eq!(parse("-7").flat_map(positive), Validation::failure("-7 is not positive".to_string()));
    /// assert_eq!(parse("x").flat_map(positive), Validation::failure("x is not a number".to_string()));
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> Validation<E, B>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Validation::Failure(error),
        }
    }

    /// Collapses both cases into a single value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::validation::Validation;
    ///
    /// let invalid: Validation<Vec<&str>, i32> = Validation::failure(vec!["a", "b"]);
    /// let summary = invalid.fold(|errors| format!("{} errors", errors.len()), |value| value.to_string());
    /// assert_eq!(summary, "2 errors");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_failure: F, on_success: G) -> T
    where
        F: FnOnce(E) -> T,
        G: FnOnce(A) -> T,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts into a `Result`, `Success` becoming `Ok`.
    #[inline]
    pub fn into_result(self) -> Result<A, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Wraps the error in a single-element [`NonEmptyList`].
    ///
    /// This turns a validator reporting one error into one whose errors
    /// accumulate when combined with `ap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::validation::{Validation, ValidationNel};
    ///
    /// let name: ValidationNel<&str, &str> = Validation::failure("Name must not be empty").into_nel();
    /// let age: ValidationNel<&str, u32> = Validation::failure("Age must be 0..120").into_nel();
    ///
    /// let errors = name.map2(age, |name, age| (name, age)).unwrap_failure();
    /// assert_eq!(errors.into_vec(), vec!["Name must not be empty", "Age must be 0..120"]);
    /// ```
    #[inline]
    pub fn into_nel(self) -> ValidationNel<E, A> {
        self.map_failure(NonEmptyList::new)
    }
}

impl<E: Semigroup, A> Validation<E, A> {
    /// Applies the function held by this validation to the value of `other`.
    ///
    /// Both sides are evaluated independently:
    ///
    /// | `self`       | `other`      | result                    |
    /// |--------------|--------------|---------------------------|
    /// | `Success(f)` | `Success(a)` | `Success(f(a))`           |
    /// | `Success(f)` | `Failure(e)` | `Failure(e)`              |
    /// | `Failure(e)` | `Success(a)` | `Failure(e)`              |
    /// | `Failure(x)` | `Failure(y)` | `Failure(x.combine(y))`   |
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::curry;
    /// use validus::validation::Validation;
    ///
    /// let plus = curry!(|a: i32, b: i32| a + b);
    /// let sum: Validation<String, i32> = Validation::success(plus)
    ///     .ap(Validation::success(1))
    ///     .ap(Validation::success(2));
    /// assert_eq!(sum, Validation::success(3));
    /// ```
    ///
    /// The error type must know how to merge:
    ///
    /// ```compile_fail
    /// use validus::validation::Validation;
    ///
    /// let function: Validation<i32, fn(i32) -> i32> = Validation::success(|x| x + 1);
    /// let _ = function.ap(Validation::success(1));
    /// ```
    #[inline]
    pub fn ap<B, C>(self, other: Validation<E, B>) -> Validation<E, C>
    where
        A: FnOnce(B) -> C,
    {
        match (self, other) {
            (Self::Success(function), Validation::Success(value)) => {
                Validation::Success(function(value))
            }
            (Self::Success(_), Validation::Failure(error))
            | (Self::Failure(error), Validation::Success(_)) => Validation::Failure(error),
            (Self::Failure(left), Validation::Failure(right)) => {
                Validation::Failure(left.combine(right))
            }
        }
    }

    /// Runs both validations and keeps the value of `self`.
    ///
    /// Errors from both sides are merged exactly as in [`ap`](Self::ap).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::validation::Validation;
    ///
    /// let email: Validation<Vec<&str>, &str> = Validation::success("bob@x.com");
    /// let check: Validation<Vec<&str>, ()> = Validation::success(());
    /// assert_eq!(email.ap_left(check), Validation::success("bob@x.com"));
    /// ```
    #[inline]
    pub fn ap_left<B>(self, other: Validation<E, B>) -> Self {
        self.map(|value| move |_: B| value).ap(other)
    }

    /// Runs both validations and keeps the value of `other`.
    ///
    /// Errors from both sides are merged exactly as in [`ap`](Self::ap).
    #[inline]
    pub fn ap_right<B>(self, other: Validation<E, B>) -> Validation<E, B> {
        self.map(|_| identity::<B>).ap(other)
    }

    /// Combines two validations with a binary function, accumulating errors.
    #[inline]
    pub fn map2<B, C, F>(self, other: Validation<E, B>, function: F) -> Validation<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.map(|a| move |b: B| function(a, b)).ap(other)
    }

    /// Combines three validations with a ternary function, accumulating errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::validation::Validation;
    ///
    /// let first: Validation<String, i32> = Validation::failure("a".to_string());
    /// let second: Validation<String, i32> = Validation::success(2);
    /// let third: Validation<String, i32> = Validation::failure("c".to_string());
    ///
    /// let sum = first.map3(second, third, |a, b, c| a + b + c);
    /// assert_eq!(sum, Validation::failure("ac".to_string()));
    /// ```
    #[inline]
    pub fn map3<B, C, D, F>(
        self,
        second: Validation<E, B>,
        third: Validation<E, C>,
        function: F,
    ) -> Validation<E, D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        self.map(|a| move |b: B| move |c: C| function(a, b, c))
            .ap(second)
            .ap(third)
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<E: fmt::Display, A: fmt::Display> fmt::Display for Validation<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(error) => write!(formatter, "Failure({error})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<E, A> From<Result<A, E>> for Validation<E, A> {
    /// `Ok(a)` becomes `Success(a)` and `Err(e)` becomes `Failure(e)`.
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<E, A> From<Validation<E, A>> for Result<A, E> {
    #[inline]
    fn from(validation: Validation<E, A>) -> Self {
        validation.into_result()
    }
}

static_assertions::assert_impl_all!(Validation<String, i32>: Send, Sync);
static_assertions::assert_impl_all!(ValidationNel<String, String>: Send, Sync, Clone);
