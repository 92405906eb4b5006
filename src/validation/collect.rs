//! Collecting many validations into one.
//!
//! Collecting an iterator of `Validation<E, A>` into `Validation<E, V>` visits
//! every element. Values are gathered into `V` while no failure has been
//! seen; every failure is combined into the running error in iteration order.

use super::Validation;
use crate::typeclass::Semigroup;

impl<E, A, V> FromIterator<Validation<E, A>> for Validation<E, V>
where
    E: Semigroup,
    V: FromIterator<A>,
{
    /// # Examples
    ///
    /// ```rust
    /// use validus::validation::Validation;
    ///
    /// fn positive(number: i32) -> Validation<Vec<String>, i32> {
    ///     Validation::from_condition(number > 0, number, vec![format!("{number} is not positive")])
    /// }
    ///
    /// let all: Validation<Vec<String>, Vec<i32>> = [1, 2, 3].into_iter().map(positive).collect();
    /// assert_eq!(all, Validation::success(vec![1, 2, 3]));
    ///
    /// let some: Validation<Vec<String>, Vec<i32>> = [1, -2, -3].into_iter().map(positive).collect();
    /// assert_eq!(
    ///     some,
    ///     Validation::failure(vec!["-2 is not positive".to_string(), "-3 is not positive".to_string()])
    /// );
    /// ```
    fn from_iter<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = Validation<E, A>>,
    {
        let mut values = Vec::new();
        let mut errors: Option<E> = None;

        for validation in iterable {
            match validation {
                Validation::Success(value) => {
                    if errors.is_none() {
                        values.push(value);
                    }
                }
                Validation::Failure(error) => {
                    errors = Some(match errors.take() {
                        Some(accumulated) => accumulated.combine(error),
                        None => error,
                    });
                }
            }
        }

        match errors {
            Some(error) => Self::Failure(error),
            None => Self::Success(values.into_iter().collect()),
        }
    }
}

/// Validates every element with `function` and collects the results.
///
/// Equivalent to `iterable.into_iter().map(function).collect()`.
///
/// # Examples
///
/// ```rust
/// use validus::validation::{Validation, ValidationNel, traverse};
///
/// fn non_blank(line: &str) -> ValidationNel<String, String> {
///     Validation::from_condition(!line.trim().is_empty(), line.to_string(), "blank line".to_string())
///         .into_nel()
/// }
///
/// let lines: ValidationNel<String, Vec<String>> = traverse(["a", " ", "b", ""], non_blank);
/// assert_eq!(lines.unwrap_failure().len(), 2);
/// ```
pub fn traverse<I, E, A, B, V, F>(iterable: I, function: F) -> Validation<E, V>
where
    I: IntoIterator<Item = A>,
    E: Semigroup,
    V: FromIterator<B>,
    F: FnMut(A) -> Validation<E, B>,
{
    iterable.into_iter().map(function).collect()
}
