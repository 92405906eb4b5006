//! The `curry!` macro for converting multi-argument closures to curried form.
//!
//! `curry!(|a, b, c| body)` expands to `move |a| move |b| move |c| body`.
//! Each level captures the arguments received so far by move. The innermost
//! closures are therefore `FnOnce` whenever `body` consumes a captured
//! argument, which is exactly what `Validation::ap` accepts: every
//! partially applied function is applied once.

/// Converts a closure of two or more arguments into nested one-argument closures.
///
/// Argument type annotations are optional and are carried to the generated
/// closures unchanged.
///
/// # Examples
///
/// ## Basic currying
///
/// ```
/// use validus::curry;
///
/// let add_three = curry!(|first: i32, second: i32, third: i32| first + second + third);
/// assert_eq!(add_three(1)(2)(3), 6);
/// ```
///
/// ## Building a record from validated fields
///
/// ```
/// use validus::curry;
/// use validus::validation::Validation;
///
/// #[derive(Debug, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let x: Validation<String, i32> = Validation::success(1);
/// let y: Validation<String, i32> = Validation::success(2);
///
/// let point = x.map(curry!(|x: i32, y: i32| Point { x, y })).ap(y);
/// assert_eq!(point, Validation::success(Point { x: 1, y: 2 }));
/// ```
///
/// A single argument is rejected, since there is nothing to curry:
///
/// ```compile_fail
/// use validus::curry;
///
/// let _ = curry!(|a: i32| a + 1);
/// ```
#[macro_export]
macro_rules! curry {
    (|$first:ident $(: $first_type:ty)?, $second:ident $(: $second_type:ty)? $(,)?| $body:expr) => {
        move |$first $(: $first_type)?| move |$second $(: $second_type)?| $body
    };
    (|$first:ident $(: $first_type:ty)?, $($rest:ident $(: $rest_type:ty)?),+ $(,)?| $body:expr) => {
        move |$first $(: $first_type)?| $crate::curry!(|$($rest $(: $rest_type)?),+| $body)
    };
}
