//! Helper functions (combinators) for function composition.

/// Returns the value unchanged.
///
/// In combinatory logic, this is known as the I combinator. `ap_right` on
/// a validation lifts it to discard the left value.
///
/// # Examples
///
/// ```
/// use validus::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// Also known as the K combinator. The returned closure clones `value` on
/// every call; `Validation::ap_left` moves its kept value instead, so it
/// works for types that are not `Clone`.
///
/// # Examples
///
/// ```
/// use validus::compose::constant;
///
/// let always_five = constant::<_, &str>(5);
/// assert_eq!(always_five("ignored"), 5);
///
/// let values: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(values, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Composes two functions left to right: `and_then(f, g)(x) == g(f(x))`.
///
/// # Examples
///
/// ```
/// use validus::compose::and_then;
///
/// let length_then_double = and_then(|s: &str| s.len(), |n: usize| n * 2);
/// assert_eq!(length_then_double("abc"), 6);
/// ```
#[inline]
pub fn and_then<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |value| second(first(value))
}
