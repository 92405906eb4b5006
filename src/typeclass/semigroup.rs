//! Semigroup type class - types with an associative binary operation.
//!
//! A type `T` is a semigroup if there exists a function
//! `combine: (T, T) -> T` that is associative. No identity element is
//! required. Validation uses this operation to merge the errors of failed
//! checks, so any error type that should accumulate implements it.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! Commutativity is *not* required. `String`, `Vec` and `NonEmptyList`
//! keep their left operand first, and validation relies on that to report
//! errors in field order.
//!
//! # Examples
//!
//! ```rust
//! use validus::typeclass::Semigroup;
//!
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//!
//! let vec1 = vec![1, 2];
//! let vec2 = vec![3, 4];
//! assert_eq!(vec1.combine(vec2), vec![1, 2, 3, 4]);
//! ```

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// All implementations must satisfy:
///
/// ## Associativity
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
///
/// # Examples
///
/// ```rust
/// use validus::typeclass::Semigroup;
///
/// let a = String::from("foo");
/// let b = String::from("bar");
/// assert_eq!(a.combine(b), "foobar");
/// ```
pub trait Semigroup {
    /// Combines two values into one, `self` first.
    ///
    /// This operation must be associative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::typeclass::Semigroup;
    ///
    /// let result = String::from("Hello, ").combine(String::from("World!"));
    /// assert_eq!(result, "Hello, World!");
    /// ```
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::typeclass::Semigroup;
    ///
    /// let a = String::from("Hello, ");
    /// let b = String::from("World!");
    /// let result = a.combine_ref(&b);
    /// assert_eq!(a, "Hello, ");
    /// assert_eq!(result, "Hello, World!");
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements in an iterator from left to right.
    ///
    /// Returns `None` if the iterator is empty, since a semigroup has no
    /// identity element to fall back on.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::typeclass::Semigroup;
    ///
    /// let strings = vec![String::from("a"), String::from("b"), String::from("c")];
    /// assert_eq!(String::reduce_all(strings), Some(String::from("abc")));
    ///
    /// let empty: Vec<String> = vec![];
    /// assert_eq!(String::reduce_all(empty), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

/// Checks the associativity law for a single triple of values.
///
/// Returns `true` when `(first <> second) <> third` equals
/// `first <> (second <> third)`.
///
/// # Examples
///
/// ```rust
/// use validus::typeclass::associativity;
///
/// let first = String::from("string1");
/// let second = String::from("string2");
/// let third = String::from("string3");
/// assert!(associativity(&first, &second, &third));
/// ```
pub fn associativity<T>(first: &T, second: &T, third: &T) -> bool
where
    T: Semigroup + Clone + PartialEq,
{
    let left_associated = first
        .clone()
        .combine(second.clone())
        .combine(third.clone());
    let right_associated = first.clone().combine(second.clone().combine(third.clone()));
    left_associated == right_associated
}

// =============================================================================
// String Implementation
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

// =============================================================================
// Option Implementation
// =============================================================================

/// Option forms a semigroup when its inner type is a semigroup.
///
/// - `Some(a).combine(Some(b))` = `Some(a.combine(b))`
/// - `Some(a).combine(None)` = `Some(a)`
/// - `None.combine(Some(b))` = `Some(b)`
/// - `None.combine(None)` = `None`
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

// =============================================================================
// Unit and Tuple Implementations
// =============================================================================

/// The unit type forms a trivial semigroup.
impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

/// Pairs combine component-wise.
impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup> Semigroup for (A, B, C) {
    fn combine(self, other: Self) -> Self {
        (
            self.0.combine(other.0),
            self.1.combine(other.1),
            self.2.combine(other.2),
        )
    }
}
