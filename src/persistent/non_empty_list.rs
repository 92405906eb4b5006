//! Immutable list guaranteed to hold at least one element.
//!
//! This module provides [`NonEmptyList`], the canonical error container for
//! accumulating validation. Its non-emptiness is structural: the first
//! element is stored on its own and every other element lives in the tail,
//! so there is no way to build, or end up with, an empty list.
//!
//! # Overview
//!
//! - O(1) `head`, `last` and `len`
//! - O(n) `append` (returns a new list, the receiver is untouched)
//! - O(m) `combine` (consumes both operands, appends the right one)
//! - Element-wise, order-sensitive equality and hashing
//!
//! Short tails are stored inline, which covers the common case of a handful
//! of validation errors without a heap allocation.
//!
//! # Examples
//!
//! ```rust
//! use validus::persistent::NonEmptyList;
//! use validus::typeclass::Semigroup;
//!
//! let list = NonEmptyList::new("a").append("b").combine(NonEmptyList::new("c"));
//! assert_eq!(list.into_vec(), vec!["a", "b", "c"]);
//! ```
//!
//! An empty list cannot be written down:
//!
//! ```compile_fail
//! use validus::persistent::NonEmptyList;
//!
//! let empty: NonEmptyList<i32> = NonEmptyList::new();
//! ```

use std::fmt;
use std::iter::FusedIterator;

use smallvec::SmallVec;

use crate::typeclass::{Functor, Semigroup, TypeConstructor};

/// Number of tail elements stored without a heap allocation.
const INLINE_TAIL_CAPACITY: usize = 3;

type Tail<T> = SmallVec<[T; INLINE_TAIL_CAPACITY]>;

/// An immutable, order-preserving sequence with at least one element.
///
/// Every operation that "changes" a list returns a new one. No method hands
/// out mutable access to the stored elements, so a list shared between
/// threads can never be observed half-updated.
///
/// # Time Complexity
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `new`     | O(1)       |
/// | `head`    | O(1)       |
/// | `last`    | O(1)       |
/// | `len`     | O(1)       |
/// | `get`     | O(1)       |
/// | `append`  | O(n)       |
/// | `combine` | O(m)       |
/// | `map`     | O(n)       |
///
/// # Examples
///
/// ```rust
/// use validus::persistent::NonEmptyList;
///
/// let list = NonEmptyList::new(1);
/// let extended = list.append(2);
///
/// assert_eq!(list.len(), 1);
/// assert_eq!(extended.len(), 2);
/// assert_eq!(extended.head(), &1);
/// assert_eq!(extended.last(), &2);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyList<T> {
    head: T,
    tail: Tail<T>,
}

#[allow(clippy::len_without_is_empty)]
impl<T> NonEmptyList<T> {
    /// Creates a list holding a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::persistent::NonEmptyList;
    ///
    /// let list = NonEmptyList::new("Error!");
    /// assert_eq!(list.head(), &"Error!");
    /// assert_eq!(list.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn new(head: T) -> Self {
        Self {
            head,
            tail: SmallVec::new(),
        }
    }

    /// Creates a list from its first element and the elements that follow it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::persistent::NonEmptyList;
    ///
    /// let list = NonEmptyList::from_parts(1, vec![2, 3]);
    /// assert_eq!(list.into_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn from_parts<I>(head: T, tail: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            head,
            tail: tail.into_iter().collect(),
        }
    }

    /// Builds a list from an iterator, or returns `None` if it yields nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::persistent::NonEmptyList;
    ///
    /// let list = NonEmptyList::try_from_iter(1..=3);
    /// assert_eq!(list.map(|list| list.len()), Some(3));
    ///
    /// assert_eq!(NonEmptyList::<i32>::try_from_iter(Vec::new()), None);
    /// ```
    pub fn try_from_iter<I>(iterable: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut iterator = iterable.into_iter();
        let head = iterator.next()?;
        Some(Self {
            head,
            tail: iterator.collect(),
        })
    }

    /// Returns the first element.
    #[inline]
    #[must_use]
    pub const fn head(&self) -> &T {
        &self.head
    }

    /// Returns every element after the first, possibly none.
    #[inline]
    #[must_use]
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// Returns the last element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::persistent::NonEmptyList;
    ///
    /// assert_eq!(NonEmptyList::new(7).last(), &7);
    /// assert_eq!(NonEmptyList::from_parts(7, [8, 9]).last(), &9);
    /// ```
    #[inline]
    #[must_use]
    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Returns the number of elements, which is never zero.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    /// Returns the element at `index`, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::persistent::NonEmptyList;
    ///
    /// let list = NonEmptyList::from_parts('a', ['b']);
    /// assert_eq!(list.get(0), Some(&'a'));
    /// assert_eq!(list.get(1), Some(&'b'));
    /// assert_eq!(list.get(2), None);
    /// ```
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        match index {
            0 => Some(&self.head),
            _ => self.tail.get(index - 1),
        }
    }

    /// Returns an iterator over the elements in order.
    #[inline]
    pub fn iter(&self) -> NonEmptyListIterator<'_, T> {
        NonEmptyListIterator {
            head: Some(&self.head),
            tail: self.tail.iter(),
        }
    }

    /// Returns a new list with `element` after all existing elements.
    ///
    /// The receiver is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::persistent::NonEmptyList;
    ///
    /// let original = NonEmptyList::new("a");
    /// let appended = original.append("b");
    ///
    /// assert_eq!(original.into_vec(), vec!["a"]);
    /// assert_eq!(appended.into_vec(), vec!["a", "b"]);
    /// ```
    #[must_use]
    pub fn append(&self, element: T) -> Self
    where
        T: Clone,
    {
        let mut tail = Tail::with_capacity(self.tail.len() + 1);
        tail.extend(self.tail.iter().cloned());
        tail.push(element);
        Self {
            head: self.head.clone(),
            tail,
        }
    }

    /// Transforms every element, keeping order and length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validus::persistent::NonEmptyList;
    ///
    /// let lengths = NonEmptyList::from_parts("a", ["bb", "ccc"]).map(str::len);
    /// assert_eq!(lengths.into_vec(), vec![1, 2, 3]);
    /// ```
    pub fn map<B, F>(self, mut function: F) -> NonEmptyList<B>
    where
        F: FnMut(T) -> B,
    {
        let head = function(self.head);
        NonEmptyList {
            head,
            tail: self.tail.into_iter().map(function).collect(),
        }
    }

    /// Converts the list into a `Vec`, preserving order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        let mut elements = Vec::with_capacity(self.len());
        elements.push(self.head);
        elements.extend(self.tail);
        elements
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over a [`NonEmptyList`].
pub struct NonEmptyListIterator<'a, T> {
    head: Option<&'a T>,
    tail: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for NonEmptyListIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.head.take().or_else(|| self.tail.next())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.head.is_some()) + self.tail.len();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for NonEmptyListIterator<'_, T> {}

impl<T> FusedIterator for NonEmptyListIterator<'_, T> {}

/// Owning iterator over a [`NonEmptyList`].
pub struct NonEmptyListIntoIterator<T> {
    head: Option<T>,
    tail: smallvec::IntoIter<[T; INLINE_TAIL_CAPACITY]>,
}

impl<T> Iterator for NonEmptyListIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.head.take().or_else(|| self.tail.next())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.head.is_some()) + self.tail.len();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for NonEmptyListIntoIterator<T> {}

impl<T> IntoIterator for NonEmptyList<T> {
    type Item = T;
    type IntoIter = NonEmptyListIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        NonEmptyListIntoIterator {
            head: Some(self.head),
            tail: self.tail.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyList<T> {
    type Item = &'a T;
    type IntoIter = NonEmptyListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Conversions
// =============================================================================

/// Returned when a `NonEmptyList` is requested from an empty collection.
///
/// # Examples
///
/// ```rust
/// use validus::persistent::{EmptyListError, NonEmptyList};
///
/// let result = NonEmptyList::<i32>::try_from(Vec::new());
/// assert_eq!(result, Err(EmptyListError));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyListError;

impl fmt::Display for EmptyListError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "NonEmptyList requires at least one element, but the collection was empty"
        )
    }
}

impl std::error::Error for EmptyListError {}

impl<T> TryFrom<Vec<T>> for NonEmptyList<T> {
    type Error = EmptyListError;

    fn try_from(elements: Vec<T>) -> Result<Self, Self::Error> {
        Self::try_from_iter(elements).ok_or(EmptyListError)
    }
}

impl<T> From<NonEmptyList<T>> for Vec<T> {
    fn from(list: NonEmptyList<T>) -> Self {
        list.into_vec()
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for NonEmptyList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for NonEmptyList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "NonEmptyList[{}", self.head)?;
        for element in &self.tail {
            write!(formatter, ", {element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for NonEmptyList<T> {
    type Inner = T;
    type WithType<B> = NonEmptyList<B>;
}

impl<T> Functor for NonEmptyList<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> NonEmptyList<B>
    where
        F: FnMut(T) -> B,
    {
        self.map(function)
    }
}

/// Concatenation, left operand first.
impl<T> Semigroup for NonEmptyList<T> {
    fn combine(mut self, other: Self) -> Self {
        self.tail.reserve(other.len());
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }
}

static_assertions::assert_impl_all!(NonEmptyList<String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(NonEmptyListIterator<'static, String>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
