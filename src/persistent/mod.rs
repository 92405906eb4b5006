//! Immutable data structures.
//!
//! - [`NonEmptyList`]: an immutable list with at least one element, used as
//!   the error container for accumulating validation
//!
//! Values in this module are never mutated in place. Operations such as
//! `append` return a new value and leave the receiver as it was.
//!
//! # Examples
//!
//! ```rust
//! use validus::persistent::NonEmptyList;
//!
//! let errors = NonEmptyList::new("Name must not be empty");
//! let more = errors.append("Age must be 0..120");
//!
//! assert_eq!(errors.len(), 1);
//! assert_eq!(more.len(), 2);
//! assert_eq!(more.to_string(), "NonEmptyList[Name must not be empty, Age must be 0..120]");
//! ```

mod non_empty_list;

pub use non_empty_list::{
    EmptyListError, NonEmptyList, NonEmptyListIntoIterator, NonEmptyListIterator,
};
