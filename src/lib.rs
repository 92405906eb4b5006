//! # validus
//!
//! Applicative validation with error accumulation.
//!
//! ## Overview
//!
//! Independent checks each produce a [`Validation`](validation::Validation).
//! Combining them with `map`/`ap` yields a single result which either holds
//! the assembled value or every error that was found, merged through the
//! error type's [`Semigroup`](typeclass::Semigroup) instance. Nothing
//! short-circuits unless you ask for it with `flat_map`.
//!
//! The crate provides:
//!
//! - **Type Classes**: `Semigroup`, `Functor`, `Applicative`, `Monad`, `Bifunctor`
//! - **Function Composition**: `identity`, `constant`, `and_then`, `curry!`
//! - **Persistent Data Structures**: `NonEmptyList`, the canonical error container
//! - **Validation**: the accumulating `Success`/`Failure` sum type
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits
//! - `compose`: Function composition utilities
//! - `persistent`: `NonEmptyList`
//! - `validation`: `Validation` and its combinators
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use validus::prelude::*;
//!
//! #[derive(Debug, PartialEq)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! fn validate_name(name: &str) -> ValidationNel<String, String> {
//!     Validation::from_condition(!name.is_empty(), name.to_string(), "Name must not be empty".to_string())
//!         .into_nel()
//! }
//!
//! fn validate_age(age: u32) -> ValidationNel<String, u32> {
//!     Validation::from_condition(age <= 120, age, "Age must be 0..120".to_string()).into_nel()
//! }
//!
//! let person = validate_name("")
//!     .map(curry!(|name: String, age: u32| Person { name, age }))
//!     .ap(validate_age(200));
//!
//! assert_eq!(
//!     person.unwrap_failure().into_vec(),
//!     vec!["Name must not be empty".to_string(), "Age must be 0..120".to_string()]
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and macros.
///
/// # Usage
///
/// ```rust
/// use validus::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "validation")]
    pub use crate::validation::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "validation")]
pub mod validation;
