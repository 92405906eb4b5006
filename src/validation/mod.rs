//! Accumulating validation.
//!
//! [`Validation<E, A>`] is either `Success(A)` or `Failure(E)`. It differs
//! from `Result` in how independent checks are combined:
//!
//! - `ap`, `map2`, `map3`, `ap_left` and `ap_right` evaluate both sides and,
//!   when both fail, merge the errors with `E`'s `Semigroup` instance
//! - `flat_map` sequences dependent checks and stops at the first failure
//!
//! Merging is always left-to-right, so a chain of `ap` calls reports errors
//! in the order the fields were supplied.
//!
//! # Validating a record
//!
//! Validate each field on its own, lift a curried constructor into the first
//! field with `map`, then supply each remaining field with `ap`:
//!
//! ```rust
//! use validus::curry;
//! use validus::validation::{Validation, ValidationNel};
//!
//! #[derive(Debug, PartialEq)]
//! struct Person {
//!     name: String,
//!     email: String,
//!     age: u32,
//! }
//!
//! fn validate_name(name: &str) -> ValidationNel<String, String> {
//!     Validation::from_condition(!name.is_empty(), name.to_string(), "Name must not be empty".to_string())
//!         .into_nel()
//! }
//!
//! fn validate_email(email: &str) -> ValidationNel<String, String> {
//!     Validation::from_condition(email.contains('@'), email.to_string(), "Email must contain @".to_string())
//!         .into_nel()
//! }
//!
//! fn validate_age(age: u32) -> ValidationNel<String, u32> {
//!     Validation::from_condition(age <= 120, age, "Age must be 0..120".to_string()).into_nel()
//! }
//!
//! fn validate_person(name: &str, email: &str, age: u32) -> ValidationNel<String, Person> {
//!     validate_name(name)
//!         .map(curry!(|name: String, email: String, age: u32| Person { name, email, age }))
//!         .ap(validate_email(email))
//!         .ap(validate_age(age))
//! }
//!
//! assert_eq!(
//!     validate_person("Bob", "bob@x.com", 30),
//!     Validation::success(Person { name: "Bob".into(), email: "bob@x.com".into(), age: 30 })
//! );
//!
//! let errors = validate_person("", "bobx.com", 200).unwrap_failure();
//! assert_eq!(
//!     errors.into_vec(),
//!     vec!["Name must not be empty", "Email must contain @", "Age must be 0..120"]
//! );
//! ```

mod collect;
mod error;
mod instances;
mod validated;

pub use collect::traverse;
pub use error::NoSuchElementError;
pub use validated::{Validation, ValidationNel};
