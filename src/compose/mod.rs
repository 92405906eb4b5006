//! Function composition utilities.
//!
//! Small combinators used to assemble validators:
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: A function that ignores its input (K combinator)
//! - [`and_then`]: Left-to-right function composition
//! - [`curry!`]: Turns an N-argument closure into nested one-argument closures
//!
//! Currying is what makes multi-field validation read naturally: the record
//! constructor is lifted into the first field's validation with `map`, and
//! each remaining field is supplied with `ap`.
//!
//! ```text
//! curry(f)(a)(b)(c) = f(a, b, c)
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `and_then(and_then(f, g), h) == and_then(f, and_then(g, h))`
//! - **Left Identity**: `and_then(identity, f) == f`
//! - **Right Identity**: `and_then(f, identity) == f`
//!
//! # Examples
//!
//! ```
//! use validus::compose::{and_then, identity};
//! use validus::curry;
//!
//! let add = curry!(|first: i32, second: i32| first + second);
//! assert_eq!(add(5)(3), 8);
//!
//! let describe = and_then(|n: i32| n * 2, |n: i32| format!("got {n}"));
//! assert_eq!(describe(21), "got 42");
//! assert_eq!(identity("unchanged"), "unchanged");
//! ```

mod curry_macro;
mod utils;

pub use utils::{and_then, constant, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::curry;
