//! Type class traits for validation and error accumulation.
//!
//! This module provides the capabilities the validation engine is built on:
//!
//! - [`Semigroup`]: Associative combination, used to merge errors
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Combining independent computations
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Bifunctor`]: Mapping over both sides of a two-parameter type
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) so that traits like
//! `Functor` can name "the same container holding a different type" without
//! any wrapper objects or casts.
//!
//! # Examples
//!
//! ## Using Semigroup
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
//!
//! ## Using Applicative
//!
//! ```rust
//! use validus::typeclass::Applicative;
//!
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x, Some(42));
//!
//! let sum = Some(1).map2(Some(2), |x, y| x + y);
//! assert_eq!(sum, Some(3));
//! ```

mod applicative;
mod bifunctor;
mod functor;
mod higher;
mod monad;
mod semigroup;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use semigroup::{Semigroup, associativity};
