//! # quotient-integers
//!
//! Exact arithmetic for the quotient linear algebra stack.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Exact fractions kept in lowest terms (`Rational`)
//!
//! ## Canonical form
//!
//! Every `Rational` produced by this crate has a positive denominator and
//! `gcd(|numerator|, denominator) = 1`. Equality, hashing and the zero/one
//! predicates all rely on that form.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::ArithmeticError;
pub use integer::Integer;
pub use rational::Rational;
