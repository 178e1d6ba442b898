//! # quotient-linalg
//!
//! Dense matrices of exact fractions and the linear system view used by
//! the elimination engine.
//!
//! This crate provides:
//! - [`FractionMatrix`]: a rectangular, row-major grid of [`Rational`]s
//! - [`LinearSystem`]: a matrix split into a coefficient block and an
//!   equality block, mutated only through row operations
//! - [`input`]: free-form text to matrix parsing
//! - [`render`]: aligned plain text, LaTeX and decimal rendering
//!
//! [`Rational`]: quotient_integers::Rational

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod fraction_matrix;
pub mod input;
pub mod linear_system;
pub mod render;

pub use error::MatrixError;
pub use fraction_matrix::FractionMatrix;
pub use linear_system::LinearSystem;
pub use render::{RenderConfig, RenderStyle};

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;
