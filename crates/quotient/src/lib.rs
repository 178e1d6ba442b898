//! # Quotient
//!
//! Exact linear algebra over the rationals.
//!
//! Every value is a fraction of arbitrary precision integers, so solving a
//! linear system never loses precision to rounding.
//!
//! ## Features
//!
//! - **Exact Arithmetic**: fractions always kept in lowest terms
//! - **Fraction Matrices**: construction, block operations, products
//! - **Gauss-Jordan Elimination**: reduced row-echelon form with observable steps
//! - **Rendering**: aligned plain text, LaTeX and decimal approximations
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use quotient::prelude::*;
//!
//! let matrix = parse_matrix("2 1 5\n1 -1 1")?;
//! let mut system = LinearSystem::new(matrix, 2)?;
//! if solve_system(&mut system, &mut NoopObserver) {
//!     print!("{}", render_system(&system, &RenderConfig::plain()));
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use quotient_integers as integers;
pub use quotient_linalg as linalg;
pub use quotient_solve as solve;

pub mod calc;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calc::{CalcError, Operator};
    pub use quotient_integers::{ArithmeticError, Integer, Rational};
    pub use quotient_linalg::input::{parse_matrix, read_block};
    pub use quotient_linalg::render::{render_matrix, render_system};
    pub use quotient_linalg::{FractionMatrix, LinearSystem, MatrixError, RenderConfig, RenderStyle};
    pub use quotient_solve::{
        solve_system, solve_system_with, NoopObserver, Outcome, SolverConfig, StepObserver,
        WriterObserver,
    };
}
