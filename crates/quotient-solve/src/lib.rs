//! # quotient-solve
//!
//! Exact Gauss-Jordan elimination for [`LinearSystem`]s.
//!
//! This crate provides:
//! - [`GaussElimination`]: the phase-by-phase elimination engine
//! - [`StepObserver`]: a hook that sees every row operation as it happens
//! - [`solve_system`] and [`solve`]: one-call entry points
//!
//! All arithmetic is exact; pivots are chosen by position, never by size.
//!
//! ```ignore
//! let matrix = FractionMatrix::from_integer_rows(&[&[2, 1, 5], &[1, -1, 1]])?;
//! let mut system = LinearSystem::new(matrix, 2)?;
//! assert!(solve_system(&mut system, &mut NoopObserver));
//! // system is now | 1 0 | 2 |
//! //               | 0 1 | 1 |
//! ```
//!
//! [`LinearSystem`]: quotient_linalg::LinearSystem

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod gauss;
pub mod observer;
pub mod solver;

pub use config::SolverConfig;
pub use gauss::{GaussElimination, Outcome, Phase};
pub use observer::{
    NoopObserver, RecordingObserver, Step, StepObserver, TracingObserver, WriterObserver,
};
pub use solver::{solve, solve_system, solve_system_with};

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod test_utils;
