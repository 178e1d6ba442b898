//! Gauss-Jordan elimination over exact fractions.
//!
//! The engine works on the diagonal of the coefficient block, column by
//! column, and moves through these phases:
//!
//! ```text
//! Start -> EchelonForming -> Inconsistent                       (failure)
//!                         -> ReducedForming -> PivotScaling
//!                                           -> RowBurying -> Solved
//! ```
//!
//! 1. **Echelon forming**: for each pivot column, swap a lower row with a
//!    non-zero entry into place if the diagonal is zero, then cancel every
//!    entry below the pivot. A column with no usable pivot is left as is.
//! 2. **Inconsistency check**: a row whose coefficients are all zero but
//!    whose equality entries are not reads `0 = c` and ends the solve.
//! 3. **Reduced forming**: from the last pivot up, cancel entries above
//!    each non-zero pivot.
//! 4. **Pivot scaling**: scale each non-zero pivot row so its diagonal is one.
//! 5. **Row burying**: move every all-zero row to the bottom, keeping the
//!    order of the other rows.
//!
//! A pivot is only ever divided by after checking that it is non-zero.

use quotient_integers::Rational;
use quotient_linalg::LinearSystem;

use crate::config::SolverConfig;
use crate::observer::StepObserver;

/// Where the engine is, or where it stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Not yet run.
    Start,
    /// Cancelling entries below the diagonal.
    EchelonForming,
    /// Stopped: the system has no solution.
    Inconsistent,
    /// Cancelling entries above the diagonal.
    ReducedForming,
    /// Normalizing pivots to one.
    PivotScaling,
    /// Moving zero rows to the bottom.
    RowBurying,
    /// Finished successfully.
    Solved,
}

/// Result of running the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The engine has not run.
    Pending,
    /// The system is in reduced row-echelon form.
    Solved,
    /// Row `row` reads `0 = value`; the system is left partially reduced.
    Inconsistent {
        /// The offending row.
        row: usize,
        /// Its first non-zero equality entry.
        value: Rational,
    },
    /// An entry in `row` outgrew the configured bit limit.
    MagnitudeExceeded {
        /// The row that grew too large.
        row: usize,
        /// Its largest numerator or denominator bit length.
        bits: usize,
    },
}

impl Outcome {
    /// Returns true for [`Outcome::Solved`].
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved)
    }
}

/// Why a run stopped early.
enum Halt {
    Inconsistent { row: usize, value: Rational },
    MagnitudeExceeded { row: usize, bits: usize },
}

impl Halt {
    fn into_outcome(self) -> Outcome {
        match self {
            Halt::Inconsistent { row, value } => Outcome::Inconsistent { row, value },
            Halt::MagnitudeExceeded { row, bits } => Outcome::MagnitudeExceeded { row, bits },
        }
    }
}

/// Elimination engine bound to one system and one observer.
///
/// The system is reduced in place; the observer is told about every change.
pub struct GaussElimination<'a, O: StepObserver + ?Sized> {
    system: &'a mut LinearSystem,
    observer: &'a mut O,
    magnitude_limit_bits: Option<usize>,
    phase: Phase,
    outcome: Outcome,
}

impl<'a, O: StepObserver + ?Sized> GaussElimination<'a, O> {
    /// Creates an engine with the default configuration.
    pub fn new(system: &'a mut LinearSystem, observer: &'a mut O) -> Self {
        Self::with_config(system, observer, &SolverConfig::default())
    }

    /// Creates an engine with the given configuration.
    pub fn with_config(
        system: &'a mut LinearSystem,
        observer: &'a mut O,
        config: &SolverConfig,
    ) -> Self {
        Self {
            system,
            observer,
            magnitude_limit_bits: config.magnitude_limit_bits,
            phase: Phase::Start,
            outcome: Outcome::Pending,
        }
    }

    /// Runs elimination to completion. Returns true if the system was solved.
    pub fn solve(&mut self) -> bool {
        let span = tracing::debug_span!(
            "gauss_elimination",
            rows = self.system.num_rows(),
            cols = self.system.num_cols(),
            coefficient_width = self.system.coefficient_width(),
        );
        let _guard = span.enter();

        self.phase = Phase::Start;
        self.outcome = match self.run() {
            Ok(()) => Outcome::Solved,
            Err(halt) => halt.into_outcome(),
        };
        tracing::debug!(outcome = ?self.outcome, "elimination finished");
        self.is_solved()
    }

    /// Whether the last run solved the system.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.outcome.is_solved()
    }

    /// Outcome of the last run.
    #[must_use]
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Consumes the engine, returning the outcome of the last run.
    #[must_use]
    pub fn into_outcome(self) -> Outcome {
        self.outcome
    }

    /// Current or final phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn run(&mut self) -> Result<(), Halt> {
        self.enter(Phase::EchelonForming);
        self.compute_echelon()?;

        if let Some((row, value)) = self.find_inconsistency() {
            self.enter(Phase::Inconsistent);
            self.observer.on_inconsistency(&value);
            return Err(Halt::Inconsistent { row, value });
        }

        self.enter(Phase::ReducedForming);
        self.compute_reduced()?;

        self.enter(Phase::PivotScaling);
        self.scale_pivots()?;

        self.enter(Phase::RowBurying);
        self.bury_zero_rows();

        self.enter(Phase::Solved);
        Ok(())
    }

    fn enter(&mut self, phase: Phase) {
        tracing::debug!(?phase, "entering phase");
        self.phase = phase;
    }

    /// Number of diagonal positions inside the coefficient block.
    fn pivot_count(&self) -> usize {
        self.system.coefficient_width().min(self.system.num_rows())
    }

    fn compute_echelon(&mut self) -> Result<(), Halt> {
        for pivot in 0..self.pivot_count() {
            if self.system.is_zero(pivot, pivot) && !self.fix_zero_pivot(pivot) {
                continue;
            }
            let below = pivot + 1..self.system.num_rows();
            self.clear_column(pivot, below)?;
        }
        Ok(())
    }

    fn compute_reduced(&mut self) -> Result<(), Halt> {
        for pivot in (1..self.pivot_count()).rev() {
            if self.system.is_zero(pivot, pivot) {
                continue;
            }
            self.clear_column(pivot, (0..pivot).rev())?;
        }
        Ok(())
    }

    /// Cancels the pivot column in each of `rows` by adding a multiple of
    /// the pivot row.
    fn clear_column(
        &mut self,
        pivot: usize,
        rows: impl Iterator<Item = usize>,
    ) -> Result<(), Halt> {
        let mut changed = false;
        for row in rows {
            if self.system.is_zero(row, pivot) {
                continue;
            }
            let scalar = self.system.elimination_scalar(pivot, pivot, row, pivot);
            self.system.add_scaled_row(pivot, row, &scalar);
            self.observer.on_row_add(pivot, row, &scalar);
            changed = true;
            self.check_magnitude(row)?;
        }
        if changed {
            self.observer.on_system_state(&*self.system);
        }
        Ok(())
    }

    /// Swaps the first lower row with a non-zero entry into the pivot row.
    /// Returns false if the column is zero from the pivot down.
    fn fix_zero_pivot(&mut self, pivot: usize) -> bool {
        let Some(row) =
            (pivot + 1..self.system.num_rows()).find(|&r| !self.system.is_zero(r, pivot))
        else {
            tracing::trace!(pivot, "no pivot available; column is dependent");
            return false;
        };
        self.system.swap_rows(row, pivot);
        self.observer.on_row_swap(row, pivot);
        self.observer.on_system_state(&*self.system);
        true
    }

    /// First row reading `0 = c` with `c != 0`, and that `c`.
    fn find_inconsistency(&self) -> Option<(usize, Rational)> {
        let width = self.system.coefficient_width();
        (0..self.system.num_rows())
            .filter(|&row| self.system.is_zero_row(row, width))
            .find_map(|row| {
                (width..self.system.num_cols())
                    .find(|&col| !self.system.is_zero(row, col))
                    .map(|col| (row, self.system.element(row, col)))
            })
    }

    fn scale_pivots(&mut self) -> Result<(), Halt> {
        let mut changed = false;
        for pivot in 0..self.pivot_count() {
            if self.system.is_zero(pivot, pivot) || self.system.is_one(pivot, pivot) {
                continue;
            }
            let scalar = self.system.normalizing_scalar(pivot, pivot);
            self.system.scale_row(pivot, &scalar);
            self.observer.on_row_scale(pivot, &scalar);
            changed = true;
            self.check_magnitude(pivot)?;
        }
        if changed {
            self.observer.on_system_state(&*self.system);
        }
        Ok(())
    }

    /// Rotates every all-zero row to the bottom, bottom-up, so the non-zero
    /// rows keep their relative order.
    fn bury_zero_rows(&mut self) {
        let rows = self.system.num_rows();
        let width = self.system.num_cols();
        let mut bottom = rows;
        for row in (0..rows).rev() {
            if !self.system.is_zero_row(row, width) {
                continue;
            }
            bottom -= 1;
            if row != bottom {
                self.system.move_row(row, bottom);
            }
        }
        tracing::debug!(buried = rows - bottom, "zero rows buried");
    }

    fn check_magnitude(&self, row: usize) -> Result<(), Halt> {
        let Some(limit) = self.magnitude_limit_bits else {
            return Ok(());
        };
        let bits = self.system.row_bit_len(row);
        if bits > limit {
            tracing::warn!(row, bits, limit, "entry magnitude limit exceeded");
            return Err(Halt::MagnitudeExceeded { row, bits });
        }
        Ok(())
    }
}
