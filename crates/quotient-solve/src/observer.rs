//! Step reporting for the elimination engine.
//!
//! The engine calls a [`StepObserver`] synchronously after each row
//! operation, after each batch of changes and when it finds an
//! inconsistency. Observers only receive; nothing they do feeds back into
//! the algorithm, so attaching one never changes the result.

use std::fmt;
use std::io::{self, Write};

use quotient_integers::Rational;
use quotient_linalg::render::{render_system, RenderConfig};
use quotient_linalg::LinearSystem;

/// Receives elimination events. Every method defaults to doing nothing.
pub trait StepObserver {
    /// The system after a batch of row operations.
    fn on_system_state(&mut self, _system: &LinearSystem) {}

    /// `row[dst] += scalar * row[src]` was applied.
    fn on_row_add(&mut self, _src: usize, _dst: usize, _scalar: &Rational) {}

    /// `row[row] *= scalar` was applied.
    fn on_row_scale(&mut self, _row: usize, _scalar: &Rational) {}

    /// Rows `first` and `second` were exchanged.
    fn on_row_swap(&mut self, _first: usize, _second: usize) {}

    /// A row reads `0 = value` with `value != 0`.
    fn on_inconsistency(&mut self, _value: &Rational) {}
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {}

/// One recorded elimination event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Snapshot of the system after a batch of changes.
    SystemState(LinearSystem),
    /// `row[dst] += scalar * row[src]`.
    RowAdd {
        /// Row that was scaled and added.
        src: usize,
        /// Row that changed.
        dst: usize,
        /// Multiplier applied to `src`.
        scalar: Rational,
    },
    /// `row[row] *= scalar`.
    RowScale {
        /// Row that changed.
        row: usize,
        /// Multiplier.
        scalar: Rational,
    },
    /// Two rows were exchanged.
    RowSwap {
        /// Row that moved up into the pivot position.
        first: usize,
        /// The pivot row.
        second: usize,
    },
    /// The system has no solution: `0 = value`.
    Inconsistency {
        /// The non-zero right-hand side.
        value: Rational,
    },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::SystemState(system) => {
                f.write_str(&render_system(system, &RenderConfig::plain()))
            }
            Step::RowAdd { src, dst, scalar } => {
                write!(f, "row-{dst} = row-{dst} + {scalar} * row-{src}")
            }
            Step::RowScale { row, scalar } => write!(f, "row-{row} = {scalar} * row-{row}"),
            Step::RowSwap { first, second } => write!(f, "swap row-{first} and row-{second}"),
            Step::Inconsistency { value } => write!(f, "0 = {value}?"),
        }
    }
}

/// Keeps every event in order; useful for tests and step-by-step replays.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    steps: Vec<Step>,
}

impl RecordingObserver {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The events seen so far.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Consumes the recorder, returning its events.
    #[must_use]
    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }

    /// Events other than system snapshots.
    pub fn operations(&self) -> impl Iterator<Item = &Step> {
        self.steps
            .iter()
            .filter(|step| !matches!(step, Step::SystemState(_)))
    }
}

impl StepObserver for RecordingObserver {
    fn on_system_state(&mut self, system: &LinearSystem) {
        self.steps.push(Step::SystemState(system.clone()));
    }

    fn on_row_add(&mut self, src: usize, dst: usize, scalar: &Rational) {
        self.steps.push(Step::RowAdd {
            src,
            dst,
            scalar: scalar.clone(),
        });
    }

    fn on_row_scale(&mut self, row: usize, scalar: &Rational) {
        self.steps.push(Step::RowScale {
            row,
            scalar: scalar.clone(),
        });
    }

    fn on_row_swap(&mut self, first: usize, second: usize) {
        self.steps.push(Step::RowSwap { first, second });
    }

    fn on_inconsistency(&mut self, value: &Rational) {
        self.steps.push(Step::Inconsistency {
            value: value.clone(),
        });
    }
}

/// Forwards events to `tracing`: row operations at `TRACE`, snapshots at
/// `DEBUG`, inconsistencies at `WARN`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl StepObserver for TracingObserver {
    fn on_system_state(&mut self, system: &LinearSystem) {
        tracing::debug!(
            rows = system.num_rows(),
            cols = system.num_cols(),
            "system state\n{}",
            render_system(system, &RenderConfig::plain())
        );
    }

    fn on_row_add(&mut self, src: usize, dst: usize, scalar: &Rational) {
        tracing::trace!(src, dst, scalar = %scalar, "row addition");
    }

    fn on_row_scale(&mut self, row: usize, scalar: &Rational) {
        tracing::trace!(row, scalar = %scalar, "row scale");
    }

    fn on_row_swap(&mut self, first: usize, second: usize) {
        tracing::trace!(first, second, "row swap");
    }

    fn on_inconsistency(&mut self, value: &Rational) {
        tracing::warn!(value = %value, "inconsistent system: 0 = {value}");
    }
}

/// Prints each event as a line of text, system snapshots as aligned tables.
///
/// Output errors cannot interrupt elimination; the first one is kept and
/// can be collected with [`WriterObserver::take_error`].
#[derive(Debug)]
pub struct WriterObserver<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> WriterObserver<W> {
    /// Wraps a writer.
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Returns the first write error, if any occurred.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, step: &Step) {
        if self.error.is_some() {
            return;
        }
        let result = if matches!(step, Step::Inconsistency { .. }) {
            writeln!(self.out, "{step}\n")
        } else {
            writeln!(self.out, "{step}")
        };
        if let Err(err) = result {
            self.error = Some(err);
        }
    }
}

impl<W: Write> StepObserver for WriterObserver<W> {
    fn on_system_state(&mut self, system: &LinearSystem) {
        self.emit(&Step::SystemState(system.clone()));
    }

    fn on_row_add(&mut self, src: usize, dst: usize, scalar: &Rational) {
        self.emit(&Step::RowAdd {
            src,
            dst,
            scalar: scalar.clone(),
        });
    }

    fn on_row_scale(&mut self, row: usize, scalar: &Rational) {
        self.emit(&Step::RowScale {
            row,
            scalar: scalar.clone(),
        });
    }

    fn on_row_swap(&mut self, first: usize, second: usize) {
        self.emit(&Step::RowSwap { first, second });
    }

    fn on_inconsistency(&mut self, value: &Rational) {
        self.emit(&Step::Inconsistency {
            value: value.clone(),
        });
    }
}
