//! Errors for matrix construction and matrix operations.

use quotient_integers::ArithmeticError;
use thiserror::Error;

/// Errors raised before any matrix storage is touched.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A matrix needs at least one row and one column.
    #[error("matrix has no entries")]
    Empty,

    /// Rows of different lengths were supplied.
    #[error("row {row} has {found} entries, expected {expected}")]
    Ragged {
        /// Index of the first offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// Shapes (rows, columns) do not agree for the operation.
    #[error("dimension mismatch: {left:?} vs {right:?}")]
    DimensionMismatch {
        /// Shape of the left operand.
        left: (usize, usize),
        /// Shape of the right operand.
        right: (usize, usize),
    },

    /// Half-open column range outside the matrix.
    #[error("column range {start}..{end} out of bounds for width {width}")]
    ColumnRange {
        /// First column, inclusive.
        start: usize,
        /// Last column, exclusive.
        end: usize,
        /// Width of the matrix.
        width: usize,
    },

    /// The coefficient/equality cut must leave both blocks non-empty.
    #[error("coefficient width {coefficient_width} must be in 1..{width}")]
    CoefficientWidth {
        /// Requested coefficient width.
        coefficient_width: usize,
        /// Total width of the matrix.
        width: usize,
    },

    /// A text entry could not be read as a fraction.
    #[error("entry at row {row}, column {col}: {source}")]
    Entry {
        /// Zero-based row of the entry.
        row: usize,
        /// Zero-based column of the entry.
        col: usize,
        /// Why the entry was rejected.
        #[source]
        source: ArithmeticError,
    },

    /// Scalar arithmetic failed, e.g. dividing a matrix by zero.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}
