//! Dense matrices of exact fractions.
//!
//! Storage is a single row-major `Vec`, so whole-row moves are slice
//! rotations. Every operation that combines matrices checks shapes up front
//! and returns a fresh matrix; inputs are never modified.

use std::ops::Index;

use num_traits::{One, Zero};
use quotient_integers::Rational;

use crate::MatrixError;

/// Dense matrix of [`Rational`]s stored in row-major order.
///
/// Always at least 1×1. A 1×1 matrix doubles as a scalar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FractionMatrix {
    /// Matrix entries in row-major order.
    data: Vec<Rational>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl FractionMatrix {
    /// Creates a matrix filled with zeros.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Empty`] if either dimension is zero.
    pub fn zeros(num_rows: usize, num_cols: usize) -> Result<Self, MatrixError> {
        if num_rows == 0 || num_cols == 0 {
            return Err(MatrixError::Empty);
        }
        Ok(Self {
            data: vec![Rational::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        })
    }

    /// Creates a matrix from a vector of rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Empty`] for no rows or empty rows and
    /// [`MatrixError::Ragged`] if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<Rational>>) -> Result<Self, MatrixError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        if num_cols == 0 {
            return Err(MatrixError::Empty);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != num_cols)
        {
            return Err(MatrixError::Ragged {
                row,
                expected: num_cols,
                found,
            });
        }
        Ok(Self {
            data: rows.into_iter().flatten().collect(),
            num_rows,
            num_cols,
        })
    }

    /// Creates a matrix from integer rows; convenient for literals.
    ///
    /// # Errors
    ///
    /// Same as [`FractionMatrix::from_rows`].
    pub fn from_integer_rows(rows: &[&[i64]]) -> Result<Self, MatrixError> {
        Self::from_rows(
            rows.iter()
                .map(|row| row.iter().copied().map(Rational::from).collect())
                .collect(),
        )
    }

    /// Wraps a single value as a 1×1 matrix.
    #[must_use]
    pub fn from_scalar(value: Rational) -> Self {
        Self {
            data: vec![value],
            num_rows: 1,
            num_cols: 1,
        }
    }

    /// Creates an `n × n` identity matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Empty`] if `n` is zero.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = Rational::one();
        }
        Ok(m)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns `(rows, columns)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    /// Returns the single entry of a 1×1 matrix.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&Rational> {
        if self.shape() == (1, 1) {
            self.data.first()
        } else {
            None
        }
    }

    /// Returns a copy of the entry at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    #[must_use]
    pub fn element(&self, row: usize, col: usize) -> Rational {
        self[(row, col)].clone()
    }

    /// Returns a reference to the entry at (row, col), if in bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Rational> {
        if row < self.num_rows && col < self.num_cols {
            Some(&self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Rational] {
        assert!(row < self.num_rows, "row {row} out of bounds");
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Iterates over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Rational]> {
        self.data.chunks_exact(self.num_cols)
    }

    /// Returns a column as a vector.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    #[must_use]
    pub fn column(&self, col: usize) -> Vec<Rational> {
        (0..self.num_rows).map(|row| self.element(row, col)).collect()
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [Rational] {
        let start = row * self.num_cols;
        &mut self.data[start..start + self.num_cols]
    }

    /// Elementwise sum.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self, MatrixError> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Elementwise difference.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if the shapes differ.
    pub fn sub(&self, other: &Self) -> Result<Self, MatrixError> {
        self.zip_with(other, |a, b| a - b)
    }

    fn zip_with(
        &self,
        other: &Self,
        op: impl Fn(&Rational, &Rational) -> Rational,
    ) -> Result<Self, MatrixError> {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| op(a, b))
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        })
    }

    /// Scales all entries by a scalar.
    #[must_use]
    pub fn scale(&self, scalar: &Rational) -> Self {
        Self {
            data: self.data.iter().map(|v| v * scalar).collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }

    /// Divides all entries by a scalar.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Arithmetic`] if the scalar is zero.
    pub fn divide_by(&self, scalar: &Rational) -> Result<Self, MatrixError> {
        Ok(self.scale(&scalar.checked_recip()?))
    }

    /// Sum of every entry.
    #[must_use]
    pub fn sum_elements(&self) -> Rational {
        self.data.iter().sum()
    }

    /// Horizontal concatenation `[self | other]`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if the heights differ.
    pub fn combine(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.num_rows != other.num_rows {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        let data = self
            .rows()
            .zip(other.rows())
            .flat_map(|(left, right)| left.iter().chain(right).cloned())
            .collect();
        Ok(Self {
            data,
            num_rows: self.num_rows,
            num_cols: self.num_cols + other.num_cols,
        })
    }

    /// Copies the columns in `start..end`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ColumnRange`] unless `start < end <= num_cols`.
    pub fn submatrix(&self, start: usize, end: usize) -> Result<Self, MatrixError> {
        if start >= end || end > self.num_cols {
            return Err(MatrixError::ColumnRange {
                start,
                end,
                width: self.num_cols,
            });
        }
        Ok(Self {
            data: self
                .rows()
                .flat_map(|row| row[start..end].iter().cloned())
                .collect(),
            num_rows: self.num_rows,
            num_cols: end - start,
        })
    }

    /// Matrix product `self * other`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if the inner dimensions differ.
    pub fn mul(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.num_cols != other.num_rows {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        let mut data = Vec::with_capacity(self.num_rows * other.num_cols);
        for row in self.rows() {
            for j in 0..other.num_cols {
                let sum: Rational = row
                    .iter()
                    .enumerate()
                    .filter(|(_, a)| !a.is_zero())
                    .map(|(k, a)| a * &other[(k, j)])
                    .sum();
                data.push(sum);
            }
        }
        Ok(Self {
            data,
            num_rows: self.num_rows,
            num_cols: other.num_cols,
        })
    }

    /// Swaps two rows in place.
    pub(crate) fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let (low, high) = (i.min(j), i.max(j));
        let (head, tail) = self.data.split_at_mut(high * self.num_cols);
        head[low * self.num_cols..(low + 1) * self.num_cols]
            .swap_with_slice(&mut tail[..self.num_cols]);
    }

    /// Moves row `from` to index `to`, shifting the rows in between by one.
    pub(crate) fn move_row(&mut self, from: usize, to: usize) {
        let width = self.num_cols;
        if from < to {
            self.data[from * width..(to + 1) * width].rotate_left(width);
        } else if from > to {
            self.data[to * width..(from + 1) * width].rotate_right(width);
        }
    }
}

impl Index<(usize, usize)> for FractionMatrix {
    type Output = Rational;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.num_rows && col < self.num_cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.num_rows,
            self.num_cols
        );
        &self.data[row * self.num_cols + col]
    }
}
