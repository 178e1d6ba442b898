//! Linear systems as augmented ("total") matrices.
//!
//! A [`LinearSystem`] owns a [`FractionMatrix`] and a fixed cut point.
//! Columns left of the cut hold the coefficients, columns right of it the
//! equality (right-hand side) values. The row operations below are the only
//! way to change a system once built; every other accessor copies out.

use num_traits::{One, Zero};
use quotient_integers::Rational;

use crate::{FractionMatrix, MatrixError};

/// An augmented matrix `[A | b]` with a fixed coefficient width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearSystem {
    matrix: FractionMatrix,
    coefficient_width: usize,
}

impl LinearSystem {
    /// Wraps a total matrix whose first `coefficient_width` columns are
    /// coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::CoefficientWidth`] unless
    /// `0 < coefficient_width < matrix.num_cols()`.
    pub fn new(matrix: FractionMatrix, coefficient_width: usize) -> Result<Self, MatrixError> {
        if coefficient_width == 0 || coefficient_width >= matrix.num_cols() {
            return Err(MatrixError::CoefficientWidth {
                coefficient_width,
                width: matrix.num_cols(),
            });
        }
        Ok(Self {
            matrix,
            coefficient_width,
        })
    }

    /// Builds `[coefficients | equality]`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if the heights differ.
    pub fn from_blocks(
        coefficients: &FractionMatrix,
        equality: &FractionMatrix,
    ) -> Result<Self, MatrixError> {
        let matrix = coefficients.combine(equality)?;
        Self::new(matrix, coefficients.num_cols())
    }

    /// Number of coefficient columns.
    #[must_use]
    pub fn coefficient_width(&self) -> usize {
        self.coefficient_width
    }

    /// Number of rows (equations).
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.matrix.num_rows()
    }

    /// Total number of columns, coefficients and equality together.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.matrix.num_cols()
    }

    /// Read-only view of the total matrix.
    #[must_use]
    pub fn matrix(&self) -> &FractionMatrix {
        &self.matrix
    }

    /// Consumes the system, returning the total matrix.
    #[must_use]
    pub fn into_matrix(self) -> FractionMatrix {
        self.matrix
    }

    /// Returns a copy of the entry at (row, col).
    #[must_use]
    pub fn element(&self, row: usize, col: usize) -> Rational {
        self.matrix.element(row, col)
    }

    /// Copy of the coefficient block.
    #[must_use]
    pub fn coefficients(&self) -> FractionMatrix {
        self.block(0, self.coefficient_width)
    }

    /// Copy of the equality block.
    #[must_use]
    pub fn equality(&self) -> FractionMatrix {
        self.block(self.coefficient_width, self.num_cols())
    }

    fn block(&self, start: usize, end: usize) -> FractionMatrix {
        match self.matrix.submatrix(start, end) {
            Ok(block) => block,
            Err(err) => unreachable!("cut point is validated at construction: {err}"),
        }
    }

    /// The equality rows of a fully determined system.
    ///
    /// Returns `Some` only when the first `coefficient_width` rows of the
    /// coefficient block form an identity, i.e. the system has been reduced
    /// to a unique solution.
    #[must_use]
    pub fn unique_solution(&self) -> Option<FractionMatrix> {
        let n = self.coefficient_width;
        if self.num_rows() < n {
            return None;
        }
        let is_identity = (0..n).all(|r| {
            (0..n).all(|c| if r == c { self.is_one(r, c) } else { self.is_zero(r, c) })
        });
        if !is_identity {
            return None;
        }
        let rows = (0..n)
            .map(|r| self.matrix.row(r)[n..].to_vec())
            .collect();
        FractionMatrix::from_rows(rows).ok()
    }

    // Predicates

    /// Returns true if the entry at (row, col) is zero.
    #[must_use]
    pub fn is_zero(&self, row: usize, col: usize) -> bool {
        self.matrix[(row, col)].is_zero()
    }

    /// Returns true if the entry at (row, col) is exactly `1/1`.
    #[must_use]
    pub fn is_one(&self, row: usize, col: usize) -> bool {
        self.matrix[(row, col)].is_one()
    }

    /// Returns true if every column before `width_limit` in `row` is zero.
    #[must_use]
    pub fn is_zero_row(&self, row: usize, width_limit: usize) -> bool {
        self.matrix.row(row)[..width_limit]
            .iter()
            .all(Zero::is_zero)
    }

    // Scalars

    /// The multiplier that turns the entry at (row, col) into one.
    ///
    /// # Panics
    ///
    /// Panics if the entry is zero.
    #[must_use]
    pub fn normalizing_scalar(&self, row: usize, col: usize) -> Rational {
        self.matrix[(row, col)].recip()
    }

    /// The multiplier `-(e[r2,c2] / e[r1,c1])`: adding row `r1` scaled by it
    /// into row `r2` zeroes column `c1` of row `r2` when `c1 == c2`.
    ///
    /// # Panics
    ///
    /// Panics if the entry at (r1, c1) is zero.
    #[must_use]
    pub fn elimination_scalar(&self, r1: usize, c1: usize, r2: usize, c2: usize) -> Rational {
        -(&self.matrix[(r2, c2)] / &self.matrix[(r1, c1)])
    }

    // Row operations

    /// `row[dst] += row[src] * scalar`, skipping columns where `row[src]` is zero.
    ///
    /// # Panics
    ///
    /// Panics if either row is out of bounds.
    pub fn add_scaled_row(&mut self, src: usize, dst: usize, scalar: &Rational) {
        let width = self.num_cols();
        assert!(src < self.num_rows() && dst < self.num_rows(), "row out of bounds");
        for c in 0..width {
            let source = &self.matrix[(src, c)];
            if source.is_zero() {
                continue;
            }
            let delta = source * scalar;
            let target = &mut self.matrix.row_mut(dst)[c];
            *target = &*target + &delta;
        }
    }

    /// Multiplies every non-zero entry of `row` by `scalar`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn scale_row(&mut self, row: usize, scalar: &Rational) {
        for value in self.matrix.row_mut(row) {
            if !value.is_zero() {
                *value = &*value * scalar;
            }
        }
    }

    /// Exchanges two rows.
    ///
    /// # Panics
    ///
    /// Panics if either row is out of bounds.
    pub fn swap_rows(&mut self, r1: usize, r2: usize) {
        assert!(r1 < self.num_rows() && r2 < self.num_rows(), "row out of bounds");
        self.matrix.swap_rows(r1, r2);
    }

    /// Moves row `from` to index `to`; the rows in between slide by one and
    /// keep their relative order.
    ///
    /// # Panics
    ///
    /// Panics if either row is out of bounds.
    pub fn move_row(&mut self, from: usize, to: usize) {
        assert!(from < self.num_rows() && to < self.num_rows(), "row out of bounds");
        self.matrix.move_row(from, to);
    }

    /// Largest bit length of any numerator or denominator in `row`.
    #[must_use]
    pub fn row_bit_len(&self, row: usize) -> usize {
        self.matrix
            .row(row)
            .iter()
            .map(Rational::bit_len)
            .max()
            .unwrap_or(0)
    }
}

impl From<LinearSystem> for FractionMatrix {
    fn from(system: LinearSystem) -> Self {
        system.into_matrix()
    }
}
