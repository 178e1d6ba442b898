//! Whole-matrix calculator operations.
//!
//! `*` and `/` scale a matrix by a 1×1 operand, `+` and `-` work
//! elementwise, and `s` sums every element of the left operand.

use std::fmt;
use std::str::FromStr;

use quotient_linalg::{FractionMatrix, MatrixError};
use thiserror::Error;

/// Errors from calculator operations.
#[derive(Debug, Error)]
pub enum CalcError {
    /// The operator symbol is not one of `+ - * / s`.
    #[error("unknown operator {symbol:?}; expected one of + - * / s")]
    UnknownOperator {
        /// What was typed.
        symbol: String,
    },

    /// `*` or `/` with neither operand 1×1.
    #[error("operator {operator} needs a 1x1 operand on one side")]
    NoScalarOperand {
        /// The operator.
        operator: Operator,
    },

    /// A binary operator was applied without a right operand.
    #[error("operator {operator} needs a right operand")]
    MissingOperand {
        /// The operator.
        operator: Operator,
    },

    /// The matrices do not fit the operation.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// A calculator operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*` by a scalar.
    Mul,
    /// `/` by a scalar.
    Div,
    /// `s`: sum of all elements of the left operand.
    Sum,
}

impl Operator {
    /// Whether the operator takes a right operand.
    #[must_use]
    pub fn is_binary(self) -> bool {
        !matches!(self, Operator::Sum)
    }

    /// Computes `a op b`.
    ///
    /// For `/` the 1×1 operand is the divisor, whichever side it is on.
    ///
    /// # Errors
    ///
    /// Fails on mismatched shapes, on division by zero, when `*` or `/` has
    /// no 1×1 operand, or when a binary operator is missing `b`.
    pub fn apply(
        self,
        a: &FractionMatrix,
        b: Option<&FractionMatrix>,
    ) -> Result<FractionMatrix, CalcError> {
        if self == Operator::Sum {
            return Ok(FractionMatrix::from_scalar(a.sum_elements()));
        }
        let b = b.ok_or(CalcError::MissingOperand { operator: self })?;
        let result = match self {
            Operator::Add => a.add(b)?,
            Operator::Sub => a.sub(b)?,
            Operator::Mul | Operator::Div => {
                let (matrix, scalar) = match (a.as_scalar(), b.as_scalar()) {
                    (Some(k), _) => (b, k),
                    (None, Some(k)) => (a, k),
                    (None, None) => return Err(CalcError::NoScalarOperand { operator: self }),
                };
                if self == Operator::Mul {
                    matrix.scale(scalar)
                } else {
                    matrix.divide_by(scalar)?
                }
            }
            Operator::Sum => unreachable!("handled above"),
        };
        Ok(result)
    }

    fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Sum => 's',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "*" => Ok(Operator::Mul),
            "/" => Ok(Operator::Div),
            "s" | "S" => Ok(Operator::Sum),
            other => Err(CalcError::UnknownOperator {
                symbol: other.to_owned(),
            }),
        }
    }
}
