//! Errors raised by exact arithmetic.

use thiserror::Error;

/// Errors that can occur while building or combining fractions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// A reciprocal or quotient was requested for a zero value,
    /// or a fraction was written with a zero denominator.
    #[error("division by zero")]
    DivisionByZero,

    /// A token was neither `<int>` nor `<int>/<int>`.
    #[error("malformed fraction: \"{input}\"")]
    MalformedFraction {
        /// The offending text.
        input: String,
    },
}

impl ArithmeticError {
    pub(crate) fn malformed(input: &str) -> Self {
        Self::MalformedFraction {
            input: input.to_owned(),
        }
    }
}
