//! Reading matrices from free-form text.
//!
//! Input is forgiving about decoration: anything other than digits, signs,
//! `/`, `.` and line breaks acts as a separator, so `| 1 2 | 3 |`,
//! `1, 2, 3` and `1 2 3` all read as the same row. A `.` is kept only so that
//! decimals such as `1.5` are rejected instead of being split in two.

use std::io::{self, BufRead};

use quotient_integers::Rational;

use crate::{FractionMatrix, MatrixError};

fn is_kept(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, '/' | '-' | '+' | '.' | '\n')
}

/// Parses one matrix, one row per non-blank line.
///
/// # Errors
///
/// Returns [`MatrixError::Entry`] for a token that is not a fraction,
/// [`MatrixError::Ragged`] for rows of different lengths and
/// [`MatrixError::Empty`] when there is nothing to read.
pub fn parse_matrix(text: &str) -> Result<FractionMatrix, MatrixError> {
    let normalized: String = text
        .chars()
        .map(|ch| if is_kept(ch) { ch } else { ' ' })
        .collect();

    let rows = normalized
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(row, line)| {
            line.split_whitespace()
                .enumerate()
                .map(|(col, token)| {
                    Rational::parse(token).map_err(|source| MatrixError::Entry { row, col, source })
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    FractionMatrix::from_rows(rows)
}

/// Reads lines up to (not including) the first empty line or end of input.
///
/// # Errors
///
/// Propagates I/O errors from the reader.
pub fn read_block<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut block = String::new();
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let content = line.trim_end_matches(['\n', '\r']);
        if content.is_empty() {
            break;
        }
        block.push_str(content);
        block.push('\n');
    }
    Ok(block)
}
