//! Column-aligned rendering of matrices and linear systems.
//!
//! The layout is chosen by a [`RenderConfig`] value rather than by passing
//! formatting closures around: [`RenderStyle`] picks the delimiters and
//! `approximate_digits` switches exact entries for rounded decimals.
//!
//! ```text
//! plain matrix   | 1 1/2 |        plain system   | 1 0 | 2 |
//!                | 3   4 |                       | 0 1 | 1 |
//! ```

use quotient_integers::Rational;

use crate::{FractionMatrix, LinearSystem};

/// Output flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// `| a b | c |` rows.
    #[default]
    Plain,
    /// `\begin{bmatrix} a & b & \vrule & c \\ \end{bmatrix}`.
    Latex,
}

/// How a matrix or system is turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderConfig {
    /// Delimiter style.
    pub style: RenderStyle,
    /// Show entries as decimals rounded to this many digits instead of
    /// exact fractions. Display only; never fed back into computation.
    pub approximate_digits: Option<usize>,
}

impl RenderConfig {
    /// Exact plain text.
    #[must_use]
    pub fn plain() -> Self {
        Self::default()
    }

    /// Exact LaTeX.
    #[must_use]
    pub fn latex() -> Self {
        Self {
            style: RenderStyle::Latex,
            approximate_digits: None,
        }
    }

    /// Plain text with decimals rounded to `digits` places.
    #[must_use]
    pub fn approximate(digits: usize) -> Self {
        Self {
            style: RenderStyle::Plain,
            approximate_digits: Some(digits),
        }
    }

    fn delimiters(self) -> Delimiters {
        match self.style {
            RenderStyle::Plain => Delimiters {
                row_begin: "| ",
                column: " ",
                cut: " | ",
                row_end: " |\n",
            },
            RenderStyle::Latex => Delimiters {
                row_begin: "\t",
                column: " & ",
                cut: " & \\vrule & ",
                row_end: " \\\\\n",
            },
        }
    }

    fn cell(self, value: &Rational) -> String {
        match (self.approximate_digits, self.style) {
            (Some(digits), _) => approximate(value, digits),
            (None, RenderStyle::Plain) => value.to_string(),
            (None, RenderStyle::Latex) => value.to_latex(),
        }
    }
}

struct Delimiters {
    row_begin: &'static str,
    column: &'static str,
    cut: &'static str,
    row_end: &'static str,
}

/// Decimal approximation of `value` rounded to `digits` places.
///
/// Integers are printed exactly, without a fractional part, and so is any
/// value outside the `f64` range.
#[must_use]
pub fn approximate(value: &Rational, digits: usize) -> String {
    let float = value.to_f64();
    if value.is_integer() || !float.is_finite() {
        return value.to_string();
    }
    let scale = 10f64.powi(i32::try_from(digits).unwrap_or(i32::MAX));
    let rounded = (float * scale).round() / scale;
    if rounded == 0.0 {
        // Avoid printing "-0".
        return "0".to_owned();
    }
    rounded.to_string()
}

/// Renders a matrix.
#[must_use]
pub fn render_matrix(matrix: &FractionMatrix, config: &RenderConfig) -> String {
    layout(matrix, None, *config)
}

/// Renders a linear system with a separator at the coefficient cut.
#[must_use]
pub fn render_system(system: &LinearSystem, config: &RenderConfig) -> String {
    layout(system.matrix(), Some(system.coefficient_width()), *config)
}

fn layout(matrix: &FractionMatrix, cut: Option<usize>, config: RenderConfig) -> String {
    let cells: Vec<Vec<String>> = matrix
        .rows()
        .map(|row| row.iter().map(|value| config.cell(value)).collect())
        .collect();

    let widths: Vec<usize> = (0..matrix.num_cols())
        .map(|c| cells.iter().map(|row| row[c].len()).max().unwrap_or(0).max(1))
        .collect();

    let delimiters = config.delimiters();
    let last = matrix.num_cols() - 1;
    let mut out = String::new();
    for row in &cells {
        out.push_str(delimiters.row_begin);
        for (c, cell) in row.iter().enumerate() {
            out.push_str(&format!("{cell:>width$}", width = widths[c]));
            out.push_str(if c == last {
                delimiters.row_end
            } else if cut == Some(c + 1) {
                delimiters.cut
            } else {
                delimiters.column
            });
        }
    }

    match config.style {
        RenderStyle::Plain => out,
        RenderStyle::Latex => format!("\\begin{{bmatrix}}\n{out}\\end{{bmatrix}}\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotient_integers::Integer;

    fn q(n: i64, d: i64) -> Rational {
        Rational::from_i64(n, d)
    }

    fn matrix(rows: Vec<Vec<Rational>>) -> FractionMatrix {
        FractionMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_plain_matrix_is_right_aligned() {
        let m = matrix(vec![vec![q(1, 1), q(1, 2)], vec![q(-3, 1), q(4, 1)]]);
        assert_eq!(
            render_matrix(&m, &RenderConfig::plain()),
            "|  1 1/2 |\n| -3   4 |\n"
        );
    }

    #[test]
    fn test_plain_system() {
        let m = matrix(vec![vec![q(1, 1), q(0, 1), q(2, 1)], vec![q(0, 1), q(1, 1), q(1, 1)]]);
        let s = LinearSystem::new(m, 2).unwrap();
        assert_eq!(
            render_system(&s, &RenderConfig::plain()),
            "| 1 0 | 2 |\n| 0 1 | 1 |\n"
        );
    }

    #[test]
    fn test_system_with_two_equality_columns() {
        let m = matrix(vec![vec![q(1, 1), q(2, 1), q(3, 1)]]);
        let s = LinearSystem::new(m, 1).unwrap();
        assert_eq!(render_system(&s, &RenderConfig::plain()), "| 1 | 2 3 |\n");
    }

    #[test]
    fn test_latex_system() {
        let m = matrix(vec![vec![q(1, 2), q(3, 1)]]);
        let s = LinearSystem::new(m, 1).unwrap();
        assert_eq!(
            render_system(&s, &RenderConfig::latex()),
            "\\begin{bmatrix}\n\t\\frac{1}{2} & \\vrule & 3 \\\\\n\\end{bmatrix}\n"
        );
    }

    #[test]
    fn test_latex_matrix() {
        let m = matrix(vec![vec![q(1, 1), q(2, 1)]]);
        assert_eq!(
            render_matrix(&m, &RenderConfig::latex()),
            "\\begin{bmatrix}\n\t1 & 2 \\\\\n\\end{bmatrix}\n"
        );
    }

    #[test]
    fn test_approximate_out_of_f64_range() {
        let ten_400 = format!("1{}", "0".repeat(400));
        let huge = Rational::new(Integer::from_decimal(&ten_400).unwrap(), Integer::new(3));
        assert_eq!(approximate(&huge, 2), format!("{ten_400}/3"));

        // Huge parts, ordinary value.
        let numerator = Integer::from_decimal(&format!("3{}1", "0".repeat(399))).unwrap();
        let denominator = Integer::from_decimal(&format!("4{}", "0".repeat(400))).unwrap();
        assert_eq!(approximate(&Rational::new(numerator, denominator), 2), "0.75");
    }

    #[test]
    fn test_approximate() {
        assert_eq!(approximate(&q(1, 3), 2), "0.33");
        assert_eq!(approximate(&q(-5, 2), 2), "-2.5");
        assert_eq!(approximate(&q(6, 3), 2), "2");
        assert_eq!(approximate(&q(-1, 1000), 2), "0");

        let m = matrix(vec![vec![q(2, 3), q(7, 1)]]);
        assert_eq!(
            render_matrix(&m, &RenderConfig::approximate(2)),
            "| 0.67 7 |\n"
        );
    }
}
