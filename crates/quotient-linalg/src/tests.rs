//! Integration tests for quotient-linalg.

#[cfg(test)]
mod integration_tests {
    use crate::input::parse_matrix;
    use crate::render::{render_system, RenderConfig};
    use crate::{FractionMatrix, LinearSystem, MatrixError};
    use quotient_integers::Rational;

    #[test]
    fn test_parse_render_round_trip() {
        let text = "| 1 -1/2 | 3 |\n| 0  7/3 | 0 |\n";
        let matrix = parse_matrix(text).unwrap();
        let system = LinearSystem::new(matrix, 2).unwrap();
        assert_eq!(render_system(&system, &RenderConfig::plain()), text);
    }

    #[test]
    fn test_blocks_round_trip_through_parsed_input() {
        let total = parse_matrix("2 1 5\n1 -1 1").unwrap();
        let system = LinearSystem::new(total.clone(), 2).unwrap();

        let coefficients = system.coefficients();
        let equality = system.equality();
        assert_eq!(coefficients.combine(&equality).unwrap(), total);

        // A * [2, 1]^T reproduces the equality column.
        let x = parse_matrix("2\n1").unwrap();
        assert_eq!(coefficients.mul(&x).unwrap(), equality);
    }

    #[test]
    fn test_scalar_matrix_arithmetic() {
        let a = parse_matrix("1/2 1/3\n1/4 1/5").unwrap();
        let k = parse_matrix("6").unwrap();
        let scaled = a.scale(k.as_scalar().unwrap());
        assert_eq!(scaled, parse_matrix("3 2\n3/2 6/5").unwrap());

        let back = scaled.divide_by(k.as_scalar().unwrap()).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn test_errors_surface_before_mutation() {
        let a = parse_matrix("1 2\n3 4").unwrap();
        let b = parse_matrix("1 2 3").unwrap();
        let before = a.clone();
        assert!(matches!(
            a.add(&b),
            Err(MatrixError::DimensionMismatch { .. })
        ));
        assert_eq!(a, before);
    }

    #[test]
    fn test_row_operations_never_move_the_cut() {
        let matrix = FractionMatrix::from_integer_rows(&[&[1, 2, 3], &[4, 5, 6]]).unwrap();
        let mut system = LinearSystem::new(matrix, 2).unwrap();
        system.swap_rows(0, 1);
        system.add_scaled_row(0, 1, &Rational::from(-1));
        system.scale_row(1, &Rational::from_i64(1, 3));
        system.move_row(1, 0);
        assert_eq!(system.coefficient_width(), 2);
        assert_eq!(system.equality().num_cols(), 1);
    }
}
