//! Property-based tests for row operations.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;
    use quotient_integers::Rational;

    use crate::{FractionMatrix, LinearSystem};

    fn rational() -> impl Strategy<Value = Rational> {
        (-50i64..50, 1i64..20).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    /// A system with 2..6 rows, 2..5 columns and coefficient width 1..cols.
    fn system() -> impl Strategy<Value = LinearSystem> {
        (2usize..6, 2usize..5)
            .prop_flat_map(|(rows, cols)| {
                (
                    prop::collection::vec(prop::collection::vec(rational(), cols), rows),
                    1..cols,
                )
            })
            .prop_map(|(rows, width)| {
                LinearSystem::new(FractionMatrix::from_rows(rows).unwrap(), width).unwrap()
            })
    }

    fn system_with_rows() -> impl Strategy<Value = (LinearSystem, usize, usize)> {
        system().prop_flat_map(|s| {
            let n = s.num_rows();
            (Just(s), 0..n, 0..n)
        })
    }

    proptest! {
        #[test]
        fn swap_twice_is_identity((s, a, b) in system_with_rows()) {
            let mut t = s.clone();
            t.swap_rows(a, b);
            t.swap_rows(a, b);
            prop_assert_eq!(t, s);
        }

        #[test]
        fn add_then_subtract_restores_row(
            (s, src, dst) in system_with_rows(),
            k in rational(),
        ) {
            prop_assume!(src != dst);
            let mut t = s.clone();
            t.add_scaled_row(src, dst, &k);
            t.add_scaled_row(src, dst, &-&k);
            prop_assert_eq!(t, s);
        }

        #[test]
        fn move_row_is_a_rotation((s, from, to) in system_with_rows()) {
            let mut t = s.clone();
            t.move_row(from, to);

            let mut expected: Vec<Vec<Rational>> =
                s.matrix().rows().map(<[Rational]>::to_vec).collect();
            let row = expected.remove(from);
            expected.insert(to, row);

            let actual: Vec<Vec<Rational>> =
                t.matrix().rows().map(<[Rational]>::to_vec).collect();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn scale_row_preserves_zero_pattern((s, r, _) in system_with_rows(), k in rational()) {
            prop_assume!(!k.is_zero());
            let mut t = s.clone();
            t.scale_row(r, &k);
            for c in 0..s.num_cols() {
                prop_assert_eq!(t.is_zero(r, c), s.is_zero(r, c));
                prop_assert_eq!(t.element(r, c), &s.element(r, c) * &k);
            }
        }
    }
}
