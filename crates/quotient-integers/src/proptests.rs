//! Property-based tests for exact arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{ArithmeticError, Integer, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    fn non_zero_rational() -> impl Strategy<Value = Rational> {
        (non_zero_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    proptest! {
        #[test]
        fn simplified_form_is_canonical(n in small_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d);
            prop_assert!(!r.denominator().is_negative());
            prop_assert!(!r.denominator().is_zero());
            prop_assert!(r.numerator().gcd(r.denominator()).is_one());
        }

        #[test]
        fn display_parse_round_trip(a in rational()) {
            let text = a.to_string();
            prop_assert_eq!(Rational::parse(&text).unwrap(), a);
        }

        #[test]
        fn add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn add_associative(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn add_negation_is_sub(a in rational(), b in rational()) {
            prop_assert_eq!(&a + &(-&b), &a - &b);
        }

        #[test]
        fn div_is_mul_by_recip(a in rational(), b in non_zero_rational()) {
            prop_assert_eq!(a.checked_div(&b).unwrap(), &a * &b.recip());
        }

        #[test]
        fn multiplicative_inverse(a in non_zero_rational()) {
            prop_assert!((&a * &a.recip()).is_one());
        }

        #[test]
        fn zero_has_no_recip(d in non_zero_int()) {
            let zero = Rational::from_i64(0, d);
            prop_assert_eq!(zero.checked_recip(), Err(ArithmeticError::DivisionByZero));
            prop_assert_eq!(
                Rational::one().checked_div(&zero),
                Err(ArithmeticError::DivisionByZero)
            );
        }

        #[test]
        fn integer_gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);
            prop_assert!((a % g.clone()).is_zero());
            prop_assert!((b % g).is_zero());
        }
    }
}
