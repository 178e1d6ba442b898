//! Exact fractions over arbitrary precision integers.
//!
//! A [`Rational`] is a numerator/denominator pair that is always kept in
//! lowest terms with the sign carried by the numerator. Values are immutable:
//! every operation returns a fresh, simplified value.

use num_traits::{One, Zero};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::{ArithmeticError, Integer};

/// An exact fraction `numerator / denominator`.
///
/// Invariants: the denominator is positive and shares no factor with the
/// numerator. Zero is stored as `0/1`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: Integer,
    denominator: Integer,
}

impl Rational {
    /// Creates a fraction from numerator and denominator, simplifying it.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: Integer, denominator: Integer) -> Self {
        assert!(!denominator.is_zero(), "denominator cannot be zero");
        Self::simplify(numerator, denominator)
    }

    /// Creates a fraction from numerator and denominator, simplifying it.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the denominator is zero.
    pub fn try_new(numerator: Integer, denominator: Integer) -> Result<Self, ArithmeticError> {
        if denominator.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self::simplify(numerator, denominator))
    }

    /// Creates a fraction from i64 numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Creates the fraction `n/1`.
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self {
            numerator: n,
            denominator: Integer::one(),
        }
    }

    /// Divides both parts by their gcd and moves the sign to the numerator.
    ///
    /// The denominator must be non-zero.
    fn simplify(numerator: Integer, denominator: Integer) -> Self {
        let mut gcd = numerator.gcd(&denominator);
        if denominator.is_negative() {
            gcd = -gcd;
        }
        if gcd.is_one() {
            return Self {
                numerator,
                denominator,
            };
        }
        Self {
            numerator: numerator / &gcd,
            denominator: denominator / &gcd,
        }
    }

    /// Parses `"<int>"` or `"<int>/<int>"`, surrounding whitespace allowed.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::MalformedFraction`] for any other shape and
    /// [`ArithmeticError::DivisionByZero`] for a zero denominator.
    pub fn parse(text: &str) -> Result<Self, ArithmeticError> {
        let trimmed = text.trim();
        let mut parts = trimmed.split('/');
        let numerator = parts.next().unwrap_or_default();
        let denominator = parts.next();
        if parts.next().is_some() {
            return Err(ArithmeticError::malformed(text));
        }

        let numerator =
            Integer::from_decimal(numerator).map_err(|_| ArithmeticError::malformed(text))?;
        match denominator {
            None => Ok(Self::from_integer(numerator)),
            Some(denominator) => {
                let denominator = Integer::from_decimal(denominator)
                    .map_err(|_| ArithmeticError::malformed(text))?;
                Self::try_new(numerator, denominator)
            }
        }
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    /// Returns the denominator, always positive.
    #[must_use]
    pub fn denominator(&self) -> &Integer {
        &self.denominator
    }

    /// Returns true if the denominator is one.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.numerator.signum()
    }

    /// Returns the reciprocal `d/n`.
    ///
    /// # Panics
    ///
    /// Panics if the value is zero. Use [`Rational::checked_recip`] when the
    /// operand is not known to be non-zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        assert!(!self.is_zero(), "cannot take reciprocal of zero");
        Self::simplify(self.denominator.clone(), self.numerator.clone())
    }

    /// Returns the reciprocal `d/n`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the value is zero.
    pub fn checked_recip(&self) -> Result<Self, ArithmeticError> {
        if self.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(self.recip())
    }

    /// Returns `self / rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self::simplify(
            &self.numerator * &rhs.denominator,
            &self.denominator * &rhs.numerator,
        ))
    }

    /// Bit length of the larger of numerator and denominator.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.numerator.bit_len().max(self.denominator.bit_len())
    }

    /// Lossy floating point approximation, for display only.
    ///
    /// Both parts are shifted into `f64` range first, so a ratio of two huge
    /// integers still converts. Values beyond `f64::MAX` give an infinity.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        const MAX_BITS: usize = 1000;
        let excess = self.bit_len().saturating_sub(MAX_BITS);
        if excess == 0 {
            return self.numerator.to_f64() / self.denominator.to_f64();
        }
        let numerator = self.numerator.shift_right(excess);
        let denominator = self.denominator.shift_right(excess);
        numerator.to_f64() / denominator.to_f64()
    }

    /// Integer part, truncated toward zero, if it fits in an i64.
    #[must_use]
    pub fn trunc_to_i64(&self) -> Option<i64> {
        (&self.numerator / &self.denominator).to_i64()
    }

    /// LaTeX form: `n` for integers, `\frac{n}{d}` otherwise.
    #[must_use]
    pub fn to_latex(&self) -> String {
        if self.is_integer() {
            self.numerator.to_string()
        } else {
            format!("\\frac{{{}}}{{{}}}", self.numerator, self.denominator)
        }
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(Integer::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(Integer::one())
    }

    fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl FromStr for Rational {
    type Err = ArithmeticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// n1/d1 + n2/d2 = (n1*d2 + n2*d1) / (d1*d2)
impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational::simplify(
            &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }
}

// n1/d1 - n2/d2 = (n1*d2 - n2*d1) / (d1*d2)
impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational::simplify(
            &self.numerator * &rhs.denominator - &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational::simplify(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

/// # Panics
///
/// Panics on division by zero; see [`Rational::checked_div`].
impl Div for &Rational {
    type Output = Rational;

    fn div(self, rhs: Self) -> Self::Output {
        assert!(!rhs.is_zero(), "division by zero");
        Rational::simplify(
            &self.numerator * &rhs.denominator,
            &self.denominator * &rhs.numerator,
        )
    }
}

macro_rules! forward_owned_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for Rational {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                (&self).$method(&rhs)
            }
        }

        impl $trait<&Rational> for Rational {
            type Output = Self;

            fn $method(self, rhs: &Rational) -> Self::Output {
                (&self).$method(rhs)
            }
        }
    };
}

forward_owned_binop!(Add, add);
forward_owned_binop!(Sub, sub);
forward_owned_binop!(Mul, mul);
forward_owned_binop!(Div, div);

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(Integer::from(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64, d: i64) -> Rational {
        Rational::from_i64(n, d)
    }

    #[test]
    fn test_basic_ops() {
        let a = q(1, 2);
        let b = q(1, 3);

        // 1/2 + 1/3 = 5/6
        assert_eq!(&a + &b, q(5, 6));
        // 1/2 - 1/3 = 1/6
        assert_eq!(&a - &b, q(1, 6));
        // 1/2 * 1/3 = 1/6
        assert_eq!(&a * &b, q(1, 6));
        // 1/2 / 1/3 = 3/2
        assert_eq!(&a / &b, q(3, 2));
    }

    #[test]
    fn test_reduction_and_sign() {
        let r = q(4, -6);
        assert_eq!(r.numerator().to_i64(), Some(-2));
        assert_eq!(r.denominator().to_i64(), Some(3));

        let z = q(0, -5);
        assert!(z.is_zero());
        assert_eq!(z.denominator().to_i64(), Some(1));
    }

    #[test]
    fn test_recip() {
        assert_eq!(q(-2, 3).recip(), q(-3, 2));
        assert_eq!(q(0, 1).checked_recip(), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    #[should_panic(expected = "cannot take reciprocal of zero")]
    fn test_recip_of_zero_panics() {
        let _ = Rational::zero().recip();
    }

    #[test]
    fn test_checked_div() {
        assert_eq!(q(3, 4).checked_div(&q(3, 8)), Ok(q(2, 1)));
        assert_eq!(
            q(3, 4).checked_div(&Rational::zero()),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(Rational::parse("7").unwrap(), q(7, 1));
        assert_eq!(Rational::parse("-6/8").unwrap(), q(-3, 4));
        assert_eq!(Rational::parse("3/-9").unwrap(), q(-1, 3));
        assert_eq!(" 2/4 ".parse::<Rational>().unwrap(), q(1, 2));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "1/2/3", "a", "1.5", "1/", "/2", "1 / 2x"] {
            assert!(
                matches!(
                    Rational::parse(bad),
                    Err(ArithmeticError::MalformedFraction { .. })
                ),
                "{bad:?} should be malformed"
            );
        }
        assert_eq!(Rational::parse("1/0"), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn test_predicates() {
        assert!(q(3, 3).is_one());
        assert!(!q(1, 2).is_one());
        assert!(q(0, 7).is_zero());
        assert!(q(6, 3).is_integer());
    }

    #[test]
    fn test_display_and_latex() {
        assert_eq!(q(3, 1).to_string(), "3");
        assert_eq!(q(2, -3).to_string(), "-2/3");
        assert_eq!(q(2, 3).to_latex(), "\\frac{2}{3}");
        assert_eq!(q(-4, 2).to_latex(), "-2");
    }

    #[test]
    fn test_conversions() {
        assert!((q(1, 4).to_f64() - 0.25).abs() < f64::EPSILON);
        assert_eq!(q(-7, 2).trunc_to_i64(), Some(-3));
    }

    #[test]
    fn test_to_f64_of_huge_parts() {
        // (10^400 + 1) / 10^400: both parts overflow f64 on their own.
        let big = format!("1{}", "0".repeat(400));
        let numerator = Integer::from_decimal(&format!("1{}1", "0".repeat(399))).unwrap();
        let denominator = Integer::from_decimal(&big).unwrap();
        let value = Rational::new(numerator, denominator);
        assert!((value.to_f64() - 1.0).abs() < 1e-9);

        let huge = Rational::new(Integer::from_decimal(&big).unwrap(), Integer::new(3));
        assert!(huge.to_f64().is_infinite());
    }

    #[test]
    fn test_sum() {
        let values = [q(1, 2), q(1, 3), q(1, 6)];
        assert!(values.iter().sum::<Rational>().is_one());
    }
}
