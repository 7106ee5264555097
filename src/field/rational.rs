//! Exact rational numbers over arbitrary-precision integers
//!
//! Values are always stored in canonical form: numerator and denominator
//! share no common factor, the denominator is positive, and zero is `0/1`.
//! Equality is therefore a plain comparison of the two integers.

use super::Field;
use crate::error::{AlgebraError, Result};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Exact rational number in lowest terms
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigRational {
    n: BigInt,
    d: BigInt,
}

impl BigRational {
    /// Create `n / d` in canonical form; fails when `d` is zero
    pub fn new(n: BigInt, d: BigInt) -> Result<Self> {
        if d.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(Self::canonical(n, d))
    }

    /// Create `n / 1`
    pub fn from_integer(n: impl Into<BigInt>) -> Self {
        Self {
            n: n.into(),
            d: BigInt::one(),
        }
    }

    pub fn numerator(&self) -> &BigInt {
        &self.n
    }

    pub fn denominator(&self) -> &BigInt {
        &self.d
    }

    // Caller guarantees d != 0
    fn canonical(n: BigInt, d: BigInt) -> Self {
        if n.is_zero() {
            return Self {
                n,
                d: BigInt::one(),
            };
        }

        let (n, d) = if d.is_negative() { (-n, -d) } else { (n, d) };
        let gcd = n.gcd(&d);
        Self {
            n: n / &gcd,
            d: d / gcd,
        }
    }
}

impl Field for BigRational {
    const NAME: &'static str = "Q";

    fn zero() -> Self {
        Self::from_integer(0)
    }

    fn one() -> Self {
        Self::from_integer(1)
    }

    fn plus(&self, b: &Self) -> Self {
        let gcd = self.d.gcd(&b.d);
        let a1 = &self.n * (&b.d / &gcd);
        let a2 = &b.n * (&self.d / &gcd);
        Self::canonical(a1 + a2, &self.d * &b.d / gcd)
    }

    fn minus(&self, b: &Self) -> Self {
        let gcd = self.d.gcd(&b.d);
        let a1 = &self.n * (&b.d / &gcd);
        let a2 = &b.n * (&self.d / &gcd);
        Self::canonical(a1 - a2, &self.d * &b.d / gcd)
    }

    fn times(&self, b: &Self) -> Self {
        Self::canonical(&self.n * &b.n, &self.d * &b.d)
    }

    fn divided_by(&self, b: &Self) -> Result<Self> {
        if b.n.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(Self::canonical(&self.n * &b.d, &self.d * &b.n))
    }

    fn from_index(index: usize) -> Result<Self> {
        Ok(Self::from_integer(index))
    }

    fn to_string_radix(&self, radix: u32) -> String {
        if self.d.is_one() {
            return self.n.to_str_radix(radix);
        }
        format!("{}/{}", self.n.to_str_radix(radix), self.d.to_str_radix(radix))
    }
}

impl Default for BigRational {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for BigRational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_radix(10))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64, d: i64) -> BigRational {
        BigRational::new(n.into(), d.into()).unwrap()
    }

    #[test]
    fn test_canonical_form() {
        assert_eq!(r(0, 5), BigRational::zero());
        assert_eq!(r(5, -3), r(-5, 3));
        assert_eq!(r(-6, -10), r(3, 5));
        assert_eq!(r(-6, -10).denominator(), &BigInt::from(5));
    }

    #[test]
    fn test_zero_denominator() {
        assert_eq!(
            BigRational::new(1.into(), 0.into()),
            Err(AlgebraError::DivisionByZero)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(r(5, 6).to_string(), "5/6");
        assert_eq!(r(-255, 1).to_string_radix(16), "-ff");
        assert_eq!(r(0, 7).to_string(), "0");
    }
}
