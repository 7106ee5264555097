//! GF(2^8) arithmetic over carry-less polynomial operations
//!
//! ## Field Polynomial
//!
//! Bytes are polynomials over GF(2) reduced modulo the irreducible
//! polynomial x⁸ + x⁴ + x³ + x + 1 (0x11B, 283 decimal):
//!
//! - Addition and subtraction are both XOR
//! - Multiplication is a carry-less multiply followed by the remainder of a
//!   carry-less division by 0x11B
//! - Division multiplies by the reciprocal, found by searching all 255
//!   nonzero bytes
//!
//! The reciprocal search is bounded by the field size and is only suitable
//! for fields this small.

use super::{format_radix, Field};
use crate::carryless::{carryless_div32, carryless_mul32};
use crate::error::{AlgebraError, Result};
use std::ops::{Add, Mul, Sub};

/// GF(2^8) irreducible polynomial: 0x11B (x⁸ + x⁴ + x³ + x + 1)
pub const GF256_MODULUS: u32 = 0x11B;

/// Number of elements in GF(2^8)
pub const GF256_ORDER: usize = 256;

/// Element of GF(2^8)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Field256Element {
    value: u8,
}

impl Field256Element {
    pub const ZERO: Self = Self { value: 0 };
    pub const ONE: Self = Self { value: 1 };

    /// Create an element from an integer in [0, 256)
    pub fn new(n: usize) -> Result<Self> {
        if n >= GF256_ORDER {
            return Err(AlgebraError::OutOfRange {
                value: n,
                bound: GF256_ORDER,
            });
        }
        Ok(Self { value: n as u8 })
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    fn multiply(self, b: Self) -> Self {
        let t = carryless_mul32(self.value as u32, b.value as u32);
        match carryless_div32(t, GF256_MODULUS) {
            // The remainder has fewer bits than the 9-bit modulus
            Ok((_, r)) => Self { value: r as u8 },
            Err(_) => unreachable!("GF(2^8) modulus is nonzero"),
        }
    }

    fn find_reciprocal(self) -> Result<Self> {
        if self.value == 0 {
            return Err(AlgebraError::DivisionByZero);
        }
        match (1..=u8::MAX)
            .map(Self::from)
            .find(|t| self.multiply(*t) == Self::ONE)
        {
            Some(t) => Ok(t),
            None => unreachable!("Could not find inverse for {}", self.value),
        }
    }
}

impl Field for Field256Element {
    const NAME: &'static str = "GF(2^8)";

    fn zero() -> Self {
        Self::ZERO
    }

    fn one() -> Self {
        Self::ONE
    }

    fn plus(&self, b: &Self) -> Self {
        Self {
            value: self.value ^ b.value,
        }
    }

    fn minus(&self, b: &Self) -> Self {
        Self {
            value: self.value ^ b.value,
        }
    }

    fn times(&self, b: &Self) -> Self {
        self.multiply(*b)
    }

    fn divided_by(&self, b: &Self) -> Result<Self> {
        Ok(self.multiply(b.find_reciprocal()?))
    }

    fn from_index(index: usize) -> Result<Self> {
        Self::new(index)
    }

    fn to_string_radix(&self, radix: u32) -> String {
        format_radix(self.value as u64, radix)
    }
}

// Addition (XOR in GF(2^8))
impl Add for Field256Element {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.plus(&rhs)
    }
}

// Subtraction (same as addition in GF(2^n))
impl Sub for Field256Element {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.minus(&rhs)
    }
}

impl Mul for Field256Element {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

// Every byte is a field element
impl From<u8> for Field256Element {
    fn from(value: u8) -> Self {
        Self { value }
    }
}

impl From<Field256Element> for u8 {
    fn from(val: Field256Element) -> Self {
        val.value
    }
}

impl std::fmt::Display for Field256Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl std::fmt::LowerHex for Field256Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::LowerHex::fmt(&self.value, f)
    }
}
