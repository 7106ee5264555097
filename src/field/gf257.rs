//! GF(257): integers modulo the prime 257
//!
//! 257 is prime, so plain modular arithmetic already forms a field and no
//! polynomial reduction is involved. Note that 256 is a valid element here,
//! so GF(257) values do not fit in a byte.

use super::{format_radix, Field};
use crate::error::{AlgebraError, Result};
use std::ops::{Add, Mul, Sub};

/// Order (and characteristic) of the field
pub const GF257_ORDER: usize = 257;

const P: u32 = GF257_ORDER as u32;

/// Element of GF(257)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Field257Element {
    value: u16,
}

impl Field257Element {
    pub const ZERO: Self = Self { value: 0 };
    pub const ONE: Self = Self { value: 1 };

    /// Create an element from an integer in [0, 257)
    pub fn new(n: usize) -> Result<Self> {
        if n >= GF257_ORDER {
            return Err(AlgebraError::OutOfRange {
                value: n,
                bound: GF257_ORDER,
            });
        }
        Ok(Self { value: n as u16 })
    }

    pub fn value(&self) -> u16 {
        self.value
    }

    fn reduced(n: u32) -> Self {
        Self {
            value: (n % P) as u16,
        }
    }

    fn find_reciprocal(self) -> Result<Self> {
        if self.value == 0 {
            return Err(AlgebraError::DivisionByZero);
        }
        match (1..P)
            .map(Self::reduced)
            .find(|t| self.times(t) == Self::ONE)
        {
            Some(t) => Ok(t),
            None => unreachable!("Could not find inverse for {}", self.value),
        }
    }
}

impl Field for Field257Element {
    const NAME: &'static str = "GF(257)";

    fn zero() -> Self {
        Self::ZERO
    }

    fn one() -> Self {
        Self::ONE
    }

    fn plus(&self, b: &Self) -> Self {
        Self::reduced(self.value as u32 + b.value as u32)
    }

    fn minus(&self, b: &Self) -> Self {
        Self::reduced(self.value as u32 + P - b.value as u32)
    }

    fn times(&self, b: &Self) -> Self {
        Self::reduced(self.value as u32 * b.value as u32)
    }

    fn divided_by(&self, b: &Self) -> Result<Self> {
        Ok(self.times(&b.find_reciprocal()?))
    }

    fn from_index(index: usize) -> Result<Self> {
        Self::new(index)
    }

    fn to_string_radix(&self, radix: u32) -> String {
        format_radix(self.value as u64, radix)
    }
}

impl Add for Field257Element {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.plus(&rhs)
    }
}

impl Sub for Field257Element {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.minus(&rhs)
    }
}

impl Mul for Field257Element {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.times(&rhs)
    }
}

impl From<u8> for Field257Element {
    fn from(value: u8) -> Self {
        Self {
            value: value as u16,
        }
    }
}

impl From<Field257Element> for u16 {
    fn from(val: Field257Element) -> Self {
        val.value
    }
}

impl std::fmt::Display for Field257Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
