//! Carry-less (GF(2)[x]) integer arithmetic
//!
//! Integers are read as polynomials over GF(2): bit `i` is the coefficient of
//! x^i. Addition is XOR, multiplication is shift-and-XOR, and division is
//! polynomial long division where each subtraction step is again an XOR.
//!
//! ## Widths
//!
//! The `*32` functions work on fixed `u32` registers and back the GF(2^8)
//! field. The `*_big` functions mirror them exactly over [`BigUint`] for
//! operands of any size.
//!
//! `carryless_mul32` truncates its result to 32 bits. That is only exact
//! while the true product fits, which always holds for two byte operands
//! (at most 15 significant bits). It is not a general-purpose carry-less
//! multiply.

use crate::error::{AlgebraError, Result};
use num_bigint::BigUint;
use num_traits::Zero;

/// Carry-less addition: bitwise XOR
#[inline]
pub fn carryless_add32(a: u32, b: u32) -> u32 {
    a ^ b
}

/// Carry-less multiplication truncated to 32 bits
///
/// For each set bit `i` of `b`, `a << i` is XORed into the product. Bits
/// shifted past bit 31 are lost.
pub fn carryless_mul32(a: u32, b: u32) -> u32 {
    let mut product = 0u32;
    let mut t = b;
    let mut i = 0u32;
    while t > 0 {
        if t & 1 != 0 {
            product ^= a << i;
        }
        t >>= 1;
        i += 1;
    }
    product
}

/// Carry-less division, returning `(quotient, remainder)`
///
/// Repeatedly aligns the divisor under the leading bit of the remainder and
/// XORs it away until the remainder has fewer bits than the divisor.
pub fn carryless_div32(a: u32, b: u32) -> Result<(u32, u32)> {
    if b == 0 {
        return Err(AlgebraError::DivisionByZero);
    }

    let b_lz = b.leading_zeros();
    let mut q = 0u32;
    let mut r = a;
    // r == 0 has 32 leading zeros, which always exceeds b_lz
    while r.leading_zeros() <= b_lz {
        let shift = b_lz - r.leading_zeros();
        q |= 1 << shift;
        r ^= b << shift;
    }
    Ok((q, r))
}

/// Arbitrary-precision carry-less addition
pub fn carryless_add_big(a: &BigUint, b: &BigUint) -> BigUint {
    a ^ b
}

/// Arbitrary-precision carry-less multiplication (no truncation)
pub fn carryless_mul_big(a: &BigUint, b: &BigUint) -> BigUint {
    let mut product = BigUint::zero();
    for i in 0..b.bits() {
        if b.bit(i) {
            product ^= a << i;
        }
    }
    product
}

/// Arbitrary-precision carry-less division, returning `(quotient, remainder)`
pub fn carryless_div_big(a: &BigUint, b: &BigUint) -> Result<(BigUint, BigUint)> {
    if b.is_zero() {
        return Err(AlgebraError::DivisionByZero);
    }

    let b_len = b.bits();
    let mut q = BigUint::zero();
    let mut r = a.clone();
    while r.bits() >= b_len {
        let shift = r.bits() - b_len;
        q.set_bit(shift, true);
        r ^= b << shift;
    }
    Ok((q, r))
}

/// Flavor of long division traced by [`compute_intermediates`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticType {
    Standard,
    CarryLess,
}

impl ArithmeticType {
    /// Symbol used when writing out an addition
    pub fn add_op(&self) -> &'static str {
        match self {
            ArithmeticType::Standard => "+",
            ArithmeticType::CarryLess => "^",
        }
    }

    /// Symbol used when writing out a subtraction
    pub fn sub_op(&self) -> &'static str {
        match self {
            ArithmeticType::Standard => "-",
            ArithmeticType::CarryLess => "^",
        }
    }

    /// Symbol used when writing out a multiplication
    pub fn mul_op(&self) -> &'static str {
        match self {
            ArithmeticType::Standard => "*",
            ArithmeticType::CarryLess => "^*",
        }
    }
}

impl std::fmt::Display for ArithmeticType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArithmeticType::Standard => write!(f, "standard"),
            ArithmeticType::CarryLess => write!(f, "carry-less"),
        }
    }
}

/// One line of a written-out long division
///
/// `intermediate` is the part of the running remainder the divisor is
/// currently aligned under, and `offset` is how many bit positions that
/// line is indented from the start of the dividend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intermediate {
    pub intermediate: BigUint,
    pub offset: u64,
}

/// Trace the long division of `a` by `b`
///
/// The last entry is always the final remainder.
pub fn compute_intermediates(
    a: &BigUint,
    b: &BigUint,
    arithmetic_type: ArithmeticType,
) -> Result<Vec<Intermediate>> {
    if b.is_zero() {
        return Err(AlgebraError::DivisionByZero);
    }

    let mut intermediates = Vec::new();
    let mut r = a.clone();
    let mut offset = 0u64;
    match arithmetic_type {
        ArithmeticType::Standard => loop {
            if &r < b {
                intermediates.push(Intermediate {
                    intermediate: r,
                    offset,
                });
                break;
            }
            let r_len = r.bits();
            let mut shift = r_len - b.bits();
            let mut b_shift = b << shift;
            if r < b_shift {
                shift -= 1;
                b_shift >>= 1;
            }
            intermediates.push(Intermediate {
                intermediate: &r >> shift,
                offset,
            });
            r -= b_shift;
            offset += r_len - r.bits();
        },
        ArithmeticType::CarryLess => loop {
            if r.bits() < b.bits() {
                intermediates.push(Intermediate {
                    intermediate: r,
                    offset,
                });
                break;
            }
            let r_len = r.bits();
            let shift = r_len - b.bits();
            intermediates.push(Intermediate {
                intermediate: &r >> shift,
                offset,
            });
            r ^= b << shift;
            offset += r_len - r.bits();
        },
    }
    Ok(intermediates)
}
