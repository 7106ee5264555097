//! Field element types
//!
//! Three mutually exclusive fields share one [`Field`] interface:
//!
//! - [`Field256Element`]: GF(2^8), bytes as polynomials modulo 0x11B
//! - [`Field257Element`]: GF(257), integers modulo the prime 257
//! - [`BigRational`]: exact rationals over arbitrary-precision integers
//!
//! Matrix and erasure-code code is written once against the trait bound.
//! The trait is sealed; the set of fields is closed.

pub mod gf256;
pub mod gf257;
pub mod rational;

pub use gf256::Field256Element;
pub use gf257::Field257Element;
pub use rational::BigRational;

use crate::error::Result;
use num_bigint::BigUint;
use std::fmt::{Debug, Display};

mod private {
    pub trait Sealed {}

    impl Sealed for super::Field256Element {}
    impl Sealed for super::Field257Element {}
    impl Sealed for super::BigRational {}
}

/// Operations shared by every field element type
///
/// Arithmetic never fails except division by the additive identity, which
/// returns [`AlgebraError::DivisionByZero`](crate::AlgebraError::DivisionByZero).
pub trait Field: private::Sealed + Clone + PartialEq + Eq + Debug + Display {
    /// Human-readable field name, e.g. `GF(2^8)`
    const NAME: &'static str;

    /// Additive identity
    fn zero() -> Self;

    /// Multiplicative identity
    fn one() -> Self;

    fn plus(&self, b: &Self) -> Self;

    fn minus(&self, b: &Self) -> Self;

    fn times(&self, b: &Self) -> Self;

    /// `self / b`; fails when `b` is zero
    fn divided_by(&self, b: &Self) -> Result<Self>;

    /// The element naming the non-negative integer `index`
    ///
    /// Finite fields reject integers outside their domain instead of
    /// reducing them.
    fn from_index(index: usize) -> Result<Self>;

    /// Render in the given radix (2..=36, lowercase digits)
    ///
    /// # Panics
    ///
    /// Panics if `radix` is outside 2..=36.
    fn to_string_radix(&self, radix: u32) -> String;

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    fn is_one(&self) -> bool {
        *self == Self::one()
    }

    /// Multiplicative inverse; fails for zero
    fn reciprocal(&self) -> Result<Self> {
        Self::one().divided_by(self)
    }
}

/// Format an unsigned value in `radix` with lowercase digits
///
/// # Panics
///
/// Panics if `radix` is outside 2..=36.
pub(crate) fn format_radix(value: u64, radix: u32) -> String {
    BigUint::from(value).to_str_radix(radix)
}
