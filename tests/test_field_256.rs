//! GF(2^8) field tests
//!
//! Known products and quotients under the 0x11B modulus, plus exhaustive
//! checks over all 256 elements.

use cauchy_erasure::field::gf256::{GF256_MODULUS, GF256_ORDER};
use cauchy_erasure::{AlgebraError, Field, Field256Element};

fn e(n: u8) -> Field256Element {
    Field256Element::from(n)
}

#[test]
fn test_constants() {
    assert_eq!(GF256_MODULUS, 0x11b);
    assert_eq!(GF256_ORDER, 256);
    assert_eq!(<Field256Element as Field>::NAME, "GF(2^8)");
}

#[test]
fn test_new_range() {
    assert_eq!(Field256Element::new(255).unwrap().value(), 255);
    assert_eq!(
        Field256Element::new(256),
        Err(AlgebraError::OutOfRange {
            value: 256,
            bound: 256
        })
    );
}

#[test]
fn test_addition_is_xor() {
    assert_eq!(e(0x53).plus(&e(0xca)), e(0x99));
    assert_eq!(e(0x53).minus(&e(0xca)), e(0x99));
    assert_eq!(e(7).plus(&e(7)), Field256Element::ZERO);
}

#[test]
fn test_known_products() {
    assert_eq!(e(100).times(&e(100)), e(215));
    assert_eq!(e(0x53).times(&e(0xca)), e(0x01));
    assert_eq!(e(2).times(&e(0x80)), e(0x1b));
    assert_eq!(e(0).times(&e(0xff)), e(0));
}

#[test]
fn test_known_quotients() {
    assert_eq!(e(1).divided_by(&e(2)), Ok(e(141)));
    assert_eq!(e(3).divided_by(&e(255)), Ok(e(36)));
    assert_eq!(e(2).reciprocal(), Ok(e(141)));
    assert_eq!(e(0x53).reciprocal(), Ok(e(0xca)));
}

#[test]
fn test_division_by_zero() {
    assert_eq!(e(5).divided_by(&e(0)), Err(AlgebraError::DivisionByZero));
    assert_eq!(e(0).reciprocal(), Err(AlgebraError::DivisionByZero));
}

#[test]
fn test_operator_traits_match_methods() {
    let a = e(0x57);
    let b = e(0x83);
    assert_eq!(a + b, a.plus(&b));
    assert_eq!(a - b, a.minus(&b));
    assert_eq!(a * b, a.times(&b));
    assert_eq!(a * b, e(0xc1));
}

#[test]
fn test_rendering() {
    assert_eq!(e(255).to_string_radix(16), "ff");
    assert_eq!(e(5).to_string_radix(2), "101");
    assert_eq!(e(200).to_string(), "200");
    assert_eq!(format!("{:02x}", e(0x0d)), "0d");
}

#[test]
fn test_every_nonzero_element_has_inverse() {
    for a in 1..=255u8 {
        let inv = e(a).reciprocal().unwrap();
        assert_eq!(e(a).times(&inv), Field256Element::ONE, "a = {}", a);
    }
}

#[test]
fn test_multiplication_exhaustive_laws() {
    for a in 0..=255u8 {
        assert_eq!(e(a).times(&Field256Element::ONE), e(a));
        assert_eq!(e(a).times(&Field256Element::ZERO), Field256Element::ZERO);
        for b in (0..=255u8).step_by(7) {
            assert_eq!(e(a).times(&e(b)), e(b).times(&e(a)));
            assert_eq!(e(a).minus(&e(b)), e(a).plus(&e(b)));
        }
    }
}

#[test]
fn test_from_index() {
    assert_eq!(Field256Element::from_index(17), Ok(e(17)));
    assert!(Field256Element::from_index(300).is_err());
}
