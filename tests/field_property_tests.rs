//! Property-based tests for the field axioms and the erasure code
//!
//! These check invariants that must hold for every input, not just the
//! known vectors in the other test files.

use cauchy_erasure::{
    compute_parity, reconstruct_data, BigRational, Field, Field256Element, Field257Element,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::SeedableRng;

fn gf256() -> impl Strategy<Value = Field256Element> {
    any::<u8>().prop_map(Field256Element::from)
}

fn gf257() -> impl Strategy<Value = Field257Element> {
    (0usize..257).prop_map(|v| Field257Element::new(v).unwrap())
}

fn rational() -> impl Strategy<Value = BigRational> {
    (-1000i64..1000, 1i64..1000).prop_map(|(n, d)| {
        BigRational::from_integer(n)
            .divided_by(&BigRational::from_integer(d))
            .unwrap()
    })
}

proptest! {
    /// Property: (a / b) * b == a for every nonzero b in GF(2^8)
    #[test]
    fn prop_gf256_division_inverts_multiplication(a in gf256(), b in gf256()) {
        prop_assume!(!b.is_zero());
        prop_assert_eq!(a.divided_by(&b).unwrap().times(&b), a);
    }

    /// Property: addition and subtraction coincide in characteristic 2
    #[test]
    fn prop_gf256_add_equals_sub(a in gf256(), b in gf256()) {
        prop_assert_eq!(a.plus(&b), a.minus(&b));
    }

    /// Property: multiplication distributes over addition in GF(2^8)
    #[test]
    fn prop_gf256_distributive(a in gf256(), b in gf256(), c in gf256()) {
        prop_assert_eq!(a.times(&b.plus(&c)), a.times(&b).plus(&a.times(&c)));
    }

    /// Property: multiplication is associative in GF(2^8)
    #[test]
    fn prop_gf256_associative(a in gf256(), b in gf256(), c in gf256()) {
        prop_assert_eq!(a.times(&b).times(&c), a.times(&b.times(&c)));
    }

    /// Property: (a / b) * b == a for every nonzero b in GF(257)
    #[test]
    fn prop_gf257_division_inverts_multiplication(a in gf257(), b in gf257()) {
        prop_assume!(!b.is_zero());
        prop_assert_eq!(a.divided_by(&b).unwrap().times(&b), a);
    }

    /// Property: (a - b) + b == a in GF(257)
    #[test]
    fn prop_gf257_sub_inverts_add(a in gf257(), b in gf257()) {
        prop_assert_eq!(a.minus(&b).plus(&b), a);
    }

    /// Property: rational arithmetic is exact
    #[test]
    fn prop_rational_round_trips(a in rational(), b in rational()) {
        prop_assert_eq!(a.minus(&b).plus(&b), a.clone());
        if !b.is_zero() {
            prop_assert_eq!(a.divided_by(&b).unwrap().times(&b), a);
        }
    }

    /// Property: any n of the n + m values recover the data
    #[test]
    fn prop_reconstruct_from_any_n_values(
        data in prop::collection::vec(any::<u8>(), 1..12),
        m in 1usize..6,
        seed in any::<u64>(),
    ) {
        let d: Vec<Field256Element> = data.into_iter().map(Field256Element::from).collect();
        let p = compute_parity(&d, m).unwrap();
        let n = d.len();

        let mut rng = StdRng::seed_from_u64(seed);
        let mut erased = vec![false; n + m];
        for i in sample(&mut rng, n + m, m) {
            erased[i] = true;
        }

        let partial_d: Vec<_> = (0..n).map(|i| (!erased[i]).then_some(d[i])).collect();
        let partial_p: Vec<_> = (0..m).map(|i| (!erased[n + i]).then_some(p[i])).collect();
        prop_assert_eq!(reconstruct_data(&partial_d, &partial_p).unwrap(), d);
    }
}
