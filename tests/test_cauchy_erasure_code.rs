//! Cauchy erasure code tests
//!
//! Parity computation and reconstruction over GF(2^8), including every
//! error path of the reconstruction input.

use cauchy_erasure::{
    compute_parity, compute_parity_matrix, compute_reconstruction_intermediates, reconstruct_all,
    reconstruct_data, AlgebraError, BigRational, Field, Field256Element, Matrix,
};

fn bytes(values: &[u8]) -> Vec<Field256Element> {
    values.iter().copied().map(Field256Element::from).collect()
}

fn maybe(values: &[Option<u8>]) -> Vec<Option<Field256Element>> {
    values.iter().map(|v| v.map(Field256Element::from)).collect()
}

// ============================================================================
// Parity
// ============================================================================

#[test]
fn test_parity_matrix() {
    let p = compute_parity_matrix::<Field256Element>(3, 2).unwrap();
    let expected: Vec<Field256Element> = bytes(&[3, 2, 1, 4, 5, 6])
        .iter()
        .map(|x| x.reciprocal().unwrap())
        .collect();
    assert_eq!(p.elements(), &expected[..]);
}

#[test]
fn test_parity_matrix_limits() {
    assert!(compute_parity_matrix::<Field256Element>(255, 1).is_ok());
    assert_eq!(
        compute_parity_matrix::<Field256Element>(256, 1),
        Err(AlgebraError::OutOfRange {
            value: 256,
            bound: 256
        })
    );
    assert_eq!(
        compute_parity_matrix::<Field256Element>(3, 0),
        Err(AlgebraError::EmptyMatrix)
    );
    assert_eq!(
        compute_parity_matrix::<Field256Element>(0, 3),
        Err(AlgebraError::EmptyMatrix)
    );
}

#[test]
fn test_compute_parity() {
    let d = bytes(&[0xda, 0xdb, 0x0d]);
    assert_eq!(compute_parity(&d, 2).unwrap(), bytes(&[0x52, 0x0c]));
}

#[test]
fn test_compute_parity_is_matrix_product() {
    let d = bytes(&[1, 2, 3, 4, 5]);
    let p = compute_parity_matrix::<Field256Element>(5, 3).unwrap();
    let expected = p
        .times(&Matrix::column_vector(d.clone()).unwrap())
        .unwrap()
        .into_elements();
    assert_eq!(compute_parity(&d, 3).unwrap(), expected);
}

#[test]
fn test_compute_parity_empty() {
    assert_eq!(compute_parity::<Field256Element>(&[], 2), Err(AlgebraError::EmptyMatrix));
}

// ============================================================================
// Reconstruction
// ============================================================================

#[test]
fn test_reconstruct_one_missing_data_byte() {
    let d = reconstruct_data(
        &maybe(&[Some(0xda), None, Some(0x0d)]),
        &maybe(&[None, Some(0x0c)]),
    )
    .unwrap();
    assert_eq!(d, bytes(&[0xda, 0xdb, 0x0d]));
}

#[test]
fn test_reconstruct_two_missing_data_bytes() {
    let d = reconstruct_data(
        &maybe(&[None, Some(0xdb), None]),
        &maybe(&[Some(0x52), Some(0x0c)]),
    )
    .unwrap();
    assert_eq!(d, bytes(&[0xda, 0xdb, 0x0d]));
}

#[test]
fn test_reconstruct_nothing_missing() {
    let d = reconstruct_data(
        &maybe(&[Some(0xda), Some(0xdb), Some(0x0d)]),
        &maybe(&[None, None]),
    )
    .unwrap();
    assert_eq!(d, bytes(&[0xda, 0xdb, 0x0d]));
}

#[test]
fn test_reconstruct_not_enough_known_bytes() {
    assert_eq!(
        reconstruct_data(
            &maybe(&[None, Some(0xdb), None]),
            &maybe(&[Some(0x52), None]),
        ),
        Err(AlgebraError::NotEnoughKnownBytes {
            known: 2,
            needed: 3
        })
    );
}

#[test]
fn test_reconstruct_empty_input() {
    assert_eq!(
        reconstruct_data::<Field256Element>(&[], &[]),
        Err(AlgebraError::EmptyMatrix)
    );
}

#[test]
fn test_reconstruct_too_many_values() {
    let partial_d = vec![Some(Field256Element::ONE); 256];
    let partial_p = vec![None];
    assert_eq!(
        reconstruct_data(&partial_d, &partial_p),
        Err(AlgebraError::OutOfRange {
            value: 256,
            bound: 256
        })
    );
}

#[test]
fn test_reconstruction_intermediates() {
    let intermediates = compute_reconstruction_intermediates(
        &maybe(&[None, Some(0xdb), None]),
        &maybe(&[Some(0x52), Some(0x0c)]),
    )
    .unwrap();
    assert_eq!(intermediates.bytes_to_use, bytes(&[0xdb, 0x52, 0x0c]));

    let p = compute_parity_matrix::<Field256Element>(3, 2).unwrap();
    let m = &intermediates.matrix;
    assert_eq!(m.row(0).unwrap(), &bytes(&[0, 1, 0])[..]);
    assert_eq!(m.row(1).unwrap(), p.row(0).unwrap());
    assert_eq!(m.row(2).unwrap(), p.row(1).unwrap());
}

#[test]
fn test_reconstruction_uses_only_needed_parity() {
    let intermediates = compute_reconstruction_intermediates(
        &maybe(&[Some(0xda), None, Some(0x0d)]),
        &maybe(&[Some(0x52), Some(0x0c)]),
    )
    .unwrap();
    assert_eq!(intermediates.bytes_to_use, bytes(&[0xda, 0x0d, 0x52]));
}

#[test]
fn test_reconstruct_all() {
    let (d, p) = reconstruct_all(
        &maybe(&[None, None, Some(0x0d)]),
        &maybe(&[Some(0x52), Some(0x0c)]),
    )
    .unwrap();
    assert_eq!(d, bytes(&[0xda, 0xdb, 0x0d]));
    assert_eq!(p, bytes(&[0x52, 0x0c]));
}

#[test]
fn test_every_erasure_pattern_recovers() {
    let d = bytes(&[0x10, 0x20, 0x30, 0x40]);
    let p = compute_parity(&d, 3).unwrap();
    let total = d.len() + p.len();
    for mask in 0u32..(1 << total) {
        let known: Vec<bool> = (0..total).map(|i| mask & (1 << i) != 0).collect();
        let partial_d: Vec<_> = (0..d.len()).map(|i| known[i].then_some(d[i])).collect();
        let partial_p: Vec<_> = (0..p.len())
            .map(|i| known[d.len() + i].then_some(p[i]))
            .collect();
        let known_count = known.iter().filter(|&&k| k).count();
        let result = reconstruct_data(&partial_d, &partial_p);
        if known_count >= d.len() {
            assert_eq!(result.unwrap(), d, "mask = {:07b}", mask);
        } else {
            assert!(matches!(
                result,
                Err(AlgebraError::NotEnoughKnownBytes { .. })
            ));
        }
    }
}

#[test]
fn test_rational_code() {
    let d: Vec<BigRational> = [5, -3, 7].iter().map(|&v| BigRational::from_integer(v)).collect();
    let p = compute_parity(&d, 2).unwrap();
    let partial_d = [None, Some(d[1].clone()), None];
    let partial_p = [Some(p[0].clone()), Some(p[1].clone())];
    let (d2, p2) = reconstruct_all(&partial_d, &partial_p).unwrap();
    assert_eq!(d2, d);
    assert_eq!(p2, p);
}
