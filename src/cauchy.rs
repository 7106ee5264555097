//! Systematic erasure code built on Cauchy matrices
//!
//! ## Encoding
//!
//! For `n` data values and `m` parity values, the parity matrix is the
//! m × n Cauchy matrix `P[i][j] = 1 / (x_i - y_j)` with `x_i = n + i` and
//! `y_j = j`. Parity is `p = P · d`. Every square submatrix of a Cauchy
//! matrix is invertible, so the stacked generator `[I; P]` recovers `d`
//! from any `n` of the `n + m` values.
//!
//! ## Decoding
//!
//! Known data values contribute identity rows and known parity values
//! contribute rows of `P`, until `n` equations are collected. Inverting that
//! n × n system and applying it to the known values yields `d`.
//!
//! GF(2^8) is the usual field (one value per byte, `n + m <= 256`), but the
//! code works over any [`Field`].

use crate::error::{AlgebraError, Result};
use crate::field::Field;
use crate::matrix::{new_cauchy_matrix, Matrix};
use log::debug;

/// m × n Cauchy parity matrix
///
/// Fails with [`AlgebraError::OutOfRange`] when `n + m` exceeds the field
/// and [`AlgebraError::EmptyMatrix`] when `n` or `m` is zero.
pub fn compute_parity_matrix<F: Field>(n: usize, m: usize) -> Result<Matrix<F>> {
    let x = (0..m)
        .map(|i| F::from_index(n + i))
        .collect::<Result<Vec<_>>>()?;
    let y = (0..n).map(F::from_index).collect::<Result<Vec<_>>>()?;
    new_cauchy_matrix(&x, &y)
}

/// (n + m) × n systematic generator: the identity stacked on the parity matrix
pub fn compute_generator_matrix<F: Field>(n: usize, m: usize) -> Result<Matrix<F>> {
    let p = compute_parity_matrix::<F>(n, m)?;
    Matrix::from_fallible_fn(n + m, n, |i, j| {
        if i < n {
            Ok(if i == j { F::one() } else { F::zero() })
        } else {
            p.at(i - n, j).cloned()
        }
    })
}

/// Parity values `P · d` for the data values `d`
pub fn compute_parity<F: Field>(d: &[F], m: usize) -> Result<Vec<F>> {
    let p = compute_parity_matrix::<F>(d.len(), m)?;
    let d_col = Matrix::column_vector(d.to_vec())?;
    Ok(p.times(&d_col)?.into_elements())
}

/// The linear system solved by [`reconstruct_data`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconstructionIntermediates<F: Field> {
    /// The `n` known values used, in selection order
    pub bytes_to_use: Vec<F>,
    /// n × n coefficients: identity rows for data, parity-matrix rows for parity
    pub matrix: Matrix<F>,
}

/// Select `n` known values and build the matching coefficient matrix
///
/// Known data values are taken first, then known parity values in order
/// until there are `n` equations.
pub fn compute_reconstruction_intermediates<F: Field>(
    partial_d: &[Option<F>],
    partial_p: &[Option<F>],
) -> Result<ReconstructionIntermediates<F>> {
    let n = partial_d.len();
    let m = partial_p.len();
    let p = compute_parity_matrix::<F>(n, m)?;

    let mut bytes_to_use = Vec::with_capacity(n);
    let mut rows = Vec::with_capacity(n * n);

    for (i, d) in partial_d.iter().enumerate() {
        if let Some(d) = d {
            bytes_to_use.push(d.clone());
            rows.extend((0..n).map(|j| if i == j { F::one() } else { F::zero() }));
        }
    }
    let known_data = bytes_to_use.len();

    for (i, parity) in partial_p.iter().enumerate() {
        if bytes_to_use.len() >= n {
            break;
        }
        if let Some(parity) = parity {
            bytes_to_use.push(parity.clone());
            rows.extend_from_slice(p.row(i)?);
        }
    }

    if bytes_to_use.len() < n {
        return Err(AlgebraError::NotEnoughKnownBytes {
            known: bytes_to_use.len(),
            needed: n,
        });
    }

    debug!(
        "Reconstructing {} values from {} data and {} parity equations",
        n,
        known_data,
        n - known_data
    );

    Ok(ReconstructionIntermediates {
        bytes_to_use,
        matrix: Matrix::new(n, n, rows)?,
    })
}

/// Recover all `n` data values from any `n` known data or parity values
pub fn reconstruct_data<F: Field>(
    partial_d: &[Option<F>],
    partial_p: &[Option<F>],
) -> Result<Vec<F>> {
    let ReconstructionIntermediates {
        bytes_to_use,
        matrix,
    } = compute_reconstruction_intermediates(partial_d, partial_p)?;
    let m_inv = matrix.inverse()?;
    let known = Matrix::column_vector(bytes_to_use)?;
    Ok(m_inv.times(&known)?.into_elements())
}

/// Recover the data values and recompute every parity value
pub fn reconstruct_all<F: Field>(
    partial_d: &[Option<F>],
    partial_p: &[Option<F>],
) -> Result<(Vec<F>, Vec<F>)> {
    let d = reconstruct_data(partial_d, partial_p)?;
    let p = compute_parity(&d, partial_p.len())?;
    Ok((d, p))
}
