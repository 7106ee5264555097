//! Finite fields, exact matrices and a Cauchy-matrix erasure code
//!
//! - [`carryless`]: GF(2)[x] add, multiply and divide on integers
//! - [`field`]: GF(2^8), GF(257) and exact rationals behind one [`Field`] trait
//! - [`matrix`]: generic matrices with Gauss-Jordan inversion
//! - [`row_reduce`]: the same inversion as an inspectable state machine
//! - [`cauchy`]: parity computation and reconstruction from partial values
//! - [`config`]: output rendering options for the command-line tools

pub mod carryless;
pub mod cauchy;
pub mod config;
pub mod error;
pub mod field;
pub mod matrix;
pub mod row_reduce;

pub use cauchy::{
    compute_generator_matrix, compute_parity, compute_parity_matrix,
    compute_reconstruction_intermediates, reconstruct_all, reconstruct_data,
    ReconstructionIntermediates,
};
pub use config::{ByteFormat, OutputConfig};
pub use error::{AlgebraError, Axis, Result};
pub use field::{BigRational, Field, Field256Element, Field257Element};
pub use matrix::{new_cauchy_matrix, LatexOptions, Matrix};
pub use row_reduce::{
    invert_stepwise, row_reduce_initial_state, row_reduce_next_state, row_reduce_states,
    RowReduceState,
};
