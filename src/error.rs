//! Error types for field, matrix and erasure-code operations

use thiserror::Error;

/// Which index of a matrix access was out of range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => write!(f, "Row"),
            Axis::Column => write!(f, "Column"),
        }
    }
}

/// Errors that can occur during algebra operations
///
/// Every variant is an input-contract violation; nothing in the crate retries
/// or recovers from them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// Division by the additive identity of a field
    #[error("Division by zero")]
    DivisionByZero,

    /// A bounded field element was built from an integer outside its domain
    #[error("n must be >= 0 and < {bound} (got {value})")]
    OutOfRange { value: usize, bound: usize },

    /// A matrix would have no elements
    #[error("Empty matrix")]
    EmptyMatrix,

    /// Element count differs from rows × columns at construction, or the
    /// inner dimensions of a product do not agree
    #[error("Mismatched dimensions: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// `at(i, j)` or a row operation addressed a cell outside the matrix
    #[error("{axis} index out of bounds: {index} >= {bound}")]
    IndexOutOfBounds {
        axis: Axis,
        index: usize,
        bound: usize,
    },

    /// Inversion or row reduction requested on a non-square matrix
    #[error("Cannot invert non-square matrix ({rows}x{columns})")]
    NonSquareMatrix { rows: usize, columns: usize },

    /// A pivot column had no nonzero candidate
    #[error("Singular matrix")]
    SingularMatrix,

    /// Fewer than n values known among data and parity
    #[error("Not enough known bytes to reconstruct: {known} known, {needed} needed")]
    NotEnoughKnownBytes { known: usize, needed: usize },

    /// `row_reduce_next_state` called on `Singular` or `InverseFound`
    #[error("Row reduction already reached a terminal state")]
    TerminalState,
}

/// Type alias for Result with AlgebraError
pub type Result<T> = std::result::Result<T, AlgebraError>;
