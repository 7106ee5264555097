//! Stepwise Gauss-Jordan elimination
//!
//! Runs the same elimination as [`Matrix::inverse`] one elementary row
//! operation at a time, so each step can be inspected.
//!
//! ## State Transitions
//!
//! ```text
//! Initial
//!   ↓ (row_reduce_next_state)
//! Swap | Divide | SubtractScaled   (zero or more, one operation per call)
//!   ↓
//! Singular | InverseFound          (terminal)
//! ```
//!
//! Every call re-inspects the current augmented pair `[A | B]` and picks
//! the first applicable operation in this order:
//!
//! 1. Forward, pivot columns left to right: a zero pivot is swapped with
//!    the first nonzero row below it (or the matrix is singular), a pivot
//!    other than one is divided out, then the first nonzero entry below the
//!    pivot is eliminated
//! 2. Backward, pivot columns right to left: the first nonzero entry above
//!    the pivot, searching top to bottom, is eliminated
//! 3. Nothing left: `B` is the inverse
//!
//! This order is part of the contract: the same input always yields the
//! same sequence of states.

use crate::error::{AlgebraError, Result};
use crate::field::Field;
use crate::matrix::Matrix;
use log::trace;

/// One snapshot of the elimination over the augmented pair `[A | B]`
///
/// `a_left` is the matrix being reduced and `a_right` starts as the
/// identity. Transition states also keep the pair from before the
/// operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowReduceState<T: Field> {
    Initial {
        a_left: Matrix<T>,
        a_right: Matrix<T>,
    },
    Swap {
        a_left_prev: Matrix<T>,
        a_right_prev: Matrix<T>,
        a_left: Matrix<T>,
        a_right: Matrix<T>,
        row_a: usize,
        row_b: usize,
    },
    Singular {
        a_left: Matrix<T>,
        a_right: Matrix<T>,
    },
    Divide {
        a_left_prev: Matrix<T>,
        a_right_prev: Matrix<T>,
        a_left: Matrix<T>,
        a_right: Matrix<T>,
        row: usize,
        divisor: T,
    },
    /// `row_dest -= scale * row_src`; `scale` is `None` when it is one
    SubtractScaled {
        a_left_prev: Matrix<T>,
        a_right_prev: Matrix<T>,
        a_left: Matrix<T>,
        a_right: Matrix<T>,
        row_dest: usize,
        row_src: usize,
        scale: Option<T>,
    },
    InverseFound {
        a_left: Matrix<T>,
        a_right: Matrix<T>,
    },
}

impl<T: Field> RowReduceState<T> {
    /// Current left half
    pub fn a_left(&self) -> &Matrix<T> {
        match self {
            RowReduceState::Initial { a_left, .. }
            | RowReduceState::Swap { a_left, .. }
            | RowReduceState::Singular { a_left, .. }
            | RowReduceState::Divide { a_left, .. }
            | RowReduceState::SubtractScaled { a_left, .. }
            | RowReduceState::InverseFound { a_left, .. } => a_left,
        }
    }

    /// Current right half
    pub fn a_right(&self) -> &Matrix<T> {
        match self {
            RowReduceState::Initial { a_right, .. }
            | RowReduceState::Swap { a_right, .. }
            | RowReduceState::Singular { a_right, .. }
            | RowReduceState::Divide { a_right, .. }
            | RowReduceState::SubtractScaled { a_right, .. }
            | RowReduceState::InverseFound { a_right, .. } => a_right,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RowReduceState::Singular { .. } | RowReduceState::InverseFound { .. }
        )
    }

    /// Short name of the state kind
    pub fn kind(&self) -> &'static str {
        match self {
            RowReduceState::Initial { .. } => "initial",
            RowReduceState::Swap { .. } => "swap",
            RowReduceState::Singular { .. } => "singular",
            RowReduceState::Divide { .. } => "divide",
            RowReduceState::SubtractScaled { .. } => "subtractScaled",
            RowReduceState::InverseFound { .. } => "inverseFound",
        }
    }
}

impl<T: Field> std::fmt::Display for RowReduceState<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowReduceState::Initial { .. } => write!(f, "initial"),
            RowReduceState::Swap { row_a, row_b, .. } => {
                write!(f, "swap rows {} and {}", row_a, row_b)
            }
            RowReduceState::Singular { .. } => write!(f, "singular"),
            RowReduceState::Divide { row, divisor, .. } => {
                write!(f, "divide row {} by {}", row, divisor)
            }
            RowReduceState::SubtractScaled {
                row_dest,
                row_src,
                scale: Some(scale),
                ..
            } => write!(f, "subtract {} times row {} from row {}", scale, row_src, row_dest),
            RowReduceState::SubtractScaled {
                row_dest,
                row_src,
                scale: None,
                ..
            } => write!(f, "subtract row {} from row {}", row_src, row_dest),
            RowReduceState::InverseFound { .. } => write!(f, "inverse found"),
        }
    }
}

/// Start reducing `m` alongside an identity matrix of the same size
pub fn row_reduce_initial_state<T: Field>(m: &Matrix<T>) -> Result<RowReduceState<T>> {
    if !m.is_square() {
        return Err(AlgebraError::NonSquareMatrix {
            rows: m.rows(),
            columns: m.columns(),
        });
    }
    Ok(RowReduceState::Initial {
        a_left: m.clone(),
        a_right: Matrix::identity(m.rows())?,
    })
}

/// Apply exactly one row operation, or report a terminal state
pub fn row_reduce_next_state<T: Field>(state: &RowReduceState<T>) -> Result<RowReduceState<T>> {
    if state.is_terminal() {
        return Err(AlgebraError::TerminalState);
    }

    let a_left = state.a_left();
    let a_right = state.a_right();
    let next = next_operation(a_left, a_right)?;
    trace!("row reduce: {}", next);
    Ok(next)
}

fn next_operation<T: Field>(a_left: &Matrix<T>, a_right: &Matrix<T>) -> Result<RowReduceState<T>> {
    let size = a_left.rows();

    for i in 0..size {
        let pivot = a_left.cell(i, i);
        if pivot.is_zero() {
            return match a_left.find_pivot_row(i, i + 1) {
                Some(j) => Ok(RowReduceState::Swap {
                    a_left_prev: a_left.clone(),
                    a_right_prev: a_right.clone(),
                    a_left: a_left.swap_rows(i, j)?,
                    a_right: a_right.swap_rows(i, j)?,
                    row_a: i,
                    row_b: j,
                }),
                None => Ok(RowReduceState::Singular {
                    a_left: a_left.clone(),
                    a_right: a_right.clone(),
                }),
            };
        }

        if !pivot.is_one() {
            return Ok(RowReduceState::Divide {
                a_left_prev: a_left.clone(),
                a_right_prev: a_right.clone(),
                a_left: a_left.divide_row(i, pivot)?,
                a_right: a_right.divide_row(i, pivot)?,
                row: i,
                divisor: pivot.clone(),
            });
        }

        if let Some(j) = a_left.find_pivot_row(i, i + 1) {
            return subtract_scaled(a_left, a_right, j, i);
        }
    }

    for i in (1..size).rev() {
        if let Some(j) = (0..i).find(|&j| !a_left.cell(j, i).is_zero()) {
            return subtract_scaled(a_left, a_right, j, i);
        }
    }

    Ok(RowReduceState::InverseFound {
        a_left: a_left.clone(),
        a_right: a_right.clone(),
    })
}

// Clears a_left[dest][src] using the unit pivot in row src
fn subtract_scaled<T: Field>(
    a_left: &Matrix<T>,
    a_right: &Matrix<T>,
    row_dest: usize,
    row_src: usize,
) -> Result<RowReduceState<T>> {
    let scale = a_left.cell(row_dest, row_src).clone();
    Ok(RowReduceState::SubtractScaled {
        a_left_prev: a_left.clone(),
        a_right_prev: a_right.clone(),
        a_left: a_left.subtract_scaled_row(row_dest, row_src, &scale)?,
        a_right: a_right.subtract_scaled_row(row_dest, row_src, &scale)?,
        row_dest,
        row_src,
        scale: if scale.is_one() { None } else { Some(scale) },
    })
}

/// Every state from `Initial` through the terminal one
pub fn row_reduce_states<T: Field>(m: &Matrix<T>) -> Result<Vec<RowReduceState<T>>> {
    let mut states = vec![row_reduce_initial_state(m)?];
    while let Some(last) = states.last().filter(|s| !s.is_terminal()) {
        let next = row_reduce_next_state(last)?;
        states.push(next);
    }
    Ok(states)
}

/// Invert `m` by driving the state machine to completion
pub fn invert_stepwise<T: Field>(m: &Matrix<T>) -> Result<Matrix<T>> {
    let mut state = row_reduce_initial_state(m)?;
    loop {
        state = match state {
            RowReduceState::InverseFound { a_right, .. } => return Ok(a_right),
            RowReduceState::Singular { .. } => return Err(AlgebraError::SingularMatrix),
            other => row_reduce_next_state(&other)?,
        };
    }
}
