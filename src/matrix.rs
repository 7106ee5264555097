//! Generic matrices over any [`Field`]
//!
//! A [`Matrix`] is a non-empty rectangular grid stored row-major. Matrices
//! are never mutated through the public API: products, inverses and row
//! operations all return new values.
//!
//! ## Inversion
//!
//! [`Matrix::inverse`] runs Gauss-Jordan elimination with partial pivoting
//! on a private clone, applying every row operation to an identity matrix
//! alongside it:
//!
//! 1. For each pivot column, top to bottom, swap the first row at or below
//!    the diagonal with a nonzero entry into place (none: singular)
//! 2. Divide the pivot row so the pivot becomes one
//! 3. Subtract scaled copies of the pivot row from the rows below
//! 4. Once upper triangular, clear the entries above every pivot
//!
//! The same row kernels back the pure [`Matrix::swap_rows`],
//! [`Matrix::divide_row`] and [`Matrix::subtract_scaled_row`], which the
//! stepwise [`row_reduce`](crate::row_reduce) machine uses.

use crate::error::{AlgebraError, Axis, Result};
use crate::field::Field;
use log::debug;

/// Rectangular matrix of field elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T: Field> {
    rows: usize,
    columns: usize,
    elements: Vec<T>,
}

impl<T: Field> Matrix<T> {
    /// Create a matrix from a row-major element list
    pub fn new(rows: usize, columns: usize, elements: Vec<T>) -> Result<Self> {
        let expected = Self::cell_count(rows, columns)?;
        if elements.len() != expected {
            return Err(AlgebraError::DimensionMismatch {
                expected,
                found: elements.len(),
            });
        }
        if elements.is_empty() {
            return Err(AlgebraError::EmptyMatrix);
        }
        Ok(Self {
            rows,
            columns,
            elements,
        })
    }

    /// Create a matrix by calling `f(i, j)` once per cell in row-major order
    pub fn from_fn<F>(rows: usize, columns: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        Self::from_fallible_fn(rows, columns, |i, j| Ok(f(i, j)))
    }

    /// Like [`Matrix::from_fn`], stopping at the first generator error
    pub fn from_fallible_fn<F>(rows: usize, columns: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> Result<T>,
    {
        let count = Self::cell_count(rows, columns)?;
        if count == 0 {
            return Err(AlgebraError::EmptyMatrix);
        }
        let mut elements = Vec::with_capacity(count);
        for i in 0..rows {
            for j in 0..columns {
                elements.push(f(i, j)?);
            }
        }
        Ok(Self {
            rows,
            columns,
            elements,
        })
    }

    /// `size` × `size` identity matrix
    pub fn identity(size: usize) -> Result<Self> {
        Self::from_fn(size, size, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// n × 1 matrix holding `elements`
    pub fn column_vector(elements: Vec<T>) -> Result<Self> {
        Self::new(elements.len(), 1, elements)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// All elements, row-major
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<T> {
        self.elements
    }

    pub fn zero_element(&self) -> T {
        T::zero()
    }

    pub fn one_element(&self) -> T {
        T::one()
    }

    /// Element at row `i`, column `j`
    pub fn at(&self, i: usize, j: usize) -> Result<&T> {
        self.check_row(i)?;
        self.check_column(j)?;
        Ok(&self.elements[i * self.columns + j])
    }

    /// Row `i` as a slice
    pub fn row(&self, i: usize) -> Result<&[T]> {
        self.check_row(i)?;
        Ok(&self.elements[i * self.columns..(i + 1) * self.columns])
    }

    /// Matrix product `self · other`
    pub fn times(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.columns != other.rows {
            return Err(AlgebraError::DimensionMismatch {
                expected: self.columns,
                found: other.rows,
            });
        }
        Self::from_fn(self.rows, other.columns, |i, j| {
            (0..self.columns).fold(T::zero(), |t, k| {
                t.plus(&self.cell(i, k).times(other.cell(k, j)))
            })
        })
    }

    /// Inverse via Gauss-Jordan elimination with partial pivoting
    pub fn inverse(&self) -> Result<Matrix<T>> {
        if !self.is_square() {
            return Err(AlgebraError::NonSquareMatrix {
                rows: self.rows,
                columns: self.columns,
            });
        }

        let mut inverse = Self::identity(self.rows)?;
        let mut clone = self.clone();
        clone.row_reduce_for_inverse(&mut inverse)?;
        Ok(inverse)
    }

    /// Copy of `self` with rows `i` and `j` exchanged
    pub fn swap_rows(&self, i: usize, j: usize) -> Result<Matrix<T>> {
        self.check_row(i)?;
        self.check_row(j)?;
        let mut m = self.clone();
        m.swap_rows_in_place(i, j);
        Ok(m)
    }

    /// Copy of `self` with row `i` divided by `c`
    pub fn divide_row(&self, i: usize, c: &T) -> Result<Matrix<T>> {
        self.check_row(i)?;
        let mut m = self.clone();
        m.divide_row_in_place(i, c)?;
        Ok(m)
    }

    /// Copy of `self` with `c` times row `src` subtracted from row `dest`
    pub fn subtract_scaled_row(&self, dest: usize, src: usize, c: &T) -> Result<Matrix<T>> {
        self.check_row(dest)?;
        self.check_row(src)?;
        let mut m = self.clone();
        m.subtract_scaled_row_in_place(dest, src, c);
        Ok(m)
    }

    /// First row at or after `from_row` with a nonzero entry in `column`
    ///
    /// Rows are searched top to bottom; both elimination paths depend on
    /// this order.
    pub(crate) fn find_pivot_row(&self, column: usize, from_row: usize) -> Option<usize> {
        (from_row..self.rows).find(|&r| !self.cell(r, column).is_zero())
    }

    /// Unchecked element access for internal loops
    pub(crate) fn cell(&self, i: usize, j: usize) -> &T {
        &self.elements[i * self.columns + j]
    }

    // On overflow, `expected` is the most rows `columns` allows
    fn cell_count(rows: usize, columns: usize) -> Result<usize> {
        rows.checked_mul(columns)
            .ok_or_else(|| AlgebraError::DimensionMismatch {
                expected: usize::MAX / columns,
                found: rows,
            })
    }

    fn check_row(&self, i: usize) -> Result<()> {
        if i >= self.rows {
            return Err(AlgebraError::IndexOutOfBounds {
                axis: Axis::Row,
                index: i,
                bound: self.rows,
            });
        }
        Ok(())
    }

    fn check_column(&self, j: usize) -> Result<()> {
        if j >= self.columns {
            return Err(AlgebraError::IndexOutOfBounds {
                axis: Axis::Column,
                index: j,
                bound: self.columns,
            });
        }
        Ok(())
    }

    fn swap_rows_in_place(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        for k in 0..self.columns {
            self.elements.swap(i * self.columns + k, j * self.columns + k);
        }
    }

    fn divide_row_in_place(&mut self, i: usize, c: &T) -> Result<()> {
        for k in 0..self.columns {
            let a = i * self.columns + k;
            self.elements[a] = self.elements[a].divided_by(c)?;
        }
        Ok(())
    }

    fn subtract_scaled_row_in_place(&mut self, dest: usize, src: usize, c: &T) {
        for k in 0..self.columns {
            let a_dest = dest * self.columns + k;
            let a_src = src * self.columns + k;
            self.elements[a_dest] = self.elements[a_dest].minus(&self.elements[a_src].times(c));
        }
    }

    // Reduces self to the identity, mirroring every operation onto n
    fn row_reduce_for_inverse(&mut self, n: &mut Matrix<T>) -> Result<()> {
        for i in 0..self.rows {
            let Some(pivot_row) = self.find_pivot_row(i, i) else {
                debug!("No pivot in column {} of {}x{} matrix", i, self.rows, self.columns);
                return Err(AlgebraError::SingularMatrix);
            };
            if pivot_row != i {
                debug!("Swapping rows {} and {}", i, pivot_row);
                self.swap_rows_in_place(i, pivot_row);
                n.swap_rows_in_place(i, pivot_row);
            }

            let pivot = self.cell(i, i).clone();
            self.divide_row_in_place(i, &pivot)?;
            n.divide_row_in_place(i, &pivot)?;

            for j in (i + 1)..self.rows {
                let t = self.cell(j, i).clone();
                if !t.is_zero() {
                    self.subtract_scaled_row_in_place(j, i, &t);
                    n.subtract_scaled_row_in_place(j, i, &t);
                }
            }
        }

        for i in 0..self.rows {
            for j in 0..i {
                let t = self.cell(j, i).clone();
                if !t.is_zero() {
                    self.subtract_scaled_row_in_place(j, i, &t);
                    n.subtract_scaled_row_in_place(j, i, &t);
                }
            }
        }

        Ok(())
    }

    /// Render as a LaTeX matrix environment
    ///
    /// Rows are joined with `\\` and a newline, cells with ` & `.
    pub fn to_latex_string(&self, options: &LatexOptions<'_, T>) -> String {
        let row_strs: Vec<String> = (0..self.rows)
            .map(|i| {
                (0..self.columns)
                    .map(|j| options.format_element(self.cell(i, j), i, j))
                    .collect::<Vec<_>>()
                    .join(" & ")
            })
            .collect();
        format!(
            "\\begin{{{env}}}\n{}\n\\end{{{env}}}",
            row_strs.join(" \\\\\n"),
            env = options.environment
        )
    }
}

impl<T: Field> std::fmt::Display for Matrix<T> {
    /// One bracketed row per line, cells right-aligned to a common width
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cells: Vec<String> = self.elements.iter().map(|x| x.to_string()).collect();
        let width = cells.iter().map(|s| s.len()).max().unwrap_or(0);
        for (i, row) in cells.chunks(self.columns).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", cell, width = width)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

/// Per-element formatter: receives the element, its row and its column
pub type ElementFormatter<'a, T> = Box<dyn Fn(&T, usize, usize) -> String + 'a>;

/// Options for [`Matrix::to_latex_string`]
pub struct LatexOptions<'a, T> {
    /// LaTeX environment name, e.g. `pmatrix` or `bmatrix`
    pub environment: &'a str,
    /// Custom cell rendering; `Display` when `None`
    pub element_formatter: Option<ElementFormatter<'a, T>>,
}

impl<T: Field> Default for LatexOptions<'_, T> {
    fn default() -> Self {
        Self {
            environment: "pmatrix",
            element_formatter: None,
        }
    }
}

impl<'a, T: Field> LatexOptions<'a, T> {
    pub fn new(environment: &'a str) -> Self {
        Self {
            environment,
            element_formatter: None,
        }
    }

    pub fn with_formatter<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, usize, usize) -> String + 'a,
    {
        self.element_formatter = Some(Box::new(f));
        self
    }

    fn format_element(&self, x: &T, i: usize, j: usize) -> String {
        match &self.element_formatter {
            Some(f) => f(x, i, j),
            None => x.to_string(),
        }
    }
}

/// Cauchy matrix with `P[i][j] = 1 / (x[i] - y[j])`
///
/// Every `x[i]` must differ from every `y[j]`; a collision surfaces as
/// [`AlgebraError::DivisionByZero`].
pub fn new_cauchy_matrix<T: Field>(x: &[T], y: &[T]) -> Result<Matrix<T>> {
    Matrix::from_fallible_fn(x.len(), y.len(), |i, j| {
        T::one().divided_by(&x[i].minus(&y[j]))
    })
}
