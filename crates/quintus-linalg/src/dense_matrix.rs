//! Dense matrices over a field-like scalar.

use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use num_traits::{One, Zero};
use thiserror::Error;

/// Scalar requirements for matrix entries: exact field operations with
/// structural equality. Satisfied by `f64`, `Complex64` and the toolkit's
/// `Rational`; exact types are the intended use for row reduction.
pub trait Scalar:
    Clone
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
}

impl<T> Scalar for T where
    T: Clone
        + PartialEq
        + Zero
        + One
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Neg<Output = T>
{
}

/// Errors raised by matrix inversion.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum MatrixError {
    /// Inversion of a non-square matrix.
    #[error("matrix is not square")]
    NotSquare,
    /// Inversion of a singular matrix.
    #[error("matrix is not invertible")]
    NotInvertible,
}

/// One elementary row operation, recorded during reduction.
#[derive(Clone, Debug, PartialEq)]
pub enum RowOp<K> {
    /// Rows `a` and `b` were exchanged.
    Swap {
        /// First row.
        a: usize,
        /// Second row.
        b: usize,
    },
    /// A row was multiplied by `factor`.
    Scale {
        /// The scaled row.
        row: usize,
        /// The applied factor.
        factor: K,
    },
    /// `factor` times row `src` was added to row `dest`.
    AddMultiple {
        /// The modified row.
        dest: usize,
        /// The applied factor.
        factor: K,
        /// The unchanged source row.
        src: usize,
    },
}

/// A dense matrix in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix<K> {
    data: Vec<K>,
    num_rows: usize,
    num_cols: usize,
}

impl<K: Scalar> Matrix<K> {
    /// Creates a matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![K::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from rows. Ragged rows are padded with zeros to the
    /// width of the longest row.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<K>>) -> Self {
        let num_rows = rows.len();
        let num_cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut data = Vec::with_capacity(num_rows * num_cols);
        for mut row in rows {
            row.resize(num_cols, K::zero());
            data.extend(row);
        }
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Creates the n×n identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = K::one();
        }
        m
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns row `i` as a slice.
    #[must_use]
    pub fn row(&self, i: usize) -> &[K] {
        &self.data[i * self.num_cols..(i + 1) * self.num_cols]
    }

    /// Exchanges two rows.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for c in 0..self.num_cols {
            self.data.swap(a * self.num_cols + c, b * self.num_cols + c);
        }
    }

    /// Multiplies row `row` by `factor`.
    pub fn scale_row(&mut self, row: usize, factor: &K) {
        for c in 0..self.num_cols {
            let idx = row * self.num_cols + c;
            self.data[idx] = self.data[idx].clone() * factor.clone();
        }
    }

    /// Adds `factor` times row `src` to row `dest`.
    pub fn add_multiple(&mut self, dest: usize, factor: &K, src: usize) {
        for c in 0..self.num_cols {
            let v = self.data[src * self.num_cols + c].clone();
            let idx = dest * self.num_cols + c;
            self.data[idx] = self.data[idx].clone() + factor.clone() * v;
        }
    }

    /// Reduces to row echelon form in place and returns the operations
    /// performed, in order.
    pub fn row_echelon(&mut self) -> Vec<RowOp<K>> {
        let mut ops = Vec::new();
        let mut pivot_row = 0;
        let mut pivot_col = 0;

        while pivot_row + 1 < self.num_rows && pivot_col < self.num_cols {
            // Leftmost column with a nonzero entry in the remaining rows.
            let Some(col) = (pivot_col..self.num_cols)
                .find(|&c| (pivot_row..self.num_rows).any(|r| !self[(r, c)].is_zero()))
            else {
                break;
            };
            let pivot_src = (pivot_row..self.num_rows)
                .find(|&r| !self[(r, col)].is_zero())
                .expect("column was chosen to contain a nonzero entry");

            if pivot_src != pivot_row {
                self.swap_rows(pivot_row, pivot_src);
                ops.push(RowOp::Swap {
                    a: pivot_row,
                    b: pivot_src,
                });
            }

            let pivot = self[(pivot_row, col)].clone();
            for r in pivot_row + 1..self.num_rows {
                let entry = self[(r, col)].clone();
                if !entry.is_zero() {
                    let factor = -(entry / pivot.clone());
                    self.add_multiple(r, &factor, pivot_row);
                    ops.push(RowOp::AddMultiple {
                        dest: r,
                        factor,
                        src: pivot_row,
                    });
                }
            }

            pivot_row += 1;
            pivot_col = col + 1;
        }

        ops
    }

    /// Reduces to reduced row echelon form in place: every leading entry
    /// becomes 1 and is the only nonzero entry of its column. Returns the
    /// operations performed.
    pub fn reduced_row_echelon(&mut self) -> Vec<RowOp<K>> {
        let mut ops = self.row_echelon();

        for i in 0..self.num_rows {
            let Some(lead) = (0..self.num_cols).find(|&c| !self[(i, c)].is_zero()) else {
                continue;
            };

            let pivot = self[(i, lead)].clone();
            if !pivot.is_one() {
                let factor = K::one() / pivot;
                self.scale_row(i, &factor);
                ops.push(RowOp::Scale { row: i, factor });
            }

            for j in (0..i).rev() {
                let entry = self[(j, lead)].clone();
                if !entry.is_zero() {
                    let factor = -entry;
                    self.add_multiple(j, &factor, i);
                    ops.push(RowOp::AddMultiple {
                        dest: j,
                        factor,
                        src: i,
                    });
                }
            }
        }

        ops
    }

    /// Number of rows with a nonzero entry among the first `cols` columns.
    #[must_use]
    pub fn rank_within(&self, cols: usize) -> usize {
        (0..self.num_rows)
            .filter(|&r| (0..cols.min(self.num_cols)).any(|c| !self[(r, c)].is_zero()))
            .count()
    }

    /// Number of nonzero rows; meaningful after reduction.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.rank_within(self.num_cols)
    }

    /// Glues `other` to the right of `self`.
    ///
    /// # Panics
    ///
    /// Panics if the row counts differ.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        assert_eq!(self.num_rows, other.num_rows, "row count does not match");
        let mut data = Vec::with_capacity(self.num_rows * (self.num_cols + other.num_cols));
        for r in 0..self.num_rows {
            data.extend_from_slice(self.row(r));
            data.extend_from_slice(other.row(r));
        }
        Self {
            data,
            num_rows: self.num_rows,
            num_cols: self.num_cols + other.num_cols,
        }
    }

    /// Copies the block with rows `r0..r1` and columns `c0..c1`.
    #[must_use]
    pub fn submatrix(&self, r0: usize, r1: usize, c0: usize, c1: usize) -> Self {
        let mut data = Vec::with_capacity((r1 - r0) * (c1 - c0));
        for r in r0..r1 {
            data.extend_from_slice(&self.row(r)[c0..c1]);
        }
        Self {
            data,
            num_rows: r1 - r0,
            num_cols: c1 - c0,
        }
    }

    /// Computes the inverse by reducing `[self | I]` to reduced row echelon
    /// form and reading off the right block.
    ///
    /// # Errors
    ///
    /// [`MatrixError::NotSquare`] for non-square input,
    /// [`MatrixError::NotInvertible`] when the left block loses rank.
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        if self.num_rows != self.num_cols {
            return Err(MatrixError::NotSquare);
        }
        let n = self.num_rows;

        let mut work = self.concat(&Self::identity(n));
        work.reduced_row_echelon();

        if work.rank_within(n) != n {
            return Err(MatrixError::NotInvertible);
        }

        Ok(work.submatrix(0, n, n, 2 * n))
    }
}

impl<K> Index<(usize, usize)> for Matrix<K> {
    type Output = K;

    fn index(&self, (r, c): (usize, usize)) -> &K {
        &self.data[r * self.num_cols + c]
    }
}

impl<K> IndexMut<(usize, usize)> for Matrix<K> {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut K {
        &mut self.data[r * self.num_cols + c]
    }
}

impl<K: Scalar> Add for &Matrix<K> {
    type Output = Matrix<K>;

    fn add(self, rhs: Self) -> Matrix<K> {
        assert_eq!(self.num_rows, rhs.num_rows, "row count does not match");
        assert_eq!(self.num_cols, rhs.num_cols, "column count does not match");
        let data = self
            .data
            .iter()
            .zip(&rhs.data)
            .map(|(a, b)| a.clone() + b.clone())
            .collect();
        Matrix {
            data,
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}

impl<K: Scalar> Sub for &Matrix<K> {
    type Output = Matrix<K>;

    fn sub(self, rhs: Self) -> Matrix<K> {
        assert_eq!(self.num_rows, rhs.num_rows, "row count does not match");
        assert_eq!(self.num_cols, rhs.num_cols, "column count does not match");
        let data = self
            .data
            .iter()
            .zip(&rhs.data)
            .map(|(a, b)| a.clone() - b.clone())
            .collect();
        Matrix {
            data,
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}

impl<K: Scalar> Mul for &Matrix<K> {
    type Output = Matrix<K>;

    fn mul(self, rhs: Self) -> Matrix<K> {
        assert_eq!(
            self.num_cols, rhs.num_rows,
            "column count of the left factor does not match row count of the right"
        );
        let mut out = Matrix::zeros(self.num_rows, rhs.num_cols);
        for i in 0..self.num_rows {
            for j in 0..rhs.num_cols {
                let mut sum = K::zero();
                for a in 0..self.num_cols {
                    sum = sum + self[(i, a)].clone() * rhs[(a, j)].clone();
                }
                out[(i, j)] = sum;
            }
        }
        out
    }
}

impl<K: Scalar + fmt::Display> fmt::Display for Matrix<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.data.iter().map(ToString::to_string).collect();
        let width = rendered.iter().map(String::len).max().unwrap_or(0);

        for r in 0..self.num_rows {
            let (open, close) = if self.num_rows == 1 {
                ("[ ", "]")
            } else if r == 0 {
                ("⎡ ", "⎤")
            } else if r == self.num_rows - 1 {
                ("⎣ ", "⎦")
            } else {
                ("⎢ ", "⎥")
            };
            write!(f, "{open}")?;
            for c in 0..self.num_cols {
                write!(f, "{:>width$} ", rendered[r * self.num_cols + c])?;
            }
            writeln!(f, "{close}")?;
        }
        Ok(())
    }
}
