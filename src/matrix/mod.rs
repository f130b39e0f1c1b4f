//! Dense row-major matrices with value semantics.
//!
//! Every operation takes `&self` and returns a freshly allocated [`Matrix`];
//! operands are never modified. Determinants and inverses use recursive
//! cofactor expansion, so their cost grows factorially with the order of the
//! matrix. They are meant for the small systems produced by regression
//! normal equations, not for large dense problems.

mod arithmetic;
mod cofactor;
mod edit;
mod interop;

use std::fmt;
use std::ops::Index;
use thiserror::Error;

/// Errors raised by matrix construction and matrix operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    #[error("invalid matrix shape: {0}")]
    Shape(String),

    #[error("dimension mismatch in {op}: left is {left:?}, right is {right:?}")]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("{op} requires a square matrix, got {rows}x{columns}")]
    NotSquare {
        op: &'static str,
        rows: usize,
        columns: usize,
    },

    #[error("index {index} is out of bounds for insertion into length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("matrix is singular (determinant is zero)")]
    Singular,
}

/// A dense, rectangular matrix of `f64` stored in row-major order.
///
/// A `Matrix` always has at least one row and one column, and every row has
/// the same length. These invariants are checked by every public constructor
/// and cannot be bypassed.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Build a matrix from a sequence of rows.
    ///
    /// Fails with [`MatrixError::Shape`] if there are no rows, if the first
    /// row is empty, or if the rows are jagged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use matrix_regression::Matrix;
    ///
    /// let m = Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m.shape(), (2, 2));
    /// assert!(Matrix::new(vec![vec![2.0, 3.0], vec![1.0]]).is_err());
    /// ```
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let columns = match rows.first() {
            None => return Err(MatrixError::Shape("matrix has no rows".into())),
            Some(first) if first.is_empty() => {
                return Err(MatrixError::Shape("matrix rows are empty".into()))
            }
            Some(first) => first.len(),
        };

        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != columns)
        {
            return Err(MatrixError::Shape(format!(
                "row {index} has {} entries, expected {columns}",
                row.len()
            )));
        }

        let n_rows = rows.len();
        let data: Vec<f64> = rows.into_iter().flatten().collect();

        Ok(Self {
            rows: n_rows,
            columns,
            data,
        })
    }

    /// Build a `rows x columns` matrix from row-major values.
    pub fn from_row_slice(
        rows: usize,
        columns: usize,
        values: &[f64],
    ) -> Result<Self, MatrixError> {
        Self::check_dimensions(rows, columns)?;
        if values.len() != rows * columns {
            return Err(MatrixError::Shape(format!(
                "expected {} values for a {rows}x{columns} matrix, got {}",
                rows * columns,
                values.len()
            )));
        }
        Ok(Self {
            rows,
            columns,
            data: values.to_vec(),
        })
    }

    /// A `rows x columns` matrix with every entry set to `value`.
    pub fn filled(rows: usize, columns: usize, value: f64) -> Result<Self, MatrixError> {
        Self::check_dimensions(rows, columns)?;
        Ok(Self::from_fn(rows, columns, |_, _| value))
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        Self::check_dimensions(n, n)?;
        Ok(Self::from_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 }))
    }

    /// Internal constructor for shapes already known to be valid.
    pub(crate) fn from_fn(rows: usize, columns: usize, f: impl Fn(usize, usize) -> f64) -> Self {
        debug_assert!(rows > 0 && columns > 0);
        let mut data = Vec::with_capacity(rows * columns);
        for i in 0..rows {
            for j in 0..columns {
                data.push(f(i, j));
            }
        }
        Self {
            rows,
            columns,
            data,
        }
    }

    fn check_dimensions(rows: usize, columns: usize) -> Result<(), MatrixError> {
        if rows == 0 || columns == 0 {
            return Err(MatrixError::Shape(format!(
                "dimensions must be positive, got {rows}x{columns}"
            )));
        }
        Ok(())
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Whether the row and column counts are equal.
    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Entry at `(row, column)`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds. Use [`Matrix::get`] for a
    /// checked lookup.
    pub fn entry(&self, row: usize, column: usize) -> f64 {
        self[(row, column)]
    }

    /// Checked entry lookup.
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        if row < self.rows && column < self.columns {
            Some(self.data[row * self.columns + column])
        } else {
            None
        }
    }

    /// Borrow one row.
    ///
    /// # Panics
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> &[f64] {
        assert!(row < self.rows, "row {row} out of bounds for {} rows", self.rows);
        &self.data[row * self.columns..(row + 1) * self.columns]
    }

    /// Copy out one column.
    ///
    /// # Panics
    /// Panics if `column` is out of bounds.
    pub fn column(&self, column: usize) -> Vec<f64> {
        assert!(
            column < self.columns,
            "column {column} out of bounds for {} columns",
            self.columns
        );
        (0..self.rows).map(|i| self[(i, column)]).collect()
    }

    /// Iterate over the rows as slices.
    pub fn row_iter(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.columns)
    }

    /// Entries in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Nested row vectors, the inverse of [`Matrix::new`].
    pub fn to_vec(&self) -> Vec<Vec<f64>> {
        self.row_iter().map(<[f64]>::to_vec).collect()
    }

    /// Entries on the main diagonal, up to `min(rows, columns)`.
    pub fn diagonal(&self) -> Vec<f64> {
        (0..self.rows.min(self.columns))
            .map(|i| self[(i, i)])
            .collect()
    }

    /// An independent duplicate of this matrix.
    pub fn copy(&self) -> Matrix {
        self.clone()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, column): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && column < self.columns,
            "index ({row}, {column}) out of bounds for {}x{} matrix",
            self.rows,
            self.columns
        );
        &self.data[row * self.columns + column]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Order of the matrix is ({} rows X {} columns)",
            self.rows, self.columns
        )?;
        for row in self.row_iter() {
            let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
