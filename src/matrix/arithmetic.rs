//! Elementwise, scalar and matrix-product arithmetic.

use super::{Matrix, MatrixError};

impl Matrix {
    /// Apply `f` to every pair of corresponding entries.
    fn zip_with(
        &self,
        other: &Matrix,
        op: &'static str,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<Matrix, MatrixError> {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix {
            rows: self.rows,
            columns: self.columns,
            data,
        })
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Matrix {
        Matrix {
            rows: self.rows,
            columns: self.columns,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Entrywise sum.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Entrywise difference `self - other`.
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    /// Hadamard (entrywise) product.
    pub fn element_multiply(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, "element_multiply", |a, b| a * b)
    }

    /// Entrywise quotient. Zero divisors yield IEEE-754 infinities or NaN.
    pub fn element_divide(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, "element_divide", |a, b| a / b)
    }

    /// Matrix product `self * other`.
    ///
    /// Requires `self.columns() == other.rows()`; the result is
    /// `self.rows() x other.columns()`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.columns != other.rows {
            return Err(MatrixError::DimensionMismatch {
                op: "multiply",
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(Matrix::from_fn(self.rows, other.columns, |i, j| {
            (0..self.columns)
                .map(|k| self[(i, k)] * other[(k, j)])
                .sum()
        }))
    }

    /// Multiply every entry by `scalar`.
    pub fn scalar_multiply(&self, scalar: f64) -> Matrix {
        self.map(|v| v * scalar)
    }

    /// Divide every entry by `scalar`. A zero scalar is not rejected.
    pub fn scalar_divide(&self, scalar: f64) -> Matrix {
        self.map(|v| v / scalar)
    }

    /// The `columns x rows` transpose.
    pub fn transpose(&self) -> Matrix {
        Matrix::from_fn(self.columns, self.rows, |i, j| self[(j, i)])
    }
}
