//! Conversions to and from `faer` dense matrices.

use super::{Matrix, MatrixError};
use faer::Mat;

impl Matrix {
    /// Copy into a `faer::Mat<f64>`.
    pub fn to_faer(&self) -> Mat<f64> {
        Mat::from_fn(self.rows, self.columns, |i, j| self[(i, j)])
    }
}

impl TryFrom<&Mat<f64>> for Matrix {
    type Error = MatrixError;

    /// Fails with [`MatrixError::Shape`] if either dimension is zero.
    fn try_from(mat: &Mat<f64>) -> Result<Self, Self::Error> {
        let (rows, columns) = (mat.nrows(), mat.ncols());
        if rows == 0 || columns == 0 {
            return Err(MatrixError::Shape(format!(
                "dimensions must be positive, got {rows}x{columns}"
            )));
        }
        Ok(Matrix::from_fn(rows, columns, |i, j| mat[(i, j)]))
    }
}
