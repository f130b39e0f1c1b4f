//! Determinant, inverse and trace by cofactor expansion.

use super::{Matrix, MatrixError};
use tracing::{debug, trace};

impl Matrix {
    fn require_square(&self, op: &'static str) -> Result<usize, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                op,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(self.rows)
    }

    /// The minor matrix obtained by deleting `exclude_row` and `exclude_column`.
    ///
    /// Remaining entries keep their relative order.
    pub(crate) fn submatrix(
        &self,
        exclude_row: usize,
        exclude_column: usize,
    ) -> Result<Matrix, MatrixError> {
        if self.rows < 2 || self.columns < 2 {
            return Err(MatrixError::Shape(format!(
                "cannot take a minor of a {}x{} matrix",
                self.rows, self.columns
            )));
        }
        if exclude_row >= self.rows {
            return Err(MatrixError::IndexOutOfBounds {
                index: exclude_row,
                len: self.rows,
            });
        }
        if exclude_column >= self.columns {
            return Err(MatrixError::IndexOutOfBounds {
                index: exclude_column,
                len: self.columns,
            });
        }

        let skip = |index: usize, excluded: usize| {
            if index >= excluded {
                index + 1
            } else {
                index
            }
        };
        Ok(Matrix::from_fn(self.rows - 1, self.columns - 1, |i, j| {
            self[(skip(i, exclude_row), skip(j, exclude_column))]
        }))
    }

    /// Determinant by Laplace expansion along the first row.
    ///
    /// Orders 1 and 2 use closed forms. Larger orders recurse over minors,
    /// which is O(n!) in the order of the matrix.
    ///
    /// # Example
    ///
    /// ```rust
    /// use matrix_regression::Matrix;
    ///
    /// let m = Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m.determinant().unwrap(), -2.0);
    /// ```
    pub fn determinant(&self) -> Result<f64, MatrixError> {
        let n = self.require_square("determinant")?;
        match n {
            1 => Ok(self[(0, 0)]),
            2 => Ok(self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]),
            _ => {
                let mut det = 0.0;
                for j in 0..n {
                    let minor = self.submatrix(0, j)?.determinant()?;
                    if j % 2 == 0 {
                        det += self[(0, j)] * minor;
                    } else {
                        det -= self[(0, j)] * minor;
                    }
                }
                Ok(det)
            }
        }
    }

    /// Signed minors `C[i][j] = (-1)^(i+j) * det(minor(i, j))`.
    fn cofactors(&self, n: usize) -> Result<Matrix, MatrixError> {
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                let minor = self.submatrix(i, j)?.determinant()?;
                data.push(if (i + j) % 2 == 0 { minor } else { -minor });
            }
        }
        Ok(Matrix {
            rows: n,
            columns: n,
            data,
        })
    }

    /// Inverse via the adjugate: `adj(A) / det(A)`.
    ///
    /// Returns [`MatrixError::Singular`] when the determinant is exactly zero.
    /// Nearly singular matrices are inverted anyway and produce very large
    /// entries.
    pub fn invert(&self) -> Result<Matrix, MatrixError> {
        let n = self.require_square("invert")?;
        trace!(order = n, "inverting matrix by adjugate");

        let det = self.determinant()?;
        if det == 0.0 {
            debug!(order = n, "refusing to invert a singular matrix");
            return Err(MatrixError::Singular);
        }

        if n == 1 {
            return Ok(Matrix::from_fn(1, 1, |_, _| 1.0 / det));
        }

        Ok(self.cofactors(n)?.transpose().scalar_divide(det))
    }

    /// Sum of the diagonal entries.
    pub fn trace(&self) -> Result<f64, MatrixError> {
        self.require_square("trace")?;
        Ok(self.diagonal().iter().sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn m(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::new(rows).expect("valid test matrix")
    }

    #[test]
    fn test_determinant_2x2() {
        assert_eq!(m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).determinant(), Ok(-2.0));
    }

    #[test]
    fn test_determinant_1x1() {
        assert_eq!(m(vec![vec![-3.5]]).determinant(), Ok(-3.5));
    }

    #[test]
    fn test_determinant_3x3_and_4x4() {
        let a = m(vec![
            vec![6.0, 1.0, 1.0],
            vec![4.0, -2.0, 5.0],
            vec![2.0, 8.0, 7.0],
        ]);
        assert_relative_eq!(a.determinant().unwrap(), -306.0, epsilon = 1e-12);

        let b = m(vec![
            vec![1.0, 0.0, 2.0, -1.0],
            vec![3.0, 0.0, 0.0, 5.0],
            vec![2.0, 1.0, 4.0, -3.0],
            vec![1.0, 0.0, 5.0, 0.0],
        ]);
        assert_relative_eq!(b.determinant().unwrap(), 30.0, epsilon = 1e-12);
    }

    #[test]
    fn test_determinant_not_square() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
        assert!(matches!(
            a.determinant(),
            Err(MatrixError::NotSquare { op: "determinant", rows: 3, columns: 2 })
        ));
    }

    #[test]
    fn test_submatrix_preserves_order() {
        let a = m(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ]);
        assert_eq!(
            a.submatrix(1, 1).unwrap().to_vec(),
            vec![vec![1.0, 3.0], vec![7.0, 9.0]]
        );
        assert_eq!(
            a.submatrix(0, 2).unwrap().to_vec(),
            vec![vec![4.0, 5.0], vec![7.0, 8.0]]
        );
        assert!(a.submatrix(3, 0).is_err());
        assert!(m(vec![vec![1.0]]).submatrix(0, 0).is_err());
    }

    #[test]
    fn test_invert_2x2_exact() {
        let inv = m(vec![vec![4.0, 3.0], vec![3.0, 2.0]]).invert().unwrap();
        assert_eq!(inv.to_vec(), vec![vec![-2.0, 3.0], vec![3.0, -4.0]]);
    }

    #[test]
    fn test_invert_1x1() {
        let inv = m(vec![vec![4.0]]).invert().unwrap();
        assert_eq!(inv.entry(0, 0), 0.25);
    }

    #[test]
    fn test_invert_3x3_round_trip_to_identity() {
        let a = m(vec![
            vec![2.0, -1.0, 0.0],
            vec![-1.0, 2.0, -1.0],
            vec![0.0, -1.0, 2.0],
        ]);
        let product = a.multiply(&a.invert().unwrap()).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(product[(i, j)], expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_invert_singular() {
        let a = m(vec![vec![1.0, 2.0], vec![2.0, 4.0]]);
        assert_eq!(a.invert(), Err(MatrixError::Singular));
    }

    #[test]
    fn test_invert_not_square() {
        let a = m(vec![vec![1.0, 2.0, 3.0]]);
        assert!(matches!(a.invert(), Err(MatrixError::NotSquare { op: "invert", .. })));
    }

    #[test]
    fn test_trace() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(a.trace(), Ok(5.0));
        let b = m(vec![vec![1.0, 2.0]]);
        assert!(matches!(b.trace(), Err(MatrixError::NotSquare { op: "trace", .. })));
    }
}
