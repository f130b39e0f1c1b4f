//! Row and column insertion.

use super::{Matrix, MatrixError};

impl Matrix {
    /// A copy of this matrix with `new_column` inserted before column
    /// `before_column`. Passing `columns()` appends at the right edge.
    ///
    /// `new_column` must have one entry per row.
    pub fn add_column(
        &self,
        new_column: &[f64],
        before_column: usize,
    ) -> Result<Matrix, MatrixError> {
        if new_column.len() != self.rows {
            return Err(MatrixError::DimensionMismatch {
                op: "add_column",
                left: self.shape(),
                right: (new_column.len(), 1),
            });
        }
        if before_column > self.columns {
            return Err(MatrixError::IndexOutOfBounds {
                index: before_column,
                len: self.columns,
            });
        }

        let columns = self.columns + 1;
        let mut data = Vec::with_capacity(self.rows * columns);
        for (row, &inserted) in self.row_iter().zip(new_column) {
            data.extend_from_slice(&row[..before_column]);
            data.push(inserted);
            data.extend_from_slice(&row[before_column..]);
        }

        Ok(Matrix {
            rows: self.rows,
            columns,
            data,
        })
    }

    /// A copy of this matrix with `new_row` inserted before row `before_row`.
    /// Passing `rows()` appends at the bottom.
    pub fn add_row(&self, new_row: &[f64], before_row: usize) -> Result<Matrix, MatrixError> {
        if new_row.len() != self.columns {
            return Err(MatrixError::DimensionMismatch {
                op: "add_row",
                left: self.shape(),
                right: (1, new_row.len()),
            });
        }
        if before_row > self.rows {
            return Err(MatrixError::IndexOutOfBounds {
                index: before_row,
                len: self.rows,
            });
        }

        let split = before_row * self.columns;
        let mut data = Vec::with_capacity(self.data.len() + self.columns);
        data.extend_from_slice(&self.data[..split]);
        data.extend_from_slice(new_row);
        data.extend_from_slice(&self.data[split..]);

        Ok(Matrix {
            rows: self.rows + 1,
            columns: self.columns,
            data,
        })
    }
}
