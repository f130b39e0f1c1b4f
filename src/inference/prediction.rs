//! Prediction variance calculations.

use crate::matrix::{Matrix, MatrixError};

/// Estimated prediction variance for every row of the design matrix.
///
/// For a row `x₀` (as stored in the design matrix, including any intercept
/// column) the variance is the quadratic form `x₀ᵀ Cov x₀`, computed as the
/// sum of the entries of `Cov ⊙ (x₀ x₀ᵀ)`. Results are in row order.
///
/// # Arguments
/// * `x` - Design matrix (n × p)
/// * `covariance` - Coefficient covariance (p × p)
pub fn compute_prediction_variances(
    x: &Matrix,
    covariance: &Matrix,
) -> Result<Vec<f64>, MatrixError> {
    let unit_column = Matrix::filled(covariance.columns(), 1, 1.0)?;
    let unit_row = Matrix::filled(covariance.rows(), 1, 1.0)?;

    x.row_iter()
        .map(|row| -> Result<f64, MatrixError> {
            let row_x = Matrix::from_row_slice(1, row.len(), row)?;
            let weighted = covariance.element_multiply(&row_x.transpose().multiply(&row_x)?)?;
            let total = unit_row
                .transpose()
                .multiply(&weighted)?
                .multiply(&unit_column)?;
            Ok(total[(0, 0)])
        })
        .collect()
}
