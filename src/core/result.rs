//! Regression result structures.

use crate::matrix::Matrix;

/// Complete result from an OLS fit.
///
/// Coefficients, standard errors, t-statistics and p-values are indexed by
/// design-matrix column, so index 0 is the intercept when one was generated.
#[derive(Debug, Clone)]
pub struct RegressionResult {
    // ========== Core Results ==========
    /// Estimated coefficients `b = (X'X)⁻¹X'y` as a `p x 1` column vector.
    pub coefficients: Matrix,

    /// Coefficient covariance `(X'X)⁻¹ · MSE`, `p x p`.
    pub covariance: Matrix,

    /// Fitted values `Xb` for the training rows.
    pub fitted_values: Vec<f64>,

    /// Residuals `y - Xb`.
    pub residuals: Vec<f64>,

    /// Number of observations (rows of X).
    pub n_observations: usize,

    /// Number of parameters (columns of X, including any intercept).
    pub n_parameters: usize,

    // ========== Sums of Squares ==========
    /// Sum of squares due to error.
    pub sse: f64,

    /// Sum of squares due to regression.
    pub ssr: f64,

    /// Total sum of squares, `ssr + sse`.
    pub ssto: f64,

    // ========== Fit Statistics ==========
    /// Coefficient of determination (R²).
    pub r_squared: f64,

    /// Adjusted R².
    pub adj_r_squared: f64,

    /// Mean squared error, `sse / residual_df`.
    pub mse: f64,

    /// F-statistic for overall model significance.
    pub f_statistic: f64,

    /// Upper-tail p-value of the F-statistic.
    pub f_pvalue: f64,

    // ========== Inference Statistics ==========
    /// Standard errors of coefficients.
    pub std_errors: Vec<f64>,

    /// t-statistics for coefficients.
    pub t_statistics: Vec<f64>,

    /// Two-sided p-values for coefficient significance tests.
    pub p_values: Vec<f64>,

    /// Lower bounds of confidence intervals.
    pub conf_interval_lower: Vec<f64>,

    /// Upper bounds of confidence intervals.
    pub conf_interval_upper: Vec<f64>,

    /// Confidence level used for intervals.
    pub confidence_level: f64,
}

impl RegressionResult {
    /// Residual degrees of freedom, `(n - 1) - model_df`.
    pub fn residual_df(&self) -> usize {
        self.n_observations.saturating_sub(self.n_parameters)
    }

    /// Model degrees of freedom, `p - 1`.
    pub fn model_df(&self) -> usize {
        self.n_parameters.saturating_sub(1)
    }

    /// Coefficient `index` as a scalar, if it exists.
    pub fn coefficient(&self, index: usize) -> Option<f64> {
        self.coefficients.get(index, 0)
    }

    /// Coefficients as a flat vector in column order.
    pub fn coefficient_vec(&self) -> Vec<f64> {
        self.coefficients.column(0)
    }

    /// Root mean squared error.
    pub fn rmse(&self) -> f64 {
        self.mse.sqrt()
    }
}
