//! Ordinary Least Squares regression solver.

use crate::core::{RegressionOptions, RegressionOptionsBuilder, RegressionResult};
use crate::inference::{compute_prediction_variances, CoefficientInference};
use crate::matrix::{Matrix, MatrixError};
use crate::solvers::error::RegressionError;
use tracing::debug;

/// Ordinary Least Squares estimator solved through the normal equations.
///
/// `b = (X'X)⁻¹ X'y`, with `(X'X)⁻¹` computed by cofactor expansion. The
/// estimator is stateful: predictors and response are supplied with
/// [`Regression::set_x`] and [`Regression::set_y`], then [`Regression::exec`]
/// fits the model and stores the statistics for the accessors, for
/// [`Regression::predict`] and for [`Regression::compute_prediction_variances`].
///
/// Mutating methods take `&mut self`, so a fit cannot race with readers of the
/// same instance. Replacing X or Y discards the previous fit.
///
/// # Example
///
/// ```rust
/// use matrix_regression::{Matrix, Regression};
///
/// let x = Matrix::new(vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]])?;
/// let y = Matrix::new(vec![vec![3.1], vec![4.9], vec![7.2], vec![8.8]])?;
///
/// let mut reg = Regression::default();
/// reg.set_x(x)?.set_y(y);
/// reg.exec()?;
///
/// let r2 = reg.r_squared().expect("fitted");
/// assert!(r2 > 0.99);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Regression {
    options: RegressionOptions,
    x: Option<Matrix>,
    y: Option<Matrix>,
    result: Option<RegressionResult>,
}

impl Regression {
    /// Create a new estimator with the given options.
    pub fn new(options: RegressionOptions) -> Self {
        Self {
            options,
            x: None,
            y: None,
            result: None,
        }
    }

    /// Create a builder for configuring the estimator.
    pub fn builder() -> RegressionBuilder {
        RegressionBuilder::default()
    }

    /// Get the options used by this estimator.
    pub fn options(&self) -> &RegressionOptions {
        &self.options
    }

    /// A copy of `m` with a column of ones inserted before column 0.
    pub fn generate_intercept_column(m: &Matrix) -> Result<Matrix, MatrixError> {
        m.add_column(&vec![1.0; m.rows()], 0)
    }

    fn design_matrix(&self, m: &Matrix) -> Result<Matrix, MatrixError> {
        if self.options.with_intercept {
            Self::generate_intercept_column(m)
        } else {
            Ok(m.clone())
        }
    }

    /// Set the predictor matrix, one row per observation.
    ///
    /// Unless the intercept is disabled, a column of ones is prepended.
    pub fn set_x(&mut self, x: Matrix) -> Result<&mut Self, RegressionError> {
        let design = if self.options.with_intercept {
            Self::generate_intercept_column(&x)?
        } else {
            x
        };
        self.x = Some(design);
        self.result = None;
        Ok(self)
    }

    /// Set the response, a single-column matrix with one row per observation.
    pub fn set_y(&mut self, y: Matrix) -> &mut Self {
        self.y = Some(y);
        self.result = None;
        self
    }

    /// The stored design matrix (including any intercept column).
    pub fn x(&self) -> Option<&Matrix> {
        self.x.as_ref()
    }

    /// The stored response.
    pub fn y(&self) -> Option<&Matrix> {
        self.y.as_ref()
    }

    /// Whether `exec` has completed since X and Y were last set.
    pub fn is_fitted(&self) -> bool {
        self.result.is_some()
    }

    /// Fit the model.
    ///
    /// Fails with [`RegressionError::NotConfigured`] if X or Y is missing.
    /// A singular `X'X` surfaces as [`MatrixError::Singular`].
    pub fn exec(&mut self) -> Result<&RegressionResult, RegressionError> {
        let x = self
            .x
            .as_ref()
            .ok_or(RegressionError::NotConfigured("X has not been set"))?;
        let y = self
            .y
            .as_ref()
            .ok_or(RegressionError::NotConfigured("Y has not been set"))?;

        let result = fit(x, y, self.options.confidence_level)?;
        Ok(self.result.insert(result))
    }

    /// Predict the response for new predictor rows.
    ///
    /// `new_x` is augmented with an intercept column exactly as in
    /// [`Regression::set_x`]. Returns one predicted value per row as an
    /// `n x 1` matrix.
    pub fn predict(&self, new_x: &Matrix) -> Result<Matrix, RegressionError> {
        let result = self.fitted("predict requires a fitted model")?;
        let design = self.design_matrix(new_x)?;
        Ok(design.multiply(&result.coefficients)?)
    }

    /// Estimated prediction variance `x₀ᵀ Cov x₀` for every training row.
    pub fn compute_prediction_variances(&self) -> Result<Vec<f64>, RegressionError> {
        let result = self.fitted("prediction variances require a fitted model")?;
        let x = self
            .x
            .as_ref()
            .ok_or(RegressionError::NotConfigured("X has not been set"))?;
        Ok(compute_prediction_variances(x, &result.covariance)?)
    }

    fn fitted(&self, reason: &'static str) -> Result<&RegressionResult, RegressionError> {
        self.result
            .as_ref()
            .ok_or(RegressionError::NotConfigured(reason))
    }

    /// Access the full regression results, if fitted.
    pub fn result(&self) -> Option<&RegressionResult> {
        self.result.as_ref()
    }

    /// Error sum of squares.
    pub fn sse(&self) -> Option<f64> {
        self.result.as_ref().map(|r| r.sse)
    }

    /// Regression sum of squares.
    pub fn ssr(&self) -> Option<f64> {
        self.result.as_ref().map(|r| r.ssr)
    }

    /// Total sum of squares.
    pub fn ssto(&self) -> Option<f64> {
        self.result.as_ref().map(|r| r.ssto)
    }

    /// Coefficient of determination.
    pub fn r_squared(&self) -> Option<f64> {
        self.result.as_ref().map(|r| r.r_squared)
    }

    /// F-statistic for overall model significance.
    pub fn f_statistic(&self) -> Option<f64> {
        self.result.as_ref().map(|r| r.f_statistic)
    }

    /// Coefficients as a `p x 1` column vector, intercept first.
    pub fn coefficients(&self) -> Option<&Matrix> {
        self.result.as_ref().map(|r| &r.coefficients)
    }

    /// Coefficient covariance matrix.
    pub fn covariance(&self) -> Option<&Matrix> {
        self.result.as_ref().map(|r| &r.covariance)
    }

    /// Standard errors of the coefficients.
    pub fn std_errors(&self) -> Option<&[f64]> {
        self.result.as_ref().map(|r| r.std_errors.as_slice())
    }

    /// t-statistics of the coefficients.
    pub fn t_statistics(&self) -> Option<&[f64]> {
        self.result.as_ref().map(|r| r.t_statistics.as_slice())
    }

    /// Two-sided p-values of the coefficients.
    pub fn p_values(&self) -> Option<&[f64]> {
        self.result.as_ref().map(|r| r.p_values.as_slice())
    }
}

/// Solve the normal equations and derive every statistic.
fn fit(x: &Matrix, y: &Matrix, confidence_level: f64) -> Result<RegressionResult, RegressionError> {
    let (n, p) = x.shape();

    if y.columns() != 1 || y.rows() != n {
        debug!(x = ?x.shape(), y = ?y.shape(), "response does not match design matrix");
        return Err(MatrixError::DimensionMismatch {
            op: "exec",
            left: x.shape(),
            right: y.shape(),
        }
        .into());
    }

    if n < p {
        return Err(RegressionError::InsufficientObservations { needed: p, got: n });
    }

    // (X'X)⁻¹
    let xt = x.transpose();
    let xtx_inv = xt.multiply(x)?.invert()?;

    // b = (X'X)⁻¹ X'y
    let coefficients = xtx_inv.multiply(&xt.multiply(y)?)?;

    // b'X'y, reused by both sums of squares
    let bt_xt_y = coefficients.transpose().multiply(&xt)?.multiply(y)?;

    let unit = Matrix::filled(n, 1, 1.0)?;

    // SSR = b'X'y - (y'U U'y) / n
    let correction = y
        .transpose()
        .multiply(&unit)?
        .multiply(&unit.transpose())?
        .multiply(y)?
        .scalar_divide(n as f64);
    let ssr = bt_xt_y.subtract(&correction)?[(0, 0)];

    // SSE = y'y - b'X'y
    let sse = y.transpose().multiply(y)?.subtract(&bt_xt_y)?[(0, 0)];

    let ssto = ssr + sse;
    let r_squared = ssr / ssto;

    let df_model = p - 1;
    let df_residual = (n - 1) - df_model;
    let f_statistic = (ssr / df_model as f64) / (sse / df_residual as f64);
    let f_pvalue = CoefficientInference::f_p_value(f_statistic, df_model, df_residual);
    let adj_r_squared = 1.0 - (1.0 - r_squared) * (n - 1) as f64 / df_residual as f64;

    let mse = sse / df_residual as f64;
    let covariance = xtx_inv.scalar_multiply(mse);

    let std_errors = CoefficientInference::standard_errors(&covariance);
    let t_statistics = CoefficientInference::t_statistics(&coefficients, &std_errors);
    let p_values = CoefficientInference::p_values(&t_statistics, df_residual);
    let (conf_interval_lower, conf_interval_upper) = CoefficientInference::confidence_intervals(
        &coefficients,
        &std_errors,
        df_residual,
        confidence_level,
    );

    let fitted_values = x.multiply(&coefficients)?.column(0);
    let residuals = y
        .column(0)
        .iter()
        .zip(&fitted_values)
        .map(|(&yi, &fi)| yi - fi)
        .collect();

    debug!(
        n_observations = n,
        n_parameters = p,
        r_squared,
        f_statistic,
        "OLS fit complete"
    );

    Ok(RegressionResult {
        coefficients,
        covariance,
        fitted_values,
        residuals,
        n_observations: n,
        n_parameters: p,
        sse,
        ssr,
        ssto,
        r_squared,
        adj_r_squared,
        mse,
        f_statistic,
        f_pvalue,
        std_errors,
        t_statistics,
        p_values,
        conf_interval_lower,
        conf_interval_upper,
        confidence_level,
    })
}

/// Builder for [`Regression`].
#[derive(Debug, Clone, Default)]
pub struct RegressionBuilder {
    builder: RegressionOptionsBuilder,
}

impl RegressionBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to prepend an intercept column.
    pub fn with_intercept(mut self, include: bool) -> Self {
        self.builder = self.builder.with_intercept(include);
        self
    }

    /// Set the confidence level for coefficient confidence intervals.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.builder = self.builder.confidence_level(level);
        self
    }

    /// Build the estimator, validating the options.
    pub fn build(self) -> Result<Regression, RegressionError> {
        Ok(Regression::new(self.builder.build()?))
    }
}
