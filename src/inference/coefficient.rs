//! Coefficient inference calculations.

use crate::distributions::student_p_value;
use crate::matrix::Matrix;
use statrs::distribution::{ContinuousCDF, FisherSnedecor, StudentsT};

/// Computes inference statistics for regression coefficients.
pub struct CoefficientInference;

impl CoefficientInference {
    /// Standard errors from the coefficient covariance matrix.
    ///
    /// SE(β_j) = sqrt(Cov_{jj})
    pub fn standard_errors(covariance: &Matrix) -> Vec<f64> {
        covariance.diagonal().into_iter().map(f64::sqrt).collect()
    }

    /// Compute t-statistics for coefficients.
    ///
    /// t_j = β_j / SE(β_j)
    pub fn t_statistics(coefficients: &Matrix, std_errors: &[f64]) -> Vec<f64> {
        std_errors
            .iter()
            .enumerate()
            .map(|(j, &se)| coefficients[(j, 0)] / se)
            .collect()
    }

    /// Two-sided p-values from t-statistics with `df` degrees of freedom.
    pub fn p_values(t_statistics: &[f64], df: usize) -> Vec<f64> {
        t_statistics
            .iter()
            .map(|&t| student_p_value(t, df))
            .collect()
    }

    /// Compute confidence intervals for coefficients.
    ///
    /// CI_j = β_j ± t_{α/2, df} * SE(β_j)
    pub fn confidence_intervals(
        coefficients: &Matrix,
        std_errors: &[f64],
        df: usize,
        confidence_level: f64,
    ) -> (Vec<f64>, Vec<f64>) {
        let t_crit = if df == 0 {
            f64::NAN
        } else {
            StudentsT::new(0.0, 1.0, df as f64).map_or(f64::NAN, |d| {
                d.inverse_cdf(1.0 - (1.0 - confidence_level) / 2.0)
            })
        };

        std_errors
            .iter()
            .enumerate()
            .map(|(j, &se)| {
                let margin = t_crit * se;
                let beta = coefficients[(j, 0)];
                (beta - margin, beta + margin)
            })
            .unzip()
    }

    /// Upper-tail probability of the overall F-statistic.
    pub fn f_p_value(f_statistic: f64, df_model: usize, df_residual: usize) -> f64 {
        if !f_statistic.is_finite() || df_model == 0 || df_residual == 0 {
            return f64::NAN;
        }
        FisherSnedecor::new(df_model as f64, df_residual as f64)
            .map_or(f64::NAN, |d| 1.0 - d.cdf(f_statistic))
    }
}
