//! Errors raised by regression solvers.

use crate::core::OptionsError;
use crate::matrix::MatrixError;
use thiserror::Error;

/// Errors that can occur while configuring, fitting or using a regression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegressionError {
    #[error("regression is not configured: {0}")]
    NotConfigured(&'static str),

    #[error("insufficient observations: need at least {needed}, got {got}")]
    InsufficientObservations { needed: usize, got: usize },

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] OptionsError),

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
