//! Regression solvers.

mod error;
mod ols;

pub use error::RegressionError;
pub use ols::{Regression, RegressionBuilder};
