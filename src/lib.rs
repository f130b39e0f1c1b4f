//! A dense matrix engine and an OLS multiple linear regression estimator.
//!
//! The [`Matrix`] type is an immutable, row-major `f64` matrix whose
//! determinant and inverse are computed by cofactor expansion. [`Regression`]
//! composes it into a normal-equations OLS fit with sums of squares, R², the
//! F-statistic, standard errors, t-statistics and p-values.
//!
//! # Example
//!
//! ```rust
//! use matrix_regression::prelude::*;
//!
//! let x = Matrix::new(vec![
//!     vec![8.0, 2.0],
//!     vec![40.5, 24.5],
//!     vec![4.5, 0.5],
//!     vec![0.5, 2.0],
//!     vec![4.5, 4.5],
//! ])?;
//! let y = Matrix::new(vec![vec![4.5], vec![22.5], vec![2.0], vec![0.5], vec![18.0]])?;
//!
//! let mut reg = Regression::builder().with_intercept(true).build()?;
//! reg.set_x(x)?.set_y(y);
//! let stats = reg.exec()?;
//! println!("R² = {}", stats.r_squared);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Determinants and inverses cost O(n!) in the matrix order, so the engine is
//! suited to models with a handful of predictors.

pub mod core;
pub mod distributions;
pub mod inference;
pub mod matrix;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        OptionsError, RegressionOptions, RegressionOptionsBuilder, RegressionResult,
    };
    pub use crate::distributions::student_p_value;
    pub use crate::matrix::{Matrix, MatrixError};
    pub use crate::solvers::{Regression, RegressionBuilder, RegressionError};
}

pub use crate::core::{OptionsError, RegressionOptions, RegressionOptionsBuilder, RegressionResult};
pub use crate::matrix::{Matrix, MatrixError};
pub use crate::solvers::{Regression, RegressionBuilder, RegressionError};
