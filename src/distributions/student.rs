//! Two-sided Student-t tail probabilities for integer degrees of freedom.
//!
//! Uses the trigonometric closed form of the t CDF (Abramowitz & Stegun
//! 26.7.3 / 26.7.4): with `θ = atan(|t| / √ν)`, the two-tailed CDF `A(t|ν)`
//! is a finite series in `cos²θ` whose length grows with `ν`.

use std::f64::consts::FRAC_PI_2;

/// Two-sided p-value `P(|T| ≥ |t|)` for `T ~ t(df)`.
///
/// Returns NaN when `df == 0` or `t` is NaN.
///
/// # Example
///
/// ```rust
/// use matrix_regression::distributions::student_p_value;
///
/// // t(1) is the Cauchy distribution: P(|T| >= 1) = 0.5
/// assert!((student_p_value(1.0, 1) - 0.5).abs() < 1e-12);
/// ```
pub fn student_p_value(t: f64, df: usize) -> f64 {
    if df == 0 || t.is_nan() {
        return f64::NAN;
    }

    let t = t.abs();
    let mw = t / (df as f64).sqrt();
    let th = mw.atan2(1.0);

    if df == 1 {
        return 1.0 - th / FRAC_PI_2;
    }

    let sth = th.sin();
    let cth = th.cos();
    let last = df as i64 - 3;

    if df % 2 == 1 {
        1.0 - (th + sth * cth * stat_com(cth * cth, 2, last, -1.0)) / FRAC_PI_2
    } else {
        1.0 - sth * stat_com(cth * cth, 1, last, -1.0)
    }
}

/// Partial sum `1 + Σ term_k` with `term_k = term_{k-2} · q · k / (k - b)`
/// for `k = first, first + 2, … ≤ last`.
fn stat_com(q: f64, first: i64, last: i64, b: f64) -> f64 {
    let mut term = 1.0;
    let mut z = term;
    let mut k = first;
    while k <= last {
        term = term * q * k as f64 / (k as f64 - b);
        z += term;
        k += 2;
    }
    z
}
