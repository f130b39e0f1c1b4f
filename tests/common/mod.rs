//! Common test utilities and data fixtures.
#![allow(dead_code)]

use matrix_regression::Matrix;

/// Two-predictor dataset with hand-checked reference statistics.
pub fn reference_data() -> (Matrix, Matrix) {
    let x = Matrix::new(vec![
        vec![8.0, 2.0],
        vec![40.5, 24.5],
        vec![4.5, 0.5],
        vec![0.5, 2.0],
        vec![4.5, 4.5],
        vec![7.0, 8.0],
        vec![24.5, 40.5],
        vec![4.5, 2.0],
        vec![32.0, 24.5],
        vec![0.5, 4.5],
    ])
    .expect("valid predictors");

    let y = Matrix::new(vec![
        vec![4.5],
        vec![22.5],
        vec![2.0],
        vec![0.5],
        vec![18.0],
        vec![2.0],
        vec![32.0],
        vec![4.5],
        vec![40.5],
        vec![2.0],
    ])
    .expect("valid response");

    (x, y)
}

/// Generate linear data `y = intercept + Σ (j+1)·x_j + noise` with a
/// deterministic generator.
pub fn generate_linear_data(
    n_samples: usize,
    n_features: usize,
    intercept: f64,
    noise_std: f64,
    seed: u64,
) -> (Matrix, Matrix) {
    let mut rng_state = seed;
    let next_rand = |state: &mut u64| -> f64 {
        *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((*state >> 32) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    };

    let mut x = Vec::with_capacity(n_samples);
    let mut y = Vec::with_capacity(n_samples);
    for _ in 0..n_samples {
        let row: Vec<f64> = (0..n_features).map(|_| next_rand(&mut rng_state)).collect();
        let yi = intercept
            + row
                .iter()
                .enumerate()
                .map(|(j, v)| (j + 1) as f64 * v)
                .sum::<f64>()
            + noise_std * next_rand(&mut rng_state);
        x.push(row);
        y.push(vec![yi]);
    }

    (
        Matrix::new(x).expect("valid predictors"),
        Matrix::new(y).expect("valid response"),
    )
}
