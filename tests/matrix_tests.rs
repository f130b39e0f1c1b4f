//! Matrix engine tests.

use approx::assert_relative_eq;
use matrix_regression::{Matrix, MatrixError};
use proptest::prelude::*;

fn m(rows: Vec<Vec<f64>>) -> Matrix {
    Matrix::new(rows).expect("valid test matrix")
}

// ============================================================================
// Reference Values
// ============================================================================

#[test]
fn test_determinant_reference() {
    assert_eq!(m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).determinant(), Ok(-2.0));
}

#[test]
fn test_inverse_reference_is_exact() {
    let inv = m(vec![vec![4.0, 3.0], vec![3.0, 2.0]]).invert().unwrap();
    assert_eq!(inv.to_vec(), vec![vec![-2.0, 3.0], vec![3.0, -4.0]]);
}

#[test]
fn test_product_reference() {
    let a = m(vec![vec![2.0, 0.0, -1.0, 1.0], vec![1.0, 2.0, 0.0, 1.0]]);
    let b = m(vec![
        vec![1.0, 5.0, -7.0],
        vec![1.0, 1.0, 0.0],
        vec![0.0, -1.0, 1.0],
        vec![2.0, 0.0, 0.0],
    ]);
    assert_eq!(
        a.multiply(&b).unwrap().to_vec(),
        vec![vec![4.0, 11.0, -15.0], vec![5.0, 7.0, -7.0]]
    );
}

// ============================================================================
// Error Kinds
// ============================================================================

#[test]
fn test_jagged_input_is_shape_error() {
    assert!(matches!(
        Matrix::new(vec![vec![2.0, 3.0], vec![1.0]]),
        Err(MatrixError::Shape(_))
    ));
}

#[test]
fn test_incompatible_product_is_dimension_mismatch() {
    let a = m(vec![vec![2.0, 0.0, -1.0, 1.0], vec![1.0, 2.0, 0.0, 1.0]]);
    let b = m(vec![vec![1.0, 5.0, -7.0], vec![1.0, 1.0, 0.0], vec![0.0, -1.0, 1.0]]);
    assert!(matches!(
        a.multiply(&b),
        Err(MatrixError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_square_only_operations() {
    let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
    assert!(matches!(a.determinant(), Err(MatrixError::NotSquare { .. })));
    assert!(matches!(a.invert(), Err(MatrixError::NotSquare { .. })));
    assert!(matches!(a.trace(), Err(MatrixError::NotSquare { .. })));
}

#[test]
fn test_error_messages() {
    let a = m(vec![vec![1.0, 2.0, 3.0]]);
    assert_eq!(
        a.trace().unwrap_err().to_string(),
        "trace requires a square matrix, got 1x3"
    );
    assert_eq!(
        MatrixError::Singular.to_string(),
        "matrix is singular (determinant is zero)"
    );
}

// ============================================================================
// Algebraic Identities
// ============================================================================

#[test]
fn test_inverse_of_inverse() {
    let a = m(vec![
        vec![3.0, 0.0, 2.0],
        vec![2.0, 0.0, -2.0],
        vec![0.0, 1.0, 1.0],
    ]);
    let back = a.invert().unwrap().invert().unwrap();
    for i in 0..3 {
        for j in 0..3 {
            assert_relative_eq!(back[(i, j)], a[(i, j)], epsilon = 1e-12);
        }
    }
}

#[test]
fn test_determinant_of_transpose_and_product() {
    let a = m(vec![
        vec![2.0, -3.0, 1.0],
        vec![2.0, 0.0, -1.0],
        vec![1.0, 4.0, 5.0],
    ]);
    let b = m(vec![
        vec![1.0, 2.0, 0.0],
        vec![0.0, 1.0, 3.0],
        vec![4.0, 0.0, 1.0],
    ]);
    let det_a = a.determinant().unwrap();
    assert_relative_eq!(a.transpose().determinant().unwrap(), det_a, epsilon = 1e-12);
    assert_relative_eq!(
        a.multiply(&b).unwrap().determinant().unwrap(),
        det_a * b.determinant().unwrap(),
        epsilon = 1e-9
    );
}

#[test]
fn test_trace_of_sum() {
    let a = m(vec![vec![1.0, 9.0], vec![9.0, 2.0]]);
    let b = m(vec![vec![3.0, -1.0], vec![0.0, 4.0]]);
    assert_eq!(a.add(&b).unwrap().trace(), Ok(10.0));
}

fn square_integer_matrix() -> impl Strategy<Value = Matrix> {
    (1usize..=4).prop_flat_map(|n| {
        proptest::collection::vec(-9i32..=9, n * n).prop_map(move |values| {
            let values: Vec<f64> = values.into_iter().map(f64::from).collect();
            Matrix::from_row_slice(n, n, &values).expect("valid square matrix")
        })
    })
}

fn matrix_pair() -> impl Strategy<Value = (Matrix, Matrix)> {
    (1usize..=5, 1usize..=5).prop_flat_map(|(rows, columns)| {
        let cells = || proptest::collection::vec(-1e3_f64..1e3, rows * columns);
        (cells(), cells()).prop_map(move |(a, b)| {
            (
                Matrix::from_row_slice(rows, columns, &a).expect("valid matrix"),
                Matrix::from_row_slice(rows, columns, &b).expect("valid matrix"),
            )
        })
    })
}

proptest! {
    #[test]
    fn transpose_is_involution(a in square_integer_matrix()) {
        prop_assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn add_then_subtract_round_trips((a, b) in matrix_pair()) {
        let back = a.add(&b).unwrap().subtract(&b).unwrap();
        for (x, y) in back.as_slice().iter().zip(a.as_slice()) {
            prop_assert!((x - y).abs() <= 1e-9, "{} vs {}", x, y);
        }
    }

    #[test]
    fn nonsingular_inverse_yields_identity(a in square_integer_matrix()) {
        let det = a.determinant().unwrap();
        prop_assume!(det.abs() >= 1.0);
        let product = a.multiply(&a.invert().unwrap()).unwrap();
        let n = a.rows();
        for i in 0..n {
            for j in 0..n {
                let expected = if i == j { 1.0 } else { 0.0 };
                prop_assert!((product[(i, j)] - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn integer_determinant_is_integral(a in square_integer_matrix()) {
        let det = a.determinant().unwrap();
        prop_assert_eq!(det, det.round());
    }

    #[test]
    fn inserted_column_is_readable(a in square_integer_matrix(), at in 0usize..=4) {
        let at = at.min(a.columns());
        let column: Vec<f64> = (0..a.rows()).map(|i| i as f64 + 0.5).collect();
        let wider = a.add_column(&column, at).unwrap();
        prop_assert_eq!(wider.shape(), (a.rows(), a.columns() + 1));
        prop_assert_eq!(wider.column(at), column);
    }
}
