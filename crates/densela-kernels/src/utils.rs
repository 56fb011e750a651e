//! Comparison helpers and small matrix utilities used across the stack

use densela_core::{Matrix, Scalar};

/// Check whether two slices are approximately equal within a tolerance
///
/// Slices of different lengths are never equal.
///
/// # Examples
///
/// ```
/// use densela_kernels::approx_equal;
///
/// assert!(approx_equal(&[1.0, 2.0], &[1.0 + 1e-11, 2.0], 1e-10));
/// assert!(!approx_equal(&[1.0, 2.0], &[1.0], 1e-10));
/// ```
pub fn approx_equal<T: Scalar>(a: &[T], b: &[T], tol: T) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(&x, &y)| (x - y).abs() <= tol)
}

/// Check whether two matrices are approximately equal within a tolerance
pub fn approx_equal_matrix<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>, tol: T) -> bool {
    a.is_equal_approx(b, tol)
}

/// Gram matrix `AᵀA`
///
/// Always square (`cols × cols`) and symmetric.
///
/// ```
/// use densela_core::Matrix;
/// use densela_kernels::gram_matrix;
///
/// let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
/// let g = gram_matrix(&a);
/// assert_eq!(g.to_rows(), vec![vec![35.0, 44.0], vec![44.0, 56.0]]);
/// ```
pub fn gram_matrix<T: Scalar>(a: &Matrix<T>) -> Matrix<T> {
    let arr = a.as_array();
    Matrix::from_array(arr.t().dot(arr))
}

/// Relative error `‖A - B‖_F / ‖A‖_F`
///
/// Returns `inf` for mismatched shapes and the absolute error when `A` is
/// zero.
pub fn relative_error<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> T {
    let diff = match a.subtraction(b) {
        Ok(diff) => diff,
        Err(_) => return T::infinity(),
    };
    let diff_norm = diff.frobenius_norm();
    let a_norm = a.frobenius_norm();
    if a_norm > T::zero() {
        diff_norm / a_norm
    } else {
        diff_norm
    }
}
