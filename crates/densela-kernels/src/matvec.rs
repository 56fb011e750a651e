//! Matrix–vector kernels
//!
//! - [`mat_vec_mult`]: `c = A·b`
//! - [`mat_vec_add`]: add a vector to every row of a matrix
//! - [`subtract_matrix_rows`]: subtract every row of a matrix from a vector

use densela_core::{LinalgError, LinalgResult, Matrix, Scalar, Vector};
use scirs2_core::ndarray_ext::Axis;

/// Matrix–vector product `c[i] = Σ_k A[i][k] * b[k]`
///
/// # Errors
///
/// [`LinalgError::DimensionMismatch`] when `A.cols != b.len()`.
///
/// # Examples
///
/// ```
/// use densela_core::{Matrix, Vector};
/// use densela_kernels::mat_vec_mult;
///
/// let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// let b = Vector::from_vec(vec![1.0, -1.0]).unwrap();
/// assert_eq!(mat_vec_mult(&a, &b).unwrap().to_vec(), vec![-1.0, -1.0]);
/// ```
pub fn mat_vec_mult<T: Scalar>(a: &Matrix<T>, b: &Vector<T>) -> LinalgResult<Vector<T>> {
    if a.cols() != b.len() {
        return Err(LinalgError::dimension_mismatch(
            "mat_vec_mult",
            vec![a.cols()],
            vec![b.len()],
        ));
    }
    Ok(Vector::from_array(a.as_array().dot(b.as_array())))
}

/// Broadcast-add `b` to every row of `A`
///
/// # Errors
///
/// [`LinalgError::DimensionMismatch`] when `A.cols != b.len()`.
pub fn mat_vec_add<T: Scalar>(a: &Matrix<T>, b: &Vector<T>) -> LinalgResult<Matrix<T>> {
    if a.cols() != b.len() {
        return Err(LinalgError::dimension_mismatch(
            "mat_vec_add",
            vec![a.cols()],
            vec![b.len()],
        ));
    }
    let mut out = a.as_array().to_owned();
    for mut row in out.axis_iter_mut(Axis(0)) {
        row += b.as_array();
    }
    Ok(Matrix::from_array(out))
}

/// Compute `a - Σ_i row_i(B)`
///
/// ```
/// use densela_core::{Matrix, Vector};
/// use densela_kernels::subtract_matrix_rows;
///
/// let a = Vector::from_vec(vec![10.0, 10.0]).unwrap();
/// let b = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// assert_eq!(subtract_matrix_rows(&a, &b).unwrap().to_vec(), vec![6.0, 4.0]);
/// ```
pub fn subtract_matrix_rows<T: Scalar>(a: &Vector<T>, b: &Matrix<T>) -> LinalgResult<Vector<T>> {
    if a.len() != b.cols() {
        return Err(LinalgError::dimension_mismatch(
            "subtract_matrix_rows",
            vec![a.len()],
            vec![b.cols()],
        ));
    }
    let row_sum = b.as_array().sum_axis(Axis(0));
    Ok(Vector::from_array(a.as_array() - &row_sum))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mat_vec_mult_rectangular() {
        let a = Matrix::from_rows(&[vec![1.0, 0.0, 2.0], vec![0.0, 3.0, 1.0]]).unwrap();
        let b = Vector::from_vec(vec![1.0, 2.0, 3.0]).unwrap();
        let c = mat_vec_mult(&a, &b).unwrap();
        assert_eq!(c.to_vec(), vec![7.0, 9.0]);
    }

    #[test]
    fn test_mat_vec_mult_mismatch() {
        let a = Matrix::<f64>::ones(2, 3);
        let b = Vector::<f64>::ones(2);
        assert!(matches!(
            mat_vec_mult(&a, &b),
            Err(LinalgError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_mat_vec_mult_agrees_with_matmul() {
        let a = Matrix::from_rows(&[vec![2.0, -1.0], vec![0.5, 4.0], vec![1.0, 1.0]]).unwrap();
        let b = Vector::from_vec(vec![3.0, 2.0]).unwrap();
        let as_column = Matrix::from_vec(2, 1, b.to_vec()).unwrap();
        assert_eq!(
            mat_vec_mult(&a, &b).unwrap(),
            a.matmul(&as_column).unwrap().flatten()
        );
    }

    #[test]
    fn test_mat_vec_add_broadcasts_rows() {
        let a = Matrix::<f64>::zeros(3, 2);
        let b = Vector::from_vec(vec![1.0, 2.0]).unwrap();
        let c = mat_vec_add(&a, &b).unwrap();
        assert!(c.to_row_vectors().iter().all(|row| *row == b));
        assert!(mat_vec_add(&a, &Vector::ones(3)).is_err());
    }

    #[test]
    fn test_subtract_matrix_rows_mismatch() {
        let a = Vector::<f64>::ones(3);
        let b = Matrix::<f64>::ones(2, 2);
        assert!(subtract_matrix_rows(&a, &b).is_err());
    }
}
