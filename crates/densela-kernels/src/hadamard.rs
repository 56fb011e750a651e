//! Hadamard (element-wise) product kernels
//!
//! For containers A and B of the same shape, C = A ⊙ B where
//! c_ij = a_ij * b_ij. Shape mismatches are reported as
//! [`LinalgError::DimensionMismatch`] rather than panicking.
//!
//! The in-place variants write into the left operand and avoid an
//! allocation; prefer them inside loops.

use densela_core::error::ensure_same_shape;
use densela_core::{LinalgResult, Matrix, Scalar, Tensor3, Vector};
use scirs2_core::ndarray_ext::Zip;

/// Compute the Hadamard product of two matrices
///
/// # Errors
///
/// [`LinalgError::DimensionMismatch`](densela_core::LinalgError::DimensionMismatch)
/// when the shapes differ.
///
/// # Complexity
///
/// Time: O(m * n)
/// Space: O(m * n)
///
/// # Examples
///
/// ```
/// use densela_core::Matrix;
/// use densela_kernels::hadamard;
///
/// let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]])?;
/// let b = Matrix::from_rows(&[vec![5.0, 6.0], vec![7.0, 8.0]])?;
/// let c = hadamard(&a, &b)?;
/// assert_eq!(c.get(0, 1), 12.0);  // 2*6
/// assert_eq!(c.get(1, 1), 32.0);  // 4*8
/// # Ok::<(), densela_core::LinalgError>(())
/// ```
pub fn hadamard<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> LinalgResult<Matrix<T>> {
    a.hadamard(b)
}

/// Hadamard product of two vectors
pub fn hadamard_vec<T: Scalar>(a: &Vector<T>, b: &Vector<T>) -> LinalgResult<Vector<T>> {
    a.hadamard(b)
}

/// Hadamard product of two 3-D tensors
pub fn hadamard_tensor<T: Scalar>(a: &Tensor3<T>, b: &Tensor3<T>) -> LinalgResult<Tensor3<T>> {
    a.hadamard(b)
}

/// In-place Hadamard product for matrices: `a = a ⊙ b`
///
/// # Examples
///
/// ```
/// use densela_core::Matrix;
/// use densela_kernels::hadamard_inplace;
///
/// let mut a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// let b = Matrix::from_rows(&[vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
/// hadamard_inplace(&mut a, &b).unwrap();
/// assert_eq!(a.get(0, 0), 5.0);
/// assert_eq!(a.get(0, 1), 12.0);
/// ```
pub fn hadamard_inplace<T: Scalar>(a: &mut Matrix<T>, b: &Matrix<T>) -> LinalgResult<()> {
    ensure_same_shape(
        "hadamard_inplace",
        a.as_array().shape(),
        b.as_array().shape(),
    )?;
    Zip::from(a.as_array_mut())
        .and(b.as_array())
        .for_each(|x, &y| *x *= y);
    Ok(())
}

/// In-place Hadamard product for vectors: `a = a ⊙ b`
pub fn hadamard_vec_inplace<T: Scalar>(a: &mut Vector<T>, b: &Vector<T>) -> LinalgResult<()> {
    ensure_same_shape("hadamard_inplace", &[a.len()], &[b.len()])?;
    Zip::from(a.as_array_mut())
        .and(b.as_array())
        .for_each(|x, &y| *x *= y);
    Ok(())
}
