//! Outer product of two vectors

use densela_core::{Matrix, Scalar, Vector};
use scirs2_core::ndarray_ext::Array2;

/// Compute the outer product `u vᵀ`
///
/// For u of length m and v of length n the result is the m×n matrix with
/// `C[i][j] = u[i] * v[j]`. Every outer product has rank at most one.
///
/// # Examples
///
/// ```
/// use densela_core::Vector;
/// use densela_kernels::outer_product;
///
/// let u = Vector::from_vec(vec![1.0, 2.0]).unwrap();
/// let v = Vector::from_vec(vec![3.0, 4.0, 5.0]).unwrap();
/// let c = outer_product(&u, &v);
/// assert_eq!(c.shape(), (2, 3));
/// assert_eq!(c.get(1, 2), 10.0);
/// ```
pub fn outer_product<T: Scalar>(u: &Vector<T>, v: &Vector<T>) -> Matrix<T> {
    let (m, n) = (u.len(), v.len());
    let u_arr = u.as_array();
    let v_arr = v.as_array();
    Matrix::from_array(Array2::from_shape_fn((m, n), |(i, j)| u_arr[i] * v_arr[j]))
}
