//! QR decomposition by classical Gram–Schmidt
//!
//! The columns `a_0 … a_{n-1}` of `A` are orthonormalised in order:
//!
//! ```text
//! b_0 = a_0 / ‖a_0‖
//! b_i = normalise(a_i − Σ_{j<i} proj(a_i onto b_j))
//! ```
//!
//! Every projection uses the original column `a_i` (classical, not modified
//! Gram–Schmidt). `Q` holds the `b_i` as columns and `R = Qᵀ·A`.
//!
//! A zero or linearly dependent column has zero residual norm and produces
//! `NaN` in `Q`; [`qr_strict`] reports it as an error instead.

use crate::config::DecompConfig;
use densela_core::{LinalgError, LinalgResult, Matrix, Scalar, Vector};

/// Orthonormal factor and upper-triangular factor
#[derive(Debug, Clone, PartialEq)]
pub struct QrResult<T> {
    /// `Q` with orthonormal columns, same shape as the input
    pub q: Matrix<T>,
    /// `R = Qᵀ·A`, `cols × cols`
    pub r: Matrix<T>,
}

impl<T: Scalar> QrResult<T> {
    /// `Q·R`
    pub fn reconstruct(&self) -> LinalgResult<Matrix<T>> {
        self.q.matmul(&self.r)
    }
}

/// Projection of `a` onto `b`: `(a·b / b·b)·b`
///
/// # Errors
///
/// [`LinalgError::DimensionMismatch`] when the lengths differ.
///
/// ```
/// use densela_core::Vector;
/// use densela_decomp::vector_projection;
///
/// let a = Vector::from_vec(vec![2.0, 3.0]).unwrap();
/// let b = Vector::from_vec(vec![1.0, 0.0]).unwrap();
/// assert_eq!(vector_projection(&a, &b).unwrap().to_vec(), vec![2.0, 0.0]);
/// ```
pub fn vector_projection<T: Scalar>(a: &Vector<T>, b: &Vector<T>) -> LinalgResult<Vector<T>> {
    let scale = a.dot(b)? / b.norm_sq();
    Ok(b.scalar_multiply(scale))
}

/// Orthonormalise the columns of `A`
///
/// Returns `Q` with the same shape as `A`.
pub fn gram_schmidt<T: Scalar>(a: &Matrix<T>) -> LinalgResult<Matrix<T>> {
    orthonormalise(a, &DecompConfig::default())
}

/// QR decomposition
///
/// # Errors
///
/// [`LinalgError::InvalidArgument`] for an empty matrix.
///
/// # Examples
///
/// ```
/// use densela_core::Matrix;
/// use densela_decomp::qr;
///
/// let a = Matrix::from_rows(&[
///     vec![12.0, -51.0, 4.0],
///     vec![6.0, 167.0, -68.0],
///     vec![-4.0, 24.0, -41.0],
/// ])?;
/// let qr = qr(&a)?;
///
/// let qtq = qr.q.transpose().matmul(&qr.q)?;
/// assert!(qtq.is_equal_approx(&Matrix::identity(3), 1e-10));
/// assert!(qr.reconstruct()?.is_equal_approx(&a, 1e-9));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn qr<T: Scalar>(a: &Matrix<T>) -> LinalgResult<QrResult<T>> {
    qr_with(a, &DecompConfig::default())
}

/// QR decomposition that fails on a zero or dependent column
///
/// # Errors
///
/// [`LinalgError::NumericalDegeneracy`] when a residual column norm is at
/// or below `cfg.singular_tolerance`.
pub fn qr_strict<T: Scalar>(a: &Matrix<T>, cfg: &DecompConfig) -> LinalgResult<QrResult<T>> {
    qr_with(a, &cfg.strict())
}

/// QR decomposition honouring `cfg.strict`
pub fn qr_with<T: Scalar>(a: &Matrix<T>, cfg: &DecompConfig) -> LinalgResult<QrResult<T>> {
    tracing::debug!(rows = a.rows(), cols = a.cols(), strict = cfg.strict, "qr");
    let q = orthonormalise(a, cfg)?;
    let r = q.transpose().matmul(a)?;
    Ok(QrResult { q, r })
}

fn orthonormalise<T: Scalar>(a: &Matrix<T>, cfg: &DecompConfig) -> LinalgResult<Matrix<T>> {
    if a.is_empty() {
        return Err(LinalgError::invalid_argument(
            "gram_schmidt",
            "matrix must not be empty",
        ));
    }

    let columns = a.transpose().to_row_vectors();
    let mut basis: Vec<Vector<T>> = Vec::with_capacity(columns.len());

    for (i, col) in columns.iter().enumerate() {
        let mut residual = col.clone();
        for b in &basis {
            residual.sub_assign(&vector_projection(col, b)?)?;
        }

        let norm = residual.norm_2();
        if cfg.strict && !(norm > cfg.singular_tol::<T>()) {
            return Err(LinalgError::degeneracy(
                "gram_schmidt",
                format!("column {} is zero or linearly dependent", i),
            ));
        }
        residual.scalar_multiply_inplace(T::one() / norm);
        basis.push(residual);
    }

    Ok(Matrix::from_row_vectors(&basis)?.transpose())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: &[Vec<f64>]) -> Matrix<f64> {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_projection_onto_self() {
        let a = Vector::from_vec(vec![1.0, 2.0, 2.0]).unwrap();
        assert!(vector_projection(&a, &a).unwrap().is_equal_approx(&a, 1e-12));
    }

    #[test]
    fn test_qr_properties_square() {
        let a = m(&[
            vec![12.0, -51.0, 4.0],
            vec![6.0, 167.0, -68.0],
            vec![-4.0, 24.0, -41.0],
        ]);
        let qr = qr(&a).unwrap();

        let qtq = qr.q.transpose().matmul(&qr.q).unwrap();
        assert!(qtq.is_equal_approx(&Matrix::identity(3), 1e-10));
        assert!(qr.reconstruct().unwrap().is_equal_approx(&a, 1e-9));

        // R is upper triangular
        for i in 0..3 {
            for j in 0..i {
                assert!(qr.r.get(i, j).abs() < 1e-9);
            }
        }
        // Known diagonal of R for this textbook matrix
        assert!((qr.r.get(0, 0) - 14.0).abs() < 1e-9);
        assert!((qr.r.get(1, 1) - 175.0).abs() < 1e-9);
        assert!((qr.r.get(2, 2) - 35.0).abs() < 1e-9);
    }

    #[test]
    fn test_qr_tall_matrix() {
        let a = m(&[vec![1.0, 1.0], vec![1.0, 0.0], vec![0.0, 1.0]]);
        let qr = qr(&a).unwrap();
        assert_eq!(qr.q.shape(), (3, 2));
        assert_eq!(qr.r.shape(), (2, 2));
        assert!(qr
            .q
            .transpose()
            .matmul(&qr.q)
            .unwrap()
            .is_equal_approx(&Matrix::identity(2), 1e-12));
        assert!(qr.reconstruct().unwrap().is_equal_approx(&a, 1e-12));
    }

    #[test]
    fn test_zero_column_is_nan_by_default() {
        let a = m(&[vec![1.0, 0.0], vec![2.0, 0.0]]);
        let q = gram_schmidt(&a).unwrap();
        assert!(q.column(1).iter().all(|x| x.is_nan()));
    }

    #[test]
    fn test_dependent_column_strict() {
        let a = m(&[vec![1.0, 2.0], vec![2.0, 4.0]]);
        let err = qr_strict(&a, &DecompConfig::default()).unwrap_err();
        assert!(matches!(err, LinalgError::NumericalDegeneracy { .. }));
    }

    #[test]
    fn test_empty_matrix() {
        assert!(matches!(
            qr(&Matrix::<f64>::zeros(0, 0)),
            Err(LinalgError::InvalidArgument { .. })
        ));
    }
}
