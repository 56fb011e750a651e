//! Cholesky factorisation `A = L·Lᵀ` of a symmetric positive-definite matrix
//!
//! The factor is built column by column:
//!
//! ```text
//! L[j][j] = sqrt(A[j][j] − Σ_{k<j} L[j][k]²)
//! L[i][j] = (A[i][j] − Σ_{k<j} L[i][k]·L[j][k]) / L[j][j]     (i > j)
//! ```
//!
//! Symmetry and definiteness are not verified. A non-SPD input makes a
//! pivot argument non-positive, which shows up as `NaN` in `L`;
//! [`cholesky_strict`] reports it as an error instead.

use crate::config::DecompConfig;
use densela_core::error::ensure_square;
use densela_core::{LinalgError, LinalgResult, Matrix, Scalar};
use scirs2_core::ndarray_ext::Array2;

/// Lower-triangular factor and its transpose
#[derive(Debug, Clone, PartialEq)]
pub struct CholeskyResult<T> {
    /// Lower-triangular `L`
    pub l: Matrix<T>,
    /// Upper-triangular `Lᵀ`
    pub lt: Matrix<T>,
}

impl<T: Scalar> CholeskyResult<T> {
    /// `L·Lᵀ`
    pub fn reconstruct(&self) -> LinalgResult<Matrix<T>> {
        self.l.matmul(&self.lt)
    }
}

/// Cholesky factorisation
///
/// # Errors
///
/// - [`LinalgError::InvalidArgument`] for an empty matrix
/// - [`LinalgError::DimensionMismatch`] for a non-square matrix
///
/// # Examples
///
/// ```
/// use densela_core::Matrix;
/// use densela_decomp::cholesky;
///
/// let a = Matrix::from_rows(&[vec![4.0, 12.0], vec![12.0, 37.0]])?;
/// let chol = cholesky(&a)?;
/// assert_eq!(chol.l.to_rows(), vec![vec![2.0, 0.0], vec![6.0, 1.0]]);
/// assert!(chol.reconstruct()?.is_equal_approx(&a, 1e-12));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cholesky<T: Scalar>(a: &Matrix<T>) -> LinalgResult<CholeskyResult<T>> {
    cholesky_with(a, &DecompConfig::default())
}

/// Cholesky factorisation that fails on a non-positive pivot
///
/// # Errors
///
/// [`LinalgError::NumericalDegeneracy`] when some pivot argument
/// `A[j][j] − Σ L[j][k]²` is `<= 0` (or `NaN`), plus the shape errors of
/// [`cholesky`].
pub fn cholesky_strict<T: Scalar>(
    a: &Matrix<T>,
    cfg: &DecompConfig,
) -> LinalgResult<CholeskyResult<T>> {
    cholesky_with(a, &cfg.strict())
}

/// Cholesky factorisation honouring `cfg.strict`
pub fn cholesky_with<T: Scalar>(
    a: &Matrix<T>,
    cfg: &DecompConfig,
) -> LinalgResult<CholeskyResult<T>> {
    ensure_square("cholesky", &[a.rows(), a.cols()])?;
    let n = a.rows();
    tracing::debug!(n, strict = cfg.strict, "cholesky");

    let arr = a.as_array();
    let mut l = Array2::<T>::zeros((n, n));

    for j in 0..n {
        let mut sum = T::zero();
        for k in 0..j {
            sum += l[[j, k]] * l[[j, k]];
        }
        let pivot = arr[[j, j]] - sum;
        if cfg.strict && !(pivot > T::zero()) {
            return Err(LinalgError::degeneracy(
                "cholesky",
                format!("pivot {} at column {} is not positive", pivot, j),
            ));
        }
        let diag = pivot.sqrt();
        l[[j, j]] = diag;

        for i in (j + 1)..n {
            let mut sum = T::zero();
            for k in 0..j {
                sum += l[[i, k]] * l[[j, k]];
            }
            l[[i, j]] = (arr[[i, j]] - sum) / diag;
        }
    }

    let l = Matrix::from_array(l);
    let lt = l.transpose();
    Ok(CholeskyResult { l, lt })
}
