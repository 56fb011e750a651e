//! Singular value decomposition built on the Jacobi eigensolver
//!
//! For an `m × n` matrix `A`:
//!
//! - `U` is the eigenvector matrix of `A·Aᵀ` (`m × m`)
//! - `σ_i = sqrt(max(λ_i, 0))` for the eigenvalues `λ_i` of `A·Aᵀ`
//! - `Σ` is `m × n`, zero except for `σ_0 … σ_{min(m,n)-1}` on its diagonal
//! - `V` (`n × n`) starts from the eigenvectors of `Aᵀ·A`; every column
//!   with a non-negligible singular value is replaced by `Aᵀu_i / σ_i`.
//!   "Non-negligible" means `σ_i > sqrt(tol)`, with `tol` the Jacobi zero
//!   threshold of `A·Aᵀ` ([`DecompConfig::zero_tol_for`])
//!
//! Re-deriving `v_i` from `u_i` ties the sign of each right singular
//! vector to its left partner, so `U·Σ·Vᵀ` reproduces `A`. The null-space
//! columns of `V` keep the eigenvectors of `Aᵀ·A`.

use crate::config::DecompConfig;
use crate::eigen::eigen_with;
use densela_core::{LinalgError, LinalgResult, Matrix, Scalar, Vector};
use densela_kernels::gram_matrix;
use scirs2_core::ndarray_ext::Array2;

/// `A = U·S·Vt`
#[derive(Debug, Clone, PartialEq)]
pub struct SvdResult<T> {
    /// Left singular vectors as columns, `m × m`
    pub u: Matrix<T>,
    /// Rectangular diagonal matrix of singular values, `m × n`
    pub s: Matrix<T>,
    /// Right singular vectors as rows (`Vᵀ`), `n × n`
    pub vt: Matrix<T>,
}

impl<T: Scalar> SvdResult<T> {
    /// Right singular vectors as columns
    pub fn v(&self) -> Matrix<T> {
        self.vt.transpose()
    }

    /// Singular values in descending order
    pub fn singular_values(&self) -> Vector<T> {
        let k = self.s.rows().min(self.s.cols());
        Vector::from_array((0..k).map(|i| self.s.get(i, i)).collect())
    }

    /// `U·S·Vt`
    pub fn reconstruct(&self) -> LinalgResult<Matrix<T>> {
        self.u.matmul(&self.s)?.matmul(&self.vt)
    }
}

/// Singular value decomposition with the default [`DecompConfig`]
///
/// # Errors
///
/// - [`LinalgError::InvalidArgument`] for an empty matrix
/// - [`LinalgError::ConvergenceFailure`] from either eigendecomposition
///
/// # Examples
///
/// ```
/// use densela_core::Matrix;
/// use densela_decomp::svd;
///
/// let a = Matrix::<f64>::from_rows(&[vec![3.0, 2.0, 2.0], vec![2.0, 3.0, -2.0]])?;
/// let svd = svd(&a)?;
///
/// let sigma = svd.singular_values();
/// assert!((sigma.get(0) - 5.0).abs() < 1e-8);
/// assert!((sigma.get(1) - 3.0).abs() < 1e-8);
/// assert!(svd.reconstruct()?.is_equal_approx(&a, 1e-8));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn svd<T: Scalar>(a: &Matrix<T>) -> LinalgResult<SvdResult<T>> {
    svd_with(a, &DecompConfig::default())
}

/// Singular value decomposition with an explicit configuration
pub fn svd_with<T: Scalar>(a: &Matrix<T>, cfg: &DecompConfig) -> LinalgResult<SvdResult<T>> {
    if a.is_empty() {
        return Err(LinalgError::invalid_argument(
            "svd",
            "matrix must not be empty",
        ));
    }
    let (m, n) = a.shape();
    tracing::debug!(rows = m, cols = n, "svd");

    let at = a.transpose();
    let aat = a.matmul(&at)?;
    let left = eigen_with(&aat, cfg)?;
    let right = eigen_with(&gram_matrix(a), cfg)?;

    let k = m.min(n);
    let lambdas = left.values();
    let sigmas: Vec<T> = (0..k)
        .map(|i| lambdas.get(i).max(T::zero()).sqrt())
        .collect();

    let mut s = Array2::<T>::zeros((m, n));
    for (i, &sigma) in sigmas.iter().enumerate() {
        s[[i, i]] = sigma;
    }

    // σ below the square root of the Jacobi zero threshold is round-off
    let cutoff = cfg.zero_tol_for(aat.frobenius_norm()).sqrt();

    let mut v = right.eigen_vectors.into_array();
    let at_arr = at.as_array();
    for (i, &sigma) in sigmas.iter().enumerate() {
        if sigma > cutoff {
            let u_i = left.eigen_vectors.as_array().column(i).to_owned();
            let v_i = at_arr.dot(&u_i).mapv(|x| x / sigma);
            v.column_mut(i).assign(&v_i);
        }
    }

    Ok(SvdResult {
        u: left.eigen_vectors,
        s: Matrix::from_array(s),
        vt: Matrix::from_array(v).transpose(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eigen::eigen;

    fn m(rows: &[Vec<f64>]) -> Matrix<f64> {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_wide_matrix() {
        let a = m(&[vec![3.0, 2.0, 2.0], vec![2.0, 3.0, -2.0]]);
        let svd = svd(&a).unwrap();

        assert_eq!(svd.u.shape(), (2, 2));
        assert_eq!(svd.s.shape(), (2, 3));
        assert_eq!(svd.vt.shape(), (3, 3));

        let sigma = svd.singular_values();
        assert!((sigma.get(0) - 5.0).abs() < 1e-8);
        assert!((sigma.get(1) - 3.0).abs() < 1e-8);
        assert!(svd.reconstruct().unwrap().is_equal_approx(&a, 1e-8));
    }

    #[test]
    fn test_tall_matrix() {
        let a = m(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
        let svd = svd(&a).unwrap();

        assert_eq!(svd.s.shape(), (3, 2));
        assert!(svd.reconstruct().unwrap().is_equal_approx(&a, 1e-7));

        let v = svd.v();
        let vtv = v.transpose().matmul(&v).unwrap();
        assert!(vtv.is_equal_approx(&Matrix::identity(2), 1e-6));
    }

    #[test]
    fn test_factors_are_orthogonal() {
        let a = m(&[vec![3.0, 2.0, 2.0], vec![2.0, 3.0, -2.0]]);
        let svd = svd(&a).unwrap();

        let utu = svd.u.transpose().matmul(&svd.u).unwrap();
        assert!(utu.is_equal_approx(&Matrix::identity(2), 1e-8));

        let vvt = svd.vt.matmul(&svd.v()).unwrap();
        assert!(vvt.is_equal_approx(&Matrix::identity(3), 1e-7));
    }

    #[test]
    fn test_diagonal_input() {
        let a = m(&[vec![2.0, 0.0], vec![0.0, -3.0]]);
        let svd = svd(&a).unwrap();
        assert_eq!(svd.singular_values().to_vec(), vec![3.0, 2.0]);
        assert!(svd.reconstruct().unwrap().is_equal_approx(&a, 1e-12));
    }

    #[test]
    fn test_large_magnitude_data_matrix() {
        let a = m(&[
            vec![1200.0, 340.0, 55.0],
            vec![980.0, 410.0, 61.0],
            vec![1530.0, 290.0, 47.0],
            vec![1100.0, 380.0, 58.0],
        ]);
        let svd = svd(&a).unwrap();

        let residual = svd
            .reconstruct()
            .unwrap()
            .subtraction(&a)
            .unwrap()
            .frobenius_norm();
        assert!(residual / a.frobenius_norm() < 1e-9);

        let utu = svd.u.transpose().matmul(&svd.u).unwrap();
        assert!(utu.is_equal_approx(&Matrix::identity(4), 1e-8));

        // σ² are the eigenvalues of AᵀA
        let gram = eigen(&a.transpose().matmul(&a).unwrap()).unwrap();
        let sigma = svd.singular_values();
        for i in 0..3 {
            let lambda = gram.values().get(i);
            assert!((sigma.get(i) * sigma.get(i) - lambda).abs() / lambda < 1e-8);
        }
    }

    #[test]
    fn test_f32_input() {
        let a = Matrix::<f32>::from_rows(&[vec![3.0, 2.0, 2.0], vec![2.0, 3.0, -2.0]]).unwrap();
        let svd = svd(&a).unwrap();

        let sigma = svd.singular_values();
        assert!((sigma.get(0) - 5.0).abs() < 1e-4);
        assert!((sigma.get(1) - 3.0).abs() < 1e-4);
        assert!(svd.reconstruct().unwrap().is_equal_approx(&a, 1e-4));
    }

    #[test]
    fn test_rank_deficient() {
        let a = m(&[vec![1.0, 1.0], vec![1.0, 1.0]]);
        let svd = svd(&a).unwrap();
        let sigma = svd.singular_values();
        assert!((sigma.get(0) - 2.0).abs() < 1e-8);
        assert!(sigma.get(1).abs() < 1e-6);
        assert!(svd.reconstruct().unwrap().is_equal_approx(&a, 1e-6));
    }

    #[test]
    fn test_empty_matrix() {
        assert!(matches!(
            svd(&Matrix::<f64>::zeros(0, 3)),
            Err(LinalgError::InvalidArgument { .. })
        ));
    }
}
