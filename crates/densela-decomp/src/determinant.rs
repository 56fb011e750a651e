//! Determinant, adjugate, inverse and pseudo-inverse
//!
//! The determinant is computed by Laplace (cofactor) expansion along the
//! first row for small matrices and by LU factorisation with partial
//! pivoting above [`LU_THRESHOLD`]. Both agree to floating-point tolerance
//! on well-conditioned input.
//!
//! [`inverse`] is `adjoint(A) / det(A)` with no singularity guard: a singular
//! input yields `inf`/`NaN` entries. Use [`inverse_strict`] or
//! [`inverse_with`] with a strict [`DecompConfig`] to get a
//! [`LinalgError::NumericalDegeneracy`] instead.
//!
//! # Examples
//!
//! ```
//! use densela_core::Matrix;
//! use densela_decomp::{determinant, inverse};
//!
//! let a = Matrix::<f64>::from_rows(&[vec![4.0, 7.0], vec![2.0, 6.0]])?;
//! assert!((determinant(&a)? - 10.0).abs() < 1e-12);
//!
//! let inv = inverse(&a)?;
//! let expected = Matrix::from_rows(&[vec![0.6, -0.7], vec![-0.2, 0.4]])?;
//! assert!(inv.is_equal_approx(&expected, 1e-12));
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::config::DecompConfig;
use densela_core::error::ensure_square;
use densela_core::{LinalgError, LinalgResult, Matrix, Scalar, Vector};
use densela_kernels::{gram_matrix, mat_vec_mult};
use scirs2_core::ndarray_ext::{Array2, ArrayView2};

/// Matrix order above which [`determinant`] switches to LU factorisation
pub const LU_THRESHOLD: usize = 8;

/// Minor of the leading `n × n` block with row `i` and column `j` removed
///
/// The result is `(n-1) × (n-1)`.
///
/// # Errors
///
/// [`LinalgError::InvalidArgument`] when `n` is zero, exceeds the matrix, or
/// `i`/`j` fall outside the block.
///
/// # Examples
///
/// ```
/// use densela_core::Matrix;
/// use densela_decomp::cofactor;
///
/// let a = Matrix::from_rows(&[
///     vec![1.0, 2.0, 3.0],
///     vec![4.0, 5.0, 6.0],
///     vec![7.0, 8.0, 9.0],
/// ]).unwrap();
/// let m = cofactor(&a, 3, 0, 1).unwrap();
/// assert_eq!(m.to_rows(), vec![vec![4.0, 6.0], vec![7.0, 9.0]]);
/// ```
pub fn cofactor<T: Scalar>(a: &Matrix<T>, n: usize, i: usize, j: usize) -> LinalgResult<Matrix<T>> {
    check_block("cofactor", a, n)?;
    if i >= n || j >= n {
        return Err(LinalgError::invalid_argument(
            "cofactor",
            format!("index ({}, {}) outside the leading {}x{} block", i, j, n, n),
        ));
    }
    let block = a.as_array().slice(scirs2_core::ndarray_ext::s![..n, ..n]);
    Ok(Matrix::from_array(minor(&block, i, j)))
}

/// Determinant of the leading `d × d` block by cofactor expansion
///
/// `d == 1` returns `a00`, `d == 2` uses the closed form
/// `a00·a11 − a01·a10`, larger blocks expand along the first row with sign
/// `(-1)^i`. Runs in O(d!) time.
///
/// # Errors
///
/// [`LinalgError::InvalidArgument`] when `d` is zero or exceeds the matrix.
pub fn det<T: Scalar>(a: &Matrix<T>, d: usize) -> LinalgResult<T> {
    check_block("det", a, d)?;
    let block = a.as_array().slice(scirs2_core::ndarray_ext::s![..d, ..d]);
    Ok(laplace(&block))
}

/// Determinant by LU factorisation with partial pivoting
///
/// O(n³). A zero pivot column short-circuits to exactly `0`.
///
/// # Errors
///
/// - [`LinalgError::InvalidArgument`] for an empty matrix
/// - [`LinalgError::DimensionMismatch`] for a non-square matrix
pub fn det_lu<T: Scalar>(a: &Matrix<T>) -> LinalgResult<T> {
    ensure_square("det_lu", &[a.rows(), a.cols()])?;
    Ok(lu_determinant(a.as_array().to_owned()))
}

/// Determinant of a square matrix
///
/// Cofactor expansion up to [`LU_THRESHOLD`], LU factorisation above it.
///
/// # Errors
///
/// - [`LinalgError::InvalidArgument`] for an empty matrix
/// - [`LinalgError::DimensionMismatch`] for a non-square matrix
pub fn determinant<T: Scalar>(a: &Matrix<T>) -> LinalgResult<T> {
    ensure_square("determinant", &[a.rows(), a.cols()])?;
    let n = a.rows();
    if n > LU_THRESHOLD {
        Ok(lu_determinant(a.as_array().to_owned()))
    } else {
        Ok(laplace(&a.as_array().view()))
    }
}

/// Adjugate (classical adjoint)
///
/// - 1×1: `[[1]]`
/// - 2×2: swap the diagonal, negate the off-diagonal
/// - larger: `adj[j][i] = (-1)^(i+j) · det(minor(i, j))`
///
/// # Errors
///
/// - [`LinalgError::InvalidArgument`] for an empty matrix
/// - [`LinalgError::DimensionMismatch`] for a non-square matrix
pub fn adjoint<T: Scalar>(a: &Matrix<T>) -> LinalgResult<Matrix<T>> {
    ensure_square("adjoint", &[a.rows(), a.cols()])?;
    let n = a.rows();
    let arr = a.as_array();

    let adj = match n {
        1 => Array2::ones((1, 1)),
        2 => {
            let mut adj = Array2::zeros((2, 2));
            adj[[0, 0]] = arr[[1, 1]];
            adj[[1, 1]] = arr[[0, 0]];
            adj[[0, 1]] = -arr[[0, 1]];
            adj[[1, 0]] = -arr[[1, 0]];
            adj
        }
        _ => {
            let mut adj = Array2::zeros((n, n));
            for i in 0..n {
                for j in 0..n {
                    let m = minor(&arr.view(), i, j);
                    let d = if m.nrows() > LU_THRESHOLD {
                        lu_determinant(m)
                    } else {
                        laplace(&m.view())
                    };
                    let sign = if (i + j) % 2 == 0 { T::one() } else { -T::one() };
                    adj[[j, i]] = sign * d;
                }
            }
            adj
        }
    };

    Ok(Matrix::from_array(adj))
}

/// Inverse `adjoint(A) / det(A)`
///
/// A singular matrix produces `inf`/`NaN` entries rather than an error.
///
/// # Errors
///
/// - [`LinalgError::InvalidArgument`] for an empty matrix
/// - [`LinalgError::DimensionMismatch`] for a non-square matrix
pub fn inverse<T: Scalar>(a: &Matrix<T>) -> LinalgResult<Matrix<T>> {
    inverse_with(a, &DecompConfig::default())
}

/// Inverse honouring `cfg.strict`
///
/// With `cfg.strict` set this behaves like [`inverse_strict`].
pub fn inverse_with<T: Scalar>(a: &Matrix<T>, cfg: &DecompConfig) -> LinalgResult<Matrix<T>> {
    ensure_square("inverse", &[a.rows(), a.cols()])?;
    tracing::debug!(n = a.rows(), strict = cfg.strict, "inverse");

    let d = determinant(a)?;
    if cfg.strict && !(d.abs() > cfg.singular_tol::<T>()) {
        return Err(LinalgError::degeneracy(
            "inverse",
            format!("determinant {} is within {:e} of zero", d, cfg.singular_tolerance),
        ));
    }

    Ok(adjoint(a)?.scalar_multiply(T::one() / d))
}

/// Inverse that fails on a (near-)singular matrix
///
/// # Errors
///
/// [`LinalgError::NumericalDegeneracy`] when `|det(A)| <= cfg.singular_tolerance`
/// (or the determinant is `NaN`), plus the shape errors of [`inverse`].
///
/// ```
/// use densela_core::{LinalgError, Matrix};
/// use densela_decomp::{inverse_strict, DecompConfig};
///
/// let singular = Matrix::from_rows(&[vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
/// let err = inverse_strict(&singular, &DecompConfig::default()).unwrap_err();
/// assert!(matches!(err, LinalgError::NumericalDegeneracy { .. }));
/// ```
pub fn inverse_strict<T: Scalar>(a: &Matrix<T>, cfg: &DecompConfig) -> LinalgResult<Matrix<T>> {
    inverse_with(a, &cfg.strict())
}

/// Left Moore–Penrose pseudo-inverse `(AᵀA)⁻¹Aᵀ`
///
/// Valid when `A` has full column rank. The result is `cols × rows`.
///
/// # Errors
///
/// [`LinalgError::InvalidArgument`] for an empty matrix.
pub fn pinverse<T: Scalar>(a: &Matrix<T>) -> LinalgResult<Matrix<T>> {
    if a.is_empty() {
        return Err(LinalgError::invalid_argument(
            "pinverse",
            "matrix must not be empty",
        ));
    }
    tracing::debug!(rows = a.rows(), cols = a.cols(), "pinverse");
    inverse(&gram_matrix(a))?.matmul(&a.transpose())
}

/// Solve `A·x = b` as `inverse(A)·b`
///
/// # Errors
///
/// Shape errors of [`inverse`], plus [`LinalgError::DimensionMismatch`] when
/// `b.len() != A.rows`.
///
/// ```
/// use densela_core::{Matrix, Vector};
/// use densela_decomp::solve;
///
/// let a = Matrix::from_rows(&[vec![2.0, 0.0], vec![0.0, 4.0]]).unwrap();
/// let b = Vector::from_vec(vec![2.0, 2.0]).unwrap();
/// let x = solve(&a, &b).unwrap();
/// assert!(x.is_equal_approx(&Vector::from_vec(vec![1.0, 0.5]).unwrap(), 1e-12));
/// ```
pub fn solve<T: Scalar>(a: &Matrix<T>, b: &Vector<T>) -> LinalgResult<Vector<T>> {
    mat_vec_mult(&inverse(a)?, b)
}

/// `true` when the columns of `A` are linearly independent
///
/// Tests `|det(AᵀA)| > singular_tolerance` with the default tolerance.
pub fn linear_independence_checker<T: Scalar>(a: &Matrix<T>) -> LinalgResult<bool> {
    if a.is_empty() {
        return Err(LinalgError::invalid_argument(
            "linear_independence_checker",
            "matrix must not be empty",
        ));
    }
    let d = determinant(&gram_matrix(a))?;
    Ok(d.abs() > DecompConfig::default().singular_tol::<T>())
}

fn check_block<T: Scalar>(operation: &str, a: &Matrix<T>, n: usize) -> LinalgResult<()> {
    if n == 0 || n > a.rows() || n > a.cols() {
        return Err(LinalgError::invalid_argument(
            operation,
            format!(
                "block order {} invalid for a {}x{} matrix",
                n,
                a.rows(),
                a.cols()
            ),
        ));
    }
    Ok(())
}

fn minor<T: Scalar>(a: &ArrayView2<T>, row: usize, col: usize) -> Array2<T> {
    let n = a.nrows();
    Array2::from_shape_fn((n - 1, n - 1), |(i, j)| {
        let si = if i >= row { i + 1 } else { i };
        let sj = if j >= col { j + 1 } else { j };
        a[[si, sj]]
    })
}

fn laplace<T: Scalar>(a: &ArrayView2<T>) -> T {
    let n = a.nrows();
    match n {
        1 => a[[0, 0]],
        2 => a[[0, 0]] * a[[1, 1]] - a[[0, 1]] * a[[1, 0]],
        _ => {
            let mut total = T::zero();
            for i in 0..n {
                let sign = if i % 2 == 0 { T::one() } else { -T::one() };
                let sub = minor(a, 0, i);
                total += sign * a[[0, i]] * laplace(&sub.view());
            }
            total
        }
    }
}

fn lu_determinant<T: Scalar>(mut m: Array2<T>) -> T {
    let n = m.nrows();
    let mut det = T::one();

    for k in 0..n {
        let mut pivot = k;
        for i in (k + 1)..n {
            if m[[i, k]].abs() > m[[pivot, k]].abs() {
                pivot = i;
            }
        }
        if m[[pivot, k]] == T::zero() {
            return T::zero();
        }
        if pivot != k {
            for j in 0..n {
                m.swap([k, j], [pivot, j]);
            }
            det = -det;
        }

        let p = m[[k, k]];
        det *= p;
        for i in (k + 1)..n {
            let factor = m[[i, k]] / p;
            for j in (k + 1)..n {
                let delta = factor * m[[k, j]];
                m[[i, j]] -= delta;
            }
        }
    }

    det
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: &[Vec<f64>]) -> Matrix<f64> {
        Matrix::from_rows(rows).unwrap()
    }

    fn sample3() -> Matrix<f64> {
        m(&[
            vec![2.0, -3.0, 1.0],
            vec![2.0, 0.0, -1.0],
            vec![1.0, 4.0, 5.0],
        ])
    }

    #[test]
    fn test_det_small_cases() {
        assert_eq!(det(&m(&[vec![7.0]]), 1).unwrap(), 7.0);
        assert_eq!(det(&m(&[vec![4.0, 7.0], vec![2.0, 6.0]]), 2).unwrap(), 10.0);
        assert_eq!(det(&sample3(), 3).unwrap(), 49.0);
    }

    #[test]
    fn test_det_leading_block() {
        // Leading 2x2 block of sample3 is [[2, -3], [2, 0]]
        assert_eq!(det(&sample3(), 2).unwrap(), 6.0);
        assert!(det(&sample3(), 4).is_err());
        assert!(det(&sample3(), 0).is_err());
    }

    #[test]
    fn test_det_lu_matches_cofactor() {
        let a = m(&[
            vec![1.0, 2.0, 0.5, -1.0],
            vec![3.0, -1.0, 2.0, 0.0],
            vec![0.0, 4.0, 1.0, 2.0],
            vec![2.0, 0.0, -3.0, 1.0],
        ]);
        let expected = det(&a, 4).unwrap();
        assert!((det_lu(&a).unwrap() - expected).abs() < 1e-10);
    }

    #[test]
    fn test_determinant_switches_to_lu() {
        let n = LU_THRESHOLD + 2;
        let mut a = Matrix::<f64>::identity(n).scalar_multiply(2.0);
        a.set(0, n - 1, 1.0);
        // Upper triangular: determinant is the diagonal product.
        assert!((determinant(&a).unwrap() - 2f64.powi(n as i32)).abs() < 1e-9);
    }

    #[test]
    fn test_determinant_shape_errors() {
        assert!(matches!(
            determinant(&Matrix::<f64>::zeros(2, 3)),
            Err(LinalgError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            determinant(&Matrix::<f64>::zeros(0, 0)),
            Err(LinalgError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_adjoint_cases() {
        assert_eq!(adjoint(&m(&[vec![5.0]])).unwrap().to_rows(), vec![vec![1.0]]);
        assert_eq!(
            adjoint(&m(&[vec![4.0, 7.0], vec![2.0, 6.0]]))
                .unwrap()
                .to_rows(),
            vec![vec![6.0, -7.0], vec![-2.0, 4.0]]
        );

        // A · adj(A) = det(A) · I
        let a = sample3();
        let product = a.matmul(&adjoint(&a).unwrap()).unwrap();
        assert!(product.is_equal_approx(&Matrix::identity(3).scalar_multiply(49.0), 1e-10));
    }

    #[test]
    fn test_inverse_known_value() {
        let inv = inverse(&m(&[vec![4.0, 7.0], vec![2.0, 6.0]])).unwrap();
        assert!(inv.is_equal_approx(&m(&[vec![0.6, -0.7], vec![-0.2, 0.4]]), 1e-12));
    }

    #[test]
    fn test_inverse_round_trip() {
        let a = sample3();
        let product = a.matmul(&inverse(&a).unwrap()).unwrap();
        assert!(product.is_equal_approx(&Matrix::identity(3), 1e-12));
    }

    #[test]
    fn test_inverse_singular_is_silent_by_default() {
        let singular = m(&[vec![1.0, 2.0], vec![2.0, 4.0]]);
        let inv = inverse(&singular).unwrap();
        assert!(inv.iter().any(|x| !x.is_finite()));

        let strict = inverse_with(&singular, &DecompConfig::default().strict());
        assert!(matches!(
            strict,
            Err(LinalgError::NumericalDegeneracy { .. })
        ));
    }

    #[test]
    fn test_pinverse_of_tall_matrix() {
        let a = m(&[vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]]);
        let p = pinverse(&a).unwrap();
        assert_eq!(p.shape(), (2, 3));
        // Left inverse: P·A = I
        assert!(p.matmul(&a).unwrap().is_equal_approx(&Matrix::identity(2), 1e-12));
    }

    #[test]
    fn test_pinverse_of_invertible_is_inverse() {
        let a = sample3();
        assert!(pinverse(&a)
            .unwrap()
            .is_equal_approx(&inverse(&a).unwrap(), 1e-9));
    }

    #[test]
    fn test_solve() {
        let a = sample3();
        let x = Vector::from_vec(vec![1.0, -2.0, 0.5]).unwrap();
        let b = mat_vec_mult(&a, &x).unwrap();
        assert!(solve(&a, &b).unwrap().is_equal_approx(&x, 1e-12));
    }

    #[test]
    fn test_linear_independence() {
        assert!(linear_independence_checker(&sample3()).unwrap());
        let dependent = m(&[vec![1.0, 2.0], vec![2.0, 4.0], vec![3.0, 6.0]]);
        assert!(!linear_independence_checker(&dependent).unwrap());
    }

    #[test]
    fn test_cofactor_bounds() {
        assert!(cofactor(&sample3(), 3, 3, 0).is_err());
        assert_eq!(
            cofactor(&sample3(), 2, 1, 1).unwrap().to_rows(),
            vec![vec![2.0]]
        );
    }
}
