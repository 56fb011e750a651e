//! Symmetric eigendecomposition by the cyclic Jacobi method
//!
//! Each step picks the off-diagonal entry `A[p][q]` of largest magnitude and
//! applies the plane rotation `P` that zeroes it:
//!
//! ```text
//! θ = π/4                                   if A[p][p] == A[q][q]
//! θ = ½·atan(2·A[p][q] / (A[p][p] − A[q][q]))   otherwise
//!
//! A ← Pᵀ·A·P        V ← V·P
//! ```
//!
//! The rotated pivot pair is set to exactly zero, and any other off-diagonal
//! entry with `|x| <= tol` is snapped to zero after every rotation, where
//! `tol = max(zero_tolerance, 100·ε)·‖A‖_F` (see
//! [`DecompConfig::zero_tol_for`]), with `ε` the machine epsilon of the
//! element type. The iteration stops once the iterate is
//! diagonal, or when a rotation no longer changes it (the remaining
//! off-diagonals are then forced to zero). A rotation cap guards against
//! inputs that never settle.
//!
//! Symmetry of the input is assumed, not checked.
//!
//! # Examples
//!
//! ```
//! use densela_core::Matrix;
//! use densela_decomp::eigen;
//!
//! let a = Matrix::<f64>::from_rows(&[vec![2.0, 1.0], vec![1.0, 2.0]])?;
//! let eig = eigen(&a)?;
//!
//! let values = eig.values();
//! assert!((values.get(0) - 3.0).abs() < 1e-10);
//! assert!((values.get(1) - 1.0).abs() < 1e-10);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::config::DecompConfig;
use densela_core::error::ensure_square;
use densela_core::{LinalgError, LinalgResult, Matrix, Scalar, Vector};
use scirs2_core::ndarray_ext::Array2;
use std::cmp::Ordering;

/// Eigenpairs of a symmetric matrix, sorted by eigenvalue, largest first
#[derive(Debug, Clone, PartialEq)]
pub struct EigenResult<T> {
    /// Eigenvectors as columns; column `i` belongs to `eigen_values[i][i]`
    pub eigen_vectors: Matrix<T>,
    /// Diagonal matrix of eigenvalues in descending order
    pub eigen_values: Matrix<T>,
    /// Number of Jacobi rotations applied
    pub iterations: usize,
}

impl<T: Scalar> EigenResult<T> {
    /// Eigenvalues in descending order
    pub fn values(&self) -> Vector<T> {
        self.eigen_values.diagonal()
    }

    /// Eigenvector `i` (column `i` of `eigen_vectors`)
    pub fn vector(&self, i: usize) -> Vector<T> {
        self.eigen_vectors.column(i)
    }

    /// `V·Λ·Vᵀ`
    pub fn reconstruct(&self) -> LinalgResult<Matrix<T>> {
        self.eigen_vectors
            .matmul(&self.eigen_values)?
            .matmul(&self.eigen_vectors.transpose())
    }
}

/// Plane rotation in the `(p, q)` plane
///
/// As a dense matrix this is the identity with `P[p][p] = P[q][q] = cos θ`,
/// `P[p][q] = −sin θ` and `P[q][p] = sin θ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JacobiRotation<T> {
    pub p: usize,
    pub q: usize,
    pub theta: T,
}

impl<T: Scalar> JacobiRotation<T> {
    /// Rotation that annihilates `a[p][q]`
    pub fn annihilating(a: &Matrix<T>, p: usize, q: usize) -> Self {
        Self::for_array(a.as_array(), p, q)
    }

    fn for_array(a: &Array2<T>, p: usize, q: usize) -> Self {
        let app = a[[p, p]];
        let aqq = a[[q, q]];
        let theta = if app == aqq {
            T::from_f64_lossy(std::f64::consts::FRAC_PI_4)
        } else {
            let two = T::from_f64_lossy(2.0);
            let half = T::from_f64_lossy(0.5);
            half * (two * a[[p, q]] / (app - aqq)).atan()
        };
        Self { p, q, theta }
    }

    /// Dense `n × n` rotation matrix
    ///
    /// ```
    /// use densela_decomp::JacobiRotation;
    ///
    /// let r = JacobiRotation { p: 0, q: 2, theta: std::f64::consts::FRAC_PI_2 };
    /// let m = r.to_matrix(3);
    /// assert!((m.get(0, 2) + 1.0).abs() < 1e-12);
    /// assert!((m.get(2, 0) - 1.0).abs() < 1e-12);
    /// assert_eq!(m.get(1, 1), 1.0);
    /// ```
    pub fn to_matrix(&self, n: usize) -> Matrix<T> {
        let (s, c) = self.theta.sin_cos();
        let mut m = Matrix::identity(n);
        m.set(self.p, self.p, c);
        m.set(self.q, self.q, c);
        m.set(self.p, self.q, -s);
        m.set(self.q, self.p, s);
        m
    }

    /// `A ← Pᵀ·A·P`, touching only rows and columns `p` and `q`
    fn apply_similarity(&self, a: &mut Array2<T>) {
        self.apply_right(a);
        let (s, c) = self.theta.sin_cos();
        let (p, q) = (self.p, self.q);
        for k in 0..a.ncols() {
            let apk = a[[p, k]];
            let aqk = a[[q, k]];
            a[[p, k]] = c * apk + s * aqk;
            a[[q, k]] = c * aqk - s * apk;
        }
    }

    /// `M ← M·P`, touching only columns `p` and `q`
    fn apply_right(&self, m: &mut Array2<T>) {
        let (s, c) = self.theta.sin_cos();
        let (p, q) = (self.p, self.q);
        for k in 0..m.nrows() {
            let mkp = m[[k, p]];
            let mkq = m[[k, q]];
            m[[k, p]] = c * mkp + s * mkq;
            m[[k, q]] = c * mkq - s * mkp;
        }
    }
}

/// Eigendecomposition with the default [`DecompConfig`]
///
/// # Errors
///
/// - [`LinalgError::InvalidArgument`] for an empty matrix
/// - [`LinalgError::DimensionMismatch`] for a non-square matrix
/// - [`LinalgError::ConvergenceFailure`] when the rotation cap is reached
pub fn eigen<T: Scalar>(a: &Matrix<T>) -> LinalgResult<EigenResult<T>> {
    eigen_with(a, &DecompConfig::default())
}

/// Eigendecomposition with an explicit configuration
///
/// Reads `max_iterations` and `zero_tolerance` from `cfg`.
pub fn eigen_with<T: Scalar>(a: &Matrix<T>, cfg: &DecompConfig) -> LinalgResult<EigenResult<T>> {
    ensure_square("eigen", &[a.rows(), a.cols()])?;
    let n = a.rows();
    let max_iterations = cfg.max_iterations_for(n);
    let zero_tol = cfg.zero_tol_for(a.frobenius_norm());
    tracing::debug!(n, max_iterations, zero_tol = %zero_tol, "jacobi eigendecomposition");

    let mut d = a.as_array().to_owned();
    let mut v = Array2::<T>::eye(n);
    let mut iterations = 0usize;

    while let Some((p, q)) = find_pivot(&d) {
        if iterations >= max_iterations {
            tracing::warn!(
                iterations,
                residual = %Matrix::from_array(d.clone()).max_off_diagonal(),
                "jacobi rotation cap reached"
            );
            return Err(LinalgError::convergence("eigen", iterations));
        }

        let rotation = JacobiRotation::for_array(&d, p, q);
        tracing::trace!(iteration = iterations, p, q, theta = %rotation.theta, "jacobi rotation");

        let previous = d.clone();
        rotation.apply_similarity(&mut d);
        rotation.apply_right(&mut v);
        iterations += 1;

        // The rotation annihilates the pivot pair up to round-off
        d[[p, q]] = T::zero();
        d[[q, p]] = T::zero();

        snap_off_diagonal(&mut d, zero_tol);

        if is_fixed_point(&previous, &d, zero_tol) {
            tracing::warn!(iterations, "jacobi iterate stalled, forcing diagonal");
            for ((i, j), x) in d.indexed_iter_mut() {
                if i != j {
                    *x = T::zero();
                }
            }
            break;
        }
    }

    tracing::debug!(iterations, "jacobi converged");
    Ok(sorted_result(&d, &v, iterations))
}

/// `true` when every eigenvalue is strictly positive
pub fn positive_definite_checker<T: Scalar>(a: &Matrix<T>) -> LinalgResult<bool> {
    Ok(eigen(a)?.values().iter().all(|&x| x > T::zero()))
}

/// `true` when every eigenvalue is strictly negative
pub fn negative_definite_checker<T: Scalar>(a: &Matrix<T>) -> LinalgResult<bool> {
    Ok(eigen(a)?.values().iter().all(|&x| x < T::zero()))
}

/// `true` when some eigenvalue is zero up to the Jacobi zero threshold
///
/// The threshold is [`DecompConfig::zero_tol_for`] at the Frobenius norm of
/// `A`, so the answer does not change when `A` is rescaled.
pub fn has_zero_eigenvalue<T: Scalar>(a: &Matrix<T>) -> LinalgResult<bool> {
    let cfg = DecompConfig::default();
    let tol = cfg.zero_tol_for(a.frobenius_norm());
    Ok(eigen_with(a, &cfg)?
        .values()
        .iter()
        .any(|&x| x.abs() <= tol))
}

/// Largest-magnitude off-diagonal entry, scanning row-major
///
/// Ties keep the earliest entry. `None` when every off-diagonal is zero.
fn find_pivot<T: Scalar>(a: &Array2<T>) -> Option<(usize, usize)> {
    let mut best = T::zero();
    let mut pivot = None;
    for ((i, j), &x) in a.indexed_iter() {
        if i != j && x.abs() > best {
            best = x.abs();
            pivot = Some((i, j));
        }
    }
    pivot
}

fn snap_off_diagonal<T: Scalar>(a: &mut Array2<T>, tol: T) {
    for ((i, j), x) in a.indexed_iter_mut() {
        if i != j && x.abs() <= tol {
            *x = T::zero();
        }
    }
}

fn is_fixed_point<T: Scalar>(previous: &Array2<T>, current: &Array2<T>, tol: T) -> bool {
    previous
        .iter()
        .zip(current.iter())
        .all(|(&a, &b)| (a - b).abs() <= tol)
}

/// Reorder eigenpairs by a stable descending sort of `(value, index)`
fn sorted_result<T: Scalar>(d: &Array2<T>, v: &Array2<T>, iterations: usize) -> EigenResult<T> {
    let n = d.nrows();
    let values: Vec<T> = (0..n).map(|i| d[[i, i]]).collect();

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| {
        values[j]
            .partial_cmp(&values[i])
            .unwrap_or(Ordering::Equal)
    });

    let mut eigen_values = Array2::<T>::zeros((n, n));
    let mut eigen_vectors = Array2::<T>::zeros((n, n));
    for (dst, &src) in order.iter().enumerate() {
        eigen_values[[dst, dst]] = values[src];
        eigen_vectors.column_mut(dst).assign(&v.column(src));
    }

    EigenResult {
        eigen_vectors: Matrix::from_array(eigen_vectors),
        eigen_values: Matrix::from_array(eigen_values),
        iterations,
    }
}
