//! # densela-decomp - Dense Matrix Decompositions
//!
//! Determinants, inverses and the classical matrix factorisations for small
//! to medium dense matrices.
//!
//! ## Overview
//!
//! ### Determinant / Adjugate / Inverse
//!
//! ```text
//! det(A)     cofactor expansion (n ≤ 8) or LU with partial pivoting
//! A⁻¹      = adj(A) / det(A)
//! A⁺       = (AᵀA)⁻¹Aᵀ
//! ```
//!
//! ### Cholesky
//!
//! `A = L·Lᵀ` for symmetric positive-definite `A`.
//!
//! ### QR
//!
//! `A = Q·R` by classical Gram–Schmidt on the columns of `A`.
//!
//! ### Eigendecomposition
//!
//! `A = V·Λ·Vᵀ` for symmetric `A` by cyclic Jacobi rotations, eigenpairs
//! sorted by eigenvalue, largest first.
//!
//! ### SVD
//!
//! `A = U·Σ·Vᵀ` assembled from the eigendecompositions of `A·Aᵀ` and
//! `Aᵀ·A`.
//!
//! ## Numerical policy
//!
//! The default entry points never fail on numerical grounds: a singular
//! matrix inverts to `inf`/`NaN`, a non-SPD matrix gives `NaN` in its
//! Cholesky factor, a dependent column gives `NaN` in `Q`. The `*_strict`
//! functions, or the `*_with` functions given a strict [`DecompConfig`],
//! report these cases as
//! [`LinalgError::NumericalDegeneracy`](densela_core::LinalgError::NumericalDegeneracy).
//! The Jacobi solver is bounded by a rotation cap and reports
//! [`LinalgError::ConvergenceFailure`](densela_core::LinalgError::ConvergenceFailure)
//! when it is reached.
//!
//! ## Quick Start
//!
//! ```
//! use densela_core::Matrix;
//! use densela_decomp::{cholesky, eigen, inverse, svd};
//!
//! let a = Matrix::<f64>::from_rows(&[vec![4.0, 12.0], vec![12.0, 37.0]])?;
//!
//! let inv = inverse(&a)?;
//! assert!(a.matmul(&inv)?.is_equal_approx(&Matrix::identity(2), 1e-10));
//!
//! let chol = cholesky(&a)?;
//! assert_eq!(chol.l.get(1, 0), 6.0);
//!
//! let eig = eigen(&a)?;
//! assert!((eig.values().sum() - a.trace()).abs() < 1e-9);
//!
//! let svd = svd(&a)?;
//! assert!(svd.reconstruct()?.is_equal_approx(&a, 1e-8));
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Logging
//!
//! Entry into each routine is logged at `debug`, every Jacobi rotation at
//! `trace`, and a stalled or capped Jacobi run at `warn`, through the
//! `tracing` facade. Install a subscriber (see the `densela` crate's
//! `tracing_support`) to see them.

pub mod cholesky;
pub mod config;
pub mod determinant;
pub mod eigen;
pub mod qr;
pub mod svd;


pub use cholesky::{cholesky, cholesky_strict, cholesky_with, CholeskyResult};
pub use config::DecompConfig;
pub use determinant::{
    adjoint, cofactor, det, det_lu, determinant, inverse, inverse_strict, inverse_with,
    linear_independence_checker, pinverse, solve, LU_THRESHOLD,
};
pub use eigen::{
    eigen, eigen_with, has_zero_eigenvalue, negative_definite_checker,
    positive_definite_checker, EigenResult, JacobiRotation,
};
pub use qr::{gram_schmidt, qr, qr_strict, qr_with, vector_projection, QrResult};
pub use svd::{svd, svd_with, SvdResult};
