//! Error types for dense linear-algebra operations
//!
//! Every fallible operation in the densela stack reports one of four
//! conditions:
//!
//! - **Shape problems** ([`LinalgError::DimensionMismatch`]): binary op on
//!   differently-shaped containers, non-square input to a square-only routine,
//!   inner-dimension mismatch in a matrix product.
//! - **Numerical degeneracy** ([`LinalgError::NumericalDegeneracy`]): only
//!   raised by the strict variants of the decompositions. The default entry
//!   points let `NaN`/`inf` propagate into the result.
//! - **Invalid arguments** ([`LinalgError::InvalidArgument`]): empty input,
//!   ragged nested rows, out-of-range row/slice indices at the checked API.
//! - **Convergence failure** ([`LinalgError::ConvergenceFailure`]): an
//!   iterative routine hit its iteration cap.
//!
//! # Examples
//!
//! ```
//! use densela_core::{LinalgError, Matrix};
//!
//! let a = Matrix::<f64>::zeros(2, 3);
//! let b = Matrix::<f64>::zeros(3, 2);
//!
//! let err = a.addition(&b).unwrap_err();
//! assert!(matches!(err, LinalgError::DimensionMismatch { .. }));
//! assert!(err.to_string().contains("addition"));
//! ```

use thiserror::Error;

/// Error type for container and decomposition operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Operand shapes are incompatible with the operation
    #[error("{operation}: dimension mismatch - expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        operation: String,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// A strict-mode routine detected a singular / indefinite / zero-norm input
    #[error("{operation}: numerical degeneracy - {reason}")]
    NumericalDegeneracy { operation: String, reason: String },

    /// Empty or malformed input
    #[error("{operation}: invalid argument - {reason}")]
    InvalidArgument { operation: String, reason: String },

    /// An iterative method did not converge within its iteration budget
    #[error("{operation}: no convergence after {iterations} iterations")]
    ConvergenceFailure { operation: String, iterations: usize },
}

/// Result type for densela operations
pub type LinalgResult<T> = Result<T, LinalgError>;

impl LinalgError {
    /// Create a dimension mismatch error
    pub fn dimension_mismatch(
        operation: impl Into<String>,
        expected: Vec<usize>,
        actual: Vec<usize>,
    ) -> Self {
        LinalgError::DimensionMismatch {
            operation: operation.into(),
            expected,
            actual,
        }
    }

    /// Create a numerical degeneracy error
    pub fn degeneracy(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        LinalgError::NumericalDegeneracy {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        LinalgError::InvalidArgument {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create a convergence failure error
    pub fn convergence(operation: impl Into<String>, iterations: usize) -> Self {
        LinalgError::ConvergenceFailure {
            operation: operation.into(),
            iterations,
        }
    }
}

/// Fail with [`LinalgError::DimensionMismatch`] unless both shapes are equal.
pub fn ensure_same_shape(operation: &str, expected: &[usize], actual: &[usize]) -> LinalgResult<()> {
    if expected != actual {
        return Err(LinalgError::dimension_mismatch(
            operation,
            expected.to_vec(),
            actual.to_vec(),
        ));
    }
    Ok(())
}

/// Fail unless `shape` describes a non-empty square matrix.
pub fn ensure_square(operation: &str, shape: &[usize]) -> LinalgResult<()> {
    if shape.iter().any(|&d| d == 0) {
        return Err(LinalgError::invalid_argument(
            operation,
            "matrix must not be empty",
        ));
    }
    if shape.len() != 2 || shape[0] != shape[1] {
        let n = shape.first().copied().unwrap_or(0);
        return Err(LinalgError::dimension_mismatch(
            operation,
            vec![n, n],
            shape.to_vec(),
        ));
    }
    Ok(())
}
