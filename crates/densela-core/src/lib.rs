//! # densela-core
//!
//! Dense containers and elementwise/algebraic operators for the densela
//! linear-algebra stack.
//!
//! - **Vectors** ([`Vector`]): fixed-length sequences with dot products,
//!   norms and distances
//! - **Matrices** ([`Matrix`]): row-major `rows × cols` grids with transpose,
//!   matrix product, trace and Frobenius norm
//! - **3-D tensors** ([`Tensor3`]): stacks of equal-shape matrices
//! - **Unary maps** shared by all three: `log`, `log10`, `exp`, `erf`,
//!   `sqrt`, `cbrt`, `sin`, `cos`, `abs`, `round`, `exponentiate`
//!
//! ## SciRS2 Integration
//!
//! Storage is `scirs2_core::ndarray_ext::{Array1, Array2, Array3}` and
//! numeric bounds come from `scirs2_core::numeric`. Containers expose the
//! underlying arrays through `from_array` / `as_array` / `into_array`.
//!
//! ## Quick Start
//!
//! ```
//! use densela_core::{Matrix, Vector};
//!
//! let a = Matrix::from_rows(&[vec![2.0, 0.0], vec![1.0, 3.0]])?;
//! let x = Vector::from_vec(vec![1.0, 1.0])?;
//!
//! let at = a.transpose();
//! let gram = at.matmul(&a)?;
//! assert_eq!(gram.shape(), (2, 2));
//! assert_eq!(gram.get(0, 0), 5.0);
//!
//! let scaled = x.scalar_multiply(2.0);
//! assert_eq!(scaled.norm_sq(), 8.0);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`LinalgResult`]. Shape problems are reported
//! as [`LinalgError::DimensionMismatch`] and never cause out-of-bounds
//! access. Numerical problems (division by zero, `log` of a negative number)
//! follow IEEE semantics and propagate as `inf`/`NaN`.
//!
//! ## Features
//!
//! - `parallel`: `Matrix::matmul_parallel` via scirs2-core's parallel ops
//! - `serde`: `Serialize`/`Deserialize` for every container

pub mod elementwise;
pub mod error;
pub mod matrix;
pub mod scalar;
pub mod tensor3;
pub mod vector;


pub use error::{LinalgError, LinalgResult};
pub use matrix::Matrix;
pub use scalar::Scalar;
pub use tensor3::Tensor3;
pub use vector::Vector;
