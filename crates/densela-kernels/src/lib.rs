//! # densela-kernels
//!
//! Product and matrix–vector kernels over densela containers.
//!
//! **Key Features:**
//! - **Hadamard product** - Element-wise multiplication (allocating & in-place)
//! - **Kronecker product** - Block tensor product of matrices (serial & parallel)
//! - **Outer product** - Rank-one matrix from two vectors
//! - **Matrix–vector kernels** - `A·b`, row broadcast add, row subtraction
//! - **Utilities** - Gram matrix, approximate comparison, relative error
//!
//! ## Quick Start
//!
//! ```rust
//! use densela_core::{Matrix, Vector};
//! use densela_kernels::{gram_matrix, kronecker, mat_vec_mult};
//!
//! let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]])?;
//!
//! let k = kronecker(&a, &Matrix::identity(2));
//! assert_eq!(k.shape(), (4, 4));
//!
//! let g = gram_matrix(&a);
//! assert_eq!(g.get(0, 0), 10.0);
//!
//! let x = Vector::from_vec(vec![1.0, 1.0])?;
//! assert_eq!(mat_vec_mult(&a, &x)?.to_vec(), vec![3.0, 7.0]);
//! # Ok::<(), densela_core::LinalgError>(())
//! ```
//!
//! ## Usage Recommendations
//!
//! | Operation | When to Use Parallel | Notes |
//! |-----------|---------------------|-------|
//! | `kronecker_parallel` | Outputs with thousands of rows | Bands of `p` rows per task |
//! | `hadamard_inplace` | Always | Avoids the output allocation |
//!
//! ## Features
//!
//! - `parallel`: `kronecker_parallel` and `Matrix::matmul_parallel`

pub mod hadamard;
pub mod kronecker;
pub mod matvec;
pub mod outer;
pub mod utils;


pub use hadamard::{
    hadamard, hadamard_inplace, hadamard_tensor, hadamard_vec, hadamard_vec_inplace,
};
pub use kronecker::kronecker;
#[cfg(feature = "parallel")]
pub use kronecker::kronecker_parallel;
pub use matvec::{mat_vec_add, mat_vec_mult, subtract_matrix_rows};
pub use outer::outer_product;
pub use utils::{approx_equal, approx_equal_matrix, gram_matrix, relative_error};
