//! # densela - Dense Linear Algebra
//!
//! Vector, matrix and 3-D tensor containers with elementwise and product
//! kernels, plus determinants, inverses and the classical matrix
//! decompositions (Cholesky, QR, Jacobi eigendecomposition, SVD).
//!
//! This is the **meta crate** that re-exports the densela components.
//!
//! ## Quick Start
//!
//! ```
//! use densela::prelude::*;
//!
//! let a = Matrix::<f64>::from_rows(&[vec![2.0, 1.0], vec![1.0, 2.0]])?;
//!
//! let eig = eigen(&a)?;
//! assert!((eig.values().get(0) - 3.0).abs() < 1e-10);
//! assert!((eig.values().get(1) - 1.0).abs() < 1e-10);
//!
//! let inv = inverse(&a)?;
//! assert!(a.matmul(&inv)?.is_equal_approx(&Matrix::identity(2), 1e-12));
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Components
//!
//! ### Containers ([`core`])
//!
//! [`Vector`](core::Vector), [`Matrix`](core::Matrix) and
//! [`Tensor3`](core::Tensor3), elementwise arithmetic, `matmul`,
//! `transpose` and the unary maps (`log`, `exp`, `erf`, `sqrt`, ...).
//!
//! ```
//! use densela::core::{Matrix, Tensor3};
//!
//! let t = Tensor3::<f64>::ones(2, 3, 4);
//! assert_eq!(t.sum(), 24.0);
//!
//! let m = Matrix::<f64>::identity(3).exp();
//! assert!((m.get(0, 0) - std::f64::consts::E).abs() < 1e-12);
//! ```
//!
//! ### Kernels ([`kernels`])
//!
//! Hadamard and Kronecker products, outer products, matrix–vector
//! products and broadcasting.
//!
//! ```
//! use densela::core::Matrix;
//! use densela::kernels::kronecker;
//!
//! let k = kronecker(&Matrix::<f64>::identity(2), &Matrix::ones(2, 2));
//! assert_eq!(k.shape(), (4, 4));
//! ```
//!
//! ### Decompositions ([`decomp`])
//!
//! `det`, `adjoint`, `inverse`, `pinverse`, `cholesky`, `qr`, `eigen`,
//! `svd`, and the definiteness checkers.
//!
//! ## Features
//!
//! - `tracing`: install a `tracing-subscriber` through [`tracing_support`]
//! - `parallel`: parallel `matmul` and Kronecker product
//! - `serde`: `Serialize`/`Deserialize` for the containers
//! - `full`: all of the above

pub use densela_core as core;
pub use densela_decomp as decomp;
pub use densela_kernels as kernels;

pub mod tracing_support;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```
    //! use densela::prelude::*;
    //!
    //! let v = Vector::<f64>::ones(3);
    //! assert_eq!(v.sum(), 3.0);
    //! ```

    // Containers and errors
    pub use crate::core::{LinalgError, LinalgResult, Matrix, Scalar, Tensor3, Vector};

    // Kernels
    pub use crate::kernels::{hadamard, kronecker, mat_vec_mult, outer_product};

    // Decompositions
    pub use crate::decomp::{
        cholesky, determinant, eigen, inverse, pinverse, qr, svd, DecompConfig,
    };
}
