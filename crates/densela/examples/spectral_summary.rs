//! Spectral summary of a symmetric matrix and its SVD
//!
//! This example demonstrates:
//! - Jacobi eigendecomposition and the definiteness checkers
//! - Cholesky factorisation of a positive-definite matrix
//! - Singular value decomposition of a rectangular matrix
//!
//! Run with: RUST_LOG=densela_decomp=debug cargo run --example spectral_summary --features tracing

use anyhow::Result;
use densela::decomp::{
    eigen_with, has_zero_eigenvalue, negative_definite_checker, positive_definite_checker,
};
use densela::prelude::*;
use densela::tracing_support::{init_tracing, TracingConfig};

fn main() -> Result<()> {
    init_tracing(TracingConfig::default())?;

    println!("=== Symmetric eigendecomposition ===\n");

    let a: Matrix<f64> = Matrix::from_rows(&[
        vec![4.0, 1.0, 2.0],
        vec![1.0, 3.0, 0.5],
        vec![2.0, 0.5, 5.0],
    ])?;

    let cfg = DecompConfig::from_env();
    let eig = eigen_with(&a, &cfg)?;
    println!("Eigenvalues:  {:?}", eig.values().to_vec());
    println!("Rotations:    {}", eig.iterations);
    println!("Trace check:  {:.3e}", (eig.values().sum() - a.trace()).abs());

    let residual = eig.reconstruct()?.subtraction(&a)?.frobenius_norm();
    println!("‖VΛVᵀ − A‖:  {:.3e}", residual);

    println!("\nPositive definite: {}", positive_definite_checker(&a)?);
    println!("Negative definite: {}", negative_definite_checker(&a)?);
    println!("Zero eigenvalue:   {}", has_zero_eigenvalue(&a)?);

    println!("\n=== Cholesky ===\n");
    let chol = cholesky(&a)?;
    println!("L =\n{:?}", chol.l.as_array());
    println!("det(A) = {:.6}", determinant(&a)?);

    println!("\n=== Singular value decomposition ===\n");
    let b = Matrix::from_rows(&[vec![3.0, 2.0, 2.0], vec![2.0, 3.0, -2.0]])?;
    let svd = svd(&b)?;
    println!("Singular values: {:?}", svd.singular_values().to_vec());
    println!("U =\n{:?}", svd.u.as_array());
    println!("Vᵀ =\n{:?}", svd.vt.as_array());

    let err = svd.reconstruct()?.subtraction(&b)?.frobenius_norm();
    println!("‖UΣVᵀ − B‖: {:.3e}", err);

    Ok(())
}
