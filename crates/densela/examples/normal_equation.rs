//! Least-squares line fit through the normal equation
//!
//! This example demonstrates:
//! - Building a design matrix from sample points
//! - Solving `x = (AᵀA)⁻¹Aᵀb` with `pinverse`
//! - Checking the residual with matrix–vector products
//!
//! Run with: cargo run --example normal_equation --features tracing

use anyhow::Result;
use densela::prelude::*;
use densela::tracing_support::{init_tracing, TracingConfig};

fn main() -> Result<()> {
    init_tracing(TracingConfig::default())?;

    println!("=== Least squares via the normal equation ===\n");

    // Noisy samples of y = 0.5 + 1.5·t
    let ts = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
    let noise = [0.05, -0.1, 0.02, 0.08, -0.03, -0.02];
    let ys: Vec<f64> = ts
        .iter()
        .zip(noise.iter())
        .map(|(t, e)| 0.5 + 1.5 * t + e)
        .collect();

    let rows: Vec<Vec<f64>> = ts.iter().map(|&t| vec![1.0, t]).collect();
    let a = Matrix::from_rows(&rows)?;
    let b = Vector::from_vec(ys)?;

    println!("Design matrix A ({}x{}):\n{:?}", a.rows(), a.cols(), a.as_array());

    let pinv = pinverse(&a)?;
    let x = mat_vec_mult(&pinv, &b)?;
    println!("\nFitted intercept = {:.4}, slope = {:.4}", x.get(0), x.get(1));

    let fitted = mat_vec_mult(&a, &x)?;
    let residual = b.subtraction(&fitted)?;
    println!("Residual norm    = {:.6}", residual.norm_2());

    // The residual is orthogonal to the column space of A
    let at_r = mat_vec_mult(&a.transpose(), &residual)?;
    println!("Aᵀr              = {:?}", at_r.to_vec());

    println!(
        "\nColumns independent: {}",
        densela::decomp::linear_independence_checker(&a)?
    );

    Ok(())
}
