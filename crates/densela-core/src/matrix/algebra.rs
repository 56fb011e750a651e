//! Transpose, matrix products and matrix reductions

use super::Matrix;
use crate::error::{LinalgError, LinalgResult};
use crate::scalar::Scalar;

impl<T: Scalar> Matrix<T> {
    /// Return `Aᵀ` as a new, standard-layout matrix
    ///
    /// ```
    /// use densela_core::Matrix;
    ///
    /// let a = Matrix::from_rows(&[vec![1.0, 2.0, 3.0]]).unwrap();
    /// let t = a.transpose();
    /// assert_eq!(t.shape(), (3, 1));
    /// assert_eq!(t.transpose(), a);
    /// ```
    pub fn transpose(&self) -> Self {
        Self {
            data: self.data.t().as_standard_layout().into_owned(),
        }
    }

    /// Matrix product `C = A·B` with `C[i][j] = Σ_k A[i][k]·B[k][j]`
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] when `A.cols != B.rows`.
    ///
    /// # Complexity
    ///
    /// Time: O(m·k·n) for `(m×k)·(k×n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use densela_core::Matrix;
    ///
    /// let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// let b = Matrix::from_rows(&[vec![5.0], vec![6.0]]).unwrap();
    /// let c = a.matmul(&b).unwrap();
    /// assert_eq!(c.to_rows(), vec![vec![17.0], vec![39.0]]);
    /// ```
    pub fn matmul(&self, other: &Self) -> LinalgResult<Self> {
        check_inner_dims(self, other)?;
        Ok(Self {
            data: self.data.dot(&other.data),
        })
    }

    /// Matrix product computed over disjoint output rows in parallel
    ///
    /// Produces the same result as [`Matrix::matmul`].
    #[cfg(feature = "parallel")]
    pub fn matmul_parallel(&self, other: &Self) -> LinalgResult<Self> {
        use scirs2_core::ndarray_ext::{Array2, Axis};
        use scirs2_core::parallel_ops::*;

        check_inner_dims(self, other)?;
        let (m, k) = self.shape();
        let n = other.cols();
        let mut out = Array2::<T>::zeros((m, n));

        out.axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(i, mut row)| {
                for j in 0..n {
                    let mut acc = T::zero();
                    for p in 0..k {
                        acc += self.data[[i, p]] * other.data[[p, j]];
                    }
                    row[j] = acc;
                }
            });

        Ok(Self { data: out })
    }

    /// Sum of the main diagonal
    pub fn trace(&self) -> T {
        self.data.diag().iter().copied().sum()
    }

    /// Sum of all elements
    pub fn sum(&self) -> T {
        self.data.iter().copied().sum()
    }

    /// Frobenius norm `sqrt(Σ a_ij²)`
    pub fn frobenius_norm(&self) -> T {
        self.data.iter().map(|&x| x * x).sum::<T>().sqrt()
    }

    /// Largest absolute off-diagonal element, `0` for matrices without one
    pub fn max_off_diagonal(&self) -> T {
        let mut best = T::zero();
        for ((i, j), &x) in self.data.indexed_iter() {
            if i != j && x.abs() > best {
                best = x.abs();
            }
        }
        best
    }
}

fn check_inner_dims<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> LinalgResult<()> {
    if a.cols() != b.rows() {
        return Err(LinalgError::dimension_mismatch(
            "matmul",
            vec![a.rows(), a.cols(), a.cols(), b.cols()],
            vec![a.rows(), a.cols(), b.rows(), b.cols()],
        ));
    }
    Ok(())
}
