//! Kronecker product implementation
//!
//! The Kronecker product constructs a block matrix where each element of the
//! first matrix scales an entire copy of the second matrix.
//! For matrices A (m×n) and B (p×q), the result C = A ⊗ B has size (mp×nq).

use densela_core::{Matrix, Scalar};
use scirs2_core::ndarray_ext::{s, Array2};

/// Compute the Kronecker product of two matrices
///
/// The result has the block structure:
/// ```text
/// [ a11*B  a12*B  ...  a1n*B ]
/// [ a21*B  a22*B  ...  a2n*B ]
/// [  ...    ...   ...   ...  ]
/// [ am1*B  am2*B  ...  amn*B ]
/// ```
///
/// Any shapes are accepted, so this never fails.
///
/// # Complexity
///
/// Time: O(m * n * p * q)
/// Space: O(m * n * p * q)
///
/// # Examples
///
/// ```
/// use densela_core::Matrix;
/// use densela_kernels::kronecker;
///
/// let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// let b = Matrix::from_rows(&[vec![0.0, 5.0], vec![6.0, 7.0]]).unwrap();
/// let c = kronecker(&a, &b);
/// assert_eq!(c.shape(), (4, 4));
///
/// // Top-right block is 2*B
/// assert_eq!(c.get(0, 3), 10.0);
/// assert_eq!(c.get(1, 2), 12.0);
/// ```
pub fn kronecker<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Matrix<T> {
    let (m, n) = a.shape();
    let (p, q) = b.shape();
    let b_arr = b.as_array();

    let mut result = Array2::<T>::zeros((m * p, n * q));

    for ((i, j), &a_val) in a.as_array().indexed_iter() {
        let mut block = result.slice_mut(s![i * p..(i + 1) * p, j * q..(j + 1) * q]);
        block.assign(&b_arr.mapv(|x| a_val * x));
    }

    Matrix::from_array(result)
}

/// Compute the Kronecker product with parallel execution
///
/// Each row of A owns a disjoint horizontal band of `p` output rows, so the
/// bands are filled independently. Produces the same result as
/// [`kronecker`].
///
/// # Examples
///
/// ```
/// use densela_core::Matrix;
/// use densela_kernels::kronecker_parallel;
///
/// let a = Matrix::<f64>::identity(3);
/// let b = Matrix::<f64>::ones(2, 2);
/// let c = kronecker_parallel(&a, &b);
/// assert_eq!(c.shape(), (6, 6));
/// assert_eq!(c.trace(), 6.0);
/// ```
#[cfg(feature = "parallel")]
pub fn kronecker_parallel<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Matrix<T> {
    use scirs2_core::ndarray_ext::Axis;
    use scirs2_core::parallel_ops::*;

    let (m, n) = a.shape();
    let (p, q) = b.shape();
    if p == 0 || q == 0 || m == 0 || n == 0 {
        return Matrix::zeros(m * p, n * q);
    }
    let a_arr = a.as_array();
    let b_arr = b.as_array();

    let mut result = Array2::<T>::zeros((m * p, n * q));

    result
        .axis_chunks_iter_mut(Axis(0), p)
        .into_par_iter()
        .enumerate()
        .for_each(|(i, mut band)| {
            for j in 0..n {
                let a_val = a_arr[[i, j]];
                let block_col = j * q;
                for bi in 0..p {
                    for bj in 0..q {
                        band[[bi, block_col + bj]] = a_val * b_arr[[bi, bj]];
                    }
                }
            }
        });

    Matrix::from_array(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: &[Vec<f64>]) -> Matrix<f64> {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_kronecker_basic() {
        let a = m(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = m(&[vec![5.0, 6.0], vec![7.0, 8.0]]);
        let c = kronecker(&a, &b);

        assert_eq!(c.shape(), (4, 4));
        assert_eq!(
            c.to_rows(),
            vec![
                vec![5.0, 6.0, 10.0, 12.0],
                vec![7.0, 8.0, 14.0, 16.0],
                vec![15.0, 18.0, 20.0, 24.0],
                vec![21.0, 24.0, 28.0, 32.0],
            ]
        );
    }

    #[test]
    fn test_kronecker_rectangular() {
        let a = m(&[vec![1.0, 2.0, 3.0]]); // 1×3
        let b = m(&[vec![1.0], vec![-1.0]]); // 2×1
        let c = kronecker(&a, &b);

        assert_eq!(c.shape(), (2, 3));
        assert_eq!(
            c.to_rows(),
            vec![vec![1.0, 2.0, 3.0], vec![-1.0, -2.0, -3.0]]
        );
    }

    #[test]
    fn test_kronecker_identity() {
        let i2 = Matrix::<f64>::identity(2);
        let i3 = Matrix::<f64>::identity(3);
        assert_eq!(kronecker(&i2, &i3), Matrix::identity(6));
    }

    #[test]
    fn test_kronecker_with_scalar_matrix() {
        let a = m(&[vec![3.0]]);
        let b = m(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(kronecker(&a, &b), b.scalar_multiply(3.0));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_kronecker_parallel() {
        let a = m(&[vec![1.0, 2.0, 0.5], vec![3.0, 4.0, -1.0]]);
        let b = m(&[vec![5.0, 6.0], vec![7.0, 8.0], vec![9.0, 10.0]]);

        let serial = kronecker(&a, &b);
        let parallel = kronecker_parallel(&a, &b);
        assert_eq!(serial, parallel);
    }
}
