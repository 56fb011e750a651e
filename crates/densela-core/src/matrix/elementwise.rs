//! Shape-preserving binary and scalar operators on [`Matrix`]

use super::Matrix;
use crate::error::{ensure_same_shape, LinalgResult};
use crate::scalar::Scalar;
use scirs2_core::ndarray_ext::{Array2, Zip};

impl<T: Scalar> Matrix<T> {
    /// Apply `f` to every element, returning a new matrix
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T,
    {
        Self {
            data: self.data.mapv(f),
        }
    }

    /// Apply `f` to every element in place
    pub fn map_inplace<F>(&mut self, f: F)
    where
        F: Fn(T) -> T,
    {
        self.data.mapv_inplace(f);
    }

    fn zip_with<F>(&self, other: &Self, operation: &str, f: F) -> LinalgResult<Self>
    where
        F: Fn(T, T) -> T,
    {
        ensure_same_shape(operation, self.data.shape(), other.data.shape())?;
        let mut out = Array2::zeros(self.data.raw_dim());
        Zip::from(&mut out)
            .and(&self.data)
            .and(&other.data)
            .for_each(|o, &a, &b| *o = f(a, b));
        Ok(Self { data: out })
    }

    /// Elementwise sum
    ///
    /// # Errors
    ///
    /// [`LinalgError::DimensionMismatch`](crate::LinalgError::DimensionMismatch)
    /// when the shapes differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use densela_core::Matrix;
    ///
    /// let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// let b = Matrix::ones(2, 2);
    /// let c = a.addition(&b).unwrap();
    /// assert_eq!(c.to_rows(), vec![vec![2.0, 3.0], vec![4.0, 5.0]]);
    /// ```
    pub fn addition(&self, other: &Self) -> LinalgResult<Self> {
        self.zip_with(other, "addition", |a, b| a + b)
    }

    /// Elementwise difference
    pub fn subtraction(&self, other: &Self) -> LinalgResult<Self> {
        self.zip_with(other, "subtraction", |a, b| a - b)
    }

    /// Elementwise (Hadamard) product
    pub fn hadamard(&self, other: &Self) -> LinalgResult<Self> {
        self.zip_with(other, "hadamard", |a, b| a * b)
    }

    /// Elementwise quotient. Division by zero yields `inf`/`NaN`.
    pub fn division_elementwise(&self, other: &Self) -> LinalgResult<Self> {
        self.zip_with(other, "division_elementwise", |a, b| a / b)
    }

    /// Elementwise maximum
    pub fn max_elementwise(&self, other: &Self) -> LinalgResult<Self> {
        self.zip_with(other, "max_elementwise", |a, b| if a > b { a } else { b })
    }

    /// In-place Hadamard product `self ⊙= other`
    pub fn hadamard_inplace(&mut self, other: &Self) -> LinalgResult<()> {
        ensure_same_shape("hadamard_inplace", self.data.shape(), other.data.shape())?;
        self.data.zip_mut_with(&other.data, |a, &b| *a *= b);
        Ok(())
    }

    /// In-place `self += other`
    pub fn add_assign(&mut self, other: &Self) -> LinalgResult<()> {
        ensure_same_shape("add_assign", self.data.shape(), other.data.shape())?;
        self.data.zip_mut_with(&other.data, |a, &b| *a += b);
        Ok(())
    }

    /// In-place `self -= other`
    pub fn sub_assign(&mut self, other: &Self) -> LinalgResult<()> {
        ensure_same_shape("sub_assign", self.data.shape(), other.data.shape())?;
        self.data.zip_mut_with(&other.data, |a, &b| *a -= b);
        Ok(())
    }

    /// `scalar * A`
    pub fn scalar_multiply(&self, scalar: T) -> Self {
        self.map(|x| scalar * x)
    }

    /// `scalar + A`, broadcast to every element
    pub fn scalar_add(&self, scalar: T) -> Self {
        self.map(|x| scalar + x)
    }

    /// In-place `A *= scalar`
    pub fn scalar_multiply_inplace(&mut self, scalar: T) {
        self.map_inplace(|x| scalar * x);
    }

    /// In-place `A += scalar`
    pub fn scalar_add_inplace(&mut self, scalar: T) {
        self.map_inplace(|x| scalar + x);
    }

    /// `true` when both matrices have the same shape and every pair of
    /// elements differs by at most `tolerance`
    pub fn is_equal_approx(&self, other: &Self, tolerance: T) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| (a - b).abs() <= tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinalgError;

    fn m(rows: &[Vec<f64>]) -> Matrix<f64> {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_binary_ops() {
        let a = m(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = m(&[vec![2.0, 2.0], vec![2.0, 8.0]]);

        assert_eq!(
            a.subtraction(&b).unwrap().to_rows(),
            vec![vec![-1.0, 0.0], vec![1.0, -4.0]]
        );
        assert_eq!(
            a.hadamard(&b).unwrap().to_rows(),
            vec![vec![2.0, 4.0], vec![6.0, 32.0]]
        );
        assert_eq!(
            a.division_elementwise(&b).unwrap().to_rows(),
            vec![vec![0.5, 1.0], vec![1.5, 0.5]]
        );
        assert_eq!(
            a.max_elementwise(&b).unwrap().to_rows(),
            vec![vec![2.0, 2.0], vec![3.0, 8.0]]
        );
    }

    #[test]
    fn test_shape_mismatch() {
        let a = Matrix::<f64>::zeros(2, 3);
        let b = Matrix::<f64>::zeros(3, 2);
        assert!(matches!(
            a.hadamard(&b),
            Err(LinalgError::DimensionMismatch { .. })
        ));
        let mut c = a.clone();
        assert!(c.hadamard_inplace(&b).is_err());
    }

    #[test]
    fn test_identities() {
        let a = m(&[vec![1.5, -2.0], vec![0.25, 4.0]]);
        assert_eq!(a.scalar_multiply(1.0), a);
        assert_eq!(a.hadamard(&Matrix::ones(2, 2)).unwrap(), a);
        assert_eq!(a.addition(&Matrix::zeros(2, 2)).unwrap(), a);
    }

    #[test]
    fn test_inplace_ops() {
        let mut a = m(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
        a.hadamard_inplace(&m(&[vec![2.0, 0.0], vec![1.0, 1.0]]))
            .unwrap();
        assert_eq!(a.to_rows(), vec![vec![2.0, 0.0], vec![3.0, 4.0]]);

        a.scalar_add_inplace(1.0);
        a.scalar_multiply_inplace(2.0);
        assert_eq!(a.to_rows(), vec![vec![6.0, 2.0], vec![8.0, 10.0]]);

        a.sub_assign(&Matrix::full(2, 2, 2.0)).unwrap();
        a.add_assign(&Matrix::ones(2, 2)).unwrap();
        assert_eq!(a.to_rows(), vec![vec![5.0, 1.0], vec![7.0, 9.0]]);
    }

    #[test]
    fn test_is_equal_approx() {
        let a = m(&[vec![1.0, 2.0]]);
        let b = m(&[vec![1.0 + 1e-9, 2.0]]);
        assert!(a.is_equal_approx(&b, 1e-8));
        assert!(!a.is_equal_approx(&b, 1e-10));
        assert!(!a.is_equal_approx(&Matrix::zeros(2, 1), 1.0));
    }
}
