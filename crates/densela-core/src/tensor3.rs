//! Three-dimensional tensor: a stack of equal-shape matrices
//!
//! Axes are ordered `(depth, rows, cols)`; slice `d` is the matrix at depth
//! `d`. All binary operators require identical shapes.

use crate::error::{ensure_same_shape, LinalgError, LinalgResult};
use crate::matrix::Matrix;
use crate::scalar::Scalar;
use crate::vector::Vector;
use scirs2_core::ndarray_ext::{Array3, Axis, Zip};
use std::ops::{Index, IndexMut};

/// Dense `depth × rows × cols` tensor
///
/// # Examples
///
/// ```
/// use densela_core::{Matrix, Tensor3};
///
/// let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// let b = Matrix::identity(2);
/// let t = Tensor3::from_matrices(&[a.clone(), b]).unwrap();
///
/// assert_eq!(t.shape(), (2, 2, 2));
/// assert_eq!(t.slice(0).unwrap(), a);
/// assert_eq!(t.get(1, 1, 1), 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound(serialize = "T: serde::Serialize")))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "T: serde::Deserialize<'de>"))
)]
pub struct Tensor3<T> {
    data: Array3<T>,
}

impl<T: Scalar> Tensor3<T> {
    /// Zero-filled tensor
    pub fn zeros(depth: usize, rows: usize, cols: usize) -> Self {
        Self {
            data: Array3::zeros((depth, rows, cols)),
        }
    }

    /// Tensor of ones
    pub fn ones(depth: usize, rows: usize, cols: usize) -> Self {
        Self::full(depth, rows, cols, T::one())
    }

    /// Tensor filled with `value`
    pub fn full(depth: usize, rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: Array3::from_elem((depth, rows, cols), value),
        }
    }

    /// Create a tensor from a flat buffer in `(depth, rows, cols)` order
    pub fn from_vec(depth: usize, rows: usize, cols: usize, data: Vec<T>) -> LinalgResult<Self> {
        if data.is_empty() {
            return Err(LinalgError::invalid_argument(
                "Tensor3::from_vec",
                "tensor must contain at least one element",
            ));
        }
        let expected = depth * rows * cols;
        if data.len() != expected {
            return Err(LinalgError::dimension_mismatch(
                "Tensor3::from_vec",
                vec![expected],
                vec![data.len()],
            ));
        }
        let data = Array3::from_shape_vec((depth, rows, cols), data)
            .map_err(|e| LinalgError::invalid_argument("Tensor3::from_vec", e.to_string()))?;
        Ok(Self { data })
    }

    /// Stack equal-shape matrices along the depth axis
    ///
    /// # Errors
    ///
    /// - [`LinalgError::InvalidArgument`] for an empty slice list
    /// - [`LinalgError::DimensionMismatch`] when the matrices differ in shape
    pub fn from_matrices(slices: &[Matrix<T>]) -> LinalgResult<Self> {
        let first = slices.first().ok_or_else(|| {
            LinalgError::invalid_argument(
                "Tensor3::from_matrices",
                "at least one slice is required",
            )
        })?;
        let (rows, cols) = first.shape();
        let mut data = Array3::zeros((slices.len(), rows, cols));
        for (d, slice) in slices.iter().enumerate() {
            ensure_same_shape(
                "Tensor3::from_matrices",
                &[rows, cols],
                &[slice.rows(), slice.cols()],
            )?;
            data.index_axis_mut(Axis(0), d).assign(slice.as_array());
        }
        Ok(Self { data })
    }

    /// Wrap an existing `Array3`
    pub fn from_array(array: Array3<T>) -> Self {
        Self { data: array }
    }

    /// Borrow the underlying array
    pub fn as_array(&self) -> &Array3<T> {
        &self.data
    }

    pub fn as_array_mut(&mut self) -> &mut Array3<T> {
        &mut self.data
    }

    /// Consume into the underlying array
    pub fn into_array(self) -> Array3<T> {
        self.data
    }

    /// Number of slices
    pub fn depth(&self) -> usize {
        self.data.shape()[0]
    }

    /// Rows per slice
    pub fn rows(&self) -> usize {
        self.data.shape()[1]
    }

    /// Columns per slice
    pub fn cols(&self) -> usize {
        self.data.shape()[2]
    }

    /// `(depth, rows, cols)`
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.depth(), self.rows(), self.cols())
    }

    /// Total number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at `(depth, row, col)`
    ///
    /// # Panics
    ///
    /// Panics if the index is out of range.
    pub fn get(&self, depth: usize, row: usize, col: usize) -> T {
        self.data[[depth, row, col]]
    }

    pub fn try_get(&self, depth: usize, row: usize, col: usize) -> Option<T> {
        self.data.get([depth, row, col]).copied()
    }

    /// Overwrite the element at `(depth, row, col)`
    pub fn set(&mut self, depth: usize, row: usize, col: usize, value: T) {
        self.data[[depth, row, col]] = value;
    }

    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Copy the matrix at `depth` out
    pub fn slice(&self, depth: usize) -> LinalgResult<Matrix<T>> {
        self.check_depth("Tensor3::slice", depth)?;
        Ok(Matrix::from_array(
            self.data.index_axis(Axis(0), depth).to_owned(),
        ))
    }

    /// Overwrite the matrix at `depth`
    pub fn set_slice(&mut self, depth: usize, slice: &Matrix<T>) -> LinalgResult<()> {
        self.check_depth("Tensor3::set_slice", depth)?;
        ensure_same_shape(
            "Tensor3::set_slice",
            &[self.rows(), self.cols()],
            &[slice.rows(), slice.cols()],
        )?;
        self.data
            .index_axis_mut(Axis(0), depth)
            .assign(slice.as_array());
        Ok(())
    }

    fn check_depth(&self, operation: &str, depth: usize) -> LinalgResult<()> {
        if depth >= self.depth() {
            return Err(LinalgError::invalid_argument(
                operation,
                format!("slice {} out of range for depth {}", depth, self.depth()),
            ));
        }
        Ok(())
    }

    /// All slices, front to back
    pub fn to_matrices(&self) -> Vec<Matrix<T>> {
        self.data
            .axis_iter(Axis(0))
            .map(|s| Matrix::from_array(s.to_owned()))
            .collect()
    }

    /// Row-major concatenation of every slice
    pub fn flatten(&self) -> Vector<T> {
        Vector::from_array(self.data.iter().copied().collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Apply `f` to every element, returning a new tensor
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T,
    {
        Self {
            data: self.data.mapv(f),
        }
    }

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
        let mut out = Array3::zeros(self.data.raw_dim());
        Zip::from(&mut out)
            .and(&self.data)
            .and(&other.data)
            .for_each(|o, &a, &b| *o = f(a, b));
        Ok(Self { data: out })
    }

    pub fn addition(&self, other: &Self) -> LinalgResult<Self> {
        self.zip_with(other, "addition", |a, b| a + b)
    }

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

    pub fn max_elementwise(&self, other: &Self) -> LinalgResult<Self> {
        self.zip_with(other, "max_elementwise", |a, b| if a > b { a } else { b })
    }

    pub fn scalar_multiply(&self, scalar: T) -> Self {
        self.map(|x| scalar * x)
    }

    pub fn scalar_add(&self, scalar: T) -> Self {
        self.map(|x| scalar + x)
    }

    pub fn scalar_multiply_inplace(&mut self, scalar: T) {
        self.map_inplace(|x| scalar * x);
    }

    pub fn scalar_add_inplace(&mut self, scalar: T) {
        self.map_inplace(|x| scalar + x);
    }

    /// Sum of all elements
    pub fn sum(&self) -> T {
        self.data.iter().copied().sum()
    }

    pub fn is_equal_approx(&self, other: &Self, tolerance: T) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| (a - b).abs() <= tolerance)
    }
}

impl<T> Index<(usize, usize, usize)> for Tensor3<T> {
    type Output = T;

    fn index(&self, (d, i, j): (usize, usize, usize)) -> &T {
        &self.data[[d, i, j]]
    }
}

impl<T> IndexMut<(usize, usize, usize)> for Tensor3<T> {
    fn index_mut(&mut self, (d, i, j): (usize, usize, usize)) -> &mut T {
        &mut self.data[[d, i, j]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting(depth: usize, rows: usize, cols: usize) -> Tensor3<f64> {
        let n = depth * rows * cols;
        Tensor3::from_vec(depth, rows, cols, (0..n).map(|x| x as f64).collect()).unwrap()
    }

    #[test]
    fn test_shape_and_indexing() {
        let mut t = counting(2, 3, 4);
        assert_eq!(t.shape(), (2, 3, 4));
        assert_eq!(t.len(), 24);
        assert_eq!(t.get(1, 0, 0), 12.0);
        t[(1, 2, 3)] = -1.0;
        assert_eq!(t.get(1, 2, 3), -1.0);
        assert_eq!(t.try_get(2, 0, 0), None);
    }

    #[test]
    fn test_from_matrices_rejects_mixed_shapes() {
        let err = Tensor3::from_matrices(&[Matrix::<f64>::zeros(2, 2), Matrix::zeros(2, 3)])
            .unwrap_err();
        assert!(matches!(err, LinalgError::DimensionMismatch { .. }));
        assert!(matches!(
            Tensor3::<f64>::from_matrices(&[]),
            Err(LinalgError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_slices() {
        let mut t = counting(2, 2, 2);
        assert_eq!(
            t.slice(1).unwrap().to_rows(),
            vec![vec![4.0, 5.0], vec![6.0, 7.0]]
        );
        t.set_slice(0, &Matrix::identity(2)).unwrap();
        assert_eq!(t.slice(0).unwrap(), Matrix::identity(2));
        assert!(t.slice(2).is_err());
        assert!(t.set_slice(0, &Matrix::zeros(3, 3)).is_err());
        assert_eq!(t.to_matrices().len(), 2);
    }

    #[test]
    fn test_binary_and_scalar_ops() {
        let a = counting(2, 2, 2);
        let b = Tensor3::full(2, 2, 2, 2.0);
        assert_eq!(a.addition(&b).unwrap().get(1, 1, 1), 9.0);
        assert_eq!(a.subtraction(&b).unwrap().get(0, 0, 0), -2.0);
        assert_eq!(a.hadamard(&b).unwrap().sum(), 2.0 * a.sum());
        assert_eq!(a.division_elementwise(&b).unwrap().get(0, 1, 0), 1.0);
        assert_eq!(a.max_elementwise(&b).unwrap().get(0, 0, 1), 2.0);
        assert_eq!(a.scalar_multiply(1.0), a);
        assert_eq!(a.scalar_add(1.0).get(0, 0, 0), 1.0);

        assert!(a.addition(&Tensor3::zeros(2, 2, 3)).is_err());
    }

    #[test]
    fn test_flatten_order() {
        let t = counting(2, 1, 2);
        assert_eq!(t.flatten().to_vec(), vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde_round_trip() {
        let t = counting(2, 3, 2);

        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("\"dim\":[2,3,2]"));

        let deserialized: Tensor3<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, t);
        assert_eq!(deserialized.get(1, 2, 1), 11.0);
    }
}
