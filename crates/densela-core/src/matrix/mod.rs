//! Dense matrix type
//!
//! [`Matrix`] stores a `(rows, cols)` grid of scalars in a row-major
//! `Array2`. The type is split into sub-modules the same way the operations
//! are documented:
//!
//! - this module: construction, element/row access, shape queries
//! - `elementwise`: shape-preserving binary and scalar operators
//! - `algebra`: transpose, matrix products, traces, norms

mod algebra;
mod elementwise;

use crate::error::{LinalgError, LinalgResult};
use crate::scalar::Scalar;
use crate::vector::Vector;
use scirs2_core::ndarray_ext::{Array1, Array2, Axis};
use std::ops::{Index, IndexMut};

/// Dense row-major matrix
///
/// Element access is by `(row, col)`:
///
/// ```
/// use densela_core::Matrix;
///
/// let mut m = Matrix::<f64>::zeros(2, 3);
/// m[(1, 2)] = 4.0;
/// assert_eq!(m.get(1, 2), 4.0);
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound(serialize = "T: serde::Serialize")))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "T: serde::Deserialize<'de>"))
)]
pub struct Matrix<T> {
    pub(crate) data: Array2<T>,
}

impl<T: Scalar> Matrix<T> {
    /// Create a zero-filled `rows × cols` matrix
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: Array2::zeros((rows, cols)),
        }
    }

    /// Create a `rows × cols` matrix of ones
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self::full(rows, cols, T::one())
    }

    /// Create a `rows × cols` matrix filled with `value`
    pub fn full(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: Array2::from_elem((rows, cols), value),
        }
    }

    /// `n × n` identity matrix
    pub fn identity(n: usize) -> Self {
        Self {
            data: Array2::eye(n),
        }
    }

    /// Square matrix with `diagonal` on its main diagonal
    pub fn diag(diagonal: &Vector<T>) -> Self {
        Self {
            data: Array2::from_diag(&diagonal.data),
        }
    }

    /// Create a matrix from a flat row-major buffer
    ///
    /// # Errors
    ///
    /// - [`LinalgError::InvalidArgument`] when `data` is empty
    /// - [`LinalgError::DimensionMismatch`] when `data.len() != rows * cols`
    ///
    /// # Examples
    ///
    /// ```
    /// use densela_core::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m.get(1, 0), 3.0);
    ///
    /// assert!(Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0]).is_err());
    /// ```
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> LinalgResult<Self> {
        if data.is_empty() {
            return Err(LinalgError::invalid_argument(
                "Matrix::from_vec",
                "matrix must contain at least one element",
            ));
        }
        if data.len() != rows * cols {
            return Err(LinalgError::dimension_mismatch(
                "Matrix::from_vec",
                vec![rows * cols],
                vec![data.len()],
            ));
        }
        let data = Array2::from_shape_vec((rows, cols), data)
            .map_err(|e| LinalgError::invalid_argument("Matrix::from_vec", e.to_string()))?;
        Ok(Self { data })
    }

    /// Create a matrix from nested rows
    ///
    /// # Errors
    ///
    /// - [`LinalgError::InvalidArgument`] when there are no rows or the rows are empty
    /// - [`LinalgError::DimensionMismatch`] when the rows have different lengths
    ///
    /// # Examples
    ///
    /// ```
    /// use densela_core::Matrix;
    ///
    /// let m = Matrix::from_rows(&[vec![4.0, 7.0], vec![2.0, 6.0]]).unwrap();
    /// assert_eq!(m.shape(), (2, 2));
    /// assert_eq!(m.get(0, 1), 7.0);
    /// ```
    pub fn from_rows(rows: &[Vec<T>]) -> LinalgResult<Self> {
        let first = rows.first().ok_or_else(|| {
            LinalgError::invalid_argument("Matrix::from_rows", "at least one row is required")
        })?;
        let cols = first.len();
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(LinalgError::dimension_mismatch(
                    "Matrix::from_rows",
                    vec![cols],
                    vec![row.len()],
                ));
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(rows.len(), cols, data)
    }

    /// Stack equal-length vectors as the rows of a matrix
    pub fn from_row_vectors(rows: &[Vector<T>]) -> LinalgResult<Self> {
        let nested: Vec<Vec<T>> = rows.iter().map(|r| r.to_vec()).collect();
        Self::from_rows(&nested)
    }

    /// Wrap an existing `Array2`
    pub fn from_array(array: Array2<T>) -> Self {
        Self { data: array }
    }

    /// Borrow the underlying array
    pub fn as_array(&self) -> &Array2<T> {
        &self.data
    }

    /// Mutably borrow the underlying array
    pub fn as_array_mut(&mut self) -> &mut Array2<T> {
        &mut self.data
    }

    /// Consume into the underlying array
    pub fn into_array(self) -> Array2<T> {
        self.data
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// Total number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` when either dimension is zero
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// `true` for a non-empty square matrix
    pub fn is_square(&self) -> bool {
        !self.is_empty() && self.rows() == self.cols()
    }

    /// Element at `(row, col)`
    ///
    /// # Panics
    ///
    /// Panics if the index is out of range.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[[row, col]]
    }

    /// Element at `(row, col)`, or `None` when out of range
    pub fn try_get(&self, row: usize, col: usize) -> Option<T> {
        self.data.get([row, col]).copied()
    }

    /// Overwrite the element at `(row, col)`
    ///
    /// # Panics
    ///
    /// Panics if the index is out of range.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[[row, col]] = value;
    }

    /// Set every element to `value`
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Change the shape, keeping the overlapping top-left block and
    /// zero-filling the rest
    pub fn resize(&mut self, rows: usize, cols: usize) {
        if (rows, cols) == self.shape() {
            return;
        }
        let mut data = Array2::zeros((rows, cols));
        for i in 0..rows.min(self.rows()) {
            for j in 0..cols.min(self.cols()) {
                data[[i, j]] = self.data[[i, j]];
            }
        }
        self.data = data;
    }

    /// Copy row `row` into `out`, reusing its allocation when the length
    /// already matches
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows()`.
    pub fn row_into(&self, row: usize, out: &mut Vector<T>) {
        if out.len() != self.cols() {
            out.data = Array1::zeros(self.cols());
        }
        out.data.assign(&self.data.row(row));
    }

    /// Copy row `row` out as a new vector
    pub fn row(&self, row: usize) -> Vector<T> {
        Vector::from_array(self.data.row(row).to_owned())
    }

    /// Copy column `col` out as a new vector
    pub fn column(&self, col: usize) -> Vector<T> {
        Vector::from_array(self.data.column(col).to_owned())
    }

    /// Overwrite row `row` with `values`
    ///
    /// # Errors
    ///
    /// - [`LinalgError::InvalidArgument`] when `row` is out of range
    /// - [`LinalgError::DimensionMismatch`] when `values.len() != cols()`
    pub fn set_row(&mut self, row: usize, values: &Vector<T>) -> LinalgResult<()> {
        if row >= self.rows() {
            return Err(LinalgError::invalid_argument(
                "Matrix::set_row",
                format!("row {} out of range for {} rows", row, self.rows()),
            ));
        }
        if values.len() != self.cols() {
            return Err(LinalgError::dimension_mismatch(
                "Matrix::set_row",
                vec![self.cols()],
                vec![values.len()],
            ));
        }
        self.data.row_mut(row).assign(&values.data);
        Ok(())
    }

    /// Overwrite column `col` with `values`
    pub fn set_column(&mut self, col: usize, values: &Vector<T>) -> LinalgResult<()> {
        if col >= self.cols() {
            return Err(LinalgError::invalid_argument(
                "Matrix::set_column",
                format!("column {} out of range for {} columns", col, self.cols()),
            ));
        }
        if values.len() != self.rows() {
            return Err(LinalgError::dimension_mismatch(
                "Matrix::set_column",
                vec![self.rows()],
                vec![values.len()],
            ));
        }
        self.data.column_mut(col).assign(&values.data);
        Ok(())
    }

    /// Copy the main diagonal out as a vector
    pub fn diagonal(&self) -> Vector<T> {
        Vector::from_array(self.data.diag().to_owned())
    }

    /// Row-major concatenation of all rows
    ///
    /// ```
    /// use densela_core::Matrix;
    ///
    /// let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m.flatten().to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn flatten(&self) -> Vector<T> {
        Vector::from_array(self.data.iter().copied().collect())
    }

    /// Copy every row out as a vector
    pub fn to_row_vectors(&self) -> Vec<Vector<T>> {
        self.data
            .axis_iter(Axis(0))
            .map(|r| Vector::from_array(r.to_owned()))
            .collect()
    }

    /// Copy into nested rows
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.data
            .axis_iter(Axis(0))
            .map(|r| r.iter().copied().collect())
            .collect()
    }

    /// Iterate over elements in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[[row, col]]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[[row, col]]
    }
}
