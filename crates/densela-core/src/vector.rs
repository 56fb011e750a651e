//! Dense vector type
//!
//! [`Vector`] is a fixed-length, contiguous sequence of scalars backed by
//! `scirs2_core::ndarray_ext::Array1`. It has plain value semantics: `clone()`
//! produces an independent deep copy.

use crate::error::{ensure_same_shape, LinalgError, LinalgResult};
use crate::scalar::Scalar;
use scirs2_core::ndarray_ext::{Array1, Zip};
use std::ops::{Index, IndexMut};

/// Dense one-dimensional vector
///
/// # Examples
///
/// ```
/// use densela_core::Vector;
///
/// let a = Vector::from_vec(vec![1.0, 2.0, 3.0]).unwrap();
/// let b = Vector::from_vec(vec![4.0, 5.0, 6.0]).unwrap();
///
/// assert_eq!(a.dot(&b).unwrap(), 32.0);
/// assert_eq!(a.addition(&b).unwrap().to_vec(), vec![5.0, 7.0, 9.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound(serialize = "T: serde::Serialize")))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "T: serde::Deserialize<'de>"))
)]
pub struct Vector<T> {
    pub(crate) data: Array1<T>,
}

impl<T: Scalar> Vector<T> {
    /// Create a zero-filled vector of length `n`
    pub fn zeros(n: usize) -> Self {
        Self {
            data: Array1::zeros(n),
        }
    }

    /// Create a vector of length `n` filled with ones
    pub fn ones(n: usize) -> Self {
        Self::full(n, T::one())
    }

    /// Create a vector of length `n` filled with `value`
    pub fn full(n: usize, value: T) -> Self {
        Self {
            data: Array1::from_elem(n, value),
        }
    }

    /// Create a vector from owned data
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidArgument`] when `data` is empty.
    pub fn from_vec(data: Vec<T>) -> LinalgResult<Self> {
        if data.is_empty() {
            return Err(LinalgError::invalid_argument(
                "Vector::from_vec",
                "vector must contain at least one element",
            ));
        }
        Ok(Self {
            data: Array1::from_vec(data),
        })
    }

    /// Create a vector by copying a slice
    pub fn from_slice(data: &[T]) -> LinalgResult<Self> {
        Self::from_vec(data.to_vec())
    }

    /// Wrap an existing `Array1`
    pub fn from_array(array: Array1<T>) -> Self {
        Self { data: array }
    }

    /// Concatenate a sequence of vectors end to end
    ///
    /// ```
    /// use densela_core::Vector;
    ///
    /// let parts = [
    ///     Vector::from_vec(vec![1.0, 2.0]).unwrap(),
    ///     Vector::from_vec(vec![3.0]).unwrap(),
    /// ];
    /// assert_eq!(Vector::concat(&parts).to_vec(), vec![1.0, 2.0, 3.0]);
    /// ```
    pub fn concat(parts: &[Vector<T>]) -> Self {
        let total: usize = parts.iter().map(|p| p.len()).sum();
        let mut data = Vec::with_capacity(total);
        for part in parts {
            data.extend(part.data.iter().copied());
        }
        Self {
            data: Array1::from_vec(data),
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` when the vector has no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn get(&self, index: usize) -> T {
        self.data[index]
    }

    /// Element at `index`, or `None` when out of range
    pub fn try_get(&self, index: usize) -> Option<T> {
        self.data.get(index).copied()
    }

    /// Overwrite the element at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn set(&mut self, index: usize, value: T) {
        self.data[index] = value;
    }

    /// Set every element to `value`
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Change the length, keeping the existing prefix and zero-filling the rest
    pub fn resize(&mut self, n: usize) {
        if n == self.len() {
            return;
        }
        let mut data = Array1::zeros(n);
        let keep = n.min(self.len());
        for i in 0..keep {
            data[i] = self.data[i];
        }
        self.data = data;
    }

    /// Borrow the underlying array
    pub fn as_array(&self) -> &Array1<T> {
        &self.data
    }

    /// Mutably borrow the underlying array
    pub fn as_array_mut(&mut self) -> &mut Array1<T> {
        &mut self.data
    }

    /// Consume into the underlying array
    pub fn into_array(self) -> Array1<T> {
        self.data
    }

    /// Copy the elements into a `Vec`
    pub fn to_vec(&self) -> Vec<T> {
        self.data.iter().copied().collect()
    }

    /// Iterate over elements
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Apply `f` to every element, returning a new vector
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
        ensure_same_shape(operation, &[self.len()], &[other.len()])?;
        let mut out = Array1::zeros(self.len());
        Zip::from(&mut out)
            .and(&self.data)
            .and(&other.data)
            .for_each(|o, &a, &b| *o = f(a, b));
        Ok(Self { data: out })
    }

    fn zip_into<F>(&self, other: &Self, out: &mut Self, operation: &str, f: F) -> LinalgResult<()>
    where
        F: Fn(T, T) -> T,
    {
        ensure_same_shape(operation, &[self.len()], &[other.len()])?;
        if out.len() != self.len() {
            out.data = Array1::zeros(self.len());
        }
        Zip::from(&mut out.data)
            .and(&self.data)
            .and(&other.data)
            .for_each(|o, &a, &b| *o = f(a, b));
        Ok(())
    }

    /// Elementwise sum `a + b`
    pub fn addition(&self, other: &Self) -> LinalgResult<Self> {
        self.zip_with(other, "addition", |a, b| a + b)
    }

    /// Elementwise difference `a - b`
    pub fn subtraction(&self, other: &Self) -> LinalgResult<Self> {
        self.zip_with(other, "subtraction", |a, b| a - b)
    }

    /// Elementwise (Hadamard) product `a ⊙ b`
    pub fn hadamard(&self, other: &Self) -> LinalgResult<Self> {
        self.zip_with(other, "hadamard", |a, b| a * b)
    }

    /// Elementwise quotient `a ⊘ b`. Division by zero yields `inf`/`NaN`.
    pub fn division_elementwise(&self, other: &Self) -> LinalgResult<Self> {
        self.zip_with(other, "division_elementwise", |a, b| a / b)
    }

    /// Elementwise maximum
    pub fn max_elementwise(&self, other: &Self) -> LinalgResult<Self> {
        self.zip_with(other, "max_elementwise", |a, b| if a > b { a } else { b })
    }

    /// Write `a + b` into `out`, resizing it if needed
    pub fn addition_into(&self, other: &Self, out: &mut Self) -> LinalgResult<()> {
        self.zip_into(other, out, "addition", |a, b| a + b)
    }

    /// Write `a - b` into `out`, resizing it if needed
    pub fn subtraction_into(&self, other: &Self, out: &mut Self) -> LinalgResult<()> {
        self.zip_into(other, out, "subtraction", |a, b| a - b)
    }

    /// Write `a ⊙ b` into `out`, resizing it if needed
    pub fn hadamard_into(&self, other: &Self, out: &mut Self) -> LinalgResult<()> {
        self.zip_into(other, out, "hadamard", |a, b| a * b)
    }

    /// In-place `self += other`
    pub fn add_assign(&mut self, other: &Self) -> LinalgResult<()> {
        ensure_same_shape("add_assign", &[self.len()], &[other.len()])?;
        self.data.zip_mut_with(&other.data, |a, &b| *a += b);
        Ok(())
    }

    /// In-place `self -= other`
    pub fn sub_assign(&mut self, other: &Self) -> LinalgResult<()> {
        ensure_same_shape("sub_assign", &[self.len()], &[other.len()])?;
        self.data.zip_mut_with(&other.data, |a, &b| *a -= b);
        Ok(())
    }

    /// `scalar * v`
    pub fn scalar_multiply(&self, scalar: T) -> Self {
        self.map(|x| scalar * x)
    }

    /// `scalar + v`
    pub fn scalar_add(&self, scalar: T) -> Self {
        self.map(|x| scalar + x)
    }

    /// In-place `v *= scalar`
    pub fn scalar_multiply_inplace(&mut self, scalar: T) {
        self.map_inplace(|x| scalar * x);
    }

    /// In-place `v += scalar`
    pub fn scalar_add_inplace(&mut self, scalar: T) {
        self.map_inplace(|x| scalar + x);
    }

    /// Write `scalar * v` into `out`, resizing it if needed
    pub fn scalar_multiply_into(&self, scalar: T, out: &mut Self) {
        if out.len() != self.len() {
            out.data = Array1::zeros(self.len());
        }
        Zip::from(&mut out.data)
            .and(&self.data)
            .for_each(|o, &a| *o = scalar * a);
    }

    /// Write `scalar + v` into `out`, resizing it if needed
    pub fn scalar_add_into(&self, scalar: T, out: &mut Self) {
        if out.len() != self.len() {
            out.data = Array1::zeros(self.len());
        }
        Zip::from(&mut out.data)
            .and(&self.data)
            .for_each(|o, &a| *o = scalar + a);
    }

    /// Inner product `Σ a_i b_i`
    pub fn dot(&self, other: &Self) -> LinalgResult<T> {
        ensure_same_shape("dot", &[self.len()], &[other.len()])?;
        Ok(self.data.dot(&other.data))
    }

    /// Sum of all elements
    pub fn sum(&self) -> T {
        self.data.iter().copied().sum()
    }

    /// Largest element
    pub fn max(&self) -> LinalgResult<T> {
        self.fold_nonempty("max", |acc, x| if x > acc { x } else { acc })
    }

    /// Smallest element
    pub fn min(&self) -> LinalgResult<T> {
        self.fold_nonempty("min", |acc, x| if x < acc { x } else { acc })
    }

    fn fold_nonempty<F>(&self, operation: &str, f: F) -> LinalgResult<T>
    where
        F: Fn(T, T) -> T,
    {
        let mut iter = self.data.iter().copied();
        let first = iter
            .next()
            .ok_or_else(|| LinalgError::invalid_argument(operation, "vector is empty"))?;
        Ok(iter.fold(first, f))
    }

    /// Squared Euclidean norm `Σ x²`
    pub fn norm_sq(&self) -> T {
        self.data.iter().map(|&x| x * x).sum()
    }

    /// Euclidean norm `‖v‖₂`
    pub fn norm_2(&self) -> T {
        self.norm_sq().sqrt()
    }

    /// `‖a - b‖₂`
    pub fn euclidean_distance(&self, other: &Self) -> LinalgResult<T> {
        self.euclidean_distance_squared(other).map(|d| d.sqrt())
    }

    /// `‖a - b‖₂²`
    pub fn euclidean_distance_squared(&self, other: &Self) -> LinalgResult<T> {
        ensure_same_shape("euclidean_distance", &[self.len()], &[other.len()])?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| (a - b) * (a - b))
            .sum())
    }

    /// `true` when both vectors have the same length and every pair of
    /// elements differs by at most `tolerance`
    pub fn is_equal_approx(&self, other: &Self, tolerance: T) -> bool {
        self.len() == other.len()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| (a - b).abs() <= tolerance)
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(data: &[f64]) -> Vector<f64> {
        Vector::from_slice(data).unwrap()
    }

    #[test]
    fn test_from_vec_rejects_empty() {
        let err = Vector::<f64>::from_vec(vec![]).unwrap_err();
        assert!(matches!(err, LinalgError::InvalidArgument { .. }));
    }

    #[test]
    fn test_binary_ops() {
        let a = v(&[1.0, 2.0, 3.0]);
        let b = v(&[4.0, 5.0, 6.0]);

        assert_eq!(a.addition(&b).unwrap().to_vec(), vec![5.0, 7.0, 9.0]);
        assert_eq!(b.subtraction(&a).unwrap().to_vec(), vec![3.0, 3.0, 3.0]);
        assert_eq!(a.hadamard(&b).unwrap().to_vec(), vec![4.0, 10.0, 18.0]);
        assert_eq!(
            b.division_elementwise(&a).unwrap().to_vec(),
            vec![4.0, 2.5, 2.0]
        );
        assert_eq!(
            a.max_elementwise(&v(&[0.0, 5.0, 3.0])).unwrap().to_vec(),
            vec![1.0, 5.0, 3.0]
        );
    }

    #[test]
    fn test_binary_length_mismatch() {
        let a = v(&[1.0, 2.0]);
        let b = v(&[1.0, 2.0, 3.0]);
        assert!(matches!(
            a.addition(&b),
            Err(LinalgError::DimensionMismatch { .. })
        ));
        assert!(a.dot(&b).is_err());
    }

    #[test]
    fn test_into_variants_resize_output() {
        let a = v(&[1.0, 2.0, 3.0]);
        let b = v(&[1.0, 1.0, 1.0]);
        let mut out = Vector::zeros(1);

        a.addition_into(&b, &mut out).unwrap();
        assert_eq!(out.to_vec(), vec![2.0, 3.0, 4.0]);

        a.subtraction_into(&b, &mut out).unwrap();
        assert_eq!(out.to_vec(), vec![0.0, 1.0, 2.0]);

        a.hadamard_into(&a, &mut out).unwrap();
        assert_eq!(out.to_vec(), vec![1.0, 4.0, 9.0]);

        a.scalar_multiply_into(2.0, &mut out);
        assert_eq!(out.to_vec(), vec![2.0, 4.0, 6.0]);

        a.scalar_add_into(-1.0, &mut out);
        assert_eq!(out.to_vec(), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_reductions() {
        let a = v(&[3.0, -4.0, 1.0]);
        assert_eq!(a.sum(), 0.0);
        assert_eq!(a.max().unwrap(), 3.0);
        assert_eq!(a.min().unwrap(), -4.0);
        assert_eq!(a.norm_sq(), 26.0);

        let b = v(&[3.0, 4.0]);
        assert_eq!(b.norm_2(), 5.0);
        assert_eq!(b.euclidean_distance(&v(&[0.0, 0.0])).unwrap(), 5.0);
        assert_eq!(
            b.euclidean_distance_squared(&v(&[0.0, 0.0])).unwrap(),
            25.0
        );

        assert!(Vector::<f64>::zeros(0).max().is_err());
    }

    #[test]
    fn test_scalar_ops() {
        let mut a = v(&[1.0, 2.0]);
        assert_eq!(a.scalar_multiply(3.0).to_vec(), vec![3.0, 6.0]);
        assert_eq!(a.scalar_add(1.0).to_vec(), vec![2.0, 3.0]);

        a.scalar_multiply_inplace(2.0);
        a.scalar_add_inplace(1.0);
        assert_eq!(a.to_vec(), vec![3.0, 5.0]);
    }

    #[test]
    fn test_resize_keeps_prefix() {
        let mut a = v(&[1.0, 2.0, 3.0]);
        a.resize(5);
        assert_eq!(a.to_vec(), vec![1.0, 2.0, 3.0, 0.0, 0.0]);
        a.resize(2);
        assert_eq!(a.to_vec(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_indexing() {
        let mut a = v(&[1.0, 2.0]);
        a[1] = 7.0;
        a.set(0, 3.0);
        assert_eq!(a.get(1), 7.0);
        assert_eq!(a[0], 3.0);
        assert_eq!(a.try_get(2), None);
    }

    #[test]
    fn test_assign_ops() {
        let mut a = v(&[1.0, 2.0]);
        a.add_assign(&v(&[1.0, 1.0])).unwrap();
        assert_eq!(a.to_vec(), vec![2.0, 3.0]);
        a.sub_assign(&v(&[2.0, 2.0])).unwrap();
        assert_eq!(a.to_vec(), vec![0.0, 1.0]);
        assert!(a.add_assign(&v(&[1.0])).is_err());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde_round_trip() {
        let a = v(&[1.5, -2.0, 3.25]);
        let json = serde_json::to_string(&a).unwrap();
        let deserialized: Vector<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, a);
    }
}
