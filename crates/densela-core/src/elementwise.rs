//! Unary elementwise maps shared by [`Vector`], [`Matrix`] and [`Tensor3`]
//!
//! Every map returns a freshly allocated container of the same shape.
//! Out-of-domain inputs follow IEEE semantics: `log(0) = -inf`,
//! `log(-1) = NaN`, `sqrt(-1) = NaN`.

use crate::matrix::Matrix;
use crate::scalar::Scalar;
use crate::tensor3::Tensor3;
use crate::vector::Vector;

macro_rules! impl_unary_maps {
    ($ty:ident) => {
        impl<T: Scalar> $ty<T> {
            /// Natural logarithm of every element
            pub fn log(&self) -> Self {
                self.map(|x| x.ln())
            }

            /// Base-10 logarithm of every element
            pub fn log10(&self) -> Self {
                self.map(|x| x.log10())
            }

            /// `e^x` of every element
            pub fn exp(&self) -> Self {
                self.map(|x| x.exp())
            }

            /// Error function of every element
            pub fn erf(&self) -> Self {
                self.map(Scalar::erf)
            }

            /// Square root of every element
            pub fn sqrt(&self) -> Self {
                self.map(|x| x.sqrt())
            }

            /// `x^(1/3)` of every element; negative inputs give `NaN`
            pub fn cbrt(&self) -> Self {
                let third = T::one() / T::from_f64_lossy(3.0);
                self.map(|x| x.powf(third))
            }

            /// Sine of every element
            pub fn sin(&self) -> Self {
                self.map(|x| x.sin())
            }

            /// Cosine of every element
            pub fn cos(&self) -> Self {
                self.map(|x| x.cos())
            }

            /// Absolute value of every element
            pub fn abs(&self) -> Self {
                self.map(|x| x.abs())
            }

            /// Round every element to the nearest integer, half away from zero
            pub fn round(&self) -> Self {
                self.map(|x| x.round())
            }

            /// Raise every element to the power `p`
            pub fn exponentiate(&self, p: T) -> Self {
                self.map(|x| x.powf(p))
            }
        }
    };
}

impl_unary_maps!(Vector);
impl_unary_maps!(Matrix);
impl_unary_maps!(Tensor3);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_maps() {
        let v = Vector::from_vec(vec![1.0_f64, 100.0]).unwrap();
        assert_eq!(v.log10().to_vec(), vec![0.0, 2.0]);
        assert_eq!(v.sqrt().to_vec(), vec![1.0, 10.0]);
        assert_eq!(v.exponentiate(2.0).to_vec(), vec![1.0, 10000.0]);
        assert!((v.log().get(0)).abs() < 1e-15);
    }

    #[test]
    fn test_matrix_maps() {
        let m = Matrix::from_rows(&[vec![-1.4_f64, 2.6], vec![0.0, 8.0]]).unwrap();
        assert_eq!(m.abs().to_rows(), vec![vec![1.4, 2.6], vec![0.0, 8.0]]);
        assert_eq!(m.round().to_rows(), vec![vec![-1.0, 3.0], vec![0.0, 8.0]]);

        let c = m.cbrt();
        assert!(c.get(0, 0).is_nan());
        assert!((c.get(1, 1) - 2.0).abs() < 1e-12);

        let e = m.exp();
        assert_eq!(e.get(1, 0), 1.0);
        assert_eq!(m.erf().get(1, 0), 0.0);
        assert_eq!(m.sin().get(1, 0), 0.0);
        assert_eq!(m.cos().get(1, 0), 1.0);
    }

    #[test]
    fn test_log_out_of_domain() {
        let v = Vector::from_vec(vec![0.0_f64, -1.0]).unwrap().log();
        assert_eq!(v.get(0), f64::NEG_INFINITY);
        assert!(v.get(1).is_nan());
    }

    #[test]
    fn test_tensor_maps_preserve_shape() {
        let t = Tensor3::<f64>::full(2, 3, 4, 4.0);
        let s = t.sqrt();
        assert_eq!(s.shape(), (2, 3, 4));
        assert!(s.iter().all(|&x| x == 2.0));
    }
}
