//! Scalar element trait shared by every container

use scirs2_core::numeric::{Float, NumAssign, NumCast};
use std::fmt::{Debug, Display};
use std::iter::Sum;

/// Floating-point element type usable in densela containers.
///
/// Blanket-implemented for every type satisfying the bounds, which in
/// practice means `f32` and `f64`.
pub trait Scalar:
    Float + NumAssign + NumCast + Sum + Debug + Display + Send + Sync + 'static
{
    /// Convert an `f64` constant into `Self`.
    ///
    /// Every `Float` type can represent (an approximation of) any finite
    /// `f64`, so this never fails for the finite constants used internally.
    fn from_f64_lossy(value: f64) -> Self {
        <Self as NumCast>::from(value).unwrap_or_else(Self::nan)
    }

    /// Widen to `f64` for routines that only exist in double precision.
    fn to_f64_lossy(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    /// Error function, evaluated in double precision.
    fn erf(self) -> Self {
        Self::from_f64_lossy(libm::erf(self.to_f64_lossy()))
    }
}

impl<T> Scalar for T where
    T: Float + NumAssign + NumCast + Sum + Debug + Display + Send + Sync + 'static
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erf_values() {
        assert!(Scalar::erf(0.0_f64).abs() < 1e-15);
        assert!((Scalar::erf(1.0_f64) - 0.842_700_792_949_714_9).abs() < 1e-12);
        assert!((Scalar::erf(-1.0_f32) + 0.842_700_8).abs() < 1e-6);
    }

    #[test]
    fn test_lossy_conversions() {
        assert_eq!(<f32 as Scalar>::from_f64_lossy(0.5), 0.5_f32);
        assert_eq!(2.0_f32.to_f64_lossy(), 2.0);
    }
}
