//! Numerical configuration shared by the decompositions
//!
//! [`DecompConfig`] carries the knobs the iterative and strict routines read:
//! the Jacobi iteration cap, the zero-snapping tolerance, the singularity
//! tolerance and whether degenerate inputs are reported as errors.
//!
//! # Environment Variables
//!
//! [`DecompConfig::from_env`] starts from the defaults and overrides them with:
//!
//! - `DENSELA_MAX_ITERATIONS`: fixed Jacobi rotation cap (e.g. `5000`)
//! - `DENSELA_ZERO_TOLERANCE`: off-diagonal zero tolerance (e.g. `1e-12`)
//! - `DENSELA_STRICT`: `1`/`true` to fail fast on degenerate input
//!
//! Unparseable values are ignored.
//!
//! # Example
//!
//! ```
//! use densela_decomp::DecompConfig;
//!
//! let cfg = DecompConfig::default()
//!     .with_max_iterations(200)
//!     .with_zero_tolerance(1e-12)
//!     .strict();
//!
//! assert_eq!(cfg.max_iterations_for(10), 200);
//! assert!(cfg.strict);
//! ```

use densela_core::Scalar;

/// Default off-diagonal tolerance below which Jacobi snaps entries to zero
pub const DEFAULT_ZERO_TOLERANCE: f64 = 1e-10;

/// Default `|det|` / pivot threshold used by the strict routines
pub const DEFAULT_SINGULAR_TOLERANCE: f64 = 1e-12;

/// Lower bound of the automatic Jacobi rotation cap
pub const MIN_AUTO_ITERATIONS: usize = 1000;

/// Multiple of `ε` below which Jacobi treats a relative entry as round-off
pub const ROUNDOFF_FACTOR: f64 = 100.0;

/// Configuration for the decomposition routines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecompConfig {
    /// Jacobi rotation cap. `None` resolves to `max(1000, 50·n²)` per call.
    pub max_iterations: Option<usize>,
    /// Off-diagonal entries with `|x| <= zero_tolerance·‖A‖_F` are treated as
    /// zero. Raised to `ROUNDOFF_FACTOR·ε` when that is larger.
    pub zero_tolerance: f64,
    /// Determinants, pivots and column norms at or below this are degenerate
    pub singular_tolerance: f64,
    /// Report degenerate inputs as `NumericalDegeneracy` instead of
    /// propagating `NaN`/`inf`
    pub strict: bool,
}

impl Default for DecompConfig {
    fn default() -> Self {
        Self {
            max_iterations: None,
            zero_tolerance: DEFAULT_ZERO_TOLERANCE,
            singular_tolerance: DEFAULT_SINGULAR_TOLERANCE,
            strict: false,
        }
    }
}

impl DecompConfig {
    /// Defaults overridden by `DENSELA_*` environment variables
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Some(n) = env_parse::<usize>("DENSELA_MAX_ITERATIONS") {
            cfg.max_iterations = Some(n);
        }
        if let Some(tol) = env_parse::<f64>("DENSELA_ZERO_TOLERANCE") {
            if tol.is_finite() && tol >= 0.0 {
                cfg.zero_tolerance = tol;
            }
        }
        if let Ok(flag) = std::env::var("DENSELA_STRICT") {
            cfg.strict = matches!(
                flag.trim().to_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }

        cfg
    }

    /// Use a fixed Jacobi rotation cap
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    pub fn with_zero_tolerance(mut self, tolerance: f64) -> Self {
        self.zero_tolerance = tolerance;
        self
    }

    pub fn with_singular_tolerance(mut self, tolerance: f64) -> Self {
        self.singular_tolerance = tolerance;
        self
    }

    /// Enable strict degeneracy checks
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Rotation cap for an `n × n` input
    pub fn max_iterations_for(&self, n: usize) -> usize {
        self.max_iterations
            .unwrap_or_else(|| MIN_AUTO_ITERATIONS.max(50 * n * n))
    }

    pub(crate) fn zero_tol<T: Scalar>(&self) -> T {
        T::from_f64_lossy(self.zero_tolerance)
    }

    /// Zero threshold for a matrix whose Frobenius norm is `scale`
    ///
    /// `max(zero_tolerance, ROUNDOFF_FACTOR·ε)·scale`, where `ε` is the
    /// machine epsilon of `T`. Scaling both bounds by the norm makes the
    /// Jacobi stopping rule independent of the magnitude of the input.
    ///
    /// ```
    /// use densela_decomp::DecompConfig;
    ///
    /// let cfg = DecompConfig::default();
    /// assert_eq!(cfg.zero_tol_for(1.0_f64), 1e-10);
    /// assert!(cfg.zero_tol_for(1.0_f32) > 1e-6);
    /// assert!(cfg.zero_tol_for(1e7_f64) > 1e-4);
    /// assert!(cfg.zero_tol_for(1e-3_f64) < 1e-12);
    /// ```
    pub fn zero_tol_for<T: Scalar>(&self, scale: T) -> T {
        let roundoff = T::from_f64_lossy(ROUNDOFF_FACTOR) * T::epsilon();
        self.zero_tol::<T>().max(roundoff) * scale.abs()
    }

    pub(crate) fn singular_tol<T: Scalar>(&self) -> T {
        T::from_f64_lossy(self.singular_tolerance)
    }
}

fn env_parse<V: std::str::FromStr>(key: &str) -> Option<V> {
    std::env::var(key).ok()?.trim().parse().ok()
}
