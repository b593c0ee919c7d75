//! Settings for the dense linear-algebra routines.

use crate::core::{
    error::{FrobeniusError, Result},
    types::Scalar,
};
use num_traits::Float;

/// QR iterations allowed per eigenvalue by default, as in EISPACK's `hqr`.
const DEFAULT_ITERATIONS_PER_EIGENVALUE: usize = 30;

/// Settings for the Schur decomposition behind eigenvalue computation.
///
/// The QR iteration budget grows linearly with the matrix size, so every
/// decomposition terminates: a matrix that exhausts it is reported as
/// `SolverFailed` instead of iterating forever.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig<T> {
    /// Convergence tolerance of the QR iterations
    pub tolerance: T,
    /// QR iterations allowed per eigenvalue
    pub iterations_per_eigenvalue: usize,
}

impl<T: Scalar> Default for SolverConfig<T> {
    fn default() -> Self {
        Self {
            tolerance: T::EPSILON,
            iterations_per_eigenvalue: DEFAULT_ITERATIONS_PER_EIGENVALUE,
        }
    }
}

impl<T: Scalar> SolverConfig<T> {
    /// Total QR iteration budget for an `n`×`n` matrix, never zero.
    pub fn iteration_limit(&self, n: usize) -> usize {
        self.iterations_per_eigenvalue.saturating_mul(n).max(1)
    }

    /// Check that the tolerance is finite and positive and the iteration
    /// budget is nonzero.
    pub fn validate(&self) -> Result<()> {
        if !<T as Float>::is_finite(self.tolerance) || self.tolerance <= T::zero() {
            return Err(FrobeniusError::invalid_configuration(
                "tolerance",
                format!("must be finite and positive, got {}", self.tolerance),
            ));
        }
        if self.iterations_per_eigenvalue == 0 {
            return Err(FrobeniusError::invalid_configuration(
                "iterations_per_eigenvalue",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// How the determinant magnitude is compared when checking singularity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SingularityThreshold<T> {
    /// Compare against the machine epsilon of the scalar type.
    ///
    /// Does not scale with matrix size or norm, so large or badly scaled
    /// matrices can be misclassified.
    #[default]
    MachineEpsilon,
    /// Compare against a fixed absolute value.
    Absolute(T),
}

impl<T: Scalar> SingularityThreshold<T> {
    /// Threshold value the determinant magnitude must exceed.
    pub fn value(&self) -> T {
        match *self {
            Self::MachineEpsilon => T::EPSILON,
            Self::Absolute(t) => t,
        }
    }
}

/// Settings for the nonsingularity check.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SingularityConfig<T> {
    /// Determinant magnitude threshold
    pub threshold: SingularityThreshold<T>,
}

impl<T: Scalar> SingularityConfig<T> {
    /// Check that an absolute threshold is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        if let SingularityThreshold::Absolute(t) = self.threshold {
            if !<T as Float>::is_finite(t) || t < T::zero() {
                return Err(FrobeniusError::invalid_configuration(
                    "threshold",
                    format!("must be finite and non-negative, got {}", t),
                ));
            }
        }
        Ok(())
    }
}

/// Builder for a custom singularity configuration.
pub struct SingularityConfigBuilder<T> {
    config: SingularityConfig<T>,
}

impl<T: Scalar> SingularityConfigBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: SingularityConfig {
                threshold: SingularityThreshold::MachineEpsilon,
            },
        }
    }

    /// Use a fixed absolute threshold instead of machine epsilon.
    pub fn absolute_threshold(mut self, threshold: T) -> Self {
        self.config.threshold = SingularityThreshold::Absolute(threshold);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<SingularityConfig<T>> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl<T: Scalar> Default for SingularityConfigBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
