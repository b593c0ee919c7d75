//! Configuration of the coefficient perturbation used by the root finder.
//!
//! Roots are computed for a slightly perturbed copy of the coefficients.
//! The noise is drawn independently for each coefficient from a
//! [`NoiseDistribution`] and multiplied by a scale (1e-10 by default).

use crate::core::{
    error::{FrobeniusError, Result},
    types::Scalar,
};
use num_traits::Float;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Distribution the raw (unscaled) noise samples are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NoiseDistribution {
    /// Uniform on the half-open interval [0, 1).
    #[default]
    Uniform,
    /// Standard normal N(0, 1).
    Normal,
}

impl NoiseDistribution {
    /// Draw one unscaled sample.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            Self::Uniform => rng.gen::<f64>(),
            Self::Normal => StandardNormal.sample(rng),
        }
    }

    /// Upper bound on the magnitude of an unscaled sample, if one exists.
    pub fn magnitude_bound(&self) -> Option<f64> {
        match self {
            Self::Uniform => Some(1.0),
            Self::Normal => None,
        }
    }
}

/// Perturbation settings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerturbationConfig<T> {
    /// Multiplier applied to every noise sample
    pub scale: T,
    /// Distribution of the unscaled samples
    pub distribution: NoiseDistribution,
}

impl<T: Scalar> Default for PerturbationConfig<T> {
    fn default() -> Self {
        Self {
            scale: T::DEFAULT_PERTURBATION_SCALE,
            distribution: NoiseDistribution::Uniform,
        }
    }
}

impl<T: Scalar> PerturbationConfig<T> {
    /// Generate a scaled noise vector of the given length.
    pub fn noise<R: Rng + ?Sized>(&self, len: usize, rng: &mut R) -> Vec<T> {
        (0..len)
            .map(|_| <T as Scalar>::from_f64(self.distribution.sample(rng)) * self.scale)
            .collect()
    }

    /// Largest possible magnitude of a single noise term, `None` when the
    /// distribution is unbounded.
    pub fn bound(&self) -> Option<T> {
        self.distribution
            .magnitude_bound()
            .map(|b| <T as Scalar>::from_f64(b) * self.scale)
    }

    /// Check that the scale is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        if !<T as Float>::is_finite(self.scale) || self.scale < T::zero() {
            return Err(FrobeniusError::invalid_configuration(
                "scale",
                format!("must be finite and non-negative, got {}", self.scale),
            ));
        }
        Ok(())
    }
}

/// Builder for a custom perturbation configuration.
pub struct PerturbationConfigBuilder<T> {
    config: PerturbationConfig<T>,
}

impl<T: Scalar> PerturbationConfigBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: PerturbationConfig::default(),
        }
    }

    /// Set the noise scale.
    pub fn scale(mut self, scale: T) -> Self {
        self.config.scale = scale;
        self
    }

    /// Set the noise distribution.
    pub fn distribution(mut self, distribution: NoiseDistribution) -> Self {
        self.config.distribution = distribution;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<PerturbationConfig<T>> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl<T: Scalar> Default for PerturbationConfigBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
