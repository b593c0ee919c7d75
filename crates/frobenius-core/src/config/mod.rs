//! Configuration for the perturbation and linear-algebra routines.

pub mod linalg;
pub mod perturbation;

// Re-export key items
pub use linalg::{SingularityConfig, SingularityConfigBuilder, SingularityThreshold, SolverConfig};
pub use perturbation::{NoiseDistribution, PerturbationConfig, PerturbationConfigBuilder};
