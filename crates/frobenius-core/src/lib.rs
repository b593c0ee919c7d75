//! Polynomial root finding, companion matrices and nonsingularity checks.
//!
//! This crate provides three independent numeric routines that compose into
//! a small pipeline:
//!
//! - [`find_roots`](polynomial::find_roots): perturb polynomial coefficients
//!   by tiny random noise and compute the roots of the perturbed polynomial
//! - [`build_companion`](polynomial::build_companion): build the Frobenius
//!   companion matrix whose eigenvalues are the polynomial's roots
//! - [`is_nonsingular`](polynomial::is_nonsingular): decide whether a square
//!   matrix is invertible within machine precision
//!
//! Every routine validates its input shape at runtime and reports problems
//! through [`FrobeniusError`]; none of them panics on bad input.
//!
//! # Modules
//!
//! - [`config`]: Perturbation, solver and singularity settings
//! - [`core`]: Scalar trait, array abstractions and error types
//! - [`numerical`]: Input validation and numerical helpers
//! - [`polynomial`]: The root finder, companion builder and matrix checks

pub mod config;
pub mod core;
pub mod numerical;
pub mod polynomial;

// Re-export commonly used items at the crate root
pub use crate::core::error::{FrobeniusError, Result};
pub use crate::core::types::{ArrayInput, NdArray, Scalar};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use frobenius_core::prelude::*;
///
/// let companion = build_companion(&[2.0_f64, -3.0, 1.0]).unwrap();
/// assert_eq!(is_nonsingular(&companion), Ok(true));
/// ```
pub mod prelude {
    pub use crate::config::{
        NoiseDistribution, PerturbationConfig, PerturbationConfigBuilder, SingularityConfig,
        SingularityConfigBuilder, SingularityThreshold, SolverConfig,
    };
    pub use crate::core::error::{FrobeniusError, Result};
    pub use crate::core::types::{
        constants, ArrayInput, ComplexVector, DMatrix, DVector, NdArray, Scalar,
    };
    pub use crate::polynomial::{
        build_companion, determinant, eigenvalues, eigenvalues_with_config, evaluate,
        find_roots, find_roots_with_config, find_roots_with_rng, is_nonsingular,
        is_nonsingular_with_config, polynomial_roots, PerturbedRootFinder, RootsOutput,
    };
}
