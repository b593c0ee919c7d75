//! Polynomial root finding via perturbation, Frobenius companion matrices
//! and numerical nonsingularity checks.
//!
//! The three routines are independent but compose naturally: build the
//! companion matrix of a polynomial, check that it is nonsingular (that is,
//! zero is not a root), then compute its eigenvalues or find the roots of a
//! perturbed copy of the polynomial directly.
//!
//! ```
//! use frobenius::prelude::*;
//!
//! // (x - 1)(x - 2)(x - 3)
//! let coef = [-6.0_f64, 11.0, -6.0, 1.0];
//!
//! let companion = build_companion(&coef)?;
//! assert!(is_nonsingular(&companion)?);
//!
//! let eigen = eigenvalues(&companion)?;
//! let (_, roots) = find_roots(&coef)?.into_parts();
//! for (a, b) in eigen.iter().zip(roots.iter()) {
//!     assert!((a - b).norm() < 1e-6);
//! }
//! # Ok::<(), FrobeniusError>(())
//! ```

pub use frobenius_core::{
    config, numerical, polynomial, prelude, ArrayInput, FrobeniusError, NdArray, Result, Scalar,
};

// Re-export nalgebra and rand so callers can build inputs and seed the noise
pub use nalgebra;
pub use rand;
