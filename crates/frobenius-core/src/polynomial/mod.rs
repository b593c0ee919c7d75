//! Polynomial root finding, companion matrices and matrix checks.
//!
//! Coefficient vectors are ordered lowest degree first: `[a_0, a_1, ..., a_n]`
//! stands for `a_n x^n + ... + a_1 x + a_0`.

pub mod companion;
pub mod eigen;
pub mod nonsingular;
pub mod roots;

pub use companion::build_companion;
pub use eigen::{determinant, eigenvalues, eigenvalues_with_config};
pub use nonsingular::{is_nonsingular, is_nonsingular_with_config};
pub use roots::{
    find_roots, find_roots_with_config, find_roots_with_rng, polynomial_roots,
    PerturbedRootFinder, RootsOutput,
};

use crate::core::types::Scalar;
use nalgebra::Complex;

/// Evaluate a real polynomial at a complex point using Horner's scheme.
pub fn evaluate<T: Scalar>(coef: &[T], z: Complex<T>) -> Complex<T> {
    coef.iter()
        .rev()
        .fold(Complex::new(T::zero(), T::zero()), |acc, &c| {
            acc * z + Complex::new(c, T::zero())
        })
}
