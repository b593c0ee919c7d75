//! Root finding for slightly perturbed polynomials.
//!
//! Repeated roots and some coefficient patterns make the eigenvalue problem
//! behind root finding badly conditioned. Adding tiny random noise to the
//! coefficients before solving splits exactly repeated roots and moves the
//! problem away from those degeneracies. The noise is returned alongside the
//! roots, as the perturbed coefficient vector, so callers can see exactly
//! which polynomial was solved.

use crate::{
    config::{PerturbationConfig, SolverConfig},
    core::{
        error::{FrobeniusError, Result},
        types::{ArrayInput, ComplexVector, DVector, Scalar},
    },
    numerical::{stability::trim_trailing_zeros, validation::InputValidator},
    polynomial::{companion::companion_from_slice, eigen::eigenvalues_of},
};
use nalgebra::Complex;
use num_traits::Float;
use rand::Rng;
use tracing::{debug, warn};

/// Perturbed coefficients together with the roots computed from them.
#[derive(Debug, Clone, PartialEq)]
pub struct RootsOutput<T: Scalar> {
    /// Input coefficients plus noise, lowest degree first
    pub perturbed: DVector<T>,
    /// Roots of the perturbed polynomial, sorted by (real, imaginary)
    pub roots: ComplexVector<T>,
}

impl<T: Scalar> RootsOutput<T> {
    /// Split into `(perturbed, roots)`.
    pub fn into_parts(self) -> (DVector<T>, ComplexVector<T>) {
        (self.perturbed, self.roots)
    }
}

/// Root finder with configurable perturbation and eigenvalue solver.
#[derive(Debug, Clone)]
pub struct PerturbedRootFinder<T> {
    perturbation: PerturbationConfig<T>,
    solver: SolverConfig<T>,
}

impl<T: Scalar> Default for PerturbedRootFinder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> PerturbedRootFinder<T> {
    /// Create a root finder with default settings.
    pub fn new() -> Self {
        Self {
            perturbation: PerturbationConfig::default(),
            solver: SolverConfig::default(),
        }
    }

    /// Set the perturbation settings.
    pub fn with_perturbation(mut self, perturbation: PerturbationConfig<T>) -> Self {
        self.perturbation = perturbation;
        self
    }

    /// Set the eigenvalue solver settings.
    pub fn with_solver(mut self, solver: SolverConfig<T>) -> Self {
        self.solver = solver;
        self
    }

    /// Perturbation settings in use.
    pub fn perturbation(&self) -> &PerturbationConfig<T> {
        &self.perturbation
    }

    /// Perturb `coef` with noise drawn from `rng` and solve.
    ///
    /// Rejected input is reported as a warning before the error is returned.
    pub fn find_roots<A, R>(&self, coef: &A, rng: &mut R) -> Result<RootsOutput<T>>
    where
        A: ArrayInput<T> + ?Sized,
        R: Rng + ?Sized,
    {
        self.perturbation.validate()?;
        self.solver.validate()?;
        let coef = InputValidator::coefficients(coef).inspect_err(report_rejected_input)?;

        let noise = self.perturbation.noise(coef.len(), rng);
        let perturbed: Vec<T> = coef.iter().zip(noise).map(|(&c, e)| c + e).collect();
        let roots = self.solve(&perturbed)?;

        debug!(
            degree = coef.len() - 1,
            roots = roots.len(),
            "found roots of perturbed polynomial"
        );
        Ok(RootsOutput {
            perturbed: DVector::from_vec(perturbed),
            roots,
        })
    }

    /// Roots of `coef` without any perturbation.
    ///
    /// Coefficients whose ratio to the leading one overflows are rejected
    /// with `NonFiniteValue`.
    pub fn solve(&self, coef: &[T]) -> Result<ComplexVector<T>> {
        self.solver.validate()?;
        let coef = trim_trailing_zeros(coef);
        match coef {
            [] | [_] => Ok(DVector::from_vec(Vec::new())),
            [c0, c1] => {
                let root = -*c0 / *c1;
                if !<T as Float>::is_finite(root) {
                    return Err(FrobeniusError::NonFiniteValue { index: 0 });
                }
                Ok(DVector::from_element(1, Complex::new(root, T::zero())))
            }
            _ => eigenvalues_of(companion_from_slice(coef)?, &self.solver),
        }
    }
}

fn report_rejected_input(error: &FrobeniusError) {
    match error {
        FrobeniusError::EmptyInput => warn!("invalid coefficients: array is empty"),
        FrobeniusError::WrongRank { actual, shape, .. } => warn!(
            ndim = actual,
            shape = ?shape,
            "invalid coefficients: expected 1 dimension, got {}",
            actual
        ),
        other => warn!(error = %other, "invalid coefficients"),
    }
}

/// Find the roots of `coef` after perturbing it with thread-local randomness.
///
/// `coef` holds the coefficients lowest degree first. Returns the perturbed
/// coefficients and the roots of the polynomial they define.
///
/// # Example
/// ```
/// use frobenius_core::polynomial::find_roots;
///
/// let (perturbed, roots) = find_roots(&[-6.0_f64, 11.0, -6.0, 1.0]).unwrap().into_parts();
/// assert_eq!(perturbed.len(), 4);
/// assert_eq!(roots.len(), 3);
/// assert!((roots[0].re - 1.0).abs() < 1e-6);
/// ```
pub fn find_roots<T, A>(coef: &A) -> Result<RootsOutput<T>>
where
    T: Scalar,
    A: ArrayInput<T> + ?Sized,
{
    find_roots_with_rng(coef, &mut rand::thread_rng())
}

/// Same as [`find_roots`] drawing the noise from `rng`.
pub fn find_roots_with_rng<T, A, R>(coef: &A, rng: &mut R) -> Result<RootsOutput<T>>
where
    T: Scalar,
    A: ArrayInput<T> + ?Sized,
    R: Rng + ?Sized,
{
    PerturbedRootFinder::new().find_roots(coef, rng)
}

/// Same as [`find_roots_with_rng`] with explicit perturbation settings.
pub fn find_roots_with_config<T, A, R>(
    coef: &A,
    rng: &mut R,
    config: &PerturbationConfig<T>,
) -> Result<RootsOutput<T>>
where
    T: Scalar,
    A: ArrayInput<T> + ?Sized,
    R: Rng + ?Sized,
{
    PerturbedRootFinder::new()
        .with_perturbation(config.clone())
        .find_roots(coef, rng)
}

/// Roots of `coef` without perturbation, sorted by (real, imaginary).
///
/// Exact trailing zeros are ignored, so `[2, 1, 0]` is treated as the linear
/// polynomial `x + 2`.
pub fn polynomial_roots<T, A>(coef: &A) -> Result<ComplexVector<T>>
where
    T: Scalar,
    A: ArrayInput<T> + ?Sized,
{
    let coef = InputValidator::coefficients(coef)?;
    PerturbedRootFinder::new().solve(&coef)
}
