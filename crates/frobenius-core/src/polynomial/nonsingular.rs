//! Numerical nonsingularity test for square matrices.
//!
//! A matrix is reported nonsingular when the magnitude of its determinant
//! exceeds a threshold, machine epsilon by default. The threshold does not
//! scale with the size or norm of the matrix: a large well-conditioned
//! matrix with tiny entries can be reported singular and an ill-conditioned
//! one with large entries nonsingular.

use crate::{
    config::SingularityConfig,
    core::{
        error::Result,
        types::{ArrayInput, Scalar},
    },
    polynomial::eigen::determinant,
};
use num_traits::Float;
use tracing::debug;

/// Whether `a` is invertible within machine precision.
///
/// # Errors
///
/// `WrongRank`, `NotSquare` or `EmptyInput` if `a` is not a square,
/// non-empty, two-dimensional array.
///
/// # Example
/// ```
/// use frobenius_core::polynomial::is_nonsingular;
/// use nalgebra::DMatrix;
///
/// assert_eq!(is_nonsingular(&DMatrix::<f64>::identity(3, 3)), Ok(true));
/// assert_eq!(is_nonsingular(&DMatrix::<f64>::zeros(3, 3)), Ok(false));
/// ```
pub fn is_nonsingular<T, A>(a: &A) -> Result<bool>
where
    T: Scalar,
    A: ArrayInput<T> + ?Sized,
{
    is_nonsingular_with_config(a, &SingularityConfig::default())
}

/// Same as [`is_nonsingular`] with an explicit threshold.
///
/// A NaN determinant is never above the threshold, so matrices containing
/// NaN are reported singular.
pub fn is_nonsingular_with_config<T, A>(a: &A, config: &SingularityConfig<T>) -> Result<bool>
where
    T: Scalar,
    A: ArrayInput<T> + ?Sized,
{
    config.validate()?;
    let det = determinant(a)
        .inspect_err(|e| debug!(error = %e, "rejected nonsingularity input"))?;

    let threshold = config.threshold.value();
    let nonsingular = <T as Float>::abs(det) > threshold;
    debug!(
        determinant = Scalar::to_f64(det),
        threshold = Scalar::to_f64(threshold),
        nonsingular,
        "checked matrix singularity"
    );
    Ok(nonsingular)
}
