//! Frobenius companion matrices.
//!
//! For `p(x) = a_n x^n + ... + a_1 x + a_0` the companion matrix is the n×n
//! matrix
//!
//! ```text
//! [       0,        1,        0, ...,            0 ]
//! [       0,        0,        1, ...,            0 ]
//! [     ...,      ...,      ..., ...,          ... ]
//! [-a_0/a_n, -a_1/a_n, -a_2/a_n, ..., -a_{n-1}/a_n ]
//! ```
//!
//! whose characteristic polynomial is `p / a_n`, so its eigenvalues are the
//! roots of `p`.

use crate::{
    core::{
        error::{FrobeniusError, Result},
        types::{ArrayInput, DMatrix, Scalar},
    },
    numerical::validation::InputValidator,
};
use num_traits::Float;
use tracing::debug;

/// Build the companion matrix of a coefficient vector (lowest degree first).
///
/// A single coefficient yields a 0×0 matrix.
///
/// # Errors
///
/// - `EmptyInput` / `WrongRank` if `coef` is not a non-empty vector
/// - `NonFiniteValue` if a coefficient is NaN or infinite, or overflows when
///   divided by the leading coefficient
/// - `DegenerateCoefficient` if the last coefficient is zero
///
/// # Example
/// ```
/// use frobenius_core::polynomial::build_companion;
///
/// let m = build_companion(&[-6.0_f64, 11.0, -6.0, 1.0]).unwrap();
/// assert_eq!(m[(0, 1)], 1.0);
/// assert_eq!(m[(2, 0)], 6.0);
/// ```
pub fn build_companion<T, A>(coef: &A) -> Result<DMatrix<T>>
where
    T: Scalar,
    A: ArrayInput<T> + ?Sized,
{
    let coef = InputValidator::coefficients(coef)
        .inspect_err(|e| debug!(error = %e, "rejected companion matrix input"))?;
    companion_from_slice(&coef)
}

/// Companion matrix of already validated coefficients.
pub(crate) fn companion_from_slice<T: Scalar>(coef: &[T]) -> Result<DMatrix<T>> {
    let Some((&leading, rest)) = coef.split_last() else {
        return Err(FrobeniusError::EmptyInput);
    };
    if leading.is_zero() {
        debug!("rejected companion matrix input: leading coefficient is zero");
        return Err(FrobeniusError::DegenerateCoefficient);
    }

    let n = rest.len();
    let mut matrix = DMatrix::zeros(n, n);
    for i in 0..n.saturating_sub(1) {
        matrix[(i, i + 1)] = T::one();
    }
    if n > 0 {
        for (j, &c) in rest.iter().enumerate() {
            let entry = -c / leading;
            if !<T as Float>::is_finite(entry) {
                debug!(
                    index = j,
                    "rejected companion matrix input: normalized coefficient overflows"
                );
                return Err(FrobeniusError::NonFiniteValue { index: j });
            }
            matrix[(n - 1, j)] = entry;
        }
    }

    debug!(degree = n, "built companion matrix");
    Ok(matrix)
}
