//! Numerical helpers shared by the polynomial and matrix routines.

use crate::core::{
    error::{FrobeniusError, Result},
    types::{DMatrix, Scalar},
};
use nalgebra::Complex;
use num_traits::Float;
use std::cmp::Ordering;

/// Index of the first NaN or infinite value, if any.
pub fn first_non_finite<T: Scalar>(values: &[T]) -> Option<usize> {
    values.iter().position(|&x| !<T as Float>::is_finite(x))
}

/// Fail with `NonFiniteValue` if any value is NaN or infinite.
pub fn ensure_finite<T: Scalar>(values: &[T]) -> Result<()> {
    match first_non_finite(values) {
        Some(index) => Err(FrobeniusError::NonFiniteValue { index }),
        None => Ok(()),
    }
}

/// Check if a matrix is finite (no NaN or Inf values)
pub fn is_finite_matrix<T: Scalar>(matrix: &DMatrix<T>) -> bool {
    matrix.iter().all(|&x| <T as Float>::is_finite(x))
}

/// Strip exact trailing zeros from a coefficient slice.
///
/// The highest-degree coefficient of the result is nonzero unless every
/// coefficient is zero, in which case the first one is kept.
pub fn trim_trailing_zeros<T: Scalar>(coef: &[T]) -> &[T] {
    let mut end = coef.len();
    while end > 1 && coef[end - 1].is_zero() {
        end -= 1;
    }
    &coef[..end]
}

/// Lexicographic order on (real, imaginary), NaN sorted last.
pub fn complex_cmp<T: Scalar>(a: &Complex<T>, b: &Complex<T>) -> Ordering {
    let by_part = |x: T, y: T| x.partial_cmp(&y).unwrap_or_else(|| {
        <T as Float>::is_nan(x).cmp(&<T as Float>::is_nan(y))
    });
    by_part(a.re, b.re).then_with(|| by_part(a.im, b.im))
}

/// Sort complex values by real part, then imaginary part.
pub fn sort_complex<T: Scalar>(values: &mut [Complex<T>]) {
    values.sort_by(complex_cmp::<T>);
}
