//! Determinants and eigenvalues of dense square matrices.

use crate::{
    config::SolverConfig,
    core::{
        error::{FrobeniusError, Result},
        types::{ArrayInput, ComplexVector, DMatrix, DVector, Scalar},
    },
    numerical::{
        stability::{ensure_finite, sort_complex},
        validation::InputValidator,
    },
};
use nalgebra::{linalg::Schur, Complex};
use tracing::debug;

/// Determinant of a square, non-empty matrix via LU decomposition.
pub fn determinant<T, A>(matrix: &A) -> Result<T>
where
    T: Scalar,
    A: ArrayInput<T> + ?Sized,
{
    let matrix = InputValidator::square_matrix(matrix)?;
    Ok(matrix.lu().determinant())
}

/// Complex eigenvalues of a square matrix, sorted by (real, imaginary).
///
/// A 0×0 matrix has no eigenvalues and yields an empty vector.
pub fn eigenvalues<T, A>(matrix: &A) -> Result<ComplexVector<T>>
where
    T: Scalar,
    A: ArrayInput<T> + ?Sized,
{
    eigenvalues_with_config(matrix, &SolverConfig::default())
}

/// Same as [`eigenvalues`] with explicit solver settings.
pub fn eigenvalues_with_config<T, A>(matrix: &A, config: &SolverConfig<T>) -> Result<ComplexVector<T>>
where
    T: Scalar,
    A: ArrayInput<T> + ?Sized,
{
    config.validate()?;
    let matrix = InputValidator::square_matrix_or_empty(matrix)?;
    ensure_finite(&matrix.to_row_major())?;
    eigenvalues_of(matrix, config)
}

/// Eigenvalues of a validated finite square matrix.
///
/// QR iteration on some matrices, cyclic permutations such as the companion
/// matrix of `x^4 - 1` among them, cycles without ever deflating. When the
/// iteration budget runs out the decomposition is retried once on
/// [`exceptional_similarity`] of the matrix before giving up.
pub(crate) fn eigenvalues_of<T: Scalar>(
    matrix: DMatrix<T>,
    config: &SolverConfig<T>,
) -> Result<ComplexVector<T>> {
    let n = matrix.nrows();
    match n {
        0 => return Ok(DVector::from_vec(Vec::new())),
        1 => return Ok(DVector::from_element(1, Complex::new(matrix[(0, 0)], T::zero()))),
        _ => {}
    }

    let limit = config.iteration_limit(n);
    let schur = Schur::try_new(matrix.clone(), config.tolerance, limit)
        .or_else(|| {
            debug!(size = n, limit, "QR iteration stalled, retrying on a similar matrix");
            Schur::try_new(exceptional_similarity(&matrix), config.tolerance, limit)
        })
        .ok_or_else(|| {
            FrobeniusError::solver_failed(format!(
                "Schur decomposition of a {n}x{n} matrix did not converge within {limit} iterations"
            ))
        })?;

    let mut values: Vec<Complex<T>> = schur.complex_eigenvalues().iter().copied().collect();
    sort_complex(&mut values);
    debug!(size = n, "computed eigenvalues");
    Ok(DVector::from_vec(values))
}

/// `H A H` for a fixed Householder reflector `H` whose axis has distinct
/// entries. Same eigenvalues, different Hessenberg form and QR shifts.
fn exceptional_similarity<T: Scalar>(matrix: &DMatrix<T>) -> DMatrix<T> {
    let n = matrix.nrows();
    let axis = DVector::from_fn(n, |i, _| T::one() / <T as Scalar>::from_f64((i + 2) as f64))
        .normalize();
    let reflector =
        DMatrix::identity(n, n) - (&axis * axis.transpose()) * <T as Scalar>::from_f64(2.0);
    &reflector * matrix * &reflector
}
