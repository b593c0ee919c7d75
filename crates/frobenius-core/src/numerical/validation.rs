//! Runtime shape validation for array inputs.
//!
//! The element type of every input is fixed statically through
//! [`ArrayInput`]; what remains to check at runtime is the shape. Each
//! check returns the first violation it finds as a [`FrobeniusError`].

use crate::{
    core::{
        error::{FrobeniusError, Result},
        types::{ArrayInput, DMatrix, Scalar},
    },
    numerical::stability::ensure_finite,
};

/// Shape and row-major contents of an input, captured once.
#[derive(Debug, Clone)]
pub struct ArraySnapshot<T> {
    /// Extent of each dimension
    pub shape: Vec<usize>,
    /// Elements in row-major order
    pub data: Vec<T>,
}

impl<T: Scalar> ArraySnapshot<T> {
    /// Capture an input, rejecting implementations whose shape and data disagree.
    pub fn capture<A>(input: &A) -> Result<Self>
    where
        A: ArrayInput<T> + ?Sized,
    {
        let shape = input.shape();
        let data = input.to_row_major();
        if shape.iter().product::<usize>() != data.len() {
            return Err(FrobeniusError::ShapeMismatch {
                shape,
                len: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }
}

/// Validation entry points shared by the polynomial routines.
pub struct InputValidator;

impl InputValidator {
    /// Validate a polynomial coefficient vector.
    ///
    /// Checks, in order: the array is non-empty, it is one-dimensional, and
    /// every coefficient is finite. Returns the coefficients lowest degree
    /// first.
    pub fn coefficients<T, A>(input: &A) -> Result<Vec<T>>
    where
        T: Scalar,
        A: ArrayInput<T> + ?Sized,
    {
        let snapshot = ArraySnapshot::capture(input)?;
        if snapshot.data.is_empty() {
            return Err(FrobeniusError::EmptyInput);
        }
        if snapshot.ndim() != 1 {
            return Err(FrobeniusError::wrong_rank(1, &snapshot.shape));
        }
        ensure_finite(&snapshot.data)?;
        Ok(snapshot.data)
    }

    /// Validate a square, non-empty, two-dimensional matrix.
    ///
    /// Checks, in order: the array is two-dimensional, it is square, and it
    /// is non-empty. Values are not inspected.
    pub fn square_matrix<T, A>(input: &A) -> Result<DMatrix<T>>
    where
        T: Scalar,
        A: ArrayInput<T> + ?Sized,
    {
        let matrix = Self::square_matrix_or_empty(input)?;
        if matrix.is_empty() {
            return Err(FrobeniusError::EmptyInput);
        }
        Ok(matrix)
    }

    /// Like [`square_matrix`](Self::square_matrix) but accepts a 0x0 matrix.
    pub fn square_matrix_or_empty<T, A>(input: &A) -> Result<DMatrix<T>>
    where
        T: Scalar,
        A: ArrayInput<T> + ?Sized,
    {
        let snapshot = ArraySnapshot::capture(input)?;
        if snapshot.ndim() != 2 {
            return Err(FrobeniusError::wrong_rank(2, &snapshot.shape));
        }
        let (rows, cols) = (snapshot.shape[0], snapshot.shape[1]);
        if rows != cols {
            return Err(FrobeniusError::not_square(rows, cols));
        }
        Ok(DMatrix::from_row_slice(rows, cols, &snapshot.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{DVector, NdArray};

    #[test]
    fn test_coefficients_accepts_vectors() {
        let coef = InputValidator::coefficients(&[1.0_f64, -2.0, 3.0]).unwrap();
        assert_eq!(coef, vec![1.0, -2.0, 3.0]);

        let v = DVector::from_vec(vec![4.0_f64]);
        assert_eq!(InputValidator::coefficients(&v).unwrap(), vec![4.0]);
    }

    #[test]
    fn test_coefficients_rejects_empty_before_rank() {
        let empty: Vec<f64> = Vec::new();
        assert_eq!(
            InputValidator::coefficients(&empty),
            Err(FrobeniusError::EmptyInput)
        );

        // An empty 2-D array is reported as empty, not as wrong rank
        let empty_2d = DMatrix::<f64>::zeros(0, 3);
        assert_eq!(
            InputValidator::coefficients(&empty_2d),
            Err(FrobeniusError::EmptyInput)
        );
    }

    #[test]
    fn test_coefficients_rejects_wrong_rank() {
        let m = DMatrix::from_row_slice(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
        assert_eq!(
            InputValidator::coefficients(&m),
            Err(FrobeniusError::WrongRank {
                expected: 1,
                actual: 2,
                shape: vec![2, 2],
            })
        );

        let scalar = NdArray::scalar(1.0_f64);
        assert_eq!(
            InputValidator::coefficients(&scalar),
            Err(FrobeniusError::wrong_rank(1, &[]))
        );

        let cube = NdArray::new(vec![1, 1, 2], vec![1.0_f64, 2.0]).unwrap();
        assert!(matches!(
            InputValidator::coefficients(&cube),
            Err(FrobeniusError::WrongRank { actual: 3, .. })
        ));
    }

    #[test]
    fn test_coefficients_rejects_non_finite() {
        assert_eq!(
            InputValidator::coefficients(&[1.0_f64, f64::NAN]),
            Err(FrobeniusError::NonFiniteValue { index: 1 })
        );
    }

    #[test]
    fn test_square_matrix() {
        let m = InputValidator::square_matrix(&DMatrix::<f64>::identity(3, 3)).unwrap();
        assert_eq!(m, DMatrix::identity(3, 3));

        let rect = DMatrix::<f64>::zeros(2, 3);
        assert_eq!(
            InputValidator::square_matrix(&rect),
            Err(FrobeniusError::not_square(2, 3))
        );

        let empty = DMatrix::<f64>::zeros(0, 0);
        assert_eq!(
            InputValidator::square_matrix(&empty),
            Err(FrobeniusError::EmptyInput)
        );

        let zero_sized = InputValidator::square_matrix_or_empty(&empty).unwrap();
        assert_eq!(zero_sized.shape(), (0, 0));

        assert_eq!(
            InputValidator::square_matrix(&[1.0_f64, 2.0]),
            Err(FrobeniusError::wrong_rank(2, &[2]))
        );
    }

    #[test]
    fn test_square_matrix_from_ndarray_is_row_major() {
        let a = NdArray::matrix(2, 2, vec![1.0_f64, 2.0, 3.0, 4.0]).unwrap();
        let m = InputValidator::square_matrix(&a).unwrap();
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m[(1, 0)], 3.0);
    }
}
