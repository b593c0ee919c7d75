//! Type definitions and aliases for polynomial and matrix operations.
//!
//! This module provides the scalar trait shared by all routines, nalgebra
//! type aliases, and the [`ArrayInput`] abstraction that lets the public
//! functions accept any dense array while still checking its shape at
//! runtime.

use crate::core::error::{FrobeniusError, Result};
use nalgebra::{Complex, OMatrix, OVector, Dyn, RealField, Scalar as NalgebraScalar};
use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display};

/// Trait for scalar types used in the numeric routines (f32 or f64).
pub trait Scalar:
    NalgebraScalar
    + RealField
    + Float
    + FromPrimitive
    + Display
    + Debug
    + Default
    + Copy
    + Send
    + Sync
    + 'static
{
    /// Machine epsilon for this scalar type.
    ///
    /// The smallest positive value `eps` such that `1 + eps != 1`.
    const EPSILON: Self;

    /// Default magnitude of the noise added to polynomial coefficients.
    const DEFAULT_PERTURBATION_SCALE: Self;

    /// Convert from f64 (for constants).
    ///
    /// # Panics
    ///
    /// Panics if the conversion fails, which cannot happen for f32 or f64.
    fn from_f64(v: f64) -> Self {
        <Self as FromPrimitive>::from_f64(v).expect("Failed to convert from f64")
    }

    /// Convert to f64 (for logging/display).
    fn to_f64(self) -> f64 {
        num_traits::cast(self).unwrap_or(f64::NAN)
    }
}

impl Scalar for f32 {
    const EPSILON: Self = f32::EPSILON;
    const DEFAULT_PERTURBATION_SCALE: Self = 1e-10;
}

impl Scalar for f64 {
    const EPSILON: Self = f64::EPSILON;
    const DEFAULT_PERTURBATION_SCALE: Self = 1e-10;
}

/// Type alias for a dynamically-sized matrix.
pub type DMatrix<T> = OMatrix<T, Dyn, Dyn>;

/// Type alias for a dynamically-sized vector.
pub type DVector<T> = OVector<T, Dyn>;

/// Roots or eigenvalues, which may be complex even for real input.
pub type ComplexVector<T> = DVector<Complex<T>>;

/// A dense numeric array whose shape is only known at runtime.
///
/// Implementors report their extents through [`shape`](ArrayInput::shape)
/// (one entry per dimension, so the rank is `shape().len()`) and their
/// elements in row-major order. Plain slices and vectors are rank 1,
/// `DMatrix` is always rank 2 even when one extent is 1.
pub trait ArrayInput<T: Scalar> {
    /// Extent of each dimension.
    fn shape(&self) -> Vec<usize>;

    /// Elements in row-major order.
    fn to_row_major(&self) -> Vec<T>;

    /// Number of dimensions.
    fn ndim(&self) -> usize {
        self.shape().len()
    }

    /// Total number of elements. A 0-d array holds exactly one.
    fn size(&self) -> usize {
        self.shape().iter().product()
    }
}

impl<T: Scalar> ArrayInput<T> for [T] {
    fn shape(&self) -> Vec<usize> {
        vec![self.len()]
    }

    fn to_row_major(&self) -> Vec<T> {
        self.to_vec()
    }
}

impl<T: Scalar, const N: usize> ArrayInput<T> for [T; N] {
    fn shape(&self) -> Vec<usize> {
        vec![N]
    }

    fn to_row_major(&self) -> Vec<T> {
        self.to_vec()
    }
}

impl<T: Scalar> ArrayInput<T> for Vec<T> {
    fn shape(&self) -> Vec<usize> {
        vec![self.len()]
    }

    fn to_row_major(&self) -> Vec<T> {
        self.clone()
    }
}

impl<T: Scalar> ArrayInput<T> for DVector<T> {
    fn shape(&self) -> Vec<usize> {
        vec![self.len()]
    }

    fn to_row_major(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }
}

impl<T: Scalar> ArrayInput<T> for DMatrix<T> {
    fn shape(&self) -> Vec<usize> {
        vec![self.nrows(), self.ncols()]
    }

    fn to_row_major(&self) -> Vec<T> {
        // nalgebra stores columns contiguously
        self.transpose().as_slice().to_vec()
    }
}

/// Owned dense array with a runtime shape.
///
/// Useful when the rank of the data is not known statically, for example
/// when it was deserialized or produced by another numeric stage.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NdArray<T> {
    shape: Vec<usize>,
    data: Vec<T>,
}

impl<T: Scalar> NdArray<T> {
    /// Create an array from a shape and row-major data.
    pub fn new(shape: Vec<usize>, data: Vec<T>) -> Result<Self> {
        let expected: usize = shape.iter().product();
        if expected != data.len() {
            return Err(FrobeniusError::ShapeMismatch {
                shape,
                len: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Create a 0-dimensional array holding a single value.
    pub fn scalar(value: T) -> Self {
        Self {
            shape: Vec::new(),
            data: vec![value],
        }
    }

    /// Create a 1-dimensional array.
    pub fn vector(data: Vec<T>) -> Self {
        Self {
            shape: vec![data.len()],
            data,
        }
    }

    /// Create a 2-dimensional array from row-major data.
    pub fn matrix(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        Self::new(vec![rows, cols], data)
    }

    /// Row-major element storage.
    pub fn data(&self) -> &[T] {
        &self.data
    }
}

impl<T: Scalar> ArrayInput<T> for NdArray<T> {
    fn shape(&self) -> Vec<usize> {
        self.shape.clone()
    }

    fn to_row_major(&self) -> Vec<T> {
        self.data.clone()
    }
}

impl<T: Scalar> From<DVector<T>> for NdArray<T> {
    fn from(v: DVector<T>) -> Self {
        Self::vector(v.as_slice().to_vec())
    }
}

impl<T: Scalar> From<DMatrix<T>> for NdArray<T> {
    fn from(m: DMatrix<T>) -> Self {
        Self {
            shape: vec![m.nrows(), m.ncols()],
            data: m.to_row_major(),
        }
    }
}

/// Numerical constants for different precision levels.
pub mod constants {
    use super::Scalar;

    /// Get machine epsilon for the given scalar type.
    pub fn epsilon<T: Scalar>() -> T {
        T::EPSILON
    }

    /// Get the default coefficient perturbation scale.
    pub fn perturbation_scale<T: Scalar>() -> T {
        T::DEFAULT_PERTURBATION_SCALE
    }
}
