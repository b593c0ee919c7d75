//! Error types for polynomial and matrix operations.
//!
//! Every public operation validates its input at the boundary and reports
//! rejected input through [`FrobeniusError`]. Nothing in this crate panics on
//! bad input; callers that only care about validity can use `.ok()`.

use thiserror::Error;

/// Errors that can occur while validating or processing numeric arrays.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrobeniusError {
    /// The array has zero elements.
    #[error("Array is empty")]
    EmptyInput,

    /// The array has the wrong number of dimensions.
    ///
    /// Coefficient vectors must be one-dimensional and matrices
    /// two-dimensional.
    #[error("Wrong number of dimensions: expected {expected}, got {actual} (shape {shape:?})")]
    WrongRank {
        /// Required rank
        expected: usize,
        /// Rank of the rejected array
        actual: usize,
        /// Shape of the rejected array
        shape: Vec<usize>,
    },

    /// A two-dimensional array is not square.
    #[error("Matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// The leading polynomial coefficient is zero.
    #[error("Leading coefficient is zero, polynomial degree is ill-defined")]
    DegenerateCoefficient,

    /// The array contains NaN or an infinite value.
    #[error("Non-finite value at index {index}")]
    NonFiniteValue {
        /// Row-major index of the first offending element
        index: usize,
    },

    /// Shape and element count disagree when building an array.
    #[error("Shape {shape:?} requires {} elements, got {len}", .shape.iter().product::<usize>())]
    ShapeMismatch {
        /// Requested shape
        shape: Vec<usize>,
        /// Number of elements supplied
        len: usize,
    },

    /// The eigenvalue solver did not converge.
    #[error("Eigenvalue solver failed: {reason}")]
    SolverFailed {
        /// Description of the failure
        reason: String,
    },

    /// A configuration value is out of range.
    #[error("Invalid configuration for `{parameter}`: {reason}")]
    InvalidConfiguration {
        /// Name of the offending parameter
        parameter: String,
        /// Why the value was rejected
        reason: String,
    },
}

impl FrobeniusError {
    /// Create a WrongRank error for an array of the given shape.
    pub fn wrong_rank(expected: usize, shape: &[usize]) -> Self {
        Self::WrongRank {
            expected,
            actual: shape.len(),
            shape: shape.to_vec(),
        }
    }

    /// Create a NotSquare error.
    pub fn not_square(rows: usize, cols: usize) -> Self {
        Self::NotSquare { rows, cols }
    }

    /// Create a SolverFailed error with a custom reason.
    pub fn solver_failed<S: Into<String>>(reason: S) -> Self {
        Self::SolverFailed {
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfiguration error.
    pub fn invalid_configuration<S1, S2>(parameter: S1, reason: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self::InvalidConfiguration {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error describes the shape of the input rather than its values.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput
                | Self::WrongRank { .. }
                | Self::NotSquare { .. }
                | Self::ShapeMismatch { .. }
        )
    }
}

/// Result type alias for operations that can produce a FrobeniusError.
pub type Result<T> = std::result::Result<T, FrobeniusError>;
