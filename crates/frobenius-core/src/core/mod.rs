//! Core scalar types, array abstractions and errors.

pub mod error;
pub mod types;

// Re-export core types
pub use error::*;
pub use types::*;
