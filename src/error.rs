//! Error types for the geo-space library
//!
//! This module provides the main error and result types used throughout the library.
//! All errors use the `thiserror` crate for automatic trait implementations.
//!
//! Only structurally invalid inputs are errors. Floating-point degeneracies
//! (normalizing a zero vector, 0/0, `acos` slightly outside [-1, 1]) are
//! resolved locally with documented fallback values.

use std::num::ParseFloatError;
use thiserror::Error;

/// Main result type used throughout the geo-space library
pub type GeoResult<T> = Result<T, GeoError>;

/// Main error type for the geo-space library
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    /// Vector length not supported by the operation
    #[error("Dimension error in {operation}: expected {expected} components, got {actual}")]
    Dimension {
        operation: &'static str,
        expected: &'static str,
        actual: usize,
    },

    /// Aggregate operation given an empty sequence
    #[error("Empty input to {operation}")]
    EmptyInput { operation: &'static str },

    /// Line intersection with a zero determinant (parallel or coincident lines)
    #[error("Lines do not intersect: determinant is zero")]
    ParallelLines,

    /// Invalid input parameters (command-line parsing and similar)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<ParseFloatError> for GeoError {
    fn from(err: ParseFloatError) -> Self {
        GeoError::InvalidInput(format!("Failed to parse float: {err}"))
    }
}
