//! Error types for simdport operations.
//!
//! Every failure is reported synchronously to the immediate caller. Integer
//! wraparound and IEEE-754 exceptional values are results, not errors, and
//! never show up here.

use thiserror::Error;

use crate::scalar::ElementKind;

/// Errors that can occur during simdport operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// The element type is outside the supported catalogue, or does not
    /// support the requested operation.
    #[error("Element type not supported: {name}")]
    UnsupportedElementType {
        /// Name of the rejected element type.
        name: String,
    },

    /// A lane index fell outside `[0, count)`.
    #[error("Index out of range: index {index} is not below lane count {count}")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The number of lanes (or elements) available.
        count: usize,
    },

    /// Integer division by a zero lane.
    #[error("Attempted to divide by zero")]
    DivideByZero,

    /// Two runtime-tagged vectors carried different element kinds.
    #[error("Element kind mismatch: expected {expected}, found {found}")]
    ElementKindMismatch {
        /// Kind of the left operand.
        expected: ElementKind,
        /// Kind of the right operand.
        found: ElementKind,
    },

    /// Input validation error.
    #[error("Validation error: {message}")]
    ValidationError {
        /// Human-readable error message.
        message: String,
    },
}

/// Result type alias for simdport operations.
pub type Result<T> = std::result::Result<T, VectorError>;

/// Creates an unsupported element type error.
pub fn unsupported_element_type(name: impl Into<String>) -> VectorError {
    VectorError::UnsupportedElementType { name: name.into() }
}

/// Creates an index out of range error.
pub fn index_out_of_range(index: usize, count: usize) -> VectorError {
    VectorError::IndexOutOfRange { index, count }
}

/// Creates an element kind mismatch error.
pub fn element_kind_mismatch(expected: ElementKind, found: ElementKind) -> VectorError {
    VectorError::ElementKindMismatch { expected, found }
}

/// Creates a validation error.
pub fn validation_error(message: impl Into<String>) -> VectorError {
    VectorError::ValidationError {
        message: message.into(),
    }
}
