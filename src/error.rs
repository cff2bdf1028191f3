//! Error types for the circuit designer.
//!
//! This module provides a unified error type [`DesignerError`] that covers
//! every rejected user action: element insertion and removal, circuit
//! generation, source parsing, and the sign-in hand-off.

use thiserror::Error;

/// Result type alias using [`DesignerError`].
pub type Result<T> = std::result::Result<T, DesignerError>;

/// Unified error type for all designer operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignerError {
    // ============ Input Errors ============
    /// A numeric field is non-positive, unparseable or unset
    #[error("Invalid value for {field}: '{input}'")]
    InvalidValue { field: String, input: String },

    /// The unit string does not belong to the element kind
    #[error("Unit '{unit}' is not valid for a {kind}")]
    InvalidUnit { kind: String, unit: String },

    // ============ Element List Errors ============
    /// The element list is already full
    #[error("At most {max} elements can be added")]
    CapacityExceeded { max: usize },

    /// Removal of an element that does not exist
    #[error("No element at index {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    // ============ Generation Errors ============
    /// Generation attempted with no elements
    #[error("Add at least one element to generate a circuit")]
    EmptyCircuit,

    // ============ Sign-in Errors ============
    /// Malformed e-mail address for the e-mail provider
    #[error("Invalid e-mail address '{address}'")]
    InvalidEmail { address: String },

    /// Malformed identity service URL
    #[error("Invalid identity service URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    // ============ Output Errors ============
    /// A result could not be serialized
    #[error("Failed to serialize result: {message}")]
    Serialization { message: String },

    // ============ WASM Errors ============
    /// WASM-specific error
    #[cfg(feature = "wasm")]
    #[error("WASM error: {message}")]
    WasmError { message: String },
}

impl From<serde_json::Error> for DesignerError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization {
            message: e.to_string(),
        }
    }
}

impl DesignerError {
    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, input: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            input: input.into(),
        }
    }

    /// Create an invalid unit error
    pub fn invalid_unit(kind: impl Into<String>, unit: impl Into<String>) -> Self {
        Self::InvalidUnit {
            kind: kind.into(),
            unit: unit.into(),
        }
    }
}
