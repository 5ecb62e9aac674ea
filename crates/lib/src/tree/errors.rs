//! Error types for tree operations.
//!
//! The path-walking operations themselves never fail: absence and type
//! conflicts are resolved by policy (defaults, no-ops, overwrites). The
//! errors here surface only from the typed-access and JSON-bridging layers
//! around the engine.

use thiserror::Error;

/// Structured error types for tree access and conversion.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TreeError {
    /// A typed read found a value of a different shape
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// A JSON value has no representation in the tree model
    #[error("unsupported JSON value: {reason}")]
    UnsupportedJson { reason: String },
}

impl TreeError {
    /// Check if this error is a type mismatch
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, TreeError::TypeMismatch { .. })
    }

    /// Check if this error comes from JSON bridging
    pub fn is_unsupported_json(&self) -> bool {
        matches!(self, TreeError::UnsupportedJson { .. })
    }
}

// Conversion from TreeError to the main Error type
impl From<TreeError> for crate::Error {
    fn from(err: TreeError) -> Self {
        crate::Error::Tree(err)
    }
}
