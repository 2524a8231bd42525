//! Error types for document access operations.

use crate::Path;
use thiserror::Error;

/// Result type alias for document access operations.
pub type StateResult<T> = Result<T, StateError>;

/// Errors that can occur while reading or writing a document.
///
/// These are surfaced as programming-contract violations, not transient
/// faults: a failing operation leaves the caller's document untouched and
/// is never retried.
#[derive(Debug, Error)]
pub enum StateError {
    /// Malformed or empty path where a non-empty path is required.
    #[error("invalid path: {reason}")]
    InvalidPath {
        /// What made the path invalid.
        reason: String,
    },

    /// Path traverses a scalar as if it were a mapping or collection.
    #[error("type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        /// The path where the mismatch occurred.
        path: Path,
        /// The expected type.
        expected: &'static str,
        /// The actual type found.
        found: &'static str,
    },

    /// Collection index is out of bounds.
    #[error("index {index} out of bounds (len: {len}) at path {path}")]
    IndexOutOfBounds {
        /// The path to the collection.
        path: Path,
        /// The index that was accessed.
        index: usize,
        /// The actual length of the collection.
        len: usize,
    },

    /// JSON serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StateError {
    /// Create an invalid path error.
    #[inline]
    pub fn invalid_path(reason: impl Into<String>) -> Self {
        StateError::InvalidPath {
            reason: reason.into(),
        }
    }

    /// Create a type mismatch error.
    #[inline]
    pub fn type_mismatch(path: Path, expected: &'static str, found: &'static str) -> Self {
        StateError::TypeMismatch {
            path,
            expected,
            found,
        }
    }

    /// Create an index out of bounds error.
    #[inline]
    pub fn index_out_of_bounds(path: Path, index: usize, len: usize) -> Self {
        StateError::IndexOutOfBounds { path, index, len }
    }
}

/// Get the type name of a JSON value.
#[inline]
pub fn value_type_name(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
