//! Error types for domain-level editing operations.

use moddoc_state::{Path, StateError};
use thiserror::Error;

/// Result type alias for domain-level editing operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors from collection and section operations.
///
/// Like the state-layer errors, these are contract violations: the UI only
/// emits well-formed intents, so a triggered error indicates a host bug.
/// Every failing operation leaves the prior document value untouched.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Appending an item whose id already exists in the collection.
    #[error("duplicate item id: {id}")]
    DuplicateId {
        /// The colliding id.
        id: String,
    },

    /// Collection operation index is invalid.
    #[error("index {index} out of range (len: {len})")]
    IndexOutOfRange {
        /// The index that was used.
        index: usize,
        /// The collection length.
        len: usize,
    },

    /// An update tried to change an item's id.
    #[error("item update changed id from {expected:?} to {found:?}")]
    IdentityViolation {
        /// The id the item had.
        expected: String,
        /// The id the replacement carried.
        found: String,
    },

    /// Reorder argument is not a permutation of the current ids.
    #[error("invalid permutation: {reason}")]
    InvalidPermutation {
        /// What made the argument invalid.
        reason: String,
    },

    /// A collection item is missing its mandatory string id.
    #[error("item at index {index} has no id")]
    MissingId {
        /// Position of the offending item.
        index: usize,
    },

    /// A collection operation was aimed at a non-collection value.
    #[error("value at {path} is not a collection")]
    NotACollection {
        /// Where the non-collection value was found.
        path: Path,
    },

    /// Underlying document access failure.
    #[error(transparent)]
    State(#[from] StateError),
}

impl ModelError {
    /// Create a duplicate id error.
    #[inline]
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        ModelError::DuplicateId { id: id.into() }
    }

    /// Create an index out of range error.
    #[inline]
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        ModelError::IndexOutOfRange { index, len }
    }

    /// Create an identity violation error.
    #[inline]
    pub fn identity_violation(expected: impl Into<String>, found: impl Into<String>) -> Self {
        ModelError::IdentityViolation {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create an invalid permutation error.
    #[inline]
    pub fn invalid_permutation(reason: impl Into<String>) -> Self {
        ModelError::InvalidPermutation {
            reason: reason.into(),
        }
    }
}
