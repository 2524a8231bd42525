//! Atomic document operations.
//!
//! Each operation describes a single change to apply to a document.

use crate::Path;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single document operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    /// Set a value at the path.
    ///
    /// Creates intermediate mappings if they don't exist.
    Set {
        /// Target path.
        path: Path,
        /// Value to set.
        value: Value,
    },

    /// Delete the value at the path.
    ///
    /// No-op if the leaf doesn't exist.
    Delete {
        /// Target path.
        path: Path,
    },

    /// Shallow-merge an object into the mapping at the path.
    ///
    /// Creates the mapping if it doesn't exist; sibling keys survive.
    Merge {
        /// Target path (must be a mapping or absent).
        path: Path,
        /// Object to merge.
        value: Value,
    },
}

impl Op {
    /// Create a Set operation.
    #[inline]
    pub fn set(path: Path, value: impl Into<Value>) -> Self {
        Op::Set {
            path,
            value: value.into(),
        }
    }

    /// Create a Delete operation.
    #[inline]
    pub fn delete(path: Path) -> Self {
        Op::Delete { path }
    }

    /// Create a Merge operation.
    #[inline]
    pub fn merge(path: Path, value: impl Into<Value>) -> Self {
        Op::Merge {
            path,
            value: value.into(),
        }
    }

    /// Get the path this operation targets.
    #[inline]
    pub fn path(&self) -> &Path {
        match self {
            Op::Set { path, .. } => path,
            Op::Delete { path } => path,
            Op::Merge { path, .. } => path,
        }
    }

    /// Get the operation name.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Op::Set { .. } => "set",
            Op::Delete { .. } => "delete",
            Op::Merge { .. } => "merge",
        }
    }
}
