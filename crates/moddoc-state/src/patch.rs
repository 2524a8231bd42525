//! Ordered groups of operations applied all-or-nothing.

use crate::access::{delete_at, merge_at, set_at};
use crate::{Op, StateResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An ordered sequence of operations.
///
/// Operations apply in order; a failing operation aborts the whole patch
/// and the input document stays as it was.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Patch {
    ops: Vec<Op>,
}

impl Patch {
    /// Create an empty patch.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a patch from a vector of operations.
    #[inline]
    pub fn with_ops(ops: Vec<Op>) -> Self {
        Self { ops }
    }

    /// Add an operation (builder pattern).
    #[inline]
    pub fn with_op(mut self, op: Op) -> Self {
        self.ops.push(op);
        self
    }

    /// Push an operation.
    #[inline]
    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    /// Get the operations.
    #[inline]
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Get the number of operations.
    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the patch is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

/// Apply a single operation, returning the new document.
pub fn apply_op(doc: &Value, op: &Op) -> StateResult<Value> {
    match op {
        Op::Set { path, value } => set_at(doc, path, value.clone()),
        Op::Delete { path } => delete_at(doc, path),
        Op::Merge { path, value } => merge_at(doc, path, value),
    }
}

/// Apply a patch, returning the new document.
///
/// Last write wins when operations target the same path. On error the
/// caller's document is untouched.
pub fn apply_patch(doc: &Value, patch: &Patch) -> StateResult<Value> {
    let mut next = doc.clone();
    for op in patch.ops() {
        next = apply_op(&next, op)?;
    }
    Ok(next)
}
