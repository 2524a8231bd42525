//! Ordered collections of identity-bearing items.
//!
//! Items are mappings with a mandatory, collection-unique string `id`.
//! Identity is primary and position is derived: reorders and duplicates
//! never touch ids of existing items. All operations are pure: the input
//! slice is unchanged and a new vector is returned.

use crate::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// Generate a fresh item id.
///
/// Time-ordered UUIDs are unique for the process lifetime and opaque to
/// the host, which may persist them verbatim.
pub fn gen_item_id() -> String {
    uuid::Uuid::now_v7().simple().to_string()
}

/// Read an item's id, if it carries a non-empty string one.
pub fn item_id(item: &Value) -> Option<&str> {
    item.get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
}

fn require_id(item: &Value, index: usize) -> ModelResult<&str> {
    item_id(item).ok_or(ModelError::MissingId { index })
}

fn check_index(index: usize, len: usize) -> ModelResult<()> {
    if index < len {
        Ok(())
    } else {
        Err(ModelError::index_out_of_range(index, len))
    }
}

/// Append `item` at the end of the collection.
///
/// The item must carry a non-empty `id` that is unique in the result.
pub fn append(items: &[Value], item: Value) -> ModelResult<Vec<Value>> {
    let id = require_id(&item, items.len())?;
    for (i, existing) in items.iter().enumerate() {
        if require_id(existing, i)? == id {
            return Err(ModelError::duplicate_id(id));
        }
    }
    let mut next = items.to_vec();
    next.push(item);
    Ok(next)
}

/// Clone the item at `index`, give the clone a fresh id, and insert it
/// immediately after the source item.
pub fn duplicate_at(items: &[Value], index: usize) -> ModelResult<Vec<Value>> {
    check_index(index, items.len())?;
    require_id(&items[index], index)?;

    let mut copy = items[index].clone();
    match copy.as_object_mut() {
        Some(map) => {
            map.insert("id".into(), Value::String(gen_item_id()));
        }
        // require_id above guarantees an object
        None => return Err(ModelError::MissingId { index }),
    }
    let mut next = items.to_vec();
    next.insert(index + 1, copy);
    Ok(next)
}

/// Remove the item at `index`.
///
/// Deleting the last item yields an empty collection, not an error.
pub fn delete_at(items: &[Value], index: usize) -> ModelResult<Vec<Value>> {
    check_index(index, items.len())?;
    let mut next = items.to_vec();
    next.remove(index);
    Ok(next)
}

/// Replace the item at `index` with `new_item`.
///
/// The replacement must keep the same id: an update is an edit, never an
/// implicit identity swap.
pub fn update_at(items: &[Value], index: usize, new_item: Value) -> ModelResult<Vec<Value>> {
    check_index(index, items.len())?;
    let expected = require_id(&items[index], index)?;
    let found = require_id(&new_item, index)?;
    if expected != found {
        return Err(ModelError::identity_violation(expected, found));
    }
    let mut next = items.to_vec();
    next[index] = new_item;
    Ok(next)
}

/// Re-sequence the collection to match `order`.
///
/// `order` must be an exact permutation of the current ids: same length,
/// same set, no repeats. Item contents are untouched.
pub fn reorder(items: &[Value], order: &[String]) -> ModelResult<Vec<Value>> {
    if order.len() != items.len() {
        return Err(ModelError::invalid_permutation(format!(
            "expected {} ids, got {}",
            items.len(),
            order.len()
        )));
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(order.len());
    for id in order {
        if !seen.insert(id.as_str()) {
            return Err(ModelError::invalid_permutation(format!(
                "id {id:?} repeats in the new order"
            )));
        }
    }

    let mut by_id: Vec<(&str, &Value)> = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        by_id.push((require_id(item, i)?, item));
    }

    let mut next = Vec::with_capacity(items.len());
    for id in order {
        match by_id.iter().find(|(existing, _)| *existing == id) {
            Some((_, item)) => next.push((*item).clone()),
            None => {
                return Err(ModelError::invalid_permutation(format!(
                    "id {id:?} is not in the collection"
                )))
            }
        }
    }
    Ok(next)
}

/// A collection operation as emitted by the host UI.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CollectionOp {
    /// Append an item at the end.
    Append {
        /// The item to append; must carry a unique id.
        item: Value,
    },
    /// Duplicate the item at an index, inserting the copy right after it.
    DuplicateAt {
        /// Source item position.
        index: usize,
    },
    /// Delete the item at an index.
    DeleteAt {
        /// Position to remove.
        index: usize,
    },
    /// Replace the item at an index, keeping its id.
    UpdateAt {
        /// Position to replace.
        index: usize,
        /// The replacement item.
        item: Value,
    },
    /// Re-sequence the collection to the given id order.
    Reorder {
        /// Complete permutation of the current ids.
        order: Vec<String>,
    },
}

/// Apply a [`CollectionOp`] to a collection.
pub fn apply(items: &[Value], op: &CollectionOp) -> ModelResult<Vec<Value>> {
    match op {
        CollectionOp::Append { item } => append(items, item.clone()),
        CollectionOp::DuplicateAt { index } => duplicate_at(items, *index),
        CollectionOp::DeleteAt { index } => delete_at(items, *index),
        CollectionOp::UpdateAt { index, item } => update_at(items, *index, item.clone()),
        CollectionOp::Reorder { order } => reorder(items, order),
    }
}
