//! Edit intents: the wire-level entry point for UI events.
//!
//! A UI event produces one intent; [`apply_intent`] routes it through the
//! section binder and hands back the new document for the host to persist
//! and render. Intents are serializable so hosts can queue or replay them.

use crate::collection::CollectionOp;
use crate::section;
use crate::ModelResult;
use moddoc_state::Path;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single editing intent against one section of the document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum EditIntent {
    /// Set or clear one field.
    ///
    /// `None` clears the leaf. An explicit null value is the same intent:
    /// both serialize as `"value": null`, and the section binder treats
    /// null as a clear, so the wire form and the in-process form agree.
    UpdateField {
        section: String,
        path: Path,
        #[serde(default)]
        value: Option<Value>,
    },
    /// Shallow-merge a partial style value into a style record.
    UpdateStyle {
        section: String,
        key: String,
        value: Value,
    },
    /// Apply a collection operation to the collection at `path`.
    Collection {
        section: String,
        path: Path,
        op: CollectionOp,
    },
    /// Toggle the promo price of the item at `item`.
    SetPromo {
        section: String,
        item: Path,
        enabled: bool,
    },
}

/// Apply one intent, returning the new document.
///
/// Pure and synchronous: the input document is unchanged, and on error
/// nothing was applied. Serializing concurrent intents is the host's job;
/// within one call, last writer wins.
pub fn apply_intent(doc: &Value, intent: &EditIntent) -> ModelResult<Value> {
    match intent {
        EditIntent::UpdateField {
            section,
            path,
            value,
        } => section::write_field(doc, section, path, value.clone()),
        EditIntent::UpdateStyle {
            section,
            key,
            value,
        } => section::write_style(doc, section, key, value),
        EditIntent::Collection { section, path, op } => {
            section::apply_collection_op(doc, section, path, op)
        }
        EditIntent::SetPromo {
            section,
            item,
            enabled,
        } => section::set_promo_enabled(doc, section, item, *enabled),
    }
}
