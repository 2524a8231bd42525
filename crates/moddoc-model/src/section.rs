//! Binding editors to one named top-level section of the document.
//!
//! Editors never see the whole document: reads hand them their own
//! section, writes compose the section name onto the field path. Style
//! sub-records are merge targets, so a partial style write keeps its
//! sibling sub-keys.

use crate::collection::{self, CollectionOp};
use crate::derived::price_label;
use crate::{ModelError, ModelResult};
use moddoc_state::{delete_at, get_at, merge_at, path, set_at, Path, Seg, StateError};
use serde_json::{json, Map, Value};

/// Currency used when a section doesn't carry its own `currency` field.
pub const DEFAULT_CURRENCY: &str = "€";

/// Read a section by name.
///
/// A missing section reads as an empty mapping. Callers never see
/// null/absent.
pub fn read_section(doc: &Value, name: &str) -> Map<String, Value> {
    get_at(doc, &path!(name))
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}

/// Read a style record by key, empty when absent.
pub fn read_style(doc: &Value, name: &str, style_key: &str) -> Map<String, Value> {
    get_at(doc, &path!(name, style_key))
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}

/// Write one field inside a section, returning the new document.
///
/// `None` deletes the leaf, and so does an explicit null value: documents
/// never store absent markers, and on the wire the two are the same
/// intent. Writes routed at a `price` field also refresh
/// the sibling `priceLabel` unless the user has set a manual label; a
/// direct `priceLabel` write records that override, and the last explicit
/// write wins from then on.
pub fn write_field(
    doc: &Value,
    name: &str,
    field_path: &Path,
    value: Option<Value>,
) -> ModelResult<Value> {
    if field_path.is_empty() {
        return Err(StateError::invalid_path(
            "field path must name a field inside the section",
        )
        .into());
    }
    let value = value.filter(|v| !v.is_null());
    let full = Path::root().key(name).join(field_path);
    tracing::debug!(section = name, path = %full, delete = value.is_none(), "field update");

    let is_delete = value.is_none();
    let next = match value {
        Some(v) => set_at(doc, &full, v)?,
        None => delete_at(doc, &full)?,
    };
    refresh_after_field_write(next, name, &full, is_delete)
}

/// Shallow-merge a partial style value into a section's style record.
pub fn write_style(doc: &Value, name: &str, style_key: &str, partial: &Value) -> ModelResult<Value> {
    tracing::debug!(section = name, style_key, "style merge");
    Ok(merge_at(doc, &path!(name, style_key), partial)?)
}

/// Apply a collection operation to the collection at `collection_path`
/// inside a section, returning the new document.
///
/// A missing collection reads as empty. The touched item's `priceLabel`
/// is re-derived from its `price`, honoring any manual label override.
pub fn apply_collection_op(
    doc: &Value,
    name: &str,
    collection_path: &Path,
    op: &CollectionOp,
) -> ModelResult<Value> {
    let full = Path::root().key(name).join(collection_path);
    tracing::debug!(section = name, path = %full, op = ?op, "collection op");

    let items: Vec<Value> = match get_at(doc, &full) {
        Some(Value::Array(items)) => items.clone(),
        Some(Value::Null) | None => Vec::new(),
        Some(_) => return Err(ModelError::NotACollection { path: full }),
    };

    let mut next_items = collection::apply(&items, op)?;
    let touched = match op {
        CollectionOp::Append { .. } => next_items.len().checked_sub(1),
        CollectionOp::UpdateAt { index, .. } => Some(*index),
        CollectionOp::DuplicateAt { index } => Some(index + 1),
        CollectionOp::DeleteAt { .. } | CollectionOp::Reorder { .. } => None,
    };
    if let Some(index) = touched {
        let currency = section_currency(doc, name);
        refresh_item_label(&mut next_items[index], &currency);
    }

    Ok(set_at(doc, &full, Value::Array(next_items))?)
}

/// Toggle an item's promo price on or off, returning the new document.
///
/// Disabling parks the current `originalPrice` in `savedOriginalPrice`
/// instead of discarding it (the same keep-while-hidden policy as the
/// schedule and form records), and re-enabling restores it. Only when no
/// value was ever entered does enabling fall back to `price * 1.3`.
pub fn set_promo_enabled(
    doc: &Value,
    name: &str,
    item_path: &Path,
    enabled: bool,
) -> ModelResult<Value> {
    let full = Path::root().key(name).join(item_path);
    tracing::debug!(section = name, path = %full, enabled, "promo toggle");

    let Some(item) = get_at(doc, &full).and_then(Value::as_object) else {
        return Err(StateError::invalid_path(format!("no item at {full}")).into());
    };

    if enabled {
        let price = item.get("price").and_then(Value::as_f64).unwrap_or(0.0);
        let restored = item
            .get("savedOriginalPrice")
            .and_then(Value::as_f64)
            .unwrap_or(price * 1.3);
        Ok(set_at(doc, &full.clone().key("originalPrice"), json!(restored))?)
    } else {
        let mut next = doc.clone();
        if let Some(original) = item.get("originalPrice").cloned() {
            next = set_at(&next, &full.clone().key("savedOriginalPrice"), original)?;
        }
        Ok(delete_at(&next, &full.clone().key("originalPrice"))?)
    }
}

fn section_currency(doc: &Value, name: &str) -> String {
    get_at(doc, &path!(name, "currency"))
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_CURRENCY)
        .to_string()
}

fn refresh_after_field_write(
    doc: Value,
    name: &str,
    full: &Path,
    was_delete: bool,
) -> ModelResult<Value> {
    let Some(leaf) = full.last().and_then(Seg::as_key) else {
        return Ok(doc);
    };
    let Some(parent) = full.parent().filter(|p| !p.is_empty()) else {
        return Ok(doc);
    };
    match leaf {
        "price" => {
            let Some(item) = get_at(&doc, &parent).and_then(Value::as_object) else {
                return Ok(doc);
            };
            if item
                .get("priceLabelCustom")
                .and_then(Value::as_bool)
                .unwrap_or(false)
            {
                return Ok(doc);
            }
            let Some(price) = item.get("price").and_then(Value::as_f64) else {
                return Ok(doc);
            };
            let label = price_label(price, &section_currency(&doc, name));
            Ok(set_at(
                &doc,
                &parent.clone().key("priceLabel"),
                Value::String(label),
            )?)
        }
        "priceLabel" => {
            if get_at(&doc, &parent).map(Value::is_object) != Some(true) {
                return Ok(doc);
            }
            let flag = parent.clone().key("priceLabelCustom");
            if was_delete {
                // clearing the label also clears the override
                Ok(delete_at(&doc, &flag)?)
            } else {
                Ok(set_at(&doc, &flag, Value::Bool(true))?)
            }
        }
        _ => Ok(doc),
    }
}

fn refresh_item_label(item: &mut Value, currency: &str) {
    let Some(map) = item.as_object_mut() else {
        return;
    };
    if map
        .get("priceLabelCustom")
        .and_then(Value::as_bool)
        .unwrap_or(false)
    {
        return;
    }
    let Some(price) = map.get("price").and_then(Value::as_f64) else {
        return;
    };
    map.insert(
        "priceLabel".to_string(),
        Value::String(price_label(price, currency)),
    );
}
