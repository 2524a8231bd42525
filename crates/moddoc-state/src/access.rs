//! Pure read/write access at field paths.
//!
//! Every write returns a new document value and leaves the input untouched.
//! A failing write returns an error and nothing else: the caller's document
//! is never partially written.

use crate::error::value_type_name;
use crate::{Path, Seg, StateError, StateResult};
use serde_json::{Map, Value};

/// Read the value at `path`, or `None` if any step is absent.
///
/// Reading never errors: absence is an ordinary answer while a user is
/// mid-edit.
pub fn get_at<'a>(doc: &'a Value, path: &Path) -> Option<&'a Value> {
    let mut node = doc;
    for seg in path {
        node = match seg {
            Seg::Key(k) => node.as_object()?.get(k)?,
            Seg::Index(i) => node.as_array()?.get(*i)?,
        };
    }
    Some(node)
}

/// Set `value` at `path`, returning the new document.
///
/// Missing intermediate keys are created as empty mappings. Traversing
/// through a scalar fails with `TypeMismatch` so authoring bugs surface
/// instead of silently corrupting sibling data. Index segments must land
/// inside an existing collection, in range.
pub fn set_at(doc: &Value, path: &Path, value: Value) -> StateResult<Value> {
    if path.is_empty() {
        return Err(StateError::invalid_path(
            "cannot set the document root; use a non-empty path",
        ));
    }
    let mut next = doc.clone();
    set_in(&mut next, path.segments(), path, 0, value)?;
    Ok(next)
}

/// Remove the leaf of `path`, returning the new document.
///
/// Deleting an absent leaf is a no-op; documents never hold explicit
/// "absent" markers. Traversal through a scalar still fails with
/// `TypeMismatch`, same as [`set_at`].
pub fn delete_at(doc: &Value, path: &Path) -> StateResult<Value> {
    if path.is_empty() {
        return Err(StateError::invalid_path(
            "cannot delete the document root; use a non-empty path",
        ));
    }
    let mut next = doc.clone();
    delete_in(&mut next, path.segments(), path, 0)?;
    Ok(next)
}

/// Shallow-merge an object into the mapping at `path`, returning the new
/// document.
///
/// Sibling keys at the target survive: merging `{color: "#fff"}` into a
/// style record keeps its other sub-keys. An absent target is created;
/// a non-mapping target fails with `TypeMismatch`.
pub fn merge_at(doc: &Value, path: &Path, patch: &Value) -> StateResult<Value> {
    let entries = patch.as_object().ok_or_else(|| {
        StateError::type_mismatch(path.clone(), "object", value_type_name(patch))
    })?;
    let mut next = doc.clone();
    merge_in(&mut next, path.segments(), path, 0, entries)?;
    Ok(next)
}

/// Path of the first `depth + 1` segments, for error diagnostics.
fn prefix_path(full: &Path, depth: usize) -> Path {
    Path::from_segments(full.segments()[..=depth].to_vec())
}

fn set_in(
    node: &mut Value,
    segs: &[Seg],
    full: &Path,
    depth: usize,
    value: Value,
) -> StateResult<()> {
    let Some((seg, rest)) = segs.split_first() else {
        return Err(StateError::invalid_path("empty path"));
    };
    match (seg, &mut *node) {
        (Seg::Key(k), Value::Object(map)) => {
            if rest.is_empty() {
                map.insert(k.clone(), value);
                Ok(())
            } else {
                let child = map
                    .entry(k.clone())
                    .or_insert_with(|| Value::Object(Map::new()));
                set_in(child, rest, full, depth + 1, value)
            }
        }
        (Seg::Index(i), Value::Array(arr)) => {
            let len = arr.len();
            match arr.get_mut(*i) {
                Some(child) => {
                    if rest.is_empty() {
                        *child = value;
                        Ok(())
                    } else {
                        set_in(child, rest, full, depth + 1, value)
                    }
                }
                None => Err(StateError::index_out_of_bounds(
                    prefix_path(full, depth),
                    *i,
                    len,
                )),
            }
        }
        (Seg::Key(_), other) => Err(StateError::type_mismatch(
            prefix_path(full, depth),
            "object",
            value_type_name(other),
        )),
        (Seg::Index(_), other) => Err(StateError::type_mismatch(
            prefix_path(full, depth),
            "array",
            value_type_name(other),
        )),
    }
}

fn delete_in(node: &mut Value, segs: &[Seg], full: &Path, depth: usize) -> StateResult<()> {
    let Some((seg, rest)) = segs.split_first() else {
        return Ok(());
    };
    if rest.is_empty() {
        return match (seg, &mut *node) {
            (Seg::Key(k), Value::Object(map)) => {
                // shift_remove keeps the order of the remaining keys
                map.shift_remove(k);
                Ok(())
            }
            (Seg::Index(i), Value::Array(arr)) => {
                if *i < arr.len() {
                    arr.remove(*i);
                }
                Ok(())
            }
            (Seg::Key(_), other) => Err(StateError::type_mismatch(
                prefix_path(full, depth),
                "object",
                value_type_name(other),
            )),
            (Seg::Index(_), other) => Err(StateError::type_mismatch(
                prefix_path(full, depth),
                "array",
                value_type_name(other),
            )),
        };
    }
    match (seg, &mut *node) {
        (Seg::Key(k), Value::Object(map)) => match map.get_mut(k) {
            Some(child) => delete_in(child, rest, full, depth + 1),
            None => Ok(()),
        },
        (Seg::Index(i), Value::Array(arr)) => match arr.get_mut(*i) {
            Some(child) => delete_in(child, rest, full, depth + 1),
            None => Ok(()),
        },
        (Seg::Key(_), other) => Err(StateError::type_mismatch(
            prefix_path(full, depth),
            "object",
            value_type_name(other),
        )),
        (Seg::Index(_), other) => Err(StateError::type_mismatch(
            prefix_path(full, depth),
            "array",
            value_type_name(other),
        )),
    }
}

fn merge_in(
    node: &mut Value,
    segs: &[Seg],
    full: &Path,
    depth: usize,
    entries: &Map<String, Value>,
) -> StateResult<()> {
    let Some((seg, rest)) = segs.split_first() else {
        return match node {
            Value::Object(map) => {
                for (k, v) in entries {
                    map.insert(k.clone(), v.clone());
                }
                Ok(())
            }
            other => Err(StateError::type_mismatch(
                full.clone(),
                "object",
                value_type_name(other),
            )),
        };
    };
    match (seg, &mut *node) {
        (Seg::Key(k), Value::Object(map)) => {
            let child = map
                .entry(k.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            merge_in(child, rest, full, depth + 1, entries)
        }
        (Seg::Index(i), Value::Array(arr)) => {
            let len = arr.len();
            match arr.get_mut(*i) {
                Some(child) => merge_in(child, rest, full, depth + 1, entries),
                None => Err(StateError::index_out_of_bounds(
                    prefix_path(full, depth),
                    *i,
                    len,
                )),
            }
        }
        (Seg::Key(_), other) => Err(StateError::type_mismatch(
            prefix_path(full, depth),
            "object",
            value_type_name(other),
        )),
        (Seg::Index(_), other) => Err(StateError::type_mismatch(
            prefix_path(full, depth),
            "array",
            value_type_name(other),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;
    use serde_json::json;

    #[test]
    fn test_get_at_nested() {
        let doc = json!({"booking": {"services": [{"name": "Coupe"}]}});
        assert_eq!(
            get_at(&doc, &path!("booking", "services", 0, "name")),
            Some(&json!("Coupe"))
        );
        assert_eq!(get_at(&doc, &path!("booking", "missing")), None);
        assert_eq!(get_at(&doc, &path!("booking", "services", 3)), None);
    }

    #[test]
    fn test_get_at_root() {
        let doc = json!({"x": 1});
        assert_eq!(get_at(&doc, &Path::root()), Some(&doc));
    }

    #[test]
    fn test_set_at_leaves_input_untouched() {
        let doc = json!({"booking": {"title": "Réserver"}});
        let next = set_at(&doc, &path!("booking", "title"), json!("Rendez-vous")).unwrap();
        assert_eq!(doc["booking"]["title"], "Réserver");
        assert_eq!(next["booking"]["title"], "Rendez-vous");
    }

    #[test]
    fn test_set_at_preserves_siblings() {
        let doc = json!({"booking": {"title": "T", "subtitle": "S"}});
        let next = set_at(&doc, &path!("booking", "title"), json!("U")).unwrap();
        assert_eq!(next["booking"]["subtitle"], "S");
    }

    #[test]
    fn test_set_at_creates_intermediate_mappings() {
        let doc = json!({});
        let next = set_at(&doc, &path!("a", "b", "c"), json!(42)).unwrap();
        assert_eq!(next["a"]["b"]["c"], 42);
    }

    #[test]
    fn test_set_at_empty_path_is_invalid() {
        let doc = json!({});
        assert!(matches!(
            set_at(&doc, &Path::root(), json!(1)),
            Err(StateError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_set_at_through_scalar_fails() {
        let doc = json!({"title": "plain text"});
        let err = set_at(&doc, &path!("title", "nested"), json!(1)).unwrap_err();
        assert!(matches!(err, StateError::TypeMismatch { .. }));
        assert_eq!(doc["title"], "plain text");
    }

    #[test]
    fn test_set_at_through_null_fails_like_a_scalar() {
        let doc = json!({"style": null});
        let err = set_at(&doc, &path!("style", "color"), json!("#fff")).unwrap_err();
        assert!(matches!(
            err,
            StateError::TypeMismatch { found: "null", .. }
        ));
        // the caller clears the path deliberately, then writes
        let cleared = delete_at(&doc, &path!("style")).unwrap();
        let next = set_at(&cleared, &path!("style", "color"), json!("#fff")).unwrap();
        assert_eq!(next["style"]["color"], "#fff");
    }

    #[test]
    fn test_delete_at_through_null_fails_like_a_scalar() {
        let doc = json!({"style": null});
        assert!(matches!(
            delete_at(&doc, &path!("style", "color")),
            Err(StateError::TypeMismatch { found: "null", .. })
        ));
    }

    #[test]
    fn test_merge_at_null_target_fails_like_a_scalar() {
        let doc = json!({"style": null});
        assert!(matches!(
            merge_at(&doc, &path!("style"), &json!({"radius": 8})),
            Err(StateError::TypeMismatch { found: "null", .. })
        ));
    }

    #[test]
    fn test_set_at_index_out_of_bounds() {
        let doc = json!({"items": [1, 2]});
        let err = set_at(&doc, &path!("items", 5), json!(3)).unwrap_err();
        assert!(matches!(
            err,
            StateError::IndexOutOfBounds { index: 5, len: 2, .. }
        ));
    }

    #[test]
    fn test_set_then_get_round_trip() {
        let doc = json!({"a": {"b": 1}});
        let p = path!("a", "c", "d");
        let next = set_at(&doc, &p, json!("v")).unwrap();
        assert_eq!(get_at(&next, &p), Some(&json!("v")));
    }

    #[test]
    fn test_set_existing_value_is_noop_round_trip() {
        let doc = json!({"a": {"b": 1, "c": [true, null]}});
        let p = path!("a", "b");
        let current = get_at(&doc, &p).unwrap().clone();
        let next = set_at(&doc, &p, current).unwrap();
        assert_eq!(next, doc);
    }

    #[test]
    fn test_delete_at_removes_leaf() {
        let doc = json!({"a": {"b": 1, "c": 2}});
        let next = delete_at(&doc, &path!("a", "b")).unwrap();
        assert!(next["a"].get("b").is_none());
        assert_eq!(next["a"]["c"], 2);
    }

    #[test]
    fn test_delete_at_absent_leaf_is_noop() {
        let doc = json!({"a": {"b": 1}});
        let next = delete_at(&doc, &path!("a", "missing")).unwrap();
        assert_eq!(next, doc);
        let next = delete_at(&doc, &path!("x", "y", "z")).unwrap();
        assert_eq!(next, doc);
    }

    #[test]
    fn test_delete_at_preserves_key_order() {
        let doc = json!({"first": 1, "second": 2, "third": 3, "fourth": 4});
        let next = delete_at(&doc, &path!("second")).unwrap();
        let keys: Vec<&String> = next.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["first", "third", "fourth"]);
    }

    #[test]
    fn test_delete_at_through_scalar_fails() {
        let doc = json!({"a": 1});
        assert!(matches!(
            delete_at(&doc, &path!("a", "b")),
            Err(StateError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_merge_at_preserves_sibling_subkeys() {
        let doc = json!({"style": {"background": {"color": "#000", "opacity": 0.5}}});
        let next = merge_at(
            &doc,
            &path!("style", "background"),
            &json!({"color": "#fff"}),
        )
        .unwrap();
        assert_eq!(next["style"]["background"]["color"], "#fff");
        assert_eq!(next["style"]["background"]["opacity"], 0.5);
    }

    #[test]
    fn test_merge_at_creates_absent_target() {
        let doc = json!({});
        let next = merge_at(&doc, &path!("style", "card"), &json!({"radius": 8})).unwrap();
        assert_eq!(next["style"]["card"]["radius"], 8);
    }

    #[test]
    fn test_merge_at_rejects_non_object_patch() {
        let doc = json!({});
        assert!(matches!(
            merge_at(&doc, &path!("style"), &json!(3)),
            Err(StateError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_merge_at_rejects_scalar_target() {
        let doc = json!({"style": "compact"});
        assert!(matches!(
            merge_at(&doc, &path!("style"), &json!({"radius": 8})),
            Err(StateError::TypeMismatch { .. })
        ));
    }
}
