//! Edge case tests for moddoc-state.

use moddoc_state::{
    apply_patch, delete_at, get_at, parse_path, path, set_at, Op, Patch, Path, StateError,
};
use serde_json::json;

// ============================================================================
// set_at / get_at edge cases
// ============================================================================

#[test]
fn test_set_get_round_trip_across_shapes() {
    let doc = json!({
        "booking": {
            "title": "Réservation",
            "services": [{"id": "s1", "price": 45}],
            "style": {"cardRadius": 12}
        }
    });

    for (path_text, value) in [
        ("booking.title", json!("Rendez-vous")),
        ("booking.services[0].price", json!(50)),
        ("booking.style.cardShadow", json!("soft")),
        ("ecommerce.products", json!([])),
    ] {
        let p = parse_path(path_text).unwrap();
        let next = set_at(&doc, &p, value.clone()).unwrap();
        assert_eq!(get_at(&next, &p), Some(&value), "path {path_text}");
    }
}

#[test]
fn test_set_replaces_only_target_branch() {
    let doc = json!({
        "booking": {"title": "A", "services": [{"id": "s1"}]},
        "ecommerce": {"products": []}
    });
    let next = set_at(&doc, &path!("booking", "title"), json!("B")).unwrap();
    assert_eq!(next["booking"]["services"], doc["booking"]["services"]);
    assert_eq!(next["ecommerce"], doc["ecommerce"]);
}

#[test]
fn test_set_deep_creation_then_delete_round_trip() {
    let doc = json!({});
    let p = path!("a", "b", "c", "d");
    let next = set_at(&doc, &p, json!(42)).unwrap();
    assert_eq!(next["a"]["b"]["c"]["d"], 42);

    let back = delete_at(&next, &p).unwrap();
    // ancestors created along the way remain as empty-ish mappings
    assert!(back["a"]["b"]["c"].as_object().unwrap().is_empty());
}

#[test]
fn test_traversal_through_each_scalar_kind_fails() {
    for scalar in [json!("text"), json!(3), json!(true), json!(null)] {
        let doc = json!({"field": scalar});
        let err = set_at(&doc, &path!("field", "sub"), json!(1)).unwrap_err();
        assert!(matches!(err, StateError::TypeMismatch { .. }));
    }
}

#[test]
fn test_indexing_an_object_fails() {
    let doc = json!({"style": {"a": 1}});
    let err = set_at(&doc, &path!("style", 0), json!(1)).unwrap_err();
    assert!(matches!(
        err,
        StateError::TypeMismatch {
            expected: "array",
            ..
        }
    ));
}

// ============================================================================
// serialization boundary
// ============================================================================

#[test]
fn test_document_round_trip_preserves_key_and_item_order() {
    let text = r#"{"zeta":1,"alpha":{"nine":9,"one":1},"items":[{"id":"c"},{"id":"a"},{"id":"b"}]}"#;
    let doc: serde_json::Value = serde_json::from_str(text).unwrap();
    let back = serde_json::to_string(&doc).unwrap();
    assert_eq!(back, text);
}

#[test]
fn test_edited_document_preserves_untouched_key_order() {
    let doc: serde_json::Value =
        serde_json::from_str(r#"{"z":1,"m":2,"a":3}"#).unwrap();
    let next = set_at(&doc, &path!("m"), json!(20)).unwrap();
    let keys: Vec<&String> = next.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["z", "m", "a"]);
}

// ============================================================================
// patch application
// ============================================================================

#[test]
fn test_patch_combined_ops() {
    let doc = json!({"booking": {"title": "T", "style": {"radius": 4, "shadow": "none"}}});
    let patch = Patch::new()
        .with_op(Op::set(path!("booking", "subtitle"), json!("S")))
        .with_op(Op::merge(path!("booking", "style"), json!({"radius": 8})))
        .with_op(Op::delete(path!("booking", "title")));
    let result = apply_patch(&doc, &patch).unwrap();

    assert_eq!(result["booking"]["subtitle"], "S");
    assert_eq!(result["booking"]["style"]["radius"], 8);
    assert_eq!(result["booking"]["style"]["shadow"], "none");
    assert!(result["booking"].get("title").is_none());
}

#[test]
fn test_patch_mid_failure_is_atomic() {
    let doc = json!({"n": 7});
    let patch = Patch::new()
        .with_op(Op::set(path!("ok"), json!(true)))
        .with_op(Op::merge(path!("n"), json!({"x": 1})));
    assert!(apply_patch(&doc, &patch).is_err());
    assert_eq!(doc, json!({"n": 7}));
}

#[test]
fn test_empty_path_set_rejected() {
    let doc = json!({});
    let err = set_at(&doc, &Path::root(), json!(1)).unwrap_err();
    assert!(matches!(err, StateError::InvalidPath { .. }));
}
