//! Contact-form field record.
//!
//! Same closed-set pattern as the schedule: a fixed set of field keys,
//! each holding show/required/label sub-fields, with per-key defaults
//! synthesized at read time. Toggling `show` never erases the paired
//! `required`/`label` values.

use crate::ModelResult;
use moddoc_state::{merge_at, path};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// The fixed contact-form field keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormFieldKey {
    FirstName,
    LastName,
    Email,
    Phone,
    Message,
}

impl FormFieldKey {
    /// All form fields, in display order.
    pub const ALL: [FormFieldKey; 5] = [
        FormFieldKey::FirstName,
        FormFieldKey::LastName,
        FormFieldKey::Email,
        FormFieldKey::Phone,
        FormFieldKey::Message,
    ];

    /// The record key for this field.
    pub fn key(&self) -> &'static str {
        match self {
            FormFieldKey::FirstName => "firstName",
            FormFieldKey::LastName => "lastName",
            FormFieldKey::Email => "email",
            FormFieldKey::Phone => "phone",
            FormFieldKey::Message => "message",
        }
    }

    fn default_label(&self) -> &'static str {
        match self {
            FormFieldKey::FirstName => "Prénom",
            FormFieldKey::LastName => "Nom",
            FormFieldKey::Email => "Email",
            FormFieldKey::Phone => "Téléphone",
            FormFieldKey::Message => "Message",
        }
    }

    fn default_required(&self) -> bool {
        // the free-text message is the one optional field by default
        !matches!(self, FormFieldKey::Message)
    }
}

/// One contact-form field's configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub show: bool,
    pub required: bool,
    pub label: String,
}

impl FormField {
    /// The documented default for a given key.
    pub fn default_for(key: FormFieldKey) -> Self {
        Self {
            show: true,
            required: key.default_required(),
            label: key.default_label().to_string(),
        }
    }
}

/// Read one field, synthesizing its per-key default for anything absent.
pub fn field(record: &Value, key: FormFieldKey) -> FormField {
    let defaults = FormField::default_for(key);
    match record.get(key.key()) {
        Some(Value::Object(entry)) => FormField {
            show: entry
                .get("show")
                .and_then(Value::as_bool)
                .unwrap_or(defaults.show),
            required: entry
                .get("required")
                .and_then(Value::as_bool)
                .unwrap_or(defaults.required),
            label: entry
                .get("label")
                .and_then(Value::as_str)
                .unwrap_or(&defaults.label)
                .to_string(),
        },
        _ => defaults,
    }
}

/// Show or hide a field, returning the new record.
///
/// Only `show` is written; `required` and `label` survive hidden so
/// re-showing the field restores them.
pub fn set_show(record: &Value, key: FormFieldKey, show: bool) -> ModelResult<Value> {
    Ok(merge_at(record, &path!(key.key()), &json!({"show": show}))?)
}

/// Mark a field required or optional, returning the new record.
pub fn set_required(record: &Value, key: FormFieldKey, required: bool) -> ModelResult<Value> {
    Ok(merge_at(
        record,
        &path!(key.key()),
        &json!({"required": required}),
    )?)
}

/// Relabel a field, returning the new record.
pub fn set_label(record: &Value, key: FormFieldKey, label: &str) -> ModelResult<Value> {
    Ok(merge_at(record, &path!(key.key()), &json!({"label": label}))?)
}

/// A complete record with per-key defaults filled in, in display order.
pub fn with_defaults(record: &Value) -> Value {
    let mut complete = Map::new();
    for key in FormFieldKey::ALL {
        let entry = field(record, key);
        complete.insert(
            key.key().to_string(),
            json!({"show": entry.show, "required": entry.required, "label": entry.label}),
        );
    }
    Value::Object(complete)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_vary_per_key() {
        let record = json!({});
        let email = field(&record, FormFieldKey::Email);
        assert!(email.show);
        assert!(email.required);
        assert_eq!(email.label, "Email");

        let message = field(&record, FormFieldKey::Message);
        assert!(message.show);
        assert!(!message.required);
    }

    #[test]
    fn test_hide_preserves_label_and_required() {
        let record = json!({"phone": {"show": true, "required": false, "label": "Portable"}});

        let hidden = set_show(&record, FormFieldKey::Phone, false).unwrap();
        assert!(!field(&hidden, FormFieldKey::Phone).show);

        let shown = set_show(&hidden, FormFieldKey::Phone, true).unwrap();
        let phone = field(&shown, FormFieldKey::Phone);
        assert!(phone.show);
        assert!(!phone.required);
        assert_eq!(phone.label, "Portable");
    }

    #[test]
    fn test_set_label_and_required() {
        let record = json!({});
        let next = set_label(&record, FormFieldKey::FirstName, "Votre prénom").unwrap();
        let next = set_required(&next, FormFieldKey::FirstName, false).unwrap();
        let first_name = field(&next, FormFieldKey::FirstName);
        assert_eq!(first_name.label, "Votre prénom");
        assert!(!first_name.required);
        // show was never written, default still answers
        assert!(first_name.show);
    }

    #[test]
    fn test_with_defaults_closed_key_set() {
        let record = json!({"email": {"required": false}, "unknown": {"show": true}});
        let complete = with_defaults(&record);
        let keys: Vec<&String> = complete.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["firstName", "lastName", "email", "phone", "message"]);
        assert_eq!(complete["email"]["required"], false);
    }
}
