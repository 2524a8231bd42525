//! Weekly opening-hours record.
//!
//! A schedule record maps each of the 7 weekday keys to an
//! enabled/start/end entry. The key set is closed: the model never
//! introduces a key outside [`Weekday::ALL`]. Defaults are synthesized at
//! read time; reading a missing weekday never writes it.

use crate::ModelResult;
use moddoc_state::{merge_at, path};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// The seven fixed weekday keys, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// The record key for this weekday.
    pub fn key(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }
}

/// One weekday's opening hours.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub enabled: bool,
    /// Opening time, `"HH:MM"`.
    pub start: String,
    /// Closing time, `"HH:MM"`.
    pub end: String,
}

impl Default for DaySchedule {
    fn default() -> Self {
        Self {
            enabled: false,
            start: "09:00".to_string(),
            end: "18:00".to_string(),
        }
    }
}

/// Read one weekday, synthesizing the default for anything absent.
///
/// Partial entries fill in per-field: a day holding only `enabled` keeps
/// the default hours. The record itself is never written.
pub fn day(record: &Value, weekday: Weekday) -> DaySchedule {
    let defaults = DaySchedule::default();
    match record.get(weekday.key()) {
        Some(Value::Object(entry)) => DaySchedule {
            enabled: entry
                .get("enabled")
                .and_then(Value::as_bool)
                .unwrap_or(defaults.enabled),
            start: entry
                .get("start")
                .and_then(Value::as_str)
                .unwrap_or(&defaults.start)
                .to_string(),
            end: entry
                .get("end")
                .and_then(Value::as_str)
                .unwrap_or(&defaults.end)
                .to_string(),
        },
        _ => defaults,
    }
}

/// Toggle a weekday open or closed, returning the new record.
///
/// Only the `enabled` flag is written: the paired start/end values stay
/// put while disabled, so re-enabling restores them exactly.
pub fn set_enabled(record: &Value, weekday: Weekday, enabled: bool) -> ModelResult<Value> {
    Ok(merge_at(
        record,
        &path!(weekday.key()),
        &json!({"enabled": enabled}),
    )?)
}

/// Set a weekday's opening hours, returning the new record.
pub fn set_hours(record: &Value, weekday: Weekday, start: &str, end: &str) -> ModelResult<Value> {
    Ok(merge_at(
        record,
        &path!(weekday.key()),
        &json!({"start": start, "end": end}),
    )?)
}

/// A complete 7-key record with defaults filled in, Monday first.
pub fn with_defaults(record: &Value) -> Value {
    let mut complete = Map::new();
    for weekday in Weekday::ALL {
        let entry = day(record, weekday);
        complete.insert(
            weekday.key().to_string(),
            json!({"enabled": entry.enabled, "start": entry.start, "end": entry.end}),
        );
    }
    Value::Object(complete)
}
