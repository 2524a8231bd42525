//! Derived display fields computed from primitive inputs.
//!
//! Pure input→output functions, re-run whenever their inputs change.
//! None of them can fail: unknown icon names or half-typed values are
//! normal transient states while a user is editing.

use crate::catalog::{ColorDef, IconDef};
use serde_json::Value;

/// Sentinel label meaning "free".
pub const FREE_LABEL: &str = "Offert";

/// Format a price as its display label.
///
/// Zero means free ("Offert"); otherwise `"{price} {currency}"`, with
/// whole amounts printed without decimals and fractional amounts with up
/// to two (trailing zeros trimmed).
pub fn price_label(price: f64, currency: &str) -> String {
    if price <= 0.0 {
        return FREE_LABEL.to_string();
    }
    format!("{} {}", format_amount(price), currency)
}

fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        let text = format!("{amount:.2}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Percentage saved relative to the original price, round-half-up.
///
/// `None` unless the original price is strictly greater than the current
/// one. Anything else is a stale or meaningless promo state.
pub fn discount_percent(price: f64, original_price: f64) -> Option<u32> {
    if original_price > price && price >= 0.0 {
        Some(((1.0 - price / original_price) * 100.0).round() as u32)
    } else {
        None
    }
}

/// The original price, but only while it still denotes a real promo.
///
/// Guards against stale `original ≤ price` values left over from prior
/// edits.
pub fn effective_promo(price: f64, original_price: Option<f64>) -> Option<f64> {
    original_price.filter(|original| *original > price)
}

/// Look up an icon by name, falling back to the catalog's first entry.
///
/// `None` only when the catalog itself is empty.
pub fn resolve_icon<'a>(name: &str, catalog: &'a [IconDef]) -> Option<&'a IconDef> {
    catalog
        .iter()
        .find(|icon| icon.name == name)
        .or_else(|| catalog.first())
}

/// Use `value` when non-empty, else the palette's first entry.
pub fn resolve_color<'a>(value: &'a str, palette: &'a [ColorDef]) -> Option<&'a str> {
    if value.is_empty() {
        palette.first().map(String::as_str)
    } else {
        Some(value)
    }
}

/// Resolve a product's category reference against the category collection.
///
/// Dangling references resolve to `None` ("no category"); deleting a
/// category never cascades into the products that pointed at it.
pub fn resolve_category<'a>(category_id: &str, categories: &'a [Value]) -> Option<&'a Value> {
    categories
        .iter()
        .find(|category| crate::collection::item_id(category) == Some(category_id))
}
