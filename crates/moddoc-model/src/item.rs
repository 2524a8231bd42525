//! Typed item records for the module collections.
//!
//! Collections travel as raw JSON in the document; these types are the
//! construction and normalization side: every constructor yields an item
//! that already satisfies the field invariants (fresh unique id, price
//! never negative, promo price only when it actually is one, rating in
//! half-star steps).

use crate::collection::gen_item_id;
use crate::derived::{effective_promo, price_label};
use crate::ModelResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Clamp a rating to `[0, 5]` and snap it to steps of 0.5.
pub fn snap_rating(rating: f64) -> f64 {
    (rating.clamp(0.0, 5.0) * 2.0).round() / 2.0
}

fn clamp_price(price: f64) -> f64 {
    price.max(0.0)
}

/// A bookable service (booking module).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    /// Display duration, e.g. `"45 min"`.
    pub duration: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    pub price_label: String,
    pub description: String,
    pub popular: bool,
}

impl Service {
    /// Create a service with a fresh id and a derived price label.
    pub fn new(name: impl Into<String>, price: f64, currency: &str) -> Self {
        let price = clamp_price(price);
        Self {
            id: gen_item_id(),
            name: name.into(),
            icon: String::new(),
            color: String::new(),
            duration: String::new(),
            price,
            original_price: None,
            price_label: price_label(price, currency),
            description: String::new(),
            popular: false,
        }
    }

    /// Re-establish the field invariants after arbitrary edits.
    pub fn normalized(mut self) -> Self {
        self.price = clamp_price(self.price);
        self.original_price = effective_promo(self.price, self.original_price);
        self
    }

    /// Convert to the raw item representation stored in the document.
    pub fn to_item(&self) -> ModelResult<Value> {
        Ok(serde_json::to_value(self).map_err(moddoc_state::StateError::from)?)
    }
}

/// A sellable product (e-commerce module).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Image reference (URL or opaque blob handle); storage is the
    /// host's concern.
    pub image: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    /// Referenced [`Category`] id; may dangle after a category delete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub in_stock: bool,
    pub rating: f64,
    pub review_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

impl Product {
    /// Create a product with a fresh id.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: gen_item_id(),
            name: name.into(),
            image: String::new(),
            price: clamp_price(price),
            original_price: None,
            category: None,
            in_stock: true,
            rating: 0.0,
            review_count: 0,
            badge: None,
        }
    }

    /// Re-establish the field invariants after arbitrary edits.
    pub fn normalized(mut self) -> Self {
        self.price = clamp_price(self.price);
        self.original_price = effective_promo(self.price, self.original_price);
        self.rating = snap_rating(self.rating);
        self
    }

    /// Convert to the raw item representation stored in the document.
    pub fn to_item(&self) -> ModelResult<Value> {
        Ok(serde_json::to_value(self).map_err(moddoc_state::StateError::from)?)
    }
}

/// A product category (e-commerce module).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
}

impl Category {
    /// Create a category with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: gen_item_id(),
            name: name.into(),
            icon: String::new(),
        }
    }
}

/// A reassurance banner entry (guarantees strip).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guarantee {
    pub id: String,
    pub icon: String,
    pub title: String,
    pub text: String,
}

impl Guarantee {
    /// Create a guarantee with a fresh id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: gen_item_id(),
            icon: String::new(),
            title: title.into(),
            text: String::new(),
        }
    }
}
