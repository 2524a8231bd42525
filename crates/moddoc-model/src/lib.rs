//! Domain model for editing module configurations.
//!
//! Builds on `moddoc-state` with everything the form editors share:
//!
//! - [`collection`]: ordered collections of identity-bearing items
//!   (append, duplicate, delete, update, reorder with stable ids)
//! - [`derived`]: display fields computed from primitive inputs
//!   (price labels, discount percentages, icon/color fallbacks)
//! - [`section`]: binding editors to one named section, with style
//!   records as merge targets
//! - [`schedule`] / [`form`]: closed-set records with typed per-key
//!   defaults synthesized at read time
//! - [`intent`]: the serializable entry point UI events route through

pub mod catalog;
pub mod collection;
pub mod derived;
mod error;
pub mod form;
mod intent;
pub mod item;
pub mod schedule;
pub mod section;

pub use catalog::{ColorDef, IconDef};
pub use collection::{gen_item_id, item_id, CollectionOp};
pub use error::{ModelError, ModelResult};
pub use intent::{apply_intent, EditIntent};
pub use item::{Category, Guarantee, Product, Service};
pub use section::{
    apply_collection_op, read_section, read_style, set_promo_enabled, write_field, write_style,
    DEFAULT_CURRENCY,
};
