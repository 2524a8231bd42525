//! Host-supplied icon and color catalogs.
//!
//! Catalogs are ordered lists of opaque entries. The core never generates
//! or hardcodes a catalog; it only uses element 0 as the documented
//! fallback.

use serde::{Deserialize, Serialize};

/// One entry of the host's icon catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconDef {
    /// Stable name the document refers to (e.g. `"scissors"`).
    pub name: String,
    /// Opaque rendering reference owned by the presentation layer.
    pub asset: String,
}

impl IconDef {
    /// Create a catalog entry.
    pub fn new(name: impl Into<String>, asset: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            asset: asset.into(),
        }
    }
}

/// One entry of the host's color palette: an opaque color value.
pub type ColorDef = String;
