//! Catalog material reference data.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A fabrication material offered for a service.
///
/// Materials are static reference data supplied through the catalog
/// configuration; they are never derived or mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Stable catalog identifier (e.g. `"pla"`, `"aluminum"`).
    pub id: String,
    /// Human-readable name shown in the material grid.
    pub display_name: String,
    /// Price per cm³ of estimated part volume.
    pub unit_price: Decimal,
}

impl Material {
    /// Create a material entry.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, unit_price: Decimal) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            unit_price,
        }
    }
}
