//! Per-order part configuration edited in the wizard's configuration step.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::material::Material;
use super::service::ServiceKind;

/// Surface finish applied after fabrication.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Finish {
    /// As-fabricated surface.
    #[default]
    Standard,
    /// Smoothed surface.
    Smooth,
    /// Polished surface.
    Polished,
    /// Anodized surface (metals).
    Anodized,
}

/// Dimensional tolerance class.
///
/// Tolerance is recorded on the order but does not affect pricing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tolerance {
    /// Standard shop tolerance.
    #[default]
    Standard,
    /// Tighter tolerance.
    Precision,
    /// Tightest offered tolerance.
    HighPrecision,
}

/// The process fields that are semantically active for a service.
///
/// Exactly one variant applies to any configuration: additive services use
/// infill and layer height, all other services use stock thickness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActiveProcessFields {
    /// Additive manufacturing parameters.
    Additive {
        /// Interior fill density in percent.
        infill_percent: u8,
        /// Layer height in mm.
        layer_height_mm: Decimal,
    },
    /// Sheet/stock parameters for subtractive and laser services.
    Stock {
        /// Stock thickness in mm.
        thickness_mm: f64,
    },
}

/// User-editable configuration for a single part order.
///
/// Mutated incrementally as the user edits fields; every mutation triggers a
/// quote recomputation in the wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartConfiguration {
    /// Selected material, validated against the active service catalog.
    pub material: Option<Material>,
    /// Stock thickness in mm (non-additive services).
    pub thickness_mm: f64,
    /// Interior fill density in percent (additive services).
    pub infill_percent: u8,
    /// Layer height in mm (additive services).
    pub layer_height_mm: Decimal,
    /// Number of identical parts to fabricate. Always ≥ 1.
    pub quantity: u32,
    /// Requested color.
    pub color: String,
    /// Surface finish.
    pub finish: Finish,
    /// Tolerance class.
    pub tolerance: Tolerance,
    /// Free-form customer notes.
    pub notes: String,
}

impl Default for PartConfiguration {
    fn default() -> Self {
        Self {
            material: None,
            thickness_mm: 3.0,
            infill_percent: 20,
            layer_height_mm: dec!(0.2),
            quantity: 1,
            color: "natural".to_string(),
            finish: Finish::Standard,
            tolerance: Tolerance::Standard,
            notes: String::new(),
        }
    }
}

impl PartConfiguration {
    /// The process fields that apply for the given service.
    pub fn active_fields(&self, service: ServiceKind) -> ActiveProcessFields {
        if service.uses_additive_fields() {
            ActiveProcessFields::Additive {
                infill_percent: self.infill_percent,
                layer_height_mm: self.layer_height_mm,
            }
        } else {
            ActiveProcessFields::Stock {
                thickness_mm: self.thickness_mm,
            }
        }
    }

    /// Quantity with the ≥ 1 invariant applied.
    pub fn effective_quantity(&self) -> u32 {
        self.quantity.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_portal() {
        let cfg = PartConfiguration::default();
        assert_eq!(cfg.material, None);
        assert_eq!(cfg.thickness_mm, 3.0);
        assert_eq!(cfg.infill_percent, 20);
        assert_eq!(cfg.layer_height_mm, dec!(0.2));
        assert_eq!(cfg.quantity, 1);
        assert_eq!(cfg.color, "natural");
        assert_eq!(cfg.finish, Finish::Standard);
        assert_eq!(cfg.tolerance, Tolerance::Standard);
    }

    #[test]
    fn test_active_fields_gated_by_service() {
        let cfg = PartConfiguration::default();
        assert!(matches!(
            cfg.active_fields(ServiceKind::AdditiveManufacturing),
            ActiveProcessFields::Additive { .. }
        ));
        assert!(matches!(
            cfg.active_fields(ServiceKind::SubtractiveMachining),
            ActiveProcessFields::Stock { .. }
        ));
        assert!(matches!(
            cfg.active_fields(ServiceKind::LaserCutting),
            ActiveProcessFields::Stock { .. }
        ));
    }

    #[test]
    fn test_finish_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Finish::Anodized).unwrap(),
            "\"anodized\""
        );
        assert_eq!(
            serde_json::to_string(&Tolerance::HighPrecision).unwrap(),
            "\"high-precision\""
        );
    }
}
