//! Per-service material catalogs.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Material, ServiceKind};

/// Material catalogs for each fabrication service.
///
/// Static reference data: the portal never derives or mutates these at
/// runtime. Defaults carry the stock price list; deployments override them
/// through the TOML overlay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Materials offered for 3D printing.
    #[serde(default = "default_additive")]
    pub additive: Vec<Material>,
    /// Materials offered for CNC machining.
    #[serde(default = "default_subtractive")]
    pub subtractive: Vec<Material>,
    /// Materials offered for laser cutting.
    #[serde(default = "default_laser")]
    pub laser: Vec<Material>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            additive: default_additive(),
            subtractive: default_subtractive(),
            laser: default_laser(),
        }
    }
}

impl CatalogConfig {
    /// The catalog active for a service.
    pub fn for_service(&self, kind: ServiceKind) -> &[Material] {
        match kind {
            ServiceKind::AdditiveManufacturing => &self.additive,
            ServiceKind::SubtractiveMachining => &self.subtractive,
            ServiceKind::LaserCutting => &self.laser,
        }
    }

    /// Look up a material by id within a service's catalog.
    pub fn find(&self, kind: ServiceKind, id: &str) -> Option<&Material> {
        self.for_service(kind).iter().find(|m| m.id == id)
    }

    /// The default material pre-selected when a catalog is first shown.
    pub fn first(&self, kind: ServiceKind) -> Option<&Material> {
        self.for_service(kind).first()
    }
}

fn default_additive() -> Vec<Material> {
    vec![
        Material::new("pla", "PLA", dec!(0.05)),
        Material::new("abs", "ABS", dec!(0.06)),
        Material::new("petg", "PETG", dec!(0.07)),
        Material::new("nylon", "Nylon", dec!(0.12)),
        Material::new("tpu", "TPU", dec!(0.15)),
        Material::new("resin", "Resin", dec!(0.20)),
    ]
}

fn default_subtractive() -> Vec<Material> {
    vec![
        Material::new("aluminum", "Aluminum", dec!(0.25)),
        Material::new("steel", "Steel", dec!(0.30)),
        Material::new("brass", "Brass", dec!(0.35)),
        Material::new("copper", "Copper", dec!(0.40)),
        Material::new("acrylic", "Acrylic", dec!(0.15)),
        Material::new("wood", "Wood", dec!(0.10)),
    ]
}

fn default_laser() -> Vec<Material> {
    vec![
        Material::new("acrylic", "Acrylic", dec!(0.12)),
        Material::new("wood", "Wood", dec!(0.08)),
        Material::new("mdf", "MDF", dec!(0.06)),
        Material::new("plywood", "Plywood", dec!(0.09)),
        Material::new("cardboard", "Cardboard", dec!(0.03)),
        Material::new("steel", "Steel", dec!(0.35)),
    ]
}
