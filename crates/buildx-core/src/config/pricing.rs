//! Pricing rates and cost tables.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::geometry::FALLBACK_VOLUME_MM3;
use crate::types::part::Finish;

/// Rates and tables the pricing engine computes quotes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Machine time cost per cm³ of estimated volume.
    #[serde(default = "default_machine_rate")]
    pub machine_rate_per_cm3: Decimal,
    /// Fixed per-order setup fee.
    #[serde(default = "default_setup_fee")]
    pub setup_fee: Decimal,
    /// Tax rate applied to the subtotal.
    #[serde(default = "default_tax_rate")]
    pub tax_rate: Decimal,
    /// Per-unit finishing cost by finish class.
    #[serde(default)]
    pub finish_costs: FinishCosts,
    /// Layer height at which additive machine time doubles.
    #[serde(default = "default_fine_layer_height")]
    pub fine_layer_height_mm: Decimal,
    /// Machine-time multiplier applied at the fine layer height.
    #[serde(default = "default_fine_layer_multiplier")]
    pub fine_layer_multiplier: Decimal,
    /// Volume assumed when no exact geometry is available, in mm³.
    #[serde(default = "default_fallback_volume")]
    pub fallback_volume_mm3: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            machine_rate_per_cm3: default_machine_rate(),
            setup_fee: default_setup_fee(),
            tax_rate: default_tax_rate(),
            finish_costs: FinishCosts::default(),
            fine_layer_height_mm: default_fine_layer_height(),
            fine_layer_multiplier: default_fine_layer_multiplier(),
            fallback_volume_mm3: default_fallback_volume(),
        }
    }
}

/// Per-unit surcharge for each finish class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinishCosts {
    /// Standard finish surcharge.
    #[serde(default = "default_standard")]
    pub standard: Decimal,
    /// Smooth finish surcharge.
    #[serde(default = "default_smooth")]
    pub smooth: Decimal,
    /// Polished finish surcharge.
    #[serde(default = "default_polished")]
    pub polished: Decimal,
    /// Anodized finish surcharge.
    #[serde(default = "default_anodized")]
    pub anodized: Decimal,
}

impl Default for FinishCosts {
    fn default() -> Self {
        Self {
            standard: Decimal::ZERO,
            smooth: default_smooth(),
            polished: default_polished(),
            anodized: default_anodized(),
        }
    }
}

impl FinishCosts {
    /// The per-unit cost for a finish class.
    pub fn cost_of(&self, finish: Finish) -> Decimal {
        match finish {
            Finish::Standard => self.standard,
            Finish::Smooth => self.smooth,
            Finish::Polished => self.polished,
            Finish::Anodized => self.anodized,
        }
    }
}

fn default_machine_rate() -> Decimal {
    dec!(0.5)
}

fn default_setup_fee() -> Decimal {
    dec!(10)
}

fn default_tax_rate() -> Decimal {
    dec!(0.10)
}

fn default_standard() -> Decimal {
    Decimal::ZERO
}

fn default_smooth() -> Decimal {
    dec!(5)
}

fn default_polished() -> Decimal {
    dec!(15)
}

fn default_anodized() -> Decimal {
    dec!(25)
}

fn default_fine_layer_height() -> Decimal {
    dec!(0.1)
}

fn default_fine_layer_multiplier() -> Decimal {
    dec!(2)
}

fn default_fallback_volume() -> f64 {
    FALLBACK_VOLUME_MM3
}
