//! Quote computation.
//!
//! Pricing is a pure function of the service, the part configuration, and
//! the volume estimate: no shared mutable state, no accumulation, safe to
//! call repeatedly or speculatively.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use buildx_core::config::pricing::PricingConfig;
use buildx_core::types::{PartConfiguration, PriceQuote, ServiceKind};

/// Millimeters³ per centimeter³.
const MM3_PER_CM3: u32 = 1000;

/// Computes price quotes from configured rates.
#[derive(Debug, Clone)]
pub struct Quoter {
    config: PricingConfig,
}

impl Quoter {
    /// Create a quoter over a pricing configuration.
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    /// The pricing configuration in effect.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Compute the quote for a configuration against an estimated volume.
    ///
    /// Quoting never fails: a missing material contributes zero material
    /// cost, a non-finite or non-positive volume falls back to the
    /// configured default, and quantity is clamped to ≥ 1.
    pub fn quote(
        &self,
        service: ServiceKind,
        configuration: &PartConfiguration,
        volume_estimate_mm3: f64,
    ) -> PriceQuote {
        let volume_cm3 = self.volume_cm3(volume_estimate_mm3);
        let quantity = Decimal::from(configuration.effective_quantity());

        let material = configuration
            .material
            .as_ref()
            .map(|m| m.unit_price * volume_cm3 * quantity)
            .unwrap_or(Decimal::ZERO);

        let time_multiplier = if service.uses_additive_fields()
            && configuration.layer_height_mm == self.config.fine_layer_height_mm
        {
            self.config.fine_layer_multiplier
        } else {
            Decimal::ONE
        };
        let machine = volume_cm3 * self.config.machine_rate_per_cm3 * time_multiplier * quantity;

        let finishing = self.config.finish_costs.cost_of(configuration.finish) * quantity;
        let setup = self.config.setup_fee;

        let subtotal = material + machine + finishing + setup;
        let tax = subtotal * self.config.tax_rate;
        let total = subtotal + tax;

        let quote = PriceQuote {
            material,
            machine,
            finishing,
            setup,
            subtotal,
            tax,
            total,
        };
        debug_assert!(quote.is_consistent());
        quote
    }

    /// Volume in cm³, after applying the fallback for unusable estimates.
    fn volume_cm3(&self, volume_estimate_mm3: f64) -> Decimal {
        let volume_mm3 = if volume_estimate_mm3.is_finite() && volume_estimate_mm3 > 0.0 {
            volume_estimate_mm3
        } else {
            self.config.fallback_volume_mm3
        };
        let volume_mm3 = Decimal::from_f64(volume_mm3)
            .unwrap_or_else(|| Decimal::from(MM3_PER_CM3));
        volume_mm3 / Decimal::from(MM3_PER_CM3)
    }
}

impl Default for Quoter {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}
