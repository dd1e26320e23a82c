//! Derived price breakdown for a configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The derived cost breakdown for a configuration.
///
/// A quote is never mutated directly; it is recomputed in full from the
/// service, configuration, and volume estimate on every change. Invariants:
/// `subtotal = material + machine + finishing + setup`,
/// `tax = subtotal × tax_rate`, `total = subtotal + tax`, and every
/// component is non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Material cost: unit price × volume × quantity.
    pub material: Decimal,
    /// Machine time cost.
    pub machine: Decimal,
    /// Finishing cost.
    pub finishing: Decimal,
    /// Fixed per-order setup fee.
    pub setup: Decimal,
    /// Sum of the four cost components.
    pub subtotal: Decimal,
    /// Tax on the subtotal.
    pub tax: Decimal,
    /// Subtotal plus tax.
    pub total: Decimal,
}

impl PriceQuote {
    /// Verify the derived-sum invariants. Used in debug assertions and tests.
    pub fn is_consistent(&self) -> bool {
        self.subtotal == self.material + self.machine + self.finishing + self.setup
            && self.total == self.subtotal + self.tax
            && [
                self.material,
                self.machine,
                self.finishing,
                self.setup,
                self.subtotal,
                self.tax,
                self.total,
            ]
            .iter()
            .all(|c| !c.is_sign_negative())
    }
}
