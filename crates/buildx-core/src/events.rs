//! Wizard events emitted by configurator transitions.
//!
//! Events are collected on the wizard and drained by the host layer for
//! rendering and audit logging. They carry display-ready data only; the
//! wizard state itself remains the source of truth.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{OrderId, ServiceKind, WizardStep};

/// Wrapper for all wizard events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The event payload.
    pub payload: WizardEventPayload,
}

/// Union of all wizard event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum WizardEventPayload {
    /// The wizard entered a step.
    StepEntered {
        /// The step entered.
        step: WizardStep,
    },
    /// The user selected a fabrication service.
    ServiceSelected {
        /// The selected service.
        service: ServiceKind,
    },
    /// A file was attached in the intake step.
    FileAttached {
        /// Original file name.
        name: String,
        /// File size in bytes.
        size_bytes: u64,
    },
    /// The attached file was removed.
    FileRemoved,
    /// Geometry extraction finished for the attached file.
    GeometryExtracted {
        /// Whether the dimensions come from an exactly-parsed mesh.
        exact: bool,
        /// The volume estimate used for quoting, in mm³.
        volume_estimate_mm3: f64,
    },
    /// The quote was recomputed.
    QuoteUpdated {
        /// New order total.
        total: Decimal,
    },
    /// The order was accepted by the intake service.
    OrderSubmitted {
        /// Authoritative order identifier.
        order_id: OrderId,
    },
}

impl WizardEvent {
    /// Create a new wizard event.
    pub fn new(payload: WizardEventPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            payload,
        }
    }
}
