//! Order intake collaborator trait.

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;
use crate::types::{OrderId, OrderPayload};

/// Receipt returned by the intake service for an accepted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeReceipt {
    /// Authoritative order identifier assigned by the intake service.
    pub order_id: OrderId,
}

/// Trait for the external service that durably records submitted orders.
///
/// The configurator calls [`OrderIntake::submit`] exactly once per
/// submission attempt with the assembled payload and the raw file bytes as
/// a single atomic unit. Delivery tracking and retries are the
/// implementation's responsibility, not the configurator's.
#[async_trait]
pub trait OrderIntake: Send + Sync {
    /// Submit an order payload together with the raw uploaded file bytes.
    async fn submit(&self, payload: &OrderPayload, file: Bytes) -> AppResult<IntakeReceipt>;
}
