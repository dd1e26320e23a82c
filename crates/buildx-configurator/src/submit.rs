//! Order assembly and submission outcome.

use chrono::Utc;

use buildx_core::error::AppError;
use buildx_core::types::{
    CustomerInfo, OrderFileMeta, OrderId, OrderPayload, PartConfiguration, PriceQuote, ServiceKind,
};

use crate::upload::StagedUpload;

/// Result of a submission attempt that passed the validation gate.
///
/// An intake failure is not an error of the wizard itself: the wizard stays
/// in the review step so the user can retry, and a client-generated
/// placeholder identifier is offered purely for display.
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// The intake service durably recorded the order.
    Accepted {
        /// Authoritative order identifier from the intake service.
        order_id: OrderId,
    },
    /// The intake service was unreachable or rejected the order.
    ///
    /// The placeholder identifier is never a confirmation of durable
    /// storage.
    Unconfirmed {
        /// Client-generated `BX…` identifier for UX continuity.
        placeholder_id: OrderId,
        /// The surfaced intake failure.
        error: AppError,
    },
}

impl SubmissionOutcome {
    /// Whether the order was durably recorded.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// The identifier to display, authoritative or placeholder.
    pub fn display_id(&self) -> &OrderId {
        match self {
            Self::Accepted { order_id } => order_id,
            Self::Unconfirmed { placeholder_id, .. } => placeholder_id,
        }
    }
}

/// Assemble the immutable payload handed to the intake collaborator.
pub(crate) fn assemble_payload(
    service: ServiceKind,
    upload: &StagedUpload,
    configuration: &PartConfiguration,
    pricing: PriceQuote,
    customer: CustomerInfo,
) -> OrderPayload {
    OrderPayload {
        service,
        file: OrderFileMeta {
            name: upload.file.name.clone(),
            size_bytes: upload.file.size_bytes,
            geometry: upload.geometry,
        },
        configuration: configuration.clone(),
        pricing,
        customer,
        submitted_at: Utc::now(),
    }
}
