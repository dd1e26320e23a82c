//! Core type definitions used across the BuildX workspace.

pub mod customer;
pub mod geometry;
pub mod material;
pub mod order;
pub mod part;
pub mod quote;
pub mod service;
pub mod step;

pub use customer::CustomerInfo;
pub use geometry::{FALLBACK_VOLUME_MM3, FileGeometry};
pub use material::Material;
pub use order::{OrderFileMeta, OrderId, OrderPayload, UploadedFile};
pub use part::{ActiveProcessFields, Finish, PartConfiguration, Tolerance};
pub use quote::PriceQuote;
pub use service::ServiceKind;
pub use step::WizardStep;
