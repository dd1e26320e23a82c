//! Collaborator traits consumed by the configurator.
//!
//! Traits are defined here in `buildx-core` and implemented in outer
//! crates (or by the host application).

pub mod delay;
pub mod formats;
pub mod intake;

pub use delay::{AdvanceDelay, FixedDelay, NoDelay};
pub use formats::FormatCatalog;
pub use intake::{IntakeReceipt, OrderIntake};
