//! # buildx-configurator
//!
//! The order wizard core of the BuildX fabrication portal: a session-owned
//! state machine that walks service selection → file intake →
//! configuration → review → submission, maintaining a derived price quote
//! at every step.
//!
//! The wizard holds no module-level mutable state and performs no I/O of
//! its own — file transport, persistence, and rendering belong to the
//! host, reached through the collaborator traits in `buildx-core`.

pub mod pricing;
pub mod submit;
pub mod upload;
pub mod wizard;

pub use pricing::Quoter;
pub use submit::SubmissionOutcome;
pub use upload::{StagedUpload, UploadTicket};
pub use wizard::{ConfigEdit, ReviewSummary, Wizard, WizardState};
