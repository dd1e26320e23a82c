//! # buildx-core
//!
//! Core crate for the BuildX order configurator. Contains collaborator
//! traits, configuration schemas, the typed domain model, wizard events,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other BuildX crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
