//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Every field has a built-in default, so
//! [`AppConfig::default`] is fully usable without any files on disk; the
//! TOML overlay exists so an operator can reprice catalogs without a
//! rebuild.

pub mod catalog;
pub mod logging;
pub mod pricing;
pub mod upload;

use serde::{Deserialize, Serialize};

use self::catalog::CatalogConfig;
use self::logging::LoggingConfig;
use self::pricing::PricingConfig;
use self::upload::UploadConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Per-service material catalogs.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Pricing rates and cost tables.
    #[serde(default)]
    pub pricing: PricingConfig,
    /// Upload acceptance limits.
    #[serde(default)]
    pub upload: UploadConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `BUILDX`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("BUILDX")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
