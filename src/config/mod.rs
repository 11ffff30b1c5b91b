//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `WISH_EXCHANGE` prefix and nested values use double underscores as separators.
//!
//! Every section has defaults, so an empty environment yields a runnable
//! in-memory development server.
//!
//! # Example
//!
//! ```no_run
//! use wish_exchange::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod database;
mod error;
mod features;
mod image;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use image::ImageConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration; in-memory storage when no URL is set
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Image generation configuration (Gemini)
    #[serde(default)]
    pub image: ImageConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `WISH_EXCHANGE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `WISH_EXCHANGE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `WISH_EXCHANGE__DATABASE__URL=...` -> `database.url = ...`
    /// - `WISH_EXCHANGE__IMAGE__GEMINI_API_KEY=...` -> `image.gemini_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("WISH_EXCHANGE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.image.validate()?;
        // Image generation has to resolve, falling back if need be, before
        // the request itself is cut off
        if self.image.timeout_secs >= self.server.request_timeout_secs {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
