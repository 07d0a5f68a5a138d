//! Configuration management for Museo server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Booking store backend selection
#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// "memory" or "remote"
    pub backend: String,
    /// Base URL of the remote document-collection API
    pub base_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BookingConfig {
    /// Prefix for generated ticket numbers
    pub ticket_prefix: String,
    /// Re-verify slot availability at write time (optimistic check)
    pub verify_availability: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    #[serde(default)]
    pub booking: BookingConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default"))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix MUSEO_)
            .add_source(
                Environment::with_prefix("MUSEO")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override store URL from STORE_URL env var if present
            .set_override_option("store.base_url", env::var("STORE_URL").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: "memory".to_string(),
            base_url: "http://localhost:9200".to_string(),
            timeout_seconds: 10,
        }
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            ticket_prefix: "TKT".to_string(),
            verify_availability: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
