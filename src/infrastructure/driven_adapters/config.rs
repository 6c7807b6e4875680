//! Application Configuration
//!
//! Loads configuration from environment variables. `PORT` and `DATABASE_URL`
//! are required and startup fails without them; everything else has a default.

use config::{Config, ConfigError};
use serde::Deserialize;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub shutdown_timeout_secs: u64,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when `PORT` or `DATABASE_URL` is unset or when a
    /// value cannot be parsed into its typed field.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.shutdown_timeout_secs", 10)?
            .set_default("database.max_connections", 5)?
            .set_default("database.min_connections", 1)?
            // Required settings: no default, so a missing variable fails
            // the deserialize below.
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("server.host", std::env::var("HOST").ok())?
            .set_override_option(
                "server.shutdown_timeout_secs",
                std::env::var("SHUTDOWN_TIMEOUT_SECS").ok(),
            )?
            .set_override_option(
                "database.max_connections",
                std::env::var("DATABASE_MAX_CONNECTIONS").ok(),
            )?
            .set_override_option(
                "database.min_connections",
                std::env::var("DATABASE_MIN_CONNECTIONS").ok(),
            )?
            .build()?
            .try_deserialize()
    }
}
