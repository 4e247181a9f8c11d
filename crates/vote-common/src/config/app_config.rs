//! Application configuration structs
//!
//! Loads configuration from environment variables, with a `.env` file
//! picked up when present. Every value has a default so the service boots
//! with an empty environment.

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSettings,
    pub rate_limit: RateLimitConfig,
    pub seed: SeedConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// SQLite database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Path to the database file; `:memory:` opens a transient database
    #[serde(default = "default_database_path")]
    pub path: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// Rate limiting configuration for the per-channel route.
///
/// One token is replenished every `replenish_secs` seconds up to `burst`
/// outstanding tokens. The defaults (3s, 20) give the contractual 20
/// requests per minute per client address.
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_replenish_secs")]
    pub replenish_secs: u64,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// Startup seeding configuration.
///
/// Channel rows are created out-of-band, never via a route; this list is
/// the operational hook for that. Names already present are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedConfig {
    #[serde(default)]
    pub channels: Vec<String>,
}

// Default value functions
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_database_path() -> String {
    "youtubers.sqlite3".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_replenish_secs() -> u64 {
    3
}

fn default_burst() -> u32 {
    20
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a set variable holds an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| default_host()),
                port: parse_var("SERVER_PORT", default_port())?,
            },
            database: DatabaseSettings {
                path: env::var("DATABASE_PATH").unwrap_or_else(|_| default_database_path()),
                max_connections: parse_var("DATABASE_MAX_CONNECTIONS", default_max_connections())?,
            },
            rate_limit: RateLimitConfig {
                replenish_secs: parse_var("RATE_LIMIT_REPLENISH_SECS", default_replenish_secs())?,
                burst: parse_var("RATE_LIMIT_BURST", default_burst())?,
            },
            seed: SeedConfig {
                channels: env::var("SEED_CHANNELS")
                    .ok()
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|name| !name.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }
}

/// Parse an optional environment variable, falling back to `default` when
/// unset and erroring when set to an unparseable value.
fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidValue(name, raw)),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
