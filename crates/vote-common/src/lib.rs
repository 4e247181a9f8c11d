//! # vote-common
//!
//! Shared utilities: application configuration, application-level errors,
//! and tracing setup.

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::{
    AppConfig, ConfigError, DatabaseSettings, RateLimitConfig, SeedConfig, ServerConfig,
};
pub use error::AppError;
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig};
