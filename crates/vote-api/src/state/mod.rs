//! Application state
//!
//! Shared state handed to every handler: the service context (repository
//! plus the startup name snapshot) and the loaded configuration.

use std::sync::Arc;

use vote_common::{AppConfig, RateLimitConfig};
use vote_service::ServiceContext;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    context: Arc<ServiceContext>,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(context: ServiceContext, config: AppConfig) -> Self {
        Self {
            context: Arc::new(context),
            config: Arc::new(config),
        }
    }

    /// Service context with the repository and the startup name snapshot
    pub fn context(&self) -> &ServiceContext {
        &self.context
    }

    /// Loaded application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Rate limit settings for the per-channel route
    pub fn rate_limit(&self) -> &RateLimitConfig {
        &self.config.rate_limit
    }
}
