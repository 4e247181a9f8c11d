//! Application error types
//!
//! Errors raised while wiring the application together: configuration,
//! database connectivity, and server startup. Per-request domain errors
//! live in `vote-core`.

use vote_core::DomainError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    /// Create a database error from any displayable cause
    pub fn database(err: impl std::fmt::Display) -> Self {
        Self::Database(err.to_string())
    }
}
