//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use vote_core::error::DomainError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::Database(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::Database(e.to_string())
}

/// Create a "channel not found" error
pub fn channel_not_found(name: &str) -> DomainError {
    DomainError::ChannelNotFound(name.to_string())
}

/// Create a "channel already exists" error
pub fn channel_exists(name: &str) -> DomainError {
    DomainError::ChannelExists(name.to_string())
}
