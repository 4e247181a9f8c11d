//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// Channel name absent from the startup index, or absent from the store
    /// at read/write time despite being in the index
    #[error("Channel not found: {0}")]
    ChannelNotFound(String),

    /// Vote word other than the two recognized literals
    #[error("Vote word not recognized: {0}")]
    UnrecognizedVote(String),

    /// Duplicate channel name on insert (seeding/tests only, no route
    /// creates channels)
    #[error("Channel already exists: {0}")]
    ChannelExists(String),

    /// Wrapped storage failure
    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    /// Check if this is a "not found" error
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ChannelNotFound(_))
    }

    /// Check if this error is the visitor's fault (bad name or vote word)
    /// rather than an infrastructure fault
    #[must_use]
    pub fn is_client_fault(&self) -> bool {
        matches!(self, Self::ChannelNotFound(_) | Self::UnrecognizedVote(_))
    }
}
