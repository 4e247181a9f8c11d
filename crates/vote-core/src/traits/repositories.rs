//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::Channel;
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Durable channel persistence keyed by name
#[async_trait]
pub trait ChannelRepository: Send + Sync {
    /// Enumerate every channel, ordered lexicographically by name ascending.
    ///
    /// The ordering is user-visible (listing page) and feeds the startup
    /// index, so it must be stable and reproducible.
    async fn list_all(&self) -> RepoResult<Vec<Channel>>;

    /// Point lookup by exact, case-sensitive name
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Channel>>;

    /// Add `delta` to the named channel's tally in a single atomic write.
    ///
    /// Fails with [`DomainError::ChannelNotFound`] when no row matches the
    /// name. The write must never leave a partially-applied state visible
    /// to subsequent reads.
    async fn apply_delta(&self, name: &str, delta: i64) -> RepoResult<()>;

    /// Insert a new channel row.
    ///
    /// Not reachable from any HTTP route; used by startup seeding and
    /// tests. Fails with [`DomainError::ChannelExists`] on a duplicate name.
    async fn create(&self, name: &str, vote: i64) -> RepoResult<Channel>;
}
