//! Service context - dependency container for services
//!
//! Holds the repository and the startup name snapshot needed by services.

use std::sync::Arc;

use vote_core::traits::ChannelRepository;
use vote_core::ChannelIndex;

/// Service context containing all dependencies
///
/// Passed to services and, via the application state, to request handlers.
/// The channel index is the startup snapshot: captured once before the
/// server starts serving and immutable afterward, so sharing it here needs
/// no locking.
#[derive(Clone)]
pub struct ServiceContext {
    channel_repo: Arc<dyn ChannelRepository>,
    channel_index: Arc<ChannelIndex>,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(channel_repo: Arc<dyn ChannelRepository>, channel_index: Arc<ChannelIndex>) -> Self {
        Self {
            channel_repo,
            channel_index,
        }
    }

    /// Get the channel repository
    pub fn channel_repo(&self) -> &dyn ChannelRepository {
        self.channel_repo.as_ref()
    }

    /// Get the startup name snapshot
    pub fn channel_index(&self) -> &ChannelIndex {
        &self.channel_index
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("channel_repo", &"ChannelRepository")
            .field("channel_index", &self.channel_index)
            .finish()
    }
}
