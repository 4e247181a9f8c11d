//! Channel service
//!
//! The voting use cases: describe a channel, cast a vote, render the badge,
//! and enumerate the listing. Existence checks run against the startup name
//! snapshot; tallies are always re-read from the store.

use tracing::{info, instrument};

use vote_core::entities::Channel;
use vote_core::error::DomainError;
use vote_core::VoteDirection;

use super::context::ServiceContext;
use crate::badge;

/// Channel service
pub struct ChannelService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChannelService<'a> {
    /// Create a new ChannelService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Canonical description of a channel known to the startup snapshot
    #[instrument(skip(self))]
    pub async fn describe(&self, name: &str) -> Result<String, DomainError> {
        self.check_exists(name)?;
        Ok(format!("Channel: {name}"))
    }

    /// Cast a vote for a channel.
    ///
    /// The name is checked against the startup snapshot before the vote
    /// word is looked at, so an unknown name wins over an unknown word. The
    /// word is matched literally against `upvote`/`downvote`; anything else
    /// leaves the store untouched.
    #[instrument(skip(self))]
    pub async fn vote(&self, name: &str, word: &str) -> Result<String, DomainError> {
        self.check_exists(name)?;

        let direction = VoteDirection::parse(word)
            .ok_or_else(|| DomainError::UnrecognizedVote(word.to_string()))?;

        // Re-read-free atomic delta; a row deleted from the store after
        // boot surfaces here as ChannelNotFound, same as a name that never
        // existed.
        self.ctx
            .channel_repo()
            .apply_delta(name, direction.delta())
            .await?;

        info!(channel = %name, direction = %direction, "Vote applied");

        Ok(format!(
            "You {} successfully the channel {}.",
            direction.past_tense(),
            name
        ))
    }

    /// Render the SVG badge embedding the channel's current tally
    #[instrument(skip(self))]
    pub async fn badge(&self, name: &str) -> Result<String, DomainError> {
        self.check_exists(name)?;

        let channel = self
            .ctx
            .channel_repo()
            .find_by_name(name)
            .await?
            .ok_or_else(|| DomainError::ChannelNotFound(name.to_string()))?;

        Ok(badge::render(channel.vote))
    }

    /// All channels in store order, read live for the listing page
    #[instrument(skip(self))]
    pub async fn listing(&self) -> Result<Vec<Channel>, DomainError> {
        self.ctx.channel_repo().list_all().await
    }

    fn check_exists(&self, name: &str) -> Result<(), DomainError> {
        if self.ctx.channel_index().contains(name) {
            Ok(())
        } else {
            Err(DomainError::ChannelNotFound(name.to_string()))
        }
    }
}
