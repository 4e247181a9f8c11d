//! SQLite implementation of ChannelRepository

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::instrument;

use vote_core::entities::Channel;
use vote_core::traits::{ChannelRepository, RepoResult};

use crate::models::ChannelModel;

use super::error::{channel_exists, channel_not_found, map_db_error, map_unique_violation};

/// SQLite implementation of ChannelRepository
#[derive(Clone)]
pub struct SqliteChannelRepository {
    pool: SqlitePool,
}

impl SqliteChannelRepository {
    /// Create a new SqliteChannelRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChannelRepository for SqliteChannelRepository {
    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Channel>> {
        let results = sqlx::query_as::<_, ChannelModel>(
            r"
            SELECT id, name, vote
            FROM channel
            ORDER BY name ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Channel::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Channel>> {
        let result = sqlx::query_as::<_, ChannelModel>(
            r"
            SELECT id, name, vote
            FROM channel
            WHERE name = ?1
            ",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Channel::from))
    }

    #[instrument(skip(self))]
    async fn apply_delta(&self, name: &str, delta: i64) -> RepoResult<()> {
        // A single UPDATE keeps the read-modify-write inside the storage
        // engine, so concurrent deltas against one row cannot lose updates
        // regardless of isolation level.
        let result = sqlx::query(
            r"
            UPDATE channel
            SET vote = vote + ?1
            WHERE name = ?2
            ",
        )
        .bind(delta)
        .bind(name)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(channel_not_found(name));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn create(&self, name: &str, vote: i64) -> RepoResult<Channel> {
        let result = sqlx::query(
            r"
            INSERT INTO channel (name, vote)
            VALUES (?1, ?2)
            ",
        )
        .bind(name)
        .bind(vote)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || channel_exists(name)))?;

        Ok(Channel::new(
            result.last_insert_rowid(),
            name.to_string(),
            vote,
        ))
    }
}
