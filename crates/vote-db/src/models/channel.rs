//! Channel database model

use sqlx::FromRow;

/// Database model for the `channel` table
#[derive(Debug, Clone, FromRow)]
pub struct ChannelModel {
    pub id: i64,
    pub name: String,
    pub vote: i64,
}
