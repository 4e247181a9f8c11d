//! Schema creation
//!
//! The persisted state is a single table. Creation is idempotent and runs
//! at every startup; there is no migration framework.

use sqlx::SqlitePool;
use tracing::info;

/// The only table. `INTEGER PRIMARY KEY` makes `id` an alias for the rowid,
/// so SQLite assigns it on insert; names collate BINARY, so lookups are
/// case-sensitive.
const CREATE_CHANNEL_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS channel (
    id INTEGER PRIMARY KEY,
    name TEXT UNIQUE NOT NULL,
    vote INTEGER NOT NULL DEFAULT 0
)
";

/// Create the schema if it does not exist yet. Safe to call on every boot.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_CHANNEL_TABLE).execute(pool).await?;
    info!("Database schema checked/created");
    Ok(())
}
