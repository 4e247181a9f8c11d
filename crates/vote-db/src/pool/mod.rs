//! Connection pool management

mod sqlite;

pub use sqlite::{create_pool, DatabaseConfig};

// Re-exported so downstream crates do not need a direct sqlx dependency
// just to name the pool type.
pub use sqlx::SqlitePool;
