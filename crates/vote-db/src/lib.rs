//! # vote-db
//!
//! Database layer implementing the repository trait with SQLite via SQLx.
//!
//! ## Overview
//!
//! This crate provides the SQLite implementation for the repository trait
//! defined in `vote-core`. It handles:
//!
//! - Connection pool management
//! - Idempotent schema creation at startup
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - The repository implementation

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, SqlitePool};
pub use repositories::SqliteChannelRepository;
pub use schema::init_schema;
