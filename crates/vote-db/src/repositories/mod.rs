//! Repository implementations

mod channel;
mod error;

pub use channel::SqliteChannelRepository;
