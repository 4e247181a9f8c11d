//! Domain entities

mod channel;

pub use channel::Channel;
