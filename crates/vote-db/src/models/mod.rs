//! Database models

mod channel;

pub use channel::ChannelModel;
