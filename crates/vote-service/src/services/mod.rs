//! Service layer

mod channel;
mod context;

pub use channel::ChannelService;
pub use context::ServiceContext;
