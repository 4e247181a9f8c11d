//! # vote-service
//!
//! Application layer: the channel service (describe / vote / badge /
//! listing) plus the badge and listing renderers.

pub mod badge;
pub mod listing;
pub mod services;

pub use services::{ChannelService, ServiceContext};
