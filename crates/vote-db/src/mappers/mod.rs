//! Entity ↔ Model mappers

mod channel;
