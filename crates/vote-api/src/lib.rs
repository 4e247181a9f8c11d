//! # vote-api
//!
//! HTTP surface of the voting system: routes, handlers, middleware, and
//! server bootstrap.

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, run_server};
pub use state::AppState;
