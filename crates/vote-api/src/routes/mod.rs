//! Route definitions
//!
//! Four routes. Only the per-channel describe/vote route is subject to rate
//! limiting; the exempt routes live on a separate router that never passes
//! through the governor layer.

use axum::{routing::get, Router};

use vote_common::RateLimitConfig;

use crate::handlers::{channels, home};
use crate::middleware::apply_rate_limit;
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router(rate_limit: &RateLimitConfig) -> Router<AppState> {
    Router::new()
        .merge(exempt_routes())
        .merge(rate_limited_routes(rate_limit))
}

/// Routes exempt from rate limiting
fn exempt_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/channels/all", get(channels::list_channels))
        .route("/channels/:name/image.svg", get(channels::channel_badge))
}

/// Per-channel describe/vote route, capped per client address
fn rate_limited_routes(rate_limit: &RateLimitConfig) -> Router<AppState> {
    let router = Router::new().route("/channels/:name", get(channels::get_channel));
    apply_rate_limit(router, rate_limit)
}
