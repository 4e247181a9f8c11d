//! Channel handlers
//!
//! Endpoints for describing channels, casting votes, the listing page, and
//! the badge image.

use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use serde::Deserialize;

use vote_service::{listing, ChannelService};

use crate::response::{ApiResult, Svg};
use crate::state::AppState;

/// Query parameters for the per-channel route
#[derive(Debug, Deserialize)]
pub struct ChannelQuery {
    /// Vote word, passed through verbatim. Its presence selects the vote
    /// operation; its absence selects describe.
    pub vote: Option<String>,
}

/// Describe a channel, or cast a vote when the `vote` query parameter is
/// present
///
/// GET /channels/{name}
/// GET /channels/{name}?vote=upvote|downvote
pub async fn get_channel(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<ChannelQuery>,
) -> ApiResult<String> {
    let service = ChannelService::new(state.context());

    let reply = match query.vote {
        Some(word) => service.vote(&name, &word).await?,
        None => service.describe(&name).await?,
    };

    Ok(reply)
}

/// List all channels with their current tallies
///
/// GET /channels/all
pub async fn list_channels(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let service = ChannelService::new(state.context());
    let channels = service.listing().await?;
    Ok(Html(listing::render_page(&channels)))
}

/// Render the channel's tally as an SVG badge
///
/// GET /channels/{name}/image.svg
pub async fn channel_badge(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Svg> {
    let service = ChannelService::new(state.context());
    let svg = service.badge(&name).await?;
    Ok(Svg(svg))
}
