//! Response types and error handling for API endpoints
//!
//! The public contract answers HTTP 200 with a descriptive plain-text body
//! even on logical failure (unknown channel, unrecognized vote word); only
//! infrastructure faults surface as 5xx. This module owns that mapping and
//! the canonical reply strings.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use vote_core::DomainError;

/// Reply body for a channel name the system does not know
pub const CHANNEL_NOT_FOUND_REPLY: &str = "Channel not found on the list.";

/// Reply body for a vote word other than the two recognized literals
pub const VOTE_NOT_RECOGNISED_REPLY: &str = "Vote word not recognised.";

/// API error type for consistent responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Domain(#[from] DomainError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // Logical failures keep the 200-with-text contract
            Self::Domain(DomainError::ChannelNotFound(_)) => {
                (StatusCode::OK, CHANNEL_NOT_FOUND_REPLY).into_response()
            }
            Self::Domain(DomainError::UnrecognizedVote(_)) => {
                (StatusCode::OK, VOTE_NOT_RECOGNISED_REPLY).into_response()
            }
            // Everything else is an infrastructure fault
            Self::Domain(err) => {
                error!(error = %err, "Storage error while handling request");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.").into_response()
            }
        }
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// SVG response with the proper content type
pub struct Svg(pub String);

impl IntoResponse for Svg {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, "image/svg+xml")], self.0).into_response()
    }
}
