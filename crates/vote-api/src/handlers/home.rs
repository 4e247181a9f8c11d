//! Home handler

/// Main route of the website
///
/// GET /
pub async fn index() -> &'static str {
    "Awesome YouTubers voting system website."
}
