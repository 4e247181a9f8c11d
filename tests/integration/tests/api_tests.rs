//! API integration tests
//!
//! Each test spawns its own server on an OS-assigned port with a temp-file
//! database seeded with the fixture channels, then drives it over HTTP.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::TestServer;
use reqwest::StatusCode;

const NOT_FOUND_BODY: &str = "Channel not found on the list.";
const BAD_WORD_BODY: &str = "Vote word not recognised.";

// ============================================================================
// Welcome route
// ============================================================================

#[tokio::test]
async fn test_index_returns_welcome_text() {
    let server = TestServer::start().await.expect("Failed to start server");

    let body = server.get_ok_text("/").await.unwrap();
    assert_eq!(body, "Awesome YouTubers voting system website.");
}

// ============================================================================
// Describe
// ============================================================================

#[tokio::test]
async fn test_describe_existing_channel() {
    let server = TestServer::start().await.expect("Failed to start server");

    let body = server.get_ok_text("/channels/Acme").await.unwrap();
    assert_eq!(body, "Channel: Acme");
}

#[tokio::test]
async fn test_describe_is_case_sensitive() {
    let server = TestServer::start().await.expect("Failed to start server");

    let body = server.get_ok_text("/channels/acme").await.unwrap();
    assert_eq!(body, NOT_FOUND_BODY);
}

#[tokio::test]
async fn test_missing_channel_every_route_not_found() {
    let server = TestServer::start().await.expect("Failed to start server");

    // Same body regardless of query parameters
    for path in [
        "/channels/Ghost",
        "/channels/Ghost?vote=upvote",
        "/channels/Ghost?vote=downvote",
        "/channels/Ghost?vote=sideways",
        "/channels/Ghost/image.svg",
    ] {
        let body = server.get_ok_text(path).await.unwrap();
        assert_eq!(body, NOT_FOUND_BODY, "path: {path}");
    }
}

// ============================================================================
// Voting
// ============================================================================

#[tokio::test]
async fn test_upvote_increments_by_one() {
    let server = TestServer::start().await.expect("Failed to start server");

    assert_eq!(server.tally_of("Acme").await.unwrap(), 0);

    let body = server
        .get_ok_text("/channels/Acme?vote=upvote")
        .await
        .unwrap();
    assert_eq!(body, "You upvoted successfully the channel Acme.");
    assert_eq!(server.tally_of("Acme").await.unwrap(), 1);
}

#[tokio::test]
async fn test_downvote_can_go_negative() {
    let server = TestServer::start().await.expect("Failed to start server");

    let body = server
        .get_ok_text("/channels/Mango?vote=downvote")
        .await
        .unwrap();
    assert_eq!(body, "You downvoted successfully the channel Mango.");
    assert_eq!(server.tally_of("Mango").await.unwrap(), -1);
}

#[tokio::test]
async fn test_upvote_then_downvote_is_identity() {
    let server = TestServer::start().await.expect("Failed to start server");

    let before = server.tally_of("Zulu").await.unwrap();
    server.get_ok_text("/channels/Zulu?vote=upvote").await.unwrap();
    server
        .get_ok_text("/channels/Zulu?vote=downvote")
        .await
        .unwrap();
    assert_eq!(server.tally_of("Zulu").await.unwrap(), before);
}

#[tokio::test]
async fn test_unrecognized_vote_word_leaves_tally() {
    let server = TestServer::start().await.expect("Failed to start server");

    server.get_ok_text("/channels/Acme?vote=upvote").await.unwrap();

    for word in ["sideways", "Upvote", "UPVOTE", "upvote%20"] {
        let body = server
            .get_ok_text(&format!("/channels/Acme?vote={word}"))
            .await
            .unwrap();
        assert_eq!(body, BAD_WORD_BODY, "word: {word}");
    }

    assert_eq!(server.tally_of("Acme").await.unwrap(), 1);
}

#[tokio::test]
async fn test_empty_vote_word_is_unrecognized() {
    let server = TestServer::start().await.expect("Failed to start server");

    let body = server.get_ok_text("/channels/Acme?vote=").await.unwrap();
    assert_eq!(body, BAD_WORD_BODY);
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_listing_is_html_in_store_order() {
    let server = TestServer::start().await.expect("Failed to start server");

    server.get_ok_text("/channels/Zulu?vote=upvote").await.unwrap();

    let response = server.get("/channels/all").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"), "{content_type}");

    let body = response.text().await.unwrap();
    assert!(body.contains("Acme: 0"));
    assert!(body.contains("Mango: 0"));
    assert!(body.contains("Zulu: 1"));

    // Lexicographic store order, not seed order
    let acme = body.find("Acme").unwrap();
    let mango = body.find("Mango").unwrap();
    let zulu = body.find("Zulu").unwrap();
    assert!(acme < mango && mango < zulu);
}

// ============================================================================
// Badge
// ============================================================================

#[tokio::test]
async fn test_badge_content_type_and_geometry() {
    let server = TestServer::start().await.expect("Failed to start server");

    for _ in 0..3 {
        server.get_ok_text("/channels/Acme?vote=upvote").await.unwrap();
    }

    let response = server.get("/channels/Acme/image.svg").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("image/svg+xml")
    );

    let body = response.text().await.unwrap();
    assert!(body.contains(">3<"), "{body}");
    assert!(body.contains(r#"width="52px""#));
    assert!(body.contains(r#"height="22px""#));
}

#[tokio::test]
async fn test_badge_geometry_fixed_for_large_counts() {
    let server = TestServer::start().await.expect("Failed to start server");

    for _ in 0..120 {
        server.get_ok_text("/channels/Mango?vote=upvote").await.unwrap();
    }

    let body = server.get_ok_text("/channels/Mango/image.svg").await.unwrap();
    assert!(body.contains(">120<"));
    assert!(body.contains(r#"width="52px""#));
    assert!(body.contains(r#"height="22px""#));
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test]
async fn test_concurrent_votes_converge_to_net_sum() {
    let server = TestServer::start().await.expect("Failed to start server");

    let mut handles = Vec::new();
    for i in 0..30 {
        let client = server.client.clone();
        let url = if i < 20 {
            format!("{}/channels/Acme?vote=upvote", server.base_url())
        } else {
            format!("{}/channels/Acme?vote=downvote", server.base_url())
        };
        handles.push(tokio::spawn(async move {
            client.get(&url).send().await.expect("request").status()
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.expect("join"), StatusCode::OK);
    }

    // 20 up, 10 down: no lost updates
    assert_eq!(server.tally_of("Acme").await.unwrap(), 10);
}

// ============================================================================
// Rate limiting
// ============================================================================

#[tokio::test]
async fn test_per_channel_route_is_rate_limited() {
    let server = TestServer::start_rate_limited()
        .await
        .expect("Failed to start server");

    // The burst allows 20 requests from one address
    for i in 0..20 {
        let response = server.get("/channels/Acme").await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "request {i}");
    }

    // The 21st inside the window is rejected by the admission layer
    let response = server.get("/channels/Acme").await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    // Exempt routes keep answering
    for path in ["/", "/channels/all", "/channels/Acme/image.svg"] {
        let response = server.get(path).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "path: {path}");
    }
}

// ============================================================================
// End-to-end scenario
// ============================================================================

#[tokio::test]
async fn test_acme_ghost_scenario() {
    let server = TestServer::start().await.expect("Failed to start server");

    let body = server.get_ok_text("/channels/Acme").await.unwrap();
    assert_eq!(body, "Channel: Acme");

    let body = server.get_ok_text("/channels/Acme?vote=upvote").await.unwrap();
    assert_eq!(body, "You upvoted successfully the channel Acme.");
    assert_eq!(server.tally_of("Acme").await.unwrap(), 1);

    let body = server
        .get_ok_text("/channels/Acme?vote=sideways")
        .await
        .unwrap();
    assert_eq!(body, BAD_WORD_BODY);
    assert_eq!(server.tally_of("Acme").await.unwrap(), 1);

    let body = server
        .get_ok_text("/channels/Ghost?vote=upvote")
        .await
        .unwrap();
    assert_eq!(body, NOT_FOUND_BODY);
}
