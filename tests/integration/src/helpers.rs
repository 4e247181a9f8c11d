//! Test helpers for integration tests
//!
//! Spawns a real server on an OS-assigned port backed by a temp-file
//! database, so each test is hermetic and tests can run in parallel.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Response};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use vote_api::{create_app, create_app_state};
use vote_common::{
    AppConfig, DatabaseSettings, RateLimitConfig, SeedConfig, ServerConfig,
};

use crate::fixtures::SEED_CHANNELS;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _db_dir: TempDir,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a test server with the default fixtures and a rate limit too
    /// generous to interfere with functional tests
    pub async fn start() -> Result<Self> {
        Self::start_with(SEED_CHANNELS, generous_rate_limit()).await
    }

    /// Start a test server with the contractual 20-per-minute rate limit
    pub async fn start_rate_limited() -> Result<Self> {
        Self::start_with(SEED_CHANNELS, contractual_rate_limit()).await
    }

    /// Start a test server with explicit seed channels and rate limit
    pub async fn start_with(seed: &[&str], rate_limit: RateLimitConfig) -> Result<Self> {
        let db_dir = tempfile::tempdir()?;
        let db_path = db_dir.path().join("voting.sqlite3");

        let config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                // The listener below decides the real port
                port: 0,
            },
            database: DatabaseSettings {
                path: db_path.to_string_lossy().into_owned(),
                max_connections: 5,
            },
            rate_limit,
            seed: SeedConfig {
                channels: seed.iter().map(|s| (*s).to_string()).collect(),
            },
        };

        // Create app state and build the application
        let state = create_app_state(config).await?;
        let app = create_app(state);

        // Bind to an OS-assigned port
        let listener = TcpListener::bind(("127.0.0.1", 0)).await?;
        let addr = listener.local_addr()?;

        // Spawn server task; connect-info is required by the rate limiter
        let handle = tokio::spawn(async move {
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .ok();
        });

        // Create HTTP client
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            _db_dir: db_dir,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// GET a path and return its body, asserting a 200 status
    pub async fn get_ok_text(&self, path: &str) -> Result<String> {
        let response = self.get(path).await?;
        let status = response.status();
        let body = response.text().await?;
        anyhow::ensure!(
            status == reqwest::StatusCode::OK,
            "Expected status 200 for {path}, got {status}. Body: {body}"
        );
        Ok(body)
    }

    /// Read a channel's current tally through its badge
    pub async fn tally_of(&self, name: &str) -> Result<i64> {
        let svg = self.get_ok_text(&format!("/channels/{name}/image.svg")).await?;
        let start = svg
            .find(r#"class="text">"#)
            .ok_or_else(|| anyhow::anyhow!("no text element in badge: {svg}"))?
            + r#"class="text">"#.len();
        let end = start
            + svg[start..]
                .find('<')
                .ok_or_else(|| anyhow::anyhow!("unterminated text element"))?;
        Ok(svg[start..end].parse()?)
    }
}

/// Rate limit that functional tests will never hit
fn generous_rate_limit() -> RateLimitConfig {
    RateLimitConfig {
        replenish_secs: 1,
        burst: 100_000,
    }
}

/// The contractual limit: one token every 3 seconds, burst of 20, i.e. 20
/// requests per minute per client address
fn contractual_rate_limit() -> RateLimitConfig {
    RateLimitConfig {
        replenish_secs: 3,
        burst: 20,
    }
}
