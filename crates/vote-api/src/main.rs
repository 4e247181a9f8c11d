//! Voting system server entry point
//!
//! Configuration comes from environment variables (or a `.env` file); every
//! value has a default, so a bare `cargo run -p vote-api` serves on
//! 127.0.0.1:8000 with a `youtubers.sqlite3` database next to the binary.

use tracing::{error, info};

use vote_common::{try_init_tracing, AppConfig, AppError};

#[tokio::main]
async fn main() {
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::from_env().map_err(|e| AppError::Config(e.to_string()))?;

    info!(
        address = %config.server.address(),
        database = %config.database.path,
        seed_channels = config.seed.channels.len(),
        "Configuration loaded"
    );

    vote_api::run(config).await
}
