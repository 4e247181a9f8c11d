//! Server setup and initialization
//!
//! Provides the main application builder and server runner. Startup order
//! matters: schema creation, then seeding, then the name snapshot, so the
//! snapshot observes every seeded row.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use vote_common::{AppConfig, AppError};
use vote_core::{ChannelIndex, ChannelRepository, DomainError};
use vote_db::{create_pool, init_schema, SqliteChannelRepository};
use vote_service::ServiceContext;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router(state.rate_limit());
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool and schema
    info!("Connecting to SQLite...");
    let db_config = vote_db::DatabaseConfig {
        path: config.database.path.clone(),
        max_connections: config.database.max_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config).await.map_err(AppError::database)?;
    init_schema(&pool).await.map_err(AppError::database)?;
    info!("SQLite connection established");

    // Create repository
    let channel_repo: Arc<dyn ChannelRepository> = Arc::new(SqliteChannelRepository::new(pool));

    // Seed configured channels, then capture the startup name snapshot
    seed_channels(channel_repo.as_ref(), &config.seed.channels).await?;
    let channel_index = load_channel_index(channel_repo.as_ref()).await?;

    let context = ServiceContext::new(channel_repo, Arc::new(channel_index));

    Ok(AppState::new(context, config))
}

/// Insert seed channels that do not exist yet; rows already present are
/// left untouched. Seeding happens before the snapshot is captured.
async fn seed_channels(repo: &dyn ChannelRepository, names: &[String]) -> Result<(), AppError> {
    for name in names {
        match repo.create(name, 0).await {
            Ok(_) => info!(channel = %name, "Seeded channel"),
            Err(DomainError::ChannelExists(_)) => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// Capture the startup name snapshot from the store
async fn load_channel_index(repo: &dyn ChannelRepository) -> Result<ChannelIndex, AppError> {
    let names = repo
        .list_all()
        .await?
        .into_iter()
        .map(|channel| channel.name)
        .collect();
    let index = ChannelIndex::from_names(names);
    info!(channels = index.len(), "Channel index loaded");
    Ok(index)
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Server(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    // Connect-info serving: the rate limiter keys on the peer address
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| AppError::Server(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid server address: {e}")))?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
