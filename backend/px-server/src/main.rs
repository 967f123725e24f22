use px_auth::TokenIssuer;
use px_config::{Config, ConfigError, Section};
use px_db::{RefreshTokenRepository, UserRepository};
use px_server::error::ServerError;
use px_server::{AppState, ShutdownCoordinator, build_router, logger};
use px_session::{SessionService, spawn_sweeper};

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional; real environment variables win
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path = config.log_file_path()?;
    if let Some(parent) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(parent).map_err(ServerError::from)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting px-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool (runs migrations)
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = px_db::connect(&database_path, config.database.max_connections)
        .await
        .map_err(ServerError::from)?;
    info!("Database ready");

    // Token issuer
    let access_lifetime = chrono::Duration::from_std(config.auth.access_token_ttl())
        .map_err(|e| {
            ConfigError::invalid(Section::Auth, format!("access token ttl out of range: {e}"))
        })?;
    let refresh_lifetime = chrono::Duration::from_std(config.auth.refresh_token_ttl())
        .map_err(|e| {
            ConfigError::invalid(Section::Auth, format!("refresh token ttl out of range: {e}"))
        })?;
    let issuer = Arc::new(TokenIssuer::with_hs256(
        config.auth.secret_bytes()?,
        access_lifetime,
        refresh_lifetime,
    ));
    info!("JWT: HS256 token issuer ready");

    // Session orchestrator over the SQLite stores
    let refresh_tokens = Arc::new(RefreshTokenRepository::new(pool.clone()));
    let sessions = Arc::new(SessionService::new(
        Arc::new(UserRepository::new(pool.clone())),
        refresh_tokens.clone(),
        issuer,
    ));

    // Create shutdown coordinator
    let shutdown = ShutdownCoordinator::new();

    // Background sweep of expired refresh records
    let sweeper = spawn_sweeper(
        refresh_tokens,
        config.auth.sweep_interval(),
        shutdown.subscribe(),
    );

    // Build application state
    let app_state = AppState {
        pool: pool.clone(),
        sessions,
        handler_timeout: config.handler.timeout(),
        shutdown: shutdown.clone(),
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Spawn signal handler for graceful shutdown
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    let mut guard = shutdown.subscribe_guard();

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            guard.wait().await;
            info!("Stopped accepting connections");
        })
        .await?;

    if let Err(e) = sweeper.await {
        warn!("Sweeper task ended abnormally: {}", e);
    }

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}
