//! HTTP server initialization and runtime setup.
//!
//! Handles the store lifecycle, fallback selection, and the Axum server
//! lifecycle including graceful shutdown.

use crate::api::fallback;
use crate::application::services::MappingService;
use crate::config::Config;
use crate::infrastructure::persistence::SqlPathMappingRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQL connection pool (with startup retries)
/// - `url_table` if missing
/// - Fallback responder
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The store is unreachable or the table cannot be created
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = SqlPathMappingRepository::connect(&config.store_options())
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    repository
        .initialize()
        .await
        .context("Failed to initialize database")?;

    let repository = Arc::new(repository);
    let mapping_service = Arc::new(MappingService::new(repository.clone()));
    let state = AppState::new(mapping_service, fallback::from_mode(config.fallback));

    let app = app_router(
        state,
        Duration::from_secs(config.request_timeout_seconds),
    );

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    repository.close().await;
    tracing::info!("Database connections closed");

    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
