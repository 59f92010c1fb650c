//! Storefront Cache - read-through response caching for a storefront API
//!
//! Serves catalog reads through an in-memory TTL cache with pattern-based
//! invalidation on writes.

mod api;
mod cache;
mod catalog;
mod config;
mod error;
mod models;
mod tasks;

use std::net::SocketAddr;

use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use config::Config;
use tasks::{spawn_cleanup_task, CleanupTask};

/// Main entry point for the storefront cache server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the cache store and application state
/// 4. Start the background TTL cleanup task
/// 5. Create the Axum router with all endpoints
/// 6. Start the HTTP server on the configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM, stopping the sweep
#[tokio::main]
async fn main() {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Storefront Cache Server");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: default_ttl={:?}, cleanup_interval={:?}, port={}",
        config.default_ttl, config.cleanup_interval, config.server_port
    );

    // Create application state with cache store and catalog
    let state = AppState::from_config(&config);
    info!("Cache store initialized");

    // Start background cleanup task
    let cleanup_task = spawn_cleanup_task(state.cache.clone(), config.cleanup_interval);
    info!("Background cleanup task started");

    // Create router with all endpoints
    let app = create_router(state, config.ttls);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_task))
        .await
        .unwrap();

    info!("Server shutdown complete");
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, stops the cleanup task before the server drains.
async fn shutdown_signal(cleanup_task: CleanupTask) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    cleanup_task.stop();
}
