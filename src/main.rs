//! Deckboard - a card deck API server with a read-side TTL cache
//!
//! Serves deck and card lists cache-aside over a backing store, invalidating
//! exactly the affected key on card writes.

mod api;
mod cache;
mod config;
mod error;
mod models;
mod service;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use config::Config;
use store::MemoryDeckStore;

/// Main entry point for the deck server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Construct the backing store and the cache-aside service
/// 4. Create Axum router with all endpoints
/// 5. Start HTTP server on configured port
/// 6. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deckboard=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting deckboard server");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_ttl={}s, port={}",
        config.cache_ttl, config.server_port
    );

    // The cache and its TTL live inside the service, created here and owned
    // by the server for the process lifetime
    let store = Arc::new(MemoryDeckStore::seeded());
    let state = AppState::from_config(&config, store);
    info!("Deck service initialized");

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    info!("Server shutdown complete");
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
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
}
