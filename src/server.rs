//! HTTP server setup and lifecycle.
//!
//! Opens the store, initializes the schema, and serves the router with
//! graceful shutdown support. Schema initialization failure is fatal —
//! the process must not accept traffic without a valid schema.

use std::net::SocketAddr;
use tokio::sync::watch;

use crate::api::{self, AppState};
use crate::config::Config;
use crate::storage::pool::StorePool;
use crate::storage::subscriptions::SubscriptionStore;

/// Run the Subtrack HTTP server.
///
/// # Arguments
///
/// * `config` - Server configuration
/// * `shutdown_rx` - Receiver for shutdown signal
///
/// # Returns
///
/// Returns when the server has shut down.
pub async fn run_server(
    config: Config,
    mut shutdown_rx: watch::Receiver<bool>,
) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    // Open the pool and ensure the schema exists before binding.
    let pool = StorePool::new(config.db_path(), config.pool_size)?;
    pool.initialize()?;
    tracing::info!(db = %config.db_path().display(), "Store initialized");

    let state = AppState {
        store: SubscriptionStore::new(pool),
    };
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(address = %listener.local_addr()?, "Starting Subtrack HTTP server");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            // Wait for shutdown signal
            let _ = shutdown_rx.changed().await;
            tracing::info!("Shutdown signal received, stopping server");
        })
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
