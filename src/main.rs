//! Subtrack: a subscription tracker with a JSON HTTP API.
//!
//! # Usage
//!
//! ```bash
//! subtrack --port 8080 --data-dir ./data --log-level info
//! ```
//!
//! Environment variables can also be used:
//! - `SUBTRACK_PORT`: Port to listen on
//! - `SUBTRACK_DATA_DIR`: Data directory for SQLite
//! - `RUST_LOG`: Log level (trace, debug, info, warn, error)

use std::fs;
use subtrack::config::Config;
use subtrack::observability::tracing::init_tracing;
use subtrack::server::run_server;
use tokio::sync::watch;

/// Print startup banner with version and configuration.
fn print_banner(config: &Config) {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!(
        r#"
   ____        _     _                  _
  / ___| _   _| |__ | |_ _ __ __ _  ___| | __
  \___ \| | | | '_ \| __| '__/ _` |/ __| |/ /
   ___) | |_| | |_) | |_| | | (_| | (__|   <
  |____/ \__,_|_.__/ \__|_|  \__,_|\___|_|\_\

  Subtrack v{} - Subscription Tracker API

  Configuration:
    Address:    {}:{}
    Data Dir:   {}
    Log Level:  {}

  Press Ctrl+C to shutdown gracefully.
"#,
        version,
        config.host,
        config.port,
        config.data_dir.display(),
        config.log_level
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse configuration from CLI arguments and environment
    let config = Config::parse_args();

    // Initialize tracing/logging
    init_tracing(&config.log_level);

    // Ensure data directory exists
    fs::create_dir_all(&config.data_dir)?;

    // Print startup banner
    print_banner(&config);

    // Create shutdown signal channel
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // Spawn signal handler task
    let shutdown_tx_clone = shutdown_tx.clone();
    tokio::spawn(async move {
        // Wait for SIGTERM or SIGINT (Ctrl+C)
        let ctrl_c = tokio::signal::ctrl_c();

        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            let mut sigterm =
                signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");

            tokio::select! {
                _ = ctrl_c => {
                    tracing::info!("Received SIGINT (Ctrl+C), initiating shutdown...");
                }
                _ = sigterm.recv() => {
                    tracing::info!("Received SIGTERM, initiating shutdown...");
                }
            }
        }

        #[cfg(not(unix))]
        {
            ctrl_c.await.expect("failed to listen for ctrl+c");
            tracing::info!("Received Ctrl+C, initiating shutdown...");
        }

        // Signal shutdown
        let _ = shutdown_tx_clone.send(true);
    });

    // Run the server
    run_server(config, shutdown_rx).await?;

    tracing::info!("Subtrack shutdown complete");
    Ok(())
}
