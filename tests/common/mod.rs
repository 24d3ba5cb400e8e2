//! Test utilities and server harness for Subtrack tests.
//!
//! Provides:
//! - In-process test server on an ephemeral port
//! - HTTP client helpers
//! - Test database fixtures

use std::net::SocketAddr;
use tempfile::TempDir;
use tokio::sync::watch;

use subtrack::api::{router, AppState};
use subtrack::observability::tracing::init_test_tracing;
use subtrack::storage::pool::StorePool;
use subtrack::storage::subscriptions::SubscriptionStore;

/// A running Subtrack server backed by a temporary database.
///
/// The database directory is cleaned up when the harness is dropped.
pub struct TestServer {
    /// Address the server is listening on
    pub addr: SocketAddr,
    /// HTTP client pointed at the server
    pub client: reqwest::Client,
    store: SubscriptionStore,
    shutdown_tx: watch::Sender<bool>,
    _temp_dir: TempDir,
}

impl TestServer {
    /// Start a server on 127.0.0.1 with a random port.
    pub async fn start() -> Self {
        init_test_tracing();

        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let pool = StorePool::new(temp_dir.path().join("test.db"), 5)
            .expect("failed to create pool");
        pool.initialize().expect("failed to initialize schema");
        let store = SubscriptionStore::new(pool);

        let app = router(AppState {
            store: store.clone(),
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind listener");
        let addr = listener.local_addr().expect("failed to read local addr");

        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .expect("server error");
        });

        Self {
            addr,
            client: reqwest::Client::new(),
            store,
            shutdown_tx,
            _temp_dir: temp_dir,
        }
    }

    /// Absolute URL for a request path.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Direct gateway access for asserting on stored state.
    pub fn store(&self) -> &SubscriptionStore {
        &self.store
    }

    /// Stop the server.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(true);
    }
}

/// A valid create/update body with the given name, category, cost, date.
pub fn subscription_body(
    name: &str,
    category: &str,
    cost: f64,
    next_billing: &str,
) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "category": category,
        "cost": cost,
        "billingCycle": "monthly",
        "nextBilling": next_billing,
        "description": ""
    })
}
