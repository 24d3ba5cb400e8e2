//! HTTP routing and handlers.
//!
//! One handler per route; no cross-request state beyond the shared store
//! handle. Unmatched requests fall through to axum's default 404.

pub mod error;
pub mod health;
pub mod stats;
pub mod subscriptions;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::storage::subscriptions::SubscriptionStore;

/// State shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: SubscriptionStore,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/dbcheck", get(health::dbcheck))
        .route(
            "/api/subscriptions",
            get(subscriptions::list).post(subscriptions::create),
        )
        .route(
            "/api/subscriptions/:id",
            get(subscriptions::get)
                .put(subscriptions::update)
                .delete(subscriptions::delete),
        )
        .route("/api/stats", get(stats::stats))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
