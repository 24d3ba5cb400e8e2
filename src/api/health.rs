//! Liveness and store-health handlers.
//!
//! `/api/health` answers without touching the store; `/api/dbcheck`
//! distinguishes "alive" from "fully operational".

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use super::AppState;

/// Fixed liveness payload; never touches the store.
pub async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok", "message": "Server is running"}))
}

/// Ping the store and report whether it is reachable.
pub async fn dbcheck(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store.clone();
    let result = tokio::task::spawn_blocking(move || store.ping()).await;

    match result {
        Ok(Ok(())) => (
            StatusCode::OK,
            Json(json!({"status": "ok", "message": "Database connection successful"})),
        ),
        Ok(Err(err)) => {
            tracing::error!(error = %err, "store ping failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"status": "error", "message": "Database connection failed"})),
            )
        }
        Err(err) => {
            tracing::error!(error = %err, "store ping task failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"status": "error", "message": "Database connection failed"})),
            )
        }
    }
}
