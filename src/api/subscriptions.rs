//! CRUD handlers for subscription records.
//!
//! Each handler validates its input, runs the gateway call on the blocking
//! pool, and serializes a JSON response. Path ids are parsed by the
//! `Path<i64>` extractor, so non-numeric ids are rejected with 400 before
//! reaching the store; undecodable bodies are likewise answered 400, not
//! the extractor's default 422.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tokio::task::spawn_blocking;

use super::error::ApiError;
use super::AppState;
use crate::model::SubscriptionInput;

/// List all subscriptions ordered by next billing date.
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let store = state.store.clone();
    let subscriptions = spawn_blocking(move || store.list()).await??;
    Ok(Json(subscriptions))
}

/// Fetch one subscription by id.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let store = state.store.clone();
    let subscription = spawn_blocking(move || store.get(id)).await??;
    Ok(Json(subscription))
}

/// Create a subscription; responds 201 with the stored record.
#[tracing::instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<SubscriptionInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = body?;
    input.validate()?;
    tracing::debug!(?input, "creating subscription");

    let store = state.store.clone();
    let created = spawn_blocking(move || store.insert(input)).await??;

    tracing::debug!(id = created.id, "subscription created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace all fields of an existing subscription.
///
/// The id comes from the path; any id in the body is ignored.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<SubscriptionInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = body?;
    input.validate()?;

    let store = state.store.clone();
    let updated = spawn_blocking(move || store.update(id, input)).await??;
    Ok(Json(updated))
}

/// Remove a subscription; responds 204 with an empty body.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let store = state.store.clone();
    spawn_blocking(move || store.delete(id)).await??;
    Ok(StatusCode::NO_CONTENT)
}
