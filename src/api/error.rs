//! HTTP error mapping.
//!
//! Translates gateway and validation failures into status codes with
//! plain-text bodies embedding the underlying detail.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tokio::task::JoinError;

use crate::model::InvalidInput;
use crate::storage::StoreError;

/// Error type for request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] InvalidInput),

    #[error("Invalid JSON: {0}")]
    MalformedBody(#[from] JsonRejection),

    #[error("Subscription not found")]
    NotFound,

    #[error("Database error: {0}")]
    Storage(StoreError),

    #[error("Internal error: {0}")]
    TaskJoin(#[from] JoinError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => Self::NotFound,
            other => Self::Storage(other),
        }
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Storage(_) | Self::TaskJoin(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, self.to_string()).into_response()
    }
}
