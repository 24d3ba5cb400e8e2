//! SQLite storage layer for Subtrack.
//!
//! Provides:
//! - Schema initialization (idempotent create-if-absent)
//! - A pooled connection handle shared across request handlers
//! - The subscription gateway mapping rows to domain records

pub mod pool;
pub mod schema;
pub mod subscriptions;

use thiserror::Error;

/// Error type for storage operations.
///
/// `NotFound` is kept distinct so handlers can answer 404 without
/// inspecting database error codes; everything else is a storage failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no matching record")]
    NotFound,

    #[error("Failed to get pooled connection: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}
