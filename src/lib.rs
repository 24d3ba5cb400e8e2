//! Subtrack: a subscription tracker with a JSON HTTP API.
//!
//! Subtrack stores recurring subscription records in SQLite and exposes
//! CRUD routes plus spend statistics over HTTP.
//!
//! # Architecture
//!
//! - **HTTP-Native**: All routes served by axum with JSON bodies
//! - **Pooled Persistence**: r2d2-managed rusqlite connections in WAL mode
//! - **Stateless Handlers**: Every request re-reads or re-writes the store
//! - **Observable**: Structured tracing on requests and failures
//!
//! # Modules
//!
//! - [`api`]: Router and HTTP handlers (health, subscriptions, stats)
//! - [`config`]: CLI and environment configuration
//! - [`model`]: Domain records and wire shapes
//! - [`observability`]: Tracing setup
//! - [`server`]: HTTP server setup and lifecycle
//! - [`storage`]: SQLite persistence layer

// Lint configuration
#![warn(clippy::all)]
#![allow(
    clippy::module_name_repetitions,    // storage::pool::StorePool is fine
    clippy::must_use_candidate,         // Not all functions need #[must_use]
    clippy::missing_errors_doc,         // Error docs can be verbose
    clippy::missing_panics_doc,         // Panic docs can be verbose
    clippy::needless_raw_string_hashes  // r#""# is fine for SQL
)]

pub mod api;
pub mod config;
pub mod model;
pub mod observability;
pub mod server;
pub mod storage;
