//! Observability infrastructure.
//!
//! Provides structured logging setup for the server and tests.

pub mod tracing;
