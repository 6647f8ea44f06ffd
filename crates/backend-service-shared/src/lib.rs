//! Shared infrastructure for the backend greeting HTTP service.
//!
//! This crate provides the common plumbing the service binary is assembled
//! from:
//!
//! - [`AppState`]: Greeting body and start timestamp, shared with handlers
//! - [`health`]: Health check handlers for liveness/readiness probes
//! - [`metrics`]: Prometheus recorder setup and the scrape handler
//! - [`logging`]: Structured JSON logging setup
//! - [`middleware`]: Request tracking and HTTP metrics middleware
//!
//! # Architecture
//!
//! The service follows a thin-handler pattern: the binary crate only wires
//! routes to handlers, while everything a request passes through on its way
//! in and out lives here:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  axum Router                                                │
//! │  - MetricsLayer (counter, latency, request span)            │
//! │  - greeting / scrape / probe handlers                       │
//! │  - AppState via the State extractor                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides state fixtures for handler testing.
//! Enable the `test-utils` feature to access it from dependent crates.

#![deny(warnings)]

mod health;
pub mod logging;
pub mod metrics;
pub mod middleware;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use metrics::{
    init_metrics, metrics_handler, record_greeting_served, MetricsConfig, MetricsError,
};
pub use middleware::{extract_or_generate_request_id, MetricsLayer, RequestId};
pub use state::AppState;
