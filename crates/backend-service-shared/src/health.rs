//! Health check handlers for container orchestration probes.
//!
//! Provides `/health/live` and `/health/ready` endpoints that return JSON
//! status responses for liveness and readiness probes.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Status indicator: "ok" or "not_ready: ...".
    pub status: String,

    /// Service name for identification.
    pub service: String,

    /// Service version from build-time.
    pub version: String,

    /// Seconds since the service started (for readiness check).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime_seconds: Option<i64>,
}

impl HealthStatus {
    /// Create a healthy liveness status.
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            uptime_seconds: None,
        }
    }

    /// Create a ready status with uptime information.
    pub fn ready(service: &str, version: &str, uptime_seconds: i64) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            uptime_seconds: Some(uptime_seconds),
        }
    }

    /// Create a not-ready status.
    pub fn not_ready(service: &str, version: &str, reason: &str) -> Self {
        Self {
            status: format!("not_ready: {}", reason),
            service: service.to_string(),
            version: version.to_string(),
            uptime_seconds: None,
        }
    }
}

/// Liveness probe handler.
///
/// Returns 200 OK if the service is running. This is a simple check that does
/// not depend on any state.
///
/// # Example
///
/// ```text
/// GET /health/live
/// {"status":"ok","service":"hello","version":"0.1.0"}
/// ```
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe handler.
///
/// Returns 200 OK if the service is ready to accept traffic, meaning the
/// application state was constructed with a non-empty greeting body.
///
/// # Example
///
/// ```text
/// GET /health/ready
/// {"status":"ok","service":"hello","version":"0.1.0","uptime_seconds":42}
/// ```
pub async fn health_ready(State(state): State<AppState>) -> Response {
    let service = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    if state.greeting().is_empty() {
        let status = HealthStatus::not_ready(service, version, "empty greeting body");
        return (StatusCode::SERVICE_UNAVAILABLE, Json(status)).into_response();
    }

    let status = HealthStatus::ready(service, version, state.uptime_seconds());
    (StatusCode::OK, Json(status)).into_response()
}
