//! Router assembly for the backend greeting HTTP service.
//!
//! The binary in `main.rs` only deals with process concerns (logging,
//! metrics recorder, port binding); the routes live here so the integration
//! tests can drive exactly the wiring the binary serves.

use axum::{Router, extract::State, routing::get};

use backend_service_shared::{
    AppState, MetricsLayer, health_live, health_ready, metrics_handler, record_greeting_served,
};

/// Body served by `GET /`.
pub const GREETING: &str = "Hello from backend!";

/// Service name used for log entries and business metrics.
pub const SERVICE_NAME: &str = "hello";

/// Assemble the service router.
///
/// Routes:
/// - `GET /` - the greeting
/// - `GET {metrics_path}` - Prometheus scrape endpoint
/// - `GET /health/live` / `GET /health/ready` - probes
///
/// The metrics layer wraps the whole router, so unmatched paths and the
/// scrape endpoint itself are counted too.
pub fn app(state: AppState, metrics_path: &str) -> Router {
    Router::new()
        .route("/", get(greet_handler))
        .route(metrics_path, get(metrics_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .layer(MetricsLayer)
        .with_state(state)
}

/// Handle `GET /` requests.
async fn greet_handler(State(state): State<AppState>) -> String {
    record_greeting_served(SERVICE_NAME);
    tracing::debug!("serving greeting");
    state.greeting().to_string()
}
