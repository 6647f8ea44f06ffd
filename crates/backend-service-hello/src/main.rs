//! Backend greeting HTTP service.
//!
//! Responds to `GET /` with a fixed greeting body and records request metrics
//! for every request/response pair, exposed in Prometheus text format on a
//! scrape endpoint.
//!
//! # Endpoints
//!
//! - `GET /` - Fixed greeting body
//! - `GET /metrics` - Prometheus metrics endpoint
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//!
//! # Configuration
//!
//! - `SERVICE_PORT` - HTTP port (default: 4000)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text
//! - `METRICS_ENABLED` - Metrics collection toggle (default: true)
//! - `METRICS_PATH` - Scrape endpoint path (default: /metrics)

use std::env;
use std::net::SocketAddr;

use tracing::{error, info};

use backend_service_hello::{GREETING, SERVICE_NAME, app};
use backend_service_shared::{AppState, LoggingConfig, MetricsConfig, init_logging, init_metrics};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (reads LOG_FORMAT from environment)
    let logging_config = LoggingConfig::from_env().with_service(SERVICE_NAME);
    init_logging(&logging_config);

    // Initialize metrics
    let metrics_config = MetricsConfig::from_env();
    if let Err(e) = init_metrics(&metrics_config) {
        // Log but don't fail - metrics are optional
        tracing::warn!(error = %e, "failed to initialize metrics, continuing without metrics");
    }

    let port: u16 = env::var("SERVICE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(4000);

    info!(port = port, "starting hello service");

    let state = AppState::new(GREETING);
    let router = app(state, &metrics_config.path);

    // Bind and serve; a bind failure is fatal
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        error!(error = %e, addr = %addr, "failed to bind listening port");
        e
    })?;

    info!(addr = %addr, "listening on");

    axum::serve(listener, router).await?;

    Ok(())
}
