//! Application state for the greeting service.
//!
//! This module provides the shared state structure that axum handlers use to
//! access the greeting body and the process start timestamp.

use std::sync::Arc;

use chrono::{DateTime, Utc};

/// Shared application state for all axum handlers.
///
/// This struct is cheaply cloneable (using `Arc` internally) and should be
/// shared via axum's `State` extractor. It is constructed once in `main` and
/// replaces the global app-registration pattern of typical web frameworks
/// with an explicit value passed to the router.
///
/// # Example
///
/// ```
/// use axum::{Router, routing::get, extract::State};
/// use backend_service_shared::AppState;
///
/// async fn handler(State(state): State<AppState>) -> String {
///     state.greeting().to_string()
/// }
///
/// let state = AppState::new("Hello from backend!");
/// let app: Router = Router::new()
///     .route("/", get(handler))
///     .with_state(state);
/// ```
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    greeting: String,
    started_at: DateTime<Utc>,
}

impl AppState {
    /// Create application state with the given greeting body.
    ///
    /// The start timestamp is captured at construction time and drives the
    /// `uptime_seconds` field of the readiness probe.
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                greeting: greeting.into(),
                started_at: Utc::now(),
            }),
        }
    }

    /// The greeting body returned by `GET /`.
    pub fn greeting(&self) -> &str {
        &self.inner.greeting
    }

    /// When this state was constructed (process start for practical purposes).
    pub fn started_at(&self) -> DateTime<Utc> {
        self.inner.started_at
    }

    /// Seconds elapsed since the state was constructed.
    ///
    /// Clamped to zero so clock adjustments never produce a negative uptime.
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.inner.started_at).num_seconds().max(0)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("greeting", &self.inner.greeting)
            .field("started_at", &self.inner.started_at)
            .finish()
    }
}
