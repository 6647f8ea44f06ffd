//! Integration tests for request metrics collection.
//!
//! The Prometheus recorder is process-global, so every test in this binary
//! funnels through [`ensure_recorder`], and all assertions against the `/`
//! counter live in a single test body to keep counts exact.

use std::sync::Arc;

use axum_test::TestServer;

use backend_service_hello::{GREETING, app};
use backend_service_shared::{AppState, MetricsConfig, init_metrics};

/// Install the global Prometheus recorder, tolerating a prior install from
/// another test in this binary.
fn ensure_recorder() {
    let _ = init_metrics(&MetricsConfig::default());
}

/// Extract the value of the first sample line matching the metric name and
/// all given label fragments.
fn counter_value(scrape: &str, name: &str, labels: &[&str]) -> Option<u64> {
    scrape
        .lines()
        .filter(|line| line.starts_with(name) && !line.starts_with('#'))
        .find(|line| labels.iter().all(|label| line.contains(label)))
        .and_then(|line| line.rsplit(' ').next())
        .and_then(|value| value.parse().ok())
}

#[tokio::test(flavor = "multi_thread")]
async fn greeting_requests_are_counted() {
    ensure_recorder();

    let state = AppState::new(GREETING);
    let server = TestServer::new(app(state, "/metrics")).expect("router should start");

    // Sequential phase: the counter advances by exactly the request count.
    for _ in 0..7 {
        server.get("/").await.assert_status_ok();
    }

    let scrape = server.get("/metrics").await.text();
    let greeting_labels = [r#"method="GET""#, r#"path="/""#, r#"status="2xx""#];
    assert_eq!(
        counter_value(&scrape, "http_requests_total", &greeting_labels),
        Some(7),
        "scrape output:\n{}",
        scrape
    );
    assert_eq!(
        counter_value(
            &scrape,
            "backend_greetings_served_total",
            &[r#"service="hello""#]
        ),
        Some(7)
    );
    assert!(scrape.contains("http_request_duration_seconds"));

    // Concurrent phase: no increments are lost under parallel load.
    // axum-test's request future is `!Send` (its body is a `Pin<Box<dyn
    // Future>>` with no `Send` bound), so it cannot be driven across tokio's
    // multi-threaded scheduler via `JoinSet::spawn`. Each request runs on its
    // own OS thread with a dedicated current-thread runtime instead, keeping
    // the load genuinely parallel.
    let server = Arc::new(server);
    let mut handles = Vec::new();
    for _ in 0..100 {
        let server = Arc::clone(&server);
        handles.push(std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("current-thread runtime builds");
            rt.block_on(async {
                let response = server.get("/").await;
                response.assert_status_ok();
                response.assert_text("Hello from backend!");
            });
        }));
    }
    for handle in handles {
        handle.join().expect("request task panicked");
    }

    let scrape = server.get("/metrics").await.text();
    assert_eq!(
        counter_value(&scrape, "http_requests_total", &greeting_labels),
        Some(107)
    );
}

#[tokio::test]
async fn scrape_endpoint_renders_exposition_format() {
    ensure_recorder();

    let state = AppState::new(GREETING);
    let server = TestServer::new(app(state, "/metrics")).expect("router should start");

    let response = server.get("/metrics").await;
    response.assert_status_ok();

    // The first scrape was itself recorded, so a second one lists it
    let scrape = server.get("/metrics").await.text();
    assert!(
        scrape.contains("http_requests_total"),
        "scrape output:\n{}",
        scrape
    );
    assert!(scrape.contains(r#"path="/metrics""#));
}

#[tokio::test]
async fn unmatched_routes_are_counted_as_4xx() {
    ensure_recorder();

    let state = AppState::new(GREETING);
    let server = TestServer::new(app(state, "/metrics")).expect("router should start");

    server.get("/missing").await.assert_status_not_found();

    let scrape = server.get("/metrics").await.text();
    let value = counter_value(
        &scrape,
        "http_requests_total",
        &[r#"method="GET""#, r#"path="/missing""#, r#"status="4xx""#],
    );
    assert!(value.is_some_and(|v| v >= 1), "scrape output:\n{}", scrape);
}
