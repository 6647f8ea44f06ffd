//! Integration tests for the greeting service endpoints.

use axum_test::TestServer;
use serde_json::Value;

use backend_service_hello::{GREETING, app};
use backend_service_shared::AppState;

fn test_server() -> TestServer {
    let state = AppState::new(GREETING);
    TestServer::new(app(state, "/metrics")).expect("router should start")
}

#[tokio::test]
async fn greeting_route_returns_fixed_body() {
    let server = test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    response.assert_text("Hello from backend!");
}

#[tokio::test]
async fn unregistered_path_is_not_found() {
    let server = test_server();

    let response = server.get("/nope").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn post_to_greeting_route_is_rejected() {
    let server = test_server();

    // Only GET is registered on "/"; axum answers 405 for other methods
    let response = server.post("/").await;

    assert_eq!(response.status_code(), 405);
}

#[tokio::test]
async fn health_live_reports_ok() {
    let server = test_server();

    let response = server.get("/health/live").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["service"].is_string());
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn health_ready_reports_uptime() {
    let server = test_server();

    let response = server.get("/health/ready").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["uptime_seconds"].as_i64().unwrap() >= 0);
}

#[tokio::test]
async fn port_can_only_be_bound_once() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("first bind succeeds");
    let addr = listener.local_addr().unwrap();

    let second = tokio::net::TcpListener::bind(addr).await;
    assert!(second.is_err(), "second bind of {} should fail", addr);
}
