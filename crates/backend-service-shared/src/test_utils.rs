//! Test utilities for service handler testing.
//!
//! This module provides fixtures and helpers for testing HTTP handlers
//! against a pre-built application state.

use crate::state::AppState;

/// Greeting body used by the test fixtures.
pub const TEST_GREETING: &str = "Hello from backend!";

/// Build a fresh test AppState with the fixture greeting.
///
/// States are cheap to construct, so each call returns a new one with its own
/// start timestamp.
pub fn test_state() -> AppState {
    AppState::new(TEST_GREETING)
}

/// Generate a unique request ID for testing.
pub fn test_request_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("test-{}", timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_has_fixture_greeting() {
        let state = test_state();
        assert_eq!(state.greeting(), TEST_GREETING);
    }

    #[test]
    fn test_request_id_unique() {
        let id1 = test_request_id();
        let id2 = test_request_id();
        assert_ne!(id1, id2);
    }
}
