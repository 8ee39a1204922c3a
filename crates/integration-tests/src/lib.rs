//! Integration tests for Roster.
//!
//! Tests drive the full axum router in-process with `tower::ServiceExt`
//! oneshot requests - no listening socket or external services required.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p roster-integration-tests
//! ```

use axum::Router;

use roster_api::config::ApiConfig;
use roster_api::routes;
use roster_api::state::AppState;
use roster_api::store::UserStore;

/// Build the full application router over a freshly seeded store.
///
/// Mirrors the wiring in the API binary's `main`, minus the listener and
/// observability layers.
#[must_use]
pub fn test_app() -> Router {
    let state = AppState::new(ApiConfig::default(), UserStore::seeded());
    Router::new().merge(routes::routes()).with_state(state)
}
