//! HTTP route handlers for the users API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Admin users
//! GET  /admin/users            - List users (admin summary shape)
//! POST /admin/users            - Create user (201 + Location)
//! GET  /admin/users/{id}       - Get user (shape negotiated via Accept:
//!                                application/vnd.company.appv1+json or
//!                                application/vnd.company.appv2+json)
//! PUT  /admin/users/{id}       - Update user name (204, empty body)
//! ```

pub mod users;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the admin user routes router.
pub fn admin_user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{id}",
            get(users::get_user).put(users::update_user),
        )
}

/// Create all routes for the users API.
pub fn routes() -> Router<AppState> {
    Router::new().nest("/admin", admin_user_routes())
}
