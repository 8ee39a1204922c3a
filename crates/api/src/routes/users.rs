//! Admin user API handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::{Map, Value};

use roster_core::UserId;

use crate::error::{AppError, Result};
use crate::models::NewUser;
use crate::services::UserService;
use crate::state::AppState;
use crate::views::{self, ApiVersion};

/// Request for creating a user.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub password: String,
    pub ssn: String,
}

/// Request for updating a user.
///
/// Only `name` is applied; the update is partial by design and any other
/// field a client sends is ignored at deserialization.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
}

/// List all users in the admin summary shape.
///
/// # Errors
///
/// Returns an error if the summary allow list disagrees with the model.
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<Map<String, Value>>>> {
    let users = UserService::new(state.store()).find_all();

    let shaped = users
        .iter()
        .map(views::admin_summary)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(Json(shaped))
}

/// Get a single user, shaped per the version negotiated from `Accept`.
///
/// The response `Content-Type` is the negotiated media type, so clients can
/// tell which representation they were served.
///
/// # Errors
///
/// Returns 404 if the id is absent and 406 if the `Accept` header names only
/// media types this API cannot produce.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Result<Response> {
    let accept = headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok());

    let version = ApiVersion::negotiate(accept)
        .ok_or_else(|| AppError::NotAcceptable(accept.unwrap_or_default().to_owned()))?;

    let user = UserService::new(state.store()).find_one(UserId::new(id))?;
    let body = version.shape_user(&user)?;

    Ok(([(header::CONTENT_TYPE, version.media_type())], Json(body)).into_response())
}

/// Create a user. Responds 201 with a `Location` header pointing at the new
/// resource and the V1 shape as the body.
///
/// # Errors
///
/// Returns 400 if a required field is blank.
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<Response> {
    if body.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".to_string()));
    }

    let user = UserService::new(state.store()).save(NewUser {
        name: body.name,
        password: body.password,
        ssn: body.ssn,
    });

    tracing::info!(user_id = %user.id, "created user");

    let location = format!("/admin/users/{}", user.id);
    let shaped = ApiVersion::V1.shape_user(&user)?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(shaped),
    )
        .into_response())
}

/// Update a user's name. Responds 204 with an empty body.
///
/// # Errors
///
/// Returns 404 if the id is absent.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<StatusCode> {
    UserService::new(state.store()).update_name(UserId::new(id), &body.name)?;

    tracing::info!(user_id = id, "updated user name");

    Ok(StatusCode::NO_CONTENT)
}
