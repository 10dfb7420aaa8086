//! User handlers.
//!
//! - `GET /api/v1/users` - List users
//! - `GET /api/v1/users/{id}` - Get a user
//! - `POST /api/v1/users` - Create a user
//! - `PUT /api/v1/users/{id}` - Update a user
//! - `DELETE /api/v1/users/{id}` - Delete a user
//!
//! Extractor rejections are rendered as [`ApiError`] responses. Identifiers
//! are read as signed numbers; a negative one names no user.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::api::dto::{UserRequest, UserResponse};
use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::UserId;

/// `GET /api/v1/users`
///
/// # Response
///
/// - `200 OK` - Every stored user, ordered by identifier
#[allow(clippy::unused_async)]
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<UserResponse>> {
    let users: Vec<UserResponse> = state.users.list().into_iter().map(Into::into).collect();
    tracing::debug!(count = users.len(), "Listed users");
    Json(users)
}

/// `GET /api/v1/users/{id}`
///
/// # Errors
///
/// - `404 Not Found` - No user has this identifier
/// - `400 Bad Request` - The identifier is not a number
#[allow(clippy::unused_async)]
pub async fn get_user(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = resolve_id(path)?;

    state
        .users
        .get(id)
        .map(|user| Json(user.into()))
        .ok_or_else(|| ApiError::user_not_found(id))
}

/// `POST /api/v1/users`
///
/// # Request Body
///
/// ```json
/// { "name": "Test", "email": "test@example.com", "phone": "1111111111" }
/// ```
///
/// # Response
///
/// - `201 Created` - The stored user including its assigned identifier
///
/// # Errors
///
/// - `4xx` - The body is not a valid user JSON document
#[allow(clippy::unused_async)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let Json(request) = payload?;

    let user = state.users.create(request.into());
    tracing::info!(user_id = %user.id, "User created");

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// `PUT /api/v1/users/{id}`
///
/// Replaces name, email and phone. The identifier never changes.
///
/// # Errors
///
/// - `404 Not Found` - No user has this identifier; nothing is modified
/// - `4xx` - Malformed identifier or body
#[allow(clippy::unused_async)]
pub async fn update_user(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = resolve_id(path)?;
    let Json(request) = payload?;

    let user = state
        .users
        .update(id, request.into())
        .ok_or_else(|| ApiError::user_not_found(id))?;
    tracing::info!(user_id = %user.id, "User updated");

    Ok(Json(user.into()))
}

/// `DELETE /api/v1/users/{id}`
///
/// # Response
///
/// - `204 No Content` - The user was removed
///
/// # Errors
///
/// - `404 Not Found` - No user has this identifier
#[allow(clippy::unused_async)]
pub async fn delete_user(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = resolve_id(path)?;

    if state.users.delete(id) {
        tracing::info!(user_id = %id, "User deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::user_not_found(id))
    }
}

fn resolve_id(path: Result<Path<i64>, PathRejection>) -> Result<UserId, ApiError> {
    let Path(raw) = path?;
    UserId::from_path(raw).ok_or_else(|| ApiError::user_not_found(raw))
}

// =============================================================================
// Tests
// =============================================================================
