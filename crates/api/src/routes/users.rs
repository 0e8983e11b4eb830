//! User CRUD endpoints.
//!
//! Thin adapters: each handler has one uniform branch — use the
//! operation's value, or hand its error to the responder.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use database::{user, NewUser, UserUpdate};

use crate::state::AppState;

/// Register a new user.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<NewUser>,
) -> Response {
    match user::create_user(state.db.pool(), &input).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(err) => state.errors.respond(err).await,
    }
}

/// Fetch a user by id.
pub async fn get_user(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match user::get_user(state.db.pool(), id).await {
        Ok(found) => (StatusCode::OK, Json(found)).into_response(),
        Err(err) => state.errors.respond(err).await,
    }
}

/// Update a user's profile fields.
pub async fn patch_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<UserUpdate>,
) -> Response {
    match user::update_user(state.db.pool(), id, &input).await {
        Ok(updated) => (StatusCode::OK, Json(updated)).into_response(),
        Err(err) => state.errors.respond(err).await,
    }
}

/// Delete a user.
pub async fn delete_user(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match user::delete_user(state.db.pool(), id).await {
        Ok(deleted) => {
            (StatusCode::OK, Json(serde_json::json!({ "deleted": deleted }))).into_response()
        }
        Err(err) => state.errors.respond(err).await,
    }
}
