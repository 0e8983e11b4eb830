//! Login endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use database::{user, Credentials};

use crate::state::AppState;

/// Authenticate a user by mail and password.
pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Response {
    match user::authenticate_user(state.db.pool(), &credentials).await {
        Ok(account) => (StatusCode::OK, Json(account)).into_response(),
        Err(err) => state.errors.respond(err).await,
    }
}
