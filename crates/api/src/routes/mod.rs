//! Route handlers for the user API.

pub mod health;
pub mod login;
pub mod users;

use axum::extract::State;
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;

use crate::responder;
use crate::state::AppState;

/// Build the router with all routes.
///
/// Unmatched URLs fall through to the same error path as failed
/// operations.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // User management
        .route("/users", post(users::register))
        .route(
            "/users/:id",
            get(users::get_user)
                .patch(users::patch_user)
                .delete(users::delete_user),
        )
        // Authentication
        .route("/login", post(login::login))
        .fallback(not_found)
}

async fn not_found(State(state): State<AppState>) -> Response {
    state.errors.respond(responder::url_not_found()).await
}
