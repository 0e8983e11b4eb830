//! Application state shared across handlers.

use database::Database;

use crate::responder::ErrorResponder;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection.
    pub db: Database,
    /// Centralized error handler.
    pub errors: ErrorResponder,
}

impl AppState {
    /// Create new application state.
    pub fn new(db: Database, errors: ErrorResponder) -> Self {
        Self { db, errors }
    }
}
