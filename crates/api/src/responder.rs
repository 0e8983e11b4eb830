//! Centralized error handling at the HTTP boundary.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use database::ApiError;
use tracing::debug;

use crate::error_log::ErrorSink;

/// Consumes an [`ApiError`] at the boundary: writes the log record, then
/// emits the client payload.
///
/// The sink is an injected dependency, not ambient state, so tests can
/// observe logging without real file I/O. The cause and its trace never
/// reach the payload.
#[derive(Clone)]
pub struct ErrorResponder {
    sink: Arc<dyn ErrorSink>,
}

impl ErrorResponder {
    pub fn new(sink: Arc<dyn ErrorSink>) -> Self {
        Self { sink }
    }

    /// Log the error, then build the `{"error": <message>}` response.
    ///
    /// The log write is awaited (a single bounded file append) and its
    /// failures are swallowed by the sink, so the response always goes out.
    pub async fn respond(&self, err: ApiError) -> Response {
        debug!(error = ?err, "handling request error");
        self.sink.log(&err).await;

        let status = StatusCode::from_u16(err.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = serde_json::json!({ "error": err.message() });
        (status, Json(body)).into_response()
    }
}

/// Error for a request that matched no route; funneled through the same
/// responder as operation failures.
pub fn url_not_found() -> ApiError {
    ApiError::not_found("Url not found !")
}
