//! The API-facing error value every failed operation produces.

use std::error::Error;
use std::fmt;

use chrono::{DateTime, Utc};

type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Classification of an [`ApiError`].
///
/// Closed set: extend by adding a variant, not by inventing ad hoc status
/// codes at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Zero rows, missing entity, or an unmatched route.
    NotFound,
    /// Authentication mismatch.
    BadCredentials,
    /// Underlying execution failure.
    Internal,
}

impl ErrorKind {
    /// HTTP status code for this kind.
    pub fn status_code(self) -> u16 {
        match self {
            ErrorKind::NotFound => 404,
            ErrorKind::BadCredentials => 400,
            ErrorKind::Internal => 500,
        }
    }
}

/// An immutable error value: a client-safe message, a classification, an
/// optional wrapped cause, and the moment it occurred.
///
/// The cause is diagnostic detail for the error log; it is never part of
/// the client-facing payload. Fields are private so the value cannot be
/// reshaped after construction.
#[derive(Debug)]
pub struct ApiError {
    kind: ErrorKind,
    message: String,
    cause: Option<BoxError>,
    occurred_at: DateTime<Utc>,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
            occurred_at: Utc::now(),
        }
    }

    pub fn with_cause(
        kind: ErrorKind,
        message: impl Into<String>,
        cause: impl Into<BoxError>,
    ) -> Self {
        Self {
            cause: Some(cause.into()),
            ..Self::new(kind, message)
        }
    }

    /// Missing entity (404).
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Authentication mismatch (400).
    ///
    /// The message is vague on purpose: it must not reveal whether the
    /// mail or the password was wrong.
    pub fn bad_credentials() -> Self {
        Self::new(ErrorKind::BadCredentials, "Incorrect email or password")
    }

    /// Underlying execution failure (500), cause kept for the log.
    pub fn internal(message: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        Self::with_cause(ErrorKind::Internal, message, cause)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The client-safe message.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// The underlying failure, if any. Log-only.
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}

/// Result type for data-access operations.
pub type Result<T> = std::result::Result<T, ApiError>;
