//! Server error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use blueprint_error::{GenerationError, GenerationErrorKind};
use serde_json::json;
use tracing::{debug, error};

/// Kinds of server startup errors.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ServerErrorKind {
    /// Settings could not be loaded or are invalid
    #[display("Configuration error: {}", _0)]
    Configuration(String),
    /// Listener could not be bound
    #[display("Failed to bind {}: {}", addr, message)]
    Bind {
        /// Requested address
        addr: String,
        /// Underlying error
        message: String,
    },
    /// The HTTP server stopped with an error
    #[display("Server error: {}", _0)]
    Serve(String),
}

/// Server error with location tracking.
///
/// # Examples
///
/// ```
/// use blueprint_server::{ServerError, ServerErrorKind};
///
/// let err = ServerError::new(ServerErrorKind::Configuration("port out of range".into()));
/// assert!(err.to_string().contains("port out of range"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Server Error: {} at line {} in {}", kind, line, file)]
pub struct ServerError {
    /// The kind of error that occurred
    pub kind: ServerErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ServerError {
    /// Create a new server error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ServerErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Failure of a single API request.
#[derive(Debug, derive_more::Display)]
pub enum ApiError {
    /// Body was not valid JSON for the endpoint
    #[display("Invalid request body: {}", _0)]
    InvalidBody(String),
    /// A required input was missing or empty
    #[display("{} is required", _0)]
    MissingInput(&'static str),
    /// Generation failed; the label names the artefact
    #[display("Failed to generate {}", artefact)]
    Generation {
        /// What was being generated
        artefact: &'static str,
        /// Underlying failure
        source: GenerationError,
    },
}

impl ApiError {
    /// HTTP status for this failure.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) | ApiError::MissingInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Generation { source, .. } => match source.kind() {
                GenerationErrorKind::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
                GenerationErrorKind::Backend(_)
                | GenerationErrorKind::Parse(_)
                | GenerationErrorKind::Validation(_) => StatusCode::BAD_GATEWAY,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::Generation { artefact, source } = &self {
            error!(artefact, kind = source.kind().label(), error = %source, "Generation failed");
            if let Some(raw) = source.raw_text() {
                debug!(artefact, raw_text = %raw, "Unusable model reply");
            }
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
