//! Structured generation error taxonomy.

use crate::{BackendError, ConfigError, ParseError, ValidationError};

/// The four ways a structured generation call can fail.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::From, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Backend credentials or endpoint missing/malformed
    Config(ConfigError),
    /// Network failure, non-success status or timeout
    Backend(BackendError),
    /// Reply was not valid JSON after extraction
    Parse(ParseError),
    /// Reply was valid JSON but violated the output schema
    Validation(ValidationError),
}

impl GenerationErrorKind {
    /// Short machine-readable label for the kind.
    pub fn label(&self) -> &'static str {
        match self {
            GenerationErrorKind::Config(_) => "config",
            GenerationErrorKind::Backend(_) => "backend",
            GenerationErrorKind::Parse(_) => "parse",
            GenerationErrorKind::Validation(_) => "validation",
        }
    }
}

/// Error returned by structured generation.
///
/// # Examples
///
/// ```
/// use blueprint_error::{ConfigError, GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::from(ConfigError::new("API key not set"));
/// assert!(matches!(err.kind(), GenerationErrorKind::Config(_)));
/// assert_eq!(err.raw_text(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationError(Box<GenerationErrorKind>);

impl GenerationError {
    /// Create a new error from a kind.
    pub fn new(kind: GenerationErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GenerationErrorKind {
        &self.0
    }

    /// Human-readable message without location information.
    pub fn message(&self) -> &str {
        match self.kind() {
            GenerationErrorKind::Config(e) => &e.message,
            GenerationErrorKind::Backend(e) => &e.message,
            GenerationErrorKind::Parse(e) => &e.message,
            GenerationErrorKind::Validation(e) => &e.message,
        }
    }

    /// Raw backend text for parse and validation failures.
    pub fn raw_text(&self) -> Option<&str> {
        match self.kind() {
            GenerationErrorKind::Parse(e) => e.raw_text.as_deref(),
            GenerationErrorKind::Validation(e) => e.raw_text.as_deref(),
            _ => None,
        }
    }

    /// True if the backend produced output that broke the format contract.
    pub fn is_format_violation(&self) -> bool {
        matches!(
            self.kind(),
            GenerationErrorKind::Parse(_) | GenerationErrorKind::Validation(_)
        )
    }
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Generation Error: {}", self.0)
    }
}

impl std::error::Error for GenerationError {}

impl<T> From<T> for GenerationError
where
    T: Into<GenerationErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Trait for errors that support retry logic.
///
/// # Examples
///
/// ```
/// use blueprint_error::{BackendError, GenerationError, RetryableError};
///
/// let err = GenerationError::from(BackendError::status(503, "Service unavailable"));
/// assert!(err.is_retryable());
/// ```
pub trait RetryableError {
    /// Returns true if this error may succeed when the same call is repeated.
    fn is_retryable(&self) -> bool;
}

impl RetryableError for BackendError {
    fn is_retryable(&self) -> bool {
        match self.status {
            Some(status) => matches!(status, 408 | 429 | 500 | 502 | 503 | 504),
            None => true,
        }
    }
}

impl RetryableError for GenerationError {
    fn is_retryable(&self) -> bool {
        match self.kind() {
            GenerationErrorKind::Backend(e) => e.is_retryable(),
            _ => false,
        }
    }
}

/// Result type for structured generation.
pub type GenerationResult<T> = std::result::Result<T, GenerationError>;
