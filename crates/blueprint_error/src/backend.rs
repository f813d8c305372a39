//! Backend error types.

/// Backend error with source location.
///
/// Covers network failures, non-success HTTP statuses, undecodable reply
/// envelopes and exceeded timeouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendError {
    /// Error message
    pub message: String,
    /// HTTP status returned by the backend, if one was received
    pub status: Option<u16>,
    /// Whether the request was abandoned because the deadline passed
    pub timed_out: bool,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl BackendError {
    /// Create a new BackendError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use blueprint_error::BackendError;
    ///
    /// let err = BackendError::new("Connection refused");
    /// assert!(err.message.contains("refused"));
    /// assert!(!err.timed_out);
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            status: None,
            timed_out: false,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create a BackendError for a non-success HTTP status.
    #[track_caller]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            status: Some(status),
            timed_out: false,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create a BackendError for a request that exceeded its deadline.
    #[track_caller]
    pub fn timeout(timeout_ms: u64) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: format!("Backend did not respond within {} ms", timeout_ms),
            status: None,
            timed_out: true,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(
                f,
                "Backend Error: HTTP {}: {} at line {} in {}",
                status, self.message, self.line, self.file
            ),
            None => write!(
                f,
                "Backend Error: {} at line {} in {}",
                self.message, self.line, self.file
            ),
        }
    }
}

impl std::error::Error for BackendError {}
