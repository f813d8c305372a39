//! Schema validation error types.

/// Parsed JSON that does not satisfy the output schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error message
    pub message: String,
    /// JSON path of the first violation (e.g. `$.tables[0].name`)
    pub path: String,
    /// Raw backend text, kept for diagnostics only
    pub raw_text: Option<String>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError at the given JSON path.
    ///
    /// # Examples
    ///
    /// ```
    /// use blueprint_error::ValidationError;
    ///
    /// let err = ValidationError::new("$.a", "missing required field");
    /// assert!(err.to_string().contains("$.a"));
    /// ```
    #[track_caller]
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            path: path.into(),
            raw_text: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Attach the raw backend text.
    pub fn with_raw_text(mut self, raw_text: impl Into<String>) -> Self {
        self.raw_text = Some(raw_text.into());
        self
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Validation Error: {}: {} at line {} in {}",
            self.path, self.message, self.line, self.file
        )
    }
}

impl std::error::Error for ValidationError {}
