//! Parse error types.

/// The backend reply did not contain syntactically valid JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Error message
    pub message: String,
    /// Raw backend text, kept for diagnostics only
    pub raw_text: Option<String>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ParseError {
    /// Create a new ParseError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use blueprint_error::ParseError;
    ///
    /// let err = ParseError::new("no JSON object found").with_raw_text("I cannot help");
    /// assert_eq!(err.raw_text.as_deref(), Some("I cannot help"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
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

// Display omits raw_text.
impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Parse Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for ParseError {}
