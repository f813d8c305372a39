//! Configuration error types.

/// Configuration error with source location.
///
/// Reports an unusable backend setup: no API key in any layer
/// (`BLUEPRINT__BACKEND__API_KEY`, `BLUEPRINT_API_KEY`, `NVIDIA_NIM_API_KEY`),
/// a base URL that is not `http`/`https`, an empty model name, or sampling
/// parameters out of range. Raised before any request leaves the process and
/// never retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Name of the offending backend setting, when one is to blame
    pub setting: Option<&'static str>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use blueprint_error::ConfigError;
    ///
    /// let err = ConfigError::new("Backend is not configured");
    /// assert!(err.setting.is_none());
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            setting: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create a ConfigError blaming one backend setting.
    ///
    /// # Examples
    ///
    /// ```
    /// use blueprint_error::ConfigError;
    ///
    /// let err = ConfigError::setting("api_key", "Backend API key is not set");
    /// assert_eq!(err.setting, Some("api_key"));
    /// assert!(err.to_string().contains("[api_key]"));
    /// ```
    #[track_caller]
    pub fn setting(setting: &'static str, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            setting: Some(setting),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.setting {
            Some(setting) => write!(
                f,
                "Configuration Error [{}]: {} at line {} in {}",
                setting, self.message, self.line, self.file
            ),
            None => write!(
                f,
                "Configuration Error: {} at line {} in {}",
                self.message, self.line, self.file
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
