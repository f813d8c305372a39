//! Tests for the generation error taxonomy.

use blueprint_error::{
    BackendError, ConfigError, GenerationError, GenerationErrorKind, ParseError, RetryableError,
    ValidationError,
};

#[test]
fn test_kind_labels() {
    let cases: Vec<(GenerationError, &str)> = vec![
        (ConfigError::new("missing key").into(), "config"),
        (BackendError::new("refused").into(), "backend"),
        (ParseError::new("not json").into(), "parse"),
        (ValidationError::new("$.a", "missing").into(), "validation"),
    ];

    for (err, label) in cases {
        assert_eq!(err.kind().label(), label);
    }
}

#[test]
fn test_raw_text_only_for_format_violations() {
    let parse: GenerationError = ParseError::new("not json")
        .with_raw_text("I cannot help with that.")
        .into();
    assert_eq!(parse.raw_text(), Some("I cannot help with that."));
    assert!(parse.is_format_violation());

    let validation: GenerationError = ValidationError::new("$.a", "missing required field")
        .with_raw_text(r#"{"b": 1}"#)
        .into();
    assert_eq!(validation.raw_text(), Some(r#"{"b": 1}"#));

    let backend: GenerationError = BackendError::timeout(50).into();
    assert_eq!(backend.raw_text(), None);
    assert!(!backend.is_format_violation());
}

#[test]
fn test_display_never_contains_raw_text() {
    let err: GenerationError = ParseError::new("invalid JSON")
        .with_raw_text("secret model output")
        .into();
    let rendered = err.to_string();
    assert!(rendered.contains("invalid JSON"));
    assert!(!rendered.contains("secret model output"));
}

#[test]
fn test_retryability() {
    let timeout: GenerationError = BackendError::timeout(100).into();
    assert!(timeout.is_retryable());

    let unavailable: GenerationError = BackendError::status(503, "unavailable").into();
    assert!(unavailable.is_retryable());

    let unauthorized: GenerationError = BackendError::status(401, "unauthorized").into();
    assert!(!unauthorized.is_retryable());

    let config: GenerationError = ConfigError::new("missing key").into();
    assert!(!config.is_retryable());

    let parse: GenerationError = ParseError::new("not json").into();
    assert!(!parse.is_retryable());
}

#[test]
fn test_location_tracking() {
    let err = ConfigError::new("missing key");
    assert!(err.file.ends_with("error_test.rs"));
    assert!(err.line > 0);
}

#[test]
fn test_message_strips_location() {
    let err: GenerationError = BackendError::timeout(250).into();
    assert_eq!(err.message(), "Backend did not respond within 250 ms");
    assert!(matches!(err.kind(), GenerationErrorKind::Backend(b) if b.timed_out));
}

#[test]
fn test_config_error_names_setting() {
    let err = ConfigError::setting("base_url", "Unsupported backend URL scheme 'ftp'");
    assert_eq!(err.setting, Some("base_url"));
    assert!(err.to_string().starts_with("Configuration Error [base_url]: Unsupported"));

    let plain = ConfigError::new("missing key");
    assert!(plain.setting.is_none());
    assert!(plain.to_string().starts_with("Configuration Error: missing key"));

    let wrapped: GenerationError = err.into();
    assert!(!wrapped.is_retryable());
    assert!(matches!(wrapped.kind(), GenerationErrorKind::Config(c) if c.setting == Some("base_url")));
}
