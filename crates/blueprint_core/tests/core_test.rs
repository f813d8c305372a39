//! Tests for core data types.

use blueprint_core::{
    Completion, ContentFragment, LogFormat, MAX_TEMPERATURE, ModelParameters, TokenUsage,
    init_tracing,
};

#[test]
fn test_default_parameters() {
    let params = ModelParameters::default();
    assert_eq!(*params.temperature(), 0.2);
    assert_eq!(*params.max_tokens(), 4000);
    assert_eq!(*params.timeout_ms(), 60_000);
}

#[test]
fn test_parameters_deserialize_with_defaults() {
    let params: ModelParameters =
        serde_json::from_str(r#"{"temperature": 0.0}"#).expect("Valid parameters");
    assert_eq!(*params.temperature(), 0.0);
    assert_eq!(*params.max_tokens(), 4000);
    assert_eq!(params.timeout().as_millis(), 60_000);
}

#[test]
fn test_temperature_range() {
    assert!(ModelParameters::default().temperature_in_range());
    assert!(ModelParameters::new(0.0, 10, 10).temperature_in_range());
    assert!(ModelParameters::new(MAX_TEMPERATURE, 10, 10).temperature_in_range());
    assert!(!ModelParameters::new(2.5, 10, 10).temperature_in_range());
    assert!(!ModelParameters::new(-0.1, 10, 10).temperature_in_range());
    assert!(!ModelParameters::new(f32::NAN, 10, 10).temperature_in_range());
}

#[test]
fn test_fragment_text_access() {
    let completion = Completion::new(vec![
        ContentFragment::Text("first".to_string()),
        ContentFragment::Other {
            kind: "image_url".to_string(),
        },
    ]);

    let texts: Vec<&str> = completion
        .fragments()
        .iter()
        .filter_map(ContentFragment::as_text)
        .collect();
    assert_eq!(texts, vec!["first"]);
}

#[test]
fn test_completion_builder() {
    let completion = Completion::builder()
        .fragments(vec![ContentFragment::Text("hi".to_string())])
        .model(Some("test-model".to_string()))
        .usage(TokenUsage::from_reported(Some(10), Some(2), Some(12)))
        .build()
        .expect("Valid completion");

    assert_eq!(completion.model().as_deref(), Some("test-model"));
    assert_eq!(completion.finish_reason(), &None);
    assert_eq!(completion.usage().map(|u| *u.total_tokens()), Some(12));
}

#[test]
fn test_token_usage_from_partial_reports() {
    let derived = TokenUsage::from_reported(Some(30), Some(12), None).expect("Both counts present");
    assert_eq!(*derived.prompt_tokens(), 30);
    assert_eq!(*derived.completion_tokens(), 12);
    assert_eq!(*derived.total_tokens(), 42);

    let reported = TokenUsage::from_reported(Some(30), Some(12), Some(50)).expect("All present");
    assert_eq!(*reported.total_tokens(), 50);

    assert!(TokenUsage::from_reported(Some(30), None, Some(30)).is_none());
    assert!(TokenUsage::from_reported(None, None, None).is_none());
}

#[test]
fn test_log_format_from_name() {
    assert_eq!(LogFormat::from_name("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::from_name("pretty"), LogFormat::Pretty);
    assert_eq!(LogFormat::from_name("anything"), LogFormat::Pretty);
}

#[test]
fn test_init_tracing_twice() {
    // First call may fail if another test installed a subscriber; the second must fail.
    let _ = init_tracing("debug", LogFormat::Pretty);
    assert!(init_tracing("debug", LogFormat::Json).is_err());
}
