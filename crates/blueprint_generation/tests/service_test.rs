//! Tests for the structured generation service using stub backends.

use async_trait::async_trait;
use blueprint_core::{Completion, ContentFragment, ModelParameters};
use blueprint_error::{BackendError, ConfigError, GenerationErrorKind};
use blueprint_generation::{Field, FieldKind, GenerationRequest, OutputSchema, StructuredGenerator};
use blueprint_interface::CompletionBackend;
use serde::Deserialize;
use serde_json::json;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Replies with a fixed text and records the prompts it receives.
struct CannedBackend {
    reply: Result<Completion, BackendError>,
    prompts: Mutex<Vec<String>>,
}

impl CannedBackend {
    fn text(reply: &str) -> Self {
        Self {
            reply: Ok(Completion::text(reply)),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn failing(error: BackendError) -> Self {
        Self {
            reply: Err(error),
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CompletionBackend for CannedBackend {
    fn provider_name(&self) -> &str {
        "canned"
    }

    async fn complete(
        &self,
        prompt: &str,
        _parameters: &ModelParameters,
    ) -> Result<Completion, BackendError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone()
    }
}

/// Never answers; flips a flag when its future is dropped.
struct HangingBackend {
    dropped: Arc<AtomicBool>,
}

struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl CompletionBackend for HangingBackend {
    fn provider_name(&self) -> &str {
        "hanging"
    }

    async fn complete(
        &self,
        _prompt: &str,
        _parameters: &ModelParameters,
    ) -> Result<Completion, BackendError> {
        let _guard = DropFlag(self.dropped.clone());
        std::future::pending().await
    }
}

/// Reports a configuration problem and counts calls.
#[derive(Default)]
struct UnconfiguredBackend {
    calls: AtomicUsize,
}

#[async_trait]
impl CompletionBackend for UnconfiguredBackend {
    fn provider_name(&self) -> &str {
        "unconfigured"
    }

    fn ensure_configured(&self) -> Result<(), ConfigError> {
        Err(ConfigError::new("API key not set"))
    }

    async fn complete(
        &self,
        _prompt: &str,
        _parameters: &ModelParameters,
    ) -> Result<Completion, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Completion::text("{}"))
    }
}

fn ab_schema() -> OutputSchema {
    OutputSchema::new(vec![Field::number("a"), Field::number("b")])
}

fn request(schema: OutputSchema) -> GenerationRequest {
    GenerationRequest::new("Return two numbers.", schema, ModelParameters::default())
}

#[tokio::test]
async fn test_fenced_reply() {
    let schema = OutputSchema::new(vec![Field::number("a")]);
    let generator = StructuredGenerator::new(CannedBackend::text("```json\n{\"a\": 1}\n```"));

    let value = generator.generate_value(&request(schema)).await.unwrap();
    assert_eq!(value, json!({ "a": 1 }));
}

#[tokio::test]
async fn test_prose_wrapped_reply() {
    let generator =
        StructuredGenerator::new(CannedBackend::text("Here it is: {\"a\":1,\"b\":2} Enjoy."));

    let value = generator.generate_value(&request(ab_schema())).await.unwrap();
    assert_eq!(value, json!({ "a": 1, "b": 2 }));
}

#[tokio::test]
async fn test_fragments_joined_before_extraction() {
    let backend = CannedBackend {
        reply: Ok(Completion::new(vec![
            ContentFragment::Text("{\"a\": 1,".to_string()),
            ContentFragment::Other {
                kind: "image_url".to_string(),
            },
            ContentFragment::Text("\"b\": 2}".to_string()),
        ])),
        prompts: Mutex::new(Vec::new()),
    };
    let generator = StructuredGenerator::new(backend);

    let value = generator.generate_value(&request(ab_schema())).await.unwrap();
    assert_eq!(value, json!({ "a": 1, "b": 2 }));
}

#[tokio::test]
async fn test_missing_field_is_validation_error() {
    let generator = StructuredGenerator::new(CannedBackend::text("{\"a\":1}"));

    let err = generator
        .generate_value(&request(ab_schema()))
        .await
        .unwrap_err();
    match err.kind() {
        GenerationErrorKind::Validation(e) => {
            assert_eq!(e.path, "$.b");
            assert_eq!(e.raw_text.as_deref(), Some("{\"a\":1}"));
        }
        other => panic!("expected validation error, got {other}"),
    }
}

#[tokio::test]
async fn test_non_json_reply_is_parse_error() {
    let generator = StructuredGenerator::new(CannedBackend::text("I cannot help with that."));

    let err = generator
        .generate_value(&request(ab_schema()))
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), GenerationErrorKind::Parse(_)));
    assert_eq!(err.raw_text(), Some("I cannot help with that."));
}

#[tokio::test]
async fn test_malformed_json_is_parse_error() {
    let generator = StructuredGenerator::new(CannedBackend::text("{\"a\": 1,, }"));

    let err = generator
        .generate_value(&request(ab_schema()))
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), GenerationErrorKind::Parse(_)));
}

#[tokio::test]
async fn test_empty_array_reply() {
    let schema = OutputSchema::new(vec![Field::array(
        "tables",
        FieldKind::object(vec![Field::string("name")]),
    )]);
    let generator = StructuredGenerator::new(CannedBackend::text("{\"tables\": []}"));

    let value = generator.generate_value(&request(schema)).await.unwrap();
    assert_eq!(value, json!({ "tables": [] }));
}

#[tokio::test]
async fn test_identical_calls_are_independent() {
    let backend = Arc::new(CannedBackend::text("{\"a\":1,\"b\":2}"));
    let generator = StructuredGenerator::new(backend.clone());
    let req = request(ab_schema());

    let first = generator.generate_value(&req).await.unwrap();
    let second = generator.generate_value(&req).await.unwrap();

    assert_eq!(first, second);
    let prompts = backend.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 2);
    assert_eq!(prompts[0], prompts[1]);
}

#[tokio::test]
async fn test_prompt_contains_instruction_and_schema() {
    let backend = Arc::new(CannedBackend::text("{\"a\":1,\"b\":2}"));
    let generator = StructuredGenerator::new(backend.clone());

    generator
        .generate_value(&request(ab_schema()).into_strict())
        .await
        .unwrap();

    let prompts = backend.prompts.lock().unwrap();
    assert!(prompts[0].starts_with("Return two numbers."));
    assert!(prompts[0].contains("\"required\":[\"a\",\"b\"]"));
    assert!(prompts[0].contains(blueprint_generation::STRICT_RULE));
}

#[tokio::test]
async fn test_timeout_drops_backend_call() {
    let dropped = Arc::new(AtomicBool::new(false));
    let generator = StructuredGenerator::new(HangingBackend {
        dropped: dropped.clone(),
    });
    let req = GenerationRequest::new(
        "Return two numbers.",
        ab_schema(),
        ModelParameters::new(0.2, 100, 50),
    );

    let err = generator.generate_value(&req).await.unwrap_err();
    match err.kind() {
        GenerationErrorKind::Backend(e) => assert!(e.timed_out),
        other => panic!("expected backend error, got {other}"),
    }
    assert!(dropped.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_backend_error_propagates() {
    let generator =
        StructuredGenerator::new(CannedBackend::failing(BackendError::status(503, "unavailable")));

    let err = generator
        .generate_value(&request(ab_schema()))
        .await
        .unwrap_err();
    match err.kind() {
        GenerationErrorKind::Backend(e) => assert_eq!(e.status, Some(503)),
        other => panic!("expected backend error, got {other}"),
    }
}

#[tokio::test]
async fn test_config_error_makes_no_backend_call() {
    let backend = Arc::new(UnconfiguredBackend::default());
    let generator = StructuredGenerator::new(backend.clone());

    let err = generator
        .generate_value(&request(ab_schema()))
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), GenerationErrorKind::Config(_)));
    assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_out_of_range_temperature_makes_no_backend_call() {
    let backend = Arc::new(CannedBackend::text("{\"a\": 1, \"b\": 2}"));
    let generator = StructuredGenerator::new(backend.clone());

    for temperature in [2.5, -0.5] {
        let req = GenerationRequest::new(
            "Return two numbers.",
            ab_schema(),
            ModelParameters::new(temperature, 100, 1_000),
        );
        let err = generator.generate_value(&req).await.unwrap_err();
        match err.kind() {
            GenerationErrorKind::Config(e) => assert_eq!(e.setting, Some("temperature")),
            other => panic!("expected config error, got {other}"),
        }
    }
    assert!(backend.prompts.lock().unwrap().is_empty());

    let edge = GenerationRequest::new(
        "Return two numbers.",
        ab_schema(),
        ModelParameters::new(2.0, 100, 1_000),
    );
    assert_eq!(
        generator.generate_value(&edge).await.unwrap(),
        json!({ "a": 1, "b": 2 })
    );
}

#[derive(Debug, Deserialize, PartialEq)]
struct Pair {
    a: i64,
    b: i64,
}

#[tokio::test]
async fn test_typed_generation() {
    let generator = StructuredGenerator::new(CannedBackend::text("{\"a\":1,\"b\":2}"));

    let pair: Pair = generator.generate(&request(ab_schema())).await.unwrap();
    assert_eq!(pair, Pair { a: 1, b: 2 });
}

#[tokio::test]
async fn test_typed_generation_mismatch_is_validation_error() {
    let generator = StructuredGenerator::new(CannedBackend::text("{\"a\":1.5,\"b\":2}"));

    let err = generator
        .generate::<Pair>(&request(ab_schema()))
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), GenerationErrorKind::Validation(_)));
}
