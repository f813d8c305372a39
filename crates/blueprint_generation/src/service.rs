//! The structured generation service.

use crate::{
    GenerationRequest, OutputSchema, assemble_prompt, collect_text, extract_candidate, validate,
};
use blueprint_core::MAX_TEMPERATURE;
use blueprint_error::{BackendError, ConfigError, GenerationResult, ParseError, ValidationError};
use blueprint_interface::CompletionBackend;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// Turns an instruction plus an [`OutputSchema`] into a validated value.
///
/// Stateless apart from the injected backend handle; concurrent calls never
/// interact. No retries are performed here.
#[derive(Debug, Clone)]
pub struct StructuredGenerator<B> {
    backend: B,
}

impl<B: CompletionBackend> StructuredGenerator<B> {
    /// Creates a generator over `backend`.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Generates a value that satisfies `request.schema()`.
    ///
    /// # Errors
    ///
    /// - `Config` if the backend is not configured or the temperature is
    ///   outside `0.0..=2.0` (no network call is made)
    /// - `Backend` on transport failure, non-success status or timeout
    /// - `Parse` if no valid JSON object can be extracted from the reply
    /// - `Validation` if the JSON does not satisfy the schema
    pub async fn generate_value(&self, request: &GenerationRequest) -> GenerationResult<Value> {
        self.generate_with_text(request).await.map(|(value, _)| value)
    }

    /// Generates a value and deserializes it into `T`.
    ///
    /// A value that passes schema validation but does not deserialize into
    /// `T` is reported as a validation failure.
    pub async fn generate<T: DeserializeOwned>(
        &self,
        request: &GenerationRequest,
    ) -> GenerationResult<T> {
        let (value, text) = self.generate_with_text(request).await?;
        serde_json::from_value(value).map_err(|e| {
            warn!(error = %e, "Validated value does not match the target type");
            ValidationError::new("$", format!("Cannot deserialize into target type: {}", e))
                .with_raw_text(text)
                .into()
        })
    }

    #[instrument(
        skip(self, request),
        fields(
            provider = self.backend.provider_name(),
            strict = *request.strict(),
            timeout_ms = *request.parameters().timeout_ms()
        )
    )]
    async fn generate_with_text(
        &self,
        request: &GenerationRequest,
    ) -> GenerationResult<(Value, String)> {
        self.backend.ensure_configured().inspect_err(|e| {
            warn!(error = %e, "Backend is not configured");
        })?;

        let temperature = *request.parameters().temperature();
        if !request.parameters().temperature_in_range() {
            warn!(temperature, "Temperature out of range");
            return Err(ConfigError::setting(
                "temperature",
                format!("Temperature {} is outside 0.0..={}", temperature, MAX_TEMPERATURE),
            )
            .into());
        }

        let prompt = assemble_prompt(request.instruction(), request.schema(), *request.strict());
        debug!(prompt_len = prompt.len(), "Assembled prompt");

        let timeout_ms = *request.parameters().timeout_ms();
        let completion = match tokio::time::timeout(
            request.parameters().timeout(),
            self.backend.complete(&prompt, request.parameters()),
        )
        .await
        {
            Ok(Ok(completion)) => completion,
            Ok(Err(e)) => {
                warn!(error = %e, "Backend call failed");
                return Err(e.into());
            }
            Err(_) => {
                warn!(timeout_ms, "Backend call timed out");
                return Err(BackendError::timeout(timeout_ms).into());
            }
        };

        if let Some(usage) = completion.usage() {
            debug!(
                prompt_tokens = *usage.prompt_tokens(),
                completion_tokens = *usage.completion_tokens(),
                total_tokens = *usage.total_tokens(),
                "Token usage"
            );
        }

        let text = collect_text(&completion);
        debug!(reply_len = text.len(), reply = %text, "Received reply");

        let value = interpret_reply(&text, request.schema())?;
        debug!("Reply validated");
        Ok((value, text))
    }
}

/// Extracts, parses and validates a raw reply.
///
/// # Examples
///
/// ```
/// use blueprint_generation::{Field, OutputSchema, interpret_reply};
/// use serde_json::json;
///
/// let schema = OutputSchema::new(vec![Field::number("a")]);
/// let value = interpret_reply("```json\n{\"a\":1}\n```", &schema).unwrap();
/// assert_eq!(value, json!({ "a": 1 }));
/// ```
pub fn interpret_reply(text: &str, schema: &OutputSchema) -> GenerationResult<Value> {
    let candidate = extract_candidate(text).map_err(|e| e.with_raw_text(text))?;

    let parsed: Value = serde_json::from_str(candidate).map_err(|e| {
        ParseError::new(format!("Failed to parse reply as JSON: {}", e)).with_raw_text(text)
    })?;

    validate(&parsed, schema).map_err(|e| e.with_raw_text(text).into())
}
