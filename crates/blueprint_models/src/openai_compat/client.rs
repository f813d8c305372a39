//! Generic client for OpenAI-compatible APIs.

use crate::BackendConfig;
use crate::openai_compat::{ChatResponse, OpenAICompatError, conversions};
use async_trait::async_trait;
use blueprint_core::{Completion, ModelParameters};
use blueprint_error::{BackendError, ConfigError};
use blueprint_interface::CompletionBackend;
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Client for any OpenAI-compatible chat completions API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct OpenAICompatibleClient {
    client: Client,
    config: BackendConfig,
    provider_name: &'static str,
}

impl OpenAICompatibleClient {
    /// Creates a new OpenAI-compatible client.
    ///
    /// Never fails: configuration problems are reported per call through
    /// [`CompletionBackend::ensure_configured`].
    #[instrument(skip(config), fields(provider = provider_name, model = %config.model()))]
    pub fn new(config: BackendConfig, provider_name: &'static str) -> Self {
        debug!(
            provider = provider_name,
            url = %config.chat_completions_url(),
            "Created OpenAI-compatible client"
        );

        Self {
            client: Client::new(),
            config,
            provider_name,
        }
    }

    /// Sends a single-turn chat completion request.
    ///
    /// # Errors
    ///
    /// Returns an error if the client is not configured, the request fails
    /// or times out, the API answers with a non-success status, or the
    /// response envelope cannot be decoded.
    #[instrument(
        skip(self, prompt, parameters),
        fields(provider = self.provider_name, model = %self.config.model(), prompt_len = prompt.len())
    )]
    pub async fn chat(
        &self,
        prompt: &str,
        parameters: &ModelParameters,
    ) -> Result<Completion, OpenAICompatError> {
        let api_key = self
            .config
            .api_key()
            .as_deref()
            .ok_or_else(|| OpenAICompatError::NotConfigured("API key is not set".to_string()))?;

        let chat_request = conversions::to_chat_request(prompt, self.config.model(), parameters)?;

        debug!(
            provider = self.provider_name,
            max_tokens = *parameters.max_tokens(),
            temperature = *parameters.temperature(),
            timeout_ms = *parameters.timeout_ms(),
            "Sending request"
        );

        let response = self
            .client
            .post(self.config.chat_completions_url())
            .bearer_auth(api_key)
            .timeout(parameters.timeout())
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                error!(provider = self.provider_name, error = ?e, "HTTP request failed");
                if e.is_timeout() {
                    OpenAICompatError::Timeout(*parameters.timeout_ms())
                } else {
                    OpenAICompatError::Http(format!("Request failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(
                provider = self.provider_name,
                status = %status,
                error = %error_text,
                "API error"
            );

            return Err(OpenAICompatError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(provider = self.provider_name, error = ?e, "Failed to parse response");
            if e.is_timeout() {
                OpenAICompatError::Timeout(*parameters.timeout_ms())
            } else {
                OpenAICompatError::ResponseParsing(format!("Failed to parse JSON: {}", e))
            }
        })?;

        debug!(
            provider = self.provider_name,
            choices = chat_response.choices.len(),
            "Received response"
        );

        conversions::from_chat_response(&chat_response)
    }
}

#[async_trait]
impl CompletionBackend for OpenAICompatibleClient {
    fn provider_name(&self) -> &str {
        self.provider_name
    }

    fn ensure_configured(&self) -> Result<(), ConfigError> {
        self.config.validate()
    }

    async fn complete(
        &self,
        prompt: &str,
        parameters: &ModelParameters,
    ) -> Result<Completion, BackendError> {
        self.chat(prompt, parameters).await.map_err(BackendError::from)
    }
}
