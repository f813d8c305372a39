//! Connection settings for an OpenAI-compatible chat-completion backend.

use blueprint_core::{MAX_TEMPERATURE, ModelParameters};
use blueprint_error::ConfigError;
use derive_getters::Getters;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Default endpoint (NVIDIA NIM, OpenAI-compatible).
pub const DEFAULT_BASE_URL: &str = "https://integrate.api.nvidia.com/v1";
/// Default model identifier.
pub const DEFAULT_MODEL: &str = "nvidia/llama-3.3-nemotron-super-49b-v1";

/// Backend connection configuration.
///
/// Built once at process start and read-only afterwards. A missing API key
/// does not prevent construction; it is reported by [`BackendConfig::validate`]
/// on every generation call instead.
#[derive(Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct BackendConfig {
    /// Base URL of the API (e.g., "https://integrate.api.nvidia.com/v1")
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    #[serde(default = "default_base_url")]
    base_url: String,
    /// Bearer credential
    #[builder(default)]
    #[serde(default)]
    api_key: Option<String>,
    /// Model identifier
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    #[serde(default = "default_model")]
    model: String,
    /// Default sampling and deadline parameters
    #[builder(default)]
    #[serde(default)]
    parameters: ModelParameters,
}

impl BackendConfig {
    /// Returns a builder for constructing a BackendConfig.
    pub fn builder() -> BackendConfigBuilder {
        BackendConfigBuilder::default()
    }

    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `BLUEPRINT_BACKEND_URL` (default: [`DEFAULT_BASE_URL`])
    /// - `BLUEPRINT_API_KEY`, falling back to `NVIDIA_NIM_API_KEY` (optional)
    /// - `BLUEPRINT_MODEL` (default: [`DEFAULT_MODEL`])
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create config from the same variables as [`BackendConfig::from_env`],
    /// resolved through `lookup`.
    ///
    /// # Examples
    ///
    /// ```
    /// use blueprint_models::BackendConfig;
    ///
    /// let config = BackendConfig::from_lookup(|name| {
    ///     (name == "NVIDIA_NIM_API_KEY").then(|| "nv-key".to_string())
    /// });
    /// assert_eq!(config.api_key().as_deref(), Some("nv-key"));
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("BLUEPRINT_BACKEND_URL").unwrap_or_else(default_base_url);
        let api_key = api_key_from_lookup(&lookup);
        let model = lookup("BLUEPRINT_MODEL").unwrap_or_else(default_model);

        if api_key.is_none() {
            warn!("No backend API key set; generation requests will fail until one is configured");
        }
        debug!(base_url = %base_url, model = %model, "Loaded backend configuration from environment");

        Self {
            base_url,
            api_key,
            model,
            parameters: ModelParameters::default(),
        }
    }

    /// Returns a copy with the API key replaced.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Check that the credential, endpoint, model and default parameters are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => {}
            _ => return Err(ConfigError::setting("api_key", "Backend API key is not set")),
        }

        let url = Url::parse(&self.base_url).map_err(|e| {
            ConfigError::setting(
                "base_url",
                format!("Invalid backend URL '{}': {}", self.base_url, e),
            )
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::setting(
                "base_url",
                format!("Unsupported backend URL scheme '{}'", url.scheme()),
            ));
        }

        if self.model.trim().is_empty() {
            return Err(ConfigError::setting("model", "Backend model is not set"));
        }

        check_temperature(&self.parameters)
    }

    /// Full URL of the chat completions endpoint.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            model: default_model(),
            parameters: ModelParameters::default(),
        }
    }
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("parameters", &self.parameters)
            .finish()
    }
}

/// `BLUEPRINT_API_KEY`, else `NVIDIA_NIM_API_KEY`; blank values count as unset.
pub fn api_key_from_lookup<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    ["BLUEPRINT_API_KEY", "NVIDIA_NIM_API_KEY"]
        .into_iter()
        .filter_map(|name| lookup(name))
        .find(|key| !key.trim().is_empty())
}

fn check_temperature(parameters: &ModelParameters) -> Result<(), ConfigError> {
    if parameters.temperature_in_range() {
        Ok(())
    } else {
        Err(ConfigError::setting(
            "temperature",
            format!(
                "Temperature {} is outside 0.0..={}",
                parameters.temperature(),
                MAX_TEMPERATURE
            ),
        ))
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}
