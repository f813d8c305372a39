//! Sampling and deadline parameters for a single backend call.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default sampling temperature, kept low to favour consistent structured output.
pub const DEFAULT_TEMPERATURE: f32 = 0.2;
/// Highest temperature OpenAI-compatible backends accept.
pub const MAX_TEMPERATURE: f32 = 2.0;
/// Default completion token limit.
pub const DEFAULT_MAX_TOKENS: u32 = 4000;
/// Default request deadline in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;

/// Model parameters applied to one completion request.
///
/// # Examples
///
/// ```
/// use blueprint_core::ModelParameters;
///
/// let params = ModelParameters::builder()
///     .temperature(0.0f32)
///     .timeout_ms(5_000u64)
///     .build()
///     .unwrap();
///
/// assert_eq!(*params.max_tokens(), 4000);
/// assert_eq!(params.timeout().as_secs(), 5);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ModelParameters {
    /// Sampling temperature
    #[builder(default = "DEFAULT_TEMPERATURE")]
    #[serde(default = "default_temperature")]
    temperature: f32,
    /// Maximum tokens to generate
    #[builder(default = "DEFAULT_MAX_TOKENS")]
    #[serde(default = "default_max_tokens")]
    max_tokens: u32,
    /// Hard deadline for the backend round-trip
    #[builder(default = "DEFAULT_TIMEOUT_MS")]
    #[serde(default = "default_timeout_ms")]
    timeout_ms: u64,
}

impl ModelParameters {
    /// Creates parameters from explicit values.
    pub fn new(temperature: f32, max_tokens: u32, timeout_ms: u64) -> Self {
        Self {
            temperature,
            max_tokens,
            timeout_ms,
        }
    }

    /// Returns a builder for constructing ModelParameters.
    pub fn builder() -> ModelParametersBuilder {
        ModelParametersBuilder::default()
    }

    /// Whether the temperature lies in `0.0..=MAX_TEMPERATURE`. NaN does not.
    pub fn temperature_in_range(&self) -> bool {
        (0.0..=MAX_TEMPERATURE).contains(&self.temperature)
    }

    /// The deadline as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPERATURE, DEFAULT_MAX_TOKENS, DEFAULT_TIMEOUT_MS)
    }
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}
