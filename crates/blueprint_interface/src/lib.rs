//! Trait definitions for the Blueprint structured generation library.
//!
//! The text-generation backend is an opaque capability exposing a single
//! "complete this prompt" operation. Connection pooling, authentication and
//! transport retries belong to implementors.

use async_trait::async_trait;
use blueprint_core::{Completion, ModelParameters};
use blueprint_error::{BackendError, ConfigError};
use std::sync::Arc;

/// A text-generation backend.
///
/// Implementations must be cancel-safe: dropping the future returned by
/// [`CompletionBackend::complete`] aborts the in-flight request.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Name of the provider (for logging/tracing).
    fn provider_name(&self) -> &str;

    /// Verify credentials and endpoint without touching the network.
    fn ensure_configured(&self) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Send `prompt` and return the reply fragments.
    async fn complete(
        &self,
        prompt: &str,
        parameters: &ModelParameters,
    ) -> Result<Completion, BackendError>;
}

#[async_trait]
impl<B> CompletionBackend for Arc<B>
where
    B: CompletionBackend + ?Sized,
{
    fn provider_name(&self) -> &str {
        (**self).provider_name()
    }

    fn ensure_configured(&self) -> Result<(), ConfigError> {
        (**self).ensure_configured()
    }

    async fn complete(
        &self,
        prompt: &str,
        parameters: &ModelParameters,
    ) -> Result<Completion, BackendError> {
        (**self).complete(prompt, parameters).await
    }
}
