//! Caller-side retry policy for structured generation.

use blueprint_error::{GenerationResult, RetryableError};
use blueprint_generation::GenerationRequest;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, instrument, warn};

/// How failed generation calls are repeated.
///
/// - backend failures with a retryable status are repeated with exponential
///   backoff until `max_attempts` calls have been made in total;
/// - parse and validation failures are repeated at most once, with the
///   stricter formatting rule appended, and only while calls remain;
/// - configuration failures are returned immediately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct RetryPolicy {
    /// Maximum calls, including the first
    max_attempts: u32,
    /// Delay before the first backend retry
    initial_backoff_ms: u64,
    /// Upper bound on the delay
    max_backoff_ms: u64,
    /// Delay growth factor
    backoff_multiplier: f64,
    /// Repeat once with strict instructions after a format violation
    strict_retry: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff_ms: 500,
            max_backoff_ms: 8_000,
            backoff_multiplier: 2.0,
            strict_retry: true,
        }
    }
}

impl RetryPolicy {
    /// Returns a builder for constructing a RetryPolicy.
    pub fn builder() -> RetryPolicyBuilder {
        RetryPolicyBuilder::default()
    }

    /// A policy that never retries.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            strict_retry: false,
            ..Self::default()
        }
    }

    /// Runs `operation` under this policy.
    ///
    /// `operation` receives the request for each attempt; after a format
    /// violation it receives the strict variant.
    #[instrument(skip(self, request, operation), fields(max_attempts = self.max_attempts))]
    pub async fn run<F, Fut, T>(
        &self,
        request: GenerationRequest,
        mut operation: F,
    ) -> GenerationResult<T>
    where
        F: FnMut(GenerationRequest) -> Fut,
        Fut: std::future::Future<Output = GenerationResult<T>>,
    {
        let mut current = request;
        let mut attempt = 0u32;
        let mut format_retried = false;
        let mut backoff = Duration::from_millis(self.initial_backoff_ms);
        let max_backoff = Duration::from_millis(self.max_backoff_ms);

        loop {
            attempt += 1;
            debug!(attempt, strict = *current.strict(), "Executing generation");

            let err = match operation(current.clone()).await {
                Ok(value) => {
                    if attempt > 1 {
                        debug!(attempt, "Generation succeeded after retry");
                    }
                    return Ok(value);
                }
                Err(err) => err,
            };

            if err.is_format_violation() {
                if format_retried || !self.strict_retry || attempt >= self.max_attempts {
                    warn!(kind = err.kind().label(), attempt, "Reply still malformed, giving up");
                    return Err(err);
                }
                warn!(kind = err.kind().label(), "Malformed reply, retrying with strict instructions");
                format_retried = true;
                current = current.into_strict();
                continue;
            }

            if !err.is_retryable() {
                warn!(kind = err.kind().label(), "Error is not retryable, failing immediately");
                return Err(err);
            }

            if attempt >= self.max_attempts {
                warn!(attempt, "All retry attempts exhausted");
                return Err(err);
            }

            debug!(backoff_ms = backoff.as_millis() as u64, "Retrying after backend failure");
            sleep(backoff).await;
            backoff = Duration::try_from_secs_f64(backoff.as_secs_f64() * self.backoff_multiplier)
                .map_or(max_backoff, |next| next.min(max_backoff));
        }
    }
}
