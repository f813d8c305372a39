//! Planner settings.

use crate::RetryPolicy;
use blueprint_core::ModelParameters;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Parameters and retry behaviour shared by every planning call.
#[derive(
    Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct PlannerSettings {
    /// Sampling and deadline parameters
    parameters: ModelParameters,
    /// Retry behaviour
    retry: RetryPolicy,
}

impl PlannerSettings {
    /// Creates settings from parts.
    pub fn new(parameters: ModelParameters, retry: RetryPolicy) -> Self {
        Self { parameters, retry }
    }

    /// Returns a builder for constructing PlannerSettings.
    pub fn builder() -> PlannerSettingsBuilder {
        PlannerSettingsBuilder::default()
    }
}
