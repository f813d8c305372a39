//! Project-planning use-cases for Blueprint.
//!
//! Each use-case pairs a prompt template with a fixed output schema and
//! delegates to [`blueprint_generation::StructuredGenerator`], wrapped in a
//! caller-side [`RetryPolicy`].

mod outputs;
mod planner;
mod prompts;
mod retry;
mod settings;

pub use outputs::*;
pub use planner::ProjectPlanner;
pub use prompts::{app_structure_prompt, feature_tree_prompt, schema_prompt, tech_stack_prompt};
pub use retry::{RetryPolicy, RetryPolicyBuilder};
pub use settings::{PlannerSettings, PlannerSettingsBuilder};
