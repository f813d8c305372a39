//! Core data types for the Blueprint structured generation library.
//!
//! This crate provides the backend-neutral types shared by every other
//! Blueprint crate.

mod completion;
mod observability;
mod parameters;
mod token_usage;

pub use completion::{Completion, CompletionBuilder, ContentFragment};
pub use observability::{LogFormat, init_tracing};
pub use parameters::{
    DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT_MS, MAX_TEMPERATURE, ModelParameters,
    ModelParametersBuilder,
};
pub use token_usage::TokenUsage;
