//! Error types for the Blueprint structured generation library.
//!
//! Every error records the source location where it was constructed.

mod backend;
mod config;
mod generation;
mod parse;
mod validation;

pub use backend::BackendError;
pub use config::ConfigError;
pub use generation::{GenerationError, GenerationErrorKind, GenerationResult, RetryableError};
pub use parse::ParseError;
pub use validation::ValidationError;
