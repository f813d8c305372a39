//! Schema-validated structured output generation.
//!
//! A [`StructuredGenerator`] sends an instruction plus machine-readable
//! format instructions to a [`blueprint_interface::CompletionBackend`],
//! pulls the JSON object out of the reply (tolerating prose and markdown
//! fences), and re-validates it locally against an [`OutputSchema`].
//!
//! ```text
//! Idle -> Requesting -> Succeeded
//!                    -> Failed(Config | Backend | Parse | Validation)
//! ```

mod extraction;
mod instructions;
mod request;
mod schema;
mod service;
mod validation;

pub use extraction::{collect_text, extract_candidate};
pub use instructions::{FORMAT_RULES, STRICT_RULE, assemble_prompt, format_instructions};
pub use request::{GenerationRequest, GenerationRequestBuilder};
pub use schema::{Field, FieldKind, JSON_SCHEMA_DIALECT, OutputSchema};
pub use service::{StructuredGenerator, interpret_reply};
pub use validation::validate;
