//! Generation request type.

use crate::OutputSchema;
use blueprint_core::ModelParameters;
use derive_getters::Getters;

/// One structured generation call. Consumed once; holds no cross-call state.
///
/// # Examples
///
/// ```
/// use blueprint_generation::{Field, GenerationRequest, OutputSchema};
///
/// let request = GenerationRequest::builder()
///     .instruction("Suggest a name")
///     .schema(OutputSchema::new(vec![Field::string("name")]))
///     .build()
///     .unwrap();
///
/// assert!(!*request.strict());
/// assert_eq!(*request.parameters().max_tokens(), 4000);
/// ```
#[derive(Debug, Clone, PartialEq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GenerationRequest {
    /// Natural-language instruction
    instruction: String,
    /// Expected result shape
    schema: OutputSchema,
    /// Sampling and deadline parameters
    #[builder(default)]
    parameters: ModelParameters,
    /// Append the stricter formatting rule
    #[builder(default)]
    strict: bool,
}

impl GenerationRequest {
    /// Creates a non-strict request.
    pub fn new(
        instruction: impl Into<String>,
        schema: OutputSchema,
        parameters: ModelParameters,
    ) -> Self {
        Self {
            instruction: instruction.into(),
            schema,
            parameters,
            strict: false,
        }
    }

    /// Returns a builder for constructing a GenerationRequest.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// Returns a copy with the stricter formatting rule enabled.
    pub fn into_strict(mut self) -> Self {
        self.strict = true;
        self
    }
}
