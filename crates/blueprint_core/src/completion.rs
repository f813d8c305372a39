//! Backend reply types.

use crate::TokenUsage;
use serde::{Deserialize, Serialize};

/// One piece of a backend reply.
///
/// Backends may answer with a single string or with a sequence of typed
/// parts. Only [`ContentFragment::Text`] carries text that structured
/// generation reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ContentFragment {
    /// Plain text.
    Text(String),
    /// Any non-textual part (images, tool calls, reasoning blocks, ...).
    Other {
        /// Part type as reported by the backend
        kind: String,
    },
}

impl ContentFragment {
    /// Returns the text of a textual fragment.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentFragment::Text(text) => Some(text),
            ContentFragment::Other { .. } => None,
        }
    }
}

/// The result of a single "complete this prompt" call.
///
/// # Examples
///
/// ```
/// use blueprint_core::{Completion, ContentFragment};
///
/// let completion = Completion::text("{\"a\": 1}");
/// assert_eq!(completion.fragments().len(), 1);
/// assert_eq!(completion.fragments()[0].as_text(), Some("{\"a\": 1}"));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Completion {
    /// Reply content in backend order
    fragments: Vec<ContentFragment>,
    /// Model that produced the reply, if reported
    #[builder(default)]
    model: Option<String>,
    /// Why generation stopped, if reported
    #[builder(default)]
    finish_reason: Option<String>,
    /// Token accounting, if reported
    #[builder(default)]
    usage: Option<TokenUsage>,
}

impl Completion {
    /// Creates a completion from fragments.
    pub fn new(fragments: Vec<ContentFragment>) -> Self {
        Self {
            fragments,
            model: None,
            finish_reason: None,
            usage: None,
        }
    }

    /// Creates a completion holding a single text fragment.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(vec![ContentFragment::Text(text.into())])
    }

    /// Returns a builder for constructing a Completion.
    pub fn builder() -> CompletionBuilder {
        CompletionBuilder::default()
    }
}
