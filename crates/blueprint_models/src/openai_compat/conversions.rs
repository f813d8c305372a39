//! Type conversions between Blueprint and OpenAI formats.

use crate::openai_compat::{
    ChatContent, ChatContentPart, ChatMessage, ChatRequest, ChatResponse, OpenAICompatError,
};
use blueprint_core::{Completion, ContentFragment, ModelParameters, TokenUsage};

/// Builds a single-turn chat request for `prompt`.
pub fn to_chat_request(
    prompt: &str,
    model: &str,
    parameters: &ModelParameters,
) -> Result<ChatRequest, OpenAICompatError> {
    ChatRequest::builder()
        .model(model.to_string())
        .messages(vec![ChatMessage::user(prompt)])
        .max_tokens(Some(*parameters.max_tokens()))
        .temperature(Some(*parameters.temperature()))
        .build()
        .map_err(|e| OpenAICompatError::Builder(format!("Failed to build request: {}", e)))
}

/// Converts an OpenAI chat response to a [`Completion`].
///
/// Only the first choice is used. String content becomes one text fragment;
/// part lists keep their order, bare strings count as text, and non-text
/// parts are mapped to [`ContentFragment::Other`].
pub fn from_chat_response(response: &ChatResponse) -> Result<Completion, OpenAICompatError> {
    let choice = response
        .choices
        .first()
        .ok_or_else(|| OpenAICompatError::ResponseParsing("No choices in response".to_string()))?;

    let fragments = match &choice.message.content {
        None => Vec::new(),
        Some(ChatContent::Text(text)) => vec![ContentFragment::Text(text.clone())],
        Some(ChatContent::Parts(parts)) => parts
            .iter()
            .map(|part| match part {
                ChatContentPart::Bare(text) => ContentFragment::Text(text.clone()),
                ChatContentPart::Typed {
                    kind,
                    text: Some(text),
                } if kind == "text" => ContentFragment::Text(text.clone()),
                ChatContentPart::Typed { kind, .. } => ContentFragment::Other {
                    kind: kind.clone(),
                },
            })
            .collect(),
    };

    let usage = response.usage.as_ref().and_then(|u| {
        TokenUsage::from_reported(u.prompt_tokens, u.completion_tokens, u.total_tokens)
    });

    Completion::builder()
        .fragments(fragments)
        .model(response.model.clone())
        .finish_reason(choice.finish_reason.clone())
        .usage(usage)
        .build()
        .map_err(|e| OpenAICompatError::Builder(format!("Failed to build completion: {}", e)))
}
