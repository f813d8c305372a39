//! Chat-completion backend integrations for Blueprint.
//!
//! Provides [`BackendConfig`] and an [`OpenAICompatibleClient`] implementing
//! [`blueprint_interface::CompletionBackend`].

mod config;
mod openai_compat;

pub use config::{
    BackendConfig, BackendConfigBuilder, DEFAULT_BASE_URL, DEFAULT_MODEL, api_key_from_lookup,
};
pub use openai_compat::{
    ChatChoice, ChatContent, ChatContentPart, ChatMessage, ChatRequest, ChatRequestBuilder,
    ChatResponse, ChatUsage, OpenAICompatError, OpenAICompatibleClient, from_chat_response,
    to_chat_request,
};
