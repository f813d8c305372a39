//! Generic OpenAI-compatible API client.
//!
//! Works against any API that follows the OpenAI chat completions format
//! (NVIDIA NIM, Groq, HuggingFace router, vLLM, ...).

mod client;
mod conversions;
mod dto;

pub use client::OpenAICompatibleClient;
pub use conversions::{from_chat_response, to_chat_request};
pub use dto::{
    ChatChoice, ChatContent, ChatContentPart, ChatMessage, ChatRequest, ChatRequestBuilder,
    ChatResponse, ChatUsage, OpenAICompatError,
};
