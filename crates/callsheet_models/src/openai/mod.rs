//! OpenAI-compatible chat completions provider.

mod client;
mod dto;

pub use client::OpenAICompatibleClient;
pub use dto::{ChatMessage, ChatRequest, ChatRole};
pub(crate) use dto::ChatResponse;
