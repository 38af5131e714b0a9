//! Generation provider integrations for Callsheet.
//!
//! Providers implement [`callsheet_interface::GenerationDriver`]. The
//! OpenAI-compatible client covers hosted APIs as well as local servers
//! exposing the same `/chat/completions` endpoint.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod openai;

pub use openai::{ChatMessage, ChatRequest, ChatRole, OpenAICompatibleClient};
