//! griscan llm — the chat-completion endpoint behind the classifier strategy.

pub mod client;
pub mod config;

pub use client::{parse_completion, ChatCompletionClient};
pub use config::{LlmConfig, Provider, ResolvedProvider};
