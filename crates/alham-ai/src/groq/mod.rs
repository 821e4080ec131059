//! Groq chat-completion client.
//!
//! Implements the `CompletionClient` trait against Groq's OpenAI-compatible
//! chat completions endpoint (https://api.groq.com/openai/v1/chat/completions).

mod api;
mod client;
mod config;

pub use client::GroqClient;
pub use config::GroqConfig;
