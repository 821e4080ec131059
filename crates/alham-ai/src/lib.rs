//! Chat engine for alham.
//!
//! Provides:
//! - `Conversation`: an append-only chat transcript with single-flight
//!   submission and a fixed fallback reply when the provider fails
//! - `CompletionClient`: the narrow interface a completion provider must
//!   implement
//! - `GroqClient`: that interface against Groq's OpenAI-compatible chat
//!   completions endpoint
//! - `persona`: the fixed Alham AI system instruction and canned replies

pub mod conversation;
pub mod groq;
pub mod persona;

use async_trait::async_trait;

pub use conversation::Conversation;
pub use groq::{GroqClient, GroqConfig};

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send an ordered message sequence and return the assistant's reply.
    async fn complete(&self, messages: &[Message]) -> Result<String, AiError>;
}

/// One transcript turn, and one wire entry in provider requests.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("A request is already in flight")]
    Busy,
}
