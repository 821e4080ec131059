//! Groq client struct, request building, and response parsing.

use crate::{AiError, Message};

use super::config::GroqConfig;

pub(crate) const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Groq API client.
pub struct GroqClient {
    pub(crate) config: GroqConfig,
    pub(crate) http: reqwest::Client,
}

impl GroqClient {
    pub fn new(config: GroqConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .expect("failed to build HTTP client"),
        }
    }

    /// Build the JSON request body for the chat completions endpoint.
    /// Messages are sent verbatim; the caller is responsible for putting
    /// the system entry first.
    pub(crate) fn build_request_body(&self, messages: &[Message]) -> serde_json::Value {
        serde_json::json!({
            "model": self.config.model,
            "messages": messages,
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
        })
    }

    /// Pull the generated text out of a chat-completions response.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<String, AiError> {
        json["choices"][0]["message"]["content"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| {
                AiError::ParseError("no 'choices[0].message.content' in response".to_string())
            })
    }
}
