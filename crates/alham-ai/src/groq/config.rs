//! Groq API client configuration.

use crate::AiError;

/// Groq API client configuration.
#[derive(Clone)]
pub struct GroqConfig {
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl std::fmt::Debug for GroqConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroqConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl GroqConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "llama3-70b-8192".to_string(),
            max_tokens: 1024,
            temperature: 0.7,
        }
    }

    /// Create config from the `GROQ_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, AiError> {
        match std::env::var("GROQ_API_KEY") {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(AiError::ApiError(
                "Groq API not configured. Set GROQ_API_KEY.".into(),
            )),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }
}
