//! Vapi client configuration.

use crate::VoiceError;

pub(crate) const VAPI_API_BASE: &str = "https://api.vapi.ai";

/// Vapi client configuration.
#[derive(Clone)]
pub struct VapiConfig {
    pub api_key: String,
    pub assistant_id: String,
    pub base_url: String,
}

impl std::fmt::Debug for VapiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VapiConfig")
            .field("api_key", &"[REDACTED]")
            .field("assistant_id", &self.assistant_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl VapiConfig {
    pub fn new(api_key: impl Into<String>, assistant_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            assistant_id: assistant_id.into(),
            base_url: VAPI_API_BASE.to_string(),
        }
    }

    /// Create config from `VAPI_API_KEY` and `VAPI_ASSISTANT_ID`, with an
    /// optional `VAPI_BASE_URL` override.
    pub fn from_env() -> Result<Self, VoiceError> {
        let api_key = std::env::var("VAPI_API_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| VoiceError::NotConfigured("VAPI_API_KEY is not set".into()))?;
        let assistant_id = std::env::var("VAPI_ASSISTANT_ID")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| VoiceError::NotConfigured("VAPI_ASSISTANT_ID is not set".into()))?;

        let mut config = Self::new(api_key, assistant_id);
        if let Ok(base_url) = std::env::var("VAPI_BASE_URL") {
            if !base_url.trim().is_empty() {
                config = config.with_base_url(base_url);
            }
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
