//! Voice session lifecycle for alham.
//!
//! Provides `SessionController`, which mediates start/stop of exactly one
//! realtime voice session against a `VoiceProvider`, and `VapiClient`, a
//! Vapi REST implementation of that provider.

pub mod controller;
pub mod vapi;

use async_trait::async_trait;
use tokio::sync::broadcast;

pub use controller::{SessionController, SessionState};
pub use vapi::{VapiClient, VapiConfig};

/// Caller profile forwarded to the provider as opaque template variables.
/// Never validated or interpreted locally.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl Identity {
    /// Identity with just a first name, the rest left blank.
    pub fn named(first_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            ..Self::default()
        }
    }
}

/// Provider-originated session notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceEvent {
    /// The provider ended the session unilaterally (hangup, timeout,
    /// remote stop).
    CallEnded,
}

/// The three primitives the session controller needs from a voice
/// provider. Keeping the seam this narrow lets the controller run against
/// a fake in tests.
#[async_trait]
pub trait VoiceProvider: Send + Sync {
    /// Open a realtime session, forwarding the identity verbatim.
    async fn start(&self, identity: &Identity) -> Result<(), VoiceError>;

    /// Close the current session. Never fails from the caller's
    /// perspective; provider errors are logged by the implementation.
    async fn stop(&self);

    /// Subscribe to provider-originated session events.
    fn subscribe(&self) -> broadcast::Receiver<VoiceEvent>;
}

#[derive(Debug, thiserror::Error)]
pub enum VoiceError {
    #[error("session start failed: {0}")]
    StartFailed(String),

    #[error("voice provider not configured: {0}")]
    NotConfigured(String),
}
