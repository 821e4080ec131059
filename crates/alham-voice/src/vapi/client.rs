//! Vapi client struct, request building, and live-call bookkeeping.

use tokio::sync::{broadcast, Mutex};

use crate::{Identity, VoiceEvent};

use super::config::VapiConfig;

/// Vapi REST client.
pub struct VapiClient {
    pub(crate) config: VapiConfig,
    pub(crate) http: reqwest::Client,
    /// Id of the live call, kept so `stop` can end it.
    pub(crate) call_id: Mutex<Option<String>>,
    /// Session events surfaced to subscribers. Vapi delivers end-of-call
    /// reports through account webhooks; a host that receives them forwards
    /// them here via `notify_call_ended`.
    pub(crate) events: broadcast::Sender<VoiceEvent>,
}

impl VapiClient {
    pub fn new(config: VapiConfig) -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            config,
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("failed to build HTTP client"),
            call_id: Mutex::new(None),
            events,
        }
    }

    pub(crate) fn call_url(&self) -> String {
        format!("{}/call", self.config.base_url)
    }

    /// Build the call-creation body: the assistant id plus the identity as
    /// template variable bindings.
    pub(crate) fn build_start_body(&self, identity: &Identity) -> serde_json::Value {
        serde_json::json!({
            "assistantId": self.config.assistant_id,
            "assistantOverrides": {
                "variableValues": identity,
            },
        })
    }

    /// Notify subscribers that the provider ended the session. Called by
    /// hosts that receive Vapi's end-of-call webhook.
    pub fn notify_call_ended(&self) {
        let _ = self.events.send(VoiceEvent::CallEnded);
    }
}
