//! VoiceProvider trait implementation for VapiClient.

use async_trait::async_trait;
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::{Identity, VoiceError, VoiceEvent, VoiceProvider};

use super::client::VapiClient;

#[async_trait]
impl VoiceProvider for VapiClient {
    async fn start(&self, identity: &Identity) -> Result<(), VoiceError> {
        let body = self.build_start_body(identity);

        debug!(assistant = %self.config.assistant_id, "Vapi call start request");

        let response = self
            .http
            .post(self.call_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| VoiceError::StartFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(VoiceError::StartFailed(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| VoiceError::StartFailed(e.to_string()))?;

        match json["id"].as_str() {
            Some(id) if !id.is_empty() => {
                *self.call_id.lock().await = Some(id.to_string());
                Ok(())
            }
            _ => Err(VoiceError::StartFailed("no 'id' in call response".into())),
        }
    }

    async fn stop(&self) {
        let Some(id) = self.call_id.lock().await.take() else {
            debug!("no live Vapi call to stop");
            return;
        };

        // Fire-and-forget: the local session has already committed to Idle,
        // so a rejected stop is only worth a log line.
        let url = format!("{}/{id}", self.call_url());
        match self
            .http
            .delete(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .send()
            .await
        {
            Ok(response) if !response.status().is_success() => {
                warn!(status = %response.status(), call = %id, "Vapi call stop rejected");
            }
            Err(err) => {
                warn!(error = %err, call = %id, "Vapi call stop failed");
            }
            Ok(_) => {}
        }
    }

    fn subscribe(&self) -> broadcast::Receiver<VoiceEvent> {
        self.events.subscribe()
    }
}
