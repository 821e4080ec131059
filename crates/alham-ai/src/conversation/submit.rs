//! Async submission path: user turn in, exactly one assistant turn out.

use alham_common::FlightGuard;
use tracing::{debug, warn};

use crate::persona::FALLBACK_REPLY;
use crate::{AiError, CompletionClient, Message};

use super::manager::Conversation;

impl Conversation {
    /// Append a user turn and settle it with exactly one assistant turn.
    ///
    /// Empty or whitespace-only input is ignored: `Ok(None)`, no transcript
    /// mutation, no provider call. While a previous submission is still in
    /// flight, returns `Err(AiError::Busy)` without touching the transcript,
    /// so no two provider calls can race for append rights.
    ///
    /// Provider failures never escape. Whether the provider succeeds or
    /// fails, the transcript gains the user turn plus one assistant turn
    /// (the reply, or the fixed fallback apology) and the loading flag
    /// clears. No automatic retry.
    pub async fn submit(
        &mut self,
        client: &dyn CompletionClient,
        text: impl Into<String>,
    ) -> Result<Option<String>, AiError> {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let _guard = FlightGuard::try_acquire(&self.busy).ok_or(AiError::Busy)?;

        self.messages.push(Message::user(trimmed));

        let outbound = self.build_messages();
        debug!(turns = outbound.len(), "sending transcript to completion provider");

        let reply = match client.complete(&outbound).await {
            Ok(content) => content,
            Err(err) => {
                warn!(error = %err, "completion failed, settling with fallback reply");
                FALLBACK_REPLY.to_string()
            }
        };

        self.messages.push(Message::assistant(reply.clone()));
        Ok(Some(reply))
    }
}
