//! Session lifecycle state machine.
//!
//! Idle --start(success)--> Active; Active --stop | provider-ended--> Idle.
//! Start while Active is ignored, stop while Idle is a no-op, and a start
//! while another start is still awaiting the provider is ignored rather
//! than queued.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use alham_common::FlightGuard;
use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::{Identity, VoiceError, VoiceEvent, VoiceProvider};

/// Session lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Active,
}

/// Mediates exactly one voice session against a `VoiceProvider`, exposing
/// the toggle contract the mic surface drives.
pub struct SessionController {
    provider: Arc<dyn VoiceProvider>,
    identity: Identity,
    state: SessionState,
    /// Held while a provider start call is awaiting acknowledgment.
    starting: AtomicBool,
}

impl SessionController {
    pub fn new(provider: Arc<dyn VoiceProvider>, identity: Identity) -> Self {
        Self {
            provider,
            identity,
            state: SessionState::Idle,
            starting: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    /// Open the voice session. Redundant calls are ignored: starting while
    /// Active, or while a previous start is still pending, leaves the
    /// provider untouched and returns `Ok`. On provider failure the state
    /// stays Idle and the session is immediately retryable.
    pub async fn start(&mut self) -> Result<(), VoiceError> {
        if self.is_active() {
            debug!("session already active, ignoring start");
            return Ok(());
        }
        let Some(_guard) = FlightGuard::try_acquire(&self.starting) else {
            debug!("session start already pending, ignoring start");
            return Ok(());
        };

        self.provider.start(&self.identity).await?;
        self.state = SessionState::Active;
        info!("voice session started");
        Ok(())
    }

    /// Close the voice session. No-op when Idle; otherwise commits to Idle
    /// before the fire-and-forget provider stop, so the local state always
    /// fails safe toward "not listening".
    pub async fn stop(&mut self) {
        if !self.is_active() {
            debug!("session already idle, ignoring stop");
            return;
        }
        self.state = SessionState::Idle;
        self.provider.stop().await;
        info!("voice session stopped");
    }

    /// Toggle contract for the mic surface: stop if Active, else start.
    /// Returns the resulting state.
    pub async fn toggle(&mut self) -> Result<SessionState, VoiceError> {
        if self.is_active() {
            self.stop().await;
        } else {
            self.start().await?;
        }
        Ok(self.state)
    }

    /// Absorb a provider-originated termination: same transition as
    /// `stop`, without calling back into the provider.
    pub fn on_provider_ended(&mut self) {
        if self.is_active() {
            info!("provider ended the voice session");
            self.state = SessionState::Idle;
        }
    }

    /// Subscribe to the provider's session events, for the surface's
    /// event pump.
    pub fn subscribe(&self) -> broadcast::Receiver<VoiceEvent> {
        self.provider.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    /// In-memory provider recording every call.
    struct FakeProvider {
        starts: AtomicUsize,
        stops: AtomicUsize,
        fail_start: AtomicBool,
        last_identity: Mutex<Option<Identity>>,
        events: broadcast::Sender<VoiceEvent>,
    }

    impl FakeProvider {
        fn new() -> Self {
            let (events, _) = broadcast::channel(16);
            Self {
                starts: AtomicUsize::new(0),
                stops: AtomicUsize::new(0),
                fail_start: AtomicBool::new(false),
                last_identity: Mutex::new(None),
                events,
            }
        }

        fn start_count(&self) -> usize {
            self.starts.load(Ordering::Acquire)
        }

        fn stop_count(&self) -> usize {
            self.stops.load(Ordering::Acquire)
        }
    }

    #[async_trait]
    impl VoiceProvider for FakeProvider {
        async fn start(&self, identity: &Identity) -> Result<(), VoiceError> {
            self.starts.fetch_add(1, Ordering::AcqRel);
            *self.last_identity.lock().unwrap() = Some(identity.clone());
            if self.fail_start.load(Ordering::Acquire) {
                return Err(VoiceError::StartFailed("auth rejected".into()));
            }
            Ok(())
        }

        async fn stop(&self) {
            self.stops.fetch_add(1, Ordering::AcqRel);
        }

        fn subscribe(&self) -> broadcast::Receiver<VoiceEvent> {
            self.events.subscribe()
        }
    }

    fn controller_with(provider: Arc<FakeProvider>) -> SessionController {
        SessionController::new(provider, Identity::named("User"))
    }

    #[tokio::test]
    async fn toggle_alternates_between_idle_and_active() {
        let provider = Arc::new(FakeProvider::new());
        let mut controller = controller_with(provider.clone());

        assert_eq!(controller.state(), SessionState::Idle);
        assert_eq!(controller.toggle().await.unwrap(), SessionState::Active);
        assert_eq!(controller.toggle().await.unwrap(), SessionState::Idle);
        assert_eq!(controller.toggle().await.unwrap(), SessionState::Active);
        assert_eq!(controller.toggle().await.unwrap(), SessionState::Idle);

        assert_eq!(provider.start_count(), 2);
        assert_eq!(provider.stop_count(), 2);
    }

    #[tokio::test]
    async fn double_start_invokes_provider_once() {
        let provider = Arc::new(FakeProvider::new());
        let mut controller = controller_with(provider.clone());

        controller.start().await.unwrap();
        controller.start().await.unwrap();

        assert_eq!(provider.start_count(), 1);
        assert!(controller.is_active());
    }

    #[tokio::test]
    async fn start_while_pending_is_ignored() {
        let provider = Arc::new(FakeProvider::new());
        let mut controller = controller_with(provider.clone());

        controller.starting.store(true, Ordering::Release);
        controller.start().await.unwrap();
        assert_eq!(provider.start_count(), 0);
        assert_eq!(controller.state(), SessionState::Idle);

        controller.starting.store(false, Ordering::Release);
        controller.start().await.unwrap();
        assert_eq!(provider.start_count(), 1);
        assert!(controller.is_active());
    }

    #[tokio::test]
    async fn failed_start_stays_idle_and_is_retryable() {
        let provider = Arc::new(FakeProvider::new());
        provider.fail_start.store(true, Ordering::Release);
        let mut controller = controller_with(provider.clone());

        let result = controller.start().await;
        assert!(matches!(result, Err(VoiceError::StartFailed(_))));
        assert_eq!(controller.state(), SessionState::Idle);

        provider.fail_start.store(false, Ordering::Release);
        controller.start().await.unwrap();
        assert!(controller.is_active());
    }

    #[tokio::test]
    async fn stop_when_idle_is_a_noop() {
        let provider = Arc::new(FakeProvider::new());
        let mut controller = controller_with(provider.clone());

        controller.stop().await;

        assert_eq!(provider.stop_count(), 0);
        assert_eq!(controller.state(), SessionState::Idle);
    }

    #[tokio::test]
    async fn provider_ended_event_resynchronizes_to_idle() {
        let provider = Arc::new(FakeProvider::new());
        let mut controller = controller_with(provider.clone());

        controller.start().await.unwrap();
        let mut events = controller.subscribe();

        provider.events.send(VoiceEvent::CallEnded).unwrap();
        assert_eq!(events.recv().await.unwrap(), VoiceEvent::CallEnded);

        controller.on_provider_ended();
        assert_eq!(controller.state(), SessionState::Idle);

        // Already-ended session: local stop must not reach the provider.
        controller.stop().await;
        assert_eq!(provider.stop_count(), 0);
    }

    #[tokio::test]
    async fn identity_is_forwarded_verbatim() {
        let provider = Arc::new(FakeProvider::new());
        let identity = Identity {
            first_name: "Abdullah".into(),
            last_name: "Khan".into(),
            email: "abdullah@example.com".into(),
            phone: "+10000000000".into(),
        };
        let mut controller = SessionController::new(provider.clone(), identity.clone());

        controller.start().await.unwrap();

        assert_eq!(provider.last_identity.lock().unwrap().as_ref(), Some(&identity));
    }
}
