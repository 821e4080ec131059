//! Interactive chat + mic surface.
//!
//! Text lines are chat submissions; `/mic` toggles the voice session;
//! `/transcript` reprints the conversation; `/quit` exits. A spawned pump
//! forwards provider session events into the controller so a call ended on
//! the provider's side resynchronizes the mic state.

use std::io::Write;
use std::sync::Arc;

use alham_ai::{persona, Conversation, GroqClient, GroqConfig, Message, Role};
use alham_voice::{
    Identity, SessionController, SessionState, VapiClient, VapiConfig, VoiceEvent,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{broadcast, Mutex};
use tracing::warn;

use crate::cli::Args;

pub async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = GroqConfig::from_env()?;
    if let Some(model) = args.model {
        config = config.with_model(model);
    }
    let client = GroqClient::new(config);

    let mut conversation = Conversation::new().with_greeting(persona::GREETING);

    // Voice is optional: without Vapi credentials the chat still works.
    let controller = match VapiConfig::from_env() {
        Ok(config) => {
            let provider = Arc::new(VapiClient::new(config));
            let controller = Arc::new(Mutex::new(SessionController::new(
                provider,
                Identity::named(args.name),
            )));
            let events = controller.lock().await.subscribe();
            spawn_event_pump(controller.clone(), events);
            Some(controller)
        }
        Err(err) => {
            warn!(error = %err, "voice session disabled");
            None
        }
    };

    println!("alham AI — type a message, /mic to toggle the voice session, /quit to exit.");
    for message in conversation.messages() {
        println!("{}", render(message));
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match line.trim() {
            "/quit" | "/exit" => break,
            "/mic" => match &controller {
                Some(controller) => {
                    let mut controller = controller.lock().await;
                    match controller.toggle().await {
                        Ok(SessionState::Active) => println!("[voice] listening"),
                        Ok(SessionState::Idle) => println!("[voice] stopped"),
                        Err(err) => println!("[voice] could not start: {err}"),
                    }
                }
                None => {
                    println!("[voice] not configured (set VAPI_API_KEY and VAPI_ASSISTANT_ID)")
                }
            },
            "/transcript" => {
                for message in conversation.messages() {
                    println!("{}", render(message));
                }
            }
            text => match conversation.submit(&client, text).await {
                Ok(Some(reply)) => println!("alham: {reply}"),
                Ok(None) => {}
                Err(err) => println!("[chat] {err}"),
            },
        }
    }

    if let Some(controller) = &controller {
        controller.lock().await.stop().await;
    }
    Ok(())
}

/// Forward provider session events into the controller.
fn spawn_event_pump(
    controller: Arc<Mutex<SessionController>>,
    mut events: broadcast::Receiver<VoiceEvent>,
) {
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(VoiceEvent::CallEnded) => {
                    controller.lock().await.on_provider_ended();
                    println!("[voice] call ended");
                }
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });
}

fn render(message: &Message) -> String {
    match message.role {
        Role::User => format!("you: {}", message.content),
        Role::Assistant => format!("alham: {}", message.content),
        Role::System => format!("system: {}", message.content),
    }
}
