//! Vapi voice provider.
//!
//! Implements the `VoiceProvider` trait against the Vapi REST API
//! (https://api.vapi.ai). Starting a session creates a call with the
//! configured assistant; the identity rides along as template variable
//! bindings the assistant's prompt can reference.

mod api;
mod client;
mod config;

pub use client::VapiClient;
pub use config::VapiConfig;
