//! Conversation transcript management.
//!
//! A `Conversation` owns the ordered chat transcript, submits new user
//! turns to a `CompletionClient`, and reconciles the response — or the
//! fixed fallback reply on failure — back into the transcript. At most one
//! request is in flight at a time, so assistant turns always land in
//! submission order.

mod manager;
mod submit;

pub use manager::Conversation;
