//! The interactive relay loop.
//!
//! Reads a question, translates it into the pivot language, asks the chat
//! model, translates the answer back and prints it.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
mod ui;

pub use session::{RelayError, RelaySession, SessionConfig};
