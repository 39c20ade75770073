//! Subcommand implementations.

/// The relay loop (default command).
pub mod chat;

/// `pivot config`.
pub mod config;
