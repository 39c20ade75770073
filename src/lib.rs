//! # pivot - chat in your own language
//!
//! `pivot` lets you talk to an OpenAI chat model in any language DeepL
//! supports. Each question is translated into a pivot language (English by
//! default), sent to the model, and the answer is translated back.
//!
//! ## Quick Start
//!
//! ```bash
//! export DEEPL_API_KEY="..."
//! export CHATGPT_API_KEY="..."
//!
//! # Ask in Japanese, get answers in Japanese
//! pivot
//!
//! # Ask in German, answers in German
//! pivot --reply DE
//!
//! # One question per line from a file
//! pivot --quiet < questions.txt
//! ```
//!
//! ## Configuration
//!
//! Settings are read from `~/.config/pivot/config.toml`:
//!
//! ```toml
//! [languages]
//! pivot = "EN"
//! reply = "JA"
//!
//! [deepl]
//! endpoint = "https://api.deepl.com/v2"   # Pro accounts
//! api_key_env = "DEEPL_API_KEY"
//!
//! [openai]
//! api_key_env = "CHATGPT_API_KEY"
//! ```

/// Error types and the client traits the relay loop is written against.
pub mod api;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and resolution.
pub mod config;

/// DeepL translation client and language codes.
pub mod deepl;

/// Line sources for the relay loop (interactive prompt, readers).
pub mod input;

/// OpenAI chat-completion client.
pub mod openai;

/// Global output configuration (quiet mode).
pub mod output;

/// XDG-style path utilities.
pub mod paths;

/// The interactive relay loop.
pub mod repl;

/// Terminal UI components (spinner, colors).
pub mod ui;
