use std::io::Write;

use anyhow::Result;
use thiserror::Error;
use tracing::debug;

use super::command::{Input, SlashCommand, parse_input};
use super::ui;
use crate::api::{ApiError, Chat, Translate};
use crate::deepl;
use crate::input::LineSource;
use crate::ui::Spinner;

/// Settings a session runs with.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Language questions are translated into before they reach the model.
    pub pivot_lang: String,
    /// Language the model's answer is translated into.
    pub reply_lang: String,
    pub deepl_endpoint: String,
    pub openai_endpoint: String,
}

/// A failed relay cycle, tagged with the stage that failed.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Failed to translate the question: {0}")]
    TranslateIn(#[source] ApiError),

    #[error("Failed to reach the chat service: {0}")]
    Query(#[source] ApiError),

    #[error("Failed to translate the answer: {0}")]
    TranslateOut(#[source] ApiError),
}

impl RelayError {
    pub const fn api_error(&self) -> &ApiError {
        match self {
            Self::TranslateIn(e) | Self::Query(e) | Self::TranslateOut(e) => e,
        }
    }

    pub const fn stage(&self) -> &'static str {
        match self {
            Self::TranslateIn(_) => "translate-in",
            Self::Query(_) => "query",
            Self::TranslateOut(_) => "translate-out",
        }
    }
}

/// The read → translate → ask → translate back → print loop.
///
/// Holds the two service clients for its whole lifetime and nothing else;
/// no state carries over from one question to the next.
pub struct RelaySession<T, C> {
    config: SessionConfig,
    translator: T,
    chat: C,
}

impl<T: Translate, C: Chat> RelaySession<T, C> {
    pub const fn new(config: SessionConfig, translator: T, chat: C) -> Self {
        Self {
            config,
            translator,
            chat,
        }
    }

    /// Runs until the input source is exhausted or the user quits.
    ///
    /// Answers are written to `out`. Failures of a single cycle are reported and
    /// the loop moves on to the next line; only a failing `out` ends it early.
    pub async fn run<S, W>(&self, source: &mut S, out: &mut W) -> Result<()>
    where
        S: LineSource,
        W: Write,
    {
        ui::print_header(&self.config);

        loop {
            let line = match source.next_line() {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    ui::print_error(&format!("Failed to read input: {e}"));
                    continue;
                }
            };

            match parse_input(&line) {
                Input::Empty => {}
                Input::Command(cmd) => {
                    if !self.handle_command(cmd) {
                        break;
                    }
                }
                Input::Question(question) => match self.relay(&question).await {
                    Ok(Some(answer)) => {
                        writeln!(out, "{answer}")?;
                        out.flush()?;
                    }
                    Ok(None) => debug!("chat service returned no replies; nothing to print"),
                    Err(e) => {
                        debug!(stage = e.stage(), kind = %e.api_error().kind(), "relay cycle failed");
                        ui::print_error(&e.to_string());
                    }
                },
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Relays one question and returns the translated answer.
    ///
    /// Returns `Ok(None)` when the chat service produced no replies; in that case
    /// the answer is never sent back for translation.
    pub async fn relay(&self, question: &str) -> Result<Option<String>, RelayError> {
        let spinner = Spinner::new("Translating...");

        let translated = self
            .translator
            .translate(&[question.to_string()], &self.config.pivot_lang)
            .await
            .map_err(RelayError::TranslateIn)?;

        spinner.set_message("Waiting for the answer...");
        let replies = self
            .chat
            .complete(&translated)
            .await
            .map_err(RelayError::Query)?;

        if replies.is_empty() {
            return Ok(None);
        }

        spinner.set_message("Translating the answer...");
        let answer = self
            .translator
            .translate(&replies, &self.config.reply_lang)
            .await
            .map_err(RelayError::TranslateOut)?;

        Ok(Some(answer))
    }

    fn handle_command(&self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => ui::print_config(&self.config),
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Languages => deepl::print_languages(),
            SlashCommand::Quit => return false,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
            }
        }
        true
    }
}
