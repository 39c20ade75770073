use std::io::{self, BufRead, Read};

use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use inquire::{InquireError, Text};

use crate::repl::command::SlashCommandCompleter;

/// Longest line accepted from a reader; DeepL rejects request bodies over 128 KiB.
pub const MAX_LINE_BYTES: usize = 64 * 1024;

/// A source of user input lines.
pub trait LineSource {
    /// Returns the next line, or `None` once the user has ended the session.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Interactive prompt with slash-command completion.
///
/// Ctrl+C, Ctrl+D and Esc end the session.
pub struct PromptSource {
    render_config: RenderConfig<'static>,
}

impl PromptSource {
    pub fn new() -> Self {
        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        Self { render_config }
    }
}

impl Default for PromptSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for PromptSource {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let answer = Text::new("")
            .with_render_config(self.render_config)
            .with_autocomplete(SlashCommandCompleter)
            .with_help_message("Ask anything, /help for commands, Ctrl+C to quit")
            .prompt();

        match answer {
            Ok(line) => Ok(Some(line)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(InquireError::IO(e)) => Err(e),
            Err(e) => Err(io::Error::other(e)),
        }
    }
}

/// Reads newline-terminated lines from any buffered reader (pipes, files, tests).
pub struct ReaderSource<R> {
    reader: R,
    max_line_bytes: usize,
}

impl<R: BufRead> ReaderSource<R> {
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            max_line_bytes: MAX_LINE_BYTES,
        }
    }

    #[must_use]
    pub const fn with_max_line_bytes(mut self, max_line_bytes: usize) -> Self {
        self.max_line_bytes = max_line_bytes;
        self
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        let limit = self.max_line_bytes as u64 + 1;
        let read = (&mut self.reader).take(limit).read_until(b'\n', &mut buf)?;

        if read == 0 {
            return Ok(None);
        }

        // The cap counts bytes, including the trailing newline
        if buf.len() > self.max_line_bytes {
            // Drop the remainder so the next read starts on a fresh line
            if buf.last() != Some(&b'\n') {
                self.reader.skip_until(b'\n')?;
            }
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "line exceeds maximum length of {} bytes",
                    self.max_line_bytes
                ),
            ));
        }

        String::from_utf8(buf)
            .map(Some)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
