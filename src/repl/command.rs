use inquire::autocompletion::{Autocomplete, Replacement};

// (command, description), in the order /help lists them
pub const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/config", "Show the languages and endpoints in use"),
    ("/help", "Show available commands"),
    ("/languages", "List supported language codes"),
    ("/quit", "End the session"),
];

/// Completes slash commands in the interactive prompt.
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        Ok(SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect())
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        Ok(highlighted_suggestion
            .and_then(|s| s.split_whitespace().next().map(str::to_string)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Config,
    Help,
    Languages,
    Quit,
    Unknown(String),
}

/// One line of user input, classified.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    /// A question to relay to the model.
    Question(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(line: &str) -> Input {
    let line = line.trim();

    if line.is_empty() {
        return Input::Empty;
    }

    line.strip_prefix('/')
        .map_or_else(|| Input::Question(line.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    let command = match parts.first().copied() {
        Some("config") => SlashCommand::Config,
        Some("help" | "?") => SlashCommand::Help,
        Some("languages" | "langs") => SlashCommand::Languages,
        Some("quit" | "exit" | "q") => SlashCommand::Quit,
        _ => SlashCommand::Unknown(parts.join(" ")),
    };
    Input::Command(command)
}
