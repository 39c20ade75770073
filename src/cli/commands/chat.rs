use anyhow::Result;
use std::io::{self, IsTerminal};
use tracing::debug;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::deepl::TranslationClient;
use crate::input::{PromptSource, ReaderSource};
use crate::openai::ChatClient;
use crate::repl::RelaySession;

pub struct ChatOptions {
    pub pivot: Option<String>,
    pub reply: Option<String>,
}

/// Resolves configuration, builds both clients once and runs the relay loop.
///
/// Fails before the loop starts if either API key is missing.
pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load()?;
    let resolved = resolve_config(
        &ResolveOptions {
            pivot: options.pivot,
            reply: options.reply,
        },
        &file_config,
    )?;

    let deepl_key = resolved.deepl.require_api_key()?;
    let openai_key = resolved.openai.require_api_key()?;

    let translator = TranslationClient::new(resolved.deepl.endpoint.clone(), deepl_key.to_string());
    let chat = ChatClient::new(resolved.openai.endpoint.clone(), openai_key.to_string());
    let session = RelaySession::new(resolved.session_config(), translator, chat);

    let mut stdout = io::stdout();
    if io::stdin().is_terminal() {
        debug!("reading questions from the interactive prompt");
        session.run(&mut PromptSource::new(), &mut stdout).await
    } else {
        debug!("reading questions from stdin");
        let mut source = ReaderSource::new(io::stdin().lock());
        session.run(&mut source, &mut stdout).await
    }
}
