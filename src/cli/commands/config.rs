//! `pivot config`: shows where settings come from and what is in effect.

use anyhow::Result;

use crate::config::{ConfigManager, ResolveOptions, ServiceSettings, resolve_config};
use crate::openai;
use crate::ui::Style;

pub fn print_config(options: &ResolveOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let path = manager.config_path();
    let exists = path.exists();
    let resolved = resolve_config(options, &manager.load()?)?;

    println!("{}", Style::header("Config file"));
    println!(
        "  {}{}",
        Style::secondary(path.display()),
        if exists { "" } else { " (not found, using defaults)" }
    );
    println!();

    println!("{}", Style::header("Languages"));
    println!(
        "  {}  {}",
        Style::label("pivot"),
        Style::code(&resolved.pivot_lang)
    );
    println!(
        "  {}  {}",
        Style::label("reply"),
        Style::code(&resolved.reply_lang)
    );
    println!();

    println!("{}", Style::header("Model"));
    println!(
        "  {}  temperature {}, max tokens {}",
        Style::value(openai::MODEL),
        openai::TEMPERATURE,
        openai::MAX_TOKENS
    );
    println!();

    print_service(&resolved.deepl);
    print_service(&resolved.openai);

    Ok(())
}

fn print_service(settings: &ServiceSettings) {
    println!("{}", Style::header(settings.service));
    println!(
        "  {}  {}",
        Style::label("endpoint"),
        Style::secondary(&settings.endpoint)
    );
    let key_state = if settings.api_key.is_some() {
        Style::success("(set)")
    } else {
        Style::warning(format!("(not set, export {})", settings.key_env))
    };
    println!("  {}   {key_state}", Style::label("api key"));
    println!();
}
