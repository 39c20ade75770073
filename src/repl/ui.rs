//! Session banner, help and configuration output.

use super::command::SLASH_COMMANDS;
use super::session::SessionConfig;
use crate::openai;
use crate::status;
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(config: &SessionConfig) {
    status!(
        "{} {} - asking {} in {}, answering in {}",
        Style::header("pivot"),
        Style::version(format!("v{VERSION}")),
        Style::value(openai::MODEL),
        Style::code(&config.pivot_lang),
        Style::code(&config.reply_lang)
    );
    status!();
}

pub fn print_goodbye() {
    status!("{}", Style::success("Goodbye!"));
}

pub fn print_config(config: &SessionConfig) {
    println!("{}", Style::header("Session"));
    println!(
        "  {}    {}",
        Style::label("pivot"),
        Style::code(&config.pivot_lang)
    );
    println!(
        "  {}    {}",
        Style::label("reply"),
        Style::code(&config.reply_lang)
    );
    println!(
        "  {}    {}",
        Style::label("model"),
        Style::value(openai::MODEL)
    );
    println!(
        "  {}    {}",
        Style::label("deepl"),
        Style::secondary(&config.deepl_endpoint)
    );
    println!(
        "  {}   {}",
        Style::label("openai"),
        Style::secondary(&config.openai_endpoint)
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    for (cmd, desc) in SLASH_COMMANDS {
        println!("  {:12} {}", Style::command(cmd), Style::secondary(desc));
    }
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
}
