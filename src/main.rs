use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pivot_chat::cli::commands::{chat, config};
use pivot_chat::cli::{Args, Command};
use pivot_chat::config::{ConfigError, ResolveOptions};
use pivot_chat::deepl::print_languages;
use pivot_chat::output::{self, OutputConfig};
use pivot_chat::ui::Style;

// One question is relayed at a time; a single thread is all the loop needs.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    init_tracing(args.verbose);
    output::init(OutputConfig { quiet: args.quiet });

    match run(args).await {
        Ok(()) => exit_code(exitcode::OK),
        Err(e) => {
            eprintln!("{} {e}", Style::error("Error:"));
            if e.downcast_ref::<ConfigError>().is_some() {
                exit_code(exitcode::CONFIG)
            } else {
                exit_code(exitcode::SOFTWARE)
            }
        }
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Config) => {
            config::print_config(&ResolveOptions {
                pivot: args.pivot,
                reply: args.reply,
            })?;
        }
        None => {
            chat::run_chat(chat::ChatOptions {
                pivot: args.pivot,
                reply: args.reply,
            })
            .await?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("pivot_chat={level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn exit_code(code: exitcode::ExitCode) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
