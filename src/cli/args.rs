use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pivot")]
#[command(about = "Chat with an AI model in your own language via DeepL translation")]
#[command(version)]
pub struct Args {
    /// Language questions are translated into before reaching the model (e.g. EN)
    #[arg(short = 'p', long = "pivot", global = true)]
    pub pivot: Option<String>,

    /// Language answers are translated into (e.g. JA)
    #[arg(short = 'r', long = "reply", global = true)]
    pub reply: Option<String>,

    /// Hide the banner and progress spinner
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Log requests and responses to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List supported language codes
    Languages,
    /// Show the config file location and the settings in effect
    Config,
}
