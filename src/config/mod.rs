//! Configuration file handling and resolution against CLI options and the environment.

mod manager;

pub use manager::{
    ConfigError, ConfigFile, ConfigManager, DEEPL_KEY_ENV, LanguagesConfig, OPENAI_KEY_ENV,
    ResolveOptions, ResolvedConfig, ServiceConfig, ServiceSettings, resolve_config,
};
