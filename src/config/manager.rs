use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::api::Service;
use crate::repl::SessionConfig;
use crate::{deepl, openai, paths};

/// Environment variables searched for the DeepL key when `api_key_env` is not set.
pub const DEEPL_KEY_ENV: &[&str] = &["DEEPL_API_KEY"];

/// Environment variables searched for the OpenAI key when `api_key_env` is not set.
pub const OPENAI_KEY_ENV: &[&str] = &["CHATGPT_API_KEY", "OPENAI_API_KEY"];

/// Configuration problems detected before the loop starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Missing API key for {service}\n\n\
         Set the {env_var} environment variable:\n  \
         export {env_var}=\"your-api-key\"\n\n\
         Or set api_key under [{section}] in the config file"
    )]
    MissingApiKey {
        service: Service,
        env_var: String,
        section: &'static str,
    },

    #[error(
        "Invalid language code for '{setting}': '{code}'\n\n\
         Run 'pivot languages' to see all supported codes."
    )]
    InvalidLanguage { setting: &'static str, code: String },

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// The `[languages]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguagesConfig {
    /// Language questions are translated into (DeepL target code).
    pub pivot: Option<String>,
    /// Language answers are translated into (DeepL target code).
    pub reply: Option<String>,
}

/// The `[deepl]` and `[openai]` sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the API; the built-in default is used when unset.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
}

impl ServiceConfig {
    /// Gets the API key, preferring the environment over the config file.
    ///
    /// `default_env` is searched when no `api_key_env` is configured.
    pub fn get_api_key(&self, default_env: &[&str]) -> Option<String> {
        let from_env = match &self.api_key_env {
            Some(name) => read_env(name),
            None => default_env.iter().find_map(|name| read_env(name)),
        };

        from_env.or_else(|| self.api_key.clone().filter(|key| !key.is_empty()))
    }

    fn key_env_name(&self, default_env: &[&str]) -> String {
        self.api_key_env
            .clone()
            .or_else(|| default_env.first().map(|s| (*s).to_string()))
            .unwrap_or_default()
    }
}

fn read_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/pivot/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub languages: LanguagesConfig,
    #[serde(default)]
    pub deepl: ServiceConfig,
    #[serde(default)]
    pub openai: ServiceConfig,
}

/// Overrides from the command line; these win over the config file.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub pivot: Option<String>,
    pub reply: Option<String>,
}

/// Endpoint and credentials of one service after resolution.
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub service: Service,
    pub endpoint: String,
    pub api_key: Option<String>,
    /// The environment variable the key is expected in, for error messages.
    pub key_env: String,
    section: &'static str,
}

impl ServiceSettings {
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingApiKey {
                service: self.service,
                env_var: self.key_env.clone(),
                section: self.section,
            })
    }
}

/// Configuration after merging CLI options, the config file and defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub pivot_lang: String,
    pub reply_lang: String,
    pub deepl: ServiceSettings,
    pub openai: ServiceSettings,
}

impl ResolvedConfig {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            pivot_lang: self.pivot_lang.clone(),
            reply_lang: self.reply_lang.clone(),
            deepl_endpoint: self.deepl.endpoint.clone(),
            openai_endpoint: self.openai.endpoint.clone(),
        }
    }
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI options, then the config file, then built-in defaults.
/// Missing API keys are not an error here; see [`ServiceSettings::require_api_key`].
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig, ConfigError> {
    let pivot_lang = resolve_language(
        "pivot",
        options.pivot.as_ref().or(config_file.languages.pivot.as_ref()),
        deepl::DEFAULT_PIVOT_LANGUAGE,
    )?;
    let reply_lang = resolve_language(
        "reply",
        options.reply.as_ref().or(config_file.languages.reply.as_ref()),
        deepl::DEFAULT_REPLY_LANGUAGE,
    )?;

    Ok(ResolvedConfig {
        pivot_lang,
        reply_lang,
        deepl: resolve_service(
            Service::DeepL,
            "deepl",
            &config_file.deepl,
            deepl::DEFAULT_ENDPOINT,
            DEEPL_KEY_ENV,
        ),
        openai: resolve_service(
            Service::OpenAI,
            "openai",
            &config_file.openai,
            openai::DEFAULT_ENDPOINT,
            OPENAI_KEY_ENV,
        ),
    })
}

fn resolve_language(
    setting: &'static str,
    value: Option<&String>,
    default: &str,
) -> Result<String, ConfigError> {
    let code = value.map_or(default, String::as_str);
    deepl::normalize_language(code).ok_or_else(|| ConfigError::InvalidLanguage {
        setting,
        code: code.to_string(),
    })
}

fn resolve_service(
    service: Service,
    section: &'static str,
    config: &ServiceConfig,
    default_endpoint: &str,
    default_env: &[&str],
) -> ServiceSettings {
    ServiceSettings {
        service,
        endpoint: config
            .endpoint
            .clone()
            .unwrap_or_else(|| default_endpoint.to_string()),
        api_key: config.get_api_key(default_env),
        key_env: config.key_env_name(default_env),
        section,
    }
}

/// Locates and loads the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Uses `$XDG_CONFIG_HOME/pivot/config.toml` or `~/.config/pivot/config.toml`.
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Loads the config file; a missing file yields the defaults.
    pub fn load(&self) -> Result<ConfigFile, ConfigError> {
        let contents = match fs::read_to_string(&self.config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(ConfigFile::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: self.config_path.display().to_string(),
                    source,
                });
            }
        };

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: self.config_path.display().to_string(),
            source,
        })
    }
}
