//! Configuration management for shellrec.
//!
//! Handles loading configuration from a TOML file. Every field has a default,
//! so a missing file or a partial file is valid.

use crate::error::{Result, ShellError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Session name used in the initial prompt.
pub const DEFAULT_SESSION_NAME: &str = "my";

/// Prompt template; `{name}` is replaced by the session name or `prompt` text.
pub const DEFAULT_PROMPT_TEMPLATE: &str = "({name})> ";

/// Nesting limit for repeat/replay dispatch.
pub const DEFAULT_MAX_REPLAY_DEPTH: usize = 16;

/// Main configuration structure for shellrec.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Shell behaviour.
    #[serde(default)]
    pub shell: ShellConfig,

    /// Extra shortcut tokens, mapped to the command they expand to.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,

    /// Diagnostics settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Shell behaviour configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Session name shown in the initial prompt.
    #[serde(default = "default_name")]
    pub name: String,

    /// Prompt template.
    #[serde(default = "default_prompt_template")]
    pub prompt_template: String,

    /// Maximum nesting of repeat/replay dispatch.
    #[serde(default = "default_max_replay_depth")]
    pub max_replay_depth: usize,
}

fn default_name() -> String {
    DEFAULT_SESSION_NAME.to_string()
}

fn default_prompt_template() -> String {
    DEFAULT_PROMPT_TEMPLATE.to_string()
}

fn default_max_replay_depth() -> usize {
    DEFAULT_MAX_REPLAY_DEPTH
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            prompt_template: default_prompt_template(),
            max_replay_depth: default_max_replay_depth(),
        }
    }
}

/// Diagnostics configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Threshold used while debug output is off (e.g. "warn", "info").
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("shellrec")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ShellError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| {
            ShellError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the shell cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.shell.max_replay_depth == 0 {
            return Err(ShellError::config("shell.max_replay_depth must be at least 1"));
        }
        for (alias, command) in &self.aliases {
            if alias.trim().is_empty() || alias.contains(char::is_whitespace) {
                return Err(ShellError::config(format!(
                    "Alias '{alias}' must be a single token"
                )));
            }
            if command.trim().is_empty() {
                return Err(ShellError::config(format!(
                    "Alias '{alias}' has an empty expansion"
                )));
            }
        }
        Ok(())
    }
}
