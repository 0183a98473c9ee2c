//! Configuration management for slash-parse.
//!
//! Handles loading parser settings and per-command option templates from TOML
//! files.

use crate::commands::definitions::OptionDefinition;
use crate::commands::tokenizer::DEFAULT_MAX_SUB_COMMANDS;
use crate::error::{Result, SlashError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Main configuration structure for slash-parse.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Parser settings.
    #[serde(default)]
    pub parser: ParserConfig,

    /// Option templates keyed by command name.
    #[serde(default)]
    pub templates: HashMap<String, Vec<OptionDefinition>>,
}

/// Parser settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Maximum number of leading sub-command words.
    #[serde(default = "default_max_sub_commands")]
    pub max_sub_commands: usize,
}

fn default_max_sub_commands() -> usize {
    DEFAULT_MAX_SUB_COMMANDS
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_sub_commands: default_max_sub_commands(),
        }
    }
}

/// A standalone template file: a list of `[[options]]` definitions.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TemplateFile {
    #[serde(default)]
    pub options: Vec<OptionDefinition>,
}

impl TemplateFile {
    /// Loads a template file. Unlike the config, the file must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SlashError::config(format!(
                "Failed to read template file {}: {e}",
                path.display()
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            SlashError::config(format!(
                "Template error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("slash-parse")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| SlashError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            SlashError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }
}
