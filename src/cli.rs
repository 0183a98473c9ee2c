//! Command-line argument parsing for slashparse.

use clap::Parser;
use slash_parse::config::Config;
use std::path::PathBuf;

/// Output format for parse results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable summary.
    #[default]
    Text,
    /// The interaction as JSON.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output format: {s}. Expected: text or json")),
        }
    }
}

/// Parse a chat-style slash command and print its structure.
#[derive(Parser, Debug)]
#[command(name = "slashparse")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Command line to parse (e.g., "/todos add item: lettuce howmany: 2")
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Config file path
    #[arg(long, value_name = "PATH", env = "SLASHPARSE_CONFIG")]
    pub config: Option<PathBuf>,

    /// TOML file with [[options]] definitions, overriding configured templates
    #[arg(short = 't', long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Maximum number of sub-commands (overrides config)
    #[arg(short = 'm', long, value_name = "N")]
    pub max_sub_commands: Option<usize>,

    /// Output format
    #[arg(short = 'o', long, value_name = "FORMAT", default_value = "text")]
    pub output: OutputFormat,

    /// Only report whether INPUT is a command
    #[arg(long)]
    pub check: bool,

    /// Log each parsing stage
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path (from CLI or default).
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }

    /// Applies CLI overrides to loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(max) = self.max_sub_commands {
            config.parser.max_sub_commands = max;
        }
    }
}
