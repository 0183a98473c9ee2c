//! Error types for slash-parse.
//!
//! `ParseError` is the failure taxonomy of the parsing pipeline. `SlashError`
//! wraps it together with configuration failures for the binary.

use thiserror::Error;

/// Failures raised while parsing a slash command.
///
/// Every variant aborts the whole parse; no partial result is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The input string is empty.
    #[error("no content")]
    EmptyContent,

    /// The input does not start with the command prefix.
    #[error("no prefix (not a command)")]
    MissingPrefix,

    /// Nothing follows the prefix once surrounding whitespace is trimmed.
    #[error("no body after prefix")]
    EmptyBody,

    /// No command token could be found after the prefix.
    #[error("invalid command")]
    InvalidCommand,

    /// Option text contains a token before any `name:` marker.
    #[error("invalid arguments: '{token}' appears before any option name")]
    InvalidArguments { token: String },

    /// A required option was not supplied.
    #[error("missing required option: {name}")]
    MissingRequiredOption { name: String },

    /// An option value could not be converted to its declared type.
    #[error("invalid option {name}: {value}")]
    InvalidOptionValue { name: String, value: String },

    /// An option value is not one of the declared choices.
    #[error("option value {name}: {value} is not one of the choices [{choices}]")]
    InvalidChoice {
        name: String,
        value: String,
        choices: String,
    },
}

impl ParseError {
    /// Returns a stable identifier for the kind of failure.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyContent => "EmptyContent",
            Self::MissingPrefix => "MissingPrefix",
            Self::EmptyBody => "EmptyBody",
            Self::InvalidCommand => "InvalidCommand",
            Self::InvalidArguments { .. } => "InvalidArguments",
            Self::MissingRequiredOption { .. } => "MissingRequiredOption",
            Self::InvalidOptionValue { .. } => "InvalidOptionValue",
            Self::InvalidChoice { .. } => "InvalidChoice",
        }
    }
}

/// Application-level error type for the `slashparse` binary and config loading.
#[derive(Error, Debug)]
pub enum SlashError {
    /// The input could not be parsed.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Configuration or template file errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Output could not be serialized.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

impl SlashError {
    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Parse(_) => "Parse Error",
            Self::Config(_) => "Configuration Error",
            Self::Output(_) => "Output Error",
        }
    }
}

/// Result type alias using SlashError.
pub type Result<T> = std::result::Result<T, SlashError>;
