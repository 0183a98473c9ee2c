//! Command parsing and routing for slash-parse.
//!
//! Recognizes the `/` prefix, splits off the command name, and runs the
//! argument text through sub-command extraction and option tokenization.

use super::coerce::OptionMap;
use super::definitions::OptionDefinition;
use super::tokenizer::{parse_options, parse_sub_commands, DEFAULT_MAX_SUB_COMMANDS};
use crate::config::{Config, ParserConfig};
use crate::error::ParseError;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Prefix that marks text as a command.
pub const PREFIX: &str = "/";

/// Command name and the text following it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedCommand {
    /// First word after the prefix, case preserved.
    pub command: String,
    /// Everything after the command word, trimmed.
    pub text: String,
}

/// A fully parsed slash command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interaction {
    /// Command name.
    pub command: String,
    /// Argument text after the command, untouched. Sub-commands and options
    /// are derived from it but not removed, so re-parsing `text` does not
    /// reproduce `options`.
    pub text: String,
    /// Leading sub-command words.
    pub sub_commands: Vec<String>,
    /// Named options, typed if a template was given.
    pub options: OptionMap,
}

/// Strips the prefix, ignoring ASCII case.
fn strip_prefix_ignore_case<'a>(content: &'a str, prefix: &str) -> Option<&'a str> {
    let head = content.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &content[prefix.len()..])
}

/// Returns true if the text parses as a command.
pub fn is_command(content: &str) -> bool {
    parse_command(content).is_ok()
}

/// Splits command text into the command name and its arguments.
pub fn parse_command(content: &str) -> Result<ParsedCommand, ParseError> {
    if content.is_empty() {
        return Err(ParseError::EmptyContent);
    }

    let body = strip_prefix_ignore_case(content, PREFIX)
        .ok_or(ParseError::MissingPrefix)?
        .trim();
    if body.is_empty() {
        return Err(ParseError::EmptyBody);
    }

    let command = body
        .split(char::is_whitespace)
        .next()
        .filter(|c| !c.is_empty())
        .ok_or(ParseError::InvalidCommand)?;
    let text = body[command.len()..].trim();

    Ok(ParsedCommand {
        command: command.to_string(),
        text: text.to_string(),
    })
}

/// Parses a command with the default sub-command limit.
///
/// Failures from any stage are returned unchanged.
pub fn parse(
    content: &str,
    template: Option<&[OptionDefinition]>,
) -> Result<Interaction, ParseError> {
    parse_with_limit(content, template, DEFAULT_MAX_SUB_COMMANDS)
}

fn parse_with_limit(
    content: &str,
    template: Option<&[OptionDefinition]>,
    max_sub_commands: usize,
) -> Result<Interaction, ParseError> {
    let ParsedCommand { command, text } = parse_command(content)?;
    let sub = parse_sub_commands(&text, max_sub_commands);
    let options = parse_options(&sub.remaining, template)?;

    debug!(
        command = %command,
        sub_commands = ?sub.sub_commands,
        options = options.len(),
        "parsed command"
    );

    Ok(Interaction {
        command,
        text,
        sub_commands: sub.sub_commands,
        options,
    })
}

/// Parser with configured limits and per-command templates.
#[derive(Debug, Clone, Default)]
pub struct CommandParser {
    config: ParserConfig,
    templates: HashMap<String, Vec<OptionDefinition>>,
}

impl CommandParser {
    /// Creates a parser with no templates.
    pub fn new(config: ParserConfig) -> Self {
        Self {
            config,
            templates: HashMap::new(),
        }
    }

    /// Creates a parser from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        let templates = config
            .templates
            .iter()
            .map(|(name, defs)| (name.to_lowercase(), defs.clone()))
            .collect();
        Self {
            config: config.parser,
            templates,
        }
    }

    /// Registers the template for a command, replacing any previous one.
    pub fn with_template(mut self, command: &str, template: Vec<OptionDefinition>) -> Self {
        self.templates.insert(command.to_lowercase(), template);
        self
    }

    /// Returns the template registered for a command, matched case-insensitively.
    pub fn template(&self, command: &str) -> Option<&[OptionDefinition]> {
        self.templates
            .get(&command.to_lowercase())
            .map(Vec::as_slice)
    }

    /// Parses a command using the template registered for its name.
    ///
    /// Commands without a template keep their option values as strings.
    pub fn parse(&self, content: &str) -> Result<Interaction, ParseError> {
        let command = parse_command(content)?.command;
        self.parse_with(content, self.template(&command))
    }

    /// Parses a command with an explicit template and the configured limit.
    pub fn parse_with(
        &self,
        content: &str,
        template: Option<&[OptionDefinition]>,
    ) -> Result<Interaction, ParseError> {
        parse_with_limit(content, template, self.config.max_sub_commands)
    }
}
