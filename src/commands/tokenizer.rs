//! Tokenizer for command argument text.
//!
//! Argument text is split on whitespace. Leading bare words are peeled off as
//! sub-commands; the rest is read as `name: value` fields, where a word
//! ending in `:` opens a new field and every following word up to the next
//! such marker belongs to its value:
//! - `add shopping veggie: lettuce` → sub-commands `add`, `shopping`
//! - `message: hello there count: 2` → `message` = `hello there`, `count` = `2`

use super::coerce::{coerce_options, OptionMap, OptionValue};
use super::definitions::OptionDefinition;
use crate::error::ParseError;
use tracing::debug;

/// Default cap on the number of leading sub-command words.
pub const DEFAULT_MAX_SUB_COMMANDS: usize = 2;

/// Sub-commands peeled off the front of argument text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubCommands {
    /// Leading bare words, in order.
    pub sub_commands: Vec<String>,
    /// Remaining words joined by single spaces.
    pub remaining: String,
}

/// Returns true if the word opens an option field.
fn is_field_marker(word: &str) -> bool {
    word.ends_with(':')
}

/// Takes up to `max` leading words that are not field markers.
///
/// Stops at the first word ending in `:` since that starts the options.
pub fn parse_sub_commands(content: &str, max: usize) -> SubCommands {
    let mut words = content.split_whitespace().peekable();
    let mut sub_commands = Vec::new();

    while sub_commands.len() < max {
        match words.next_if(|w| !is_field_marker(w)) {
            Some(word) => sub_commands.push(word.to_string()),
            None => break,
        }
    }

    let remaining = words.collect::<Vec<_>>().join(" ");
    SubCommands {
        sub_commands,
        remaining,
    }
}

/// Parses `name: value` fields from argument text.
///
/// A repeated name keeps its last value. Any word before the first field
/// marker is rejected. With a template, values are coerced and validated
/// before returning.
pub fn parse_options(
    content: &str,
    template: Option<&[OptionDefinition]>,
) -> Result<OptionMap, ParseError> {
    let mut options = OptionMap::new();
    let mut name: Option<&str> = None;
    let mut value = String::new();

    for word in content.split_whitespace() {
        if let Some(field) = word.strip_suffix(':') {
            if let Some(open) = name.take() {
                options.insert(open.to_string(), OptionValue::String(std::mem::take(&mut value)));
            }
            // A bare `:` opens no field.
            name = Some(field).filter(|f| !f.is_empty());
        } else if name.is_some() {
            if !value.is_empty() {
                value.push(' ');
            }
            value.push_str(word);
        } else {
            return Err(ParseError::InvalidArguments {
                token: word.to_string(),
            });
        }
    }

    if let Some(open) = name {
        options.insert(open.to_string(), OptionValue::String(value));
    }

    debug!(count = options.len(), "tokenized options");

    match template {
        Some(template) => coerce_options(options, template),
        None => Ok(options),
    }
}
