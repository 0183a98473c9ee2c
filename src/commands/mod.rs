//! Slash command parsing.
//!
//! The pipeline runs strictly forward: the router recognizes the prefix and
//! command name, the tokenizer peels sub-commands and reads `name: value`
//! options, and the coercer types the options against a template.

pub mod coerce;
pub mod definitions;
pub mod router;
pub mod tokenizer;

pub use coerce::{coerce_options, parse_option_value, OptionMap, OptionValue};
pub use definitions::{
    flatten_definitions, usage_line, ChoiceValue, OptionChoice, OptionDefinition, OptionType,
};
pub use router::{is_command, parse, parse_command, CommandParser, Interaction, ParsedCommand};
pub use tokenizer::{parse_options, parse_sub_commands, SubCommands, DEFAULT_MAX_SUB_COMMANDS};
