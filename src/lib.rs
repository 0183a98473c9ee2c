//! slash-parse - Parse chat-style slash commands into typed interactions.
//!
//! ```
//! use slash_parse::{parse, OptionDefinition, OptionType, OptionValue};
//!
//! let template = [OptionDefinition::new("howmany", OptionType::Integer)];
//! let interaction = parse("/todos add item: lettuce howmany: 2", Some(&template)).unwrap();
//!
//! assert_eq!(interaction.command, "todos");
//! assert_eq!(interaction.sub_commands, vec!["add"]);
//! assert_eq!(interaction.options["item"], OptionValue::from("lettuce"));
//! assert_eq!(interaction.options["howmany"], OptionValue::Integer(2));
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use commands::{
    is_command, parse, parse_command, parse_option_value, parse_options, parse_sub_commands,
    ChoiceValue, CommandParser, Interaction, OptionChoice, OptionDefinition, OptionMap,
    OptionType, OptionValue, ParsedCommand, SubCommands,
};
pub use error::{ParseError, SlashError};
