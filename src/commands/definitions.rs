//! Option definitions for declarative command templates.
//!
//! A template is a tree of [`OptionDefinition`] nodes describing the options a
//! command accepts, their types, and their constraints. Templates can be
//! built in code or deserialized from TOML/JSON.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionType {
    /// Groups nested options under a sub-command; carries no value itself.
    SubCommand,
    /// Plain string value.
    String,
    /// Whole number.
    Integer,
    /// `true` or anything else.
    Boolean,
    /// Floating point number.
    Number,
    /// Attachment reference, kept as a string.
    Attachment,
}

impl OptionType {
    /// Returns the tag used for this type in templates.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SubCommand => "sub_command",
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::Attachment => "attachment",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A literal value an option may be restricted to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChoiceValue {
    Number(f64),
    String(String),
}

impl fmt::Display for ChoiceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

/// A named allowed value for an option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionChoice {
    /// Display name of the choice.
    pub name: String,
    /// The literal the coerced option value must equal.
    pub value: ChoiceValue,
}

impl OptionChoice {
    pub fn new(name: impl Into<String>, value: ChoiceValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Definition of a single option, possibly with nested child options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionDefinition {
    /// Option name as typed before the colon.
    pub name: String,

    /// Declared value type.
    #[serde(rename = "type")]
    pub option_type: OptionType,

    /// Short description shown in help.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Nested option definitions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionDefinition>,

    /// Whether a value must be supplied.
    #[serde(default)]
    pub required: bool,

    // Bounds are carried for callers but not enforced by the coercer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Allowed literal values. An empty list rejects every value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<OptionChoice>>,
}

impl OptionDefinition {
    /// Creates an optional definition with no children or constraints.
    pub fn new(name: impl Into<String>, option_type: OptionType) -> Self {
        Self {
            name: name.into(),
            option_type,
            description: None,
            options: Vec::new(),
            required: false,
            min_value: None,
            max_value: None,
            min_length: None,
            max_length: None,
            choices: None,
        }
    }

    /// Marks the option as required.
    pub fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..self
        }
    }

    /// Sets the nested child definitions.
    pub fn with_options(self, options: Vec<OptionDefinition>) -> Self {
        Self { options, ..self }
    }

    /// Restricts the option to the given choices.
    pub fn with_choices(self, choices: Vec<OptionChoice>) -> Self {
        Self {
            choices: Some(choices),
            ..self
        }
    }

    /// Returns a copy of this node without its children.
    fn without_children(&self) -> Self {
        Self {
            options: Vec::new(),
            ..self.clone()
        }
    }
}

/// Flattens definition trees into a single list.
///
/// Traversal is depth-first pre-order: each parent precedes its children and
/// siblings keep their declaration order. Returned nodes have no children.
pub fn flatten_definitions(definitions: &[OptionDefinition]) -> Vec<OptionDefinition> {
    let mut flat = Vec::new();
    collect_definitions(definitions, &mut flat);
    flat
}

fn collect_definitions(definitions: &[OptionDefinition], flat: &mut Vec<OptionDefinition>) {
    for definition in definitions {
        flat.push(definition.without_children());
        collect_definitions(&definition.options, flat);
    }
}

/// Renders a usage line for a command from its template.
///
/// Required options are shown bare, optional ones in brackets:
/// `/todos item: <string> [howmany: <integer>]`.
pub fn usage_line(command: &str, template: &[OptionDefinition]) -> String {
    let options = flatten_definitions(template)
        .iter()
        .filter(|d| d.option_type != OptionType::SubCommand)
        .map(|d| {
            let field = format!("{}: <{}>", d.name, d.option_type);
            if d.required {
                field
            } else {
                format!("[{field}]")
            }
        })
        .collect::<Vec<_>>();

    let sub_commands = template
        .iter()
        .filter(|d| d.option_type == OptionType::SubCommand)
        .map(|d| d.name.as_str())
        .collect::<Vec<_>>();

    let mut line = format!("/{command}");
    if !sub_commands.is_empty() {
        line.push_str(&format!(" <{}>", sub_commands.join("|")));
    }
    for option in options {
        line.push(' ');
        line.push_str(&option);
    }
    line
}
