//! Schema-driven coercion of raw option values.
//!
//! Raw option values are strings straight from the tokenizer. Given a
//! template, each declared option is converted to its typed form and checked
//! against its constraints.

use super::definitions::{flatten_definitions, ChoiceValue, OptionDefinition, OptionType};
use crate::error::ParseError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::trace;

/// Value of a parsed option.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    String(String),
    Integer(i64),
    Number(f64),
    Boolean(bool),
}

/// Options keyed by name.
pub type OptionMap = BTreeMap<String, OptionValue>;

impl OptionValue {
    /// Returns the text of a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value of an integer; numbers are not truncated.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as a float for either numeric variant.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the value of a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns true if this value equals the choice literal exactly.
    ///
    /// Integers and numbers compare numerically; booleans never match.
    pub fn matches_choice(&self, choice: &ChoiceValue) -> bool {
        match (self, choice) {
            (Self::String(s), ChoiceValue::String(c)) => s == c,
            (Self::Integer(i), ChoiceValue::Number(c)) => (*i as f64) == *c,
            (Self::Number(n), ChoiceValue::Number(c)) => n == c,
            _ => false,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for OptionValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for OptionValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

/// Converts a raw option string to the given type.
///
/// Returns `None` when the string has no value of that type. Booleans are
/// literal: only `"true"` is true, every other string is false.
///
/// Integers accept any finite number. A whole number that fits in `i64`
/// becomes `Integer`; fractions and out-of-range values stay `Number`.
pub fn parse_option_value(value: &str, option_type: OptionType) -> Option<OptionValue> {
    match option_type {
        OptionType::String | OptionType::Attachment => Some(OptionValue::String(value.to_string())),
        OptionType::Integer => {
            let value = value.trim();
            if let Ok(i) = value.parse::<i64>() {
                return Some(OptionValue::Integer(i));
            }
            let n = parse_finite(value)?;
            // i64::MAX as f64 rounds up to 2^63, which is out of range.
            if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
                Some(OptionValue::Integer(n as i64))
            } else {
                Some(OptionValue::Number(n))
            }
        }
        OptionType::Number => parse_finite(value.trim()).map(OptionValue::Number),
        OptionType::Boolean => Some(OptionValue::Boolean(value == "true")),
        OptionType::SubCommand => None,
    }
}

fn parse_finite(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Coerces and validates raw options against a template.
///
/// Definitions without a supplied value are skipped unless required; no
/// defaults are ever inserted. Options the template does not mention are
/// left as raw strings.
pub fn coerce_options(
    mut options: OptionMap,
    template: &[OptionDefinition],
) -> Result<OptionMap, ParseError> {
    for definition in flatten_definitions(template) {
        let Some(raw) = options.get(&definition.name) else {
            if definition.required {
                return Err(ParseError::MissingRequiredOption {
                    name: definition.name,
                });
            }
            continue;
        };

        let coerced = coerce_value(&definition, raw)?;

        if let Some(choices) = &definition.choices {
            if !choices.iter().any(|c| coerced.matches_choice(&c.value)) {
                return Err(ParseError::InvalidChoice {
                    name: definition.name.clone(),
                    value: coerced.to_string(),
                    choices: choices
                        .iter()
                        .map(|c| c.value.to_string())
                        .collect::<Vec<_>>()
                        .join(", "),
                });
            }
        }

        trace!(option = %definition.name, value = %coerced, "coerced option");
        options.insert(definition.name, coerced);
    }

    Ok(options)
}

fn coerce_value(
    definition: &OptionDefinition,
    raw: &OptionValue,
) -> Result<OptionValue, ParseError> {
    let invalid = || ParseError::InvalidOptionValue {
        name: definition.name.clone(),
        value: raw.to_string(),
    };

    match (definition.option_type, raw) {
        (_, OptionValue::String(text)) => {
            parse_option_value(text, definition.option_type).ok_or_else(invalid)
        }
        // Already coerced by an earlier definition of the same name.
        (OptionType::String | OptionType::Attachment, value) => Ok(value.clone()),
        (option_type, value) => {
            parse_option_value(&value.to_string(), option_type).ok_or_else(invalid)
        }
    }
}
