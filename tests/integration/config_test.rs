//! Loading templates from configuration files.

use slash_parse::config::{Config, TemplateFile};
use slash_parse::{CommandParser, OptionValue, ParseError};
use std::fs;
use tempfile::tempdir;

const CONFIG: &str = r#"
[parser]
max_sub_commands = 1

[[templates.todos]]
name = "add"
type = "sub_command"

[[templates.todos.options]]
name = "item"
type = "string"
required = true

[[templates.todos.options]]
name = "howmany"
type = "integer"

[[templates.todos]]
name = "priority"
type = "integer"
choices = [
    { name = "low", value = 1 },
    { name = "high", value = 2 },
]
"#;

#[test]
fn test_parser_from_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, CONFIG).unwrap();

    let config = Config::load_from_file(&path).unwrap();
    let parser = CommandParser::from_config(&config);

    let interaction = parser
        .parse("/todos add item: milk howmany: 3 priority: 2")
        .unwrap();
    assert_eq!(interaction.sub_commands, vec!["add"]);
    assert_eq!(interaction.options["item"], OptionValue::from("milk"));
    assert_eq!(interaction.options["howmany"], OptionValue::Integer(3));
    assert_eq!(interaction.options["priority"], OptionValue::Integer(2));

    let err = parser.parse("/todos add item: milk priority: 5").unwrap_err();
    assert_eq!(err.kind(), "InvalidChoice");

    // Only one sub-command is allowed by this config.
    let err = parser.parse("/todos add weekly item: milk").unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidArguments {
            token: "weekly".to_string()
        }
    );
}

#[test]
fn test_invalid_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[parser]\nmax_sub_commands = \"two\"\n").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert_eq!(err.category(), "Configuration Error");
}

#[test]
fn test_template_file_with_explicit_parse() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("todos.toml");
    fs::write(
        &path,
        r#"
[[options]]
name = "complete"
type = "boolean"
required = true
"#,
    )
    .unwrap();

    let template = TemplateFile::load(&path).unwrap();
    let parser = CommandParser::default();
    let interaction = parser
        .parse_with("/todos done complete: true", Some(&template.options))
        .unwrap();
    assert_eq!(interaction.options["complete"], OptionValue::Boolean(true));
}
