//! Parsing with option templates.

use pretty_assertions::assert_eq;
use slash_parse::{
    parse, parse_options, ChoiceValue, CommandParser, Interaction, OptionChoice,
    OptionDefinition, OptionMap, OptionType, OptionValue, ParseError,
};

fn todo_template() -> Vec<OptionDefinition> {
    vec![
        OptionDefinition::new("item", OptionType::String),
        OptionDefinition::new("howmany", OptionType::Integer),
        OptionDefinition::new("complete", OptionType::Boolean),
    ]
}

fn expected_todo_options() -> OptionMap {
    OptionMap::from([
        ("item".to_string(), OptionValue::from("lettuce")),
        ("howmany".to_string(), OptionValue::Integer(2)),
        ("complete".to_string(), OptionValue::Boolean(false)),
    ])
}

#[test]
fn test_command_with_option_definition() {
    let template = todo_template();
    let interaction = parse(
        "/todos add item: lettuce howmany: 2 complete: false",
        Some(&template),
    )
    .unwrap();

    assert_eq!(
        interaction,
        Interaction {
            command: "todos".to_string(),
            text: "add item: lettuce howmany: 2 complete: false".to_string(),
            sub_commands: vec!["add".to_string()],
            options: expected_todo_options(),
        }
    );
}

#[test]
fn test_command_with_nested_option_definition() {
    let template = vec![OptionDefinition::new("item", OptionType::String).with_options(vec![
        OptionDefinition::new("howmany", OptionType::Integer),
        OptionDefinition::new("complete", OptionType::Boolean),
    ])];
    let interaction = parse(
        "/todos add item: lettuce howmany: 2 complete: false",
        Some(&template),
    )
    .unwrap();

    assert_eq!(interaction.options, expected_todo_options());
}

#[test]
fn test_command_with_single_option_definition() {
    let definition = OptionDefinition::new("item", OptionType::String);
    let interaction = parse(
        "/todos add item: lettuce",
        Some(std::slice::from_ref(&definition)),
    )
    .unwrap();

    assert_eq!(interaction.sub_commands, vec!["add"]);
    assert_eq!(interaction.options["item"], OptionValue::from("lettuce"));
}

#[test]
fn test_integer_option_is_a_number() {
    let template = [OptionDefinition::new("howmany", OptionType::Integer)];
    let options = parse_options("howmany: 2", Some(&template)).unwrap();
    assert_eq!(options["howmany"].as_i64(), Some(2));
    assert_eq!(options["howmany"].as_str(), None);
}

#[test]
fn test_integer_option_accepts_exponent_and_fraction() {
    let template = [OptionDefinition::new("howmany", OptionType::Integer)];

    let interaction = parse("/todos add howmany: 1e3", Some(&template)).unwrap();
    assert_eq!(interaction.options["howmany"], OptionValue::Integer(1000));

    let interaction = parse("/todos add howmany: 2.5", Some(&template)).unwrap();
    assert_eq!(interaction.options["howmany"], OptionValue::Number(2.5));
}

#[test]
fn test_number_option() {
    let template = [OptionDefinition::new("price", OptionType::Number)];
    let interaction = parse("/buy price: 1.25", Some(&template)).unwrap();
    assert_eq!(interaction.options["price"].as_f64(), Some(1.25));
}

#[test]
fn test_boolean_coercion_is_literal() {
    let template = [OptionDefinition::new("complete", OptionType::Boolean)];
    let cases = [
        ("true", true),
        ("false", false),
        ("yes", false),
        ("TRUE", false),
        ("1", false),
        ("true please", false),
    ];
    for (raw, expected) in cases {
        let interaction = parse(&format!("/todos done complete: {raw}"), Some(&template)).unwrap();
        assert_eq!(
            interaction.options["complete"],
            OptionValue::Boolean(expected),
            "complete: {raw}"
        );
    }
}

#[test]
fn test_missing_required_option() {
    let template = [OptionDefinition::new("name", OptionType::String).required()];
    let err = parse("/todos add other: thing", Some(&template)).unwrap_err();
    assert_eq!(
        err,
        ParseError::MissingRequiredOption {
            name: "name".to_string()
        }
    );
}

#[test]
fn test_required_nested_option() {
    let template = [OptionDefinition::new("add", OptionType::SubCommand)
        .with_options(vec![OptionDefinition::new("item", OptionType::String).required()])];
    let err = parse("/todos add", Some(&template)).unwrap_err();
    assert_eq!(err.kind(), "MissingRequiredOption");

    let interaction = parse("/todos add item: milk", Some(&template)).unwrap();
    assert_eq!(interaction.options["item"], OptionValue::from("milk"));
}

#[test]
fn test_invalid_option_value() {
    let template = [OptionDefinition::new("howmany", OptionType::Integer)];
    let err = parse("/todos add howmany: a few", Some(&template)).unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidOptionValue {
            name: "howmany".to_string(),
            value: "a few".to_string(),
        }
    );
}

#[test]
fn test_invalid_choice() {
    let template = [OptionDefinition::new("priority", OptionType::String).with_choices(vec![
        OptionChoice::new("Low", ChoiceValue::String("low".to_string())),
        OptionChoice::new("High", ChoiceValue::String("high".to_string())),
    ])];

    let interaction = parse("/todos add priority: high", Some(&template)).unwrap();
    assert_eq!(interaction.options["priority"], OptionValue::from("high"));

    let err = parse("/todos add priority: urgent", Some(&template)).unwrap_err();
    assert_eq!(err.kind(), "InvalidChoice");
}

#[test]
fn test_tokenizer_errors_come_before_coercion() {
    let template = [OptionDefinition::new("name", OptionType::String).required()];
    let err = parse("/todos a b c", Some(&template)).unwrap_err();
    assert_eq!(err.kind(), "InvalidArguments");
}

#[test]
fn test_command_parser_with_templates() {
    let parser = CommandParser::default()
        .with_template("todos", todo_template())
        .with_template(
            "remind",
            vec![OptionDefinition::new("minutes", OptionType::Integer).required()],
        );

    let todo = parser
        .parse("/todos add item: lettuce howmany: 2 complete: false")
        .unwrap();
    assert_eq!(todo.options, expected_todo_options());

    let remind = parser.parse("/Remind me minutes: 15").unwrap();
    assert_eq!(remind.options["minutes"], OptionValue::Integer(15));

    assert_eq!(
        parser.parse("/remind me"),
        Err(ParseError::MissingRequiredOption {
            name: "minutes".to_string()
        })
    );
}
