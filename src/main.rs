//! slashparse - Parse a slash command line and print its structure.

mod cli;

use cli::{Cli, OutputFormat};
use slash_parse::commands::usage_line;
use slash_parse::config::{Config, TemplateFile};
use slash_parse::error::Result;
use slash_parse::{is_command, logging, parse_command, CommandParser, Interaction};
use tracing::{debug, error, warn};

fn main() {
    let cli = Cli::parse_args();
    logging::init_stderr_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        error!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.check {
        println!("{}", is_command(&cli.input));
        return Ok(());
    }

    let config_path = cli.config_path();
    debug!("Loading config from: {}", config_path.display());
    let mut config = Config::load_from_file(&config_path)?;
    cli.apply_overrides(&mut config);

    let parser = CommandParser::from_config(&config);

    // A template file replaces whatever template the config registers.
    let template_file = cli.template.as_deref().map(TemplateFile::load).transpose()?;
    let result = match &template_file {
        Some(file) => parser.parse_with(&cli.input, Some(&file.options)),
        None => parser.parse(&cli.input),
    };

    let interaction = match result {
        Ok(interaction) => interaction,
        Err(e) => {
            if let Ok(parsed) = parse_command(&cli.input) {
                let template = template_file
                    .as_ref()
                    .map(|f| f.options.as_slice())
                    .or_else(|| parser.template(&parsed.command));
                if let Some(template) = template {
                    warn!("Usage: {}", usage_line(&parsed.command, template));
                }
            }
            return Err(e.into());
        }
    };

    match cli.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&interaction)?),
        OutputFormat::Text => print!("{}", render_text(&interaction)),
    }

    Ok(())
}

/// Renders an interaction as an indented plain-text summary.
fn render_text(interaction: &Interaction) -> String {
    let mut out = format!("command: {}\n", interaction.command);
    out.push_str(&format!("text: {}\n", interaction.text));
    if !interaction.sub_commands.is_empty() {
        out.push_str(&format!(
            "sub_commands: {}\n",
            interaction.sub_commands.join(" ")
        ));
    }
    if !interaction.options.is_empty() {
        out.push_str("options:\n");
        for (name, value) in &interaction.options {
            out.push_str(&format!("  {name} = {value}\n"));
        }
    }
    out
}
