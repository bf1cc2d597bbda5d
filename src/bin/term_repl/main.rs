mod repl_command;

use clap::Parser;
use console::style;
use dialoguer::{theme::ColorfulTheme, BasicHistory, Input};
use itertools::Itertools;
use repl_command::ReplCommand;
use std::{path::PathBuf, process::ExitCode};
use strum::IntoEnumIterator;
use termparse::{
    logging::{init_tracing, Verbosity},
    parsers::{tokenize, Parser as _},
    render::{render, OutputFormat},
    ConfigError, ParserConfig, TermParser,
};
use tracing::error;

#[derive(Parser)]
#[command(version)]
/// Interactively parse logic terms.
struct Cli {
    #[arg(help = "The TOML parser config file", long = "config", id = "CONFIG")]
    config: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The initial output format",
        short = 'o',
        long = "format",
        id = "FORMAT",
        default_value_t = OutputFormat::Text
    )]
    format: OutputFormat,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Silent
    )]
    verbosity: Verbosity,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbosity, true);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    run_repl(TermParser::new(config), cli.format);
    ExitCode::SUCCESS
}

fn load_config(cli: &Cli) -> Result<ParserConfig, ConfigError> {
    match &cli.config {
        Some(path) => ParserConfig::from_path(path),
        None => Ok(ParserConfig::default()),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  <term>: parse a term and print it in the current format");
    println!("  :tokens <text>: print the tokens of some text");
    println!(
        "  :format <format>: set the output format, one of {}",
        OutputFormat::iter().join(", ")
    );
    println!("  :help: show this help message");
    println!("  :exit: exit the REPL");
}

fn run_repl(parser: TermParser, mut format: OutputFormat) {
    let mut history = BasicHistory::new().max_entries(100).no_duplicates(true);

    #[allow(clippy::while_let_loop)]
    loop {
        if let Ok(line) = Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("term")
            .allow_empty(true)
            .history_with(&mut history)
            .interact_text()
        {
            match ReplCommand::parse(&line) {
                Some(ReplCommand::Exit) => break,
                Some(ReplCommand::Help) => print_help(),
                Some(ReplCommand::Format(new_format)) => {
                    format = new_format;
                    println!("Output format set to {}", format);
                }
                Some(ReplCommand::Tokens(text)) => match tokenize(&text) {
                    Ok(tokens) => {
                        for token in tokens {
                            println!("{} {} {:?}", token.position, token.kind, token.literal);
                        }
                    }
                    Err(e) => println!("{}", style(e).red()),
                },
                Some(ReplCommand::Parse(text)) => match parser.parse(&text) {
                    Ok(Some(term)) => match render(&term, format) {
                        Ok(rendered) => println!("{}", rendered.trim_end()),
                        Err(e) => println!("{}", style(e).red()),
                    },
                    Ok(None) => println!("{}", style("<no term>").dim()),
                    Err(e) => println!("{}", style(e).red()),
                },
                None => println!("Unknown command, try :help"),
            }
        } else {
            break;
        }
    }
}
