use clap::Parser;
use std::{fs, io, path::PathBuf, process::ExitCode, time::Instant};
use termparse::{
    logging::{init_tracing, Verbosity},
    parsers::Parser as _,
    render::{render, OutputFormat},
    ConfigError, InternPolicy, ParserConfig, TermParser,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Parse logic terms and print them. Every input is parsed on its own; with
/// neither terms nor a file, one term per line is read from stdin.
struct Cli {
    #[arg(help = "The terms to parse")]
    terms: Vec<String>,
    #[arg(
        help = "A file with one term per line",
        short = 'f',
        long = "file",
        id = "FILE"
    )]
    file: Option<PathBuf>,
    #[arg(help = "The TOML parser config file", long = "config", id = "CONFIG")]
    config: Option<PathBuf>,
    #[arg(
        help = "The deepest allowed nesting of argument lists, overrides the config file \
        [default: 1024 unless the config file sets one]",
        long = "max-depth",
        id = "MAX_DEPTH"
    )]
    max_depth: Option<usize>,
    #[arg(
        help = "Intern leaves by kind and literal instead of by literal only",
        long = "kind-aware-interning"
    )]
    kind_aware_interning: bool,
    #[arg(
        value_enum,
        help = "The output format",
        short = 'o',
        long = "format",
        id = "FORMAT",
        default_value_t = OutputFormat::Text
    )]
    format: OutputFormat,
    #[arg(help = "Whether to log parse statistics", short = 's', long = "stats")]
    stats: bool,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

/// Nesting limit used when neither the command line nor the config file sets
/// one, so deeply nested input fails with a parse error instead of
/// exhausting the stack.
const DEFAULT_MAX_DEPTH: usize = 1024;

fn load_config(cli: &Cli) -> Result<ParserConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => ParserConfig::from_path(path)?,
        None => ParserConfig::default(),
    };
    match (cli.max_depth, config.max_depth) {
        (Some(max_depth), _) => config = config.with_max_depth(max_depth),
        (None, None) => config = config.with_max_depth(DEFAULT_MAX_DEPTH),
        (None, Some(_)) => {}
    }
    if cli.kind_aware_interning {
        config = config.with_interning(InternPolicy::ByKindAndLiteral);
    }
    Ok(config)
}

fn read_inputs(cli: &Cli) -> io::Result<Vec<String>> {
    let mut inputs = cli.terms.clone();
    match &cli.file {
        Some(path) => inputs.extend(fs::read_to_string(path)?.lines().map(str::to_owned)),
        None if inputs.is_empty() => {
            inputs.extend(io::read_to_string(io::stdin())?.lines().map(str::to_owned))
        }
        None => {}
    }
    Ok(inputs)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbosity, cli.colour);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    info!(?config, "loaded parser config");

    let inputs = match read_inputs(&cli) {
        Ok(inputs) => inputs,
        Err(e) => {
            error!("failed to read input: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let parser = TermParser::new(config);
    let start_time = Instant::now();
    let failures = run(&cli, &parser, &inputs);
    info!(
        inputs = inputs.len(),
        failures,
        elapsed = %humantime::format_duration(start_time.elapsed()),
        "finished parsing"
    );

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Parses and prints every input, returning how many of them failed.
fn run(cli: &Cli, parser: &TermParser, inputs: &[String]) -> usize {
    let mut failures = 0;
    for (index, input) in inputs.iter().enumerate() {
        let result = if cli.stats {
            parser
                .parse_with_statistics(input)
                .map(|(term, statistics)| {
                    statistics.log();
                    info!(
                        input = index + 1,
                        parse_time = %humantime::format_duration(statistics.duration())
                    );
                    term
                })
        } else {
            parser.parse(input)
        };

        match result {
            Ok(Some(term)) => match render(&term, cli.format) {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    error!(input = index + 1, "failed to render term: {}", e);
                    failures += 1;
                }
            },
            Ok(None) => println!("<no term>"),
            Err(e) => {
                error!(input = index + 1, "{}", e);
                failures += 1;
            }
        }
    }
    failures
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_file(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", text).unwrap();
        file
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("termparse").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn flags_override_config_file() {
        let file = config_file("max-depth = 8");
        let path = file.path().to_str().unwrap();

        let config = load_config(&cli(&["--config", path])).unwrap();
        assert_eq!(config.max_depth, Some(8));
        assert_eq!(config.interning, InternPolicy::ByLiteral);

        let config = load_config(&cli(&[
            "--config",
            path,
            "--max-depth",
            "2",
            "--kind-aware-interning",
        ]))
        .unwrap();
        assert_eq!(config.max_depth, Some(2));
        assert_eq!(config.interning, InternPolicy::ByKindAndLiteral);
    }

    #[test]
    fn depth_is_limited_by_default() {
        let config = load_config(&cli(&[])).unwrap();
        assert_eq!(config.max_depth, Some(DEFAULT_MAX_DEPTH));
        assert_eq!(ParserConfig::default().max_depth, None);

        let file = config_file("interning = \"by-literal\"");
        let config = load_config(&cli(&["--config", file.path().to_str().unwrap()])).unwrap();
        assert_eq!(config.max_depth, Some(DEFAULT_MAX_DEPTH));
    }

    #[test]
    fn missing_config_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let result = load_config(&cli(&["--config", path.to_str().unwrap()]));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn failures_are_counted() {
        let cli = cli(&[]);
        let parser = TermParser::new(load_config(&cli).unwrap());
        let inputs = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        assert_eq!(run(&cli, &parser, &inputs(&["f(", "a"])), 1);
        assert_eq!(run(&cli, &parser, &inputs(&["f(a)", "", "X"])), 0);
        assert_eq!(run(&cli, &parser, &inputs(&["a b", "f()", "g(1)"])), 2);
    }

    #[test]
    fn stats_flag_still_parses() {
        let cli = cli(&["--stats"]);
        let parser = TermParser::new(load_config(&cli).unwrap());
        assert_eq!(run(&cli, &parser, &["f(X, X)".to_string()]), 0);
    }
}
