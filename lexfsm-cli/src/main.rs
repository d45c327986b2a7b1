//! lexfsm CLI - tokenize a source file and write a token report.
//!
//! This is the main entry point for the lexfsm application. It uses clap for
//! argument parsing, loads the configuration, initializes logging and then
//! runs the tokenize command. When no input path is given the user is
//! prompted for one.

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};

use clap::Parser;
use lexfsm_lex::ReportFormat;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_save_config, run_tokenize, TokenizeArgs, TokenizeSummary};
use config::Config;
use error::{CliError, Result};

/// lexfsm - classify the tokens of a source file
///
/// Reads the input file, splits it into identifiers, keywords, integers,
/// reals, operators and separators, and writes a two-column report.
#[derive(Parser, Debug)]
#[command(name = "lexfsm")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize a source file and write a token report", long_about = None)]
struct Cli {
    /// Source file to tokenize (prompted for when omitted)
    input: Option<PathBuf>,

    /// Report file (default: from config, else output.txt)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report format: table or json (default: from config, else table)
    #[arg(short, long)]
    format: Option<ReportFormat>,

    /// Path to configuration file
    #[arg(short, long, env = "LEXFSM_CONFIG")]
    config: Option<PathBuf>,

    /// Write the effective configuration to this path and exit
    #[arg(long, value_name = "PATH")]
    save_config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "LEXFSM_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, env = "LEXFSM_NO_COLOR")]
    no_color: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Parses arguments, loads configuration, initializes logging and runs the
/// selected command.
fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so stdout carries only the prompt and result messages.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| CliError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(cli: Cli, config: Config) -> Result<()> {
    if let Some(path) = cli.save_config {
        return run_save_config(path, config);
    }

    let args = TokenizeArgs {
        input: cli.input,
        output: cli.output,
        format: cli.format,
    };
    let summary: TokenizeSummary = run_tokenize(args, config)?;
    debug!(
        input = %summary.input.display(),
        readable = summary.input_readable,
        output = %summary.output.display(),
        tokens = summary.tokens,
        anomalies = summary.anomalies,
        "done"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["lexfsm"]);
        assert!(cli.input.is_none());
        assert!(cli.output.is_none());
        assert!(cli.format.is_none());
        assert!(!cli.no_color);
    }

    #[test]
    fn test_cli_parse_input() {
        let cli = Cli::parse_from(["lexfsm", "prog.py"]);
        assert_eq!(cli.input, Some(PathBuf::from("prog.py")));
    }

    #[test]
    fn test_cli_parse_output() {
        let cli = Cli::parse_from(["lexfsm", "prog.py", "-o", "tokens.txt"]);
        assert_eq!(cli.output, Some(PathBuf::from("tokens.txt")));
    }

    #[test]
    fn test_cli_parse_format() {
        let cli = Cli::parse_from(["lexfsm", "--format", "json"]);
        assert_eq!(cli.format, Some(ReportFormat::Json));
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let result = Cli::try_parse_from(["lexfsm", "--format", "yaml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_config() {
        let cli = Cli::parse_from(["lexfsm", "--config", "/path/to/lexfsm.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/lexfsm.toml")));
    }

    #[test]
    fn test_cli_parse_save_config() {
        let cli = Cli::parse_from(["lexfsm", "--save-config", "lexfsm.toml"]);
        assert_eq!(cli.save_config, Some(PathBuf::from("lexfsm.toml")));
    }

    #[test]
    fn test_cli_parse_verbose() {
        let cli = Cli::parse_from(["lexfsm", "-v", "prog.py"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_load_config_explicit_missing_path() {
        let result = load_config(Some(Path::new("/nonexistent/lexfsm.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
