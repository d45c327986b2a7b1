//! Tokenize command implementation.
//!
//! Reads one source file, runs the tokenizer over it and writes the token
//! report. An unreadable input is not fatal: the diagnostic is printed and
//! the run continues with empty input, producing a header-only report.

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use lexfsm_lex::{write_report, Lexer, ReportFormat};
use tracing::{debug, info};

use crate::commands::common::output_messages;
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::{CliError, Result};

/// Arguments for the tokenize command.
#[derive(Debug, Clone)]
pub struct TokenizeArgs {
    /// Source file; prompted for when absent.
    pub input: Option<PathBuf>,
    /// Report path, overriding the config.
    pub output: Option<PathBuf>,
    /// Report layout, overriding the config.
    pub format: Option<ReportFormat>,
}

/// What a tokenize run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizeSummary {
    /// Source file that was requested.
    pub input: PathBuf,
    /// Whether it could be read. When false the report is header-only.
    pub input_readable: bool,
    /// Report file written.
    pub output: PathBuf,
    /// Number of tokens in the report.
    pub tokens: usize,
    /// Number of skipped characters and dropped numbers.
    pub anomalies: usize,
}

/// Tokenize command handler.
pub struct TokenizeCommand {
    args: TokenizeArgs,
    config: Config,
}

impl Command for TokenizeCommand {
    type Args = TokenizeArgs;
    type Output = TokenizeSummary;

    fn new(args: TokenizeArgs, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<TokenizeSummary> {
        let stdin = io::stdin();
        self.execute_with(&mut stdin.lock(), &mut io::stdout(), &mut io::stderr())
    }

    fn name() -> &'static str {
        "tokenize"
    }
}

impl TokenizeCommand {
    /// Runs the command against the given streams.
    ///
    /// `input` is only read when a path has to be prompted for. User
    /// messages go to `out`, the unreadable-input diagnostic to `err`.
    pub fn execute_with<R, W, E>(&self, input: &mut R, out: &mut W, err: &mut E) -> Result<TokenizeSummary>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let start_time = Instant::now();

        let input_path = match &self.args.input {
            Some(path) => path.clone(),
            None => prompt_for_path(input, out)?,
        };

        let (source, input_readable) = match read_source(&input_path) {
            Ok(source) => (source, true),
            Err(e) => {
                writeln!(err, "{}", e)?;
                if let CliError::InputUnreadable { source, .. } = &e {
                    debug!(error = %source, "continuing with empty input");
                }
                (String::new(), false)
            },
        };

        let output_path = self.output_path();
        let format = self.format();
        let keywords = self.config.lexer.keyword_set();
        debug!(
            input = %input_path.display(),
            output = %output_path.display(),
            %format,
            keywords = keywords.len(),
            "starting {}",
            Self::name()
        );

        let mut lexer = Lexer::new(&source, &keywords);
        let tokens = write_report_file(&output_path, &mut lexer, format)?;

        for anomaly in lexer.anomalies() {
            debug!("{}", anomaly);
        }
        let anomalies = lexer.anomalies().len();
        info!(
            tokens,
            anomalies,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "tokenized {}",
            input_path.display()
        );

        writeln!(out, "{} {}", output_messages::OUTPUT_WRITTEN, output_path.display())?;

        Ok(TokenizeSummary {
            input: input_path,
            input_readable,
            output: output_path,
            tokens,
            anomalies,
        })
    }

    /// Get the effective report path.
    fn output_path(&self) -> PathBuf {
        match &self.args.output {
            Some(path) => path.clone(),
            None => self.config.output.clone(),
        }
    }

    /// Get the effective report format.
    fn format(&self) -> ReportFormat {
        self.args.format.unwrap_or(self.config.format)
    }
}

/// Asks for the input path and reads one line.
///
/// Surrounding whitespace is trimmed. End of input yields an empty path,
/// which then fails to open like any other missing file.
pub fn prompt_for_path<R, W>(input: &mut R, out: &mut W) -> Result<PathBuf>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{}", output_messages::INPUT_PROMPT)?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(PathBuf::from(line.trim()))
}

/// Reads the whole source file.
pub fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| CliError::InputUnreadable {
        path: path.to_path_buf(),
        source,
    })
}

/// Streams the lexer's tokens into a freshly created report file.
fn write_report_file(path: &Path, lexer: &mut Lexer<'_>, format: ReportFormat) -> Result<usize> {
    let file = File::create(path).map_err(|source| CliError::OutputUnwritable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    let count = write_report(&mut writer, lexer, format)?;
    writer.flush()?;
    Ok(count)
}

/// Run the tokenize command with the given arguments.
pub fn run_tokenize(args: TokenizeArgs, config: Config) -> Result<TokenizeSummary> {
    TokenizeCommand::new(args, config).execute()
}
