//! Token report rendering.
//!
//! The table format is a header, a rule and one [`Token`] `Display` line per
//! token:
//!
//! ```text
//! Token      | Lexeme
//! ------------------------------
//! Identifier | x
//! Operator   | =
//! Integer    | 5
//! ```
//!
//! The JSON format is a pretty-printed array of `{"kind", "lexeme"}` objects.
//! Both formats consume tokens one at a time, so a [`Lexer`](crate::Lexer)
//! can be passed straight in.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::token::Token;

/// Width of the rule under the table header.
pub const RULE_WIDTH: usize = 30;

/// Errors raised while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The destination could not be written.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failed.
    #[error("failed to encode report as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Report layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Two-column text table.
    #[default]
    Table,
    /// JSON array.
    Json,
}

/// Error for an unknown report format name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown report format '{0}' (expected 'table' or 'json')")]
pub struct ParseReportFormatError(String);

impl FromStr for ReportFormat {
    type Err = ParseReportFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(ParseReportFormatError(s.to_string())),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Table => "table",
            Self::Json => "json",
        })
    }
}

/// Writes `tokens` to `out` in the given format.
///
/// Returns the number of tokens written.
///
/// # Example
///
/// ```
/// use lexfsm_lex::report::{write_report, ReportFormat};
/// use lexfsm_lex::{KeywordSet, Lexer};
///
/// let keywords = KeywordSet::default();
/// let mut out = Vec::new();
/// let count = write_report(&mut out, Lexer::new("x=5", &keywords), ReportFormat::Table).unwrap();
///
/// assert_eq!(count, 3);
/// assert!(String::from_utf8(out).unwrap().ends_with("Integer    | 5\n"));
/// ```
pub fn write_report<W, I>(out: &mut W, tokens: I, format: ReportFormat) -> Result<usize, ReportError>
where
    W: Write,
    I: IntoIterator<Item = Token>,
{
    match format {
        ReportFormat::Table => write_table(out, tokens),
        ReportFormat::Json => write_json(out, tokens),
    }
}

/// Writes the header and one line per token.
pub fn write_table<W, I>(out: &mut W, tokens: I) -> Result<usize, ReportError>
where
    W: Write,
    I: IntoIterator<Item = Token>,
{
    writeln!(out, "{:<10} | Lexeme", "Token")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    let mut count = 0;
    for token in tokens {
        writeln!(out, "{}", token)?;
        count += 1;
    }
    Ok(count)
}

/// Writes a pretty-printed JSON array followed by a newline.
pub fn write_json<W, I>(out: &mut W, tokens: I) -> Result<usize, ReportError>
where
    W: Write,
    I: IntoIterator<Item = Token>,
{
    let mut count = 0;
    let counted = tokens.into_iter().inspect(|_| count += 1);

    let mut serializer = serde_json::Serializer::pretty(&mut *out);
    serializer.collect_seq(counted)?;
    writeln!(out)?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{tokenize, KeywordSet, TokenKind};

    const HEADER: &str = "Token      | Lexeme\n------------------------------\n";

    fn table(source: &str) -> String {
        let mut out = Vec::new();
        write_report(
            &mut out,
            tokenize(source, &KeywordSet::default()),
            ReportFormat::Table,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_report_is_header_only() {
        assert_eq!(table(""), HEADER);
    }

    #[test]
    fn test_table_lines() {
        let expected = format!(
            "{}Keyword    | if\nIdentifier | a\nOperator   | ==\nReal       | 1.5\nSeparator  | :\n",
            HEADER
        );
        assert_eq!(table("if a == 1.5:"), expected);
    }

    #[test]
    fn test_table_streams_from_lexer() {
        let keywords = KeywordSet::default();
        let mut out = Vec::new();
        let count = write_table(&mut out, crate::Lexer::new("x = 5", &keywords)).unwrap();

        assert_eq!(count, 3);
        assert_eq!(String::from_utf8(out).unwrap(), table("x = 5"));
    }

    #[test]
    fn test_json_report() {
        let mut out = Vec::new();
        let tokens = vec![
            Token::new(TokenKind::Identifier, "x"),
            Token::new(TokenKind::Integer, "5"),
        ];
        let count = write_report(&mut out, tokens, ReportFormat::Json).unwrap();
        assert_eq!(count, 2);

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"kind": "Identifier", "lexeme": "x"},
                {"kind": "Integer", "lexeme": "5"},
            ])
        );
    }

    #[test]
    fn test_json_empty() {
        let mut out = Vec::new();
        let count = write_report(&mut out, Vec::new(), ReportFormat::Json).unwrap();
        assert_eq!(count, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("table".parse::<ReportFormat>(), Ok(ReportFormat::Table));
        assert_eq!("JSON".parse::<ReportFormat>(), Ok(ReportFormat::Json));
        assert!("yaml".parse::<ReportFormat>().is_err());
        assert_eq!(ReportFormat::default(), ReportFormat::Table);
    }

    #[test]
    fn test_io_error_is_reported() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let result = write_report(&mut Broken, Vec::new(), ReportFormat::Table);
        assert!(matches!(result, Err(ReportError::Io(_))));
    }
}
