//! Error handling module for the lexfsm CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use std::path::PathBuf;

use lexfsm_lex::ReportError;
use thiserror::Error;

/// Main error type for the lexfsm CLI application.
#[derive(Error, Debug)]
pub enum CliError {
    /// Error when the configuration is missing, malformed or unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The input file could not be opened or read.
    ///
    /// This one is recovered from: the tool prints it and tokenizes an empty
    /// input instead.
    #[error("Could not open or read file: {}", .path.display())]
    InputUnreadable {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The report file could not be created.
    #[error("Could not create output file: {}", .path.display())]
    OutputUnwritable {
        /// Path of the report.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error while rendering the report.
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Result type alias using CliError.
pub type Result<T> = std::result::Result<T, CliError>;
