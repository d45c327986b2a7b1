//! Command trait for the lexfsm CLI.
//!
//! This module defines the standard command trait that all commands
//! implement to ensure consistency across the application.

use crate::config::Config;
use crate::error::Result;

/// Standard command trait that all lexfsm commands must implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance from its arguments and the loaded
    /// configuration.
    fn new(args: Self::Args, config: Config) -> Self;

    /// Execute the command against the process's standard streams.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name, used in log output.
    fn name() -> &'static str;
}
