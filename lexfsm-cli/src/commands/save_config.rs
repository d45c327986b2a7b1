//! Save-config command implementation.
//!
//! Writes the effective configuration (defaults merged with any loaded
//! config file) as TOML, giving users a starting `lexfsm.toml`.

use std::io::{self, Write};
use std::path::PathBuf;

use tracing::info;

use crate::commands::common::output_messages;
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::Result;

/// Save-config command handler.
pub struct SaveConfigCommand {
    path: PathBuf,
    config: Config,
}

impl Command for SaveConfigCommand {
    type Args = PathBuf;
    type Output = ();

    fn new(path: PathBuf, config: Config) -> Self {
        Self { path, config }
    }

    fn execute(&self) -> Result<()> {
        self.execute_with(&mut io::stdout())
    }

    fn name() -> &'static str {
        "save-config"
    }
}

impl SaveConfigCommand {
    /// Saves the configuration and reports the path on `out`.
    pub fn execute_with<W: Write>(&self, out: &mut W) -> Result<()> {
        self.config.save_to_path(&self.path)?;
        info!(path = %self.path.display(), "{} finished", Self::name());
        writeln!(out, "{} {}", output_messages::CONFIG_WRITTEN, self.path.display())?;
        Ok(())
    }
}

/// Run the save-config command.
pub fn run_save_config(path: PathBuf, config: Config) -> Result<()> {
    SaveConfigCommand::new(path, config).execute()
}
