//! Configuration module for the lexfsm CLI.
//!
//! This module handles loading and saving the `lexfsm.toml` settings file.

use dirs::{config_dir, home_dir};
use lexfsm_lex::{KeywordSet, ReportFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CliError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "lexfsm.toml";

/// Report file written when neither the config nor the flags name one.
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Report file path.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Report layout.
    #[serde(default)]
    pub format: ReportFormat,

    /// Tokenizer settings.
    #[serde(default)]
    pub lexer: LexerConfig,
}

/// Tokenizer settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LexerConfig {
    /// Replaces the built-in keyword set when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,

    /// Added on top of the active keyword set.
    #[serde(default)]
    pub extra_keywords: Vec<String>,
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            output: default_output(),
            format: ReportFormat::default(),
            lexer: LexerConfig::default(),
        }
    }
}

impl LexerConfig {
    /// Builds the keyword set these settings describe.
    pub fn keyword_set(&self) -> KeywordSet {
        let base = match &self.keywords {
            Some(words) => KeywordSet::new(words.iter().cloned()),
            None => KeywordSet::default(),
        };
        base.extended(self.extra_keywords.iter().cloned())
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. User's home directory
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CliError::Config(format!("Failed to parse configuration: {}", e))
        })?;

        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            CliError::Config(format!("Failed to serialize configuration: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("lexfsm").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("lexfsm").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
