//! Command modules for the lexfsm CLI.
//!
//! Each command is implemented in its own file following the pattern set by
//! [`traits::Command`].

pub mod common;
pub mod traits;

pub mod save_config;
pub mod tokenize;

// Re-export command types and functions
pub use save_config::run_save_config;
pub use tokenize::{run_tokenize, TokenizeArgs, TokenizeSummary};
