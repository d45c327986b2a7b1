//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `fsm` - Table-driven state machine runner
//! - `identifier` - Identifier FSM and keyword promotion
//! - `number` - Integer/real FSM
//! - `operator` - Operator and separator lexing

mod core;
mod fsm;
mod identifier;
mod number;
mod operator;

pub use self::core::{tokenize, Lexer};
