//! Edge case tests for lexfsm-lex
