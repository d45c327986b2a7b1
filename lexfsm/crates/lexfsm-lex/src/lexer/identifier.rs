//! Identifier lexing.
//!
//! Identifiers are a letter followed by any run of letters and digits. The
//! underscore counts as a letter.

use super::fsm::Machine;
use crate::charclass::{is_digit, is_letter};
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// States of the identifier recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IdentState {
    Start,
    /// Accepting.
    InIdent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IdentInput {
    Letter,
    Digit,
}

pub(crate) struct IdentifierFsm;

impl Machine for IdentifierFsm {
    type State = IdentState;
    type Input = IdentInput;

    const START: IdentState = IdentState::Start;

    const TRANSITIONS: &'static [(IdentState, IdentInput, IdentState)] = &[
        (IdentState::Start, IdentInput::Letter, IdentState::InIdent),
        (IdentState::InIdent, IdentInput::Letter, IdentState::InIdent),
        (IdentState::InIdent, IdentInput::Digit, IdentState::InIdent),
    ];

    fn input_of(c: char) -> Option<IdentInput> {
        if is_letter(c) {
            Some(IdentInput::Letter)
        } else if is_digit(c) {
            Some(IdentInput::Digit)
        } else {
            None
        }
    }
}

impl<'a> Lexer<'a> {
    /// Lexes an identifier starting at the cursor.
    ///
    /// Always produces [`TokenKind::Identifier`]; keyword promotion is the
    /// dispatcher's job. Returns `None` if the cursor is not on a letter,
    /// which the dispatcher never does.
    pub(crate) fn lex_identifier(&mut self) -> Option<Token> {
        match self.run_machine::<IdentifierFsm>() {
            IdentState::InIdent => Some(Token::new(
                TokenKind::Identifier,
                self.cursor.slice_from(self.token_start),
            )),
            IdentState::Start => None,
        }
    }
}
