//! Number literal lexing.
//!
//! This module recognizes decimal integers (`42`) and reals (`3.14`). There
//! are no signs, exponents or radix prefixes.

use super::fsm::Machine;
use crate::anomaly::AnomalyKind;
use crate::charclass::is_digit;
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// States of the number recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberState {
    Start,
    /// Accepting: digits only so far.
    Integer,
    /// Digits followed by `.`, waiting for a fractional digit.
    Point,
    /// Accepting: digits, `.`, digits.
    Real,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberInput {
    Digit,
    Dot,
}

pub(crate) struct NumberFsm;

impl Machine for NumberFsm {
    type State = NumberState;
    type Input = NumberInput;

    const START: NumberState = NumberState::Start;

    const TRANSITIONS: &'static [(NumberState, NumberInput, NumberState)] = &[
        (NumberState::Start, NumberInput::Digit, NumberState::Integer),
        (NumberState::Integer, NumberInput::Digit, NumberState::Integer),
        (NumberState::Integer, NumberInput::Dot, NumberState::Point),
        (NumberState::Point, NumberInput::Digit, NumberState::Real),
        (NumberState::Real, NumberInput::Digit, NumberState::Real),
    ];

    fn input_of(c: char) -> Option<NumberInput> {
        match c {
            '.' => Some(NumberInput::Dot),
            c if is_digit(c) => Some(NumberInput::Digit),
            _ => None,
        }
    }
}

impl<'a> Lexer<'a> {
    /// Lexes an integer or real literal starting at the cursor.
    ///
    /// # Returns
    ///
    /// `Integer` or `Real` token when the machine halts in an accepting
    /// state. `None` when it halts right after the decimal point (`12.`):
    /// the consumed text is dropped and recorded as an anomaly.
    pub(crate) fn lex_number(&mut self) -> Option<Token> {
        let state = self.run_machine::<NumberFsm>();
        let text = self.cursor.slice_from(self.token_start);

        match state {
            NumberState::Integer => Some(Token::new(TokenKind::Integer, text)),
            NumberState::Real => Some(Token::new(TokenKind::Real, text)),
            NumberState::Point => {
                self.record(AnomalyKind::TrailingDecimalPoint(text.to_string()));
                None
            },
            NumberState::Start => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeywordSet;

    fn lex_num(source: &str) -> Option<Token> {
        let keywords = KeywordSet::default();
        let mut lexer = Lexer::new(source, &keywords);
        lexer.lex_number()
    }

    #[test]
    fn test_integer() {
        assert_eq!(lex_num("123"), Some(Token::new(TokenKind::Integer, "123")));
        assert_eq!(lex_num("0"), Some(Token::new(TokenKind::Integer, "0")));
        assert_eq!(lex_num("007"), Some(Token::new(TokenKind::Integer, "007")));
    }

    #[test]
    fn test_real() {
        assert_eq!(lex_num("12.5"), Some(Token::new(TokenKind::Real, "12.5")));
        assert_eq!(lex_num("0.001"), Some(Token::new(TokenKind::Real, "0.001")));
    }

    #[test]
    fn test_integer_stops_at_letter() {
        assert_eq!(lex_num("42abc"), Some(Token::new(TokenKind::Integer, "42")));
    }

    #[test]
    fn test_real_stops_at_second_point() {
        let keywords = KeywordSet::default();
        let mut lexer = Lexer::new("1.2.3", &keywords);
        assert_eq!(lexer.lex_number(), Some(Token::new(TokenKind::Real, "1.2")));
        assert_eq!(lexer.position(), 3);
    }

    #[test]
    fn test_trailing_point_is_dropped() {
        let keywords = KeywordSet::default();
        let mut lexer = Lexer::new("12.x", &keywords);
        assert_eq!(lexer.lex_number(), None);
        // "12." is consumed, "x" is left for the next token
        assert_eq!(lexer.position(), 3);
        assert_eq!(
            lexer.anomalies()[0].kind,
            AnomalyKind::TrailingDecimalPoint("12.".to_string())
        );
    }

    #[test]
    fn test_exponent_not_supported() {
        assert_eq!(lex_num("1e10"), Some(Token::new(TokenKind::Integer, "1")));
    }
}
