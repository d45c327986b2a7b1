//! Operator and separator lexing.

use crate::charclass::is_operator_lead;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a one- or two-character operator.
    ///
    /// Consumes the lead, then also the next character if it is a lead too.
    /// The pair is not checked against [`OPERATORS`](crate::charclass::OPERATORS),
    /// so `=-` or `*/` come out as single operator tokens.
    pub(crate) fn lex_operator(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.current_char().is_some_and(is_operator_lead) {
            self.cursor.advance();
        }
        Token::new(TokenKind::Operator, self.cursor.slice_from(self.token_start))
    }

    /// Lexes a single separator character.
    pub(crate) fn lex_separator(&mut self) -> Token {
        self.cursor.advance();
        Token::new(TokenKind::Separator, self.cursor.slice_from(self.token_start))
    }
}
