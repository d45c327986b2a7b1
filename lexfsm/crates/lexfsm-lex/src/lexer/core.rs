//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use crate::anomaly::{Anomaly, AnomalyKind};
use crate::charclass::{classify, CharClass};
use crate::cursor::Cursor;
use crate::keywords::KeywordSet;
use crate::token::Token;

/// Scanner over one source text.
///
/// The lexer owns the cursor and lends it to a recognizer for the duration
/// of one token. It produces tokens one at a time and is finite: once
/// [`Lexer::next_token`] returns `None`, it keeps returning `None`.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Reserved words used for keyword promotion.
    keywords: &'a KeywordSet,

    /// Starting byte offset of the token being scanned.
    pub(crate) token_start: usize,

    /// Line where the current token starts (1-based).
    token_start_line: u32,

    /// Column where the current token starts (1-based).
    token_start_column: u32,

    /// Irregularities seen so far.
    anomalies: Vec<Anomaly>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source text.
    pub fn new(source: &'a str, keywords: &'a KeywordSet) -> Self {
        Self {
            cursor: Cursor::new(source),
            keywords,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            anomalies: Vec::new(),
        }
    }

    /// Returns the next token, or `None` once the input is exhausted.
    ///
    /// Whitespace is skipped. The class of the current character picks the
    /// recognizer: letters run the identifier FSM, digits the number FSM,
    /// operator leads and separators are read directly. Unrecognized
    /// characters are skipped, and a number the FSM rejects produces no
    /// token; the loop moves on in both cases.
    ///
    /// # Example
    ///
    /// ```
    /// use lexfsm_lex::{KeywordSet, Lexer, Token, TokenKind};
    ///
    /// let keywords = KeywordSet::default();
    /// let mut lexer = Lexer::new("x=5", &keywords);
    ///
    /// assert_eq!(lexer.next_token(), Some(Token::new(TokenKind::Identifier, "x")));
    /// assert_eq!(lexer.next_token(), Some(Token::new(TokenKind::Operator, "=")));
    /// assert_eq!(lexer.next_token(), Some(Token::new(TokenKind::Integer, "5")));
    /// assert_eq!(lexer.next_token(), None);
    /// ```
    pub fn next_token(&mut self) -> Option<Token> {
        while let Some(c) = self.cursor.current_char() {
            self.start_token();

            match classify(c) {
                CharClass::Whitespace => self.cursor.advance(),
                CharClass::Letter => {
                    if let Some(token) = self.lex_identifier() {
                        return Some(self.promote_keyword(token));
                    }
                },
                CharClass::Digit => {
                    if let Some(token) = self.lex_number() {
                        return Some(token);
                    }
                },
                CharClass::OperatorLead => return Some(self.lex_operator()),
                CharClass::Separator => return Some(self.lex_separator()),
                CharClass::Other => {
                    self.record(AnomalyKind::UnrecognizedCharacter(c));
                    self.cursor.advance();
                },
            }
        }

        None
    }

    /// Re-kinds an identifier whose lexeme is a reserved word.
    fn promote_keyword(&self, token: Token) -> Token {
        if self.keywords.contains(token.lexeme()) {
            token.into_keyword()
        } else {
            token
        }
    }

    fn start_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Records an anomaly at the start of the current token.
    pub(crate) fn record(&mut self, kind: AnomalyKind) {
        self.anomalies.push(Anomaly {
            kind,
            line: self.token_start_line,
            column: self.token_start_column,
        });
    }

    /// Returns the irregularities recorded so far, in source order.
    pub fn anomalies(&self) -> &[Anomaly] {
        &self.anomalies
    }

    /// Returns true once every character has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Tokenizes a whole source text.
///
/// # Example
///
/// ```
/// use lexfsm_lex::{tokenize, KeywordSet, TokenKind};
///
/// let tokens = tokenize("if a==b", &KeywordSet::default());
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Keyword, TokenKind::Identifier, TokenKind::Operator, TokenKind::Identifier]
/// );
/// ```
pub fn tokenize(source: &str, keywords: &KeywordSet) -> Vec<Token> {
    Lexer::new(source, keywords).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    fn lex(source: &str) -> Vec<Token> {
        tokenize(source, &KeywordSet::default())
    }

    fn tok(kind: TokenKind, lexeme: &str) -> Token {
        Token::new(kind, lexeme)
    }

    #[test]
    fn test_assignment() {
        assert_eq!(
            lex("x=5"),
            vec![
                tok(TokenKind::Identifier, "x"),
                tok(TokenKind::Operator, "="),
                tok(TokenKind::Integer, "5"),
            ]
        );
    }

    #[test]
    fn test_keyword_promotion() {
        assert_eq!(
            lex("while done"),
            vec![
                tok(TokenKind::Keyword, "while"),
                tok(TokenKind::Identifier, "done"),
            ]
        );
    }

    #[test]
    fn test_custom_keyword_set() {
        let keywords = KeywordSet::new(["let"]);
        assert_eq!(
            tokenize("let while", &keywords),
            vec![
                tok(TokenKind::Keyword, "let"),
                tok(TokenKind::Identifier, "while"),
            ]
        );
    }

    #[test]
    fn test_whitespace_skipped() {
        assert!(lex(" \t\n  \n").is_empty());
    }

    #[test]
    fn test_unrecognized_skipped_and_recorded() {
        let keywords = KeywordSet::default();
        let mut lexer = Lexer::new("a $\n  ?b", &keywords);
        let tokens: Vec<Token> = lexer.by_ref().collect();

        assert_eq!(
            tokens,
            vec![
                tok(TokenKind::Identifier, "a"),
                tok(TokenKind::Identifier, "b"),
            ]
        );
        assert_eq!(
            lexer.anomalies(),
            &[
                Anomaly {
                    kind: AnomalyKind::UnrecognizedCharacter('$'),
                    line: 1,
                    column: 3,
                },
                Anomaly {
                    kind: AnomalyKind::UnrecognizedCharacter('?'),
                    line: 2,
                    column: 3,
                },
            ]
        );
    }

    #[test]
    fn test_exhausted_stays_exhausted() {
        let keywords = KeywordSet::default();
        let mut lexer = Lexer::new("x", &keywords);
        assert!(lexer.next_token().is_some());
        assert!(lexer.is_exhausted());
        assert_eq!(lexer.next_token(), None);
        assert_eq!(lexer.next_token(), None);
    }

    #[test]
    fn test_trailing_whitespace_ends_cleanly() {
        let keywords = KeywordSet::default();
        let mut lexer = Lexer::new("x   ", &keywords);
        assert!(lexer.next_token().is_some());
        assert!(!lexer.is_exhausted());
        assert_eq!(lexer.next_token(), None);
        assert!(lexer.is_exhausted());
    }

    #[test]
    fn test_position_tracking() {
        let keywords = KeywordSet::default();
        let mut lexer = Lexer::new("ab\n  cd", &keywords);
        assert_eq!(lexer.position(), 0);
        lexer.next_token();
        assert_eq!((lexer.line(), lexer.column()), (1, 3));
        lexer.next_token();
        assert_eq!((lexer.line(), lexer.column()), (2, 5));
        assert_eq!(lexer.position(), 7);
    }
}
