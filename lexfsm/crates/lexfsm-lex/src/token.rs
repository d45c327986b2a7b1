//! Token definitions.

use std::fmt;

use serde::Serialize;

/// The classification assigned to a lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// Decimal integer literal, e.g. `42`.
    Integer,
    /// Name that is not a reserved word.
    Identifier,
    /// Reserved word.
    Keyword,
    /// One or two operator-lead characters.
    Operator,
    /// Single separator character.
    Separator,
    /// Decimal literal with a fractional part, e.g. `3.14`.
    Real,
}

impl TokenKind {
    /// Returns the display name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Integer => "Integer",
            TokenKind::Identifier => "Identifier",
            TokenKind::Keyword => "Keyword",
            TokenKind::Operator => "Operator",
            TokenKind::Separator => "Separator",
            TokenKind::Real => "Real",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so that width and alignment flags apply to the name
        f.pad(self.as_str())
    }
}

/// A classified lexeme.
///
/// Tokens are values: they are never mutated after construction and compare
/// equal when both kind and lexeme match.
///
/// # Example
///
/// ```
/// use lexfsm_lex::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::Identifier, "count");
/// assert_eq!(token.to_string(), "Identifier | count");
///
/// let token = Token::new(TokenKind::Real, "2.5");
/// assert_eq!(token.to_string(), "Real       | 2.5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }

    /// The token kind.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The matched source text.
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Re-kinds this token as a keyword, keeping its lexeme.
    pub(crate) fn into_keyword(self) -> Self {
        Self {
            kind: TokenKind::Keyword,
            lexeme: self.lexeme,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<10} | {}", self.kind, self.lexeme)
    }
}
