//! lexfsm-lex - table-driven tokenizer
//!
//! This crate turns source text into a stream of classified tokens. Each
//! multi-character token class is recognized by an explicit finite-state
//! machine; a dispatch loop picks the machine from the class of the current
//! character.
//!
//! # Example Usage
//!
//! ```
//! use lexfsm_lex::{KeywordSet, Lexer, Token, TokenKind};
//!
//! let keywords = KeywordSet::default();
//! let mut lexer = Lexer::new("if a==b: x = 12.5", &keywords);
//!
//! // Get tokens one at a time
//! assert_eq!(lexer.next_token(), Some(Token::new(TokenKind::Keyword, "if")));
//! assert_eq!(lexer.next_token(), Some(Token::new(TokenKind::Identifier, "a")));
//! assert_eq!(lexer.next_token(), Some(Token::new(TokenKind::Operator, "==")));
//!
//! // Or iterate through the rest
//! for token in &mut lexer {
//!     println!("{}", token);
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`charclass`] - Character classes and the operator/separator sets
//! - [`keywords`] - Reserved keyword set
//! - [`token`] - Token type definitions
//! - [`cursor`] - Character cursor for source traversal
//! - [`lexer`] - FSMs and the dispatch loop
//! - [`anomaly`] - Skipped characters and dropped numbers
//! - [`report`] - Table and JSON report writers
//!
//! # Token Kinds
//!
//! - **Identifier**: `[A-Za-z_][A-Za-z0-9_]*`
//! - **Keyword**: an identifier found in the [`KeywordSet`]
//! - **Integer**: `[0-9]+`
//! - **Real**: `[0-9]+\.[0-9]+`
//! - **Operator**: one operator-lead character, or two adjacent ones
//! - **Separator**: one of `( ) [ ] { } , ; : . @ # " '`
//!
//! Nothing here fails. Unknown characters are skipped, and a number ending
//! in a bare `.` (such as `12.`) yields no token. Both show up in
//! [`Lexer::anomalies`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod anomaly;
pub mod charclass;
pub mod cursor;
pub mod keywords;
pub mod lexer;
pub mod report;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use anomaly::{Anomaly, AnomalyKind};
pub use charclass::{classify, CharClass};
pub use cursor::Cursor;
pub use keywords::KeywordSet;
pub use lexer::{tokenize, Lexer};
pub use report::{write_report, ReportError, ReportFormat};
pub use token::{Token, TokenKind};

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<Token> {
        tokenize(source, &KeywordSet::default())
    }

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(Token::kind).collect()
    }

    #[test]
    fn test_function_definition() {
        let source = r#"
def area(width, height):
    return width * height
"#;
        let tokens = lex_all(source);

        assert_eq!(
            tokens.iter().map(Token::lexeme).collect::<Vec<_>>(),
            [
                "def", "area", "(", "width", ",", "height", ")", ":", "return", "width", "*",
                "height"
            ]
        );
        assert_eq!(tokens[0].kind(), TokenKind::Keyword);
        assert_eq!(tokens[1].kind(), TokenKind::Identifier);
        assert_eq!(tokens[8].kind(), TokenKind::Keyword);
        assert_eq!(tokens[10].kind(), TokenKind::Operator);
    }

    #[test]
    fn test_loop_with_compound_assignment() {
        let source = "while i <= 10:\n    total += i * 2.5\n    i += 1\n";
        let tokens = lex_all(source);

        assert_eq!(
            kinds(&tokens),
            [
                TokenKind::Keyword,
                TokenKind::Identifier,
                TokenKind::Operator,
                TokenKind::Integer,
                TokenKind::Separator,
                TokenKind::Identifier,
                TokenKind::Operator,
                TokenKind::Identifier,
                TokenKind::Operator,
                TokenKind::Real,
                TokenKind::Identifier,
                TokenKind::Operator,
                TokenKind::Integer,
            ]
        );
        assert!(tokens.contains(&Token::new(TokenKind::Operator, "<=")));
        assert!(tokens.contains(&Token::new(TokenKind::Operator, "+=")));
        assert!(tokens.contains(&Token::new(TokenKind::Real, "2.5")));
    }

    #[test]
    fn test_attribute_access() {
        let tokens = lex_all("obj.field");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Identifier, "obj"),
                Token::new(TokenKind::Separator, "."),
                Token::new(TokenKind::Identifier, "field"),
            ]
        );
    }

    #[test]
    fn test_comment_marker_is_a_separator() {
        let tokens = lex_all("# note");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Separator, "#"),
                Token::new(TokenKind::Identifier, "note"),
            ]
        );
    }

    #[test]
    fn test_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_whitespace_only() {
        assert!(lex_all("   \n\t  \n  ").is_empty());
    }
}
