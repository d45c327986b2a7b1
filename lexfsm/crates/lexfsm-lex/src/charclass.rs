//! Character classification for the scanner.
//!
//! Every character the scanner looks at falls into exactly one
//! [`CharClass`]. The class of the current character decides which
//! recognizer the dispatcher runs. All sets are ASCII-only; anything outside
//! them, including every non-ASCII character, is [`CharClass::Other`].

/// Canonical operator lexemes.
///
/// Only the single-character entries act as operator leads. Two-character
/// operators are assembled by the dispatcher from two adjacent leads, so a
/// lexeme such as `!=` is listed here but `!` on its own is not a lead.
pub const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "//", "==", "!=", ">", "<", ">=", "<=", "=", "+=", "-=", "*=", "/=",
    "%=", "**=", "//=", "&", "|", "^", "~", "<<", ">>",
];

/// Single-character separators.
pub const SEPARATORS: &[char] = &[
    '(', ')', '[', ']', '{', '}', ',', ';', ':', '.', '@', '#', '"', '\'',
];

/// Characters skipped between tokens.
pub const WHITESPACE: &[char] = &[' ', '\t', '\n'];

/// The class a single character belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// ASCII letter or underscore.
    Letter,
    /// ASCII decimal digit.
    Digit,
    /// Space, tab or newline.
    Whitespace,
    /// A character that may start an operator.
    OperatorLead,
    /// A single-character separator.
    Separator,
    /// Anything the scanner does not recognize.
    Other,
}

/// Classifies a character by set membership.
///
/// # Example
///
/// ```
/// use lexfsm_lex::charclass::{classify, CharClass};
///
/// assert_eq!(classify('x'), CharClass::Letter);
/// assert_eq!(classify('_'), CharClass::Letter);
/// assert_eq!(classify('7'), CharClass::Digit);
/// assert_eq!(classify('='), CharClass::OperatorLead);
/// assert_eq!(classify(';'), CharClass::Separator);
/// assert_eq!(classify('\t'), CharClass::Whitespace);
/// assert_eq!(classify('$'), CharClass::Other);
/// ```
pub fn classify(c: char) -> CharClass {
    if is_whitespace(c) {
        CharClass::Whitespace
    } else if is_letter(c) {
        CharClass::Letter
    } else if is_digit(c) {
        CharClass::Digit
    } else if is_operator_lead(c) {
        CharClass::OperatorLead
    } else if is_separator(c) {
        CharClass::Separator
    } else {
        CharClass::Other
    }
}

/// Returns true for ASCII letters and `_`.
#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true for ASCII digits `0`-`9`.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Returns true for space, tab and newline.
///
/// Carriage return is not in the set; it classifies as
/// [`CharClass::Other`] and is skipped as an unrecognized character.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    WHITESPACE.contains(&c)
}

/// Returns true if `c` is itself a single-character operator.
///
/// ```
/// use lexfsm_lex::charclass::is_operator_lead;
///
/// assert!(is_operator_lead('+'));
/// assert!(is_operator_lead('~'));
/// assert!(!is_operator_lead('!'));
/// ```
pub fn is_operator_lead(c: char) -> bool {
    OPERATORS.iter().any(|op| {
        let mut chars = op.chars();
        chars.next() == Some(c) && chars.next().is_none()
    })
}

/// Returns true for the single-character separators.
#[inline]
pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}
