//! Character cursor for traversing source text.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source characters. It handles UTF-8 encoding
//! correctly and tracks line/column information for anomaly reporting.

/// A cursor for traversing source text character by character.
///
/// The cursor only moves forward. Once it runs past the last character,
/// [`Cursor::current_char`] returns `None` for good.
///
/// # Example
///
/// ```
/// use lexfsm_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("x = 4");
///
/// assert_eq!(cursor.current_char(), Some('x'));
/// cursor.advance();
/// assert_eq!(cursor.current_char(), Some(' '));
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character at the cursor, or `None` past the end.
    ///
    /// # Example
    ///
    /// ```
    /// use lexfsm_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a");
    /// assert_eq!(cursor.current_char(), Some('a'));
    /// cursor.advance();
    /// assert_eq!(cursor.current_char(), None);
    /// ```
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        let b = *self.source.as_bytes().get(self.position)?;

        // Fast path for ASCII (most common case)
        if b < 128 {
            return Some(b as char);
        }

        // Slow path for UTF-8
        self.source[self.position..].chars().next()
    }

    /// Advances the cursor to the next character.
    ///
    /// Updates line and column tracking. Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.current_char() else {
            return;
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.line = self.line.saturating_add(1);
            self.column = 1;
        } else {
            self.column = self.column.saturating_add(1);
        }
    }

    /// Returns true if the cursor is past the last character.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the source text between byte offset `start` and the cursor.
    ///
    /// # Example
    ///
    /// ```
    /// use lexfsm_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("if x");
    /// let start = cursor.position();
    /// cursor.advance();
    /// cursor.advance();
    /// assert_eq!(cursor.slice_from(start), "if");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }
}
