//! Reserved keyword set.
//!
//! The dispatcher promotes an identifier to a keyword when its lexeme is a
//! member of the active [`KeywordSet`]. The default set is the Python
//! keyword list; callers can replace or extend it.

use rustc_hash::FxHashSet;

/// The default reserved words.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

/// An immutable set of reserved words.
///
/// # Example
///
/// ```
/// use lexfsm_lex::KeywordSet;
///
/// let keywords = KeywordSet::default();
/// assert!(keywords.contains("while"));
/// assert!(!keywords.contains("While"));
///
/// let custom = KeywordSet::new(["let", "fn"]);
/// assert!(custom.contains("fn"));
/// assert!(!custom.contains("while"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    words: FxHashSet<String>,
}

impl KeywordSet {
    /// Builds a keyword set from the given words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds an empty set; every identifier stays an identifier.
    pub fn empty() -> Self {
        Self {
            words: FxHashSet::default(),
        }
    }

    /// Returns a copy of this set with `extra` words added.
    pub fn extended<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(extra.into_iter().map(Into::into));
        self
    }

    /// Returns true if `lexeme` is a reserved word. Matching is case-sensitive.
    #[inline]
    pub fn contains(&self, lexeme: &str) -> bool {
        self.words.contains(lexeme)
    }

    /// Number of reserved words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the set has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS.iter().copied())
    }
}
