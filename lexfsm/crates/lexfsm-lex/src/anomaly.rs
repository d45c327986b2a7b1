//! Non-fatal input irregularities.
//!
//! The scanner never fails. Characters it cannot classify are skipped and a
//! number ending in a bare decimal point yields no token. Both are recorded
//! here so callers can report them if they want to.

use std::fmt;

/// What went wrong at a source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnomalyKind {
    /// A character outside every class was skipped.
    UnrecognizedCharacter(char),
    /// A digit run followed by `.` and no digit was dropped, e.g. `12.`.
    TrailingDecimalPoint(String),
}

/// A recorded irregularity and where it started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anomaly {
    /// The kind of anomaly.
    pub kind: AnomalyKind,
    /// Line of the first affected character (1-based).
    pub line: u32,
    /// Column of the first affected character (1-based).
    pub column: u32,
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            AnomalyKind::UnrecognizedCharacter(c) => write!(
                f,
                "{}:{}: skipped unrecognized character {:?}",
                self.line, self.column, c
            ),
            AnomalyKind::TrailingDecimalPoint(text) => write!(
                f,
                "{}:{}: dropped '{}' (no digit after decimal point)",
                self.line, self.column, text
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unrecognized() {
        let anomaly = Anomaly {
            kind: AnomalyKind::UnrecognizedCharacter('$'),
            line: 3,
            column: 7,
        };
        assert_eq!(anomaly.to_string(), "3:7: skipped unrecognized character '$'");
    }

    #[test]
    fn test_display_trailing_point() {
        let anomaly = Anomaly {
            kind: AnomalyKind::TrailingDecimalPoint("12.".to_string()),
            line: 1,
            column: 1,
        };
        assert_eq!(
            anomaly.to_string(),
            "1:1: dropped '12.' (no digit after decimal point)"
        );
    }
}
