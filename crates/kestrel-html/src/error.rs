//! Parse failures.
//!
//! Every failure is fatal: the parse stops and no tree is returned. Each
//! error carries the position where it was raised plus the offending source
//! line and a caret line, so it can be shown without reopening the input.

use std::fmt;

use thiserror::Error;

/// A 1-based line and column in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Line number, starting at 1.
    pub line: usize,
    /// Column number, starting at 1. Counts characters, not bytes.
    pub column: usize,
}

impl Position {
    /// The position of the first character of any input.
    pub const START: Self = Self { line: 1, column: 1 };

    /// The `(line, column)` pair.
    #[must_use]
    pub const fn line_and_column(self) -> (usize, usize) {
        (self.line, self.column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A character that the grammar does not allow at this point.
    #[error("unexpected {found}, expected {expected}")]
    UnexpectedToken {
        /// The offending character, quoted, or `end of input`.
        found: String,
        /// What the grammar wanted here.
        expected: String,
    },

    /// A closing tag that does not match the innermost open element.
    #[error("mismatched closing tag: expected </{expected}>, found </{found}>")]
    TagMismatch {
        /// Tag name of the innermost open element.
        expected: String,
        /// Tag name found in the closing tag.
        found: String,
    },

    /// Input ended while elements were still open.
    #[error("{depth} unclosed tag(s) at end of input: {}", .tags.join(", "))]
    UnclosedTags {
        /// How many elements were still open.
        depth: usize,
        /// Their tag names, outermost first.
        tags: Vec<String>,
    },

    /// A scanner loop stopped making progress. Always a bug in the parser.
    #[error("internal error: {0}")]
    InternalError(String),
}

/// A parse failure with its location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {position}\n{source_line}\n{caret}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// Where the cursor was when it went wrong.
    pub position: Position,
    /// Full text of the source line at `position`.
    pub source_line: String,
    /// Spaces up to `column - 2` followed by `^`.
    pub caret: String,
}

impl ParseError {
    /// Attach location details to `kind`, taking the line text from `source`.
    #[must_use]
    pub fn new(kind: ParseErrorKind, source: &str, position: Position) -> Self {
        let source_line = source
            .lines()
            .nth(position.line.saturating_sub(1))
            .unwrap_or_default()
            .to_string();
        Self {
            kind,
            position,
            source_line,
            caret: caret_line(position.column),
        }
    }
}

/// The marker line printed under the source line.
///
/// The caret sits one column left of the cursor, which after most scans is
/// just past the offending character.
#[must_use]
pub fn caret_line(column: usize) -> String {
    format!("{}^", " ".repeat(column.saturating_sub(2)))
}

/// Describe a lookahead character for an error message.
#[must_use]
pub fn describe(c: Option<char>) -> String {
    c.map_or_else(|| "end of input".to_string(), |c| format!("{c:?}"))
}
