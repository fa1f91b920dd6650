//! Forward-only cursor over the source text.
//!
//! The cursor owns the input and a byte offset into it, and keeps the
//! 1-based line and column of that offset up to date as it advances. End of
//! input is never an error at this level: lookahead past the end returns
//! `None` or a shorter string, and advancing past the end does nothing.

use crate::error::{ParseError, ParseErrorKind, Position, describe};

/// Whitespace that separates tag names and attributes.
#[must_use]
pub const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\n' | '\t' | '\r')
}

/// Source text plus the scanning position.
#[derive(Debug, Clone)]
pub struct Cursor {
    input: String,
    /// Byte offset of the next character.
    pos: usize,
    line: usize,
    column: usize,
}

impl Cursor {
    /// Create a cursor at the start of `input`.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            pos: 0,
            line: Position::START.line,
            column: Position::START.column,
        }
    }

    /// Byte offset of the next character.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.pos
    }

    /// Line and column of the next character.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    /// True once every character has been consumed.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The character `offset` characters ahead, or `None` past the end.
    #[must_use]
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(offset)
    }

    /// The next character, or `None` at the end.
    #[must_use]
    pub fn current(&self) -> Option<char> {
        self.peek(0)
    }

    /// The character just consumed, or `None` at the start.
    #[must_use]
    pub fn previous(&self) -> Option<char> {
        self.input[..self.pos].chars().next_back()
    }

    /// Up to `n` characters ahead, shorter near the end of input.
    #[must_use]
    pub fn lookahead(&self, n: usize) -> &str {
        let rest = &self.input[self.pos..];
        let end = rest.char_indices().nth(n).map_or(rest.len(), |(i, _)| i);
        &rest[..end]
    }

    /// Check if the next few characters match `target` exactly.
    #[must_use]
    pub fn next_few_characters_are(&self, target: &str) -> bool {
        self.input[self.pos..].starts_with(target)
    }

    /// Returns true if the next character satisfies `predicate`.
    #[must_use]
    pub fn current_is(&self, predicate: impl Fn(char) -> bool) -> bool {
        self.current().is_some_and(predicate)
    }

    /// Move forward `n` characters, tracking newlines. Stops at the end.
    pub fn advance(&mut self, n: usize) {
        for _ in 0..n {
            let Some(c) = self.current() else {
                return;
            };
            self.pos += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Consume characters until `stop` holds or the input ends, returning
    /// what was consumed.
    ///
    /// # Errors
    ///
    /// Returns [`ParseErrorKind::InternalError`] if an iteration fails to
    /// move the cursor.
    pub fn scan_until<F>(&mut self, mut stop: F) -> Result<String, ParseError>
    where
        F: FnMut(&Self) -> bool,
    {
        let start = self.pos;
        while !self.is_at_end() && !stop(self) {
            let before = self.pos;
            self.advance(1);
            // `advance` always moves before the end; this only trips if that breaks.
            if self.pos == before {
                return Err(self.error(ParseErrorKind::InternalError(
                    "infinite loop".to_string(),
                )));
            }
        }
        Ok(self.input[start..self.pos].to_string())
    }

    /// Consume characters while `keep` holds, returning what was consumed.
    ///
    /// # Errors
    ///
    /// See [`Cursor::scan_until`].
    pub fn scan_while<F>(&mut self, mut keep: F) -> Result<String, ParseError>
    where
        F: FnMut(&Self) -> bool,
    {
        self.scan_until(|cursor| !keep(cursor))
    }

    /// Skip spaces, tabs and line breaks.
    ///
    /// # Errors
    ///
    /// See [`Cursor::scan_until`].
    pub fn skip_whitespace(&mut self) -> Result<(), ParseError> {
        let _ = self.scan_while(|cursor| cursor.current_is(is_whitespace))?;
        Ok(())
    }

    /// Consume `literal`, or fail naming `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseErrorKind::UnexpectedToken`] if the input does not
    /// continue with `literal`.
    pub fn expect(&mut self, literal: &str, expected: &str) -> Result<(), ParseError> {
        if self.next_few_characters_are(literal) {
            self.advance(literal.chars().count());
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// An [`ParseErrorKind::UnexpectedToken`] for the next character.
    #[must_use]
    pub fn unexpected(&self, expected: &str) -> ParseError {
        self.error(ParseErrorKind::UnexpectedToken {
            found: describe(self.current()),
            expected: expected.to_string(),
        })
    }

    /// Attach the current position and source line to `kind`.
    #[must_use]
    pub fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, &self.input, self.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_moves_on_every_character_kind() {
        for c in ['a', '\n', '\r', 'é', '語', '🦀'] {
            let input = c.to_string();
            let mut cursor = Cursor::new(input.as_str());
            cursor.advance(1);
            assert_eq!(cursor.offset(), input.len(), "no progress over {c:?}");
        }
    }

    #[test]
    fn scan_until_never_reports_no_progress() {
        let mut cursor = Cursor::new("a\né語🦀\r\n<");
        let scanned = cursor.scan_until(|cursor| cursor.current() == Some('<')).unwrap();
        assert_eq!(scanned, "a\né語🦀\r\n");
        assert_eq!(cursor.position(), Position { line: 3, column: 1 });

        let scanned = cursor.scan_until(|_| false).unwrap();
        assert_eq!(scanned, "<");
        assert!(cursor.is_at_end());
    }
}
