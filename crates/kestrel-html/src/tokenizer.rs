//! Scanning primitives for the pieces of a tag.
//!
//! Each primitive starts at the cursor, consumes one construct and returns
//! its raw text. None of them decode anything: entities, escapes and
//! whitespace inside values come back exactly as written.

use crate::cursor::{Cursor, is_whitespace};
use crate::error::ParseError;

/// Literal that opens a comment.
pub const COMMENT_START: &str = "<!--";
/// Literal that closes a comment.
pub const COMMENT_END: &str = "-->";
/// Tag name that introduces a doctype directive. Case-sensitive.
pub const DOCTYPE_NAME: &str = "!doctype";

/// Characters that end an attribute name.
#[must_use]
pub const fn ends_attribute_name(c: char) -> bool {
    is_whitespace(c) || matches!(c, '=' | '/' | '>')
}

/// Characters that end a tag name.
#[must_use]
pub const fn ends_tag_name(c: char) -> bool {
    is_whitespace(c) || matches!(c, '/' | '>')
}

impl Cursor {
    /// Consume an attribute name: everything up to whitespace, `=`, `/` or `>`.
    ///
    /// # Errors
    ///
    /// Fails with "attribute name" if no character was consumed.
    pub fn scan_attribute_name(&mut self) -> Result<String, ParseError> {
        let name = self.scan_until(|cursor| cursor.current_is(ends_attribute_name))?;
        if name.is_empty() {
            return Err(self.unexpected("attribute name"));
        }
        Ok(name)
    }

    /// Consume a double-quoted attribute value and return it without quotes.
    ///
    /// `""` is a valid empty value. Inside the quotes, a `"` preceded by a
    /// backslash does not end the value, and the backslash is kept.
    ///
    /// # Errors
    ///
    /// Fails with "attribute value" if the value does not start with `"`,
    /// and with "closing quote" if the input ends first.
    pub fn scan_attribute_value(&mut self) -> Result<String, ParseError> {
        self.expect("\"", "attribute value")?;
        if self.current() == Some('"') {
            self.advance(1);
            return Ok(String::new());
        }

        let value = self.scan_until(|cursor| {
            cursor.current() == Some('"') && cursor.previous() != Some('\\')
        })?;
        if value.is_empty() {
            return Err(self.unexpected("attribute value"));
        }
        self.expect("\"", "closing quote")?;
        Ok(value)
    }

    /// Consume a tag name: everything up to whitespace, `/` or `>`.
    ///
    /// May return an empty string; the caller decides whether that is an
    /// error.
    ///
    /// # Errors
    ///
    /// See [`Cursor::scan_until`].
    pub fn scan_tag_name(&mut self) -> Result<String, ParseError> {
        self.scan_until(|cursor| cursor.current_is(ends_tag_name))
    }

    /// Consume `<!-- text -->` and return the trimmed text.
    ///
    /// The text runs up to the first `--`, which must be followed by `>`.
    /// This is stricter than stopping at `--` and skipping three characters
    /// blindly: `<!-- a -- b -->` is rejected instead of resyncing mid-text.
    ///
    /// # Errors
    ///
    /// Fails with "end of comment" if the first `--` is not part of `-->`
    /// or the input ends first.
    pub fn scan_comment(&mut self) -> Result<String, ParseError> {
        self.expect(COMMENT_START, "comment")?;
        let text = self.scan_until(|cursor| cursor.next_few_characters_are("--"))?;
        self.expect(COMMENT_END, "end of comment")?;
        Ok(text.trim().to_string())
    }

    /// Consume the rest of a doctype directive after its name, up to and
    /// including `>`, and return the raw text between.
    ///
    /// # Errors
    ///
    /// Fails with "end of doctype" if the input ends before `>`.
    pub fn scan_doctype(&mut self) -> Result<String, ParseError> {
        let text = self.scan_until(|cursor| cursor.current() == Some('>'))?;
        self.expect(">", "end of doctype")?;
        Ok(text)
    }

    /// Consume a run of text up to the next `<` or the end of input.
    ///
    /// # Errors
    ///
    /// See [`Cursor::scan_until`].
    pub fn scan_text(&mut self) -> Result<String, ParseError> {
        self.scan_until(|cursor| cursor.current() == Some('<'))
    }
}
