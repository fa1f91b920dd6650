//! Strict HTML parser for the Kestrel concrete syntax tree.
//!
//! # Scope
//!
//! This crate implements:
//! - **Cursor** - forward-only scanning with line/column tracking
//! - **Tokenizing primitives** - tag names, attributes, comments, doctype
//! - **Parser** - single pass with an explicit stack of open elements
//! - **Errors** - positioned failures with the offending line and a caret
//!
//! The grammar is strict: every element must be closed by a matching
//! closing tag, by `/>`, or by being one of the void elements `meta`,
//! `link`, `br` and `hr`. Attribute values must be double-quoted.
//! Malformed input is an error, never repaired.
//!
//! # Not Implemented
//!
//! - Entity decoding
//! - Implicit tags and the other browser error-recovery rules
//! - Streaming input
//!
//! # Example
//!
//! ```
//! let tree = kestrel_html::parse(r#"<p class="x">hi<br></p>"#).unwrap();
//! assert_eq!(tree.to_string(), r#"<p class="x">hi<br /></p>"#);
//! ```

/// Source cursor with position tracking.
pub mod cursor;
/// Parse failures and their positions.
pub mod error;
/// HTML parser and tree construction.
pub mod parser;
/// Scanning primitives for tag pieces.
pub mod tokenizer;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind, Position};
pub use parser::{HTMLParser, parse, print_tree, tree_to_string};
