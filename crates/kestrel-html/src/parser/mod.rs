//! HTML parser module for tree construction.

/// Parser driver and the stack of open elements.
pub mod core;
/// Debug dump of a parsed tree.
pub mod print;

pub use self::core::{HTMLParser, VOID_ELEMENTS, is_void_element, parse};
pub use print::{print_tree, tree_to_string};
