use kestrel_dom::{Attribute, DomTree, ElementData, NodeId, NodeType};

use crate::cursor::Cursor;
use crate::error::{ParseError, ParseErrorKind};
use crate::tokenizer::{COMMENT_START, DOCTYPE_NAME, ends_attribute_name};

/// Elements that close themselves at `>` even without a `/`.
pub const VOID_ELEMENTS: [&str; 4] = ["meta", "link", "br", "hr"];

/// Returns true if `tag_name` is one of [`VOID_ELEMENTS`] (case-sensitive).
#[must_use]
pub fn is_void_element(tag_name: &str) -> bool {
    VOID_ELEMENTS.contains(&tag_name)
}

/// Parse `input` into a tree.
///
/// # Errors
///
/// Returns the first [`ParseError`] hit; there is no partial tree.
pub fn parse(input: &str) -> Result<DomTree, ParseError> {
    HTMLParser::new(input).run()
}

/// Single-pass parser from source text to a [`DomTree`].
///
/// The parser looks at the cursor, decides which construct starts there
/// (closing tag, comment, doctype, opening tag or text), consumes it and
/// updates the tree, until the input runs out.
pub struct HTMLParser {
    /// Scanner over the source text.
    cursor: Cursor,

    /// The stack of open elements.
    ///
    /// Stores `NodeId`s into the arena. The document sits at the bottom and
    /// is never popped; everything above it is an element whose closing tag
    /// has not been seen yet.
    stack_of_open_elements: Vec<NodeId>,

    /// Tree being built. `NodeId::ROOT` (index 0) is the Document node.
    tree: DomTree,
}

impl HTMLParser {
    /// Create a parser over `input`.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            cursor: Cursor::new(input),
            stack_of_open_elements: vec![NodeId::ROOT],
            tree: DomTree::new(),
        }
    }

    /// Run the parser to the end of input and return the tree.
    ///
    /// # Errors
    ///
    /// Any grammar violation, a closing tag that does not match, or elements
    /// still open at the end of input.
    pub fn run(mut self) -> Result<DomTree, ParseError> {
        while self.step()? {}

        if self.stack_of_open_elements.len() > 1 {
            let tags: Vec<String> = self.stack_of_open_elements[1..]
                .iter()
                .filter_map(|&id| self.get_tag_name(id).map(str::to_string))
                .collect();
            return Err(self.cursor.error(ParseErrorKind::UnclosedTags {
                depth: tags.len(),
                tags,
            }));
        }
        Ok(self.tree)
    }

    /// Consume one construct. Returns `false` once the input is exhausted.
    fn step(&mut self) -> Result<bool, ParseError> {
        // STEP 1: "</" starts a closing tag.
        if self.cursor.next_few_characters_are("</") {
            self.parse_closing_tag()?;
            return Ok(true);
        }

        // STEP 2: "<!--" starts a comment.
        if self.cursor.next_few_characters_are(COMMENT_START) {
            let text = self.cursor.scan_comment()?;
            let comment = self.tree.alloc(NodeType::Comment(text));
            self.tree.append_child(self.current_node(), comment);
            return Ok(true);
        }

        // STEP 3: any other "<" starts a doctype or an opening tag.
        if self.cursor.current() == Some('<') {
            self.cursor.advance(1);
            let name = self.cursor.scan_tag_name()?;
            if name == DOCTYPE_NAME {
                self.parse_doctype()?;
            } else {
                self.parse_opening_tag(name)?;
            }
            return Ok(true);
        }

        // STEP 4: text up to the next "<".
        let text = self.cursor.scan_text()?;
        if !text.is_empty() {
            let node = self.tree.alloc(NodeType::Text(text));
            self.tree.append_child(self.current_node(), node);
            return Ok(true);
        }

        // STEP 5: nothing left.
        if self.cursor.is_at_end() {
            return Ok(false);
        }

        // STEP 6: nothing matched a non-empty position.
        Err(self.cursor.unexpected("tag, comment or text"))
    }

    /// `</name>`, with optional whitespace before the `>`.
    fn parse_closing_tag(&mut self) -> Result<(), ParseError> {
        self.cursor.advance(2);
        let raw = self.cursor.scan_until(|cursor| cursor.current() == Some('>'))?;
        let found = raw.trim_end();

        let current = self.current_node();
        let Some(expected) = self.get_tag_name(current) else {
            return Err(self.cursor.error(ParseErrorKind::UnexpectedToken {
                found: format!("</{found}>"),
                expected: "an open element to close".to_string(),
            }));
        };
        if expected != found {
            return Err(self.cursor.error(ParseErrorKind::TagMismatch {
                expected: expected.to_string(),
                found: found.to_string(),
            }));
        }

        self.cursor.expect(">", "end of closing tag")?;
        let _ = self.stack_of_open_elements.pop();
        Ok(())
    }

    /// The rest of `<!doctype ...>` once its name has been consumed.
    ///
    /// Only allowed while no element is open.
    fn parse_doctype(&mut self) -> Result<(), ParseError> {
        if self.current_node() != NodeId::ROOT {
            return Err(self.cursor.error(ParseErrorKind::UnexpectedToken {
                found: format!("<{DOCTYPE_NAME}"),
                expected: "doctype at document level".to_string(),
            }));
        }
        let doc_type = self.cursor.scan_doctype()?;
        self.tree.set_doc_type(doc_type);
        Ok(())
    }

    /// The rest of an opening tag once its name has been consumed.
    fn parse_opening_tag(&mut self, tag_name: String) -> Result<(), ParseError> {
        if tag_name.is_empty() {
            return Err(self.cursor.unexpected("tag name"));
        }

        let element = self.insert_element(tag_name);

        if self.cursor.next_few_characters_are("/>") {
            self.self_close(element);
            return Ok(());
        }
        if self.cursor.current() != Some('>') {
            self.parse_attributes(element)?;
        }

        if self.cursor.next_few_characters_are("/>") {
            self.self_close(element);
        } else if self.cursor.current() == Some('>') {
            self.cursor.advance(1);
            if self.get_tag_name(element).is_some_and(is_void_element) {
                self.close_void_element(element);
            }
        } else {
            return Err(self.cursor.unexpected("end of tag creation"));
        }
        Ok(())
    }

    /// Attributes up to `>` or `/>`, appended to `element` in source order.
    fn parse_attributes(&mut self, element: NodeId) -> Result<(), ParseError> {
        loop {
            self.cursor.skip_whitespace()?;
            if self.cursor.current() == Some('>') || self.cursor.next_few_characters_are("/>") {
                break;
            }
            // Anything that cannot start a name ends the list; the caller
            // reports it if it is not a valid tag end.
            if self.cursor.current().is_none_or(ends_attribute_name) {
                break;
            }

            let name = self.cursor.scan_attribute_name()?;
            let value = if self.cursor.current() == Some('=') {
                self.cursor.advance(1);
                self.cursor.scan_attribute_value()?
            } else {
                String::new()
            };

            if let Some(data) = self.tree.as_element_mut(element) {
                data.attrs.push(Attribute { name, value });
            }
        }
        Ok(())
    }

    /// Create an element, append it to the current node and push it onto
    /// the stack of open elements.
    fn insert_element(&mut self, tag_name: String) -> NodeId {
        let parent = self.current_node();
        let element = self.tree.alloc(NodeType::Element(ElementData::new(tag_name)));
        self.tree.append_child(parent, element);
        self.stack_of_open_elements.push(element);
        element
    }

    /// Consume `/>` and close `element` right away.
    fn self_close(&mut self, element: NodeId) {
        self.cursor.advance(2);
        self.close_void_element(element);
    }

    /// Mark `element` as self-closed and pop it. It must be the current node.
    fn close_void_element(&mut self, element: NodeId) {
        if let Some(data) = self.tree.as_element_mut(element) {
            data.self_close = true;
        }
        debug_assert_eq!(self.current_node(), element);
        let _ = self.stack_of_open_elements.pop();
    }

    /// The innermost open node: the top of the stack of open elements.
    fn current_node(&self) -> NodeId {
        self.stack_of_open_elements
            .last()
            .copied()
            .unwrap_or(NodeId::ROOT)
    }

    /// Get the tag name of a node, or `None` if it is not an element.
    fn get_tag_name(&self, id: NodeId) -> Option<&str> {
        self.tree.as_element(id).map(|data| data.tag_name.as_str())
    }
}
