//! Concrete syntax tree for the Kestrel HTML parser.
//!
//! The tree keeps source-level detail: raw text, trimmed comment text,
//! attribute order and duplicates, and whether an element was self-closed.
//!
//! # Design
//!
//! Nodes live in an arena and refer to each other through [`NodeId`]
//! indices, so the parser can hold "the current open element" on its stack
//! while the same node sits in its parent's child list.

use std::fmt;

use serde::Serialize;
use strum_macros::{Display, IntoStaticStr};

/// JSON view of the tree.
pub mod json;
/// Mapping the tree onto a host UI representation.
pub mod materialize;
/// Whitespace-only text pruning.
pub mod normalize;
/// Tree-to-markup serialization.
pub mod serialize;

pub use materialize::{Host, materialize, materialize_with};
pub use serialize::serialize;

/// Document type used when the source carries no `<!doctype ...>` directive.
pub const DEFAULT_DOC_TYPE: &str = "html";

/// A type-safe index into the tree.
///
/// `NodeId` provides O(1) access to any node in the tree without borrowing issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root document node is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// A single node of the tree together with its links.
///
/// Parent links are maintained by [`DomTree::append_child`] and
/// [`DomTree::remove_child`]; nothing else should write them.
#[derive(Debug, Clone)]
pub struct Node {
    /// What kind of node this is, with its payload.
    pub node_type: NodeType,

    /// The node this one is a child of, or `None` for the document and for
    /// detached nodes.
    pub parent: Option<NodeId>,

    /// Children in document order.
    pub children: Vec<NodeId>,
}

impl Node {
    const fn detached(node_type: NodeType) -> Self {
        Self {
            node_type,
            parent: None,
            children: Vec::new(),
        }
    }

    /// The kind of this node, without its payload.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self.node_type {
            NodeType::Document(_) => NodeKind::Document,
            NodeType::Element(_) => NodeKind::Element,
            NodeType::Text(_) => NodeKind::Text,
            NodeType::Comment(_) => NodeKind::Comment,
        }
    }
}

/// The four node variants of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeType {
    /// The root container. Exactly one per tree, always at [`NodeId::ROOT`].
    Document(DocumentData),
    /// A tag, with its attributes. Children hang off the owning [`Node`].
    Element(ElementData),
    /// A raw run of characters between tags. Never entity-decoded.
    Text(String),
    /// The trimmed text between `<!--` and `-->`.
    Comment(String),
}

/// Payload-free discriminant of [`NodeType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum NodeKind {
    /// [`NodeType::Document`]
    Document,
    /// [`NodeType::Element`]
    Element,
    /// [`NodeType::Text`]
    Text,
    /// [`NodeType::Comment`]
    Comment,
}

/// Document-specific data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentData {
    /// Raw text of the `<!doctype ...>` directive, or `"html"` if there was none.
    pub doc_type: String,
}

impl Default for DocumentData {
    fn default() -> Self {
        Self {
            doc_type: DEFAULT_DOC_TYPE.to_string(),
        }
    }
}

/// Element-specific data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    /// Tag name exactly as written in the source.
    pub tag_name: String,
    /// True if written as `<tag/>` or auto-closed as a void element.
    pub self_close: bool,
    /// Attributes in source order. Duplicate names are kept.
    pub attrs: Vec<Attribute>,
}

impl ElementData {
    /// Create an open (not self-closed) element with no attributes.
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            self_close: false,
            attrs: Vec::new(),
        }
    }

    /// Value of the first attribute with the given name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }
}

/// A `name="value"` pair on an element.
///
/// An attribute written without `=value` has an empty value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// Name as written; the parser accepts any non-delimiter characters.
    pub name: String,
    /// Unquoted value, escapes left as written.
    pub value: String,
}

impl Attribute {
    /// Create an attribute.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Arena-backed tree addressed by [`NodeId`].
///
/// Removing a child detaches it but leaves its slot in the arena. Equality
/// only looks at what is reachable from the root, and ignores the doctype
/// text because markup serialization does not carry it.
#[derive(Debug, Clone)]
pub struct DomTree {
    /// All nodes in the tree, indexed by `NodeId`.
    /// The Document node is always at index 0 (`NodeId::ROOT`).
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new tree with just the Document node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::detached(NodeType::Document(DocumentData::default()))],
        }
    }

    /// Get the root document node ID.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get a mutable reference to a node by its ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Number of arena slots, detached nodes included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (should always have at least the Document).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new node and return its ID.
    /// The node is not yet attached to the tree.
    pub fn alloc(&mut self, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::detached(node_type));
        id
    }

    /// Append `child` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// Detach `child` from `parent`. Its slot stays in the arena.
    ///
    /// Does nothing if `child` is not a child of `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        let Some(index) = self.nodes[parent.0].children.iter().position(|&c| c == child) else {
            return;
        };
        let _ = self.nodes[parent.0].children.remove(index);
        self.nodes[child.0].parent = None;
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Kind of the node, if it exists.
    #[must_use]
    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.get(id).map(Node::kind)
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Get mutable element data if this node is an element.
    pub fn as_element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id).and_then(|n| match &mut n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Get comment text if this node is a comment.
    #[must_use]
    pub fn as_comment(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Comment(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// The document's doctype text.
    #[must_use]
    pub fn doc_type(&self) -> &str {
        match self.get(NodeId::ROOT).map(|n| &n.node_type) {
            Some(NodeType::Document(data)) => &data.doc_type,
            _ => DEFAULT_DOC_TYPE,
        }
    }

    /// Overwrite the document's doctype text.
    pub fn set_doc_type(&mut self, doc_type: impl Into<String>) {
        if let Some(Node {
            node_type: NodeType::Document(data),
            ..
        }) = self.get_mut(NodeId::ROOT)
        {
            data.doc_type = doc_type.into();
        }
    }

    /// Compare the subtree at `a` in `self` with the subtree at `b` in `other`.
    ///
    /// Two document nodes match whatever their doctype text; compare
    /// [`DomTree::doc_type`] separately where it matters.
    #[must_use]
    pub fn subtree_eq(&self, a: NodeId, other: &Self, b: NodeId) -> bool {
        let (Some(left), Some(right)) = (self.get(a), other.get(b)) else {
            return false;
        };
        let same_node = match (&left.node_type, &right.node_type) {
            (NodeType::Document(_), NodeType::Document(_)) => true,
            (l, r) => l == r,
        };
        same_node
            && left.children.len() == right.children.len()
            && left
                .children
                .iter()
                .zip(&right.children)
                .all(|(&l, &r)| self.subtree_eq(l, other, r))
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for DomTree {
    fn eq(&self, other: &Self) -> bool {
        self.subtree_eq(NodeId::ROOT, other, NodeId::ROOT)
    }
}

impl Eq for DomTree {}

impl fmt::Display for DomTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self, NodeId::ROOT))
    }
}
