//! A `serde` view of the tree.
//!
//! The arena is flat, but consumers of a JSON dump want nesting, so
//! [`NodeView`] walks the children while serializing instead of deriving
//! `Serialize` on the arena itself.
//!
//! ```text
//! {"type":"document","docType":"html","children":[...]}
//! {"type":"element","tagName":"a","selfClose":false,"attributes":[{"name":..,"value":..}],"children":[...]}
//! {"type":"text","text":"..."}
//! {"type":"comment","text":"..."}
//! ```

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::{DomTree, NodeId, NodeType};

/// Borrowed view of one node and everything below it.
#[derive(Debug, Clone, Copy)]
pub struct NodeView<'a> {
    tree: &'a DomTree,
    id: NodeId,
}

impl<'a> NodeView<'a> {
    /// View of the subtree at `id`.
    #[must_use]
    pub const fn new(tree: &'a DomTree, id: NodeId) -> Self {
        Self { tree, id }
    }

    /// View of the whole document.
    #[must_use]
    pub const fn document(tree: &'a DomTree) -> Self {
        Self::new(tree, NodeId::ROOT)
    }
}

struct Children<'a>(NodeView<'a>);

impl Serialize for NodeView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let Some(node) = self.tree.get(self.id) else {
            return serializer.serialize_none();
        };
        let kind: &'static str = node.kind().into();

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", kind)?;
        match &node.node_type {
            NodeType::Document(data) => {
                map.serialize_entry("docType", &data.doc_type)?;
                map.serialize_entry("children", &Children(*self))?;
            }
            NodeType::Element(data) => {
                map.serialize_entry("tagName", &data.tag_name)?;
                map.serialize_entry("selfClose", &data.self_close)?;
                map.serialize_entry("attributes", &data.attrs)?;
                map.serialize_entry("children", &Children(*self))?;
            }
            NodeType::Text(text) | NodeType::Comment(text) => {
                map.serialize_entry("text", text)?;
            }
        }
        map.end()
    }
}

impl Serialize for Children<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let NodeView { tree, id } = self.0;
        let children = tree.children(id);
        let mut seq = serializer.serialize_seq(Some(children.len()))?;
        for &child in children {
            seq.serialize_element(&NodeView::new(tree, child))?;
        }
        seq.end()
    }
}
