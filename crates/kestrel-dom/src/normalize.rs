use crate::{DomTree, NodeId, NodeKind};

/// True if the text has nothing but whitespace in it (or nothing at all).
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

impl DomTree {
    /// Remove every whitespace-only text node, in place.
    ///
    /// Recurses from the root into elements. Comments and non-blank text are
    /// left alone. Running it twice gives the same tree as running it once.
    pub fn normalize(&mut self) {
        self.normalize_from(NodeId::ROOT);
    }

    /// Same as [`DomTree::normalize`], limited to the subtree at `id`.
    pub fn normalize_from(&mut self, id: NodeId) {
        let children = self.children(id).to_vec();
        for child in children {
            match self.kind(child) {
                Some(NodeKind::Text) => {
                    if self.as_text(child).is_some_and(is_blank) {
                        self.remove_child(id, child);
                    }
                }
                Some(NodeKind::Element | NodeKind::Document) => self.normalize_from(child),
                Some(NodeKind::Comment) | None => {}
            }
        }
    }
}
