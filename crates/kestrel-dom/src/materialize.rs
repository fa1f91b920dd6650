//! Building a host-side UI tree from the CST.
//!
//! The host environment (a widget toolkit, a browser DOM binding, a test
//! double) is abstracted behind [`Host`]. The walk itself is fixed:
//!
//! 1. Create the host construct for the node.
//! 2. For elements, apply each attribute whose name matches
//!    [`LIVE_ATTRIBUTE_PATTERN`] as a live attribute, then attach the full
//!    raw attribute list as metadata whether or not anything was filtered.
//! 3. Materialize and append the children in document order.
//! 4. Hand the finished construct to the visitor; if it returns a
//!    replacement, that replacement is what the parent receives.

use std::sync::LazyLock;

use kestrel_common::warning::warn_once;
use regex::Regex;

use crate::{Attribute, DocumentData, DomTree, Node, NodeId, NodeType};

/// Names a host may apply as live attributes. Everything else is only
/// visible through [`Host::set_raw_attributes`].
pub const LIVE_ATTRIBUTE_PATTERN: &str = "^[a-z][a-z0-9-]+$";

static LIVE_ATTRIBUTE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(LIVE_ATTRIBUTE_PATTERN).expect("live attribute pattern is a valid regex")
});

/// Returns true if `name` can be applied as a live attribute.
#[must_use]
pub fn is_live_attribute_name(name: &str) -> bool {
    LIVE_ATTRIBUTE_NAME.is_match(name)
}

/// The host UI environment a tree is materialized into.
pub trait Host {
    /// The host's node construct.
    type Output;

    /// Create the construct standing for the whole document.
    fn create_document(&mut self, data: &DocumentData) -> Self::Output;

    /// Create an element construct.
    fn create_element(&mut self, tag_name: &str) -> Self::Output;

    /// Create a text construct.
    fn create_text(&mut self, text: &str) -> Self::Output;

    /// Create a comment construct.
    fn create_comment(&mut self, text: &str) -> Self::Output;

    /// Apply a live attribute. Only called for names accepted by
    /// [`is_live_attribute_name`].
    fn set_attribute(&mut self, target: &mut Self::Output, name: &str, value: &str);

    /// Attach the element's complete, unfiltered attribute list as metadata.
    fn set_raw_attributes(&mut self, target: &mut Self::Output, attrs: &[Attribute]);

    /// Append `child` as the last child of `parent`.
    fn append_child(&mut self, parent: &mut Self::Output, child: Self::Output);
}

/// Materialize the subtree at `id` without a visitor.
///
/// Returns `None` if `id` is not in the tree.
pub fn materialize<H: Host>(host: &mut H, tree: &DomTree, id: NodeId) -> Option<H::Output> {
    materialize_with(host, tree, id, &mut |_, _, _| None)
}

/// Materialize the subtree at `id`, calling `visitor` on every produced
/// construct after its children have been attached.
///
/// The visitor receives the construct, the node's id and the node itself. A
/// `Some` return replaces the construct; `None` keeps it.
pub fn materialize_with<H, V>(
    host: &mut H,
    tree: &DomTree,
    id: NodeId,
    visitor: &mut V,
) -> Option<H::Output>
where
    H: Host,
    V: FnMut(&H::Output, NodeId, &Node) -> Option<H::Output>,
{
    let node = tree.get(id)?;
    let mut output = match &node.node_type {
        NodeType::Document(data) => host.create_document(data),
        NodeType::Text(text) => host.create_text(text),
        NodeType::Comment(text) => host.create_comment(text),
        NodeType::Element(data) => {
            let mut element = host.create_element(&data.tag_name);
            for attr in &data.attrs {
                if is_live_attribute_name(&attr.name) {
                    host.set_attribute(&mut element, &attr.name, &attr.value);
                } else {
                    warn_once(
                        "Materialize",
                        &format!(
                            "attribute `{}` on <{}> is not a live attribute name",
                            attr.name, data.tag_name
                        ),
                    );
                }
            }
            host.set_raw_attributes(&mut element, &data.attrs);
            element
        }
    };

    for &child in &node.children {
        if let Some(child_output) = materialize_with(host, tree, child, visitor) {
            host.append_child(&mut output, child_output);
        }
    }

    Some(visitor(&output, id, node).unwrap_or(output))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_attribute_names() {
        assert!(is_live_attribute_name("type"));
        assert!(is_live_attribute_name("data-id"));
        assert!(is_live_attribute_name("h1"));
        assert!(!is_live_attribute_name("[type]"));
        assert!(!is_live_attribute_name("Type"));
        assert!(!is_live_attribute_name("1a"));
        // The pattern needs at least two characters.
        assert!(!is_live_attribute_name("x"));
    }
}
