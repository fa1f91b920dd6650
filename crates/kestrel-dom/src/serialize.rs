use crate::{Attribute, DomTree, NodeId, NodeType};

/// Render the subtree at `id` back to markup.
///
/// - Document: its children, concatenated. The doctype is not emitted.
/// - Text: unchanged.
/// - Comment: `<!-- text -->`.
/// - Element: `<tag attrs>children</tag>`, or `<tag attrs/>` when self-closed.
///   A self-closed element always gets a space before the slash, so one
///   without attributes comes out as `<tag />`.
#[must_use]
pub fn serialize(tree: &DomTree, id: NodeId) -> String {
    let mut out = String::new();
    write_node(tree, id, &mut out);
    out
}

fn write_node(tree: &DomTree, id: NodeId, out: &mut String) {
    let Some(node) = tree.get(id) else {
        return;
    };
    match &node.node_type {
        NodeType::Document(_) => write_children(tree, id, out),
        NodeType::Text(text) => out.push_str(text),
        NodeType::Comment(text) => {
            out.push_str("<!-- ");
            out.push_str(text);
            out.push_str(" -->");
        }
        NodeType::Element(data) if data.self_close => {
            out.push('<');
            out.push_str(&data.tag_name);
            if data.attrs.is_empty() {
                out.push(' ');
            } else {
                out.push_str(&attributes_to_string(&data.attrs));
            }
            out.push_str("/>");
        }
        NodeType::Element(data) => {
            out.push('<');
            out.push_str(&data.tag_name);
            out.push_str(&attributes_to_string(&data.attrs));
            out.push('>');
            write_children(tree, id, out);
            out.push_str("</");
            out.push_str(&data.tag_name);
            out.push('>');
        }
    }
}

fn write_children(tree: &DomTree, id: NodeId, out: &mut String) {
    for &child in tree.children(id) {
        write_node(tree, child, out);
    }
}

/// Space-joined `name="value"` pairs (bare `name` for empty values), with a
/// leading space. Empty when there are no attributes.
#[must_use]
pub fn attributes_to_string(attrs: &[Attribute]) -> String {
    attrs
        .iter()
        .map(|attr| {
            if attr.value.is_empty() {
                format!(" {}", attr.name)
            } else {
                format!(" {}=\"{}\"", attr.name, attr.value)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ElementData;

    fn element(tree: &mut DomTree, parent: NodeId, data: ElementData) -> NodeId {
        let id = tree.alloc(NodeType::Element(data));
        tree.append_child(parent, id);
        id
    }

    #[test]
    fn self_closing_without_attributes_keeps_the_space() {
        let mut tree = DomTree::new();
        let mut br = ElementData::new("br");
        br.self_close = true;
        let _ = element(&mut tree, NodeId::ROOT, br);
        assert_eq!(serialize(&tree, NodeId::ROOT), "<br />");
    }

    #[test]
    fn self_closing_with_attributes_has_single_space() {
        let mut tree = DomTree::new();
        let mut input = ElementData::new("input");
        input.self_close = true;
        input.attrs.push(Attribute::new("type", "text"));
        input.attrs.push(Attribute::new("disabled", ""));
        let _ = element(&mut tree, NodeId::ROOT, input);
        assert_eq!(
            serialize(&tree, NodeId::ROOT),
            r#"<input type="text" disabled/>"#
        );
    }

    #[test]
    fn nested_elements_text_and_comments() {
        let mut tree = DomTree::new();
        let mut div = ElementData::new("div");
        div.attrs.push(Attribute::new("id", "main"));
        let div = element(&mut tree, NodeId::ROOT, div);
        let text = tree.alloc(NodeType::Text("hi ".to_string()));
        tree.append_child(div, text);
        let comment = tree.alloc(NodeType::Comment("note".to_string()));
        tree.append_child(div, comment);

        assert_eq!(
            serialize(&tree, NodeId::ROOT),
            r#"<div id="main">hi <!-- note --></div>"#
        );
        assert_eq!(tree.to_string(), serialize(&tree, NodeId::ROOT));
    }
}
