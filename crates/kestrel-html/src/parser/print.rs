use std::fmt::Write;

use kestrel_dom::serialize::attributes_to_string;
use kestrel_dom::{DomTree, NodeId, NodeType};

/// Print the subtree at `id` to stdout, one node per line.
pub fn print_tree(tree: &DomTree, id: NodeId, indent: usize) {
    print!("{}", tree_to_string(tree, id, indent));
}

/// Render the subtree at `id` as an indented outline.
///
/// Text is quoted with newlines shown as `\n` and spaces as `·`, so
/// whitespace-only runs stay visible.
#[must_use]
pub fn tree_to_string(tree: &DomTree, id: NodeId, indent: usize) -> String {
    let mut out = String::new();
    write_outline(tree, id, indent, &mut out);
    out
}

fn write_outline(tree: &DomTree, id: NodeId, indent: usize, out: &mut String) {
    let Some(node) = tree.get(id) else {
        return;
    };
    let prefix = "  ".repeat(indent);
    // Writing to a String cannot fail.
    let _ = match &node.node_type {
        NodeType::Document(data) => writeln!(out, "{prefix}Document ({})", data.doc_type),
        NodeType::Element(data) => {
            let close = if data.self_close { "/" } else { "" };
            writeln!(
                out,
                "{prefix}<{}{}{close}>",
                data.tag_name,
                attributes_to_string(&data.attrs)
            )
        }
        NodeType::Text(data) => {
            let display = data.replace('\n', "\\n").replace(' ', "\u{00B7}");
            writeln!(out, "{prefix}\"{display}\"")
        }
        NodeType::Comment(data) => writeln!(out, "{prefix}<!-- {data} -->"),
    };
    for &child_id in tree.children(id) {
        write_outline(tree, child_id, indent + 1, out);
    }
}
