//! Tests for whitespace-only text pruning.

use kestrel_dom::normalize::is_blank;
use kestrel_dom::{DomTree, ElementData, NodeId, NodeType};

fn append(tree: &mut DomTree, parent: NodeId, node_type: NodeType) -> NodeId {
    let id = tree.alloc(node_type);
    tree.append_child(parent, id);
    id
}

fn text(s: &str) -> NodeType {
    NodeType::Text(s.to_string())
}

/// `<ul>\n  <li> a </li>\n  <!-- c -->\n</ul>`
fn sample() -> (DomTree, NodeId, NodeId) {
    let mut tree = DomTree::new();
    let ul = append(&mut tree, NodeId::ROOT, NodeType::Element(ElementData::new("ul")));
    let _ = append(&mut tree, ul, text("\n  "));
    let li = append(&mut tree, ul, NodeType::Element(ElementData::new("li")));
    let _ = append(&mut tree, li, text(" a "));
    let _ = append(&mut tree, ul, text("\n  "));
    let _ = append(&mut tree, ul, NodeType::Comment("c".to_string()));
    let _ = append(&mut tree, ul, text("\n"));
    (tree, ul, li)
}

#[test]
fn test_is_blank() {
    assert!(is_blank(""));
    assert!(is_blank(" \n\t\r"));
    assert!(!is_blank(" a "));
}

#[test]
fn test_normalize_removes_blank_text_only() {
    let (mut tree, ul, li) = sample();
    tree.normalize();

    let children = tree.children(ul);
    assert_eq!(children.len(), 2);
    assert_eq!(children[0], li);
    assert_eq!(tree.as_comment(children[1]), Some("c"));

    // Non-blank text keeps its surrounding whitespace.
    assert_eq!(tree.as_text(tree.children(li)[0]), Some(" a "));
}

#[test]
fn test_normalize_detaches_removed_text() {
    let (mut tree, ul, _) = sample();
    let before: Vec<_> = tree.children(ul).to_vec();
    tree.normalize();

    for id in before {
        let kept = tree.children(ul).contains(&id);
        assert_eq!(tree.parent(id).is_some(), kept);
    }
}

#[test]
fn test_normalize_is_idempotent() {
    let (mut once, _, _) = sample();
    once.normalize();
    let mut twice = once.clone();
    twice.normalize();
    assert_eq!(once, twice);
}

#[test]
fn test_normalize_top_level_whitespace() {
    let mut tree = DomTree::new();
    let _ = append(&mut tree, NodeId::ROOT, text("  "));
    let p = append(&mut tree, NodeId::ROOT, NodeType::Element(ElementData::new("p")));
    let _ = append(&mut tree, NodeId::ROOT, text("\n"));

    tree.normalize();
    assert_eq!(tree.children(NodeId::ROOT), &[p]);
}
