//! Tests for arena tree construction and mutation: append_child, remove_child, equality.

use kestrel_dom::{Attribute, DomTree, ElementData, NodeId, NodeKind, NodeType};

/// Helper to create an element node and return its NodeId.
fn alloc_element(tree: &mut DomTree, tag: &str) -> NodeId {
    tree.alloc(NodeType::Element(ElementData::new(tag)))
}

/// Helper to create a text node and return its NodeId.
fn alloc_text(tree: &mut DomTree, text: &str) -> NodeId {
    tree.alloc(NodeType::Text(text.to_string()))
}

// ========== construction ==========

#[test]
fn test_new_tree_has_document_root() {
    let tree = DomTree::new();
    assert_eq!(tree.len(), 1);
    assert!(!tree.is_empty());
    assert_eq!(tree.root(), NodeId::ROOT);
    assert_eq!(tree.kind(NodeId::ROOT), Some(NodeKind::Document));
    assert_eq!(tree.doc_type(), "html");
    assert!(tree.children(NodeId::ROOT).is_empty());
}

#[test]
fn test_set_doc_type() {
    let mut tree = DomTree::new();
    tree.set_doc_type(" html PUBLIC");
    assert_eq!(tree.doc_type(), " html PUBLIC");
}

#[test]
fn test_append_child_sets_parent_and_order() {
    let mut tree = DomTree::new();
    let div = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, div);

    let a = alloc_element(&mut tree, "a");
    let b = alloc_text(&mut tree, "b");
    tree.append_child(div, a);
    tree.append_child(div, b);

    assert_eq!(tree.children(div), &[a, b]);
    assert_eq!(tree.parent(a), Some(div));
    assert_eq!(tree.parent(b), Some(div));
    assert_eq!(tree.parent(div), Some(NodeId::ROOT));
    assert_eq!(tree.parent(NodeId::ROOT), None);
}

// ========== remove_child ==========

#[test]
fn test_remove_child_middle_of_three() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    let c = alloc_element(&mut tree, "c");
    tree.append_child(parent, a);
    tree.append_child(parent, b);
    tree.append_child(parent, c);

    tree.remove_child(parent, b);

    assert_eq!(tree.children(parent), &[a, c]);
    assert_eq!(tree.parent(b), None);
    assert_eq!(tree.parent(c), Some(parent));
}

#[test]
fn test_remove_child_not_a_child_is_noop() {
    let mut tree = DomTree::new();
    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    tree.append_child(NodeId::ROOT, a);

    tree.remove_child(a, b);

    assert_eq!(tree.children(NodeId::ROOT), &[a]);
    assert!(tree.children(a).is_empty());
}

// ========== element data ==========

#[test]
fn test_duplicate_attributes_are_kept_in_order() {
    let mut tree = DomTree::new();
    let input = alloc_element(&mut tree, "input");
    let data = tree.as_element_mut(input).expect("element");
    data.attrs.push(Attribute::new("class", "a"));
    data.attrs.push(Attribute::new("class", "b"));

    let data = tree.as_element(input).expect("element");
    assert_eq!(data.attrs.len(), 2);
    assert_eq!(data.attr("class"), Some("a"));
    assert_eq!(data.attrs[1].value, "b");
}

// ========== equality ==========

#[test]
fn test_equality_ignores_detached_nodes() {
    let mut left = DomTree::new();
    let p = alloc_element(&mut left, "p");
    left.append_child(NodeId::ROOT, p);
    let blank = alloc_text(&mut left, "  ");
    left.append_child(p, blank);
    left.remove_child(p, blank);

    let mut right = DomTree::new();
    let p = alloc_element(&mut right, "p");
    right.append_child(NodeId::ROOT, p);

    assert_ne!(left.len(), right.len());
    assert_eq!(left, right);
}

#[test]
fn test_equality_sees_attribute_and_flag_differences() {
    let mut left = DomTree::new();
    let a = alloc_element(&mut left, "br");
    left.append_child(NodeId::ROOT, a);

    let mut right = left.clone();
    assert_eq!(left, right);

    right.as_element_mut(a).expect("element").self_close = true;
    assert_ne!(left, right);

    left.as_element_mut(a).expect("element").self_close = true;
    left.as_element_mut(a)
        .expect("element")
        .attrs
        .push(Attribute::new("id", "x"));
    assert_ne!(left, right);
}

#[test]
fn test_equality_ignores_doc_type() {
    let mut left = DomTree::new();
    let html = alloc_element(&mut left, "html");
    left.append_child(NodeId::ROOT, html);

    let mut right = left.clone();
    right.set_doc_type(" html");

    assert_eq!(left, right);
    assert_ne!(left.doc_type(), right.doc_type());
}
