//! Tests for the serde view of the tree.

use kestrel_dom::json::NodeView;
use kestrel_dom::{Attribute, DomTree, ElementData, NodeId, NodeType};
use serde_json::json;

#[test]
fn test_json_document_shape() {
    let mut tree = DomTree::new();
    let mut a = ElementData::new("a");
    a.attrs.push(Attribute::new("href", "/x"));
    let a = tree.alloc(NodeType::Element(a));
    tree.append_child(NodeId::ROOT, a);
    let text = tree.alloc(NodeType::Text("link".to_string()));
    tree.append_child(a, text);
    let comment = tree.alloc(NodeType::Comment("note".to_string()));
    tree.append_child(NodeId::ROOT, comment);

    let value = serde_json::to_value(NodeView::document(&tree)).expect("serializable");
    assert_eq!(
        value,
        json!({
            "type": "document",
            "docType": "html",
            "children": [
                {
                    "type": "element",
                    "tagName": "a",
                    "selfClose": false,
                    "attributes": [{"name": "href", "value": "/x"}],
                    "children": [{"type": "text", "text": "link"}]
                },
                {"type": "comment", "text": "note"}
            ]
        })
    );
}

#[test]
fn test_json_subtree_view() {
    let mut tree = DomTree::new();
    let mut br = ElementData::new("br");
    br.self_close = true;
    let br = tree.alloc(NodeType::Element(br));
    tree.append_child(NodeId::ROOT, br);

    let value = serde_json::to_value(NodeView::new(&tree, br)).expect("serializable");
    assert_eq!(value["selfClose"], json!(true));
    assert_eq!(value["children"], json!([]));
}
