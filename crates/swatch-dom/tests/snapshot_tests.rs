//! Tests for the snapshot arena, the capability traits and the wire format.

use swatch_dom::{
    DocumentSnapshot, ElementData, ElementStyle, NodeId, SnapshotError, StyleError,
    StyleSnapshot, StylesheetSource,
};

fn sample() -> DocumentSnapshot {
    let mut doc = DocumentSnapshot::new();
    let body = doc.push(NodeId::ROOT, ElementData::new("BODY"));
    let header = doc.push(body, ElementData::new("header"));
    let _ = doc.push(header, ElementData::new("h1").with_text("Welcome"));
    let _ = doc.push(
        body,
        ElementData::new("p")
            .with_class("lead  intro")
            .with_style("color", "rgb(10, 20, 30)")
            .with_unreadable("font-size"),
    );
    doc.set_title("Sample");
    doc.insert_meta("og:title", "Sample OG");
    doc.add_stylesheet(
        StylesheetSource::External {
            href: "https://cdn.example.com/site.css".to_string(),
        },
        None,
    );
    doc.add_stylesheet(StylesheetSource::Inline, Some(4));
    doc
}

#[test]
fn test_elements_in_document_order() {
    let doc = sample();
    let tags: Vec<&str> = doc.elements().map(|element| element.tag_name()).collect();
    assert_eq!(tags, vec!["body", "header", "h1", "p"]);
    assert_eq!(doc.len(), 5);
    assert!(!doc.is_empty());
    assert!(DocumentSnapshot::new().is_empty());
}

#[test]
fn test_parent_and_children_links() {
    let doc = sample();
    let order = doc.iter_all();
    let body = order[0];
    assert_eq!(doc.parent(body), Some(NodeId::ROOT));
    assert_eq!(doc.children(body).len(), 2);
    assert_eq!(doc.parent(order[2]), Some(order[1]));
}

#[test]
fn test_computed_value_errors() {
    let doc = sample();
    let p = doc.elements().last().unwrap();
    assert_eq!(p.computed_value("color"), Ok("rgb(10, 20, 30)"));
    assert_eq!(
        p.computed_value("font-size"),
        Err(StyleError::Unreadable("font-size".to_string()))
    );
    assert_eq!(
        p.computed_value("line-height"),
        Err(StyleError::Missing("line-height".to_string()))
    );
}

#[test]
fn test_document_metadata() {
    let doc = sample();
    assert_eq!(doc.document_title(), Some("Sample"));
    assert_eq!(doc.meta_content("og:title"), Some("Sample OG"));
    assert_eq!(doc.meta_content("description"), None);
    assert_eq!(doc.stylesheets().len(), 2);
    assert_eq!(doc.stylesheets()[1].rule_count, Some(4));
}

#[test]
fn test_json_round_trip_preserves_structure() {
    let doc = sample();
    let json = doc.to_json().unwrap();
    let back = DocumentSnapshot::from_json(&json).unwrap();

    assert_eq!(back.iter_all().len(), 4);
    let original: Vec<&ElementData> = doc.iter_all().iter().filter_map(|&id| doc.as_element(id)).collect();
    let decoded: Vec<&ElementData> = back.iter_all().iter().filter_map(|&id| back.as_element(id)).collect();
    assert_eq!(original, decoded);
    assert_eq!(back.stylesheets(), doc.stylesheets());
    assert_eq!(back.document_title(), Some("Sample"));
    assert_eq!(back.to_json().unwrap(), json);
}

#[test]
fn test_from_json_in_page_payload() {
    let json = r#"{
        "url": "https://example.com/",
        "title": "Example",
        "meta": { "og:title": "Example Domain" },
        "elements": [
            { "tag": "BODY", "className": "", "parent": null, "style": { "color": "rgb(0, 0, 0)" } },
            { "tag": "h1", "className": "hero", "parent": 0, "text": "Hello", "style": {} },
            { "tag": "p", "parent": 0, "style": {}, "unreadable": ["color"] }
        ],
        "stylesheets": [
            { "source": { "kind": "external", "href": "https://x/y.css" }, "ruleCount": null },
            { "source": { "kind": "inline" }, "ruleCount": 12 }
        ]
    }"#;
    let doc = DocumentSnapshot::from_json(json).unwrap();
    assert_eq!(doc.url(), Some("https://example.com/"));
    let tags: Vec<&str> = doc.elements().map(|element| element.tag_name()).collect();
    assert_eq!(tags, vec!["body", "h1", "p"]);
    let h1 = doc.elements().nth(1).unwrap();
    assert_eq!(h1.class_name(), "hero");
    assert_eq!(h1.text_content(), Some("Hello"));
    assert!(doc.elements().nth(2).unwrap().computed_value("color").is_err());
    assert_eq!(doc.stylesheets()[0].rule_count, None);
}

#[test]
fn test_from_json_rejects_forward_parent() {
    let json = r#"{ "elements": [ { "tag": "p", "parent": 0 } ] }"#;
    match DocumentSnapshot::from_json(json) {
        Err(SnapshotError::DanglingParent { index, parent }) => {
            assert_eq!((index, parent), (0, 0));
        }
        other => panic!("expected dangling parent, got {other:?}"),
    }
}

#[test]
fn test_from_json_rejects_garbage() {
    assert!(matches!(
        DocumentSnapshot::from_json("not json"),
        Err(SnapshotError::Json(_))
    ));
}
