use serde_json::json;
use tabula::path::{DataIndex, resolve};
use tabula::value::display_node;
use tabula::DisplayNode;

// ============================================================================
// DataIndex
// ============================================================================

#[test]
fn test_empty_string_is_whole_record() {
    assert!(DataIndex::from("").is_whole());
    assert!(DataIndex::from(None::<&str>).is_whole());
    assert!(DataIndex::from(Vec::<String>::new()).is_whole());
    assert!(DataIndex::whole().is_whole());
}

#[test]
fn test_dotted_path_splits_into_segments() {
    let index = DataIndex::from("name.first");
    assert_eq!(index.segments(), &["name".to_string(), "first".to_string()]);
    assert_eq!(index.joined(), Some("name.first".to_string()));
}

#[test]
fn test_explicit_segments_are_not_split() {
    let index = DataIndex::from(vec!["a.b", "c"]);
    assert_eq!(index.segments().len(), 2);
    assert_eq!(index.segments()[0], "a.b");
}

#[test]
fn test_deserialize_falsy_values() {
    for raw in ["null", "\"\"", "[]"] {
        let index: DataIndex = serde_json::from_str(raw).unwrap();
        assert!(index.is_whole(), "{raw} should resolve to the whole record");
    }
    let index: DataIndex = serde_json::from_str("\"name.last\"").unwrap();
    assert_eq!(index, DataIndex::from("name.last"));
    let index: DataIndex = serde_json::from_str("2").unwrap();
    assert_eq!(index, DataIndex::from(2usize));
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn test_whole_record_returned_unchanged() {
    let record = json!({ "key": "key0", "name": "Lucy" });
    for index in [
        DataIndex::from(""),
        DataIndex::from(None::<&str>),
        DataIndex::from(Vec::<String>::new()),
    ] {
        assert_eq!(resolve(&record, &index), Some(&record));
    }
}

#[test]
fn test_nested_path() {
    let record = json!({ "name": { "first": "John", "last": "Doe" } });
    assert_eq!(resolve(&record, &"name.first".into()), Some(&json!("John")));
    assert_eq!(resolve(&record, &"name.last".into()), Some(&json!("Doe")));
}

#[test]
fn test_missing_segment_is_none() {
    let record = json!({ "name": { "first": "John" } });
    assert_eq!(resolve(&record, &"name.middle".into()), None);
    assert_eq!(resolve(&record, &"address.city".into()), None);
}

#[test]
fn test_non_indexable_intermediate_stops_walk() {
    let record = json!({ "name": "Lucy" });
    assert_eq!(resolve(&record, &"name.first".into()), None);
}

#[test]
fn test_array_segments_index_by_position() {
    let record = json!({ "tags": ["red", "green"] });
    assert_eq!(resolve(&record, &"tags.1".into()), Some(&json!("green")));
    assert_eq!(resolve(&record, &"tags.5".into()), None);
    assert_eq!(resolve(&record, &"tags.x".into()), None);
}

// ============================================================================
// Display conversion
// ============================================================================

#[test]
fn test_missing_value_displays_empty() {
    assert_eq!(display_node(None), DisplayNode::Empty);
    assert_eq!(display_node(Some(&json!(null))).text_content(), "");
}

#[test]
fn test_empty_object_displays_empty() {
    let record = json!({ "name": {} });
    let value = resolve(&record, &"name".into());
    assert_eq!(display_node(value).text_content(), "");
}

#[test]
fn test_empty_display_nodes() {
    assert!(display_node(Some(&json!({ "a": 1 }))).is_empty());
    assert!(display_node(Some(&json!(""))).is_empty());
    assert!(display_node(Some(&json!([null, {}]))).is_empty());
    assert!(!display_node(Some(&json!(0))).is_empty());
    assert!(!DisplayNode::element("p").is_empty());
}

#[test]
fn test_scalars_display_as_text() {
    assert_eq!(display_node(Some(&json!("Jack"))).text_content(), "Jack");
    assert_eq!(display_node(Some(&json!(42))).text_content(), "42");
    assert_eq!(display_node(Some(&json!(true))).text_content(), "true");
}

#[test]
fn test_array_displays_items() {
    assert_eq!(display_node(Some(&json!(["a", 1]))).text_content(), "a1");
}
