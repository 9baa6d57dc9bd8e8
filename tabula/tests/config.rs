use std::io::Write;

use serde_json::json;
use tabula::{Alignment, ScrollX, TableError, TableModel, TableSpec};

const SPEC: &str = r#"{
    "columns": [
        { "title": "Name", "dataIndex": "name", "key": "name", "width": 12 },
        { "title": "City", "dataIndex": "address.city", "key": "city", "align": "right" },
        { "title": "Whole", "key": "whole", "dataIndex": null }
    ],
    "data": [
        { "id": "a", "name": "Lucy", "address": { "city": "Paris" } },
        { "id": "b", "name": "Jack", "address": { "city": "Oslo" } }
    ],
    "options": {
        "rowKey": "id",
        "scroll": { "x": true, "y": 10 },
        "title": "People",
        "emptyText": "Nothing here"
    }
}"#;

#[test]
fn test_parse_table_spec() {
    let spec = TableSpec::from_json_str(SPEC).unwrap();
    assert_eq!(spec.columns.len(), 3);
    assert_eq!(spec.columns[0].width, Some(12));
    assert_eq!(spec.columns[1].align, Alignment::Right);
    assert!(spec.columns[2].data_index.is_whole());
    assert_eq!(spec.options.scroll.x, ScrollX::Auto);
    assert_eq!(spec.options.scroll.y, Some(10));
    assert!(spec.options.show_header);
}

#[test]
fn test_spec_builds_view() {
    let spec = TableSpec::from_json_str(SPEC).unwrap();
    let view = TableModel::build(&spec.columns(), spec.records(), &spec.options());

    assert_eq!(view.body.rows[0].key, "a");
    assert_eq!(view.body.rows[1].key, "b");
    assert_eq!(view.body.rows[0].cells[1].content.text_content(), "Paris");
    assert_eq!(
        view.title.as_ref().map(|title| title.content.text_content()),
        Some("People".to_string())
    );
    // scroll.y implies a fixed header.
    assert!(view.fixed_header.is_some());
    assert!(view.diagnostics.is_empty());
}

#[test]
fn test_numeric_scroll_x() {
    let spec = TableSpec::from_json_str(r#"{ "options": { "scroll": { "x": 800 } } }"#).unwrap();
    assert_eq!(spec.options.scroll.x, ScrollX::Width(800));
    assert_eq!(spec.options.scroll.y, None);
}

#[test]
fn test_false_scroll_x() {
    let spec = TableSpec::from_json_str(r#"{ "options": { "scroll": { "x": false } } }"#).unwrap();
    assert!(!spec.options.scroll.x.is_enabled());
}

#[test]
fn test_empty_spec_defaults() {
    let spec = TableSpec::from_json_str("{}").unwrap();
    let view = TableModel::build(&spec.columns(), spec.records(), &spec.options());
    assert!(view.header.is_some());
    assert_eq!(
        view.empty.map(|empty| empty.content.text_content()),
        Some("No Data".to_string())
    );
}

#[test]
fn test_custom_empty_text() {
    let spec = TableSpec::from_json_str(
        &json!({ "columns": [{ "key": "a" }], "options": { "emptyText": "Nothing here" } })
            .to_string(),
    )
    .unwrap();
    let view = TableModel::build(&spec.columns(), spec.records(), &spec.options());
    assert_eq!(
        view.empty.map(|empty| empty.content.text_content()),
        Some("Nothing here".to_string())
    );
}

#[test]
fn test_invalid_json_is_an_error() {
    let result = TableSpec::from_json_str("{ \"columns\": 3 }");
    assert!(matches!(result, Err(TableError::Json(_))));
}

#[test]
fn test_from_path() {
    let path = std::env::temp_dir().join(format!("tabula-spec-{}.json", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(SPEC.as_bytes()).unwrap();
    drop(file);

    let spec = TableSpec::from_path(&path).unwrap();
    assert_eq!(spec.data.len(), 2);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_missing_file_is_an_io_error() {
    let result = TableSpec::from_path("/nonexistent/tabula/spec.json");
    assert!(matches!(result, Err(TableError::Io { .. })));
}
