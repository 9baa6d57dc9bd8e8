use serde_json::{Value, json};
use tabula::{Column, RowRegistry, TableModel, TableOptions};

fn data() -> Vec<Value> {
    vec![
        json!({ "key": "key0", "name": "Lucy" }),
        json!({ "key": "key1", "name": "Jack" }),
    ]
}

fn ref_by_key() -> TableOptions {
    TableOptions::new().row_ref(|record, _| record["key"].as_str().map(str::to_string))
}

#[test]
fn test_row_ref_registers_rows_by_name() {
    let columns = vec![Column::new("name")];
    let view = TableModel::build(&columns, &data(), &ref_by_key());
    let mut registry = RowRegistry::new();
    registry.mount(&view);

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.get("key0").map(|handle| handle.index), Some(0));
    assert_eq!(registry.get("key1").map(|handle| handle.index), Some(1));
    assert_eq!(
        registry.get("key1").map(|handle| handle.element_id.as_str()),
        Some("row-1")
    );
}

#[test]
fn test_rows_without_ref_are_not_registered() {
    let columns = vec![Column::new("name")];
    let options = TableOptions::new().row_ref(|_, index| (index == 1).then(|| "second".to_string()));
    let view = TableModel::build(&columns, &data(), &options);
    let mut registry = RowRegistry::new();
    registry.mount(&view);

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get("second").map(|handle| handle.key.as_str()), Some("key1"));
}

#[test]
fn test_no_row_ref_option() {
    let columns = vec![Column::new("name")];
    let view = TableModel::build(&columns, &data(), &TableOptions::default());
    let mut registry = RowRegistry::new();
    registry.mount(&view);
    assert!(registry.is_empty());
}

#[test]
fn test_mount_replaces_previous_registrations() {
    let columns = vec![Column::new("name")];
    let mut registry = RowRegistry::new();
    registry.mount(&TableModel::build(&columns, &data(), &ref_by_key()));

    let remaining = vec![json!({ "key": "key1", "name": "Jack" })];
    registry.mount(&TableModel::build(&columns, &remaining, &ref_by_key()));

    assert_eq!(registry.len(), 1);
    assert!(registry.get("key0").is_none());
    assert_eq!(registry.get("key1").map(|handle| handle.index), Some(0));
}
