use serde_json::json;
use tabula::row_key::{MISSING_ROW_KEY_WARNING, ResolvedKey, resolve};
use tabula::{Diagnostic, RowKey};

#[test]
fn test_default_reads_key_field() {
    let record = json!({ "key": "key0", "name": "Lucy" });
    assert_eq!(
        resolve(&record, 0, &RowKey::default()),
        ResolvedKey {
            key: "key0".to_string(),
            fallback: false,
        }
    );
}

#[test]
fn test_field_option() {
    let record = json!({ "key": "key1", "name": "Jack" });
    assert_eq!(resolve(&record, 1, &RowKey::field("name")).key, "Jack");
}

#[test]
fn test_closure_option() {
    let row_key = RowKey::with(|record| {
        record
            .get("key")
            .and_then(|k| k.as_str())
            .map(|k| format!("{k}1"))
    });
    let record = json!({ "key": "key0" });
    assert_eq!(resolve(&record, 0, &row_key).key, "key01");
}

#[test]
fn test_numeric_key_uses_json_text() {
    let record = json!({ "id": 17 });
    assert_eq!(resolve(&record, 0, &RowKey::field("id")).key, "17");
}

#[test]
fn test_missing_key_falls_back_to_index() {
    let record = json!({ "name": "Lucy" });
    let resolved = resolve(&record, 3, &RowKey::default());
    assert_eq!(resolved.key, "3");
    assert!(resolved.fallback);
}

#[test]
fn test_null_key_falls_back_to_index() {
    let record = json!({ "key": null });
    assert!(resolve(&record, 0, &RowKey::default()).fallback);
}

#[test]
fn test_closure_returning_none_falls_back() {
    let record = json!({ "key": "key0" });
    let resolved = resolve(&record, 5, &RowKey::with(|_| None));
    assert_eq!(resolved.key, "5");
    assert!(resolved.fallback);
}

#[test]
fn test_missing_row_key_diagnostic_text() {
    let text = Diagnostic::MissingRowKey.to_string();
    assert!(text.starts_with("Warning: "));
    assert!(text.contains(MISSING_ROW_KEY_WARNING));
    assert!(text.contains("`rowKey`"));
}
