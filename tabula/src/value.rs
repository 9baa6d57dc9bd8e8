//! Record values.
//!
//! Records are plain JSON values supplied by the caller. The engine only
//! reads them through [`Indexable`] and converts leaves to display nodes.

use serde_json::Value;

use crate::node::DisplayNode;

/// One data row supplied by the caller.
pub type Record = Value;

/// A value that can be looked into by a single path segment.
pub trait Indexable {
    /// Look up one segment. Returns `None` when the value is not indexable
    /// or has nothing under `segment`.
    fn lookup(&self, segment: &str) -> Option<&Self>;
}

impl Indexable for Value {
    fn lookup(&self, segment: &str) -> Option<&Self> {
        match self {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        }
    }
}

/// Text of a scalar value, or `None` when the value has no identity text
/// (null, objects, arrays).
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Object(_) | Value::Array(_) => None,
    }
}

/// Convert a resolved value into a display node.
///
/// Missing values, `null` and objects render as empty cells. Arrays render
/// their items side by side.
pub fn display_node(value: Option<&Value>) -> DisplayNode {
    let Some(value) = value else {
        return DisplayNode::Empty;
    };
    match value {
        Value::Null => DisplayNode::Empty,
        Value::Object(map) => {
            if !map.is_empty() {
                log::trace!("Object value with {} keys rendered as empty cell", map.len());
            }
            DisplayNode::Empty
        }
        Value::Array(items) => {
            DisplayNode::Fragment(items.iter().map(|item| display_node(Some(item))).collect())
        }
        scalar => scalar_text(scalar).map(DisplayNode::Text).unwrap_or_default(),
    }
}
