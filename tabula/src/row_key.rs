//! Row identity.

use std::fmt;
use std::sync::Arc;

use crate::value::{Indexable, Record, scalar_text};

/// Field read when no `rowKey` option is given.
pub const DEFAULT_KEY_FIELD: &str = "key";

/// Text of the configuration warning emitted when rows lack identity.
pub const MISSING_ROW_KEY_WARNING: &str = "Each record in table should have a unique `key` prop, \
     or set `rowKey` to an unique primary key.";

/// Closure deriving a row key from a record.
pub type RowKeyFn = Arc<dyn Fn(&Record) -> Option<String> + Send + Sync>;

/// How row identity is derived from a record.
#[derive(Clone)]
pub enum RowKey {
    /// Read the named field.
    Field(String),
    /// Call a closure with the record.
    With(RowKeyFn),
}

impl RowKey {
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }

    pub fn with<F>(f: F) -> Self
    where
        F: Fn(&Record) -> Option<String> + Send + Sync + 'static,
    {
        Self::With(Arc::new(f))
    }
}

impl Default for RowKey {
    fn default() -> Self {
        Self::Field(DEFAULT_KEY_FIELD.to_string())
    }
}

impl fmt::Debug for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => write!(f, "Field({name:?})"),
            Self::With(_) => write!(f, "With(...)"),
        }
    }
}

/// Outcome of resolving one row's key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedKey {
    pub key: String,
    /// True when the key is the positional index because the record had no
    /// identity.
    pub fallback: bool,
}

/// Resolve the identity of `record` at position `index`.
pub fn resolve(record: &Record, index: usize, row_key: &RowKey) -> ResolvedKey {
    let resolved = match row_key {
        RowKey::With(f) => f(record),
        RowKey::Field(name) => record.lookup(name).and_then(scalar_text),
    };

    match resolved {
        Some(key) => ResolvedKey {
            key,
            fallback: false,
        },
        None => ResolvedKey {
            key: index.to_string(),
            fallback: true,
        },
    }
}

/// A non-fatal configuration warning produced during a build pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// At least one record had no identity; positional keys were used.
    MissingRowKey,
    /// A column had neither `key` nor `dataIndex`.
    MissingColumnKey { position: usize },
    /// Two sibling columns share a key.
    DuplicateColumnKey { key: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRowKey => write!(f, "Warning: {MISSING_ROW_KEY_WARNING}"),
            Self::MissingColumnKey { position } => write!(
                f,
                "Warning: column at position {position} has neither `key` nor `dataIndex`"
            ),
            Self::DuplicateColumnKey { key } => {
                write!(f, "Warning: duplicate column key '{key}'")
            }
        }
    }
}
