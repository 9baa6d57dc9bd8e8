//! Field path resolution.
//!
//! A column's `dataIndex` names where its value lives inside a record.
//! Dotted strings are split into segments; an empty path means the whole
//! record.

use serde::{Deserialize, Deserializer};

use crate::value::Indexable;

/// A field path into a record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DataIndex {
    segments: Vec<String>,
}

impl DataIndex {
    /// The empty path: resolves to the whole record.
    pub const fn whole() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Parse a dotted path. The empty string yields the whole record.
    pub fn parse(path: &str) -> Self {
        if path.is_empty() {
            return Self::whole();
        }
        Self {
            segments: path.split('.').map(str::to_string).collect(),
        }
    }

    /// Build a path from explicit segments. Segments are not split further.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether this path resolves to the whole record.
    pub fn is_whole(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Dotted form, used as a fallback column key. `None` for the whole
    /// record.
    pub fn joined(&self) -> Option<String> {
        if self.is_whole() {
            None
        } else {
            Some(self.segments.join("."))
        }
    }
}

impl From<&str> for DataIndex {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl From<String> for DataIndex {
    fn from(path: String) -> Self {
        Self::parse(&path)
    }
}

impl From<Option<&str>> for DataIndex {
    fn from(path: Option<&str>) -> Self {
        path.map(Self::parse).unwrap_or_default()
    }
}

impl From<usize> for DataIndex {
    fn from(index: usize) -> Self {
        Self::from_segments([index.to_string()])
    }
}

impl<S: Into<String>> From<Vec<S>> for DataIndex {
    fn from(segments: Vec<S>) -> Self {
        Self::from_segments(segments)
    }
}

impl<'de> Deserialize<'de> for DataIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Path(String),
            Segments(Vec<String>),
            Index(usize),
        }

        Ok(match Option::<Raw>::deserialize(deserializer)? {
            None => Self::whole(),
            Some(Raw::Path(path)) => Self::parse(&path),
            Some(Raw::Segments(segments)) => Self::from_segments(segments),
            Some(Raw::Index(index)) => Self::from(index),
        })
    }
}

/// Resolve `index` against `record`.
///
/// Walks the path one segment at a time. Returns `None` as soon as an
/// intermediate value is not indexable or lacks the segment.
pub fn resolve<'a, V: Indexable>(record: &'a V, index: &DataIndex) -> Option<&'a V> {
    let mut current = record;
    for segment in index.segments() {
        current = current.lookup(segment)?;
    }
    Some(current)
}
