//! Declarative table specs.
//!
//! A `TableSpec` describes columns, records and options as JSON, for
//! callers that do not build tables in code. Only the static parts of the
//! configuration are expressible: closures (`render`, handlers, producers)
//! are code-only.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::column::{Alignment, Column, Title};
use crate::error::TableError;
use crate::node::DisplayNode;
use crate::path::DataIndex;
use crate::row_key::RowKey;
use crate::table::{ScrollConfig, TableOptions};
use crate::value::Record;

/// One column in a spec file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnSpec {
    pub key: Option<String>,
    pub data_index: DataIndex,
    pub title: Option<String>,
    pub class_name: Option<String>,
    pub width: Option<u16>,
    pub col_span: Option<u16>,
    pub align: Alignment,
}

impl ColumnSpec {
    pub fn to_column(&self) -> Column {
        Column {
            key: self.key.clone(),
            data_index: self.data_index.clone(),
            title: self.title.clone().map(Title::Text).unwrap_or_default(),
            class_name: self.class_name.clone(),
            width: self.width,
            col_span: self.col_span,
            align: self.align,
            ..Default::default()
        }
    }
}

/// Table options in a spec file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptionsSpec {
    pub show_header: bool,
    pub use_fixed_header: bool,
    /// Field holding each record's identity.
    pub row_key: Option<String>,
    pub scroll: ScrollConfig,
    pub title: Option<String>,
    pub footer: Option<String>,
    pub empty_text: Option<String>,
}

impl Default for OptionsSpec {
    fn default() -> Self {
        Self {
            show_header: true,
            use_fixed_header: false,
            row_key: None,
            scroll: ScrollConfig::default(),
            title: None,
            footer: None,
            empty_text: None,
        }
    }
}

impl OptionsSpec {
    pub fn to_options(&self) -> TableOptions {
        let mut options = TableOptions::new()
            .show_header(self.show_header)
            .use_fixed_header(self.use_fixed_header);
        options.scroll = self.scroll;

        if let Some(field) = &self.row_key {
            options = options.row_key(RowKey::field(field.clone()));
        }
        if let Some(title) = self.title.clone() {
            options = options.title(move |_| DisplayNode::text(title.clone()));
        }
        if let Some(footer) = self.footer.clone() {
            options = options.footer(move |_| DisplayNode::text(footer.clone()));
        }
        if let Some(text) = &self.empty_text {
            options = options.empty_text(text.as_str());
        }
        options
    }
}

/// A complete table description.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TableSpec {
    pub columns: Vec<ColumnSpec>,
    pub data: Vec<Value>,
    pub options: OptionsSpec,
}

impl TableSpec {
    pub fn from_json_str(json: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded table spec from {}", path.display());
        Self::from_json_str(&json)
    }

    pub fn columns(&self) -> Vec<Column> {
        self.columns.iter().map(ColumnSpec::to_column).collect()
    }

    pub fn records(&self) -> &[Record] {
        &self.data
    }

    pub fn options(&self) -> TableOptions {
        self.options.to_options()
    }
}
