//! Body row assembly.

use std::sync::Arc;

use crate::column::{Alignment, CellRenderResult, Column};
use crate::node::DisplayNode;
use crate::path;
use crate::row_key::{self, ResolvedKey};
use crate::span::{self, Candidate};
use crate::table::TableOptions;
use crate::value::{Record, display_node};

/// A cell ready for the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCell {
    pub content: DisplayNode,
    pub col_span: u16,
    pub row_span: u16,
    pub class_name: Option<String>,
    pub column_key: String,
    /// Position of the originating column in the column list.
    pub column_index: usize,
    pub align: Alignment,
}

/// Cell data before span planning.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CellDraft {
    pub content: DisplayNode,
    pub class_name: Option<String>,
    pub column_key: String,
    pub column_index: usize,
    pub align: Alignment,
}

impl CellDraft {
    pub(crate) fn into_cell(self, col_span: u16, row_span: u16) -> ResolvedCell {
        ResolvedCell {
            content: self.content,
            col_span,
            row_span,
            class_name: self.class_name,
            column_key: self.column_key,
            column_index: self.column_index,
            align: self.align,
        }
    }
}

/// One rendered body row.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyRow {
    /// Resolved row identity.
    pub key: String,
    /// Position of the record in the input list.
    pub index: usize,
    /// True when `key` is the positional fallback.
    pub key_fallback: bool,
    pub class_name: Option<String>,
    /// Name under which the row registers in a [`RowRegistry`](crate::RowRegistry).
    pub ref_name: Option<String>,
    /// Element id the renderer assigns to the mounted row.
    pub element_id: String,
    pub cells: Vec<ResolvedCell>,
}

/// Key a column gets in rendered cells: its own key, its data index, or a
/// positional key.
pub(crate) fn column_key(column: &Column, position: usize) -> String {
    column.key().unwrap_or_else(|| format!("column-{position}"))
}

/// Builds one body row from column definitions and a record.
pub struct RowModel;

impl RowModel {
    /// Resolve every column against `record` and plan spans.
    pub fn build(
        columns: &[Column],
        record: &Record,
        index: usize,
        options: &TableOptions,
    ) -> BodyRow {
        let ResolvedKey { key, fallback } = row_key::resolve(record, index, &options.row_key);
        Self::build_with_key(columns, record, index, key, fallback, options)
    }

    pub(crate) fn build_with_key(
        columns: &[Column],
        record: &Record,
        index: usize,
        key: String,
        key_fallback: bool,
        options: &TableOptions,
    ) -> BodyRow {
        let candidates = columns.iter().enumerate().map(|(position, column)| {
            let (content, spans) = resolve_cell(column, record, index).into_parts();
            let draft = CellDraft {
                content,
                class_name: column.class_name.clone(),
                column_key: column_key(column, position),
                column_index: position,
                align: column.align,
            };
            Candidate::new(draft, spans)
        });

        let cells = span::plan(candidates)
            .into_iter()
            .map(|planned| planned.item.into_cell(planned.col_span, planned.row_span))
            .collect();

        BodyRow {
            element_id: format!("row-{index}"),
            class_name: options.row_class_name.as_ref().and_then(|f| f(record, index)),
            ref_name: options.row_ref.as_ref().and_then(|f| f(record, index)),
            key,
            index,
            key_fallback,
            cells,
        }
    }
}

/// Resolve one column's render output for `record`.
fn resolve_cell(column: &Column, record: &Record, index: usize) -> CellRenderResult {
    let value = path::resolve(record, &column.data_index);
    match &column.render {
        Some(render) => render(value, record, index),
        None => CellRenderResult::Plain(display_node(value)),
    }
}

/// Shared handle to a row-level closure, used by options.
pub type RowFn<T> = Arc<dyn Fn(&Record, usize) -> T + Send + Sync>;
