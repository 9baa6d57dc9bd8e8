//! Whole-table assembly.
//!
//! `TableModel::build` is pure: it reads columns, records and options and
//! produces a fresh [`TableView`] every pass. Nothing survives between
//! passes except what the caller keeps (see [`ScrollCoordinator`]).
//!
//! [`ScrollCoordinator`]: crate::ScrollCoordinator

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer};

use crate::column::{Column, SpanDirective};
use crate::error::TableError;
use crate::events::InteractionEvent;
use crate::node::DisplayNode;
use crate::row::{BodyRow, CellDraft, ResolvedCell, RowFn, RowModel, column_key};
use crate::row_key::{self, Diagnostic, RowKey};
use crate::span::{self, Candidate};
use crate::value::Record;

/// Text shown in the body when there are no records.
pub const DEFAULT_EMPTY_TEXT: &str = "No Data";

/// Producer for the title and footer rows. Receives the current records.
pub type SectionFn = Arc<dyn Fn(&[Record]) -> DisplayNode + Send + Sync>;

/// Transform applied to the default body container before mounting.
pub type BodyWrapperFn = Arc<dyn Fn(BodyContainer) -> BodyContainer + Send + Sync>;

/// Row handler: `(record, row index, event)`.
pub type RowHandlerFn = Arc<dyn Fn(&Record, usize, &InteractionEvent) + Send + Sync>;

// =============================================================================
// Scroll configuration
// =============================================================================

/// Horizontal scroll setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollX {
    /// No horizontal scrolling.
    #[default]
    Off,
    /// Scroll horizontally at the natural content width (`x: true`).
    Auto,
    /// Scroll horizontally with the content at this width.
    Width(u16),
}

impl ScrollX {
    /// Whether horizontal scrolling is requested. `Width(0)` is not.
    pub fn is_enabled(self) -> bool {
        match self {
            Self::Off => false,
            Self::Auto => true,
            Self::Width(width) => width > 0,
        }
    }
}

impl<'de> Deserialize<'de> for ScrollX {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Width(u16),
        }

        Ok(match Option::<Raw>::deserialize(deserializer)? {
            None | Some(Raw::Flag(false)) => Self::Off,
            Some(Raw::Flag(true)) => Self::Auto,
            Some(Raw::Width(width)) => Self::Width(width),
        })
    }
}

/// Scroll dimensions of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct ScrollConfig {
    #[serde(default)]
    pub x: ScrollX,
    /// Maximum body height; enables vertical scrolling under a fixed header.
    #[serde(default)]
    pub y: Option<u16>,
}

// =============================================================================
// Options
// =============================================================================

/// Table configuration. Every feature is off unless set.
#[derive(Clone)]
pub struct TableOptions {
    pub show_header: bool,
    pub use_fixed_header: bool,
    pub title: Option<SectionFn>,
    pub footer: Option<SectionFn>,
    pub get_body_wrapper: Option<BodyWrapperFn>,
    pub row_key: RowKey,
    /// Returns the name a row registers under in a `RowRegistry`.
    pub row_ref: Option<RowFn<Option<String>>>,
    pub row_class_name: Option<RowFn<Option<String>>>,
    pub scroll: ScrollConfig,
    pub on_row_click: Option<RowHandlerFn>,
    pub on_row_double_click: Option<RowHandlerFn>,
    pub empty_text: DisplayNode,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            show_header: true,
            use_fixed_header: false,
            title: None,
            footer: None,
            get_body_wrapper: None,
            row_key: RowKey::default(),
            row_ref: None,
            row_class_name: None,
            scroll: ScrollConfig::default(),
            on_row_click: None,
            on_row_double_click: None,
            empty_text: DisplayNode::text(DEFAULT_EMPTY_TEXT),
        }
    }
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_header(mut self, show: bool) -> Self {
        self.show_header = show;
        self
    }

    pub fn use_fixed_header(mut self, fixed: bool) -> Self {
        self.use_fixed_header = fixed;
        self
    }

    pub fn title<F>(mut self, f: F) -> Self
    where
        F: Fn(&[Record]) -> DisplayNode + Send + Sync + 'static,
    {
        self.title = Some(Arc::new(f));
        self
    }

    pub fn footer<F>(mut self, f: F) -> Self
    where
        F: Fn(&[Record]) -> DisplayNode + Send + Sync + 'static,
    {
        self.footer = Some(Arc::new(f));
        self
    }

    pub fn body_wrapper<F>(mut self, f: F) -> Self
    where
        F: Fn(BodyContainer) -> BodyContainer + Send + Sync + 'static,
    {
        self.get_body_wrapper = Some(Arc::new(f));
        self
    }

    pub fn row_key(mut self, row_key: RowKey) -> Self {
        self.row_key = row_key;
        self
    }

    pub fn row_ref<F>(mut self, f: F) -> Self
    where
        F: Fn(&Record, usize) -> Option<String> + Send + Sync + 'static,
    {
        self.row_ref = Some(Arc::new(f));
        self
    }

    pub fn row_class_name<F>(mut self, f: F) -> Self
    where
        F: Fn(&Record, usize) -> Option<String> + Send + Sync + 'static,
    {
        self.row_class_name = Some(Arc::new(f));
        self
    }

    pub fn scroll_x(mut self, x: ScrollX) -> Self {
        self.scroll.x = x;
        self
    }

    pub fn scroll_y(mut self, y: u16) -> Self {
        self.scroll.y = Some(y);
        self
    }

    pub fn on_row_click<F>(mut self, f: F) -> Self
    where
        F: Fn(&Record, usize, &InteractionEvent) + Send + Sync + 'static,
    {
        self.on_row_click = Some(Arc::new(f));
        self
    }

    pub fn on_row_double_click<F>(mut self, f: F) -> Self
    where
        F: Fn(&Record, usize, &InteractionEvent) + Send + Sync + 'static,
    {
        self.on_row_double_click = Some(Arc::new(f));
        self
    }

    pub fn empty_text(mut self, text: impl Into<DisplayNode>) -> Self {
        self.empty_text = text.into();
        self
    }

    /// Whether the header is rendered a second time on a fixed surface.
    pub fn has_fixed_header(&self) -> bool {
        self.use_fixed_header || self.scroll.y.is_some()
    }
}

impl fmt::Debug for TableOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableOptions")
            .field("show_header", &self.show_header)
            .field("use_fixed_header", &self.use_fixed_header)
            .field("title", &self.title.is_some())
            .field("footer", &self.footer.is_some())
            .field("get_body_wrapper", &self.get_body_wrapper.is_some())
            .field("row_key", &self.row_key)
            .field("scroll", &self.scroll)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// View
// =============================================================================

/// Width and class metadata of one column, shared by every surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSlot {
    pub key: String,
    pub width: Option<u16>,
    pub class_name: Option<String>,
}

/// The header row.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderRow {
    pub cells: Vec<ResolvedCell>,
    /// True for the in-flow copy when a fixed header surface exists.
    pub hidden: bool,
}

/// The body container the renderer mounts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BodyContainer {
    pub class_name: Option<String>,
    pub rows: Vec<BodyRow>,
}

/// A single cell spanning every column (title, footer, empty placeholder).
#[derive(Debug, Clone, PartialEq)]
pub struct FullWidthRow {
    pub content: DisplayNode,
    pub col_span: u16,
}

/// Everything the renderer needs for one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub colgroup: Vec<ColumnSlot>,
    pub title: Option<FullWidthRow>,
    pub header: Option<HeaderRow>,
    /// Mirror of the header on an independently scrolled surface.
    pub fixed_header: Option<HeaderRow>,
    pub body: BodyContainer,
    /// Placeholder row when there are no records.
    pub empty: Option<FullWidthRow>,
    pub footer: Option<FullWidthRow>,
    pub scroll: ScrollConfig,
    pub diagnostics: Vec<Diagnostic>,
}

impl TableView {
    pub fn column_count(&self) -> usize {
        self.colgroup.len()
    }

    /// Viewport height of the body, when vertical scrolling is on.
    pub fn body_max_height(&self) -> Option<u16> {
        self.scroll.y
    }

    pub fn row(&self, index: usize) -> Option<&BodyRow> {
        self.body.rows.iter().find(|row| row.index == index)
    }

    pub fn row_by_key(&self, key: &str) -> Option<&BodyRow> {
        self.body.rows.iter().find(|row| row.key == key)
    }
}

// =============================================================================
// Model
// =============================================================================

/// Builds a [`TableView`] from columns, records and options.
pub struct TableModel;

impl TableModel {
    /// Build the full grid. Never fails; configuration problems become
    /// diagnostics in the returned view.
    pub fn build(columns: &[Column], records: &[Record], options: &TableOptions) -> TableView {
        let mut diagnostics = column_diagnostics(columns);

        let colgroup = columns
            .iter()
            .enumerate()
            .map(|(position, column)| ColumnSlot {
                key: column_key(column, position),
                width: column.width,
                class_name: column.class_name.clone(),
            })
            .collect::<Vec<_>>();
        let full_width = u16::try_from(colgroup.len()).unwrap_or(u16::MAX).max(1);

        let header = options.show_header.then(|| HeaderRow {
            cells: build_header_cells(columns),
            hidden: false,
        });
        let fixed_header = match &header {
            Some(header) if options.has_fixed_header() => Some(header.clone()),
            _ => None,
        };
        let header = header.map(|header| HeaderRow {
            hidden: fixed_header.is_some(),
            ..header
        });

        let mut missing_key = false;
        let rows = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let resolved = row_key::resolve(record, index, &options.row_key);
                missing_key |= resolved.fallback;
                RowModel::build_with_key(
                    columns,
                    record,
                    index,
                    resolved.key,
                    resolved.fallback,
                    options,
                )
            })
            .collect();
        if missing_key {
            diagnostics.push(Diagnostic::MissingRowKey);
        }

        let body = BodyContainer {
            class_name: None,
            rows,
        };
        let body = match &options.get_body_wrapper {
            Some(wrap) => wrap(body),
            None => body,
        };

        let section = |producer: &Option<SectionFn>| {
            producer.as_ref().map(|f| FullWidthRow {
                content: f(records),
                col_span: full_width,
            })
        };
        let empty = records.is_empty().then(|| FullWidthRow {
            content: options.empty_text.clone(),
            col_span: full_width,
        });

        for diagnostic in &diagnostics {
            log::warn!("{diagnostic}");
        }

        TableView {
            title: section(&options.title),
            footer: section(&options.footer),
            colgroup,
            header,
            fixed_header,
            body,
            empty,
            scroll: options.scroll,
            diagnostics,
        }
    }

    /// Strict column check: every column needs a key or data index, and
    /// keys must be unique.
    pub fn validate(columns: &[Column]) -> Result<(), TableError> {
        let mut seen = HashSet::new();
        for (position, column) in columns.iter().enumerate() {
            let Some(key) = column.key() else {
                return Err(TableError::MissingColumnKey { position });
            };
            if !seen.insert(key.clone()) {
                return Err(TableError::DuplicateColumnKey { key });
            }
        }
        Ok(())
    }
}

fn column_diagnostics(columns: &[Column]) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut seen = HashSet::new();
    for (position, column) in columns.iter().enumerate() {
        match column.key() {
            None => diagnostics.push(Diagnostic::MissingColumnKey { position }),
            Some(key) => {
                if !seen.insert(key.clone()) {
                    diagnostics.push(Diagnostic::DuplicateColumnKey { key });
                }
            }
        }
    }
    diagnostics
}

fn build_header_cells(columns: &[Column]) -> Vec<ResolvedCell> {
    let candidates = columns.iter().enumerate().map(|(position, column)| {
        let draft = CellDraft {
            content: column.title.resolve(),
            class_name: column.class_name.clone(),
            column_key: column_key(column, position),
            column_index: position,
            align: column.align,
        };
        Candidate::new(
            draft,
            SpanDirective {
                col_span: column.col_span,
                row_span: None,
            },
        )
    });

    span::plan(candidates)
        .into_iter()
        .map(|planned| planned.item.into_cell(planned.col_span, planned.row_span))
        .collect()
}
