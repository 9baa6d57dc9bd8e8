//! Column definitions.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::events::InteractionEvent;
use crate::node::DisplayNode;
use crate::path::DataIndex;
use crate::value::Record;

/// Cell render closure: `(resolved value, record, row index)`.
pub type CellRenderFn =
    Arc<dyn Fn(Option<&Value>, &Record, usize) -> CellRenderResult + Send + Sync>;

/// Cell click handler: `(record, event)`.
pub type CellClickFn = Arc<dyn Fn(&Record, &InteractionEvent) + Send + Sync>;

/// Producer for header titles.
pub type TitleFn = Arc<dyn Fn() -> DisplayNode + Send + Sync>;

/// Horizontal alignment of a column's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Span override attached to a cell's render output.
///
/// `Some(0)` vacates the grid position; `None` means a span of 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpanDirective {
    pub col_span: Option<u16>,
    pub row_span: Option<u16>,
}

impl SpanDirective {
    pub fn col_span(span: u16) -> Self {
        Self {
            col_span: Some(span),
            row_span: None,
        }
    }

    pub fn row_span(span: u16) -> Self {
        Self {
            col_span: None,
            row_span: Some(span),
        }
    }
}

/// What a column's `render` closure returns.
#[derive(Debug, Clone, PartialEq)]
pub enum CellRenderResult {
    /// Bare content with default spans.
    Plain(DisplayNode),
    /// Content plus span overrides.
    Spanned {
        children: DisplayNode,
        props: SpanDirective,
    },
}

impl CellRenderResult {
    pub fn spanned(children: impl Into<DisplayNode>, props: SpanDirective) -> Self {
        Self::Spanned {
            children: children.into(),
            props,
        }
    }

    /// Split into content and span directive.
    pub fn into_parts(self) -> (DisplayNode, SpanDirective) {
        match self {
            Self::Plain(node) => (node, SpanDirective::default()),
            Self::Spanned { children, props } => (children, props),
        }
    }
}

impl From<DisplayNode> for CellRenderResult {
    fn from(node: DisplayNode) -> Self {
        Self::Plain(node)
    }
}

/// Header title of a column.
#[derive(Clone, Default)]
pub enum Title {
    #[default]
    None,
    Text(String),
    Node(DisplayNode),
    /// Invoked at build time.
    Producer(TitleFn),
}

impl Title {
    /// Resolve to a display node, invoking the producer if there is one.
    pub fn resolve(&self) -> DisplayNode {
        match self {
            Self::None => DisplayNode::Empty,
            Self::Text(text) => DisplayNode::text(text.clone()),
            Self::Node(node) => node.clone(),
            Self::Producer(f) => f(),
        }
    }
}

impl fmt::Debug for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Text(text) => write!(f, "Text({text:?})"),
            Self::Node(node) => write!(f, "Node({node:?})"),
            Self::Producer(_) => write!(f, "Producer(...)"),
        }
    }
}

impl From<&str> for Title {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Title {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// A table column definition.
///
/// Columns are ordered; their order is the left-to-right grid order.
///
/// # Examples
///
/// ```
/// use tabula::Column;
///
/// let columns = vec![
///     Column::new("name").title("Name").width(20),
///     Column::new("age").title("Age").data_index("profile.age"),
/// ];
/// assert_eq!(columns[1].key(), Some("age".to_string()));
/// ```
#[derive(Clone, Default)]
pub struct Column {
    pub key: Option<String>,
    pub data_index: DataIndex,
    pub title: Title,
    pub render: Option<CellRenderFn>,
    pub class_name: Option<String>,
    /// Width in terminal columns. `None` sizes to content.
    pub width: Option<u16>,
    /// Static header span. `Some(0)` hides this column's header cell.
    pub col_span: Option<u16>,
    pub align: Alignment,
    pub on_cell_click: Option<CellClickFn>,
}

impl Column {
    /// Create a column whose key and data index are both `key`.
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            data_index: DataIndex::parse(&key),
            key: Some(key),
            ..Default::default()
        }
    }

    /// Create a column without a key. Its identity comes from the data index.
    pub fn unkeyed() -> Self {
        Self::default()
    }

    pub fn key(&self) -> Option<String> {
        self.key.clone().or_else(|| self.data_index.joined())
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn data_index(mut self, index: impl Into<DataIndex>) -> Self {
        self.data_index = index.into();
        self
    }

    pub fn title(mut self, title: impl Into<Title>) -> Self {
        self.title = title.into();
        self
    }

    /// Use a producer for the header title.
    pub fn title_with<F>(mut self, f: F) -> Self
    where
        F: Fn() -> DisplayNode + Send + Sync + 'static,
    {
        self.title = Title::Producer(Arc::new(f));
        self
    }

    pub fn render<F>(mut self, f: F) -> Self
    where
        F: Fn(Option<&Value>, &Record, usize) -> CellRenderResult + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(f));
        self
    }

    pub fn class_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = Some(name.into());
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn col_span(mut self, span: u16) -> Self {
        self.col_span = Some(span);
        self
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    pub fn on_cell_click<F>(mut self, f: F) -> Self
    where
        F: Fn(&Record, &InteractionEvent) + Send + Sync + 'static,
    {
        self.on_cell_click = Some(Arc::new(f));
        self
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("data_index", &self.data_index)
            .field("title", &self.title)
            .field("render", &self.render.as_ref().map(|_| "..."))
            .field("class_name", &self.class_name)
            .field("width", &self.width)
            .field("col_span", &self.col_span)
            .field("align", &self.align)
            .finish()
    }
}
