//! Data-driven table layout engine.
//!
//! Given column definitions and records, `tabula` resolves every cell's
//! value, applies span overrides, derives row identity, and produces a
//! [`TableView`] for a renderer to mount. After the renderer commits, a
//! [`ScrollCoordinator`] keeps a fixed header aligned with the scrolled
//! body, and an [`EventRouter`] maps row and cell interactions back to
//! records.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use tabula::{Column, TableModel, TableOptions};
//!
//! let columns = vec![Column::new("name").title("Name")];
//! let records = vec![json!({ "key": "a", "name": "Lucy" })];
//! let view = TableModel::build(&columns, &records, &TableOptions::default());
//!
//! assert_eq!(view.body.rows[0].key, "a");
//! assert_eq!(view.body.rows[0].cells[0].content.text_content(), "Lucy");
//! ```

pub mod column;
pub mod config;
pub mod error;
pub mod events;
pub mod node;
pub mod path;
pub mod refs;
pub mod render;
pub mod row;
pub mod row_key;
pub mod scroll;
pub mod span;
pub mod table;
pub mod value;

pub use column::{Alignment, CellRenderResult, Column, SpanDirective, Title};
pub use config::TableSpec;
pub use error::TableError;
pub use events::{EventKind, EventResult, EventRouter, HoverState, InteractionEvent, Target};
pub use node::DisplayNode;
pub use path::DataIndex;
pub use refs::{RowHandle, RowRegistry};
pub use render::{GridLayout, RenderOptions, Rendered};
pub use row::{BodyRow, ResolvedCell, RowModel};
pub use row_key::{Diagnostic, RowKey};
pub use scroll::{Pane, ScrollCoordinator, SurfacePort};
pub use table::{
    BodyContainer, FullWidthRow, HeaderRow, ScrollConfig, ScrollX, TableModel, TableOptions,
    TableView,
};
pub use value::Record;
