//! Interaction routing.
//!
//! Raw events arrive addressed to a rendered row or cell. The router maps
//! them back to the originating record, row index and column, and calls
//! the registered handlers synchronously. A cell handler runs before the
//! row handler, matching bubbling from the inner element to the outer one.

use crate::column::Column;
use crate::render::GridLayout;
use crate::table::{TableOptions, TableView};
use crate::value::Record;

/// Kind of pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    DoubleClick,
    MouseEnter,
    MouseLeave,
}

impl EventKind {
    /// DOM-style event type name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::DoubleClick => "doubleclick",
            Self::MouseEnter => "mouseenter",
            Self::MouseLeave => "mouseleave",
        }
    }
}

/// The rendered element an event landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A body row, by record index.
    Row(usize),
    /// A body cell, by record index and originating column index.
    Cell { row: usize, column: usize },
}

impl Target {
    pub fn row(self) -> usize {
        match self {
            Self::Row(row) | Self::Cell { row, .. } => row,
        }
    }
}

/// A raw interaction event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionEvent {
    pub kind: EventKind,
    pub target: Target,
}

impl InteractionEvent {
    pub fn new(kind: EventKind, target: Target) -> Self {
        Self { kind, target }
    }

    pub fn click(target: Target) -> Self {
        Self::new(EventKind::Click, target)
    }

    pub fn double_click(target: Target) -> Self {
        Self::new(EventKind::DoubleClick, target)
    }

    /// Event type name, e.g. `"click"`.
    pub fn event_type(&self) -> &'static str {
        self.kind.as_str()
    }
}

/// Result of routing an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// At least one handler ran.
    Consumed,
    /// No handler was registered for the event.
    Ignored,
}

/// Dispatches events for one rendered pass.
pub struct EventRouter<'a> {
    columns: &'a [Column],
    records: &'a [Record],
    options: &'a TableOptions,
}

impl<'a> EventRouter<'a> {
    pub fn new(columns: &'a [Column], records: &'a [Record], options: &'a TableOptions) -> Self {
        Self {
            columns,
            records,
            options,
        }
    }

    /// Invoke every handler matching `event`: the column's cell handler
    /// first, then the row handler.
    pub fn route(&self, event: &InteractionEvent) -> EventResult {
        let index = event.target.row();
        let Some(record) = self.records.get(index) else {
            log::debug!("Event {} for unknown row {index}", event.event_type());
            return EventResult::Ignored;
        };

        let mut result = EventResult::Ignored;

        if let Target::Cell { column, .. } = event.target
            && event.kind == EventKind::Click
            && let Some(handler) = self
                .columns
                .get(column)
                .and_then(|column| column.on_cell_click.as_ref())
        {
            log::trace!("Cell click: row {index}, column {column}");
            handler(record, event);
            result = EventResult::Consumed;
        }

        let row_handler = match event.kind {
            EventKind::Click => self.options.on_row_click.as_ref(),
            EventKind::DoubleClick => self.options.on_row_double_click.as_ref(),
            EventKind::MouseEnter | EventKind::MouseLeave => None,
        };
        if let Some(handler) = row_handler {
            log::trace!("Row {}: row {index}", event.event_type());
            handler(record, index, event);
            result = EventResult::Consumed;
        }

        result
    }

    /// Hit-test `(x, y)` against a rendered layout and route the event.
    pub fn route_at(&self, layout: &GridLayout, x: u16, y: u16, kind: EventKind) -> EventResult {
        match layout.hit_test(x, y) {
            Some(target) => self.route(&InteractionEvent::new(kind, target)),
            None => EventResult::Ignored,
        }
    }
}

/// Tracks which row the pointer is over, by row key.
///
/// Caller-owned state that persists across passes, like scroll offsets.
#[derive(Debug, Clone, Default)]
pub struct HoverState {
    key: Option<String>,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key of the hovered row, if any.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Update from a mouse enter/leave event. Returns true if the hovered
    /// row changed.
    pub fn track(&mut self, view: &TableView, event: &InteractionEvent) -> bool {
        let Some(row) = view.row(event.target.row()) else {
            return false;
        };
        match event.kind {
            EventKind::MouseEnter => {
                if self.key.as_deref() == Some(row.key.as_str()) {
                    return false;
                }
                self.key = Some(row.key.clone());
                true
            }
            EventKind::MouseLeave => {
                if self.key.as_deref() != Some(row.key.as_str()) {
                    return false;
                }
                self.key = None;
                true
            }
            EventKind::Click | EventKind::DoubleClick => false,
        }
    }

    pub fn clear(&mut self) {
        self.key = None;
    }
}
