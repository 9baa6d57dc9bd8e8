//! Fixed header and scroll synchronization.
//!
//! Runs after the renderer has committed a pass. Column widths are
//! measured on the body surface and copied onto the fixed header surface,
//! and horizontal scroll offsets are mirrored between the two panes. The
//! measured widths are cached per column key until the columns or scroll
//! configuration change.

use std::collections::HashMap;

use crate::column::Column;
use crate::row::column_key;
use crate::table::{ScrollConfig, TableOptions};

/// One of the two independently scrolled surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pane {
    /// The fixed header surface.
    Header,
    /// The scrollable body.
    Body,
}

impl Pane {
    pub fn opposite(self) -> Self {
        match self {
            Self::Header => Self::Body,
            Self::Body => Self::Header,
        }
    }
}

/// Measurement port into the committed visual tree.
pub trait SurfacePort {
    /// Rendered width of a column on the body surface: its header cell, or
    /// its first-row cell when the header is suppressed.
    fn column_width(&self, column_key: &str) -> Option<u16>;

    /// Apply a width to the matching cell on the fixed header surface.
    fn set_fixed_header_width(&mut self, column_key: &str, width: u16);

    /// Set the horizontal scroll offset of a pane.
    fn set_scroll_left(&mut self, pane: Pane, offset: u16);
}

/// Configuration the width cache depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Fingerprint {
    columns: Vec<(String, Option<u16>)>,
    scroll: ScrollConfig,
    fixed_header: bool,
}

impl Fingerprint {
    fn new(columns: &[Column], options: &TableOptions) -> Self {
        Self {
            columns: columns
                .iter()
                .enumerate()
                .map(|(position, column)| (column_key(column, position), column.width))
                .collect(),
            scroll: options.scroll,
            fixed_header: options.use_fixed_header,
        }
    }
}

/// Keeps the fixed header aligned with the body across passes.
#[derive(Debug, Default)]
pub struct ScrollCoordinator {
    widths: HashMap<String, u16>,
    fingerprint: Option<Fingerprint>,
    offset_x: u16,
    offset_y: u16,
    resets: usize,
}

impl ScrollCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the coordinator has anything to do for `options`.
    pub fn is_active(options: &TableOptions) -> bool {
        options.scroll.x.is_enabled() || options.scroll.y.is_some() || options.use_fixed_header
    }

    /// Post-commit pass. Re-syncs widths when horizontal scrolling is on and
    /// the columns or scroll configuration changed since the last sync.
    /// Without horizontal scrolling the cache is dropped, so turning it
    /// back on always measures again. Returns true if widths were re-synced.
    pub fn after_commit(
        &mut self,
        columns: &[Column],
        options: &TableOptions,
        port: &mut dyn SurfacePort,
    ) -> bool {
        if !Self::is_active(options) || !options.scroll.x.is_enabled() {
            self.invalidate();
            return false;
        }

        let fingerprint = Fingerprint::new(columns, options);
        if self.fingerprint.as_ref() == Some(&fingerprint) {
            return false;
        }
        self.invalidate();
        self.fingerprint = Some(fingerprint);
        self.reset_scroll_x(columns, port);
        true
    }

    fn invalidate(&mut self) {
        if self.fingerprint.is_some() {
            log::debug!("Scroll configuration changed, clearing {} cached widths", self.widths.len());
        }
        self.widths.clear();
        self.fingerprint = None;
    }

    /// Measure every column on the body, copy the widths onto the fixed
    /// header, and scroll both panes back to the left edge.
    pub fn reset_scroll_x(&mut self, columns: &[Column], port: &mut dyn SurfacePort) {
        for (position, column) in columns.iter().enumerate() {
            let key = column_key(column, position);
            match port.column_width(&key) {
                Some(width) => {
                    port.set_fixed_header_width(&key, width);
                    self.widths.insert(key, width);
                }
                None => log::debug!("Column '{key}' has no rendered cell to measure"),
            }
        }

        self.offset_x = 0;
        port.set_scroll_left(Pane::Header, 0);
        port.set_scroll_left(Pane::Body, 0);
        self.resets += 1;
        log::debug!("Synced {} column widths", self.widths.len());
    }

    /// A pane scrolled horizontally: mirror the offset to the other pane.
    /// Returns false when the offset is already current (an echo).
    pub fn on_scroll(&mut self, pane: Pane, offset: u16, port: &mut dyn SurfacePort) -> bool {
        if offset == self.offset_x {
            return false;
        }
        self.offset_x = offset;
        port.set_scroll_left(pane.opposite(), offset);
        log::trace!("{pane:?} scrolled to {offset}, mirrored to {:?}", pane.opposite());
        true
    }

    /// Scroll the body vertically by `delta`, clamped to the content.
    /// Only applies when `scroll.y` constrains the viewport. Returns true if
    /// the offset changed.
    pub fn scroll_body_by(&mut self, options: &TableOptions, delta: i16, content_height: u16) -> bool {
        let Some(viewport) = options.scroll.y else {
            return false;
        };
        let max_offset = content_height.saturating_sub(viewport);
        let new_y = (self.offset_y as i32 + delta as i32).clamp(0, max_offset as i32) as u16;
        if new_y == self.offset_y {
            return false;
        }
        self.offset_y = new_y;
        true
    }

    /// Cached width of a column, if measured since the last invalidation.
    pub fn width(&self, column_key: &str) -> Option<u16> {
        self.widths.get(column_key).copied()
    }

    pub fn offset_x(&self) -> u16 {
        self.offset_x
    }

    pub fn offset_y(&self) -> u16 {
        self.offset_y
    }

    /// Number of width syncs performed so far.
    pub fn reset_count(&self) -> usize {
        self.resets
    }
}
