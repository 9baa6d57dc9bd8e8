//! Text grid renderer.
//!
//! Lays a [`TableView`] out as fixed-width text lines, one line per row,
//! honoring column and row spans, alignment and horizontal scroll. The
//! resulting [`GridLayout`] records where every row and cell landed, which
//! is what hit testing and the scroll coordinator's measurement port need.

use std::collections::HashMap;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::column::Alignment;
use crate::events::Target;
use crate::scroll::{Pane, SurfacePort};
use crate::table::{FullWidthRow, HeaderRow, TableView};

/// Gap between adjacent columns, in terminal columns.
const COLUMN_GAP: u16 = 1;

/// Character used for the rule under the header.
const RULE: char = '─';

/// Placeholder for the cells covered by a wide character.
const CONTINUATION: char = '\0';

// =============================================================================
// Geometry
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

// =============================================================================
// Layout
// =============================================================================

/// Where rows and cells landed in the rendered output.
#[derive(Debug, Clone, Default)]
pub struct GridLayout {
    keys: Vec<String>,
    widths: Vec<u16>,
    positions: Vec<u16>,
    rows: Vec<(Rect, usize)>,
    cells: Vec<(Rect, Target)>,
    fixed_header_widths: HashMap<String, u16>,
    scroll_left: HashMap<Pane, u16>,
}

impl GridLayout {
    /// Find the innermost target at `(x, y)`: a cell if one contains the
    /// point, else its row.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<Target> {
        if let Some((_, target)) = self.cells.iter().rev().find(|(rect, _)| rect.contains(x, y)) {
            return Some(*target);
        }
        self.rows
            .iter()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|(_, index)| Target::Row(*index))
    }

    /// Rendered width of a column by key.
    pub fn width_of(&self, column_key: &str) -> Option<u16> {
        let index = self.keys.iter().position(|key| key == column_key)?;
        self.widths.get(index).copied()
    }

    /// Left edge of a column in content coordinates.
    pub fn column_x(&self, column_key: &str) -> Option<u16> {
        let index = self.keys.iter().position(|key| key == column_key)?;
        self.positions.get(index).copied()
    }

    /// Width applied to the fixed header for a column, if synced.
    pub fn fixed_header_width(&self, column_key: &str) -> Option<u16> {
        self.fixed_header_widths.get(column_key).copied()
    }

    pub fn scroll_left(&self, pane: Pane) -> u16 {
        self.scroll_left.get(&pane).copied().unwrap_or(0)
    }

    /// Total content width including gaps.
    pub fn total_width(&self) -> u16 {
        span_width(&self.widths, 0, self.widths.len())
    }

    pub fn row_rect(&self, index: usize) -> Option<Rect> {
        self.rows
            .iter()
            .find(|(_, row)| *row == index)
            .map(|(rect, _)| *rect)
    }
}

impl SurfacePort for GridLayout {
    fn column_width(&self, column_key: &str) -> Option<u16> {
        self.width_of(column_key)
    }

    fn set_fixed_header_width(&mut self, column_key: &str, width: u16) {
        self.fixed_header_widths.insert(column_key.to_string(), width);
    }

    fn set_scroll_left(&mut self, pane: Pane, offset: u16) {
        self.scroll_left.insert(pane, offset);
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Viewport settings for the text renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Visible width. `None` shows the full content width.
    pub viewport_width: Option<u16>,
    /// Horizontal scroll offset.
    pub scroll_x: u16,
    /// Vertical body scroll offset, in rows. Used with `scroll.y`.
    pub scroll_y: u16,
}

/// Rendered text plus its layout.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub lines: Vec<String>,
    pub layout: GridLayout,
}

impl Rendered {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Render `view` to text lines.
pub fn render(view: &TableView, options: &RenderOptions) -> Rendered {
    let widths = column_widths(view);
    let positions = column_positions(&widths);
    let total = span_width(&widths, 0, widths.len());
    let viewport = options.viewport_width.unwrap_or(total).min(total.max(1));
    let clip = Clip {
        offset: options.scroll_x.min(total.saturating_sub(viewport)),
        width: viewport,
    };

    let mut layout = GridLayout {
        keys: view.colgroup.iter().map(|slot| slot.key.clone()).collect(),
        widths: widths.clone(),
        positions: positions.clone(),
        ..Default::default()
    };
    let mut lines = Vec::new();

    if let Some(title) = &view.title {
        lines.push(clip.apply(&full_width_line(title, total)));
    }

    // A hidden in-flow header is replaced by its fixed mirror.
    let header = view
        .fixed_header
        .as_ref()
        .or(view.header.as_ref().filter(|header| !header.hidden));
    if let Some(header) = header {
        lines.push(clip.apply(&header_line(header, &widths, &positions, total)));
        lines.push(clip.apply(&LineBuf(vec![RULE; total as usize])));
    }

    let visible_rows = match view.body_max_height() {
        Some(height) => {
            let start = (options.scroll_y as usize).min(view.body.rows.len());
            start..(start + height as usize).min(view.body.rows.len())
        }
        None => 0..view.body.rows.len(),
    };

    let mut occupied = vec![0u16; widths.len()];
    for (position, row) in view.body.rows.iter().enumerate() {
        let carried = occupied.clone();
        for slot in &mut occupied {
            *slot = slot.saturating_sub(1);
        }
        let mut line = LineBuf::blank(total);
        let visible = visible_rows.contains(&position);
        let y = to_u16(lines.len());
        // Visible rows from this one to the bottom of the window.
        let rows_below = to_u16(visible_rows.end.saturating_sub(position));
        let mut column = 0usize;

        for cell in &row.cells {
            while column < carried.len() && carried[column] > 0 {
                column += 1;
            }
            if column >= widths.len() {
                log::debug!("Row {} has more cells than free columns", row.index);
                break;
            }
            let span = (cell.col_span as usize).min(widths.len() - column);
            let x = positions[column];
            let width = span_width(&widths, column, span);
            line.write(x, &align_text(&cell.content.text_content(), width, cell.align));

            if cell.row_span > 1 {
                for slot in &mut occupied[column..column + span] {
                    *slot = cell.row_span - 1;
                }
            }
            let height = cell.row_span.max(1).min(rows_below);
            if visible && let Some(rect) = clip.rect(x, y, width, height) {
                layout.cells.push((
                    rect,
                    Target::Cell {
                        row: row.index,
                        column: cell.column_index,
                    },
                ));
            }
            column += span;
        }

        if visible {
            layout.rows.push((Rect::new(0, y, clip.width, 1), row.index));
            lines.push(clip.apply(&line));
        }
    }

    if let Some(empty) = &view.empty {
        lines.push(clip.apply(&full_width_line(empty, total)));
    }
    if let Some(footer) = &view.footer {
        lines.push(clip.apply(&full_width_line(footer, total)));
    }

    Rendered { lines, layout }
}

/// Horizontal viewport window.
struct Clip {
    offset: u16,
    width: u16,
}

impl Clip {
    /// Visible slice of `line`. Wide characters cut by either edge become
    /// blanks.
    fn apply(&self, line: &LineBuf) -> String {
        let window: Vec<char> = line
            .0
            .iter()
            .copied()
            .skip(self.offset as usize)
            .take(self.width as usize)
            .collect();
        let mut out = String::with_capacity(window.len());
        for (i, &ch) in window.iter().enumerate() {
            let width = ch.width().unwrap_or(1);
            if ch == CONTINUATION {
                if i == 0 {
                    out.push(' ');
                }
            } else if i + width > window.len() {
                out.push(' ');
            } else {
                out.push(ch);
            }
        }
        out
    }

    /// Visible part of a span starting at content column `x`.
    fn rect(&self, x: u16, y: u16, width: u16, height: u16) -> Option<Rect> {
        let start = x.max(self.offset);
        let end = x
            .saturating_add(width)
            .min(self.offset.saturating_add(self.width));
        (end > start).then(|| Rect::new(start - self.offset, y, end - start, height))
    }
}

/// Natural width of each column: its fixed width, or the widest single
/// column cell in the header and body.
fn column_widths(view: &TableView) -> Vec<u16> {
    let mut widths: Vec<u16> = view
        .colgroup
        .iter()
        .map(|slot| slot.width.unwrap_or(1))
        .collect();
    let fixed: Vec<bool> = view.colgroup.iter().map(|slot| slot.width.is_some()).collect();

    let header_cells = view.header.iter().flat_map(|header| header.cells.iter());
    let body_cells = view.body.rows.iter().flat_map(|row| row.cells.iter());
    for cell in header_cells.chain(body_cells) {
        if cell.col_span != 1 || fixed.get(cell.column_index).copied().unwrap_or(true) {
            continue;
        }
        let width = to_u16(cell.content.text_content().width());
        if let Some(slot) = widths.get_mut(cell.column_index) {
            *slot = (*slot).max(width);
        }
    }
    widths
}

fn column_positions(widths: &[u16]) -> Vec<u16> {
    let mut positions = Vec::with_capacity(widths.len());
    let mut x = 0u16;
    for width in widths {
        positions.push(x);
        x = x.saturating_add(*width).saturating_add(COLUMN_GAP);
    }
    positions
}

/// Width of `count` columns starting at `start`, including inner gaps.
fn span_width(widths: &[u16], start: usize, count: usize) -> u16 {
    let end = (start + count).min(widths.len());
    if start >= end {
        return 0;
    }
    let gaps = COLUMN_GAP.saturating_mul(to_u16(end - start - 1));
    widths[start..end]
        .iter()
        .fold(gaps, |total, width| total.saturating_add(*width))
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn header_line(header: &HeaderRow, widths: &[u16], positions: &[u16], total: u16) -> LineBuf {
    let mut line = LineBuf::blank(total);
    for cell in &header.cells {
        let Some(&x) = positions.get(cell.column_index) else {
            continue;
        };
        let width = span_width(widths, cell.column_index, cell.col_span as usize);
        let text = cell.content.text_content();
        line.write(x, &align_text(&text, width, cell.align));
    }
    line
}

fn full_width_line(row: &FullWidthRow, total: u16) -> LineBuf {
    let mut line = LineBuf::blank(total);
    line.write(0, &align_text(&row.content.text_content(), total, Alignment::Left));
    line
}

/// One output line as display cells.
struct LineBuf(Vec<char>);

impl LineBuf {
    fn blank(width: u16) -> Self {
        Self(vec![' '; width as usize])
    }

    /// Overwrite cells starting at `x` with `text`, clipped to the line.
    fn write(&mut self, x: u16, text: &str) {
        let mut column = x as usize;
        for ch in text.chars() {
            let width = ch.width().unwrap_or(0);
            if width == 0 {
                continue;
            }
            if column + width > self.0.len() {
                break;
            }
            self.0[column] = ch;
            for slot in &mut self.0[column + 1..column + width] {
                *slot = CONTINUATION;
            }
            column += width;
        }
    }
}

/// Truncate or pad `text` to exactly `width` columns.
fn align_text(text: &str, width: u16, align: Alignment) -> String {
    let width = width as usize;
    let text = truncate_to_width(text, width);
    let pad = width.saturating_sub(text.width());
    match align {
        Alignment::Left => format!("{text}{}", " ".repeat(pad)),
        Alignment::Right => format!("{}{text}", " ".repeat(pad)),
        Alignment::Center => {
            let left = pad / 2;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(pad - left))
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target = max_width - 1;
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > target {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result.push('…');
    result
}
