//! Per-row span planning.
//!
//! The planner trusts explicit span directives: it never computes spans on
//! its own. A cell whose declared spans are all zero is dropped, as is any
//! cell whose position a cell to its left already claimed with `colSpan`.
//! Vertical reservations are honored only through the `rowSpan: 0`
//! directives the caller declares on subsequent rows.

use crate::column::SpanDirective;

/// A cell before planning, with the spans its render output declared.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<T> {
    pub item: T,
    pub spans: SpanDirective,
}

impl<T> Candidate<T> {
    pub fn new(item: T, spans: SpanDirective) -> Self {
        Self { item, spans }
    }
}

/// A cell that occupies grid positions after planning.
#[derive(Debug, Clone, PartialEq)]
pub struct Planned<T> {
    pub item: T,
    pub col_span: u16,
    pub row_span: u16,
}

/// Whether every declared span is zero (and at least one is declared).
fn vacates(spans: &SpanDirective) -> bool {
    match (spans.col_span, spans.row_span) {
        (None, None) => false,
        (col, row) => col.is_none_or(|c| c == 0) && row.is_none_or(|r| r == 0),
    }
}

/// Plan one row's cells, left to right.
pub fn plan<T>(candidates: impl IntoIterator<Item = Candidate<T>>) -> Vec<Planned<T>> {
    let mut owed: u16 = 0;
    let mut planned = Vec::new();

    for (position, candidate) in candidates.into_iter().enumerate() {
        if owed > 0 {
            owed -= 1;
            if !vacates(&candidate.spans) {
                log::trace!("Cell at position {position} absorbed by a preceding colSpan");
            }
            continue;
        }

        if vacates(&candidate.spans) {
            continue;
        }

        let mut col_span = candidate.spans.col_span.unwrap_or(1);
        let mut row_span = candidate.spans.row_span.unwrap_or(1);
        if col_span == 0 || row_span == 0 {
            log::warn!(
                "Cell at position {position} declares colSpan {col_span} with rowSpan {row_span}; \
                 keeping it with the zero span treated as 1"
            );
            col_span = col_span.max(1);
            row_span = row_span.max(1);
        }

        owed = col_span - 1;
        planned.push(Planned {
            item: candidate.item,
            col_span,
            row_span,
        });
    }

    planned
}
