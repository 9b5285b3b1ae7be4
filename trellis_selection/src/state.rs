// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stateful selection wrapper with gesture-level mutations.

use smallvec::SmallVec;
use trellis_viewport::Position;

use crate::cell_range::{CellRange, normalize_cell_ranges};
use crate::selection::Selection;
use crate::span::{SpanRange, normalize_spans};

/// Owns the current [`Selection`] and applies gesture-level mutations.
///
/// Every mutation flows through the same normalize step and a no-op check:
/// the revision counter bumps only when the selection semantically changed.
/// Observers can compare revisions instead of whole selections.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    selection: Selection,
    revision: u64,
}

impl SelectionState {
    /// Creates an empty selection state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Monotonically increasing change counter.
    ///
    /// Bumped only when a mutation changes the selection; no-op calls leave
    /// it untouched.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the selection wholesale. Returns `true` on change.
    pub fn set(&mut self, selection: Selection) -> bool {
        if self.selection == selection {
            return false;
        }
        self.selection = selection;
        self.revision = self.revision.wrapping_add(1);
        true
    }

    /// Clears the selection. Returns `true` on change.
    pub fn clear(&mut self) -> bool {
        self.set(Selection::None)
    }

    /// Plain click: a single-cell selection.
    pub fn select_cell(&mut self, position: Position) -> bool {
        self.set(Selection::single(position))
    }

    /// Shift gesture: replaces the most recent cell range with
    /// `anchor..position`, keeping earlier discontiguous ranges.
    ///
    /// Falls back to a fresh single-range selection when the current shape is
    /// not a cell selection.
    pub fn extend_cell_to(&mut self, anchor: Position, position: Position) -> bool {
        let extended = CellRange::new(anchor, position);
        let mut ranges: SmallVec<[CellRange; 2]> = match &self.selection {
            Selection::Cells(ranges) => ranges.clone(),
            _ => SmallVec::new(),
        };
        ranges.pop();
        ranges.push(extended);
        normalize_cell_ranges(&mut ranges);
        self.set(Selection::Cells(ranges))
    }

    /// Ctrl gesture: appends a discontiguous cell range.
    pub fn add_cell_range(&mut self, range: CellRange) -> bool {
        let mut ranges: SmallVec<[CellRange; 2]> = match &self.selection {
            Selection::Cells(ranges) => ranges.clone(),
            _ => SmallVec::new(),
        };
        ranges.push(range);
        normalize_cell_ranges(&mut ranges);
        self.set(Selection::Cells(ranges))
    }

    /// Row-header click: selects a row span, replacing the selection.
    pub fn select_rows(&mut self, span: SpanRange) -> bool {
        self.set(Selection::rows([span]))
    }

    /// Row-header ctrl/shift gesture: merges a span into a row selection.
    pub fn add_rows(&mut self, span: SpanRange) -> bool {
        let mut spans: SmallVec<[SpanRange; 4]> = match &self.selection {
            Selection::Rows(spans) => spans.clone(),
            _ => SmallVec::new(),
        };
        spans.push(span);
        normalize_spans(&mut spans);
        self.set(Selection::Rows(spans))
    }

    /// Ctrl-click on a selected row: removes that single row, splitting its
    /// span. Returns `true` on change.
    pub fn toggle_row(&mut self, row: usize) -> bool {
        let Selection::Rows(spans) = &self.selection else {
            return self.add_rows(SpanRange::new(row, row));
        };
        if !spans.iter().any(|span| span.contains(row)) {
            return self.add_rows(SpanRange::new(row, row));
        }
        let mut next: SmallVec<[SpanRange; 4]> = SmallVec::new();
        for &span in spans {
            if !span.contains(row) {
                next.push(span);
                continue;
            }
            if span.start < row {
                next.push(SpanRange::new(span.start, row - 1));
            }
            if span.end > row {
                next.push(SpanRange::new(row + 1, span.end));
            }
        }
        if next.is_empty() {
            self.set(Selection::None)
        } else {
            normalize_spans(&mut next);
            self.set(Selection::Rows(next))
        }
    }

    /// Column-header click: selects a column span, replacing the selection.
    pub fn select_columns(&mut self, span: SpanRange) -> bool {
        self.set(Selection::columns([span]))
    }

    /// Column-header ctrl/shift gesture: merges a span into a column
    /// selection.
    pub fn add_columns(&mut self, span: SpanRange) -> bool {
        let mut spans: SmallVec<[SpanRange; 4]> = match &self.selection {
            Selection::Columns(spans) => spans.clone(),
            _ => SmallVec::new(),
        };
        spans.push(span);
        normalize_spans(&mut spans);
        self.set(Selection::Columns(spans))
    }

    /// Select-all gesture.
    pub fn select_all(&mut self) -> bool {
        self.set(Selection::All)
    }
}

#[cfg(test)]
mod tests {
    use trellis_viewport::Position;

    use super::SelectionState;
    use crate::cell_range::CellRange;
    use crate::selection::Selection;
    use crate::span::SpanRange;

    #[test]
    fn revision_bumps_only_on_change() {
        let mut state = SelectionState::new();
        assert_eq!(state.revision(), 0);

        assert!(state.select_cell(Position::new(0, 0)));
        assert_eq!(state.revision(), 1);

        // Selecting the same cell again is a no-op.
        assert!(!state.select_cell(Position::new(0, 0)));
        assert_eq!(state.revision(), 1);

        assert!(state.clear());
        assert!(!state.clear());
        assert_eq!(state.revision(), 2);
    }

    #[test]
    fn extend_replaces_last_range_only() {
        let mut state = SelectionState::new();
        state.select_cell(Position::new(0, 0));
        state.add_cell_range(CellRange::single(Position::new(10, 10)));
        state.extend_cell_to(Position::new(10, 10), Position::new(12, 12));

        let ranges = state.selection().cell_ranges();
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[0], CellRange::single(Position::new(0, 0)));
        assert_eq!(
            ranges[1],
            CellRange::new(Position::new(10, 10), Position::new(12, 12))
        );
    }

    #[test]
    fn row_spans_merge_through_gestures() {
        let mut state = SelectionState::new();
        state.select_rows(SpanRange::new(2, 5));
        state.add_rows(SpanRange::new(5, 8));
        assert_eq!(state.selection().row_spans(), &[SpanRange::new(2, 8)]);
    }

    #[test]
    fn toggle_row_splits_and_rejoins() {
        let mut state = SelectionState::new();
        state.select_rows(SpanRange::new(0, 4));

        assert!(state.toggle_row(2));
        assert_eq!(
            state.selection().row_spans(),
            &[SpanRange::new(0, 1), SpanRange::new(3, 4)]
        );

        assert!(state.toggle_row(2));
        assert_eq!(state.selection().row_spans(), &[SpanRange::new(0, 4)]);
    }

    #[test]
    fn toggle_last_row_clears() {
        let mut state = SelectionState::new();
        state.select_rows(SpanRange::new(3, 3));
        assert!(state.toggle_row(3));
        assert_eq!(*state.selection(), Selection::None);
    }

    #[test]
    fn select_all_replaces_everything() {
        let mut state = SelectionState::new();
        state.select_cell(Position::new(1, 1));
        state.select_all();
        assert_eq!(*state.selection(), Selection::All);
    }
}
