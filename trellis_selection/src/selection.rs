// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The selection region container.

use smallvec::SmallVec;
use trellis_viewport::Position;

use crate::cell_range::{CellRange, normalize_cell_ranges};
use crate::span::{SpanRange, normalize_spans};

/// The current selection: one of four region shapes, always normalized.
///
/// Every constructor runs the normalize step, so the stored ranges are
/// pairwise disjoint, non-adjacent (touching ranges are merged), minimal,
/// and sorted. Downstream consumers can rely on that shape without
/// re-deriving it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    /// Nothing selected.
    #[default]
    None,
    /// One or more rectangular cell ranges.
    Cells(SmallVec<[CellRange; 2]>),
    /// One or more row spans (row-header selection).
    Rows(SmallVec<[SpanRange; 4]>),
    /// One or more column spans (column-header selection).
    Columns(SmallVec<[SpanRange; 4]>),
    /// Every cell in the grid.
    All,
}

impl Selection {
    /// A selection of the given cell ranges, normalized.
    #[must_use]
    pub fn cells<I: IntoIterator<Item = CellRange>>(ranges: I) -> Self {
        let mut ranges: SmallVec<[CellRange; 2]> = ranges.into_iter().collect();
        if ranges.is_empty() {
            return Self::None;
        }
        normalize_cell_ranges(&mut ranges);
        Self::Cells(ranges)
    }

    /// A single-cell selection.
    #[must_use]
    pub fn single(position: Position) -> Self {
        Self::Cells(smallvec::smallvec![CellRange::single(position)])
    }

    /// A selection of the given row spans, normalized.
    #[must_use]
    pub fn rows<I: IntoIterator<Item = SpanRange>>(spans: I) -> Self {
        let mut spans: SmallVec<[SpanRange; 4]> = spans.into_iter().collect();
        if spans.is_empty() {
            return Self::None;
        }
        normalize_spans(&mut spans);
        Self::Rows(spans)
    }

    /// A selection of the given column spans, normalized.
    #[must_use]
    pub fn columns<I: IntoIterator<Item = SpanRange>>(spans: I) -> Self {
        let mut spans: SmallVec<[SpanRange; 4]> = spans.into_iter().collect();
        if spans.is_empty() {
            return Self::None;
        }
        normalize_spans(&mut spans);
        Self::Columns(spans)
    }

    /// Returns `true` when nothing is selected.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` for a row-header selection.
    ///
    /// Downstream consumers (row deletion, bulk operations) branch on this
    /// to distinguish "these rows" from "these cells".
    #[must_use]
    pub fn is_row_selection(&self) -> bool {
        matches!(self, Self::Rows(_))
    }

    /// The cell ranges of a [`Selection::Cells`] selection, else empty.
    #[must_use]
    pub fn cell_ranges(&self) -> &[CellRange] {
        match self {
            Self::Cells(ranges) => ranges,
            _ => &[],
        }
    }

    /// The row spans of a [`Selection::Rows`] selection, else empty.
    #[must_use]
    pub fn row_spans(&self) -> &[SpanRange] {
        match self {
            Self::Rows(spans) => spans,
            _ => &[],
        }
    }

    /// The column spans of a [`Selection::Columns`] selection, else empty.
    #[must_use]
    pub fn column_spans(&self) -> &[SpanRange] {
        match self {
            Self::Columns(spans) => spans,
            _ => &[],
        }
    }

    /// Returns `true` if the selection covers `position`.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        match self {
            Self::None => false,
            Self::All => true,
            Self::Cells(ranges) => ranges.iter().any(|range| range.contains(position)),
            Self::Rows(spans) => spans.iter().any(|span| span.contains(position.row)),
            Self::Columns(spans) => spans.iter().any(|span| span.contains(position.column)),
        }
    }

    /// Returns `true` if the whole row is selected.
    #[must_use]
    pub fn row_selected(&self, row: usize) -> bool {
        match self {
            Self::All => true,
            Self::Rows(spans) => spans.iter().any(|span| span.contains(row)),
            _ => false,
        }
    }

    /// Returns `true` if the whole column is selected.
    #[must_use]
    pub fn column_selected(&self, column: usize) -> bool {
        match self {
            Self::All => true,
            Self::Columns(spans) => spans.iter().any(|span| span.contains(column)),
            _ => false,
        }
    }

    /// Number of selected cells given the grid dimensions.
    ///
    /// Used for screen-reader announcements ("selected 3 of 500").
    #[must_use]
    pub fn cell_count(&self, row_count: usize, column_count: usize) -> usize {
        match self {
            Self::None => 0,
            Self::All => row_count * column_count,
            Self::Cells(ranges) => ranges.iter().map(CellRange::cell_count).sum(),
            Self::Rows(spans) => {
                spans.iter().map(SpanRange::len).sum::<usize>() * column_count
            }
            Self::Columns(spans) => spans.iter().map(SpanRange::len).sum::<usize>() * row_count,
        }
    }
}
