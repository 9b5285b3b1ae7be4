// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangular cell ranges and rectangle-preserving merge rules.

use alloc::vec::Vec;

use smallvec::SmallVec;
use trellis_viewport::Position;

use crate::span::SpanRange;

/// A rectangular, inclusive range of cells.
///
/// Stored normalized: `start` is the top-left corner and `end` the
/// bottom-right. The constructor accepts any two opposite corners.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CellRange {
    /// Top-left corner.
    pub start: Position,
    /// Bottom-right corner (inclusive).
    pub end: Position,
}

impl CellRange {
    /// Creates a range from two opposite corners in any orientation.
    #[must_use]
    pub fn new(a: Position, b: Position) -> Self {
        Self {
            start: Position::new(a.row.min(b.row), a.column.min(b.column)),
            end: Position::new(a.row.max(b.row), a.column.max(b.column)),
        }
    }

    /// A single-cell range.
    #[must_use]
    pub const fn single(position: Position) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    /// The rows covered by the range.
    #[must_use]
    pub const fn rows(&self) -> SpanRange {
        SpanRange::new(self.start.row, self.end.row)
    }

    /// The columns covered by the range.
    #[must_use]
    pub const fn columns(&self) -> SpanRange {
        SpanRange::new(self.start.column, self.end.column)
    }

    /// Number of cells covered.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.rows().len() * self.columns().len()
    }

    /// Returns `true` if the range covers `position`.
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        self.rows().contains(position.row) && self.columns().contains(position.column)
    }

    /// Returns `true` if `other` lies entirely within this range.
    #[must_use]
    pub const fn contains_range(&self, other: &Self) -> bool {
        self.contains(other.start) && self.contains(other.end)
    }

    /// Attempts a rectangle-preserving merge with `other`.
    ///
    /// Two rectangles merge when one contains the other, or when they share
    /// one axis span exactly and overlap or touch on the other axis — the
    /// only cases where the union is itself a rectangle.
    #[must_use]
    pub fn merged(&self, other: &Self) -> Option<Self> {
        if self.contains_range(other) {
            return Some(*self);
        }
        if other.contains_range(self) {
            return Some(*other);
        }
        if self.rows() == other.rows() && self.columns().mergeable(&other.columns()) {
            let columns = self.columns().merged(&other.columns());
            return Some(Self {
                start: Position::new(self.start.row, columns.start),
                end: Position::new(self.end.row, columns.end),
            });
        }
        if self.columns() == other.columns() && self.rows().mergeable(&other.rows()) {
            let rows = self.rows().merged(&other.rows());
            return Some(Self {
                start: Position::new(rows.start, self.start.column),
                end: Position::new(rows.end, self.end.column),
            });
        }
        None
    }
}

/// Reduces a list of cell ranges to a minimal sorted form.
///
/// Repeatedly applies [`CellRange::merged`] until no pair merges, then sorts
/// by top-left corner. Overlapping ranges whose union is not a rectangle are
/// left as-is; the selection semantics ("is this cell selected") tolerate
/// that, and gesture code never produces such pairs.
pub(crate) fn normalize_cell_ranges(ranges: &mut SmallVec<[CellRange; 2]>) {
    let mut work: Vec<CellRange> = ranges.drain(..).collect();
    let mut merged_any = true;
    while merged_any {
        merged_any = false;
        'outer: for i in 0..work.len() {
            for j in (i + 1)..work.len() {
                if let Some(merged) = work[i].merged(&work[j]) {
                    work[i] = merged;
                    work.swap_remove(j);
                    merged_any = true;
                    break 'outer;
                }
            }
        }
    }
    work.sort_unstable_by_key(|range| (range.start.row, range.start.column));
    ranges.extend(work);
}
