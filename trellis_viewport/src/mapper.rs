// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel ↔ cell coordinate mapping with frozen columns and header bands.

use kurbo::{Point, Rect, Size, Vec2};

use trellis_axis::{ExtentModel, ExtentTable};

use crate::position::{GridRegion, Position};
use crate::window::{Overscan, ScrollAlign, VisibleWindow, scroll_offset_for};

/// Bidirectional mapper between screen pixels and logical grid coordinates.
///
/// The mapper owns the row and column extent tables plus the layout split:
/// an optional row-header band on the left, an optional column-header band on
/// top, and a frozen zone of the first `freeze_count` columns that never
/// scrolls horizontally.
///
/// Scroll state is not stored here; callers pass the current scroll offset
/// into each query. `scroll.x` is the horizontal offset of the *scrolled*
/// column zone (zero means the first unfrozen column sits flush against the
/// frozen edge) and `scroll.y` is the vertical row offset.
#[derive(Clone, Debug)]
pub struct GridMapper {
    rows: ExtentTable,
    columns: ExtentTable,
    freeze_count: usize,
    row_header_width: f64,
    column_header_height: f64,
}

impl GridMapper {
    /// Creates a mapper for `row_count` rows of `row_height` and the given
    /// column widths, with the first `freeze_count` columns frozen.
    ///
    /// `freeze_count` is clamped to the column count. Header bands start at
    /// zero size; see [`GridMapper::set_header_sizes`].
    #[must_use]
    pub fn new(row_count: usize, row_height: f64, column_widths: &[f64], freeze_count: usize) -> Self {
        let mut columns = ExtentTable::new(column_widths.len(), 0.0);
        for (index, &width) in column_widths.iter().enumerate() {
            columns.set_extent(index, width);
        }
        Self {
            rows: ExtentTable::new(row_count, row_height),
            columns,
            freeze_count: freeze_count.min(column_widths.len()),
            row_header_width: 0.0,
            column_header_height: 0.0,
        }
    }

    /// Sets the widths of the header bands.
    pub fn set_header_sizes(&mut self, row_header_width: f64, column_header_height: f64) {
        self.row_header_width = row_header_width.max(0.0);
        self.column_header_height = column_header_height.max(0.0);
    }

    /// Returns the width of the row-header band.
    #[must_use]
    pub fn row_header_width(&self) -> f64 {
        self.row_header_width
    }

    /// Returns the height of the column-header band.
    #[must_use]
    pub fn column_header_height(&self) -> f64 {
        self.column_header_height
    }

    /// Number of frozen columns.
    #[must_use]
    pub fn freeze_count(&self) -> usize {
        self.freeze_count
    }

    /// Sets the number of frozen columns, clamped to the column count.
    pub fn set_freeze_count(&mut self, freeze_count: usize) {
        self.freeze_count = freeze_count.min(self.columns.len());
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Row extent table, for measured-height feedback.
    pub fn rows_mut(&mut self) -> &mut ExtentTable {
        &mut self.rows
    }

    /// Re-synchronizes the mapper against host-supplied dimensions.
    ///
    /// Column widths are authoritative on every call (the host owns resize
    /// and reorder); row measurements are preserved when only widths changed
    /// and discarded when the row population changed.
    pub fn sync(&mut self, row_count: usize, row_height: f64, column_widths: &[f64]) {
        if row_count != self.rows.len() || row_height != self.rows.default_extent() {
            self.rows.reset(row_count, row_height);
        }
        if column_widths.len() != self.columns.len() {
            self.columns.reset(column_widths.len(), 0.0);
        }
        for (index, &width) in column_widths.iter().enumerate() {
            self.columns.set_extent(index, width);
        }
        self.freeze_count = self.freeze_count.min(self.columns.len());
    }

    /// Total width of the frozen column zone.
    #[must_use]
    pub fn frozen_width(&mut self) -> f64 {
        self.columns.offset_of(self.freeze_count)
    }

    /// Total content size including header bands.
    #[must_use]
    pub fn content_size(&mut self) -> Size {
        Size::new(
            self.row_header_width + self.columns.total_extent(),
            self.column_header_height + self.rows.total_extent(),
        )
    }

    /// Screen x of the leading edge of `column` under `scroll_left`.
    #[must_use]
    pub fn column_screen_x(&mut self, column: usize, scroll_left: f64) -> f64 {
        let offset = self.columns.offset_of(column);
        if column < self.freeze_count {
            self.row_header_width + offset
        } else {
            self.row_header_width + offset - scroll_left
        }
    }

    /// Screen y of the leading edge of `row` under `scroll_top`.
    #[must_use]
    pub fn row_screen_y(&mut self, row: usize, scroll_top: f64) -> f64 {
        self.column_header_height + self.rows.offset_of(row) - scroll_top
    }

    /// Screen rectangle of a cell, or `None` when the position is out of
    /// range.
    ///
    /// The rectangle is not clipped against the viewport; a cell scrolled off
    /// screen still reports its (off-screen) rectangle.
    #[must_use]
    pub fn cell_rect(&mut self, position: Position, scroll: Vec2) -> Option<Rect> {
        if !position.in_bounds(self.rows.len(), self.columns.len()) {
            return None;
        }
        let x = self.column_screen_x(position.column, scroll.x);
        let y = self.row_screen_y(position.row, scroll.y);
        let width = self.columns.extent_of(position.column);
        let height = self.rows.extent_of(position.row);
        Some(Rect::new(x, y, x + width, y + height))
    }

    /// Column under body-relative x (0 at the left edge of the grid body).
    ///
    /// The frozen zone wins ties at its boundary, matching its painted-on-top
    /// order.
    fn column_at_body_x(&mut self, x_body: f64, scroll_left: f64) -> Option<usize> {
        if x_body < 0.0 {
            return None;
        }
        let frozen_width = self.frozen_width();
        if x_body < frozen_width {
            return self.columns.index_at_offset(x_body);
        }
        let column = self.columns.index_at_offset(x_body + scroll_left)?;
        // A column half-hidden under the frozen edge can only be hit in the
        // part that is actually past the edge, which the offset math above
        // already guarantees; the index just has to be an unfrozen one.
        (column >= self.freeze_count).then_some(column)
    }

    /// Cell position under a pointer, or `None` when the pointer is over a
    /// header band or outside the content.
    #[must_use]
    pub fn position_at(&mut self, point: Point, scroll: Vec2) -> Option<Position> {
        match self.region_at(point, scroll) {
            GridRegion::Cell { position, .. } => Some(position),
            _ => None,
        }
    }

    /// Classifies the grid element under a pointer.
    #[must_use]
    pub fn region_at(&mut self, point: Point, scroll: Vec2) -> GridRegion {
        if !point.x.is_finite() || !point.y.is_finite() || point.x < 0.0 || point.y < 0.0 {
            return GridRegion::Blank;
        }
        let in_row_header = point.x < self.row_header_width;
        let in_column_header = point.y < self.column_header_height;
        let x_body = point.x - self.row_header_width;
        let y_body = point.y - self.column_header_height;

        if in_row_header && in_column_header {
            return GridRegion::Corner;
        }
        if in_column_header {
            return match self.column_at_body_x(x_body, scroll.x) {
                Some(column) => GridRegion::ColumnHeader { column },
                None => GridRegion::Blank,
            };
        }
        if in_row_header {
            return match self.rows.index_at_offset(y_body + scroll.y.max(0.0)) {
                Some(row) => GridRegion::RowHeader { row },
                None => GridRegion::Blank,
            };
        }

        let row = self.rows.index_at_offset(y_body + scroll.y.max(0.0));
        let column = self.column_at_body_x(x_body, scroll.x);
        match (row, column) {
            (Some(row), Some(column)) => GridRegion::Cell {
                position: Position::new(row, column),
                frozen: column < self.freeze_count,
            },
            _ => GridRegion::Blank,
        }
    }

    /// Computes the half-open index window covering the viewport plus
    /// overscan.
    ///
    /// `viewport` is the on-screen size of the whole grid widget including
    /// header bands. The column window never starts inside the frozen zone;
    /// frozen columns are always drawn and are not part of the window.
    #[must_use]
    pub fn visible_window(&mut self, viewport: Size, scroll: Vec2, overscan: Overscan) -> VisibleWindow {
        let scroll_left = scroll.x.max(0.0);
        let scroll_top = scroll.y.max(0.0);
        let body_height = (viewport.height - self.column_header_height).max(0.0);
        let zone_width =
            (viewport.width - self.row_header_width - self.frozen_width()).max(0.0);
        let frozen_width = self.frozen_width();

        let row_count = self.rows.len();
        let row_first = self.rows.index_at_offset_clamped(scroll_top);
        let row_last = self.rows.index_at_offset_clamped(scroll_top + body_height);
        let row_start = row_first.saturating_sub(overscan.rows);
        let row_end = (row_last + 1 + overscan.rows).min(row_count);

        let column_count = self.columns.len();
        let column_first = self
            .columns
            .index_at_offset_clamped(frozen_width + scroll_left)
            .max(self.freeze_count);
        let column_last = self
            .columns
            .index_at_offset_clamped(frozen_width + scroll_left + zone_width)
            .max(self.freeze_count);
        let column_start = column_first
            .saturating_sub(overscan.columns)
            .max(self.freeze_count);
        let column_end = (column_last + 1 + overscan.columns).min(column_count);

        VisibleWindow {
            row_start: row_start.min(row_count),
            row_end,
            column_start: column_start.min(column_count),
            column_end,
        }
    }

    /// The vertical scroll offset that brings `row` into view.
    #[must_use]
    pub fn scroll_to_row(
        &mut self,
        row: usize,
        viewport_height: f64,
        current_scroll_top: f64,
        align: ScrollAlign,
    ) -> f64 {
        let body_height = (viewport_height - self.column_header_height).max(0.0);
        scroll_offset_for(&mut self.rows, row, align, body_height, current_scroll_top)
    }

    /// The horizontal scroll offset that brings `column` into view.
    ///
    /// Frozen columns are always visible, so targeting one returns the
    /// current offset unchanged. For scrolled columns the computation runs in
    /// the scrolled zone's coordinate space (world offsets minus the frozen
    /// width).
    #[must_use]
    pub fn scroll_to_column(
        &mut self,
        column: usize,
        viewport_width: f64,
        current_scroll_left: f64,
        align: ScrollAlign,
    ) -> f64 {
        if column < self.freeze_count {
            return current_scroll_left;
        }
        let frozen_width = self.frozen_width();
        let zone_width = (viewport_width - self.row_header_width - frozen_width).max(0.0);
        let start = self.columns.offset_of(column) - frozen_width;
        let extent = self.columns.extent_of(column);
        let max_offset = (self.columns.total_extent() - frozen_width - zone_width).max(0.0);
        crate::window::align_span(start, extent, zone_width, current_scroll_left, align)
            .clamp(0.0, max_offset)
    }
}
