// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The engine's draw pass.
//!
//! The drawing surface is exclusively owned by the engine: everything else
//! mutates state, and this module is the single writer that turns state
//! into ops. Pass order is scrolled cells, then frozen cells (painted on
//! top so scrolled content slides under them), then the header bands.

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;

use trellis_axis::ExtentModel;
use trellis_cell::{DrawOp, RenderCtx, TextAlign};
use trellis_viewport::Position;

use crate::engine::GridEngine;
use crate::scheduler::FrameScheduler;
use crate::source::DataSource;

const BACKGROUND: Color = Color::from_rgb8(0xff, 0xff, 0xff);
const HEADER_FILL: Color = Color::from_rgb8(0xf7, 0xf8, 0xfa);
const SELECTION_FILL: Color = Color::from_rgb8(0xe8, 0xf0, 0xfd);
const HOVER_FILL: Color = Color::from_rgb8(0xf2, 0xf5, 0xf9);

impl<S: FrameScheduler> GridEngine<S> {
    /// Emits the full frame: cells, frozen pass, headers.
    pub(crate) fn draw(&mut self, source: &impl DataSource) -> Vec<DrawOp> {
        let mut ops = Vec::new();
        ops.push(DrawOp::Rect {
            rect: Rect::new(0.0, 0.0, self.viewport.width, self.viewport.height),
            fill: Some(BACKGROUND),
            stroke: None,
            radius: 0.0,
        });
        if self.columns.is_empty() {
            return ops;
        }

        let mut window = self.visible_window();
        self.measure_window(source, &window);
        // Measuring may have grown rows and shifted offsets.
        window = self.visible_window();

        let freeze = self.mapper.freeze_count();

        // Scrolled cells.
        for row in window.rows() {
            for column in window.columns() {
                self.draw_cell(source, Position::new(row, column), &mut ops);
            }
        }
        // Frozen cells, painted on top.
        for row in window.rows() {
            for column in 0..freeze {
                self.draw_cell(source, Position::new(row, column), &mut ops);
            }
        }

        self.draw_row_headers(&window, &mut ops);
        self.draw_column_headers(&window, &mut ops);
        ops
    }

    /// Feeds measured content heights back into the row table.
    ///
    /// The row takes the max of its visible cells' measured heights; rows
    /// whose content fits keep the nominal height.
    fn measure_window(&mut self, source: &impl DataSource, window: &trellis_viewport::VisibleWindow) {
        let freeze = self.mapper.freeze_count();
        let nominal = source.row_height();
        let widths: Vec<(usize, f64)> = (0..freeze)
            .chain(window.columns())
            .map(|column| (column, self.columns[column].width))
            .collect();

        for row in window.rows() {
            let mut height = nominal;
            for &(column, width) in &widths {
                let cell = source.cell(Position::new(row, column));
                let ctx = RenderCtx::new(self.theme(), self.text_measurer());
                let measured = self.registry().measure(&cell, &ctx, width);
                height = height.max(measured.height);
            }
            self.mapper.rows_mut().set_extent(row, height);
        }
    }

    fn draw_cell(&mut self, source: &impl DataSource, position: Position, ops: &mut Vec<DrawOp>) {
        let Some(rect) = self.mapper.cell_rect(position, self.scroll) else {
            return;
        };
        let selected = self.selection().contains(position);
        let hovered = self.hover() == Some(position);
        let active = self.active_cell() == Some(position);
        let drop_target = self.drop_target() == Some(position);
        let editing = matches!(
            self.edit_state(),
            trellis_editing::EditState::Editing { position: at, .. } if *at == position
        );

        ops.push(DrawOp::PushClip { rect });
        let border = self.theme().border;
        let accent = self.theme().accent;
        let fill = if selected {
            SELECTION_FILL
        } else if hovered {
            HOVER_FILL
        } else {
            BACKGROUND
        };
        ops.push(DrawOp::Rect {
            rect,
            fill: Some(fill),
            stroke: Some((border, 1.0)),
            radius: 0.0,
        });

        let cell = source.cell(position);
        let ctx = RenderCtx::new(self.theme(), self.text_measurer());
        self.registry().draw(&cell, rect, &ctx, ops);
        ops.push(DrawOp::PopClip);

        // The active/editing/drop outline draws unclipped so it stays crisp
        // at cell edges.
        if active || editing || drop_target {
            ops.push(DrawOp::Rect {
                rect,
                fill: None,
                stroke: Some((accent, if editing { 2.0 } else { 1.5 })),
                radius: 0.0,
            });
        }
    }

    fn draw_row_headers(
        &mut self,
        window: &trellis_viewport::VisibleWindow,
        ops: &mut Vec<DrawOp>,
    ) {
        let width = self.mapper.row_header_width();
        if width <= 0.0 {
            return;
        }
        ops.push(DrawOp::Rect {
            rect: Rect::new(0.0, 0.0, width, self.viewport.height),
            fill: Some(HEADER_FILL),
            stroke: Some((self.theme().border, 1.0)),
            radius: 0.0,
        });
        for row in window.rows() {
            let y = self.mapper.row_screen_y(row, self.scroll.y);
            let height = self.mapper.rows_mut().extent_of(row);
            let selected = self.selection().row_selected(row);
            if selected {
                ops.push(DrawOp::Rect {
                    rect: Rect::new(0.0, y, width, y + height),
                    fill: Some(SELECTION_FILL),
                    stroke: None,
                    radius: 0.0,
                });
            }
            ops.push(DrawOp::Text {
                text: alloc::format!("{}", row + 1),
                origin: Point::new(0.0, y + 4.0),
                color: self.theme().muted,
                size: self.theme().small_font_size,
                align: TextAlign::Center,
                max_width: Some(width),
            });
        }
    }

    fn draw_column_headers(
        &mut self,
        window: &trellis_viewport::VisibleWindow,
        ops: &mut Vec<DrawOp>,
    ) {
        let height = self.mapper.column_header_height();
        if height <= 0.0 {
            return;
        }
        ops.push(DrawOp::Rect {
            rect: Rect::new(0.0, 0.0, self.viewport.width, height),
            fill: Some(HEADER_FILL),
            stroke: Some((self.theme().border, 1.0)),
            radius: 0.0,
        });

        let freeze = self.mapper.freeze_count();
        let columns: Vec<usize> = window.columns().chain(0..freeze).collect();
        for column in columns {
            let x = self.mapper.column_screen_x(column, self.scroll.x);
            let Some(spec) = self.columns.get(column) else {
                continue;
            };
            let rect = Rect::new(x, 0.0, x + spec.width, height);
            let selected = self.selection().column_selected(column);
            ops.push(DrawOp::Rect {
                rect,
                fill: Some(if selected { SELECTION_FILL } else { HEADER_FILL }),
                stroke: Some((self.theme().border, 1.0)),
                radius: 0.0,
            });
            ops.push(DrawOp::PushClip { rect });
            ops.push(DrawOp::Text {
                text: spec.name.clone(),
                origin: Point::new(x + 8.0, (height - self.theme().line_px()) / 2.0),
                color: self.theme().text,
                size: self.theme().font_size,
                align: TextAlign::Left,
                max_width: Some(spec.width - 16.0),
            });
            ops.push(DrawOp::PopClip);
        }
    }
}
