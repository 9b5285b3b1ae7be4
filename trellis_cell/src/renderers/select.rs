// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Select and multi-select chip renderer.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::cell::Cell;
use crate::data::CellRegion;
use crate::ops::{DrawOp, TextAlign};
use crate::render::{CellRenderer, RenderCtx};
use crate::renderers::content_rect;

const CHIP_HEIGHT: f64 = 20.0;
const CHIP_PAD_X: f64 = 8.0;
const CHIP_GAP: f64 = 4.0;

/// Renders select cells as choice chips.
///
/// Serves both single- and multi-select kinds; the payload is the same
/// shape. Clicking anywhere in the content opens the choice editor.
#[derive(Clone, Debug, Default)]
pub struct SelectRenderer;

impl SelectRenderer {
    fn chip_names(cell: &Cell) -> Vec<(String, Option<peniko::Color>)> {
        let Cell::Select { chosen, options } = cell else {
            return Vec::new();
        };
        chosen
            .iter()
            .map(|id| match options.choice(id) {
                Some(choice) => (choice.name.clone(), choice.color),
                None => (id.clone(), None),
            })
            .collect()
    }

    fn chip_width(name: &str, ctx: &RenderCtx<'_>) -> f64 {
        ctx.text.width(name, ctx.theme.small_font_size) + 2.0 * CHIP_PAD_X
    }
}

impl CellRenderer for SelectRenderer {
    fn measure(&self, cell: &Cell, ctx: &RenderCtx<'_>, width: f64) -> Size {
        let theme = ctx.theme;
        let inner_width = (width - 2.0 * theme.padding).max(0.0);
        // Greedy chip wrapping: rows grow when the next chip does not fit.
        let mut rows = 1_usize;
        let mut x = 0.0;
        for (name, _) in Self::chip_names(cell) {
            let chip = Self::chip_width(&name, ctx);
            if x > 0.0 && x + chip > inner_width {
                rows += 1;
                x = 0.0;
            }
            x += chip + CHIP_GAP;
        }
        Size::new(
            width,
            rows as f64 * (CHIP_HEIGHT + CHIP_GAP) - CHIP_GAP + 2.0 * theme.padding,
        )
    }

    fn draw(&self, cell: &Cell, rect: Rect, ctx: &RenderCtx<'_>, out: &mut Vec<DrawOp>) {
        let theme = ctx.theme;
        let content = content_rect(rect, theme);
        let mut x = content.x0;
        let y = content.y0 + (content.height() - CHIP_HEIGHT).max(0.0) / 2.0;
        for (name, color) in Self::chip_names(cell) {
            let chip_width = Self::chip_width(&name, ctx);
            if x + chip_width > content.x1 && x > content.x0 {
                break;
            }
            let chip = Rect::new(x, y, x + chip_width, y + CHIP_HEIGHT);
            out.push(DrawOp::Rect {
                rect: chip,
                fill: Some(color.unwrap_or(theme.chip_fill)),
                stroke: None,
                radius: CHIP_HEIGHT / 2.0,
            });
            out.push(DrawOp::Text {
                text: name,
                origin: Point::new(
                    x + CHIP_PAD_X,
                    y + (CHIP_HEIGHT - theme.small_font_size * theme.line_height) / 2.0,
                ),
                color: theme.chip_text,
                size: theme.small_font_size,
                align: TextAlign::Left,
                max_width: Some(chip_width - 2.0 * CHIP_PAD_X),
            });
            x += chip_width + CHIP_GAP;
        }
    }

    fn check_region(
        &self,
        cell: &Cell,
        rect: Rect,
        point: Point,
        _should_mutate: bool,
        ctx: &RenderCtx<'_>,
    ) -> CellRegion {
        if !matches!(cell, Cell::Select { .. }) {
            return CellRegion::Blank;
        }
        if content_rect(rect, ctx.theme).contains(point) {
            CellRegion::ToggleEditing
        } else {
            CellRegion::Blank
        }
    }
}
