// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Action-button renderer.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use peniko::Color;

use crate::cell::Cell;
use crate::data::{CellRegion, PreviewTarget};
use crate::ops::{DrawOp, TextAlign};
use crate::render::{CellRenderer, RenderCtx};
use crate::renderers::content_rect;

const BUTTON_HEIGHT: f64 = 22.0;
const BUTTON_PAD_X: f64 = 10.0;

/// Renders button cells as a centered pill.
///
/// Pressing the pill yields a [`CellRegion::Preview`] carrying the button's
/// host-defined action id; the engine forwards it without interpreting it.
#[derive(Clone, Debug, Default)]
pub struct ButtonRenderer;

impl ButtonRenderer {
    fn button_rect(label: &str, rect: Rect, ctx: &RenderCtx<'_>) -> Rect {
        let content = content_rect(rect, ctx.theme);
        let label_width = ctx.text.width(label, ctx.theme.small_font_size);
        let width = (label_width + 2.0 * BUTTON_PAD_X).min(content.width());
        let x = content.x0 + (content.width() - width) / 2.0;
        let y = content.y0 + (content.height() - BUTTON_HEIGHT).max(0.0) / 2.0;
        Rect::new(x, y, x + width, y + BUTTON_HEIGHT)
    }
}

impl CellRenderer for ButtonRenderer {
    fn measure(&self, _cell: &Cell, ctx: &RenderCtx<'_>, width: f64) -> Size {
        Size::new(width, BUTTON_HEIGHT + 2.0 * ctx.theme.padding)
    }

    fn draw(&self, cell: &Cell, rect: Rect, ctx: &RenderCtx<'_>, out: &mut Vec<DrawOp>) {
        let Cell::Button { label, .. } = cell else {
            return;
        };
        let theme = ctx.theme;
        let button = Self::button_rect(label, rect, ctx);
        out.push(DrawOp::Rect {
            rect: button,
            fill: Some(theme.accent),
            stroke: None,
            radius: BUTTON_HEIGHT / 2.0,
        });
        out.push(DrawOp::Text {
            text: label.clone(),
            origin: Point::new(
                button.x0,
                button.y0 + (BUTTON_HEIGHT - theme.small_font_size * theme.line_height) / 2.0,
            ),
            color: Color::WHITE,
            size: theme.small_font_size,
            align: TextAlign::Center,
            max_width: Some(button.width()),
        });
    }

    fn check_region(
        &self,
        cell: &Cell,
        rect: Rect,
        point: Point,
        _should_mutate: bool,
        ctx: &RenderCtx<'_>,
    ) -> CellRegion {
        let Cell::Button { label, action } = cell else {
            return CellRegion::Blank;
        };
        if Self::button_rect(label, rect, ctx).contains(point) {
            CellRegion::Preview(PreviewTarget::Action {
                id: action.clone(),
            })
        } else {
            CellRegion::Blank
        }
    }
}
