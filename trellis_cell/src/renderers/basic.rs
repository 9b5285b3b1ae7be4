// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text-like renderers: text, number, date, and the loading skeleton.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::cell::Cell;
use crate::ops::{DrawOp, TextAlign};
use crate::render::{CellRenderer, RenderCtx};
use crate::renderers::content_rect;

/// Renders text cells; also the registry's fallback for unregistered kinds.
///
/// Non-text cells reaching this renderer (the fallback path) draw their
/// [`Cell::display_text`] as a single unwrapped line.
#[derive(Clone, Debug, Default)]
pub struct TextRenderer;

impl TextRenderer {
    fn content(cell: &Cell) -> (alloc::string::String, bool) {
        match cell {
            Cell::Text { display, wrap, .. } => (display.clone(), *wrap),
            other => (other.display_text(), false),
        }
    }
}

impl CellRenderer for TextRenderer {
    fn measure(&self, cell: &Cell, ctx: &RenderCtx<'_>, width: f64) -> Size {
        let (display, wrap) = Self::content(cell);
        let theme = ctx.theme;
        let inner_width = (width - 2.0 * theme.padding).max(0.0);
        let lines = if wrap {
            ctx.text.wrap(&display, theme.font_size, inner_width).len().max(1)
        } else {
            1
        };
        Size::new(width, lines as f64 * theme.line_px() + 2.0 * theme.padding)
    }

    fn draw(&self, cell: &Cell, rect: Rect, ctx: &RenderCtx<'_>, out: &mut Vec<DrawOp>) {
        let (display, wrap) = Self::content(cell);
        if display.is_empty() {
            return;
        }
        let theme = ctx.theme;
        let content = content_rect(rect, theme);
        if wrap {
            let lines = ctx.text.wrap(&display, theme.font_size, content.width());
            for (index, line) in lines.into_iter().enumerate() {
                let y = content.y0 + index as f64 * theme.line_px();
                if y >= content.y1 {
                    break;
                }
                out.push(DrawOp::Text {
                    text: line,
                    origin: Point::new(content.x0, y),
                    color: theme.text,
                    size: theme.font_size,
                    align: TextAlign::Left,
                    max_width: Some(content.width()),
                });
            }
        } else {
            out.push(DrawOp::Text {
                text: display,
                origin: Point::new(content.x0, content.y0),
                color: theme.text,
                size: theme.font_size,
                align: TextAlign::Left,
                max_width: Some(content.width()),
            });
        }
    }
}

/// Renders number cells right-aligned.
#[derive(Clone, Debug, Default)]
pub struct NumberRenderer;

impl CellRenderer for NumberRenderer {
    fn measure(&self, _cell: &Cell, ctx: &RenderCtx<'_>, width: f64) -> Size {
        Size::new(width, ctx.theme.line_px() + 2.0 * ctx.theme.padding)
    }

    fn draw(&self, cell: &Cell, rect: Rect, ctx: &RenderCtx<'_>, out: &mut Vec<DrawOp>) {
        let display = match cell {
            Cell::Number { display, .. } => display.clone(),
            other => other.display_text(),
        };
        if display.is_empty() {
            return;
        }
        let theme = ctx.theme;
        let content = content_rect(rect, theme);
        out.push(DrawOp::Text {
            text: display,
            origin: Point::new(content.x0, content.y0),
            color: theme.text,
            size: theme.font_size,
            align: TextAlign::Right,
            max_width: Some(content.width()),
        });
    }
}

/// Renders date cells.
#[derive(Clone, Debug, Default)]
pub struct DateRenderer;

impl CellRenderer for DateRenderer {
    fn measure(&self, _cell: &Cell, ctx: &RenderCtx<'_>, width: f64) -> Size {
        Size::new(width, ctx.theme.line_px() + 2.0 * ctx.theme.padding)
    }

    fn draw(&self, cell: &Cell, rect: Rect, ctx: &RenderCtx<'_>, out: &mut Vec<DrawOp>) {
        let display = match cell {
            Cell::Date { display, .. } => display.clone(),
            other => other.display_text(),
        };
        if display.is_empty() {
            return;
        }
        let theme = ctx.theme;
        let content = content_rect(rect, theme);
        out.push(DrawOp::Text {
            text: display,
            origin: Point::new(content.x0, content.y0),
            color: theme.muted,
            size: theme.font_size,
            align: TextAlign::Left,
            max_width: Some(content.width()),
        });
    }
}

/// Renders the loading placeholder: a skeleton bar.
#[derive(Clone, Debug, Default)]
pub struct LoadingRenderer;

impl CellRenderer for LoadingRenderer {
    fn measure(&self, _cell: &Cell, ctx: &RenderCtx<'_>, width: f64) -> Size {
        Size::new(width, ctx.theme.line_px() + 2.0 * ctx.theme.padding)
    }

    fn draw(&self, _cell: &Cell, rect: Rect, ctx: &RenderCtx<'_>, out: &mut Vec<DrawOp>) {
        let theme = ctx.theme;
        let content = content_rect(rect, theme);
        let bar_height = 10.0_f64.min(content.height());
        let y = content.y0 + (content.height() - bar_height) / 2.0;
        out.push(DrawOp::Rect {
            rect: Rect::new(content.x0, y, content.x0 + content.width() * 0.6, y + bar_height),
            fill: Some(theme.skeleton),
            stroke: None,
            radius: bar_height / 2.0,
        });
    }
}
