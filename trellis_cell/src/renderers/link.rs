// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linked-record renderer.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::cell::Cell;
use crate::data::{CellRegion, PreviewTarget};
use crate::ops::{DrawOp, TextAlign};
use crate::render::{CellRenderer, RenderCtx};
use crate::renderers::content_rect;

/// Renders link cells as a stack of underlined record titles.
///
/// Each title occupies one line; clicking a title yields a
/// [`CellRegion::Preview`] naming the record to navigate to.
#[derive(Clone, Debug, Default)]
pub struct LinkRenderer;

impl CellRenderer for LinkRenderer {
    fn measure(&self, cell: &Cell, ctx: &RenderCtx<'_>, width: f64) -> Size {
        let lines = match cell {
            Cell::Link { links } => links.len().max(1),
            _ => 1,
        };
        let theme = ctx.theme;
        Size::new(width, lines as f64 * theme.line_px() + 2.0 * theme.padding)
    }

    fn draw(&self, cell: &Cell, rect: Rect, ctx: &RenderCtx<'_>, out: &mut Vec<DrawOp>) {
        let Cell::Link { links } = cell else {
            return;
        };
        let theme = ctx.theme;
        let content = content_rect(rect, theme);
        for (index, link) in links.iter().enumerate() {
            let y = content.y0 + index as f64 * theme.line_px();
            if y >= content.y1 {
                break;
            }
            let text_width = ctx
                .text
                .width(&link.title, theme.font_size)
                .min(content.width());
            out.push(DrawOp::Text {
                text: link.title.clone(),
                origin: Point::new(content.x0, y),
                color: theme.accent,
                size: theme.font_size,
                align: TextAlign::Left,
                max_width: Some(content.width()),
            });
            let underline_y = y + theme.line_px() - 3.0;
            out.push(DrawOp::Line {
                from: Point::new(content.x0, underline_y),
                to: Point::new(content.x0 + text_width, underline_y),
                color: theme.accent,
                width: 1.0,
            });
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
        let Cell::Link { links } = cell else {
            return CellRegion::Blank;
        };
        let theme = ctx.theme;
        let content = content_rect(rect, theme);
        if !content.contains(point) {
            return CellRegion::Blank;
        }
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "the y delta is non-negative inside the content rect and small"
        )]
        let line = ((point.y - content.y0) / theme.line_px()) as usize;
        let Some(link) = links.get(line) else {
            return CellRegion::Blank;
        };
        let text_width = ctx.text.width(&link.title, theme.font_size);
        if point.x <= content.x0 + text_width {
            CellRegion::Preview(PreviewTarget::Record {
                id: link.id.clone(),
            })
        } else {
            CellRegion::Blank
        }
    }
}
