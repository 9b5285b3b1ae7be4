// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Checkbox renderer.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::cell::Cell;
use crate::data::{CellData, CellRegion};
use crate::ops::{DrawOp, IconKind};
use crate::render::{CellRenderer, RenderCtx};

const CHECKBOX_SIZE: f64 = 16.0;
// Clicks slightly outside the drawn box still count.
const HIT_SLOP: f64 = 4.0;

/// Renders boolean cells as a centered checkbox.
#[derive(Clone, Debug, Default)]
pub struct BooleanRenderer;

impl BooleanRenderer {
    fn checkbox_rect(rect: Rect) -> Rect {
        let x = rect.x0 + (rect.width() - CHECKBOX_SIZE) / 2.0;
        let y = rect.y0 + (rect.height() - CHECKBOX_SIZE) / 2.0;
        Rect::new(x, y, x + CHECKBOX_SIZE, y + CHECKBOX_SIZE)
    }
}

impl CellRenderer for BooleanRenderer {
    fn measure(&self, _cell: &Cell, ctx: &RenderCtx<'_>, width: f64) -> Size {
        Size::new(width, CHECKBOX_SIZE + 2.0 * ctx.theme.padding)
    }

    fn draw(&self, cell: &Cell, rect: Rect, ctx: &RenderCtx<'_>, out: &mut Vec<DrawOp>) {
        let Cell::Boolean { data } = cell else {
            return;
        };
        let theme = ctx.theme;
        let (icon, color) = if *data {
            (IconKind::CheckboxChecked, theme.accent)
        } else {
            (IconKind::Checkbox, theme.muted)
        };
        out.push(DrawOp::Icon {
            icon,
            rect: Self::checkbox_rect(rect),
            color,
        });
    }

    fn check_region(
        &self,
        cell: &Cell,
        rect: Rect,
        point: Point,
        _should_mutate: bool,
        _ctx: &RenderCtx<'_>,
    ) -> CellRegion {
        let Cell::Boolean { data } = cell else {
            return CellRegion::Blank;
        };
        let hit = Self::checkbox_rect(rect).inflate(HIT_SLOP, HIT_SLOP);
        if hit.contains(point) {
            CellRegion::Update(CellData::Boolean(!data))
        } else {
            CellRegion::Blank
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::BooleanRenderer;
    use crate::cell::Cell;
    use crate::data::{CellData, CellRegion};
    use crate::render::{CellRenderer, RenderCtx};
    use crate::text::MonospaceMeasurer;
    use crate::theme::CellTheme;

    #[test]
    fn click_on_checkbox_toggles() {
        let theme = CellTheme::default();
        let text = MonospaceMeasurer::default();
        let ctx = RenderCtx::new(&theme, &text);
        let rect = Rect::new(0.0, 0.0, 80.0, 36.0);

        let region = BooleanRenderer.check_region(
            &Cell::boolean(true),
            rect,
            Point::new(40.0, 18.0),
            true,
            &ctx,
        );
        assert_eq!(region, CellRegion::Update(CellData::Boolean(false)));
    }

    #[test]
    fn click_outside_checkbox_is_blank() {
        let theme = CellTheme::default();
        let text = MonospaceMeasurer::default();
        let ctx = RenderCtx::new(&theme, &text);
        let rect = Rect::new(0.0, 0.0, 80.0, 36.0);

        let region = BooleanRenderer.check_region(
            &Cell::boolean(false),
            rect,
            Point::new(4.0, 4.0),
            true,
            &ctx,
        );
        assert!(region.is_blank());
    }
}
