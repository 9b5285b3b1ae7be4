// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Star-rating renderer.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::cell::Cell;
use crate::data::{CellData, CellRegion};
use crate::ops::{DrawOp, IconKind};
use crate::render::{CellRenderer, RenderCtx};
use crate::renderers::{content_rect, slot_rect};

const STAR_SIZE: f64 = 16.0;
const STAR_GAP: f64 = 4.0;

/// Renders rating cells as a row of stars.
///
/// Clicking star `i` sets the value to `i + 1`; clicking the star that is
/// already the current value clears the rating (the unset state is `None`,
/// never zero). Hover region checks (`should_mutate == false`) always
/// report the would-be set value so previews never look like a clear.
#[derive(Clone, Debug, Default)]
pub struct RatingRenderer;

impl RatingRenderer {
    fn star_at(content: Rect, max: u8, point: Point) -> Option<u8> {
        for index in 0..max {
            let star = slot_rect(content, index as usize, STAR_SIZE, STAR_GAP);
            if star.inflate(STAR_GAP / 2.0, STAR_GAP / 2.0).contains(point) {
                return Some(index + 1);
            }
        }
        None
    }
}

impl CellRenderer for RatingRenderer {
    fn measure(&self, cell: &Cell, ctx: &RenderCtx<'_>, width: f64) -> Size {
        let max = match cell {
            Cell::Rating { max, .. } => *max,
            _ => 0,
        };
        let needed = f64::from(max) * (STAR_SIZE + STAR_GAP) + 2.0 * ctx.theme.padding;
        Size::new(width.max(needed), STAR_SIZE + 2.0 * ctx.theme.padding)
    }

    fn draw(&self, cell: &Cell, rect: Rect, ctx: &RenderCtx<'_>, out: &mut Vec<DrawOp>) {
        let Cell::Rating { data, max } = cell else {
            return;
        };
        let theme = ctx.theme;
        let content = content_rect(rect, theme);
        let set = data.unwrap_or(0);
        for index in 0..*max {
            let (icon, color) = if index < set {
                (IconKind::StarFilled, theme.star)
            } else {
                (IconKind::Star, theme.muted)
            };
            out.push(DrawOp::Icon {
                icon,
                rect: slot_rect(content, index as usize, STAR_SIZE, STAR_GAP),
                color,
            });
        }
    }

    fn check_region(
        &self,
        cell: &Cell,
        rect: Rect,
        point: Point,
        should_mutate: bool,
        ctx: &RenderCtx<'_>,
    ) -> CellRegion {
        let Cell::Rating { data, max } = cell else {
            return CellRegion::Blank;
        };
        let content = content_rect(rect, ctx.theme);
        let Some(value) = Self::star_at(content, *max, point) else {
            return CellRegion::Blank;
        };
        if should_mutate && *data == Some(value) {
            return CellRegion::Update(CellData::Rating(None));
        }
        CellRegion::Update(CellData::Rating(Some(value)))
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::{RatingRenderer, STAR_GAP, STAR_SIZE};
    use crate::cell::Cell;
    use crate::data::{CellData, CellRegion};
    use crate::render::{CellRenderer, RenderCtx};
    use crate::text::MonospaceMeasurer;
    use crate::theme::CellTheme;

    fn star_center(theme: &CellTheme, index: usize) -> Point {
        let x = theme.padding + index as f64 * (STAR_SIZE + STAR_GAP) + STAR_SIZE / 2.0;
        Point::new(x, 18.0)
    }

    #[test]
    fn clicking_a_star_sets_its_value() {
        let theme = CellTheme::default();
        let text = MonospaceMeasurer::default();
        let ctx = RenderCtx::new(&theme, &text);
        let rect = Rect::new(0.0, 0.0, 160.0, 36.0);

        let region = RatingRenderer.check_region(
            &Cell::rating(Some(1)),
            rect,
            star_center(&theme, 2),
            true,
            &ctx,
        );
        assert_eq!(region, CellRegion::Update(CellData::Rating(Some(3))));
    }

    #[test]
    fn clicking_current_star_clears_to_unset() {
        let theme = CellTheme::default();
        let text = MonospaceMeasurer::default();
        let ctx = RenderCtx::new(&theme, &text);
        let rect = Rect::new(0.0, 0.0, 160.0, 36.0);

        let region = RatingRenderer.check_region(
            &Cell::rating(Some(3)),
            rect,
            star_center(&theme, 2),
            true,
            &ctx,
        );
        // Cleared means None, not zero.
        assert_eq!(region, CellRegion::Update(CellData::Rating(None)));
    }

    #[test]
    fn hover_preview_never_reports_a_clear() {
        let theme = CellTheme::default();
        let text = MonospaceMeasurer::default();
        let ctx = RenderCtx::new(&theme, &text);
        let rect = Rect::new(0.0, 0.0, 160.0, 36.0);

        let region = RatingRenderer.check_region(
            &Cell::rating(Some(3)),
            rect,
            star_center(&theme, 2),
            false,
            &ctx,
        );
        assert_eq!(region, CellRegion::Update(CellData::Rating(Some(3))));
    }

    #[test]
    fn click_past_stars_is_blank() {
        let theme = CellTheme::default();
        let text = MonospaceMeasurer::default();
        let ctx = RenderCtx::new(&theme, &text);
        let rect = Rect::new(0.0, 0.0, 300.0, 36.0);

        let region = RatingRenderer.check_region(
            &Cell::rating(None),
            rect,
            Point::new(290.0, 18.0),
            true,
            &ctx,
        );
        assert!(region.is_blank());
    }
}
