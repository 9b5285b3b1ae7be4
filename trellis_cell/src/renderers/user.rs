// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator-chip renderer.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::cell::Cell;
use crate::data::CellRegion;
use crate::ops::{DrawOp, IconKind, TextAlign};
use crate::render::{CellRenderer, RenderCtx};
use crate::renderers::content_rect;

const CHIP_HEIGHT: f64 = 22.0;
const AVATAR_SIZE: f64 = 16.0;
const CHIP_PAD_X: f64 = 6.0;
const CHIP_GAP: f64 = 4.0;

/// Renders user cells as avatar + name chips.
///
/// Clicking the content opens the collaborator editor.
#[derive(Clone, Debug, Default)]
pub struct UserRenderer;

impl CellRenderer for UserRenderer {
    fn measure(&self, _cell: &Cell, ctx: &RenderCtx<'_>, width: f64) -> Size {
        Size::new(width, CHIP_HEIGHT + 2.0 * ctx.theme.padding)
    }

    fn draw(&self, cell: &Cell, rect: Rect, ctx: &RenderCtx<'_>, out: &mut Vec<DrawOp>) {
        let Cell::User { users } = cell else {
            return;
        };
        let theme = ctx.theme;
        let content = content_rect(rect, theme);
        let y = content.y0 + (content.height() - CHIP_HEIGHT).max(0.0) / 2.0;
        let mut x = content.x0;
        for user in users {
            let name_width = ctx.text.width(&user.name, theme.small_font_size);
            let chip_width = AVATAR_SIZE + CHIP_PAD_X * 3.0 + name_width;
            if x + chip_width > content.x1 && x > content.x0 {
                break;
            }
            let chip = Rect::new(x, y, x + chip_width, y + CHIP_HEIGHT);
            out.push(DrawOp::Rect {
                rect: chip,
                fill: Some(theme.chip_fill),
                stroke: None,
                radius: CHIP_HEIGHT / 2.0,
            });
            let avatar_y = y + (CHIP_HEIGHT - AVATAR_SIZE) / 2.0;
            out.push(DrawOp::Icon {
                icon: IconKind::Avatar,
                rect: Rect::new(
                    x + CHIP_PAD_X,
                    avatar_y,
                    x + CHIP_PAD_X + AVATAR_SIZE,
                    avatar_y + AVATAR_SIZE,
                ),
                color: theme.muted,
            });
            out.push(DrawOp::Text {
                text: user.name.clone(),
                origin: Point::new(
                    x + CHIP_PAD_X * 2.0 + AVATAR_SIZE,
                    y + (CHIP_HEIGHT - theme.small_font_size * theme.line_height) / 2.0,
                ),
                color: theme.chip_text,
                size: theme.small_font_size,
                align: TextAlign::Left,
                max_width: Some(name_width),
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
        if !matches!(cell, Cell::User { .. }) {
            return CellRegion::Blank;
        }
        if content_rect(rect, ctx.theme).contains(point) {
            CellRegion::ToggleEditing
        } else {
            CellRegion::Blank
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::{Point, Rect};

    use super::UserRenderer;
    use crate::cell::{Cell, UserItem};
    use crate::data::CellRegion;
    use crate::render::{CellRenderer, RenderCtx};
    use crate::text::MonospaceMeasurer;
    use crate::theme::CellTheme;

    #[test]
    fn draws_chip_avatar_and_name_per_user() {
        let theme = CellTheme::default();
        let text = MonospaceMeasurer::default();
        let ctx = RenderCtx::new(&theme, &text);
        let cell = Cell::User {
            users: vec![UserItem {
                id: String::from("u1"),
                name: String::from("Ada"),
            }],
        };
        let mut ops = Vec::new();
        UserRenderer.draw(&cell, Rect::new(0.0, 0.0, 200.0, 36.0), &ctx, &mut ops);
        assert_eq!(ops.len(), 3);
    }

    #[test]
    fn content_click_opens_editor() {
        let theme = CellTheme::default();
        let text = MonospaceMeasurer::default();
        let ctx = RenderCtx::new(&theme, &text);
        let cell = Cell::User { users: vec![] };
        let region = UserRenderer.check_region(
            &cell,
            Rect::new(0.0, 0.0, 200.0, 36.0),
            Point::new(100.0, 18.0),
            true,
            &ctx,
        );
        assert_eq!(region, CellRegion::ToggleEditing);
    }
}
