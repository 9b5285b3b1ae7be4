// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attachment-thumbnail renderer.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::cell::Cell;
use crate::data::{CellRegion, PreviewTarget};
use crate::ops::{DrawOp, IconKind};
use crate::render::{CellRenderer, RenderCtx};
use crate::renderers::{content_rect, slot_rect};

const THUMB_SIZE: f64 = 24.0;
const THUMB_GAP: f64 = 4.0;

/// Renders attachment cells as a row of thumbnails.
///
/// Clicking a thumbnail opens that attachment's preview; clicking the
/// remaining content opens the attachment editor.
#[derive(Clone, Debug, Default)]
pub struct AttachmentRenderer;

impl AttachmentRenderer {
    fn thumb_at(content: Rect, count: usize, point: Point) -> Option<usize> {
        (0..count).find(|&index| slot_rect(content, index, THUMB_SIZE, THUMB_GAP).contains(point))
    }
}

impl CellRenderer for AttachmentRenderer {
    fn measure(&self, _cell: &Cell, ctx: &RenderCtx<'_>, width: f64) -> Size {
        Size::new(width, THUMB_SIZE + 2.0 * ctx.theme.padding)
    }

    fn draw(&self, cell: &Cell, rect: Rect, ctx: &RenderCtx<'_>, out: &mut Vec<DrawOp>) {
        let Cell::Attachment { items } = cell else {
            return;
        };
        let theme = ctx.theme;
        let content = content_rect(rect, theme);
        for (index, _item) in items.iter().enumerate() {
            let thumb = slot_rect(content, index, THUMB_SIZE, THUMB_GAP);
            if thumb.x1 > content.x1 {
                break;
            }
            out.push(DrawOp::Rect {
                rect: thumb,
                fill: None,
                stroke: Some((theme.border, 1.0)),
                radius: 3.0,
            });
            out.push(DrawOp::Icon {
                icon: IconKind::Paperclip,
                rect: thumb.inflate(-5.0, -5.0),
                color: theme.muted,
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
        let Cell::Attachment { items } = cell else {
            return CellRegion::Blank;
        };
        let content = content_rect(rect, ctx.theme);
        if !content.contains(point) {
            return CellRegion::Blank;
        }
        match Self::thumb_at(content, items.len(), point) {
            Some(index) => CellRegion::Preview(PreviewTarget::Attachment {
                id: items[index].id.clone(),
            }),
            None => CellRegion::ToggleEditing,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use kurbo::{Point, Rect};

    use super::AttachmentRenderer;
    use crate::cell::{AttachmentItem, Cell};
    use crate::data::{CellRegion, PreviewTarget};
    use crate::render::{CellRenderer, RenderCtx};
    use crate::text::MonospaceMeasurer;
    use crate::theme::CellTheme;

    fn attachment_cell() -> Cell {
        Cell::Attachment {
            items: vec![
                AttachmentItem {
                    id: String::from("at1"),
                    name: String::from("photo.png"),
                    mime: String::from("image/png"),
                },
                AttachmentItem {
                    id: String::from("at2"),
                    name: String::from("doc.pdf"),
                    mime: String::from("application/pdf"),
                },
            ],
        }
    }

    #[test]
    fn clicking_a_thumbnail_previews_it() {
        let theme = CellTheme::default();
        let text = MonospaceMeasurer::default();
        let ctx = RenderCtx::new(&theme, &text);
        let rect = Rect::new(0.0, 0.0, 200.0, 40.0);

        // Second thumbnail starts at padding + 28.
        let region = AttachmentRenderer.check_region(
            &attachment_cell(),
            rect,
            Point::new(theme.padding + 28.0 + 12.0, 20.0),
            true,
            &ctx,
        );
        assert_eq!(
            region,
            CellRegion::Preview(PreviewTarget::Attachment {
                id: String::from("at2")
            })
        );
    }

    #[test]
    fn clicking_empty_content_opens_editor() {
        let theme = CellTheme::default();
        let text = MonospaceMeasurer::default();
        let ctx = RenderCtx::new(&theme, &text);
        let rect = Rect::new(0.0, 0.0, 200.0, 40.0);

        let region = AttachmentRenderer.check_region(
            &attachment_cell(),
            rect,
            Point::new(150.0, 20.0),
            true,
            &ctx,
        );
        assert_eq!(region, CellRegion::ToggleEditing);
    }
}
