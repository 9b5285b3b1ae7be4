// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in renderers, one per cell kind.
//!
//! Each renderer is a small stateless struct; the registry owns one instance
//! per kind. Layout constants (chip heights, star sizes) live next to the
//! renderer that uses them.

mod attachment;
mod basic;
mod boolean;
mod button;
mod link;
mod rating;
mod select;
mod user;

pub use attachment::AttachmentRenderer;
pub use basic::{DateRenderer, LoadingRenderer, NumberRenderer, TextRenderer};
pub use boolean::BooleanRenderer;
pub use button::ButtonRenderer;
pub use link::LinkRenderer;
pub use rating::RatingRenderer;
pub use select::SelectRenderer;
pub use user::UserRenderer;

use kurbo::Rect;

use crate::theme::CellTheme;

/// The cell rectangle inset by the theme padding.
pub(crate) fn content_rect(rect: Rect, theme: &CellTheme) -> Rect {
    Rect::new(
        rect.x0 + theme.padding,
        rect.y0 + theme.padding,
        (rect.x1 - theme.padding).max(rect.x0 + theme.padding),
        (rect.y1 - theme.padding).max(rect.y0 + theme.padding),
    )
}

/// A rectangle of `size × size` vertically centered at the content left
/// edge, offset by `index` slots of `size + gap`.
pub(crate) fn slot_rect(content: Rect, index: usize, size: f64, gap: f64) -> Rect {
    let x = content.x0 + index as f64 * (size + gap);
    let y = content.y0 + (content.height() - size).max(0.0) / 2.0;
    Rect::new(x, y, x + size, y + size)
}
