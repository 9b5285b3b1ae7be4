// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Popup placement for rich editor surfaces.

use kurbo::Rect;

/// Screen-edge buffer popups keep clear of, in logical pixels.
pub const SAFE_MARGIN: f64 = 32.0;

/// A resolved popup placement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PopupPlacement {
    /// Where the popup goes, in the same space as the anchor.
    pub rect: Rect,
    /// `true` when the popup opens above its anchor.
    pub opens_upward: bool,
}

/// Places a popup of `width × desired_max_height` against `anchor` inside
/// `container`.
///
/// The side (above/below the anchor) with more room wins; the final height
/// is clamped to `min(desired_max_height, available − SAFE_MARGIN)`. The
/// horizontal position starts at the anchor's left edge and is shifted to
/// stay inside the container. Every rich editor (select dropdown, date
/// picker, attachment panel, user picker) goes through this one function,
/// parameterized only by anchor and desired size.
///
/// Without a resolvable container the placement degrades to "below the
/// anchor at the desired height" — logged, never a panic.
#[must_use]
pub fn position_popup(
    anchor: Rect,
    container: Option<Rect>,
    width: f64,
    desired_max_height: f64,
) -> PopupPlacement {
    let Some(container) = container else {
        log::warn!("popup positioned without a container; defaulting to below-anchor placement");
        return PopupPlacement {
            rect: Rect::new(
                anchor.x0,
                anchor.y1,
                anchor.x0 + width,
                anchor.y1 + desired_max_height,
            ),
            opens_upward: false,
        };
    };

    let space_below = (container.y1 - anchor.y1).max(0.0);
    let space_above = (anchor.y0 - container.y0).max(0.0);
    let opens_upward = space_above > space_below;
    let available = if opens_upward { space_above } else { space_below };
    let height = desired_max_height.min((available - SAFE_MARGIN).max(0.0));

    let (y0, y1) = if opens_upward {
        (anchor.y0 - height, anchor.y0)
    } else {
        (anchor.y1, anchor.y1 + height)
    };

    // Clamp horizontally into the container, preferring the anchor's left
    // edge.
    let width = width.min(container.width());
    let x0 = anchor
        .x0
        .min(container.x1 - width)
        .max(container.x0);

    PopupPlacement {
        rect: Rect::new(x0, y0, x0 + width, y1),
        opens_upward,
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::{PopupPlacement, SAFE_MARGIN, position_popup};

    const CONTAINER: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

    #[test]
    fn opens_below_when_there_is_more_room_below() {
        let anchor = Rect::new(100.0, 50.0, 180.0, 86.0);
        let placement = position_popup(anchor, Some(CONTAINER), 200.0, 300.0);
        assert!(!placement.opens_upward);
        assert_eq!(placement.rect.y0, anchor.y1);
        assert_eq!(placement.rect.height(), 300.0);
    }

    #[test]
    fn opens_above_when_there_is_more_room_above() {
        let anchor = Rect::new(100.0, 500.0, 180.0, 536.0);
        let placement = position_popup(anchor, Some(CONTAINER), 200.0, 300.0);
        assert!(placement.opens_upward);
        assert_eq!(placement.rect.y1, anchor.y0);
        assert_eq!(placement.rect.height(), 300.0);
    }

    #[test]
    fn height_is_clamped_by_available_space_minus_margin() {
        // Anchor near the bottom but with below still the larger side is not
        // possible; pick one near the middle-bottom so above wins, with
        // limited room.
        let anchor = Rect::new(100.0, 400.0, 180.0, 436.0);
        let placement = position_popup(anchor, Some(CONTAINER), 200.0, 1000.0);
        assert!(placement.opens_upward);
        let available = anchor.y0 - CONTAINER.y0;
        assert_eq!(placement.rect.height(), available - SAFE_MARGIN);
    }

    #[test]
    fn clamp_never_exceeds_available_minus_margin() {
        for anchor_y in [40.0, 150.0, 300.0, 450.0, 560.0] {
            let anchor = Rect::new(100.0, anchor_y, 180.0, anchor_y + 36.0);
            let placement = position_popup(anchor, Some(CONTAINER), 200.0, 10_000.0);
            let available = if placement.opens_upward {
                anchor.y0 - CONTAINER.y0
            } else {
                CONTAINER.y1 - anchor.y1
            };
            assert!(
                placement.rect.height() <= available - SAFE_MARGIN,
                "anchor_y={anchor_y}"
            );
        }
    }

    #[test]
    fn horizontal_position_stays_inside_container() {
        let anchor = Rect::new(750.0, 50.0, 790.0, 86.0);
        let placement = position_popup(anchor, Some(CONTAINER), 200.0, 300.0);
        assert!(placement.rect.x1 <= CONTAINER.x1);
        assert!(placement.rect.x0 >= CONTAINER.x0);
    }

    #[test]
    fn missing_container_degrades_to_below_anchor() {
        let anchor = Rect::new(10.0, 10.0, 90.0, 46.0);
        let placement = position_popup(anchor, None, 200.0, 300.0);
        assert_eq!(
            placement,
            PopupPlacement {
                rect: Rect::new(10.0, 46.0, 210.0, 346.0),
                opens_upward: false,
            }
        );
    }
}
