// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The plain-data draw-op IR emitted by cell renderers.

use alloc::string::String;

use kurbo::{Point, Rect};
use peniko::Color;

/// Horizontal alignment of a text run within its maximum width.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    /// Align to the left edge.
    #[default]
    Left,
    /// Center within the available width.
    Center,
    /// Align to the right edge (numbers).
    Right,
}

/// Built-in icons renderers may emit.
///
/// Backends map these to their own glyphs or vector assets; the IR only
/// names them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IconKind {
    /// Unchecked checkbox outline.
    Checkbox,
    /// Checked checkbox.
    CheckboxChecked,
    /// Outlined star (unset rating position).
    Star,
    /// Filled star (set rating position).
    StarFilled,
    /// Dropdown chevron.
    ChevronDown,
    /// Attachment paperclip.
    Paperclip,
    /// Generic avatar placeholder.
    Avatar,
}

/// One drawing operation.
///
/// Ops are plain data: positions are in the grid's screen space, colors are
/// `peniko` colors, and there is no retained state between ops other than
/// the clip stack. Renderers append ops; backends consume them in order.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// A filled and/or stroked rectangle with optional corner radius.
    Rect {
        /// Target rectangle.
        rect: Rect,
        /// Fill color, if any.
        fill: Option<Color>,
        /// Stroke color and width, if any.
        stroke: Option<(Color, f64)>,
        /// Corner radius; `0.0` for square corners.
        radius: f64,
    },
    /// A straight line segment.
    Line {
        /// Segment start.
        from: Point,
        /// Segment end.
        to: Point,
        /// Stroke color.
        color: Color,
        /// Stroke width.
        width: f64,
    },
    /// A single-line text run.
    Text {
        /// The text to draw. Renderers pre-wrap; a run never contains
        /// newlines.
        text: String,
        /// Top-left origin of the line box (of the aligned box when
        /// `max_width` is set).
        origin: Point,
        /// Text color.
        color: Color,
        /// Font size in logical pixels.
        size: f64,
        /// Alignment within `max_width`.
        align: TextAlign,
        /// Width the run is aligned and clipped against, if constrained.
        max_width: Option<f64>,
    },
    /// A named icon fitted into a rectangle.
    Icon {
        /// Which icon.
        icon: IconKind,
        /// Target rectangle.
        rect: Rect,
        /// Icon color.
        color: Color,
    },
    /// Pushes a clip rectangle; subsequent ops are clipped against the
    /// intersection of the active clip stack.
    PushClip {
        /// Clip rectangle.
        rect: Rect,
    },
    /// Pops the most recent clip rectangle.
    PopClip,
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::Rect;
    use peniko::Color;

    use super::DrawOp;

    #[test]
    fn clip_ops_pair_up() {
        // Engine convention: each cell draw is bracketed by a clip pair.
        let mut ops = Vec::new();
        ops.push(DrawOp::PushClip {
            rect: Rect::new(0.0, 0.0, 10.0, 10.0),
        });
        ops.push(DrawOp::Rect {
            rect: Rect::new(0.0, 0.0, 10.0, 10.0),
            fill: Some(Color::WHITE),
            stroke: None,
            radius: 0.0,
        });
        ops.push(DrawOp::PopClip);

        let pushes = ops
            .iter()
            .filter(|op| matches!(op, DrawOp::PushClip { .. }))
            .count();
        let pops = ops.iter().filter(|op| matches!(op, DrawOp::PopClip)).count();
        assert_eq!(pushes, pops);
    }
}
