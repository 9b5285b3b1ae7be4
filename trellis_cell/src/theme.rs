// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved visual parameters shared by cell renderers.

use peniko::Color;

/// The visual parameters renderers draw with.
///
/// This is a flat bag of resolved values, not a theme engine: hosts decide
/// what these mean and swap whole themes by handing the engine a different
/// value. Defaults are a neutral light palette useful for tests and demos.
#[derive(Clone, Debug, PartialEq)]
pub struct CellTheme {
    /// Body font size in logical pixels.
    pub font_size: f64,
    /// Secondary font size (chips, counts).
    pub small_font_size: f64,
    /// Line height as a multiple of font size.
    pub line_height: f64,
    /// Inner cell padding on each side.
    pub padding: f64,
    /// Primary text color.
    pub text: Color,
    /// Secondary/muted text color.
    pub muted: Color,
    /// Accent color (links, focus).
    pub accent: Color,
    /// Default chip fill when a choice has no color of its own.
    pub chip_fill: Color,
    /// Chip text color.
    pub chip_text: Color,
    /// Star color for set rating positions.
    pub star: Color,
    /// Hairline/border color.
    pub border: Color,
    /// Loading-skeleton fill.
    pub skeleton: Color,
}

impl CellTheme {
    /// Line height in pixels for the body font.
    #[must_use]
    pub fn line_px(&self) -> f64 {
        self.font_size * self.line_height
    }
}

impl Default for CellTheme {
    fn default() -> Self {
        Self {
            font_size: 13.0,
            small_font_size: 11.0,
            line_height: 1.5,
            padding: 8.0,
            text: Color::from_rgb8(0x26, 0x2a, 0x30),
            muted: Color::from_rgb8(0x7a, 0x82, 0x8c),
            accent: Color::from_rgb8(0x2a, 0x6b, 0xe0),
            chip_fill: Color::from_rgb8(0xe4, 0xe9, 0xf0),
            chip_text: Color::from_rgb8(0x32, 0x38, 0x40),
            star: Color::from_rgb8(0xf2, 0xb2, 0x02),
            border: Color::from_rgb8(0xd5, 0xda, 0xe1),
            skeleton: Color::from_rgb8(0xec, 0xef, 0xf3),
        }
    }
}
