// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_viewport --heading-base-level=0

//! Trellis Viewport: grid coordinate mapping and viewport virtualization.
//!
//! This crate converts between pointer pixel coordinates and logical grid
//! positions, and computes which slice of a grid is worth drawing for a given
//! scroll state. It is the geometric core the rest of the toolkit leans on:
//!
//! - [`GridMapper`]: owns the row and column extent tables, the frozen-column
//!   split, and the header bands. Answers `pixel → cell`, `cell → rect`, and
//!   `pixel → region` queries. Misses return `None` / [`GridRegion::Blank`],
//!   never a panic.
//! - [`VisibleWindow`] and [`GridMapper::visible_window`]: the half-open index
//!   window covering the viewport plus a fixed [`Overscan`] margin.
//! - [`ScrollAlign`] and [`scroll_offset_for`]: the scroll offset that brings
//!   an index into view, used by keyboard navigation to keep the active cell
//!   visible.
//!
//! Frozen columns are pinned to the left edge and excluded from horizontal
//! scrolling: their screen position is a pure function of the column table,
//! while scrolled columns are offset by the current scroll. Pointer hits are
//! resolved against the frozen zone first, matching its painted-on-top order.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use trellis_viewport::{GridMapper, Overscan, Position};
//!
//! let mut mapper = GridMapper::new(1000, 36.0, &[80.0; 24], 2);
//!
//! // Pointer over the body resolves to a cell: row 101 (3660 / 36), column 2.
//! let scroll = Vec2::new(0.0, 3600.0);
//! let hit = mapper.position_at(Point::new(200.0, 60.0), scroll);
//! assert_eq!(hit, Some(Position::new(101, 2)));
//!
//! // The visible window starts at row 100 (3600 / 36) minus overscan.
//! let window = mapper.visible_window(Size::new(800.0, 600.0), scroll, Overscan::default());
//! assert_eq!(window.row_start, 100 - Overscan::default().rows);
//! ```
//!
//! All geometry is expressed in logical pixels with the origin at the grid's
//! top-left corner. This crate is `no_std`.

#![no_std]

mod mapper;
mod position;
mod window;

pub use mapper::GridMapper;
pub use position::{GridRegion, Position};
pub use window::{Overscan, ScrollAlign, VisibleWindow, scroll_offset_for};
