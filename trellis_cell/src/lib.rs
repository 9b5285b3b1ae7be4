// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_cell --heading-base-level=0

//! Trellis Cell: typed grid cells and their renderers.
//!
//! A cell is a tagged union over a closed set of variants — text, number,
//! boolean, date, select, rating, link, user, attachment, button, computed,
//! loading — each carrying its underlying data plus the display form a
//! renderer needs. This crate owns that union and everything that turns a
//! cell into pixels and pointer behavior:
//!
//! - [`Cell`] and [`CellKind`]: the closed variant set. Adding a variant is
//!   a compile-time-checked change; every `match` over [`CellKind`] is
//!   exhaustive.
//! - [`CellRenderer`]: the per-variant behavior — `measure` (content-driven
//!   height), `draw` (pure op emission), `check_region` (sub-cell hit
//!   testing with optional would-be values), and `on_click`.
//! - [`RendererRegistry`]: one renderer per variant, built once at startup
//!   and injected into the engine. Sparse registries degrade missing kinds
//!   to the text renderer with a logged warning — a closed-world degrade,
//!   not a failure.
//! - [`DrawOp`]: a small plain-data imaging IR (rects, lines, text runs,
//!   icons, clips) with `peniko` colors. Backends consume the ops; no
//!   renderer backend lives in this workspace.
//! - [`TextMeasurer`]: the text-measurement port. Hosts supply their real
//!   font metrics; [`MonospaceMeasurer`] ships for deterministic tests.
//!
//! Renderers are pure: `draw` appends ops and never mutates cell or engine
//! state, and `check_region` computes would-be values without committing
//! anything. Commits flow through the editing layer.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_cell::{Cell, CellKind, CellRegion, MonospaceMeasurer, RendererRegistry, RenderCtx, CellTheme};
//! use kurbo::{Point, Rect};
//!
//! let registry = RendererRegistry::with_defaults();
//! let theme = CellTheme::default();
//! let measurer = MonospaceMeasurer::default();
//! let ctx = RenderCtx::new(&theme, &measurer);
//!
//! let cell = Cell::boolean(false);
//! let rect = Rect::new(0.0, 0.0, 80.0, 36.0);
//!
//! // Clicking the checkbox yields the toggled would-be value.
//! let region = registry.check_region(&cell, rect, Point::new(40.0, 18.0), true, &ctx);
//! assert!(matches!(region, CellRegion::Update(_)));
//!
//! // Drawing emits ops; it never touches state.
//! let mut ops = Vec::new();
//! registry.draw(&cell, rect, &ctx, &mut ops);
//! assert!(!ops.is_empty());
//! assert_eq!(cell.kind(), CellKind::Boolean);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cell;
mod data;
mod ops;
mod render;
mod renderers;
mod text;
mod theme;

pub use cell::{
    AttachmentItem, Cell, CellKind, Choice, ComputedSource, LinkItem, SelectOptions, UserItem,
};
pub use data::{CellData, CellRegion, PreviewTarget};
pub use ops::{DrawOp, IconKind, TextAlign};
pub use render::{CellRenderer, RenderCtx, RendererRegistry, RendererRegistryBuilder};
pub use renderers::{
    AttachmentRenderer, BooleanRenderer, ButtonRenderer, DateRenderer, LinkRenderer,
    LoadingRenderer, NumberRenderer, RatingRenderer, SelectRenderer, TextRenderer, UserRenderer,
};
pub use text::{MonospaceMeasurer, TextMeasurer};
pub use theme::CellTheme;
