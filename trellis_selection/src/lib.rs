// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_selection --heading-base-level=0

//! Trellis Selection: normalized selection management for grids.
//!
//! A grid selection is one of four region shapes — cell rectangles, row
//! spans, column spans, or everything — plus the bookkeeping that keeps the
//! shape canonical while gestures mutate it. This crate owns that
//! bookkeeping:
//!
//! - [`SpanRange`]: an inclusive 1D index span with overlap/adjacency merge
//!   rules.
//! - [`CellRange`]: a normalized cell rectangle (corner positions).
//! - [`Selection`]: the region container. Constructors and mutations all
//!   flow through a single normalize step, so the stored ranges are always
//!   pairwise disjoint, non-adjacent, minimal, and sorted.
//! - [`SelectionState`]: a small stateful wrapper adding gesture-level
//!   operations (replace, extend, discontiguous add, toggle) and a revision
//!   counter that bumps only on semantic change.
//!
//! The **active cell** — the single position keyboard input targets — is
//! deliberately *not* stored here. It is tracked independently by the engine
//! and may or may not fall inside the selection ranges; plain unshifted
//! navigation collapses the selection to a single-cell range at the new
//! active cell.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_selection::{SelectionState, SpanRange};
//!
//! let mut state = SelectionState::new();
//!
//! // Select rows [2, 5], then extend with an overlapping span: the two
//! // merge into a single canonical range.
//! state.select_rows(SpanRange::new(2, 5));
//! state.add_rows(SpanRange::new(5, 8));
//! assert_eq!(state.selection().row_spans(), &[SpanRange::new(2, 8)]);
//! assert!(state.selection().is_row_selection());
//! assert_eq!(state.revision(), 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cell_range;
mod selection;
mod span;
mod state;

pub use cell_range::CellRange;
pub use selection::Selection;
pub use span::SpanRange;
pub use state::SelectionState;
