// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_grid --heading-base-level=0

//! Trellis Grid: the data-grid interaction and rendering engine.
//!
//! This crate composes the Trellis toolkit into one facade:
//!
//! - coordinate mapping and virtualization (`trellis_viewport`),
//! - the cell union and renderer registry (`trellis_cell`),
//! - normalized selection (`trellis_selection`),
//! - pure keyboard transitions (`trellis_keynav`),
//! - the editing state machine and popup positioning (`trellis_editing`),
//! - file drops (`trellis_drop`),
//! - and the accessibility shadow layer (`trellis_access`).
//!
//! ## Data flow
//!
//! Data flows one way in: the host implements [`DataSource`] (columns, row
//! count, a pure pull-based cell accessor) and the engine re-reads it every
//! frame, keeping no copy. Events flow one way out: every durable effect —
//! a committed edit, a selection change, a resize, a menu request — is
//! queued as a [`GridEvent`] and drained by the host. The engine owns only
//! transient view state (scroll, selection, active cell, the open edit) and
//! resets it when the host swaps in a structurally different dataset.
//!
//! Drawing is single-writer: [`GridEngine::frame`] is the one place ops
//! come from, and redraw requests funnel through the [`FrameScheduler`]
//! port, coalescing any burst of state changes into a single repaint.
//! There is no wall clock anywhere — hosts pass a tick to `frame`, which
//! drives upload deadlines and live-region auto-clears.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_cell::{Cell, RendererRegistry};
//! use trellis_grid::{Column, DataSource, GridEngine, GridEvent, ManualScheduler};
//! use trellis_keynav::{Modifiers, NavKey};
//! use trellis_viewport::Position;
//!
//! struct Host;
//!
//! impl DataSource for Host {
//!     fn columns(&self) -> Vec<Column> {
//!         (0..24).map(|i| Column::new(format!("c{i}"), format!("Column {i}"), 80.0)).collect()
//!     }
//!     fn row_count(&self) -> usize {
//!         1000
//!     }
//!     fn cell(&self, position: Position) -> Cell {
//!         Cell::text(format!("r{} c{}", position.row, position.column))
//!     }
//! }
//!
//! let host = Host;
//! let mut grid = GridEngine::new(RendererRegistry::with_defaults(), ManualScheduler::default());
//! grid.sync(&host);
//!
//! // Keyboard navigation moves the active cell and collapses selection.
//! grid.key_nav(&host, NavKey::Right, Modifiers::empty());
//! assert_eq!(grid.active_cell(), Some(Position::new(0, 0)));
//!
//! let events = grid.drain_events();
//! assert!(events.iter().any(|e| matches!(e, GridEvent::SelectionChanged { .. })));
//!
//! // The host answers the scheduled frame request with one frame call.
//! let ops = grid.frame(&host, 0);
//! assert!(!ops.is_empty());
//! ```

#![no_std]

extern crate alloc;

mod draw;
mod engine;
mod events;
mod scheduler;
mod source;

pub use engine::{EngineOptions, GridEngine};
pub use events::{ColumnAction, EditorAnchor, GridEvent};
pub use scheduler::{FrameScheduler, ManualScheduler};
pub use source::{Column, DataSource};
