// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_editing --heading-base-level=0

//! Trellis Editing: the cell editing state machine and popup positioning.
//!
//! Editing is a small, explicit state machine:
//!
//! ```text
//! Idle → Activating → Editing → {Committing | Cancelling} → Idle
//! ```
//!
//! A cell enters editing on double-click, Enter, or direct character input —
//! provided it is eligible (non-computed, non-readonly). Escape discards the
//! pending value; Enter/Tab/blur commits, which hands `(position, value)` to
//! the host and only then clears engine edit state. The engine never
//! persists values itself; a host that rejects a commit asynchronously can
//! push the failure back into the edit surface as a field-level error.
//!
//! [`EditMachine`] owns that lifecycle; [`position_popup`] places the rich
//! editor surfaces (select dropdown, date picker, attachment panel, user
//! picker): pick the side of the anchor with more room, clamp the height to
//! `available − safe margin`. One algorithm, parameterized only by anchor
//! and desired height.
//!
//! Unset semantics: an empty numeric or rating editor commits the unset
//! value (`None`), never a silent zero.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_cell::{Cell, CellData};
//! use trellis_editing::{EditMachine, EditState};
//! use trellis_viewport::Position;
//!
//! let mut machine = EditMachine::new();
//! let cell = Cell::text("hello");
//! let at = Position::new(3, 1);
//!
//! machine.activate(at, &cell).unwrap();
//! machine.open();
//! assert!(matches!(machine.state(), EditState::Editing { .. }));
//!
//! machine.set_pending(CellData::Text("world".into()));
//! let committed = machine.commit().unwrap();
//! assert_eq!(committed.0, at);
//! assert_eq!(committed.1, CellData::Text("world".into()));
//! assert!(matches!(machine.state(), EditState::Idle));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod machine;
mod popup;

pub use machine::{ActivateError, EditMachine, EditState, EditorId, UploadStatus};
pub use popup::{PopupPlacement, SAFE_MARGIN, position_popup};
