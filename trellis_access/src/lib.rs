// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_access --heading-base-level=0

//! Trellis Access: the accessibility shadow layer for grids.
//!
//! Canvas-rendered grids are invisible to assistive technology; this crate
//! synthesizes the semantics a screen reader needs, without ever querying a
//! live widget tree:
//!
//! - [`aria`]: attribute sets for grid/row/cell/header roles
//!   (`aria-rowcount`, `aria-colindex`, `aria-selected`, …), derived from
//!   engine state. Hosts mirror them onto whatever shadow nodes they
//!   maintain.
//! - [`LiveRegion`]: the single hidden announcement channel — cell-value
//!   changes, selection counts ("selected 3 of 500"), edit-mode transitions
//!   (assertive), and errors (assertive, sticky unless a timeout is given).
//!   Timeouts run on host ticks via `trellis_timing`.
//! - [`FocusManager`]: an explicit index of focusable node identities —
//!   registered by the engine, never discovered by selector queries — plus
//!   a restore stack and a Tab/Shift+Tab trap for popup editors, so closing
//!   a popup returns focus to exactly where it was.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_access::FocusManager;
//!
//! let mut focus: FocusManager<u32> = FocusManager::new();
//! focus.focus(1); // the grid container
//!
//! // A popup editor opens with three focusable controls.
//! focus.open_trap([10, 11, 12]);
//! assert_eq!(focus.focused(), Some(10));
//!
//! // Tab cycles within the trap.
//! focus.tab(false);
//! focus.tab(false);
//! assert_eq!(focus.focused(), Some(12));
//! focus.tab(false);
//! assert_eq!(focus.focused(), Some(10));
//!
//! // Escape closes the popup and restores focus exactly.
//! assert_eq!(focus.close_trap(), Some(1));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod aria;
mod focus;
mod live;

pub use focus::{FocusManager, FocusTrap};
pub use live::{Announcement, LiveRegion, Politeness};
