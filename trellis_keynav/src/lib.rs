// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_keynav --heading-base-level=0

//! Trellis Keynav: pure keyboard navigation transitions for grids.
//!
//! The whole crate is one pure function, [`next_position`], mapping
//! `(current position, key, modifiers, options)` to the next active-cell
//! position — or `None` for a well-defined no-op at a boundary. No state, no
//! side effects; the engine decides what to *do* with the transition
//! (move the active cell, extend the selection, commit an edit).
//!
//! Semantics:
//!
//! - Arrow keys move one step. At a boundary the move is a no-op unless
//!   [`NavOptions::wrap`] is set, in which case horizontal moves wrap to the
//!   opposite edge of the adjacent row and vertical moves to the adjacent
//!   column.
//! - `Home`/`End` move to the start/end of the row; with Ctrl, to the
//!   grid's first/last cell.
//! - `PageUp`/`PageDown` move by [`NavOptions::page_size`] rows, clamped to
//!   the grid edge. The default is 10 rows; engines that know their viewport
//!   pass the real number of visible rows instead.
//! - `Tab`/`Shift+Tab` move right/left and always wrap to the next/previous
//!   row at row boundaries, independent of [`NavOptions::wrap`].
//! - `Enter` moves down (the editing layer commits first); `Shift+Enter`
//!   moves up.
//!
//! [`next_enabled_position`] layers disabled-cell skipping on top: when the
//! candidate cell is disabled, the same step is repeated from there, bounded
//! by `rows × columns` attempts so navigation terminates even when an entire
//! region is disabled.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_keynav::{Modifiers, NavKey, NavOptions, next_position};
//! use trellis_viewport::Position;
//!
//! let options = NavOptions::new(100, 24);
//!
//! // Plain arrow movement.
//! let next = next_position(Position::new(0, 0), NavKey::Right, Modifiers::empty(), &options);
//! assert_eq!(next, Some(Position::new(0, 1)));
//!
//! // At the right edge: no-op without wrap.
//! let edge = Position::new(0, 23);
//! assert_eq!(next_position(edge, NavKey::Right, Modifiers::empty(), &options), None);
//!
//! // With wrap: continue on the next row.
//! let wrapping = NavOptions { wrap: true, ..options };
//! assert_eq!(
//!     next_position(edge, NavKey::Right, Modifiers::empty(), &wrapping),
//!     Some(Position::new(1, 0))
//! );
//! ```
//!
//! This crate is `no_std` and allocation-free.

#![no_std]

use trellis_viewport::Position;

bitflags::bitflags! {
    /// Keyboard modifier state relevant to navigation.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift is held.
        const SHIFT = 0b0000_0001;
        /// Control (or Command on macOS hosts) is held.
        const CTRL  = 0b0000_0010;
    }
}

/// Navigation keys understood by the transition function.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavKey {
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Home: row start, or grid start with Ctrl.
    Home,
    /// End: row end, or grid end with Ctrl.
    End,
    /// Page up by [`NavOptions::page_size`] rows.
    PageUp,
    /// Page down by [`NavOptions::page_size`] rows.
    PageDown,
    /// Tab: right with row wrap; left with Shift.
    Tab,
    /// Enter: down; up with Shift.
    Enter,
}

/// Grid bounds and navigation behavior.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NavOptions {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub columns: usize,
    /// Whether arrow keys wrap at row/column boundaries.
    pub wrap: bool,
    /// Rows moved per `PageUp`/`PageDown`.
    pub page_size: usize,
}

impl NavOptions {
    /// Rows moved per page when the engine cannot derive a viewport size.
    pub const DEFAULT_PAGE_SIZE: usize = 10;

    /// Creates options for a `rows × columns` grid with wrap disabled and
    /// the default page size.
    #[must_use]
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            wrap: false,
            page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }
}

/// Computes the next position for a key press, or `None` for a no-op.
///
/// Out-of-bounds inputs and empty grids return `None`; the function never
/// produces an out-of-bounds position.
#[must_use]
pub fn next_position(
    current: Position,
    key: NavKey,
    modifiers: Modifiers,
    options: &NavOptions,
) -> Option<Position> {
    if options.rows == 0 || options.columns == 0 {
        return None;
    }
    if !current.in_bounds(options.rows, options.columns) {
        return None;
    }
    let last_row = options.rows - 1;
    let last_column = options.columns - 1;
    let Position { row, column } = current;

    let next = match key {
        NavKey::Up => {
            if row > 0 {
                Position::new(row - 1, column)
            } else if options.wrap && column > 0 {
                Position::new(last_row, column - 1)
            } else {
                return None;
            }
        }
        NavKey::Down => {
            if row < last_row {
                Position::new(row + 1, column)
            } else if options.wrap && column < last_column {
                Position::new(0, column + 1)
            } else {
                return None;
            }
        }
        NavKey::Left => {
            if column > 0 {
                Position::new(row, column - 1)
            } else if options.wrap && row > 0 {
                Position::new(row - 1, last_column)
            } else {
                return None;
            }
        }
        NavKey::Right => {
            if column < last_column {
                Position::new(row, column + 1)
            } else if options.wrap && row < last_row {
                Position::new(row + 1, 0)
            } else {
                return None;
            }
        }
        NavKey::Home => {
            if modifiers.contains(Modifiers::CTRL) {
                Position::new(0, 0)
            } else {
                Position::new(row, 0)
            }
        }
        NavKey::End => {
            if modifiers.contains(Modifiers::CTRL) {
                Position::new(last_row, last_column)
            } else {
                Position::new(row, last_column)
            }
        }
        NavKey::PageUp => Position::new(row.saturating_sub(options.page_size.max(1)), column),
        NavKey::PageDown => {
            Position::new((row + options.page_size.max(1)).min(last_row), column)
        }
        NavKey::Tab => {
            if modifiers.contains(Modifiers::SHIFT) {
                if column > 0 {
                    Position::new(row, column - 1)
                } else if row > 0 {
                    Position::new(row - 1, last_column)
                } else {
                    return None;
                }
            } else if column < last_column {
                Position::new(row, column + 1)
            } else if row < last_row {
                Position::new(row + 1, 0)
            } else {
                return None;
            }
        }
        NavKey::Enter => {
            if modifiers.contains(Modifiers::SHIFT) {
                if row > 0 {
                    Position::new(row - 1, column)
                } else {
                    return None;
                }
            } else if row < last_row {
                Position::new(row + 1, column)
            } else {
                return None;
            }
        }
    };

    (next != current).then_some(next)
}

/// Like [`next_position`], but skips cells the `disabled` predicate rejects.
///
/// After each step, a disabled candidate triggers the same step again from
/// the candidate. The loop is bounded by `rows × columns` attempts, which
/// guarantees termination even when every remaining cell in the direction is
/// disabled; exhaustion returns `None`.
#[must_use]
pub fn next_enabled_position(
    current: Position,
    key: NavKey,
    modifiers: Modifiers,
    options: &NavOptions,
    disabled: impl Fn(Position) -> bool,
) -> Option<Position> {
    let mut from = current;
    let attempts = options.rows.saturating_mul(options.columns);
    for _ in 0..attempts {
        let candidate = next_position(from, key, modifiers, options)?;
        if !disabled(candidate) {
            return Some(candidate);
        }
        if candidate == from {
            return None;
        }
        from = candidate;
    }
    None
}
