// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explicit focus tracking: restore stack and popup traps.
//!
//! The engine registers focusable node identities explicitly — there is no
//! live-tree query anywhere — which keeps this portable to non-DOM hosts.

use alloc::vec::Vec;

use smallvec::SmallVec;

/// A Tab cycle over a popup's focusable nodes, in registration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FocusTrap<K> {
    entries: Vec<K>,
    current: usize,
}

impl<K: Copy + PartialEq> FocusTrap<K> {
    /// Creates a trap over `entries`, focusing the first.
    ///
    /// Returns `None` for an empty entry list — a popup with nothing
    /// focusable cannot trap.
    #[must_use]
    pub fn new(entries: Vec<K>) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        Some(Self {
            entries,
            current: 0,
        })
    }

    /// The node the trap currently focuses.
    #[must_use]
    pub fn focused(&self) -> K {
        self.entries[self.current]
    }

    /// Moves focus one step forward (or backward), wrapping at the ends.
    pub fn step(&mut self, backwards: bool) -> K {
        let len = self.entries.len();
        self.current = if backwards {
            (self.current + len - 1) % len
        } else {
            (self.current + 1) % len
        };
        self.focused()
    }

    /// Focuses `node` if it belongs to the trap (pointer clicks inside the
    /// popup).
    pub fn focus(&mut self, node: K) -> bool {
        match self.entries.iter().position(|entry| *entry == node) {
            Some(index) => {
                self.current = index;
                true
            }
            None => false,
        }
    }
}

/// Focus bookkeeping for one grid: current focus, a restore stack, and a
/// stack of popup traps.
///
/// Opening a popup pushes the current focus and activates a trap over the
/// popup's focusable nodes; closing it restores focus to exactly the node
/// that had it before. Traps nest (a date picker inside a record editor).
#[derive(Clone, Debug)]
pub struct FocusManager<K> {
    focused: Option<K>,
    restore: SmallVec<[Option<K>; 4]>,
    traps: SmallVec<[FocusTrap<K>; 2]>,
}

impl<K: Copy + PartialEq> FocusManager<K> {
    /// Creates a manager with nothing focused.
    #[must_use]
    pub fn new() -> Self {
        Self {
            focused: None,
            restore: SmallVec::new(),
            traps: SmallVec::new(),
        }
    }

    /// The currently focused node, if any.
    #[must_use]
    pub fn focused(&self) -> Option<K> {
        self.focused
    }

    /// Returns `true` while a popup trap is active.
    #[must_use]
    pub fn trapped(&self) -> bool {
        !self.traps.is_empty()
    }

    /// Sets focus directly.
    ///
    /// Inside a trap, focus only moves to nodes the trap contains; clicks
    /// outside the popup do not escape it.
    pub fn focus(&mut self, node: K) -> bool {
        if let Some(trap) = self.traps.last_mut() {
            if trap.focus(node) {
                self.focused = Some(node);
                return true;
            }
            return false;
        }
        self.focused = Some(node);
        true
    }

    /// Opens a popup trap over `entries`, remembering the current focus for
    /// restore.
    ///
    /// Focus moves to the popup's first focusable node. Popups with no
    /// focusable nodes do not trap (and do not disturb focus).
    pub fn open_trap<I: IntoIterator<Item = K>>(&mut self, entries: I) -> bool {
        let Some(trap) = FocusTrap::new(entries.into_iter().collect()) else {
            return false;
        };
        self.restore.push(self.focused);
        self.focused = Some(trap.focused());
        self.traps.push(trap);
        true
    }

    /// Tab/Shift+Tab inside the active trap.
    ///
    /// Returns the newly focused node, or `None` when no trap is active
    /// (the host's normal tab order applies).
    pub fn tab(&mut self, backwards: bool) -> Option<K> {
        let trap = self.traps.last_mut()?;
        let node = trap.step(backwards);
        self.focused = Some(node);
        Some(node)
    }

    /// Closes the active trap, restoring the previously focused node.
    ///
    /// Returns the restored node (or `None` when nothing was focused
    /// before, or no trap was active).
    pub fn close_trap(&mut self) -> Option<K> {
        self.traps.pop()?;
        let restored = self.restore.pop().flatten();
        self.focused = restored;
        restored
    }
}
