// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prefix-sum extent table for axes with per-item extents.

use alloc::vec::Vec;

use crate::ExtentModel;

/// An axis with per-item extents over a uniform default, backed by a lazily
/// rebuilt prefix-sum array.
///
/// Items start at the table's default extent; individual items can be given
/// their own extent via [`ExtentTable::set_extent`] (a taller wrapped-text
/// row, a user-resized column). Mutations mark the prefix array dirty; it is
/// rebuilt in O(n) on the next offset query, so a burst of `set_extent` calls
/// costs a single rebuild.
///
/// Offset lookup is a binary search over the prefix array, O(log n).
#[derive(Clone, Debug)]
pub struct ExtentTable {
    default_extent: f64,
    extents: Vec<f64>,
    // prefix[i] = sum of extents[0..i]; length is extents.len() + 1.
    prefix: Vec<f64>,
    dirty: bool,
}

impl ExtentTable {
    /// Creates a table of `len` items, each starting at `default_extent`.
    ///
    /// Negative extents are clamped to zero.
    #[must_use]
    pub fn new(len: usize, default_extent: f64) -> Self {
        let default_extent = default_extent.max(0.0);
        let mut table = Self {
            default_extent,
            extents: Vec::new(),
            prefix: Vec::new(),
            dirty: true,
        };
        table.extents.resize(len, default_extent);
        table
    }

    /// Returns the default extent new items are created with.
    #[must_use]
    pub fn default_extent(&self) -> f64 {
        self.default_extent
    }

    /// Resizes the strip to `len` items.
    ///
    /// Existing per-item extents are preserved; new items take the default
    /// extent.
    pub fn set_len(&mut self, len: usize) {
        if len != self.extents.len() {
            self.extents.resize(len, self.default_extent);
            self.dirty = true;
        }
    }

    /// Sets the extent of the item at `index`, clamping negatives to zero.
    ///
    /// Out-of-range indices are ignored.
    pub fn set_extent(&mut self, index: usize, extent: f64) {
        if let Some(slot) = self.extents.get_mut(index) {
            let extent = extent.max(0.0);
            if *slot != extent {
                *slot = extent;
                self.dirty = true;
            }
        }
    }

    /// Resets every item to `default_extent` and adopts it as the default.
    ///
    /// Used when the host swaps in a structurally different dataset and all
    /// measured extents are stale.
    pub fn reset(&mut self, len: usize, default_extent: f64) {
        self.default_extent = default_extent.max(0.0);
        self.extents.clear();
        self.extents.resize(len, self.default_extent);
        self.dirty = true;
    }

    fn ensure_prefix(&mut self) {
        if !self.dirty && self.prefix.len() == self.extents.len() + 1 {
            return;
        }
        self.prefix.clear();
        self.prefix.reserve(self.extents.len() + 1);
        let mut acc = 0.0;
        self.prefix.push(acc);
        for &extent in &self.extents {
            acc += extent;
            self.prefix.push(acc);
        }
        self.dirty = false;
    }
}

impl ExtentModel for ExtentTable {
    fn len(&self) -> usize {
        self.extents.len()
    }

    fn total_extent(&mut self) -> f64 {
        self.ensure_prefix();
        self.prefix.last().copied().unwrap_or(0.0)
    }

    fn extent_of(&mut self, index: usize) -> f64 {
        self.extents.get(index).copied().unwrap_or(0.0)
    }

    fn offset_of(&mut self, index: usize) -> f64 {
        self.ensure_prefix();
        let index = index.min(self.extents.len());
        self.prefix.get(index).copied().unwrap_or(0.0)
    }

    fn index_at_offset(&mut self, offset: f64) -> Option<usize> {
        if !offset.is_finite() || offset < 0.0 {
            return None;
        }
        self.ensure_prefix();
        let total = self.prefix.last().copied().unwrap_or(0.0);
        if offset >= total {
            return None;
        }
        // prefix is non-decreasing; find the last boundary at or before
        // `offset`. partition_point gives the first index with prefix[i] >
        // offset, so the containing item is one before it.
        let upper = self.prefix.partition_point(|&p| p <= offset);
        let mut index = upper.saturating_sub(1);
        // Skip over zero-extent items sharing the boundary so the returned
        // item actually contains the offset.
        while index < self.extents.len() && self.extents[index] == 0.0 {
            index += 1;
        }
        (index < self.extents.len()).then_some(index)
    }
}
