// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The extent-model trait shared by axis implementations.

/// A 1D strip of items with per-item extents and prefix-sum-style queries.
///
/// Implementations may cache derived data (prefix sums), so the query methods
/// take `&mut self`. Extents are expected to be finite and non-negative;
/// offsets grow from the start of the strip.
pub trait ExtentModel {
    /// Number of items in the strip.
    fn len(&self) -> usize;

    /// Returns `true` if the strip has no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total extent of all items.
    fn total_extent(&mut self) -> f64;

    /// Extent of the item at `index`.
    ///
    /// Out-of-range indices report `0.0`.
    fn extent_of(&mut self, index: usize) -> f64;

    /// Offset of the leading edge of the item at `index`.
    ///
    /// `offset_of(len)` is well-defined and equals [`ExtentModel::total_extent`],
    /// which makes half-open range math at the end of the strip uniform.
    fn offset_of(&mut self, index: usize) -> f64;

    /// Returns the index of the item containing `offset`, or `None` when the
    /// offset is negative, not finite, or at/past the end of the strip.
    ///
    /// An item contains offsets in `[offset_of(i), offset_of(i) + extent_of(i))`.
    /// Zero-extent items never contain any offset.
    fn index_at_offset(&mut self, offset: f64) -> Option<usize>;

    /// Like [`ExtentModel::index_at_offset`], but clamps misses to the nearest
    /// valid index instead of returning `None`.
    ///
    /// Used by virtualization code, where a scroll offset slightly past the
    /// content edge should still resolve to the first or last item. Returns
    /// `0` for an empty strip.
    fn index_at_offset_clamped(&mut self, offset: f64) -> usize {
        if self.is_empty() {
            return 0;
        }
        if offset <= 0.0 {
            return 0;
        }
        self.index_at_offset(offset)
            .unwrap_or_else(|| self.len() - 1)
    }
}
