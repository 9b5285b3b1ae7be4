// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inclusive 1D index spans and their merge rules.

use alloc::vec::Vec;

use smallvec::SmallVec;

/// An inclusive `[start, end]` span of row or column indices.
///
/// Spans are stored normalized (`start <= end`); the constructor swaps
/// reversed endpoints, so gesture code can pass anchor/cursor pairs in
/// either order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SpanRange {
    /// First index in the span.
    pub start: usize,
    /// Last index in the span (inclusive).
    pub end: usize,
}

impl SpanRange {
    /// Creates a span from two endpoints in either order.
    #[must_use]
    pub const fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Number of indices covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Spans are never empty; this exists for API symmetry.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` if `index` lies within the span.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        index >= self.start && index <= self.end
    }

    /// Returns `true` if the spans overlap or touch end-to-start.
    ///
    /// Touching spans (`[2, 5]` and `[6, 8]`) must merge to keep a range
    /// list canonical, so they count as mergeable here.
    #[must_use]
    pub const fn mergeable(&self, other: &Self) -> bool {
        self.start <= saturating_succ(other.end) && other.start <= saturating_succ(self.end)
    }

    /// The union of two mergeable spans.
    #[must_use]
    pub fn merged(&self, other: &Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

const fn saturating_succ(value: usize) -> usize {
    value.saturating_add(1)
}

/// Merges a list of spans into the minimal sorted, disjoint, non-adjacent
/// form.
pub(crate) fn normalize_spans(spans: &mut SmallVec<[SpanRange; 4]>) {
    if spans.len() < 2 {
        return;
    }
    spans.sort_unstable_by_key(|span| span.start);
    let mut merged: Vec<SpanRange> = Vec::with_capacity(spans.len());
    for &span in spans.iter() {
        match merged.last_mut() {
            Some(last) if last.mergeable(&span) => *last = last.merged(&span),
            _ => merged.push(span),
        }
    }
    spans.clear();
    spans.extend(merged);
}
