// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_axis --heading-base-level=0

//! Trellis Axis: 1D cumulative-extent tables for grid axes.
//!
//! This crate provides the offset bookkeeping that coordinate mapping and
//! virtualization are built on. An axis is a dense strip of items indexed
//! `0..len`, each with a pixel extent (a row height or a column width). The
//! crate answers three questions about such a strip:
//!
//! - How large is item `i`, and where does it start? ([`ExtentModel::extent_of`],
//!   [`ExtentModel::offset_of`])
//! - Which item contains pixel offset `p`? ([`ExtentModel::index_at_offset`],
//!   a binary search over prefix sums)
//! - How large is the whole strip? ([`ExtentModel::total_extent`])
//!
//! Two models are provided:
//!
//! - [`UniformExtents`]: every item shares one extent; all queries are O(1).
//! - [`ExtentTable`]: per-item extents over a uniform default, backed by a
//!   lazily rebuilt prefix-sum array; point queries are O(1) and offset
//!   lookups are O(log n) after an O(n) rebuild.
//!
//! Offsets at or past the end of the strip (and negative offsets) miss:
//! [`ExtentModel::index_at_offset`] returns `None` rather than panicking.
//! Virtualization code that wants edge clamping instead uses
//! [`ExtentModel::index_at_offset_clamped`].
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_axis::{ExtentModel, ExtentTable};
//!
//! // 100 rows, 36 px each, with one taller wrapped-text row.
//! let mut rows = ExtentTable::new(100, 36.0);
//! rows.set_extent(10, 72.0);
//!
//! assert_eq!(rows.offset_of(10), 360.0);
//! assert_eq!(rows.index_at_offset(360.0), Some(10));
//! assert_eq!(rows.index_at_offset(431.9), Some(10));
//! assert_eq!(rows.index_at_offset(432.0), Some(11));
//! assert_eq!(rows.total_extent(), 100.0 * 36.0 + 36.0);
//! ```
//!
//! All extents and offsets live in a caller-chosen 1D coordinate space
//! (typically logical pixels) and are expected to be finite and non-negative.
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod model;
mod table;
mod uniform;

pub use model::ExtentModel;
pub use table::ExtentTable;
pub use uniform::UniformExtents;
