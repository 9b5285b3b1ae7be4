// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_drop --heading-base-level=0

//! Trellis Drop: file drag-and-drop handling for grids.
//!
//! Two concerns live here:
//!
//! - **Target tracking**: [`DropState`] maps drag-over pixel positions to a
//!   target cell through the grid mapper and a host-supplied acceptance
//!   predicate. The engine highlights the current target (a single-cell
//!   selection used purely as a visual affordance) and clears it on leave.
//! - **Validation**: [`partition_files`] splits a dropped batch into
//!   accepted files and per-file [`DropRejection`]s by count limit,
//!   per-file size limit, and a MIME allow-list with wildcard suffix
//!   matching (`image/*`). One bad file never blocks the rest of the batch.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_drop::{DropConfig, DroppedFile, MimePattern, partition_files};
//!
//! let config = DropConfig {
//!     max_files: 10,
//!     max_file_bytes: 1024,
//!     accept: vec![MimePattern::new("image/*")],
//! };
//! let files = vec![
//!     DroppedFile::new("a.png", "image/png", 100),
//!     DroppedFile::new("big.png", "image/png", 4096),
//!     DroppedFile::new("notes.txt", "text/plain", 10),
//! ];
//!
//! let outcome = partition_files(files, &config);
//! assert_eq!(outcome.accepted.len(), 1);
//! assert_eq!(outcome.rejected.len(), 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Vec2};
use trellis_viewport::{GridMapper, Position};

/// A MIME allow-list entry, either exact (`image/png`) or a wildcard over a
/// type (`image/*`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MimePattern(String);

impl MimePattern {
    /// Creates a pattern.
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    /// Returns `true` if `mime` matches this pattern.
    ///
    /// Matching is case-insensitive for ASCII. `*/*` matches everything.
    #[must_use]
    pub fn matches(&self, mime: &str) -> bool {
        let pattern = self.0.as_str();
        if pattern == "*/*" {
            return true;
        }
        if let Some(prefix) = pattern.strip_suffix("/*") {
            return mime
                .split('/')
                .next()
                .is_some_and(|kind| kind.eq_ignore_ascii_case(prefix));
        }
        pattern.eq_ignore_ascii_case(mime)
    }
}

/// A file handed to the drop handler by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DroppedFile {
    /// File name, used in rejection reports.
    pub name: String,
    /// MIME type.
    pub mime: String,
    /// Size in bytes.
    pub bytes: u64,
}

impl DroppedFile {
    /// Creates a file description.
    #[must_use]
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }
}

/// Validation limits for a dropped batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropConfig {
    /// Maximum number of accepted files per drop.
    pub max_files: usize,
    /// Maximum size per file in bytes.
    pub max_file_bytes: u64,
    /// MIME allow-list; empty accepts every type.
    pub accept: Vec<MimePattern>,
}

impl Default for DropConfig {
    fn default() -> Self {
        Self {
            max_files: 20,
            max_file_bytes: 50 * 1024 * 1024,
            accept: Vec::new(),
        }
    }
}

/// Why a file was excluded from a drop.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DropRejection {
    /// The batch already reached [`DropConfig::max_files`].
    #[error("{name}: batch limit of {limit} files reached")]
    TooManyFiles {
        /// Rejected file name.
        name: String,
        /// The configured batch limit.
        limit: usize,
    },
    /// The file exceeds [`DropConfig::max_file_bytes`].
    #[error("{name}: {bytes} bytes exceeds the {limit} byte limit")]
    FileTooLarge {
        /// Rejected file name.
        name: String,
        /// Actual size.
        bytes: u64,
        /// The configured per-file limit.
        limit: u64,
    },
    /// The file's MIME type matches no allow-list entry.
    #[error("{name}: type {mime} is not accepted")]
    UnsupportedType {
        /// Rejected file name.
        name: String,
        /// The offending MIME type.
        mime: String,
    },
}

/// The result of validating a dropped batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DropOutcome {
    /// Files that passed every check, in drop order.
    pub accepted: Vec<DroppedFile>,
    /// Per-file rejections, in drop order.
    pub rejected: Vec<DropRejection>,
}

/// Partitions a dropped batch into accepted files and per-file rejections.
///
/// Files are checked in order: MIME allow-list, then size, then the batch
/// count limit. A failing file is reported and skipped; the remaining files
/// still proceed.
#[must_use]
pub fn partition_files(files: Vec<DroppedFile>, config: &DropConfig) -> DropOutcome {
    let mut outcome = DropOutcome::default();
    for file in files {
        if !config.accept.is_empty()
            && !config.accept.iter().any(|pattern| pattern.matches(&file.mime))
        {
            outcome.rejected.push(DropRejection::UnsupportedType {
                name: file.name,
                mime: file.mime,
            });
            continue;
        }
        if file.bytes > config.max_file_bytes {
            outcome.rejected.push(DropRejection::FileTooLarge {
                name: file.name,
                bytes: file.bytes,
                limit: config.max_file_bytes,
            });
            continue;
        }
        if outcome.accepted.len() >= config.max_files {
            outcome.rejected.push(DropRejection::TooManyFiles {
                name: file.name,
                limit: config.max_files,
            });
            continue;
        }
        outcome.accepted.push(file);
    }
    outcome
}

/// Tracks the cell currently targeted by a drag.
///
/// The engine feeds drag-over positions through the mapper; a cell only
/// becomes the target when the host's acceptance predicate approves it.
#[derive(Clone, Debug, Default)]
pub struct DropState {
    target: Option<Position>,
}

impl DropState {
    /// Creates an idle drop state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The cell currently targeted, if any.
    #[must_use]
    pub fn target(&self) -> Option<Position> {
        self.target
    }

    /// Updates the target from a drag-over position.
    ///
    /// Returns the new target. Positions outside the body, or cells the
    /// predicate refuses, clear the target.
    pub fn drag_over(
        &mut self,
        mapper: &mut GridMapper,
        point: Point,
        scroll: Vec2,
        accepts: impl Fn(Position) -> bool,
    ) -> Option<Position> {
        self.target = mapper.position_at(point, scroll).filter(|&p| accepts(p));
        self.target
    }

    /// Clears the target when the drag leaves the grid.
    pub fn drag_leave(&mut self) {
        self.target = None;
    }

    /// Finishes the drag: validates the batch against `config` and clears
    /// the target.
    ///
    /// Returns `None` when no cell was targeted (the host ignores the
    /// drop).
    pub fn drop_files(
        &mut self,
        files: Vec<DroppedFile>,
        config: &DropConfig,
    ) -> Option<(Position, DropOutcome)> {
        let target = self.target.take()?;
        Some((target, partition_files(files, config)))
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use kurbo::{Point, Vec2};
    use trellis_viewport::{GridMapper, Position};

    use super::{
        DropConfig, DropRejection, DropState, DroppedFile, MimePattern, partition_files,
    };

    #[test]
    fn mime_wildcards() {
        assert!(MimePattern::new("image/*").matches("image/png"));
        assert!(MimePattern::new("image/*").matches("IMAGE/JPEG"));
        assert!(!MimePattern::new("image/*").matches("video/mp4"));
        assert!(MimePattern::new("image/png").matches("image/png"));
        assert!(!MimePattern::new("image/png").matches("image/jpeg"));
        assert!(MimePattern::new("*/*").matches("anything/else"));
    }

    #[test]
    fn scenario_c_one_oversized_file_among_five() {
        let config = DropConfig {
            max_files: 10,
            max_file_bytes: 1000,
            accept: vec![],
        };
        let mut files = vec![];
        for index in 0..5 {
            let bytes = if index == 2 { 5000 } else { 100 };
            files.push(DroppedFile::new(
                alloc::format!("f{index}"),
                "application/octet-stream",
                bytes,
            ));
        }

        let outcome = partition_files(files, &config);
        assert_eq!(outcome.accepted.len(), 4);
        assert_eq!(outcome.rejected.len(), 1);
        match &outcome.rejected[0] {
            DropRejection::FileTooLarge { name, bytes, limit } => {
                assert_eq!(name, "f2");
                assert_eq!(*bytes, 5000);
                assert_eq!(*limit, 1000);
            }
            other => panic!("expected size rejection, got {other:?}"),
        }
    }

    #[test]
    fn count_limit_rejects_the_tail() {
        let config = DropConfig {
            max_files: 2,
            ..DropConfig::default()
        };
        let files = vec![
            DroppedFile::new("a", "text/plain", 1),
            DroppedFile::new("b", "text/plain", 1),
            DroppedFile::new("c", "text/plain", 1),
        ];
        let outcome = partition_files(files, &config);
        assert_eq!(outcome.accepted.len(), 2);
        assert!(matches!(
            outcome.rejected[0],
            DropRejection::TooManyFiles { limit: 2, .. }
        ));
    }

    #[test]
    fn unsupported_types_report_their_mime() {
        let config = DropConfig {
            accept: vec![MimePattern::new("image/*")],
            ..DropConfig::default()
        };
        let outcome = partition_files(
            vec![DroppedFile::new("notes.txt", "text/plain", 1)],
            &config,
        );
        assert!(outcome.accepted.is_empty());
        let message = outcome.rejected[0].to_string();
        assert!(message.contains("text/plain"), "{message}");
    }

    #[test]
    fn drag_over_respects_the_predicate() {
        let mut mapper = GridMapper::new(10, 36.0, &[80.0; 4], 0);
        let mut state = DropState::new();

        // Only column 2 accepts drops.
        let accepts = |position: Position| position.column == 2;
        let over_column_2 = Point::new(2.0 * 80.0 + 10.0, 10.0);
        let over_column_0 = Point::new(10.0, 10.0);

        assert_eq!(
            state.drag_over(&mut mapper, over_column_2, Vec2::ZERO, accepts),
            Some(Position::new(0, 2))
        );
        assert_eq!(
            state.drag_over(&mut mapper, over_column_0, Vec2::ZERO, accepts),
            None
        );

        state.drag_over(&mut mapper, over_column_2, Vec2::ZERO, accepts);
        state.drag_leave();
        assert_eq!(state.target(), None);
    }

    #[test]
    fn drop_without_target_is_ignored() {
        let mut state = DropState::new();
        let outcome = state.drop_files(
            vec![DroppedFile::new("a", "text/plain", 1)],
            &DropConfig::default(),
        );
        assert!(outcome.is_none());
    }

    #[test]
    fn drop_on_target_validates_and_clears() {
        let mut mapper = GridMapper::new(10, 36.0, &[80.0; 4], 0);
        let mut state = DropState::new();
        state.drag_over(&mut mapper, Point::new(10.0, 10.0), Vec2::ZERO, |_| true);

        let (target, outcome) = state
            .drop_files(
                vec![DroppedFile::new("a", "text/plain", 1)],
                &DropConfig::default(),
            )
            .unwrap();
        assert_eq!(target, Position::new(0, 0));
        assert_eq!(outcome.accepted.len(), 1);
        assert_eq!(state.target(), None);
    }
}
