// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region results and edit payloads.

use alloc::string::String;
use alloc::vec::Vec;

use crate::cell::{AttachmentItem, LinkItem, UserItem};

/// A would-be or committed cell value.
///
/// Mirrors the data payloads of the cell variants. Unset scalar values are
/// `None`, never a sentinel — an empty numeric editor commits
/// `Number(None)`, not zero.
#[derive(Clone, Debug, PartialEq)]
pub enum CellData {
    /// Text value.
    Text(String),
    /// Number value; `None` is unset.
    Number(Option<f64>),
    /// Checkbox value.
    Boolean(bool),
    /// Date value in epoch milliseconds; `None` is unset.
    Date(Option<i64>),
    /// Chosen select ids.
    Select(Vec<String>),
    /// Rating value; `None` is unset.
    Rating(Option<u8>),
    /// Linked records.
    Link(Vec<LinkItem>),
    /// Collaborators.
    User(Vec<UserItem>),
    /// Attachments.
    Attachment(Vec<AttachmentItem>),
}

/// What a pointer activation opens or triggers, as opposed to a value
/// change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewTarget {
    /// Navigate to a linked record.
    Record {
        /// Linked record id.
        id: String,
    },
    /// Open an attachment preview.
    Attachment {
        /// Attachment id.
        id: String,
    },
    /// Trigger a button's host-defined action.
    Action {
        /// Action identifier.
        id: String,
    },
}

/// The result of hit-testing a pointer position against a cell's
/// sub-regions.
///
/// Returned by [`CellRenderer::check_region`](crate::CellRenderer::check_region)
/// and consumed by click dispatch:
///
/// - [`CellRegion::Update`] carries the would-be new value of a
///   value-mutating control (a checkbox, a rating star). Nothing is
///   committed by region checking itself; the editing layer commits when the
///   click goes through.
/// - [`CellRegion::Preview`] carries an activation target: a link to
///   navigate, an attachment to preview, a button action to trigger.
/// - [`CellRegion::ToggleEditing`] asks the editing layer to open the
///   cell's editor.
#[derive(Clone, Debug, PartialEq)]
pub enum CellRegion {
    /// Nothing interactive under the pointer.
    Blank,
    /// A value-mutating control; the payload is the would-be new value.
    Update(CellData),
    /// An activation target under the pointer.
    Preview(PreviewTarget),
    /// A control that opens the cell's editor.
    ToggleEditing,
}

impl CellRegion {
    /// Returns `true` for [`CellRegion::Blank`].
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}
