// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Events the engine pushes to the host.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};

use trellis_cell::{CellData, PreviewTarget};
use trellis_drop::{DropRejection, DroppedFile};
use trellis_editing::EditorId;
use trellis_selection::Selection;
use trellis_viewport::Position;

/// Anchor geometry for a host-mounted editor surface.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorAnchor {
    /// The edited cell's screen rectangle, from the coordinate mapper.
    pub rect: Rect,
    /// Which editor surface to mount.
    pub editor: EditorId,
}

/// A column lifecycle request forwarded to the host.
///
/// The engine renders no dialogs; it only names the operation and the
/// column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnAction {
    /// Append a new column.
    Add,
    /// Open the column's settings editor.
    Edit(usize),
    /// Rename the column inline.
    StartEdit(usize),
    /// Delete the column.
    Delete(usize),
    /// Duplicate the column.
    Duplicate(usize),
}

/// An event pushed from the engine to the host.
///
/// Drained via [`GridEngine::drain_events`](crate::GridEngine::drain_events)
/// after each input; the engine queues, never calls back re-entrantly.
#[derive(Clone, Debug, PartialEq)]
pub enum GridEvent {
    /// The selection changed.
    SelectionChanged {
        /// The new selection.
        selection: Selection,
    },
    /// A cell value was committed (in-place toggle or editor commit). The
    /// engine does not persist the value; the host does.
    CellEdited {
        /// The edited cell.
        position: Position,
        /// The committed value.
        value: CellData,
    },
    /// A cell activation target was clicked (link, attachment preview,
    /// button action).
    CellPreview {
        /// The activated cell.
        position: Position,
        /// What to open or trigger.
        target: PreviewTarget,
    },
    /// An editor surface should be mounted.
    EditStarted {
        /// The edited cell.
        position: Position,
        /// Anchor geometry for the popup positioner.
        anchor: EditorAnchor,
    },
    /// The open editor was dismissed without a commit.
    EditCancelled {
        /// The cell whose edit was discarded.
        position: Position,
    },
    /// A column was resized by dragging its header edge.
    ColumnResized {
        /// The resized column, with its new width applied.
        column: crate::source::Column,
        /// Column index.
        index: usize,
        /// New width in logical pixels.
        width: f64,
    },
    /// Columns were reordered by dragging a header.
    ColumnOrdered {
        /// Dragged column indices (currently always one).
        dragged: Vec<usize>,
        /// Index the columns were dropped before.
        drop_index: usize,
    },
    /// The column header menu affordance was clicked.
    ColumnHeaderMenu {
        /// Column index.
        column: usize,
        /// Screen position for the host-rendered menu.
        screen: Point,
    },
    /// A row header was right-clicked.
    RowHeaderMenu {
        /// Row index.
        row: usize,
        /// Screen position for the host-rendered menu.
        screen: Point,
    },
    /// A cell was right-clicked.
    CellContextMenu {
        /// Cell position.
        position: Position,
        /// Screen position for the host-rendered menu.
        screen: Point,
    },
    /// Delete was pressed with a non-empty selection; the host decides what
    /// deletion means (`selection.is_row_selection()` distinguishes rows
    /// from cell ranges).
    DeleteRequested {
        /// The selection to delete.
        selection: Selection,
    },
    /// A column lifecycle operation was requested.
    Column {
        /// The requested operation.
        action: ColumnAction,
    },
    /// Files were dropped on an accepting cell. `accepted` goes to the
    /// host's upload pipeline; `rejected` carries per-file reasons — one
    /// bad file never blocks the rest of the batch.
    FilesDropped {
        /// The target cell.
        position: Position,
        /// Files that passed validation, in drop order.
        accepted: Vec<DroppedFile>,
        /// Per-file rejections, in drop order.
        rejected: Vec<DropRejection>,
    },
    /// An announcement for the host's hidden live region changed.
    AnnouncementChanged {
        /// The text to speak, or `None` to clear.
        message: Option<String>,
        /// `true` for assertive announcements.
        assertive: bool,
    },
}
