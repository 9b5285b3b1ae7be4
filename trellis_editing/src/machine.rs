// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The editing state machine.

use alloc::string::String;

use trellis_cell::{Cell, CellData, CellKind};
use trellis_timing::{TimerId, TimerQueue};
use trellis_viewport::Position;

/// Which editor surface a cell kind opens.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EditorId {
    /// Inline text input.
    Text,
    /// Inline numeric input.
    Number,
    /// Date picker popup.
    Date,
    /// Choice dropdown popup.
    Select,
    /// Inline rating editor (digit keys).
    Rating,
    /// Record link picker popup.
    Link,
    /// Collaborator picker popup.
    User,
    /// Attachment panel popup.
    Attachment,
}

impl EditorId {
    /// The editor surface for a cell kind, or `None` when the kind has no
    /// editor (booleans toggle in place; computed, button, and loading cells
    /// are not editable).
    #[must_use]
    pub fn for_kind(kind: CellKind) -> Option<Self> {
        match kind {
            CellKind::Text => Some(Self::Text),
            CellKind::Number => Some(Self::Number),
            CellKind::Date => Some(Self::Date),
            CellKind::Select | CellKind::MultiSelect => Some(Self::Select),
            CellKind::Rating => Some(Self::Rating),
            CellKind::Link => Some(Self::Link),
            CellKind::User => Some(Self::User),
            CellKind::Attachment => Some(Self::Attachment),
            CellKind::Boolean | CellKind::Button | CellKind::Computed | CellKind::Loading => None,
        }
    }
}

/// Progress of an editor-initiated upload (attachment editors).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadStatus {
    /// Waiting on the host's upload callback, bounded by a tick deadline.
    Pending {
        /// The deadline timer.
        timer: TimerId,
    },
    /// The host's upload never resolved before its deadline.
    TimedOut,
}

/// The editing lifecycle state.
#[derive(Clone, Debug, PartialEq)]
pub enum EditState {
    /// No edit in progress.
    Idle,
    /// An eligible cell was activated; the editor surface is not mounted
    /// yet.
    Activating {
        /// Cell being activated.
        position: Position,
        /// Editor surface that will open.
        editor: EditorId,
    },
    /// The editor surface is open.
    Editing {
        /// Cell being edited.
        position: Position,
        /// Open editor surface.
        editor: EditorId,
        /// The value the editor holds, not yet committed.
        pending: Option<CellData>,
        /// Field-level error shown in the editor, if any.
        error: Option<String>,
        /// In-flight upload state, if any.
        upload: Option<UploadStatus>,
    },
}

/// Why activation was refused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActivateError {
    /// The cell kind is not editable (computed, button, loading) or has no
    /// editor surface.
    #[error("cell is not editable")]
    NotEditable,
    /// Another cell is being edited; commit or cancel it first.
    #[error("an edit is already in progress")]
    EditInProgress,
}

/// Owns the editing lifecycle.
///
/// All transitions are synchronous; the transient `Committing`/`Cancelling`
/// phases resolve inside [`EditMachine::commit`] and
/// [`EditMachine::cancel`], whose return values are what the engine forwards
/// to the host. The machine never persists a value itself.
#[derive(Clone, Debug, Default)]
pub struct EditMachine {
    state: EditState,
}

impl Default for EditState {
    fn default() -> Self {
        Self::Idle
    }
}

impl EditMachine {
    /// Creates an idle machine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &EditState {
        &self.state
    }

    /// Returns `true` while an editor surface is open.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing { .. })
    }

    /// The position being activated or edited, if any.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        match &self.state {
            EditState::Idle => None,
            EditState::Activating { position, .. } | EditState::Editing { position, .. } => {
                Some(*position)
            }
        }
    }

    /// Begins activation of an eligible cell.
    ///
    /// Returns the editor surface that will open. Refuses ineligible cells
    /// and re-entrant activation.
    pub fn activate(&mut self, position: Position, cell: &Cell) -> Result<EditorId, ActivateError> {
        if !matches!(self.state, EditState::Idle) {
            return Err(ActivateError::EditInProgress);
        }
        if !cell.is_editable() {
            return Err(ActivateError::NotEditable);
        }
        let editor = EditorId::for_kind(cell.kind()).ok_or(ActivateError::NotEditable)?;
        self.state = EditState::Activating { position, editor };
        Ok(editor)
    }

    /// Marks the editor surface as mounted: `Activating → Editing`.
    ///
    /// A no-op in any other state.
    pub fn open(&mut self) {
        if let EditState::Activating { position, editor } = self.state {
            self.state = EditState::Editing {
                position,
                editor,
                pending: None,
                error: None,
                upload: None,
            };
        }
    }

    /// Activation plus open with an initial pending value.
    ///
    /// Used for direct character input: typing over a cell both opens its
    /// editor and seeds it with the typed text.
    pub fn activate_with_input(
        &mut self,
        position: Position,
        cell: &Cell,
        initial: CellData,
    ) -> Result<EditorId, ActivateError> {
        let editor = self.activate(position, cell)?;
        self.open();
        self.set_pending(initial);
        Ok(editor)
    }

    /// Replaces the editor's pending value.
    ///
    /// Clears any field error: the user is typing again.
    pub fn set_pending(&mut self, value: CellData) {
        if let EditState::Editing { pending, error, .. } = &mut self.state {
            *pending = Some(value);
            *error = None;
        }
    }

    /// Surfaces a field-level error in the open editor.
    pub fn set_error(&mut self, message: impl Into<String>) {
        if let EditState::Editing { error, .. } = &mut self.state {
            *error = Some(message.into());
        }
    }

    /// Commits the pending value: `Editing → Committing → Idle`.
    ///
    /// Returns `(position, value)` for the host's edit callback. A commit
    /// with nothing pending behaves like a cancel and returns `None` — there
    /// is no value to hand over, and absence is not coerced to a default.
    pub fn commit(&mut self) -> Option<(Position, CellData)> {
        if let EditState::Editing {
            position, pending, ..
        } = &mut self.state
        {
            let result = pending.take().map(|value| (*position, value));
            self.state = EditState::Idle;
            return result;
        }
        None
    }

    /// Discards the edit: `{Activating, Editing} → Cancelling → Idle`.
    ///
    /// Returns the cancelled position, if an edit was in progress.
    pub fn cancel(&mut self) -> Option<Position> {
        match self.state {
            EditState::Idle => None,
            EditState::Activating { position, .. } | EditState::Editing { position, .. } => {
                self.state = EditState::Idle;
                Some(position)
            }
        }
    }

    /// Reopens the editor after the host rejected a commit asynchronously.
    ///
    /// The rejected value comes back as the pending value with the failure
    /// as a field-level error; the machine does not retry on its own.
    pub fn reject_commit(
        &mut self,
        position: Position,
        editor: EditorId,
        value: CellData,
        message: impl Into<String>,
    ) {
        if !matches!(self.state, EditState::Idle) {
            log::warn!("commit rejection arrived while another edit is open; dropping");
            return;
        }
        self.state = EditState::Editing {
            position,
            editor,
            pending: Some(value),
            error: Some(message.into()),
            upload: None,
        };
    }

    /// Starts an upload deadline in the open editor.
    ///
    /// The host's upload callback has `timeout_ticks` to resolve (see
    /// [`EditMachine::upload_resolved`]); when the timer fires the engine
    /// calls [`EditMachine::upload_timed_out`].
    pub fn begin_upload(&mut self, queue: &mut TimerQueue<Position>, timeout_ticks: u64) {
        if let EditState::Editing {
            position, upload, ..
        } = &mut self.state
        {
            let timer = queue.schedule_after(timeout_ticks, *position);
            *upload = Some(UploadStatus::Pending { timer });
        }
    }

    /// Marks the in-flight upload as resolved, cancelling its deadline.
    pub fn upload_resolved(&mut self, queue: &mut TimerQueue<Position>) {
        if let EditState::Editing { upload, .. } = &mut self.state
            && let Some(UploadStatus::Pending { timer }) = upload.take()
        {
            let _ = queue.cancel(timer);
        }
    }

    /// Marks the in-flight upload as timed out, surfacing a field error.
    ///
    /// The editor stays open so the user can retry or cancel; the stalled
    /// host promise is simply ignored if it resolves later.
    pub fn upload_timed_out(&mut self) {
        if let EditState::Editing { upload, error, .. } = &mut self.state
            && matches!(upload, Some(UploadStatus::Pending { .. }))
        {
            *upload = Some(UploadStatus::TimedOut);
            *error = Some(String::from("upload timed out"));
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use trellis_cell::{Cell, CellData};
    use trellis_timing::TimerQueue;
    use trellis_viewport::Position;

    use super::{ActivateError, EditMachine, EditState, EditorId, UploadStatus};

    fn at() -> Position {
        Position::new(2, 3)
    }

    #[test]
    fn full_commit_cycle() {
        let mut machine = EditMachine::new();
        let editor = machine.activate(at(), &Cell::text("a")).unwrap();
        assert_eq!(editor, EditorId::Text);
        assert!(matches!(machine.state(), EditState::Activating { .. }));

        machine.open();
        machine.set_pending(CellData::Text(String::from("b")));
        let (position, value) = machine.commit().unwrap();
        assert_eq!(position, at());
        assert_eq!(value, CellData::Text(String::from("b")));
        assert!(matches!(machine.state(), EditState::Idle));
    }

    #[test]
    fn escape_discards_pending() {
        let mut machine = EditMachine::new();
        machine.activate(at(), &Cell::text("a")).unwrap();
        machine.open();
        machine.set_pending(CellData::Text(String::from("typed")));

        assert_eq!(machine.cancel(), Some(at()));
        assert!(matches!(machine.state(), EditState::Idle));
        // Nothing left to commit.
        assert_eq!(machine.commit(), None);
    }

    #[test]
    fn commit_without_pending_is_a_cancel() {
        let mut machine = EditMachine::new();
        machine.activate(at(), &Cell::number(Some(1.0), "1")).unwrap();
        machine.open();
        assert_eq!(machine.commit(), None);
        assert!(matches!(machine.state(), EditState::Idle));
    }

    #[test]
    fn empty_numeric_input_commits_unset_not_zero() {
        let mut machine = EditMachine::new();
        machine.activate(at(), &Cell::number(Some(5.0), "5")).unwrap();
        machine.open();
        // The editor parsed an empty field.
        machine.set_pending(CellData::Number(None));
        let (_, value) = machine.commit().unwrap();
        assert_eq!(value, CellData::Number(None));
    }

    #[test]
    fn ineligible_cells_refuse_activation() {
        let mut machine = EditMachine::new();
        assert_eq!(
            machine.activate(at(), &Cell::Loading),
            Err(ActivateError::NotEditable)
        );
        assert_eq!(
            machine.activate(at(), &Cell::boolean(true)),
            Err(ActivateError::NotEditable)
        );
    }

    #[test]
    fn reentrant_activation_is_refused() {
        let mut machine = EditMachine::new();
        machine.activate(at(), &Cell::text("a")).unwrap();
        assert_eq!(
            machine.activate(Position::new(0, 0), &Cell::text("b")),
            Err(ActivateError::EditInProgress)
        );
    }

    #[test]
    fn typing_seeds_the_editor() {
        let mut machine = EditMachine::new();
        machine
            .activate_with_input(at(), &Cell::text(""), CellData::Text(String::from("q")))
            .unwrap();
        match machine.state() {
            EditState::Editing { pending, .. } => {
                assert_eq!(*pending, Some(CellData::Text(String::from("q"))));
            }
            other => panic!("expected editing, got {other:?}"),
        }
    }

    #[test]
    fn rejected_commit_reopens_with_error() {
        let mut machine = EditMachine::new();
        machine.activate(at(), &Cell::text("a")).unwrap();
        machine.open();
        machine.set_pending(CellData::Text(String::from("b")));
        let (position, value) = machine.commit().unwrap();

        // Host save failed later.
        machine.reject_commit(position, EditorId::Text, value, "save failed");
        match machine.state() {
            EditState::Editing { error, pending, .. } => {
                assert_eq!(error.as_deref(), Some("save failed"));
                assert!(pending.is_some());
            }
            other => panic!("expected editing, got {other:?}"),
        }

        // Typing again clears the error.
        machine.set_pending(CellData::Text(String::from("c")));
        match machine.state() {
            EditState::Editing { error, .. } => assert!(error.is_none()),
            other => panic!("expected editing, got {other:?}"),
        }
    }

    #[test]
    fn upload_deadline_times_out_and_stays_editing() {
        let mut machine = EditMachine::new();
        let mut queue = TimerQueue::new();
        machine
            .activate(at(), &Cell::Attachment { items: alloc::vec::Vec::new() })
            .unwrap();
        machine.open();

        machine.begin_upload(&mut queue, 30);
        assert_eq!(queue.len(), 1);

        // The deadline fires; the engine reports the timeout.
        let due = queue.advance_to(30);
        assert_eq!(due, alloc::vec![at()]);
        machine.upload_timed_out();

        match machine.state() {
            EditState::Editing { upload, error, .. } => {
                assert_eq!(*upload, Some(UploadStatus::TimedOut));
                assert!(error.is_some());
            }
            other => panic!("expected editing, got {other:?}"),
        }
    }

    #[test]
    fn resolved_upload_cancels_its_deadline() {
        let mut machine = EditMachine::new();
        let mut queue = TimerQueue::new();
        machine
            .activate(at(), &Cell::Attachment { items: alloc::vec::Vec::new() })
            .unwrap();
        machine.open();

        machine.begin_upload(&mut queue, 30);
        machine.upload_resolved(&mut queue);
        assert!(queue.is_empty());
        assert!(queue.advance_to(100).is_empty());
    }
}
