// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The grid engine: view state, input routing, and host event emission.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Size, Vec2};

use trellis_access::{FocusManager, LiveRegion, Politeness};
use trellis_cell::{
    CellData, CellRegion, CellTheme, MonospaceMeasurer, RenderCtx, RendererRegistry, TextMeasurer,
};
use trellis_drop::{DropConfig, DropState, DroppedFile};
use trellis_editing::{EditMachine, EditState, EditorId};
use trellis_keynav::{Modifiers, NavKey, NavOptions, next_enabled_position};
use trellis_selection::{CellRange, SelectionState, SpanRange};
use trellis_timing::TimerQueue;
use trellis_viewport::{GridMapper, GridRegion, Overscan, Position, ScrollAlign, VisibleWindow};

use crate::events::{ColumnAction, EditorAnchor, GridEvent};
use crate::scheduler::FrameScheduler;
use crate::source::{Column, DataSource};

/// Pixel zone at a header's right edge that starts a resize drag.
const RESIZE_HANDLE: f64 = 4.0;
/// Pixel zone at a header's right side that opens the column menu.
const MENU_ZONE: f64 = 18.0;
/// Minimum column width a resize drag can reach.
const MIN_COLUMN_WIDTH: f64 = 40.0;

/// Engine behavior knobs.
#[derive(Clone, Debug)]
pub struct EngineOptions {
    /// Virtualization overscan margin.
    pub overscan: Overscan,
    /// Whether arrow navigation wraps at row/column boundaries.
    pub wrap_navigation: bool,
    /// Validation limits for dropped files.
    pub drop: DropConfig,
    /// Host ticks an editor upload may stay pending before timing out.
    pub upload_timeout_ticks: u64,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            overscan: Overscan::default(),
            wrap_navigation: false,
            drop: DropConfig::default(),
            upload_timeout_ticks: 600,
        }
    }
}

#[derive(Clone, Debug)]
enum Gesture {
    ResizeColumn {
        index: usize,
        start_x: f64,
        start_width: f64,
    },
    ReorderColumn {
        index: usize,
        position_x: f64,
    },
}

/// The grid rendering and interaction engine.
///
/// Owns the transient view state — scroll, selection, active cell, edit
/// machine, hover, drop target — and nothing else: columns, row count, and
/// cell values are pulled from the [`DataSource`] on every sync, and every
/// durable effect leaves as a [`GridEvent`]. The renderer registry is
/// injected at construction; redraws go through the [`FrameScheduler`]
/// port and coalesce to one frame per burst of changes.
pub struct GridEngine<S: FrameScheduler> {
    scheduler: S,
    options: EngineOptions,
    registry: RendererRegistry,
    theme: CellTheme,
    measurer: Box<dyn TextMeasurer>,

    pub(crate) mapper: GridMapper,
    pub(crate) columns: Vec<Column>,
    pub(crate) row_count: usize,

    selection: SelectionState,
    active: Option<Position>,
    extend_cursor: Option<Position>,
    edit: EditMachine,
    drop: DropState,
    focus: FocusManager<u64>,
    live: LiveRegion,
    upload_timers: TimerQueue<Position>,
    hover: Option<Position>,
    gesture: Option<Gesture>,

    pub(crate) scroll: Vec2,
    pub(crate) viewport: Size,

    events: Vec<GridEvent>,
    frame_requested: bool,
    structure: Option<(usize, usize)>,
    announced: Option<(String, bool)>,
}

impl<S: FrameScheduler> core::fmt::Debug for GridEngine<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GridEngine")
            .field("rows", &self.row_count)
            .field("columns", &self.columns.len())
            .field("scroll", &self.scroll)
            .field("viewport", &self.viewport)
            .field("active", &self.active)
            .field("selection", self.selection.selection())
            .field("edit", self.edit.state())
            .finish_non_exhaustive()
    }
}

impl<S: FrameScheduler> GridEngine<S> {
    /// Creates an engine with an injected renderer registry and frame
    /// scheduler.
    #[must_use]
    pub fn new(registry: RendererRegistry, scheduler: S) -> Self {
        Self {
            scheduler,
            options: EngineOptions::default(),
            registry,
            theme: CellTheme::default(),
            measurer: Box::new(MonospaceMeasurer::default()),
            mapper: GridMapper::new(0, 36.0, &[], 0),
            columns: Vec::new(),
            row_count: 0,
            selection: SelectionState::new(),
            active: None,
            extend_cursor: None,
            edit: EditMachine::new(),
            drop: DropState::new(),
            focus: FocusManager::new(),
            live: LiveRegion::new(),
            upload_timers: TimerQueue::new(),
            hover: None,
            gesture: None,
            scroll: Vec2::ZERO,
            viewport: Size::new(800.0, 600.0),
            events: Vec::new(),
            frame_requested: false,
            structure: None,
            announced: None,
        }
    }

    /// Replaces the engine options.
    pub fn set_options(&mut self, options: EngineOptions) {
        self.options = options;
        self.request_redraw();
    }

    /// Replaces the theme.
    pub fn set_theme(&mut self, theme: CellTheme) {
        self.theme = theme;
        self.request_redraw();
    }

    /// Replaces the text measurer with the host's real font metrics.
    pub fn set_text_measurer(&mut self, measurer: Box<dyn TextMeasurer>) {
        self.measurer = measurer;
        self.request_redraw();
    }

    /// The focus manager, for host shadow-node integration.
    pub fn focus_mut(&mut self) -> &mut FocusManager<u64> {
        &mut self.focus
    }

    pub(crate) fn theme(&self) -> &CellTheme {
        &self.theme
    }

    pub(crate) fn text_measurer(&self) -> &dyn TextMeasurer {
        self.measurer.as_ref()
    }

    pub(crate) fn registry(&self) -> &RendererRegistry {
        &self.registry
    }

    pub(crate) fn hover(&self) -> Option<Position> {
        self.hover
    }

    pub(crate) fn drop_target(&self) -> Option<Position> {
        self.drop.target()
    }

    /// The live region, for host shadow-node integration.
    #[must_use]
    pub fn live_region(&self) -> &LiveRegion {
        &self.live
    }

    /// The current selection.
    #[must_use]
    pub fn selection(&self) -> &trellis_selection::Selection {
        self.selection.selection()
    }

    /// The active cell, if any.
    #[must_use]
    pub fn active_cell(&self) -> Option<Position> {
        self.active
    }

    /// The current edit state.
    #[must_use]
    pub fn edit_state(&self) -> &EditState {
        self.edit.state()
    }

    /// Drains the queued host events.
    pub fn drain_events(&mut self) -> Vec<GridEvent> {
        core::mem::take(&mut self.events)
    }

    // ---- host geometry -------------------------------------------------

    /// Sets the widget's on-screen size.
    pub fn set_viewport(&mut self, size: Size) {
        if self.viewport != size {
            self.viewport = size;
            self.request_redraw();
        }
    }

    /// Sets the scroll offset, clamping into the valid range.
    pub fn set_scroll(&mut self, scroll: Vec2) {
        let clamped = self.clamp_scroll(scroll);
        if self.scroll != clamped {
            self.scroll = clamped;
            self.request_redraw();
        }
    }

    /// Scrolls by a wheel delta.
    pub fn scroll_by(&mut self, delta: Vec2) {
        self.set_scroll(self.scroll + delta);
    }

    /// The current scroll offset.
    #[must_use]
    pub fn scroll(&self) -> Vec2 {
        self.scroll
    }

    fn clamp_scroll(&mut self, scroll: Vec2) -> Vec2 {
        let content = self.mapper.content_size();
        let max_x = (content.width - self.viewport.width).max(0.0);
        let max_y = (content.height - self.viewport.height).max(0.0);
        Vec2::new(scroll.x.clamp(0.0, max_x), scroll.y.clamp(0.0, max_y))
    }

    /// The currently realized index window.
    #[must_use]
    pub fn visible_window(&mut self) -> VisibleWindow {
        self.mapper
            .visible_window(self.viewport, self.scroll, self.options.overscan)
    }

    // ---- imperative handle ---------------------------------------------

    /// The widget's bounding box in its own coordinate space.
    ///
    /// This is the container rich-editor popups clamp against (see
    /// `trellis_editing::position_popup`).
    #[must_use]
    pub fn container(&self) -> kurbo::Rect {
        kurbo::Rect::new(0.0, 0.0, self.viewport.width, self.viewport.height)
    }

    /// Maps a widget-space point to cell indices, or `None` off the body.
    #[must_use]
    pub fn cell_at_position(&mut self, x: f64, y: f64) -> Option<Position> {
        self.mapper.position_at(Point::new(x, y), self.scroll)
    }

    /// Replaces the selection from the host.
    pub fn set_selection(&mut self, selection: trellis_selection::Selection) {
        if self.selection.set(selection) {
            self.after_selection_change();
        }
    }

    /// Forwards a column lifecycle request to the host event stream.
    pub fn request_column_action(&mut self, action: ColumnAction) {
        self.emit(GridEvent::Column { action });
    }

    // ---- sync ----------------------------------------------------------

    /// Pulls the host's current columns, row count, and layout into the
    /// mapper.
    ///
    /// A structurally different dataset (changed row or column count)
    /// resets the transient view state: selection, active cell, and any
    /// open edit.
    pub fn sync(&mut self, source: &impl DataSource) {
        self.columns = source.columns();
        self.row_count = source.row_count();
        let widths: Vec<f64> = self.columns.iter().map(|column| column.width).collect();
        self.mapper
            .sync(self.row_count, source.row_height(), &widths);
        self.mapper.set_freeze_count(source.freeze_column_count());
        self.mapper
            .set_header_sizes(source.row_header_width(), source.column_header_height());

        let structure = (self.row_count, self.columns.len());
        if self.structure.is_some_and(|previous| previous != structure) {
            self.reset_view_state();
        }
        self.structure = Some(structure);
        self.scroll = self.clamp_scroll(self.scroll);
    }

    fn reset_view_state(&mut self) {
        if let Some(position) = self.edit.cancel() {
            self.emit(GridEvent::EditCancelled { position });
        }
        self.active = None;
        self.extend_cursor = None;
        self.hover = None;
        self.gesture = None;
        self.drop.drag_leave();
        if self.selection.clear() {
            self.after_selection_change();
        }
    }

    // ---- events & redraw ----------------------------------------------

    fn emit(&mut self, event: GridEvent) {
        self.events.push(event);
        self.request_redraw();
    }

    fn request_redraw(&mut self) {
        if !self.frame_requested {
            self.frame_requested = true;
            self.scheduler.schedule();
        }
    }

    fn after_selection_change(&mut self) {
        let selection = self.selection.selection().clone();
        let selected = selection.cell_count(self.row_count, self.columns.len());
        let total = self.row_count * self.columns.len().max(1);
        self.live.announce_selection(selected, total);
        self.emit(GridEvent::SelectionChanged { selection });
    }

    fn announce_flush(&mut self) {
        let current = self
            .live
            .current()
            .map(|a| (a.message.clone(), a.politeness == Politeness::Assertive));
        if current != self.announced {
            self.announced = current.clone();
            let (message, assertive) = match current {
                Some((message, assertive)) => (Some(message), assertive),
                None => (None, false),
            };
            self.emit(GridEvent::AnnouncementChanged { message, assertive });
        }
    }

    // ---- pointer input -------------------------------------------------

    /// Primary-button press.
    pub fn pointer_down(
        &mut self,
        source: &impl DataSource,
        point: Point,
        modifiers: Modifiers,
    ) {
        match self.mapper.region_at(point, self.scroll) {
            GridRegion::Corner => {
                if self.selection.select_all() {
                    self.after_selection_change();
                }
            }
            GridRegion::ColumnHeader { column } => {
                self.column_header_down(point, column, modifiers);
            }
            GridRegion::RowHeader { row } => self.row_header_down(row, modifiers),
            GridRegion::Cell { position, .. } => {
                self.cell_down(source, position, point, modifiers);
            }
            GridRegion::Blank => {}
        }
    }

    fn column_header_down(&mut self, point: Point, column: usize, modifiers: Modifiers) {
        let left = self.mapper.column_screen_x(column, self.scroll.x);
        let width = self.columns.get(column).map_or(0.0, |c| c.width);
        let right = left + width;

        if (right - point.x).abs() <= RESIZE_HANDLE {
            self.gesture = Some(Gesture::ResizeColumn {
                index: column,
                start_x: point.x,
                start_width: width,
            });
            return;
        }
        if right - point.x <= MENU_ZONE {
            self.emit(GridEvent::ColumnHeaderMenu {
                column,
                screen: point,
            });
            return;
        }

        self.gesture = Some(Gesture::ReorderColumn {
            index: column,
            position_x: point.x,
        });
        let changed = if modifiers.contains(Modifiers::CTRL) {
            self.selection.add_columns(SpanRange::new(column, column))
        } else if modifiers.contains(Modifiers::SHIFT) {
            let anchor = self
                .selection
                .selection()
                .column_spans()
                .first()
                .map_or(column, |span| span.start);
            self.selection.select_columns(SpanRange::new(anchor, column))
        } else {
            self.selection.select_columns(SpanRange::new(column, column))
        };
        if changed {
            self.after_selection_change();
        }
    }

    fn row_header_down(&mut self, row: usize, modifiers: Modifiers) {
        let changed = if modifiers.contains(Modifiers::CTRL) {
            self.selection.toggle_row(row)
        } else if modifiers.contains(Modifiers::SHIFT) {
            let anchor = self
                .selection
                .selection()
                .row_spans()
                .first()
                .map_or(row, |span| span.start);
            self.selection.select_rows(SpanRange::new(anchor, row))
        } else {
            self.selection.select_rows(SpanRange::new(row, row))
        };
        if changed {
            self.after_selection_change();
        }
    }

    fn cell_down(
        &mut self,
        source: &impl DataSource,
        position: Position,
        point: Point,
        modifiers: Modifiers,
    ) {
        if source.is_cell_disabled(position) {
            return;
        }
        if self.edit.is_editing() && self.edit.position() != Some(position) {
            self.commit_open_edit(source);
        }

        let changed = if modifiers.contains(Modifiers::SHIFT) {
            let anchor = self.active.unwrap_or(position);
            self.extend_cursor = Some(position);
            self.selection.extend_cell_to(anchor, position)
        } else if modifiers.contains(Modifiers::CTRL) {
            self.active = Some(position);
            self.selection.add_cell_range(CellRange::single(position))
        } else {
            self.active = Some(position);
            self.extend_cursor = None;
            self.selection.select_cell(position)
        };
        if changed {
            self.after_selection_change();
        }

        // Renderer sub-region dispatch: value toggles, activations, editor
        // toggles.
        let cell = source.cell(position);
        let Some(rect) = self.mapper.cell_rect(position, self.scroll) else {
            return;
        };
        let ctx = RenderCtx::new(&self.theme, self.measurer.as_ref());
        let mut regions: Vec<CellRegion> = Vec::new();
        self.registry
            .on_click(&cell, rect, point, &ctx, &mut |region| regions.push(region));
        for region in regions {
            match region {
                CellRegion::Update(value) => {
                    if cell.is_editable() {
                        self.live.announce_value_change(&data_summary(&value));
                        self.emit(GridEvent::CellEdited { position, value });
                    }
                }
                CellRegion::Preview(target) => {
                    self.emit(GridEvent::CellPreview { position, target });
                }
                CellRegion::ToggleEditing => self.start_edit(source, position, None),
                CellRegion::Blank => {}
            }
        }
        self.announce_flush();
    }

    /// Pointer movement: hover tracking and drag gestures.
    pub fn pointer_move(&mut self, point: Point) {
        match &mut self.gesture {
            Some(Gesture::ResizeColumn {
                index,
                start_x,
                start_width,
            }) => {
                let width = (*start_width + (point.x - *start_x)).max(MIN_COLUMN_WIDTH);
                let index = *index;
                let Some(column) = self.columns.get_mut(index) else {
                    return;
                };
                column.width = width;
                let column = column.clone();
                let row_default = self.mapper_row_default();
                let widths: Vec<f64> = self.columns.iter().map(|c| c.width).collect();
                self.mapper.sync(self.row_count, row_default, &widths);
                self.emit(GridEvent::ColumnResized {
                    column,
                    index,
                    width,
                });
                return;
            }
            Some(Gesture::ReorderColumn { position_x, .. }) => {
                *position_x = point.x;
                self.request_redraw();
                return;
            }
            None => {}
        }

        let hover = self.mapper.position_at(point, self.scroll);
        if hover != self.hover {
            self.hover = hover;
            self.request_redraw();
        }
    }

    fn mapper_row_default(&mut self) -> f64 {
        self.mapper.rows_mut().default_extent()
    }

    /// Primary-button release: finishes drag gestures.
    pub fn pointer_up(&mut self, point: Point) {
        match self.gesture.take() {
            Some(Gesture::ReorderColumn { index, .. }) => {
                if let GridRegion::ColumnHeader { column } | GridRegion::Cell {
                    position: Position { column, .. },
                    ..
                } = self.mapper.region_at(point, self.scroll)
                    && column != index
                {
                    let drop_index = if column > index { column + 1 } else { column };
                    self.emit(GridEvent::ColumnOrdered {
                        dragged: alloc::vec![index],
                        drop_index,
                    });
                }
            }
            Some(Gesture::ResizeColumn { .. }) | None => {}
        }
    }

    /// Secondary-button press: context menus.
    pub fn context_menu(&mut self, point: Point) {
        match self.mapper.region_at(point, self.scroll) {
            GridRegion::ColumnHeader { column } => {
                self.emit(GridEvent::ColumnHeaderMenu {
                    column,
                    screen: point,
                });
            }
            GridRegion::RowHeader { row } => {
                self.emit(GridEvent::RowHeaderMenu { row, screen: point });
            }
            GridRegion::Cell { position, .. } => {
                self.emit(GridEvent::CellContextMenu {
                    position,
                    screen: point,
                });
            }
            GridRegion::Corner | GridRegion::Blank => {}
        }
    }

    /// Double click: enter edit mode on eligible cells, or rename columns.
    pub fn double_click(&mut self, source: &impl DataSource, point: Point) {
        match self.mapper.region_at(point, self.scroll) {
            GridRegion::Cell { position, .. } => {
                if !source.is_cell_disabled(position) {
                    self.start_edit(source, position, None);
                }
            }
            GridRegion::ColumnHeader { column } => {
                self.emit(GridEvent::Column {
                    action: ColumnAction::StartEdit(column),
                });
            }
            _ => {}
        }
    }

    // ---- drag & drop ---------------------------------------------------

    /// Files dragged over the grid.
    pub fn drag_over(&mut self, source: &impl DataSource, point: Point) {
        let previous = self.drop.target();
        let target = self.drop.drag_over(&mut self.mapper, point, self.scroll, |position| {
            source.cell_accepts_drop(position)
        });
        if previous != target {
            // The target highlight is a single-cell selection used purely
            // as a visual affordance.
            if let Some(position) = target {
                if self.selection.select_cell(position) {
                    self.after_selection_change();
                }
            }
            self.request_redraw();
        }
    }

    /// The drag left the grid.
    pub fn drag_leave(&mut self) {
        self.drop.drag_leave();
        self.request_redraw();
    }

    /// Files dropped: validate and forward.
    pub fn drop_files(&mut self, files: Vec<DroppedFile>) {
        if let Some((position, outcome)) = self.drop.drop_files(files, &self.options.drop) {
            if !outcome.rejected.is_empty() {
                self.live
                    .announce_error(alloc::format!("{} files rejected", outcome.rejected.len()), None);
            }
            self.emit(GridEvent::FilesDropped {
                position,
                accepted: outcome.accepted,
                rejected: outcome.rejected,
            });
            self.announce_flush();
        }
    }

    // ---- keyboard ------------------------------------------------------

    fn nav_options(&mut self) -> NavOptions {
        let body_height = (self.viewport.height - self.mapper.column_header_height()).max(0.0);
        let row_default = self.mapper_row_default();
        let page_size = if row_default > 0.0 {
            #[expect(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                reason = "viewport rows is a small positive count"
            )]
            let rows = (body_height / row_default) as usize;
            rows.max(1)
        } else {
            NavOptions::DEFAULT_PAGE_SIZE
        };
        NavOptions {
            rows: self.row_count,
            columns: self.columns.len(),
            wrap: self.options.wrap_navigation,
            page_size,
        }
    }

    /// A navigation key press.
    ///
    /// Enter commits any open edit before moving; plain movement collapses
    /// the selection to the new active cell; Shift extends it. The active
    /// cell is scrolled into view.
    pub fn key_nav(&mut self, source: &impl DataSource, key: NavKey, modifiers: Modifiers) {
        if self.edit.is_editing() {
            match key {
                NavKey::Enter | NavKey::Tab => self.commit_open_edit(source),
                // Other navigation keys belong to the editor surface.
                _ => return,
            }
        }

        // The first key press on an inactive grid lands on the origin
        // instead of moving from it.
        let Some(active) = self.active else {
            if self.row_count > 0 && !self.columns.is_empty() {
                let start = Position::new(0, 0);
                self.active = Some(start);
                self.extend_cursor = None;
                if self.selection.select_cell(start) {
                    self.after_selection_change();
                }
                self.scroll_cell_into_view(start);
                self.announce_flush();
            }
            return;
        };

        let options = self.nav_options();
        let extending = modifiers.contains(Modifiers::SHIFT) && !matches!(key, NavKey::Tab | NavKey::Enter);
        let from = if extending {
            self.extend_cursor.unwrap_or(active)
        } else {
            active
        };
        let Some(next) = next_enabled_position(from, key, modifiers, &options, |position| {
            source.is_cell_disabled(position)
        }) else {
            return;
        };

        if extending {
            self.extend_cursor = Some(next);
            if self.selection.extend_cell_to(active, next) {
                self.after_selection_change();
            }
        } else {
            self.active = Some(next);
            self.extend_cursor = None;
            if self.selection.select_cell(next) {
                self.after_selection_change();
            }
        }
        self.scroll_cell_into_view(next);
        self.announce_flush();
    }

    /// Escape: cancel an open edit (discarding the pending value).
    pub fn escape(&mut self) {
        if let Some(position) = self.edit.cancel() {
            self.live.announce_edit_mode(false);
            self.emit(GridEvent::EditCancelled { position });
            self.announce_flush();
        }
    }

    /// Delete/Backspace: ask the host to delete the selection.
    pub fn delete_key(&mut self) {
        let selection = self.selection.selection().clone();
        if !selection.is_none() {
            self.emit(GridEvent::DeleteRequested { selection });
        }
    }

    /// Direct character input on the active cell opens its editor seeded
    /// with the typed text.
    pub fn char_input(&mut self, source: &impl DataSource, ch: char) {
        if self.edit.is_editing() || ch.is_control() {
            return;
        }
        let Some(position) = self.active else {
            return;
        };
        if source.is_cell_disabled(position) {
            return;
        }
        let mut seed = String::new();
        seed.push(ch);
        self.start_edit(source, position, Some(CellData::Text(seed)));
    }

    // ---- editing -------------------------------------------------------

    fn start_edit(&mut self, source: &impl DataSource, position: Position, seed: Option<CellData>) {
        let cell = source.cell(position);
        let result = match seed {
            Some(seed) => self.edit.activate_with_input(position, &cell, seed),
            None => self.edit.activate(position, &cell).inspect(|_| self.edit.open()),
        };
        match result {
            Ok(editor) => {
                let rect = self
                    .mapper
                    .cell_rect(position, self.scroll)
                    .unwrap_or_default();
                self.live.announce_edit_mode(true);
                self.emit(GridEvent::EditStarted {
                    position,
                    anchor: EditorAnchor { rect, editor },
                });
                self.announce_flush();
            }
            Err(error) => log::debug!("edit not started at {position:?}: {error}"),
        }
    }

    /// Replaces the open editor's pending value (host editor surfaces call
    /// this as the user types).
    pub fn set_pending_edit(&mut self, value: CellData) {
        self.edit.set_pending(value);
    }

    /// Commits the open edit, if any.
    pub fn commit_edit(&mut self, source: &impl DataSource) {
        self.commit_open_edit(source);
    }

    fn commit_open_edit(&mut self, _source: &impl DataSource) {
        // A commit with nothing pending closes the editor without a value;
        // there is no event to emit for it.
        if let Some((position, value)) = self.edit.commit() {
            self.live.announce_edit_mode(false);
            self.live.announce_value_change(&data_summary(&value));
            self.emit(GridEvent::CellEdited { position, value });
            self.announce_flush();
        }
    }

    /// Reopens the editor with a field error after the host rejected a
    /// commit asynchronously. The engine does not retry.
    pub fn reject_commit(
        &mut self,
        position: Position,
        editor: EditorId,
        value: CellData,
        message: impl Into<String>,
    ) {
        let message = message.into();
        self.edit
            .reject_commit(position, editor, value, message.clone());
        self.live.announce_error(message, None);
        self.announce_flush();
        self.request_redraw();
    }

    /// Starts the upload deadline for the open editor's in-flight upload.
    pub fn begin_upload(&mut self) {
        self.edit
            .begin_upload(&mut self.upload_timers, self.options.upload_timeout_ticks);
    }

    /// The host's upload callback resolved.
    ///
    /// A rejection is caught here and surfaced as a per-field error; it
    /// never crashes the editing state machine.
    pub fn upload_finished(&mut self, result: Result<(), String>) {
        self.edit.upload_resolved(&mut self.upload_timers);
        if let Err(message) = result {
            self.edit.set_error(message.clone());
            self.live.announce_error(message, None);
            self.announce_flush();
        }
        self.request_redraw();
    }

    // ---- frame ---------------------------------------------------------

    fn scroll_cell_into_view(&mut self, position: Position) {
        let y = self
            .mapper
            .scroll_to_row(position.row, self.viewport.height, self.scroll.y, ScrollAlign::Auto);
        let x = self.mapper.scroll_to_column(
            position.column,
            self.viewport.width,
            self.scroll.x,
            ScrollAlign::Auto,
        );
        self.set_scroll(Vec2::new(x, y));
    }

    /// Advances the upload and announcement timers to `now`.
    ///
    /// [`GridEngine::frame`] calls this; it is public for hosts that tick
    /// timers on a different cadence than they paint.
    pub fn advance_timers(&mut self, now: u64) {
        for position in self.upload_timers.advance_to(now) {
            log::warn!("upload at {position:?} timed out");
            self.edit.upload_timed_out();
            self.request_redraw();
        }
        self.live.advance_to(now);
        self.announce_flush();
    }

    /// Produces the frame's draw ops.
    ///
    /// The one place pixels come from: pulls host data, advances timers,
    /// measures the visible window, and emits the op list (scrolled cells,
    /// frozen cells on top, then header bands). Clears the coalesced frame
    /// request.
    pub fn frame(&mut self, source: &impl DataSource, now: u64) -> Vec<trellis_cell::DrawOp> {
        self.frame_requested = false;
        self.scheduler.cancel();
        self.advance_timers(now);
        self.sync(source);
        self.draw(source)
    }
}

/// A short spoken form of a committed value.
fn data_summary(value: &CellData) -> String {
    match value {
        CellData::Text(text) => text.clone(),
        CellData::Number(Some(number)) => alloc::format!("{number}"),
        CellData::Number(None) | CellData::Date(None) | CellData::Rating(None) => String::new(),
        CellData::Boolean(true) => String::from("checked"),
        CellData::Boolean(false) => String::from("unchecked"),
        CellData::Date(Some(ms)) => alloc::format!("{ms}"),
        CellData::Rating(Some(stars)) => alloc::format!("{stars} stars"),
        CellData::Select(ids) => alloc::format!("{} selected", ids.len()),
        CellData::Link(items) => alloc::format!("{} links", items.len()),
        CellData::User(items) => alloc::format!("{} collaborators", items.len()),
        CellData::Attachment(items) => alloc::format!("{} attachments", items.len()),
    }
}
