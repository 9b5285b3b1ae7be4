// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tests for the grid engine: input routing, event emission,
//! and the frame cycle, driven through the public host interface.

use kurbo::{Point, Size, Vec2};

use trellis_cell::{Cell, CellData, DrawOp, RendererRegistry};
use trellis_grid::{Column, DataSource, GridEngine, GridEvent, ManualScheduler};
use trellis_keynav::{Modifiers, NavKey};
use trellis_viewport::Position;

struct Host {
    rows: usize,
    columns: usize,
    frozen: usize,
    disabled_row: Option<usize>,
}

impl Default for Host {
    fn default() -> Self {
        Self {
            rows: 1000,
            columns: 24,
            frozen: 2,
            disabled_row: None,
        }
    }
}

impl DataSource for Host {
    fn columns(&self) -> Vec<Column> {
        (0..self.columns)
            .map(|i| Column::new(format!("c{i}"), format!("Column {i}"), 80.0))
            .collect()
    }

    fn row_count(&self) -> usize {
        self.rows
    }

    fn cell(&self, position: Position) -> Cell {
        match position.column {
            1 => Cell::boolean(position.row % 2 == 0),
            2 => Cell::rating(Some(3)),
            _ => Cell::text(format!("r{} c{}", position.row, position.column)),
        }
    }

    fn is_cell_disabled(&self, position: Position) -> bool {
        self.disabled_row == Some(position.row)
    }

    fn cell_accepts_drop(&self, position: Position) -> bool {
        position.column == 3
    }

    fn freeze_column_count(&self) -> usize {
        self.frozen
    }

    fn row_header_width(&self) -> f64 {
        0.0
    }

    fn column_header_height(&self) -> f64 {
        0.0
    }
}

fn engine() -> GridEngine<ManualScheduler> {
    GridEngine::new(RendererRegistry::with_defaults(), ManualScheduler::default())
}

fn has_selection_change(events: &[GridEvent]) -> bool {
    events
        .iter()
        .any(|event| matches!(event, GridEvent::SelectionChanged { .. }))
}

#[test]
fn arrow_navigation_walks_to_the_edge_and_stops() {
    let host = Host::default();
    let mut grid = engine();
    grid.sync(&host);

    // First press activates the origin.
    grid.key_nav(&host, NavKey::Right, Modifiers::empty());
    assert_eq!(grid.active_cell(), Some(Position::new(0, 0)));

    for _ in 0..23 {
        grid.key_nav(&host, NavKey::Right, Modifiers::empty());
    }
    assert_eq!(grid.active_cell(), Some(Position::new(0, 23)));

    // One more at the boundary without wrap: a no-op.
    grid.key_nav(&host, NavKey::Right, Modifiers::empty());
    assert_eq!(grid.active_cell(), Some(Position::new(0, 23)));

    // Plain navigation collapses the selection to the active cell.
    let selection = grid.selection().clone();
    assert_eq!(selection.cell_ranges().len(), 1);
    assert!(selection.contains(Position::new(0, 23)));
}

#[test]
fn navigation_skips_disabled_rows() {
    let host = Host {
        disabled_row: Some(1),
        ..Host::default()
    };
    let mut grid = engine();
    grid.sync(&host);

    grid.key_nav(&host, NavKey::Down, Modifiers::empty()); // activates (0,0)
    grid.key_nav(&host, NavKey::Down, Modifiers::empty());
    assert_eq!(grid.active_cell(), Some(Position::new(2, 0)));
}

#[test]
fn shift_arrow_extends_without_moving_the_active_cell() {
    let host = Host::default();
    let mut grid = engine();
    grid.sync(&host);

    grid.pointer_down(&host, Point::new(10.0, 10.0), Modifiers::empty());
    assert_eq!(grid.active_cell(), Some(Position::new(0, 0)));

    grid.key_nav(&host, NavKey::Down, Modifiers::SHIFT);
    grid.key_nav(&host, NavKey::Down, Modifiers::SHIFT);

    assert_eq!(grid.active_cell(), Some(Position::new(0, 0)));
    let ranges = grid.selection().cell_ranges().to_vec();
    assert_eq!(ranges.len(), 1);
    assert!(ranges[0].contains(Position::new(2, 0)));
}

#[test]
fn checkbox_click_emits_the_toggled_value() {
    let host = Host::default();
    let mut grid = engine();
    grid.sync(&host);

    // Column 1 is boolean; row 0 is checked. The checkbox is centered.
    grid.pointer_down(&host, Point::new(80.0 + 40.0, 18.0), Modifiers::empty());

    let events = grid.drain_events();
    let edited = events.iter().find_map(|event| match event {
        GridEvent::CellEdited { position, value } => Some((*position, value.clone())),
        _ => None,
    });
    assert_eq!(
        edited,
        Some((Position::new(0, 1), CellData::Boolean(false)))
    );
}

#[test]
fn double_click_opens_an_editor_and_escape_cancels_it() {
    let host = Host::default();
    let mut grid = engine();
    grid.sync(&host);

    grid.double_click(&host, Point::new(10.0, 10.0));
    let events = grid.drain_events();
    let anchor = events.iter().find_map(|event| match event {
        GridEvent::EditStarted { position, anchor } => Some((*position, anchor.clone())),
        _ => None,
    });
    let (position, anchor) = anchor.expect("edit should start");
    assert_eq!(position, Position::new(0, 0));
    assert_eq!(anchor.rect.width(), 80.0);

    grid.escape();
    let events = grid.drain_events();
    assert!(events
        .iter()
        .any(|event| matches!(event, GridEvent::EditCancelled { .. })));

    // The discarded edit commits nothing.
    grid.commit_edit(&host);
    assert!(!grid
        .drain_events()
        .iter()
        .any(|event| matches!(event, GridEvent::CellEdited { .. })));
}

#[test]
fn editor_commit_round_trip() {
    let host = Host::default();
    let mut grid = engine();
    grid.sync(&host);

    grid.double_click(&host, Point::new(10.0, 10.0));
    grid.set_pending_edit(CellData::Text(String::from("updated")));
    grid.key_nav(&host, NavKey::Enter, Modifiers::empty());

    let events = grid.drain_events();
    let edited = events.iter().find_map(|event| match event {
        GridEvent::CellEdited { position, value } => Some((*position, value.clone())),
        _ => None,
    });
    assert_eq!(
        edited,
        Some((Position::new(0, 0), CellData::Text(String::from("updated"))))
    );
}

#[test]
fn typing_seeds_an_editor_on_the_active_cell() {
    let host = Host::default();
    let mut grid = engine();
    grid.sync(&host);

    grid.pointer_down(&host, Point::new(10.0, 10.0), Modifiers::empty());
    grid.drain_events();
    grid.char_input(&host, 'q');

    let events = grid.drain_events();
    assert!(events
        .iter()
        .any(|event| matches!(event, GridEvent::EditStarted { .. })));
}

#[test]
fn row_and_column_header_selection() {
    let host = Host {
        frozen: 0,
        ..Host::default()
    };
    let mut grid = engine();
    grid.sync(&host);

    grid.set_selection(trellis_selection::Selection::rows([
        trellis_selection::SpanRange::new(2, 4),
    ]));
    assert!(grid.selection().is_row_selection());

    let events = grid.drain_events();
    assert!(has_selection_change(&events));

    grid.delete_key();
    let events = grid.drain_events();
    assert!(events.iter().any(|event| matches!(
        event,
        GridEvent::DeleteRequested { selection } if selection.is_row_selection()
    )));
}

#[test]
fn scenario_a_first_visible_row_through_the_engine() {
    let host = Host::default();
    let mut grid = engine();
    grid.sync(&host);
    grid.set_viewport(Size::new(800.0, 600.0));
    grid.set_scroll(Vec2::new(0.0, 3600.0));

    let window = grid.visible_window();
    // 3600 / 36 = row 100, padded by the default overscan of 5.
    assert_eq!(window.row_start, 95);
    // The column window never includes the two frozen columns.
    assert!(window.column_start >= 2);
}

#[test]
fn dataset_swap_resets_selection_and_edit() {
    let mut host = Host::default();
    let mut grid = engine();
    grid.sync(&host);

    grid.pointer_down(&host, Point::new(10.0, 10.0), Modifiers::empty());
    grid.double_click(&host, Point::new(10.0, 10.0));
    grid.drain_events();

    // The host swaps in a structurally different dataset.
    host.rows = 10;
    grid.sync(&host);

    assert_eq!(grid.active_cell(), None);
    assert!(grid.selection().is_none());
    let events = grid.drain_events();
    assert!(events
        .iter()
        .any(|event| matches!(event, GridEvent::EditCancelled { .. })));
}

#[test]
fn frame_requests_coalesce() {
    let host = Host::default();
    let mut grid = engine();
    grid.sync(&host);

    // A burst of changes produces one outstanding frame request.
    grid.key_nav(&host, NavKey::Down, Modifiers::empty());
    grid.key_nav(&host, NavKey::Down, Modifiers::empty());
    grid.set_scroll(Vec2::new(0.0, 500.0));

    let ops = grid.frame(&host, 0);
    assert!(ops.iter().any(|op| matches!(op, DrawOp::Text { .. })));

    // Clip pushes and pops stay balanced across the whole frame.
    let pushes = ops
        .iter()
        .filter(|op| matches!(op, DrawOp::PushClip { .. }))
        .count();
    let pops = ops.iter().filter(|op| matches!(op, DrawOp::PopClip)).count();
    assert_eq!(pushes, pops);
}

#[test]
fn drag_and_drop_targets_accepting_cells_only() {
    let host = Host::default();
    let mut grid = engine();
    grid.sync(&host);

    // Column 3 accepts drops; column 0 does not.
    grid.drag_over(&host, Point::new(3.0 * 80.0 + 10.0, 10.0));
    grid.drop_files(vec![
        trellis_drop::DroppedFile::new("a.png", "image/png", 10),
        trellis_drop::DroppedFile::new("big.bin", "application/octet-stream", u64::MAX),
    ]);

    let events = grid.drain_events();
    let dropped = events.iter().find_map(|event| match event {
        GridEvent::FilesDropped {
            position,
            accepted,
            rejected,
        } => Some((*position, accepted.len(), rejected.len())),
        _ => None,
    });
    assert_eq!(dropped, Some((Position::new(0, 3), 1, 1)));

    // A drag over a refusing cell never becomes a target.
    grid.drag_over(&host, Point::new(10.0, 10.0));
    grid.drop_files(vec![trellis_drop::DroppedFile::new("b.png", "image/png", 10)]);
    assert!(!grid
        .drain_events()
        .iter()
        .any(|event| matches!(event, GridEvent::FilesDropped { .. })));
}

/// A host with the default header bands (48 px row headers, 32 px column
/// headers), for the header gesture tests.
struct HeaderedHost(Host);

impl DataSource for HeaderedHost {
    fn columns(&self) -> Vec<Column> {
        self.0.columns()
    }

    fn row_count(&self) -> usize {
        self.0.row_count()
    }

    fn cell(&self, position: Position) -> Cell {
        self.0.cell(position)
    }

    fn freeze_column_count(&self) -> usize {
        self.0.frozen
    }
}

#[test]
fn header_edge_drag_resizes_the_column() {
    let host = HeaderedHost(Host::default());
    let mut grid = engine();
    grid.sync(&host);

    // Column 0's header spans x 48..128; grab its right edge.
    grid.pointer_down(&host, Point::new(127.0, 16.0), Modifiers::empty());
    grid.pointer_move(Point::new(167.0, 16.0));
    grid.pointer_up(Point::new(167.0, 16.0));

    let events = grid.drain_events();
    let resized = events.iter().find_map(|event| match event {
        GridEvent::ColumnResized {
            column,
            index,
            width,
        } => Some((column.id.clone(), *index, *width)),
        _ => None,
    });
    assert_eq!(resized, Some((String::from("c0"), 0, 120.0)));

    // A resize never doubles as a reorder.
    assert!(!events
        .iter()
        .any(|event| matches!(event, GridEvent::ColumnOrdered { .. })));
}

#[test]
fn header_drag_reorders_columns() {
    let host = HeaderedHost(Host::default());
    let mut grid = engine();
    grid.sync(&host);

    // Grab column 1's header away from its edge and menu zones.
    grid.pointer_down(&host, Point::new(48.0 + 80.0 + 30.0, 16.0), Modifiers::empty());
    grid.pointer_move(Point::new(400.0, 16.0));
    // Release over column 4's header.
    grid.pointer_up(Point::new(48.0 + 4.0 * 80.0 + 10.0, 16.0));

    let events = grid.drain_events();
    let ordered = events.iter().find_map(|event| match event {
        GridEvent::ColumnOrdered {
            dragged,
            drop_index,
        } => Some((dragged.clone(), *drop_index)),
        _ => None,
    });
    assert_eq!(ordered, Some((vec![1], 5)));

    // The grab also selected the column.
    assert!(grid.selection().column_selected(1));
}

#[test]
fn header_menu_zone_opens_the_column_menu() {
    let host = HeaderedHost(Host::default());
    let mut grid = engine();
    grid.sync(&host);

    // Column 1's header spans 128..208; the menu zone is its right side,
    // outside the 4 px resize handle.
    grid.pointer_down(&host, Point::new(198.0, 16.0), Modifiers::empty());

    let events = grid.drain_events();
    assert!(events.iter().any(|event| matches!(
        event,
        GridEvent::ColumnHeaderMenu { column: 1, .. }
    )));
}

#[test]
fn context_menu_events_carry_screen_positions() {
    let host = Host::default();
    let mut grid = engine();
    grid.sync(&host);

    grid.context_menu(Point::new(50.0, 50.0));
    let events = grid.drain_events();
    assert!(events.iter().any(|event| matches!(
        event,
        GridEvent::CellContextMenu { screen, .. } if *screen == Point::new(50.0, 50.0)
    )));
}

#[test]
fn imperative_handle_round_trips_positions() {
    let host = Host::default();
    let mut grid = engine();
    grid.sync(&host);
    grid.set_scroll(Vec2::new(0.0, 360.0));

    assert_eq!(grid.cell_at_position(10.0, 10.0), Some(Position::new(10, 0)));
    assert_eq!(grid.cell_at_position(-5.0, 10.0), None);
}
