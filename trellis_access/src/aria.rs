// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! ARIA attribute synthesis for grid, row, cell, and header roles.
//!
//! Each attribute set renders to `(name, value)` pairs the host mirrors onto
//! its shadow nodes. ARIA indices are 1-based; the conversion from the
//! engine's 0-based indices happens here, in one place.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use trellis_selection::Selection;
use trellis_viewport::Position;

/// One rendered attribute.
pub type Attr = (&'static str, String);

/// Attributes for the grid container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridAttrs {
    /// Total row count (not just the realized window).
    pub row_count: usize,
    /// Total column count.
    pub column_count: usize,
    /// Whether multi-selection gestures are enabled.
    pub multiselectable: bool,
}

impl GridAttrs {
    /// Renders the attribute pairs.
    #[must_use]
    pub fn attributes(&self) -> Vec<Attr> {
        let mut out = Vec::with_capacity(4);
        out.push(("role", String::from("grid")));
        out.push(("aria-rowcount", self.row_count.to_string()));
        out.push(("aria-colcount", self.column_count.to_string()));
        out.push((
            "aria-multiselectable",
            String::from(if self.multiselectable { "true" } else { "false" }),
        ));
        out
    }
}

/// Attributes for a row node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RowAttrs {
    /// 0-based row index.
    pub row: usize,
    /// Whether the whole row is selected.
    pub selected: bool,
}

impl RowAttrs {
    /// Builds row attributes from the current selection.
    #[must_use]
    pub fn new(row: usize, selection: &Selection) -> Self {
        Self {
            row,
            selected: selection.row_selected(row),
        }
    }

    /// Renders the attribute pairs.
    #[must_use]
    pub fn attributes(&self) -> Vec<Attr> {
        let mut out = Vec::with_capacity(3);
        out.push(("role", String::from("row")));
        out.push(("aria-rowindex", (self.row + 1).to_string()));
        if self.selected {
            out.push(("aria-selected", String::from("true")));
        }
        out
    }
}

/// Attributes for a cell node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CellAttrs {
    /// Cell position.
    pub position: Position,
    /// Whether the cell is inside the current selection.
    pub selected: bool,
    /// Whether the cell is read-only (computed values, disabled cells).
    pub readonly: bool,
}

impl CellAttrs {
    /// Builds cell attributes from the current selection.
    #[must_use]
    pub fn new(position: Position, selection: &Selection, readonly: bool) -> Self {
        Self {
            position,
            selected: selection.contains(position),
            readonly,
        }
    }

    /// Renders the attribute pairs.
    #[must_use]
    pub fn attributes(&self) -> Vec<Attr> {
        let mut out = Vec::with_capacity(4);
        out.push(("role", String::from("gridcell")));
        out.push(("aria-colindex", (self.position.column + 1).to_string()));
        out.push((
            "aria-selected",
            String::from(if self.selected { "true" } else { "false" }),
        ));
        if self.readonly {
            out.push(("aria-readonly", String::from("true")));
        }
        out
    }
}

/// Attributes for a column header node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HeaderAttrs {
    /// 0-based column index.
    pub column: usize,
    /// Whether the whole column is selected.
    pub selected: bool,
}

impl HeaderAttrs {
    /// Builds header attributes from the current selection.
    #[must_use]
    pub fn new(column: usize, selection: &Selection) -> Self {
        Self {
            column,
            selected: selection.column_selected(column),
        }
    }

    /// Renders the attribute pairs.
    #[must_use]
    pub fn attributes(&self) -> Vec<Attr> {
        let mut out = Vec::with_capacity(3);
        out.push(("role", String::from("columnheader")));
        out.push(("aria-colindex", (self.column + 1).to_string()));
        if self.selected {
            out.push(("aria-selected", String::from("true")));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use trellis_selection::{Selection, SpanRange};
    use trellis_viewport::Position;

    use super::{CellAttrs, GridAttrs, HeaderAttrs, RowAttrs};

    fn value<'a>(attrs: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
        attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn grid_attributes_carry_totals() {
        let attrs = GridAttrs {
            row_count: 500,
            column_count: 24,
            multiselectable: true,
        }
        .attributes();
        assert_eq!(value(&attrs, "role"), Some("grid"));
        assert_eq!(value(&attrs, "aria-rowcount"), Some("500"));
        assert_eq!(value(&attrs, "aria-colcount"), Some("24"));
        assert_eq!(value(&attrs, "aria-multiselectable"), Some("true"));
    }

    #[test]
    fn indices_are_one_based() {
        let selection = Selection::None;
        let row = RowAttrs::new(0, &selection).attributes();
        assert_eq!(value(&row, "aria-rowindex"), Some("1"));

        let cell = CellAttrs::new(Position::new(0, 0), &selection, false).attributes();
        assert_eq!(value(&cell, "aria-colindex"), Some("1"));
    }

    #[test]
    fn selection_state_is_reflected() {
        let selection = Selection::rows([SpanRange::new(2, 4)]);
        let row = RowAttrs::new(3, &selection).attributes();
        assert_eq!(value(&row, "aria-selected"), Some("true"));

        let cell = CellAttrs::new(Position::new(3, 0), &selection, false).attributes();
        assert_eq!(value(&cell, "aria-selected"), Some("true"));

        let other = CellAttrs::new(Position::new(9, 0), &selection, false).attributes();
        assert_eq!(value(&other, "aria-selected"), Some("false"));
    }

    #[test]
    fn readonly_cells_say_so() {
        let attrs = CellAttrs::new(Position::new(0, 0), &Selection::None, true).attributes();
        assert_eq!(value(&attrs, "aria-readonly"), Some("true"));
    }

    #[test]
    fn header_reflects_column_selection() {
        let selection = Selection::columns([SpanRange::new(1, 1)]);
        let attrs = HeaderAttrs::new(1, &selection).attributes();
        assert_eq!(value(&attrs, "role"), Some("columnheader"));
        assert_eq!(value(&attrs, "aria-selected"), Some("true"));
    }
}
