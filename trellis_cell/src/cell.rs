// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed cell union and its variant payloads.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use peniko::Color;

/// Type tag for the closed cell variant set.
///
/// Carried on every [`Cell`] value and used for renderer dispatch. The set
/// is closed: adding a variant means touching every exhaustive match, which
/// is the point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Plain or wrapped text.
    Text,
    /// Numeric value with a formatted display form.
    Number,
    /// Checkbox.
    Boolean,
    /// Date/time value with a formatted display form.
    Date,
    /// Single-choice select.
    Select,
    /// Multi-choice select.
    MultiSelect,
    /// Star rating.
    Rating,
    /// Links to other records.
    Link,
    /// Collaborator chips.
    User,
    /// File attachments.
    Attachment,
    /// An action button.
    Button,
    /// Computed value (formula, lookup, rollup); read-only.
    Computed,
    /// Placeholder while data is being fetched.
    Loading,
}

/// One choice of a select cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Choice {
    /// Stable choice identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional chip color.
    pub color: Option<Color>,
}

/// Select-cell options: the choice list plus lookup and cardinality.
///
/// Choices are kept sorted by name; `choice_map` indexes them by id so
/// renderers can resolve chosen ids without scanning.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectOptions {
    choices: Vec<Choice>,
    choice_map: HashMap<String, usize>,
    /// `true` for multi-select cells.
    pub is_multiple: bool,
}

impl SelectOptions {
    /// Builds options from a choice list, sorting by name and indexing by id.
    #[must_use]
    pub fn new(mut choices: Vec<Choice>, is_multiple: bool) -> Self {
        choices.sort_by(|a, b| a.name.cmp(&b.name));
        let choice_map = choices
            .iter()
            .enumerate()
            .map(|(index, choice)| (choice.id.clone(), index))
            .collect();
        Self {
            choices,
            choice_map,
            is_multiple,
        }
    }

    /// The choices, sorted by name.
    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Resolves a choice by id.
    #[must_use]
    pub fn choice(&self, id: &str) -> Option<&Choice> {
        self.choice_map.get(id).map(|&index| &self.choices[index])
    }
}

/// A link to another record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkItem {
    /// Linked record identifier.
    pub id: String,
    /// Title shown in the cell.
    pub title: String,
}

/// A collaborator reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserItem {
    /// User identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// A file attachment reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttachmentItem {
    /// Attachment identifier.
    pub id: String,
    /// File name.
    pub name: String,
    /// MIME type, e.g. `image/png`.
    pub mime: String,
}

/// What a computed cell was computed by.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ComputedSource {
    /// A formula over the record.
    Formula,
    /// A lookup through a link field.
    Lookup,
    /// An aggregation over linked records.
    Rollup,
}

/// A typed, renderable unit of data at (row, column).
///
/// Every variant carries its underlying data and the display form renderers
/// need. Values are supplied by the host's cell accessor on demand; the
/// engine never stores them.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    /// Text, optionally wrapped across lines.
    Text {
        /// Underlying value.
        data: String,
        /// Display form (usually the same).
        display: String,
        /// Whether the renderer may wrap onto multiple lines.
        wrap: bool,
    },
    /// A number; `None` is the unset state.
    Number {
        /// Underlying value. Unset is `None`, never a sentinel zero.
        data: Option<f64>,
        /// Formatted display form.
        display: String,
    },
    /// A checkbox.
    Boolean {
        /// Checked state.
        data: bool,
    },
    /// A date; `None` is the unset state.
    Date {
        /// Milliseconds since the Unix epoch.
        data: Option<i64>,
        /// Formatted display form.
        display: String,
    },
    /// A select over a closed choice set.
    Select {
        /// Chosen choice ids.
        chosen: Vec<String>,
        /// Choice list, lookup index, and cardinality.
        options: SelectOptions,
    },
    /// A star rating; `None` is the unset state.
    Rating {
        /// Stars set, `1..=max`.
        data: Option<u8>,
        /// Number of stars drawn.
        max: u8,
    },
    /// Links to other records.
    Link {
        /// Linked records, in display order.
        links: Vec<LinkItem>,
    },
    /// Collaborators.
    User {
        /// Users, in display order.
        users: Vec<UserItem>,
    },
    /// File attachments.
    Attachment {
        /// Attachments, in display order.
        items: Vec<AttachmentItem>,
    },
    /// An action button.
    Button {
        /// Button label.
        label: String,
        /// Host-defined action identifier delivered on press.
        action: String,
    },
    /// A computed, read-only value presented as another variant.
    Computed {
        /// What produced the value.
        source: ComputedSource,
        /// The display variant; never itself `Computed`.
        display: Box<Cell>,
    },
    /// Placeholder while the value loads.
    Loading,
}

impl Cell {
    /// A plain text cell.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        let data: String = value.into();
        Self::Text {
            display: data.clone(),
            data,
            wrap: false,
        }
    }

    /// A number cell with a formatted display form.
    #[must_use]
    pub fn number(data: Option<f64>, display: impl Into<String>) -> Self {
        Self::Number {
            data,
            display: display.into(),
        }
    }

    /// A checkbox cell.
    #[must_use]
    pub const fn boolean(data: bool) -> Self {
        Self::Boolean { data }
    }

    /// A rating cell with the conventional five stars.
    #[must_use]
    pub const fn rating(data: Option<u8>) -> Self {
        Self::Rating { data, max: 5 }
    }

    /// The variant tag used for renderer dispatch.
    #[must_use]
    pub fn kind(&self) -> CellKind {
        match self {
            Self::Text { .. } => CellKind::Text,
            Self::Number { .. } => CellKind::Number,
            Self::Boolean { .. } => CellKind::Boolean,
            Self::Date { .. } => CellKind::Date,
            Self::Select { options, .. } => {
                if options.is_multiple {
                    CellKind::MultiSelect
                } else {
                    CellKind::Select
                }
            }
            Self::Rating { .. } => CellKind::Rating,
            Self::Link { .. } => CellKind::Link,
            Self::User { .. } => CellKind::User,
            Self::Attachment { .. } => CellKind::Attachment,
            Self::Button { .. } => CellKind::Button,
            Self::Computed { .. } => CellKind::Computed,
            Self::Loading => CellKind::Loading,
        }
    }

    /// Returns `true` if the cell can enter edit mode.
    ///
    /// Computed values, buttons, and loading placeholders are not editable;
    /// host-level readonly predicates further restrict this at the engine.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        !matches!(
            self,
            Self::Computed { .. } | Self::Button { .. } | Self::Loading
        )
    }

    /// The display text of scalar-ish variants, used by copy and
    /// accessibility announcements.
    #[must_use]
    pub fn display_text(&self) -> String {
        match self {
            Self::Text { display, .. }
            | Self::Number { display, .. }
            | Self::Date { display, .. } => display.clone(),
            Self::Boolean { data } => String::from(if *data { "checked" } else { "unchecked" }),
            Self::Select { chosen, options } => {
                let mut out = String::new();
                for id in chosen {
                    let name = options.choice(id).map_or(id.as_str(), |c| c.name.as_str());
                    if !out.is_empty() {
                        out.push_str(", ");
                    }
                    out.push_str(name);
                }
                out
            }
            Self::Rating { data, .. } => {
                data.map_or_else(String::new, |stars| {
                    let mut out = String::new();
                    for _ in 0..stars {
                        out.push('★');
                    }
                    out
                })
            }
            Self::Link { links } => {
                let mut out = String::new();
                for link in links {
                    if !out.is_empty() {
                        out.push_str(", ");
                    }
                    out.push_str(&link.title);
                }
                out
            }
            Self::User { users } => {
                let mut out = String::new();
                for user in users {
                    if !out.is_empty() {
                        out.push_str(", ");
                    }
                    out.push_str(&user.name);
                }
                out
            }
            Self::Attachment { items } => {
                let mut out = String::new();
                for item in items {
                    if !out.is_empty() {
                        out.push_str(", ");
                    }
                    out.push_str(&item.name);
                }
                out
            }
            Self::Button { label, .. } => label.clone(),
            Self::Computed { display, .. } => display.display_text(),
            Self::Loading => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;

    use super::{Cell, CellKind, Choice, ComputedSource, SelectOptions};

    fn select_options(multiple: bool) -> SelectOptions {
        SelectOptions::new(
            vec![
                Choice {
                    id: String::from("b"),
                    name: String::from("Beta"),
                    color: None,
                },
                Choice {
                    id: String::from("a"),
                    name: String::from("Alpha"),
                    color: None,
                },
            ],
            multiple,
        )
    }

    #[test]
    fn select_options_sort_and_index() {
        let options = select_options(false);
        assert_eq!(options.choices()[0].name, "Alpha");
        assert_eq!(options.choice("b").unwrap().name, "Beta");
        assert!(options.choice("missing").is_none());
    }

    #[test]
    fn kind_distinguishes_select_cardinality() {
        let single = Cell::Select {
            chosen: vec![],
            options: select_options(false),
        };
        let multi = Cell::Select {
            chosen: vec![],
            options: select_options(true),
        };
        assert_eq!(single.kind(), CellKind::Select);
        assert_eq!(multi.kind(), CellKind::MultiSelect);
    }

    #[test]
    fn editability_excludes_computed_button_loading() {
        assert!(Cell::text("x").is_editable());
        assert!(Cell::rating(None).is_editable());
        assert!(!Cell::Loading.is_editable());
        assert!(
            !Cell::Button {
                label: String::from("Run"),
                action: String::from("run"),
            }
            .is_editable()
        );
        assert!(
            !Cell::Computed {
                source: ComputedSource::Formula,
                display: Box::new(Cell::text("42")),
            }
            .is_editable()
        );
    }

    #[test]
    fn display_text_resolves_choice_names() {
        let cell = Cell::Select {
            chosen: vec![String::from("a"), String::from("missing")],
            options: select_options(true),
        };
        assert_eq!(cell.display_text(), "Alpha, missing");
    }

    #[test]
    fn computed_display_text_delegates() {
        let cell = Cell::Computed {
            source: ComputedSource::Rollup,
            display: Box::new(Cell::number(Some(7.0), "7")),
        };
        assert_eq!(cell.display_text(), "7");
    }
}
