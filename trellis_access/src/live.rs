// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The single hidden live region.

use alloc::format;
use alloc::string::String;

use trellis_timing::TimerQueue;

/// How urgently a screen reader should speak an announcement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Politeness {
    /// Spoken when convenient (`aria-live="polite"`).
    Polite,
    /// Interrupts current speech (`aria-live="assertive"`).
    Assertive,
}

/// One announcement in the live region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Announcement {
    /// The text to speak.
    pub message: String,
    /// Urgency.
    pub politeness: Politeness,
}

/// The single announcement channel for one grid.
///
/// New announcements replace the current one — screen readers speak the
/// latest state, not a backlog. Announcements are sticky by default; a
/// tick-based timeout can auto-clear them. A newer announcement always
/// invalidates an older announcement's pending clear.
#[derive(Clone, Debug, Default)]
pub struct LiveRegion {
    current: Option<Announcement>,
    clears: TimerQueue<u64>,
    generation: u64,
}

impl LiveRegion {
    /// Creates an empty live region.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The announcement currently held, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Announcement> {
        self.current.as_ref()
    }

    /// Replaces the current announcement.
    pub fn announce(&mut self, message: impl Into<String>, politeness: Politeness) {
        self.generation = self.generation.wrapping_add(1);
        self.current = Some(Announcement {
            message: message.into(),
            politeness,
        });
    }

    /// Replaces the current announcement and schedules an auto-clear after
    /// `timeout_ticks`.
    pub fn announce_with_timeout(
        &mut self,
        message: impl Into<String>,
        politeness: Politeness,
        timeout_ticks: u64,
    ) {
        self.announce(message, politeness);
        self.clears.schedule_after(timeout_ticks, self.generation);
    }

    /// Announces a committed cell value change.
    pub fn announce_value_change(&mut self, display: &str) {
        if display.is_empty() {
            self.announce("cell cleared", Politeness::Polite);
        } else {
            self.announce(format!("cell value {display}"), Politeness::Polite);
        }
    }

    /// Announces the selection size, e.g. "selected 3 of 500".
    pub fn announce_selection(&mut self, selected: usize, total: usize) {
        self.announce(format!("selected {selected} of {total}"), Politeness::Polite);
    }

    /// Announces entering or leaving edit mode (assertive).
    pub fn announce_edit_mode(&mut self, editing: bool) {
        let message = if editing {
            "entered edit mode"
        } else {
            "left edit mode"
        };
        self.announce(message, Politeness::Assertive);
    }

    /// Announces an error.
    ///
    /// Errors are assertive and sticky: they stay until replaced, unless a
    /// timeout is given.
    pub fn announce_error(&mut self, message: impl Into<String>, timeout_ticks: Option<u64>) {
        match timeout_ticks {
            Some(ticks) => self.announce_with_timeout(message, Politeness::Assertive, ticks),
            None => self.announce(message, Politeness::Assertive),
        }
    }

    /// Advances the clear clock; due auto-clears drop the announcement they
    /// were scheduled for.
    pub fn advance_to(&mut self, now: u64) {
        for generation in self.clears.advance_to(now) {
            if generation == self.generation {
                self.current = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LiveRegion, Politeness};

    #[test]
    fn announcements_replace_each_other() {
        let mut region = LiveRegion::new();
        region.announce_selection(3, 500);
        assert_eq!(region.current().unwrap().message, "selected 3 of 500");

        region.announce_value_change("42");
        assert_eq!(region.current().unwrap().message, "cell value 42");
        assert_eq!(region.current().unwrap().politeness, Politeness::Polite);
    }

    #[test]
    fn edit_mode_is_assertive() {
        let mut region = LiveRegion::new();
        region.announce_edit_mode(true);
        let current = region.current().unwrap();
        assert_eq!(current.politeness, Politeness::Assertive);
        assert_eq!(current.message, "entered edit mode");
    }

    #[test]
    fn errors_are_sticky_without_timeout() {
        let mut region = LiveRegion::new();
        region.announce_error("save failed", None);
        region.advance_to(1_000_000);
        assert_eq!(region.current().unwrap().message, "save failed");
    }

    #[test]
    fn errors_with_timeout_auto_clear() {
        let mut region = LiveRegion::new();
        region.announce_error("save failed", Some(50));
        region.advance_to(49);
        assert!(region.current().is_some());
        region.advance_to(50);
        assert!(region.current().is_none());
    }

    #[test]
    fn newer_announcements_survive_stale_clears() {
        let mut region = LiveRegion::new();
        region.announce_error("transient", Some(10));
        // A newer announcement arrives before the clear fires.
        region.announce_selection(1, 10);
        region.advance_to(10);
        // The stale clear must not wipe the newer announcement.
        assert_eq!(region.current().unwrap().message, "selected 1 of 10");
    }

    #[test]
    fn empty_value_announces_a_clear() {
        let mut region = LiveRegion::new();
        region.announce_value_change("");
        assert_eq!(region.current().unwrap().message, "cell cleared");
    }
}
