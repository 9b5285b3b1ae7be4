// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_timing --heading-base-level=0

//! Trellis Timing: host-agnostic timer queue primitives.
//!
//! Trellis crates never read a wall clock. Anything time-like — live-region
//! auto-clear, upload deadlines — is expressed in **host ticks**: an opaque,
//! monotonically non-decreasing `u64` the host advances at whatever cadence
//! it likes (frames, milliseconds, test steps).
//!
//! [`TimerQueue`] holds payloads scheduled against tick deadlines. The host
//! drives it from its event loop:
//!
//! 1. Schedule work with [`TimerQueue::schedule`], keeping the returned
//!    [`TimerId`] if the work may be cancelled.
//! 2. On each loop iteration, call [`TimerQueue::advance_to`] with the
//!    current tick and act on the expired payloads, which come back in
//!    deadline order (insertion order within a tick).
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_timing::TimerQueue;
//!
//! let mut queue: TimerQueue<&str> = TimerQueue::new();
//! queue.schedule(10, "clear announcement");
//! let upload = queue.schedule(5, "upload timed out");
//!
//! // The upload resolved in time: cancel its deadline.
//! assert_eq!(queue.cancel(upload), Some("upload timed out"));
//!
//! // Ticks advance; the announcement clear comes due.
//! assert_eq!(queue.advance_to(10), vec!["clear announcement"]);
//! assert!(queue.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// Handle for a scheduled timer, used for cancellation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Clone, Debug)]
struct Entry<T> {
    id: u64,
    deadline: u64,
    payload: T,
}

/// A queue of payloads scheduled against tick deadlines.
///
/// The queue never inspects real time; [`TimerQueue::advance_to`] is the
/// only way ticks move forward. Advancing is monotonic: a smaller tick than
/// the current one is treated as the current one.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
    now: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue at tick zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            now: 0,
        }
    }

    /// The current tick, as last reported to [`TimerQueue::advance_to`].
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Returns `true` when nothing is scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of scheduled entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Schedules `payload` to come due at `deadline`.
    ///
    /// A deadline at or before the current tick fires on the next
    /// [`TimerQueue::advance_to`] call.
    pub fn schedule(&mut self, deadline: u64, payload: T) -> TimerId {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push(Entry {
            id,
            deadline,
            payload,
        });
        TimerId(id)
    }

    /// Schedules `payload` to come due `delay` ticks from now.
    pub fn schedule_after(&mut self, delay: u64, payload: T) -> TimerId {
        let deadline = self.now.saturating_add(delay);
        self.schedule(deadline, payload)
    }

    /// Cancels a scheduled timer, returning its payload if it had not fired.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let index = self.entries.iter().position(|entry| entry.id == id.0)?;
        Some(self.entries.remove(index).payload)
    }

    /// Advances the queue to `now` and returns the expired payloads.
    ///
    /// Payloads come back ordered by deadline, then by insertion order for
    /// equal deadlines.
    pub fn advance_to(&mut self, now: u64) -> Vec<T> {
        self.now = self.now.max(now);
        let now = self.now;

        let mut due: Vec<Entry<T>> = Vec::new();
        let mut index = 0;
        while index < self.entries.len() {
            if self.entries[index].deadline <= now {
                due.push(self.entries.remove(index));
            } else {
                index += 1;
            }
        }
        due.sort_by_key(|entry| (entry.deadline, entry.id));
        due.into_iter().map(|entry| entry.payload).collect()
    }
}
