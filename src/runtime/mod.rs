//! Cooperative timer queue for the explorer event loop
//!
//! Everything in blockscope runs on one thread. Work that must happen "later"
//! (debounced formatter passes, one-tick-later overflow measurements) is
//! recorded here as a [`Task`] with a deadline, and the event loop drains the
//! due tasks between input events and frames.
//!
//! Time is always passed in explicitly, which keeps scheduling deterministic
//! in tests.

use crate::view::{ContainerId, FieldId};
use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};

/// Handle to a scheduled task, used for cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Work item carried by the timer queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Format every hash field in the results area
    GlobalPass,
    /// Format the hash fields of one container only
    ContainerPass(ContainerId),
    /// Measure a single field after its full value has been laid out
    Measure(FieldId),
}

/// Deadline-ordered queue of pending tasks
#[derive(Debug, Default)]
pub struct TimerQueue {
    next_id: u64,
    /// Ordered by deadline, ties broken by scheduling order
    entries: BTreeMap<(Instant, TimerId), Task>,
    /// Reverse index for cancellation
    deadlines: HashMap<TimerId, Instant>,
}

impl TimerQueue {
    /// Create an empty queue
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to run `delay` after `now`
    pub fn schedule(&mut self, now: Instant, delay: Duration, task: Task) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        let deadline = now + delay;
        self.entries.insert((deadline, id), task);
        self.deadlines.insert(id, deadline);
        id
    }

    /// Cancel a pending task
    ///
    /// Returns `false` if the timer already fired or was cancelled before.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.deadlines.remove(&id) {
            Some(deadline) => self.entries.remove(&(deadline, id)).is_some(),
            None => false,
        }
    }

    /// Whether the given timer is still pending
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.deadlines.contains_key(&id)
    }

    /// Remove and return every task whose deadline is at or before `now`
    ///
    /// Tasks scheduled while the returned batch is being processed are not
    /// part of it, even with a zero delay; they run on the next drain.
    pub fn take_due(&mut self, now: Instant) -> Vec<(TimerId, Task)> {
        let mut due = Vec::new();

        while let Some(entry) = self.entries.first_entry() {
            let (deadline, id) = *entry.key();
            if deadline > now {
                break;
            }
            let task = entry.remove();
            self.deadlines.remove(&id);
            due.push((id, task));
        }

        due
    }

    /// Earliest pending deadline, if any
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Number of pending tasks
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no task is pending
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
