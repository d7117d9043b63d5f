//! Overflow-aware hash display
//!
//! Hash fields show the full 64-character value when it fits into the box
//! the field was drawn into, and an abbreviated `first10...last10` form when
//! it does not. [`HashResizer`] owns the scheduling: a debounced global pass
//! after load or terminal resize, and independent container-scoped passes
//! after a container is rendered.
//!
//! A pass always resets a field to its full value before measuring, because
//! overflow cannot be judged against text that is already truncated. The
//! full value is remembered on the field the first time it is seen, so a
//! truncated display is never mistaken for a new value.

use crate::runtime::{Task, TimerId, TimerQueue};
use crate::view::{ContainerId, FieldId, ResultsView};
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Length of a hex-encoded 32-byte hash
pub const HASH_LENGTH: usize = 64;

/// Characters kept from the start of a truncated hash
const HEAD_LENGTH: usize = 10;

/// Offset of the kept tail of a truncated hash
const TAIL_START: usize = 54;

/// Default settle delay between the last request and the pass
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(200);

/// Abbreviate a full hash to `first10...last10`
///
/// Inputs of any other length are returned unchanged.
#[must_use]
pub fn truncate_hash(hash: &str) -> String {
    if hash.chars().count() != HASH_LENGTH {
        return hash.to_string();
    }

    let head: String = hash.chars().take(HEAD_LENGTH).collect();
    let tail: String = hash.chars().skip(TAIL_START).collect();
    format!("{head}...{tail}")
}

/// Schedules and runs hash formatting passes
#[derive(Debug)]
pub struct HashResizer {
    settle_delay: Duration,
    /// Pending debounced global pass
    global: Option<TimerId>,
    /// Pending container passes and measurements
    owned: HashSet<TimerId>,
}

impl Default for HashResizer {
    fn default() -> Self {
        Self::new(DEFAULT_SETTLE_DELAY)
    }
}

impl HashResizer {
    /// Create a resizer waiting `settle_delay` before each pass
    #[must_use]
    pub fn new(settle_delay: Duration) -> Self {
        Self {
            settle_delay,
            global: None,
            owned: HashSet::new(),
        }
    }

    /// Request a formatting pass
    ///
    /// Without a scope, any pending global pass is cancelled and a new one is
    /// scheduled, so a burst of requests results in a single pass timed from
    /// the last request. With a scope, an independent pass over that
    /// container is scheduled and the global timer is left alone.
    pub fn request(
        &mut self,
        timers: &mut TimerQueue,
        now: Instant,
        scope: Option<ContainerId>,
    ) -> TimerId {
        if let Some(container) = scope {
            let id = timers.schedule(now, self.settle_delay, Task::ContainerPass(container));
            self.owned.insert(id);
            tracing::debug!(?container, "container hash pass scheduled");
            return id;
        }

        if let Some(previous) = self.global.take() {
            timers.cancel(previous);
        }
        let id = timers.schedule(now, self.settle_delay, Task::GlobalPass);
        self.global = Some(id);
        tracing::debug!("global hash pass scheduled");
        id
    }

    /// Whether a global pass is waiting to run
    #[must_use]
    pub const fn has_pending_global(&self) -> bool {
        self.global.is_some()
    }

    /// Run a task popped from the timer queue
    pub fn handle(
        &mut self,
        id: TimerId,
        task: Task,
        view: &mut ResultsView,
        timers: &mut TimerQueue,
        now: Instant,
    ) {
        match task {
            Task::GlobalPass => {
                if self.global == Some(id) {
                    self.global = None;
                }
                self.run_pass(view, timers, now, None);
            }
            Task::ContainerPass(container) => {
                self.owned.remove(&id);
                self.run_pass(view, timers, now, Some(container));
            }
            Task::Measure(field) => {
                self.owned.remove(&id);
                Self::measure(view, field);
            }
        }
    }

    /// Reset every hash field in scope to its full value and schedule its
    /// measurement for the next tick
    ///
    /// Fields whose value is not a full hash are left untouched. Returns the
    /// number of fields reset.
    pub fn run_pass(
        &mut self,
        view: &mut ResultsView,
        timers: &mut TimerQueue,
        now: Instant,
        scope: Option<ContainerId>,
    ) -> usize {
        let mut formatted = 0;

        for field_id in view.hash_fields(scope) {
            let Some(field) = view.field_mut(field_id) else {
                continue;
            };

            let original = field
                .cached_hash()
                .filter(|cached| !cached.is_empty())
                .or_else(|| field.value())
                .unwrap_or_default()
                .to_string();

            // Not a hash
            if original.chars().count() != HASH_LENGTH {
                continue;
            }

            field.cache_hash(original.clone());
            field.set_value(original);

            let timer = timers.schedule(now, Duration::ZERO, Task::Measure(field_id));
            self.owned.insert(timer);
            formatted += 1;
        }

        tracing::debug!(?scope, formatted, "hash pass finished");
        formatted
    }

    /// Truncate a field if its full value overflows its box
    ///
    /// Returns `true` if the field now shows the truncated form. A field that
    /// disappeared since the measurement was scheduled is ignored.
    pub fn measure(view: &mut ResultsView, field_id: FieldId) -> bool {
        let Some(field) = view.field_mut(field_id) else {
            tracing::debug!(?field_id, "measured field no longer exists");
            return false;
        };
        let Some(original) = field.cached_hash().map(ToOwned::to_owned) else {
            return false;
        };

        if field.is_overflowing() {
            field.set_value(truncate_hash(&original));
            true
        } else {
            false
        }
    }

    /// Cancel every pending pass and measurement
    pub fn dispose(&mut self, timers: &mut TimerQueue) {
        if let Some(global) = self.global.take() {
            timers.cancel(global);
        }
        for id in self.owned.drain() {
            timers.cancel(id);
        }
    }
}
