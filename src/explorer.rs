//! Headless explorer core
//!
//! [`Explorer`] wires the search controller, the results view, the hash
//! resizer and the timer queue together. The terminal front end translates
//! input into [`Command`]s and calls [`Explorer::pump`] once per loop
//! iteration; tests drive the same type directly with synthetic time.

use crate::api::{SearchCompletion, SearchDispatcher};
use crate::format::HashResizer;
use crate::runtime::TimerQueue;
use crate::search::{DispatchOutcome, Key, LaunchParams, Propagation, SearchController};
use crate::view::ExplorerView;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};

/// User intent, independent of the input device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Focus the search input
    Focus,
    /// Leave the search input
    Blur,
    /// Key for the search input
    Key(Key),
    /// History back
    Back,
    /// History forward
    Forward,
    /// Scroll the results up one row
    ScrollUp,
    /// Scroll the results down one row
    ScrollDown,
    /// The terminal was resized
    Resize,
    /// Leave the explorer
    Quit,
}

/// Whether the event loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Explorer state shared by the terminal UI and tests
#[derive(Debug)]
pub struct Explorer<D> {
    controller: SearchController<D>,
    view: ExplorerView,
    resizer: HashResizer,
    timers: TimerQueue,
    completions: Receiver<SearchCompletion>,
    last_outcome: Option<DispatchOutcome>,
    disconnected: bool,
}

impl<D: SearchDispatcher> Explorer<D> {
    /// Create an explorer reading completions from `completions`
    #[must_use]
    pub fn new(
        controller: SearchController<D>,
        completions: Receiver<SearchCompletion>,
        settle_delay: Duration,
    ) -> Self {
        Self {
            controller,
            view: ExplorerView::new(),
            resizer: HashResizer::new(settle_delay),
            timers: TimerQueue::new(),
            completions,
            last_outcome: None,
            disconnected: false,
        }
    }

    /// Search controller
    #[must_use]
    pub const fn controller(&self) -> &SearchController<D> {
        &self.controller
    }

    /// Results and history
    #[must_use]
    pub const fn view(&self) -> &ExplorerView {
        &self.view
    }

    /// Results and history, mutably (the renderer records field boxes here)
    pub const fn view_mut(&mut self) -> &mut ExplorerView {
        &mut self.view
    }

    /// Pending timers
    #[must_use]
    pub const fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    /// Hash resizer
    #[must_use]
    pub const fn resizer(&self) -> &HashResizer {
        &self.resizer
    }

    /// Outcome of the most recent search completion
    #[must_use]
    pub const fn last_outcome(&self) -> Option<&DispatchOutcome> {
        self.last_outcome.as_ref()
    }

    /// Earliest pending timer deadline
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Page load: submit the launch search and schedule the initial pass
    pub fn load(&mut self, params: &LaunchParams, now: Instant) {
        self.controller.on_load(params);
        self.resizer.request(&mut self.timers, now, None);
    }

    /// Apply a user command
    pub fn apply(&mut self, command: Command, now: Instant) -> Flow {
        match command {
            Command::Focus => self.controller.on_focus(),
            Command::Blur => self.controller.on_blur(),
            Command::Key(key) => {
                if !self.controller.is_focused() {
                    return Flow::Continue;
                }
                if self.controller.on_key_press(key) == Propagation::Continue {
                    self.controller.apply_key(key);
                }
                self.controller.on_key_up();
            }
            Command::Back => {
                if let Some(state) = self.view.history_mut().back().cloned() {
                    self.controller
                        .on_history_pop(Some(&state), self.view.results_mut());
                }
            }
            Command::Forward => {
                if let Some(state) = self.view.history_mut().forward().cloned() {
                    self.controller
                        .on_history_pop(Some(&state), self.view.results_mut());
                }
            }
            Command::ScrollUp => {
                let results = self.view.results_mut();
                results.scroll = results.scroll.saturating_sub(1);
            }
            Command::ScrollDown => self.view.results_mut().scroll += 1,
            Command::Resize => {
                self.resizer.request(&mut self.timers, now, None);
            }
            Command::Quit => {
                self.resizer.dispose(&mut self.timers);
                return Flow::Exit;
            }
        }
        Flow::Continue
    }

    /// Deliver finished searches and run due timers
    ///
    /// Every container rendered by a completion gets its own formatting
    /// pass. Returns `true` if anything changed.
    pub fn pump(&mut self, now: Instant) -> bool {
        let mut changed = false;

        loop {
            match self.completions.try_recv() {
                Ok(completion) => {
                    let outcome = self.controller.on_response(completion, &mut self.view);
                    self.last_outcome = Some(outcome);
                    changed = true;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if !self.disconnected {
                        tracing::warn!("search completion channel closed");
                        self.disconnected = true;
                    }
                    break;
                }
            }
        }

        for container in self.view.take_rendered() {
            self.resizer.request(&mut self.timers, now, Some(container));
        }

        for (id, task) in self.timers.take_due(now) {
            self.resizer
                .handle(id, task, self.view.results_mut(), &mut self.timers, now);
            changed = true;
        }

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ObjectType, RequestId, SearchResult};
    use crate::testing::{RecordingDispatcher, sample_hash};
    use crate::view::{FieldBox, HashClass};
    use serde_json::json;
    use std::sync::mpsc::{self, Sender};

    const DELAY: Duration = Duration::from_millis(200);

    fn explorer() -> (Explorer<RecordingDispatcher>, Sender<SearchCompletion>) {
        let (tx, rx) = mpsc::channel();
        let controller = SearchController::new(RecordingDispatcher::default());
        (Explorer::new(controller, rx, DELAY), tx)
    }

    fn type_query(explorer: &mut Explorer<RecordingDispatcher>, text: &str, now: Instant) {
        explorer.apply(Command::Focus, now);
        for c in text.chars() {
            explorer.apply(Command::Key(Key::Char(c)), now);
        }
        explorer.apply(Command::Key(Key::Enter), now);
    }

    fn block(hash: &str) -> SearchCompletion {
        SearchCompletion {
            request_id: RequestId(1),
            result: SearchResult::success(ObjectType::Block, json!({ "hash": hash })),
        }
    }

    /// Record a narrow box for every field, as a draw would
    fn draw_narrow(explorer: &mut Explorer<RecordingDispatcher>) {
        for container in explorer.view_mut().results_mut().containers_mut() {
            for field in &mut container.fields {
                field.set_bounds(FieldBox::new(30, 1));
            }
        }
    }

    #[test]
    fn test_keys_ignored_without_focus() {
        let (mut explorer, _tx) = explorer();
        let now = Instant::now();

        explorer.apply(Command::Key(Key::Char('a')), now);
        assert!(explorer.controller().input().is_empty());
    }

    #[test]
    fn test_submit_dispatches_query() {
        let (mut explorer, _tx) = explorer();
        let now = Instant::now();

        type_query(&mut explorer, "650000", now);

        let requests = explorer.controller().dispatcher().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].query, "650000");
        assert!(explorer.controller().is_loading());
    }

    #[test]
    fn test_load_schedules_global_pass() {
        let (mut explorer, _tx) = explorer();
        let now = Instant::now();

        explorer.load(&LaunchParams::default(), now);
        assert!(explorer.resizer().has_pending_global());
        assert_eq!(explorer.next_deadline(), Some(now + DELAY));
    }

    #[test]
    fn test_completion_renders_and_truncates() {
        let (mut explorer, tx) = explorer();
        let start = Instant::now();
        let hash = sample_hash(9);

        type_query(&mut explorer, &hash, start);
        tx.send(block(&hash)).unwrap();

        assert!(explorer.pump(start));
        assert_eq!(
            explorer.last_outcome(),
            Some(&DispatchOutcome::Rendered(ObjectType::Block))
        );
        draw_narrow(&mut explorer);

        // Container pass after the settle delay, measurement one tick later
        let later = start + DELAY;
        explorer.pump(later);
        explorer.pump(later);

        let field = &explorer.view().results().containers()[0].fields[0];
        assert_eq!(field.class, HashClass::Hash);
        assert_eq!(field.value(), Some(format!("{}...{}", &hash[..10], &hash[54..]).as_str()));
        assert_eq!(field.cached_hash(), Some(hash.as_str()));
    }

    #[test]
    fn test_back_to_landing_clears_results() {
        let (mut explorer, tx) = explorer();
        let now = Instant::now();
        let hash = sample_hash(4);

        type_query(&mut explorer, &hash, now);
        tx.send(block(&hash)).unwrap();
        explorer.pump(now);
        assert!(!explorer.view().results().is_empty());

        explorer.apply(Command::Back, now);
        assert!(explorer.view().results().is_empty());
        assert!(explorer.controller().input().is_empty());

        // Forward replays the search
        explorer.apply(Command::Forward, now);
        let requests = explorer.controller().dispatcher().requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].query, hash);
    }

    #[test]
    fn test_back_at_landing_does_nothing() {
        let (mut explorer, _tx) = explorer();
        let now = Instant::now();

        explorer.apply(Command::Back, now);
        assert!(explorer.controller().dispatcher().requests().is_empty());
    }

    #[test]
    fn test_resize_burst_coalesces() {
        let (mut explorer, _tx) = explorer();
        let start = Instant::now();

        for step in 0..5 {
            explorer.apply(Command::Resize, start + Duration::from_millis(step * 50));
        }

        assert_eq!(explorer.timers().len(), 1);
        assert_eq!(
            explorer.next_deadline(),
            Some(start + Duration::from_millis(200) + DELAY)
        );
    }

    #[test]
    fn test_quit_cancels_timers() {
        let (mut explorer, _tx) = explorer();
        let now = Instant::now();
        explorer.load(&LaunchParams::default(), now);

        assert_eq!(explorer.apply(Command::Quit, now), Flow::Exit);
        assert!(explorer.timers().is_empty());
    }
}
