//! Back/forward navigation history
//!
//! Every rendered search result pushes an entry carrying the hash (or
//! address) that was shown. Navigating back or forward restores an entry and
//! the caller replays it. The first entry is the landing page and carries no
//! hash, so navigating back to it clears the screen.

/// State stored with a history entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryState {
    /// Hash or address that was displayed
    pub hash: Option<String>,
}

impl HistoryState {
    /// State for a displayed object
    #[must_use]
    pub fn with_hash(hash: impl Into<String>) -> Self {
        Self {
            hash: Some(hash.into()),
        }
    }
}

/// Navigation stack with a cursor
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<HistoryState>,
    cursor: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// History containing only the landing page
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryState::default()],
            cursor: 0,
        }
    }

    /// Entry the cursor points at
    #[must_use]
    pub fn current(&self) -> &HistoryState {
        &self.entries[self.cursor]
    }

    /// Push a new entry, dropping everything forward of the cursor
    ///
    /// Pushing the entry that is already current does nothing, so replaying
    /// a restored entry does not grow the stack.
    pub fn push(&mut self, state: HistoryState) {
        if *self.current() == state {
            return;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(state);
        self.cursor += 1;
    }

    /// Move back one entry
    pub fn back(&mut self) -> Option<&HistoryState> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// Move forward one entry
    pub fn forward(&mut self) -> Option<&HistoryState> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    /// Whether [`History::back`] would move
    #[must_use]
    pub const fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    /// Whether [`History::forward`] would move
    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Number of entries, including the landing page
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}
