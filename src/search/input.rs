//! Search input model
//!
//! Single-line text buffer with a character cursor, a select-all flag set on
//! focus, and a cosmetic text transform.

/// How the input text is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextTransform {
    /// Shown as typed
    #[default]
    None,
    /// Shown in upper case (the value itself is unchanged)
    Uppercase,
}

/// State of the search input
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    /// Current value
    value: String,
    /// Cursor position (character index, not byte)
    cursor: usize,
    /// Whole value is selected; the next edit replaces it
    selected_all: bool,
    /// Display transform
    transform: TextTransform,
}

impl SearchInput {
    /// Create an empty input
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Value length in characters
    #[must_use]
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    /// Whether the value is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Cursor position in characters
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the whole value is selected
    #[must_use]
    pub const fn is_selected_all(&self) -> bool {
        self.selected_all
    }

    /// Display transform
    #[must_use]
    pub const fn transform(&self) -> TextTransform {
        self.transform
    }

    /// Set the display transform
    pub const fn set_transform(&mut self, transform: TextTransform) {
        self.transform = transform;
    }

    /// Text as it should be displayed
    #[must_use]
    pub fn display_value(&self) -> String {
        match self.transform {
            TextTransform::None => self.value.clone(),
            TextTransform::Uppercase => self.value.to_uppercase(),
        }
    }

    /// Replace the value, moving the cursor to the end
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.len();
        self.selected_all = false;
    }

    /// Clear the value
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
        self.selected_all = false;
    }

    /// Select the whole value
    pub fn select_all(&mut self) {
        self.selected_all = !self.value.is_empty();
        self.cursor = self.len();
    }

    /// Drop the selection without changing the value
    pub const fn deselect(&mut self) {
        self.selected_all = false;
    }

    /// Get byte index from cursor (character) position
    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map_or(self.value.len(), |(i, _)| i)
    }

    /// Remove the selected text, if any; returns whether something was removed
    fn take_selection(&mut self) -> bool {
        if self.selected_all {
            self.clear();
            true
        } else {
            false
        }
    }

    /// Insert a character at cursor position (replacing a selection)
    pub fn insert_char(&mut self, c: char) {
        self.take_selection();
        let byte_idx = self.byte_index();
        self.value.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Delete character before cursor (backspace)
    pub fn backspace(&mut self) {
        if self.take_selection() {
            return;
        }
        if self.cursor > 0 {
            let byte_idx = self.byte_index();
            let prev_byte_idx = self.value[..byte_idx]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
            self.value.remove(prev_byte_idx);
            self.cursor -= 1;
        }
    }

    /// Delete character at cursor (delete key)
    pub fn delete(&mut self) {
        if self.take_selection() {
            return;
        }
        let byte_idx = self.byte_index();
        if byte_idx < self.value.len() {
            self.value.remove(byte_idx);
        }
    }

    /// Move cursor left
    pub const fn cursor_left(&mut self) {
        self.selected_all = false;
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right
    pub fn cursor_right(&mut self) {
        self.selected_all = false;
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub const fn cursor_home(&mut self) {
        self.selected_all = false;
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn cursor_end(&mut self) {
        self.selected_all = false;
        self.cursor = self.len();
    }
}
