//! Search bar widget for query input

use crate::search::SearchInput;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget that displays the query with cursor
pub struct SearchBar<'a> {
    /// Input state
    input: &'a SearchInput,
    /// Theme for styling
    theme: &'a Theme,
    /// Whether the widget has focus
    focused: bool,
    /// Whether a search is in flight
    loading: bool,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(input: &'a SearchInput, theme: &'a Theme) -> Self {
        Self {
            input,
            theme,
            focused: false,
            loading: false,
        }
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Show the loading indicator
    #[must_use]
    pub const fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.accent_style()
        } else {
            self.theme.border_style()
        };
        let title = if self.loading {
            " Search (loading...) "
        } else {
            " Search "
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title);

        let inner = block.inner(area);
        block.render(area, buf);

        let display = self.input.display_value();
        let mut spans = vec![Span::styled(">", self.theme.dimmed_style()), Span::raw(" ")];

        if self.input.is_selected_all() {
            spans.push(Span::styled(display, self.theme.selection_style()));
        } else if self.focused {
            // Split at the character cursor
            let before: String = display.chars().take(self.input.cursor()).collect();
            let after: String = display.chars().skip(self.input.cursor()).collect();
            spans.push(Span::raw(before));
            spans.push(Span::styled(
                "│",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
            spans.push(Span::raw(after));
        } else if display.is_empty() {
            spans.push(Span::styled(
                "block height, hash, transaction or address",
                self.theme.dimmed_style(),
            ));
        } else {
            spans.push(Span::raw(display));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::TextTransform;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_uppercase_display() {
        let theme = Theme::default();
        let mut input = SearchInput::new();
        input.set_value("abc");
        input.set_transform(TextTransform::Uppercase);

        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        SearchBar::new(&input, &theme).render(area, &mut buf);

        assert!(row(&buf, 1).contains("> ABC"));
    }

    #[test]
    fn test_loading_title() {
        let theme = Theme::default();
        let input = SearchInput::new();

        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        SearchBar::new(&input, &theme).loading(true).render(area, &mut buf);

        assert!(row(&buf, 0).contains("loading"));
    }
}
