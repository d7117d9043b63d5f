//! Status bar widget showing what happened to the last search

use crate::search::DispatchOutcome;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Status bar widget
pub struct StatusBar<'a> {
    /// Outcome of the last completed search
    outcome: Option<&'a DispatchOutcome>,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(outcome: Option<&'a DispatchOutcome>, theme: &'a Theme) -> Self {
        Self { outcome, theme }
    }

    /// Prefix, message and style for an outcome
    fn message(&self, outcome: &DispatchOutcome) -> (&'static str, String, Style) {
        match outcome {
            DispatchOutcome::Rendered(object_type) => (
                "✓ ",
                format!("Found {}", object_type.as_str()),
                self.theme.success_style(),
            ),
            DispatchOutcome::UnknownType(raw) => (
                "⚠ ",
                format!("Unknown object type {raw}"),
                self.theme.warning_style(),
            ),
            DispatchOutcome::Failed(message) => (
                "✗ ",
                message.clone().unwrap_or_else(|| "Search failed".to_string()),
                self.theme.error_style(),
            ),
            DispatchOutcome::Stale => ("", String::new(), self.theme.dimmed_style()),
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(outcome) = self.outcome else {
            return;
        };
        let (prefix, message, style) = self.message(outcome);

        let line = Line::from(vec![Span::styled(prefix, style), Span::styled(message, style)]);
        Paragraph::new(line).render(area, buf);
    }
}
