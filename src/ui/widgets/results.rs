//! Results pane rendering containers and their fields
//!
//! Each container is a title row followed by one row per field: the label
//! in a fixed-width column, then the value. Values are clipped, never
//! wrapped, so a field's box is one row high and as wide as the value
//! column. That box is recorded on every field while drawing.

use crate::ui::theme::Theme;
use crate::view::{FieldBox, HashField, ResultsView};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};

/// Indent of field rows below a container title
const INDENT: u16 = 2;

/// Gap between the label column and the value column
const LABEL_GAP: u16 = 2;

/// Widest label column before labels are clipped
const MAX_LABEL_WIDTH: u16 = 20;

/// Results pane widget
pub struct ResultsPane<'a> {
    theme: &'a Theme,
}

impl<'a> ResultsPane<'a> {
    /// Create a new results pane
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn field_line(&self, field: &HashField, label_width: u16) -> Line<'static> {
        let label = format!("{:<width$}", field.label, width = usize::from(label_width));
        let value_style = if field.class.is_hash_bearing() {
            self.theme.hash_style()
        } else {
            self.theme.normal_style()
        };

        Line::from(vec![
            Span::raw(" ".repeat(usize::from(INDENT))),
            Span::styled(label, self.theme.label_style()),
            Span::raw(" ".repeat(usize::from(LABEL_GAP))),
            Span::styled(field.value().unwrap_or_default().to_string(), value_style),
        ])
    }
}

/// Width of the label column for the current results
fn label_width(results: &ResultsView) -> u16 {
    let widest = results
        .containers()
        .iter()
        .flat_map(|container| &container.fields)
        .map(|field| Line::raw(field.label.as_str()).width())
        .max()
        .unwrap_or(0);
    u16::try_from(widest).unwrap_or(u16::MAX).min(MAX_LABEL_WIDTH)
}

impl StatefulWidget for ResultsPane<'_> {
    type State = ResultsView;

    fn render(self, area: Rect, buf: &mut Buffer, results: &mut ResultsView) {
        if results.is_empty() {
            let hint = Line::from(Span::styled(
                "Search for a block height, block hash, transaction hash or address",
                self.theme.dimmed_style(),
            ));
            Paragraph::new(hint).render(area, buf);
            return;
        }

        let label_width = label_width(results);
        let value_width = area.width.saturating_sub(INDENT + label_width + LABEL_GAP);

        let mut lines = Vec::new();
        for container in results.containers_mut() {
            lines.push(Line::from(Span::styled(
                container.title.clone(),
                self.theme.title_style(),
            )));
            for field in &mut container.fields {
                field.set_bounds(FieldBox::new(value_width, 1));
                lines.push(self.field_line(field, label_width));
            }
            lines.push(Line::default());
        }

        let max_scroll = lines.len().saturating_sub(usize::from(area.height));
        results.scroll = results.scroll.min(max_scroll);
        let offset = u16::try_from(results.scroll).unwrap_or(u16::MAX);

        Paragraph::new(lines).scroll((offset, 0)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::HashClass;

    const HASH: &str = "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b";

    fn results() -> ResultsView {
        let mut results = ResultsView::new();
        let container = results
            .create("Transaction")
            .with_field(HashField::new("Hash", HashClass::TransactionHash, HASH))
            .with_field(HashField::new("Fee", HashClass::Plain, "226"));
        results.push(container);
        results
    }

    #[test]
    fn test_records_field_boxes() {
        let theme = Theme::default();
        let mut results = results();

        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        ResultsPane::new(&theme).render(area, &mut buf, &mut results);

        // 40 - indent 2 - label 4 - gap 2
        let field = &results.containers()[0].fields[0];
        assert_eq!(field.bounds(), Some(FieldBox::new(32, 1)));
        assert!(field.is_overflowing());
        assert!(!results.containers()[0].fields[1].is_overflowing());
    }

    #[test]
    fn test_scroll_is_clamped() {
        let theme = Theme::default();
        let mut results = results();
        results.scroll = 100;

        let area = Rect::new(0, 0, 80, 2);
        let mut buf = Buffer::empty(area);
        ResultsPane::new(&theme).render(area, &mut buf, &mut results);

        // Title, two fields and a blank row in a two-row area
        assert_eq!(results.scroll, 2);
    }
}
