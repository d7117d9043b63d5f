//! Key hints along the bottom row

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// (key, action) pairs while a query is being typed
const TYPING: &[(&str, &str)] = &[("Enter", "search"), ("ESC", "leave input"), ("ctrl+c", "quit")];

/// Help bar for the explorer's current mode
///
/// While browsing, back and forward are only advertised when the history
/// has somewhere to go.
pub struct HelpBar<'a> {
    theme: &'a Theme,
    typing: bool,
    can_go_back: bool,
    can_go_forward: bool,
}

impl<'a> HelpBar<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            typing: false,
            can_go_back: false,
            can_go_forward: false,
        }
    }

    /// The search input has focus
    #[must_use]
    pub const fn typing(mut self, typing: bool) -> Self {
        self.typing = typing;
        self
    }

    /// Which history directions are available
    #[must_use]
    pub const fn navigation(mut self, back: bool, forward: bool) -> Self {
        self.can_go_back = back;
        self.can_go_forward = forward;
        self
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        if self.typing {
            return TYPING.to_vec();
        }

        let mut hints = vec![("/", "search")];
        if self.can_go_back {
            hints.push(("b", "back"));
        }
        if self.can_go_forward {
            hints.push(("f", "forward"));
        }
        hints.extend([("j/k", "scroll"), ("q", "quit")]);
        hints
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let separator = Span::styled("  ", self.theme.dimmed_style());
        let spans = self
            .hints()
            .into_iter()
            .enumerate()
            .flat_map(|(i, (key, action))| {
                let lead = (i > 0).then(|| separator.clone());
                lead.into_iter().chain([
                    Span::styled(key, self.theme.accent_style()),
                    Span::styled(":", self.theme.dimmed_style()),
                    Span::raw(action),
                ])
            })
            .collect::<Vec<_>>();

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
