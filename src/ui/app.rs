//! Terminal application loop
//!
//! Owns the terminal for the lifetime of the explorer. Each iteration
//! delivers finished searches and due timers, draws, then waits for input
//! no longer than the next timer deadline.

use super::error::Result;
use super::events::poll_command;
use super::theme::Theme;
use super::widgets::{HelpBar, ResultsPane, SearchBar, StatusBar};
use crate::api::SearchDispatcher;
use crate::explorer::{Explorer, Flow};
use crate::search::LaunchParams;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Longest wait for input between frames
const TICK: Duration = Duration::from_millis(50);

/// Draw the whole explorer screen
///
/// Records every field's box into the results view as a side effect.
pub fn draw<D: SearchDispatcher>(frame: &mut Frame, explorer: &mut Explorer<D>, theme: &Theme) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(3),    // Results
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    let controller = explorer.controller();
    let focused = controller.is_focused();
    let search_bar = SearchBar::new(controller.input(), theme)
        .focused(focused)
        .loading(controller.is_loading());
    frame.render_widget(search_bar, layout[0]);

    frame.render_widget(StatusBar::new(explorer.last_outcome(), theme), layout[2]);

    let history = explorer.view().history();
    let help_bar = HelpBar::new(theme)
        .typing(focused)
        .navigation(history.can_go_back(), history.can_go_forward());
    frame.render_widget(help_bar, layout[3]);

    frame.render_stateful_widget(
        ResultsPane::new(theme),
        layout[1],
        explorer.view_mut().results_mut(),
    );
}

/// Full-screen explorer
#[derive(Debug, Default)]
pub struct ExplorerTui {
    theme: Theme,
}

impl ExplorerTui {
    /// Create a TUI with the default theme
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    /// Run the explorer until the user quits
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up, drawn to or polled.
    pub fn run<D: SearchDispatcher>(
        &self,
        explorer: &mut Explorer<D>,
        params: &LaunchParams,
    ) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;

        // Run the event loop, ensuring cleanup happens
        let result = self.run_loop(&mut terminal, explorer, params);

        if let Err(e) = Self::cleanup_terminal() {
            tracing::error!("terminal cleanup failed: {e}");
        }

        result
    }

    fn run_loop<D: SearchDispatcher>(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        explorer: &mut Explorer<D>,
        params: &LaunchParams,
    ) -> Result<()> {
        // First frame lays the page out before the launch search goes out
        terminal.draw(|frame| draw(frame, explorer, &self.theme))?;
        explorer.load(params, Instant::now());

        loop {
            let now = Instant::now();
            explorer.pump(now);

            terminal.draw(|frame| draw(frame, explorer, &self.theme))?;

            let timeout = explorer
                .next_deadline()
                .map_or(TICK, |deadline| deadline.saturating_duration_since(now).min(TICK));

            let Some(command) = poll_command(timeout, explorer.controller().is_focused())? else {
                continue;
            };
            if explorer.apply(command, Instant::now()) == Flow::Exit {
                tracing::info!("explorer closed");
                return Ok(());
            }
        }
    }
}
