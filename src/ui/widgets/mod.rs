//! Ratatui widgets for the explorer screen

mod help_bar;
mod results;
mod search_bar;
mod status_bar;

pub use help_bar::HelpBar;
pub use results::ResultsPane;
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
