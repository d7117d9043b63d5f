//! Blockscope - a terminal block explorer search client
//!
//! This library provides the search box behaviour of a block explorer
//! (submit a query, dispatch the typed result to a renderer, replay
//! navigation history) together with an overflow-aware hash display that
//! abbreviates 64-character hashes when they do not fit their field.

use thiserror::Error;

pub mod api;
pub mod cli;
pub mod config;
pub mod explorer;
pub mod format;
pub mod history;
pub mod logging;
pub mod runtime;
pub mod search;
pub mod ui;
pub mod view;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum BlockscopeError {
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Search backend error
    #[error("API error: {0}")]
    Api(#[from] api::ApiError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// The log subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
