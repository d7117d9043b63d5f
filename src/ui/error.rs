//! UI error types

use thiserror::Error;

/// Errors that can occur while running the terminal UI
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal IO failed (raw mode, alternate screen, drawing, polling)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
