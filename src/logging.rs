//! Log output
//!
//! The TUI owns the terminal, so logs go to a file. The filter is read from
//! `BLOCKSCOPE_LOG` (same syntax as `RUST_LOG`) and defaults to `info`.

use crate::BlockscopeError;
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "BLOCKSCOPE_LOG";

const DEFAULT_FILTER: &str = "info";

/// Filter from `BLOCKSCOPE_LOG`, or the default
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to `path`
///
/// The file is appended to and never rotated; its directory is created if
/// needed.
///
/// # Errors
///
/// Returns an error if `path` has no file name, the directory cannot be
/// created, or a global subscriber is already installed.
pub fn init(path: &Path) -> Result<(), BlockscopeError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| BlockscopeError::InvalidInput(format!("not a log file path: {}", path.display())))?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(directory)?;

    let appender = tracing_appender::rolling::never(directory, file_name);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .map_err(|e| BlockscopeError::Logging(e.to_string()))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "blockscope starting");
    Ok(())
}
