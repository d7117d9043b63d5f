//! Command-line interface definitions and parsing
//!
//! blockscope has no subcommands: the flags choose the backend, seed the
//! first search and override values from the configuration file.
//!
//! # Examples
//!
//! ```no_run
//! use blockscope::cli::Cli;
//!
//! let cli = Cli::parse_args();
//! let params = cli.launch_params();
//! ```

use crate::config::ExplorerConfig;
use crate::search::LaunchParams;
use clap::Parser;
use std::path::PathBuf;

/// Terminal block explorer
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "blockscope")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Search submitted on start-up (block height, hash, transaction or address)
    #[arg(short = 's', long = "search", value_name = "QUERY", conflicts_with = "url")]
    pub search: Option<String>,

    /// Explorer URL to take the start-up search from (its `search` parameter)
    #[arg(long = "url", value_name = "URL")]
    pub url: Option<String>,

    /// Explorer backend base URL (overrides config)
    #[arg(short = 'e', long = "endpoint", value_name = "URL")]
    pub endpoint: Option<String>,

    /// Write logs to this file (overrides config)
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Milliseconds to wait before formatting hashes (overrides config)
    #[arg(long = "settle-delay-ms", value_name = "MS")]
    pub settle_delay_ms: Option<u64>,

    /// Configuration file to use instead of the default one
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Start-up parameters from `--search` or `--url`
    #[must_use]
    pub fn launch_params(&self) -> LaunchParams {
        if let Some(search) = &self.search {
            return LaunchParams {
                search: Some(search.clone()),
            };
        }
        self.url
            .as_deref()
            .map(LaunchParams::from_url)
            .unwrap_or_default()
    }

    /// Apply command-line overrides to `config`
    pub fn apply_overrides(&self, config: &mut ExplorerConfig) {
        if let Some(endpoint) = &self.endpoint {
            config.endpoint.clone_from(endpoint);
        }
        if let Some(log_file) = &self.log_file {
            config.log_file = Some(log_file.clone());
        }
        if let Some(settle_delay_ms) = self.settle_delay_ms {
            config.settle_delay_ms = settle_delay_ms;
        }
    }
}
