//! Blockscope application entry point
//!
//! Starts the terminal explorer against the configured backend.
//!
//! # Usage
//!
//! ```bash
//! # Open the explorer
//! blockscope
//!
//! # Search right away
//! blockscope --search 650000
//! blockscope --url "http://localhost:8081/?search=1BoatSLRHtKNngkdXEeobR76b53LETtpyT"
//!
//! # Another backend, with logs
//! BLOCKSCOPE_LOG=debug blockscope --endpoint https://explorer.example.org --log-file /tmp/blockscope.log
//! ```
//!
//! # Configuration
//!
//! On first run a default configuration is written to the user's config
//! directory (`~/.config/blockscope/config.toml` on Linux).

use blockscope::{
    BlockscopeError,
    api::{HttpSearchApi, WorkerDispatcher},
    cli::Cli,
    config::ExplorerConfig,
    explorer::Explorer,
    logging,
    search::SearchController,
    ui::ExplorerTui,
};
use std::sync::{Arc, mpsc};

type Result<T> = std::result::Result<T, BlockscopeError>;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let mut config = match &cli.config {
        Some(path) => ExplorerConfig::load_from(path)?,
        None => ExplorerConfig::load()?,
    };
    cli.apply_overrides(&mut config);

    if let Some(log_file) = &config.log_file {
        logging::init(log_file)?;
    }

    let api = HttpSearchApi::new(&config.endpoint, config.user_agent.as_deref())?;
    tracing::info!(url = %api.url(), "search backend configured");

    let (completions_tx, completions_rx) = mpsc::channel();
    let dispatcher = WorkerDispatcher::new(Arc::new(api), completions_tx);
    let controller =
        SearchController::new(dispatcher).with_ignore_stale(config.ignore_stale_responses);
    let mut explorer = Explorer::new(controller, completions_rx, config.settle_delay());

    ExplorerTui::new().run(&mut explorer, &cli.launch_params())?;
    Ok(())
}
