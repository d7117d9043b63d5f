//! Terminal front end
//!
//! Hosts the explorer in a ratatui/crossterm screen:
//!
//! ```text
//! ┌ Search ──────────────────────────────────┐
//! │ > 000000000000000000c2b4...              │
//! └──────────────────────────────────────────┘
//!  Block
//!    Hash            0000000000...a3c1c1f0a1
//!    Height          650000
//!  ✓ rendered BLOCK
//!  /:search  Enter:submit  b/f:back/forward  q:quit
//! ```
//!
//! The draw pass records every field's box into the results view, which is
//! what the hash formatter measures against.

mod app;
mod error;
mod events;
mod theme;
pub mod widgets;

pub use app::{ExplorerTui, draw};
pub use error::{Result, UiError};
pub use events::{map_event, poll_command};
pub use theme::Theme;
