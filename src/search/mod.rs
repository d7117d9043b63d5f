//! Search box behaviour
//!
//! - [`SearchInput`]: the editable query with its display transform
//! - [`SearchController`]: focus, key handling, submission, response dispatch
//!   and history replay

mod controller;
mod input;

pub use controller::{DispatchOutcome, Key, LaunchParams, Propagation, SearchController};
pub use input::{SearchInput, TextTransform};
