//! Testing utilities for blockscope
//!
//! This module provides test doubles for the search dispatcher and the
//! renderer, plus helpers for building hash-shaped values.
//!
//! Only available when compiled with `cfg(test)`.

use crate::api::{SearchDispatcher, SearchRequest};
use crate::view::Renderer;
use serde_json::Value;
use std::cell::RefCell;

/// Dispatcher that records requests instead of sending them
///
/// # Examples
/// ```ignore
/// let dispatcher = RecordingDispatcher::default();
/// dispatcher.dispatch(SearchRequest::new(RequestId(1), "abc"));
/// assert_eq!(dispatcher.requests().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    requests: RefCell<Vec<SearchRequest>>,
}

impl RecordingDispatcher {
    /// Requests dispatched so far
    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests.borrow().clone()
    }
}

impl SearchDispatcher for RecordingDispatcher {
    fn dispatch(&self, request: SearchRequest) {
        self.requests.borrow_mut().push(request);
    }
}

/// Which renderer method was called
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderCall {
    Block,
    Address,
    Transaction,
}

/// Renderer that records its calls
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<(RenderCall, Value)>,
}

impl Renderer for RecordingRenderer {
    fn render_block(&mut self, object: &Value) {
        self.calls.push((RenderCall::Block, object.clone()));
    }

    fn render_address(&mut self, object: &Value) {
        self.calls.push((RenderCall::Address, object.clone()));
    }

    fn render_transaction(&mut self, object: &Value) {
        self.calls.push((RenderCall::Transaction, object.clone()));
    }
}

/// Deterministic 64-character hex string derived from `seed`
pub fn sample_hash(seed: u8) -> String {
    (0..32u8)
        .map(|i| format!("{:02x}", i.wrapping_mul(7).wrapping_add(seed)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_hash_shape() {
        let hash = sample_hash(5);
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(sample_hash(5), sample_hash(6));
    }
}
