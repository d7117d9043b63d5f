//! Renderers turning search payloads into result containers
//!
//! Payloads are treated leniently: fields that are missing or have an
//! unexpected type are simply not shown.

use super::{Container, ContainerId, HashClass, HashField, ResultsView};
use crate::history::{History, HistoryState};
use byte_unit::{Byte, UnitType};
use chrono::DateTime;
use serde_json::Value;

/// Receives successful search results, one method per object kind
pub trait Renderer {
    /// Show a block or block header
    fn render_block(&mut self, object: &Value);
    /// Show an address
    fn render_address(&mut self, object: &Value);
    /// Show a transaction
    fn render_transaction(&mut self, object: &Value);
}

/// Renderer that owns the results area and the navigation history
#[derive(Debug, Default)]
pub struct ExplorerView {
    results: ResultsView,
    history: History,
    /// Containers rendered since the last call to `take_rendered`
    rendered: Vec<ContainerId>,
}

impl ExplorerView {
    /// Create an empty view
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The results area
    #[must_use]
    pub const fn results(&self) -> &ResultsView {
        &self.results
    }

    /// The results area, mutably
    pub const fn results_mut(&mut self) -> &mut ResultsView {
        &mut self.results
    }

    /// Navigation history
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Navigation history, mutably
    pub const fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// Containers rendered since the previous call
    pub fn take_rendered(&mut self) -> Vec<ContainerId> {
        std::mem::take(&mut self.rendered)
    }

    /// Replace the results with `container` and remember it in the history
    fn show(&mut self, container: Container, key: Option<String>) {
        let id = self.results.replace(container);
        if let Some(key) = key.filter(|key| !key.is_empty()) {
            self.history.push(HistoryState::with_hash(key));
        }
        self.rendered.push(id);
    }
}

impl Renderer for ExplorerView {
    fn render_block(&mut self, object: &Value) {
        let mut container = self.results.create("Block");

        push_text(&mut container, "Hash", HashClass::Hash, object.get("hash"));
        push_text(&mut container, "Height", HashClass::Plain, object.get("height"));
        push_text(
            &mut container,
            "Previous Block",
            HashClass::PreviousBlockHash,
            object.get("previousBlockHash"),
        );
        push_text(&mut container, "Merkle Root", HashClass::Hash, object.get("merkleRoot"));
        if let Some(timestamp) = object.get("timestamp").and_then(format_timestamp) {
            container.push(HashField::new("Timestamp", HashClass::Plain, timestamp));
        }
        push_text(&mut container, "Difficulty", HashClass::Plain, object.get("difficulty"));
        push_text(&mut container, "Nonce", HashClass::Plain, object.get("nonce"));
        if let Some(size) = object.get("byteCount").and_then(format_byte_count) {
            container.push(HashField::new("Size", HashClass::Plain, size));
        }

        if let Some(transactions) = object.get("transactions").and_then(Value::as_array) {
            container.push(HashField::new(
                "Transactions",
                HashClass::Plain,
                transactions.len().to_string(),
            ));
            for transaction in transactions {
                push_text(
                    &mut container,
                    "",
                    HashClass::TransactionHash,
                    transaction.get("hash").or(Some(transaction)),
                );
            }
        }

        let key = object.get("hash").and_then(value_text);
        self.show(container, key);
    }

    fn render_address(&mut self, object: &Value) {
        let mut container = self.results.create("Address");

        let address = object
            .get("base58CheckEncoded")
            .or_else(|| object.get("base32CheckEncoded"))
            .or_else(|| object.get("address"));
        push_text(&mut container, "Address", HashClass::Plain, address);
        push_text(&mut container, "Balance", HashClass::Plain, object.get("balance"));

        if let Some(transactions) = object.get("transactions").and_then(Value::as_array) {
            container.push(HashField::new(
                "Transactions",
                HashClass::Plain,
                transactions.len().to_string(),
            ));
            for transaction in transactions {
                push_text(
                    &mut container,
                    "",
                    HashClass::TransactionHash,
                    transaction.get("hash").or(Some(transaction)),
                );
            }
        }

        let key = address.and_then(value_text);
        self.show(container, key);
    }

    fn render_transaction(&mut self, object: &Value) {
        let mut container = self.results.create("Transaction");

        push_text(&mut container, "Hash", HashClass::TransactionHash, object.get("hash"));
        if let Some(blocks) = object.get("blocks").and_then(Value::as_array) {
            for block in blocks {
                push_text(&mut container, "Block", HashClass::BlockHashes, Some(block));
            }
        }
        if let Some(size) = object.get("byteCount").and_then(format_byte_count) {
            container.push(HashField::new("Size", HashClass::Plain, size));
        }
        push_text(&mut container, "Fee", HashClass::Plain, object.get("fee"));

        if let Some(inputs) = object.get("inputs").and_then(Value::as_array) {
            for input in inputs {
                push_text(
                    &mut container,
                    "Input",
                    HashClass::TransactionHash,
                    input.get("previousOutputTransactionHash"),
                );
            }
        }
        if let Some(outputs) = object.get("outputs").and_then(Value::as_array) {
            for output in outputs {
                let address = output.get("address").and_then(value_text);
                let amount = output.get("amount").and_then(value_text);
                let text = match (address, amount) {
                    (Some(address), Some(amount)) => format!("{address} ({amount})"),
                    (Some(text), None) | (None, Some(text)) => text,
                    (None, None) => continue,
                };
                container.push(HashField::new("Output", HashClass::Plain, text));
            }
        }

        let key = object.get("hash").and_then(value_text);
        self.show(container, key);
    }
}

/// Text of a scalar JSON value
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Push a field if `value` is a scalar
fn push_text(container: &mut Container, label: &str, class: HashClass, value: Option<&Value>) {
    if let Some(text) = value.and_then(value_text) {
        container.push(HashField::new(label, class, text));
    }
}

/// Format a unix timestamp (seconds), given plainly or as `{ "value": n }`
fn format_timestamp(value: &Value) -> Option<String> {
    let seconds = value
        .as_i64()
        .or_else(|| value.get("value").and_then(Value::as_i64))?;
    DateTime::from_timestamp(seconds, 0).map(|time| time.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}

/// Format a byte count with a binary unit
fn format_byte_count(value: &Value) -> Option<String> {
    let bytes = value.as_u64()?;
    let adjusted = Byte::from_u64(bytes).get_appropriate_unit(UnitType::Binary);
    Some(format!("{adjusted:.2}"))
}
