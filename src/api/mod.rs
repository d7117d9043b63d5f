//! Explorer search API
//!
//! The explorer backend resolves a free-form query (block hash, block
//! height, transaction hash, address) into one typed object. This module
//! holds the wire types, the [`SearchApi`] abstraction and its HTTP
//! implementation, and the dispatcher that runs searches off the event loop.

mod dispatch;
mod error;
mod http;

pub use dispatch::{SearchCompletion, SearchDispatcher, WorkerDispatcher};
pub use error::{ApiError, Result};
pub use http::HttpSearchApi;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of object a search resolved to
///
/// Unrecognised wire values are kept in [`ObjectType::Unknown`] so they can
/// be reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ObjectType {
    Block,
    BlockHeader,
    Address,
    Transaction,
    Unknown(String),
}

impl Default for ObjectType {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl From<String> for ObjectType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "BLOCK" => Self::Block,
            "BLOCK_HEADER" => Self::BlockHeader,
            "ADDRESS" => Self::Address,
            "TRANSACTION" => Self::Transaction,
            _ => Self::Unknown(value),
        }
    }
}

impl ObjectType {
    /// Wire name of the type
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Block => "BLOCK",
            Self::BlockHeader => "BLOCK_HEADER",
            Self::Address => "ADDRESS",
            Self::Transaction => "TRANSACTION",
            Self::Unknown(raw) => raw,
        }
    }
}

impl From<ObjectType> for String {
    fn from(value: ObjectType) -> Self {
        match value {
            ObjectType::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Identifier attached to every submitted search
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

/// A search submitted by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    #[serde(skip)]
    pub id: RequestId,
    pub query: String,
}

impl SearchRequest {
    #[must_use]
    pub fn new(id: RequestId, query: impl Into<String>) -> Self {
        Self {
            id,
            query: query.into(),
        }
    }
}

/// Response of the search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub was_success: bool,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub object_type: ObjectType,
    #[serde(default)]
    pub object: Value,
}

impl SearchResult {
    /// Successful result
    #[must_use]
    pub fn success(object_type: ObjectType, object: Value) -> Self {
        Self {
            was_success: true,
            error_message: None,
            object_type,
            object,
        }
    }

    /// Failed result carrying an error message
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            was_success: false,
            error_message: Some(message.into()),
            object_type: ObjectType::default(),
            object: Value::Null,
        }
    }
}

/// Backend that resolves search queries
///
/// Implementations block; the [`WorkerDispatcher`] keeps them off the event
/// loop.
pub trait SearchApi: Send + Sync {
    /// Resolve `query`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached or its response
    /// cannot be decoded. A backend-reported failure is a successful call
    /// returning a result with `was_success == false`.
    fn search(&self, query: &str) -> Result<SearchResult>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_block_result() {
        let body = json!({
            "wasSuccess": true,
            "errorMessage": null,
            "objectType": "BLOCK",
            "object": { "hash": "00ff" }
        });

        let result: SearchResult = serde_json::from_value(body).unwrap();
        assert!(result.was_success);
        assert_eq!(result.object_type, ObjectType::Block);
        assert_eq!(result.object["hash"], "00ff");
    }

    #[test]
    fn test_decode_failure_without_object() {
        let body = json!({
            "wasSuccess": false,
            "errorMessage": "Invalid search parameter."
        });

        let result: SearchResult = serde_json::from_value(body).unwrap();
        assert!(!result.was_success);
        assert_eq!(result.error_message.as_deref(), Some("Invalid search parameter."));
        assert_eq!(result.object_type, ObjectType::Unknown(String::new()));
        assert!(result.object.is_null());
    }

    #[test]
    fn test_unknown_object_type_keeps_raw_value() {
        let object_type: ObjectType = serde_json::from_value(json!("SLP_TOKEN")).unwrap();
        assert_eq!(object_type, ObjectType::Unknown("SLP_TOKEN".to_string()));
        assert_eq!(serde_json::to_value(&object_type).unwrap(), json!("SLP_TOKEN"));
    }

    #[test]
    fn test_request_serializes_query_only() {
        let request = SearchRequest::new(RequestId(9), "abc");
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({ "query": "abc" }));
    }
}
