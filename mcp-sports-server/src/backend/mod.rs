//! Backend API gateway
//!
//! Everything the tools know about the upstream sports API goes through the
//! [`SportsBackend`] trait: one GET per call, a uniform [`BackendResult`] on
//! success and a [`GatewayError`] on failure.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::GatewayError;

pub mod client;
pub mod mock;
pub mod query;

pub use client::{ApiClient, HealthReport};
pub use mock::StaticBackend;

/// Headers forwarded from the inbound MCP request to the sports API.
///
/// The Authorization value is opaque: it is never inspected here, the
/// upstream API is the only authority on whether it is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForwardHeaders {
    pub authorization: Option<String>,
}

impl ForwardHeaders {
    pub fn with_authorization(value: impl Into<String>) -> Self {
        Self {
            authorization: Some(value.into()),
        }
    }

    /// Header pairs as sent upstream
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        self.authorization
            .as_deref()
            .map(|auth| vec![("Authorization", auth)])
            .unwrap_or_default()
    }
}

/// Normalized upstream response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendResult {
    /// Payload; shape is defined by the upstream API
    pub data: Value,
    /// Pagination hints (`next_cursor`, `per_page`) when the upstream sent any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl BackendResult {
    /// Normalize a raw upstream payload.
    ///
    /// An object with a non-null `data` field is unwrapped and its sibling
    /// `meta` carried along; anything else becomes `data` as a whole.
    pub fn from_payload(payload: Value) -> Self {
        match payload {
            Value::Object(mut object) if !object.get("data").map_or(true, Value::is_null) => {
                let data = object.remove("data").unwrap_or(Value::Null);
                let meta = object.remove("meta").filter(|meta| !meta.is_null());
                Self { data, meta }
            }
            other => Self {
                data: other,
                meta: None,
            },
        }
    }
}

/// The one capability tools need from the upstream API
#[async_trait::async_trait]
pub trait SportsBackend: Send + Sync {
    /// Issue `GET <base><endpoint>?<params>` with the forwarded headers
    async fn request(
        &self,
        endpoint: &str,
        params: &Map<String, Value>,
        headers: &ForwardHeaders,
    ) -> Result<BackendResult, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_payload_unwraps_data_and_meta() {
        let result = BackendResult::from_payload(json!({
            "data": [{"id": 1}],
            "meta": {"next_cursor": 25, "per_page": 25}
        }));
        assert_eq!(result.data, json!([{"id": 1}]));
        assert_eq!(result.meta, Some(json!({"next_cursor": 25, "per_page": 25})));
    }

    #[test]
    fn test_from_payload_without_data_field() {
        let payload = json!({"id": 7, "full_name": "Boston Celtics"});
        let result = BackendResult::from_payload(payload.clone());
        assert_eq!(result.data, payload);
        assert!(result.meta.is_none());
    }

    #[test]
    fn test_from_payload_non_object() {
        let result = BackendResult::from_payload(json!([1, 2, 3]));
        assert_eq!(result.data, json!([1, 2, 3]));
        assert!(result.meta.is_none());
    }

    #[test]
    fn test_from_payload_null_data_keeps_whole_payload() {
        let payload = json!({"data": null, "message": "nothing"});
        let result = BackendResult::from_payload(payload.clone());
        assert_eq!(result.data, payload);
    }

    #[test]
    fn test_forward_headers_pairs() {
        assert!(ForwardHeaders::default().pairs().is_empty());
        let headers = ForwardHeaders::with_authorization("key-123");
        assert_eq!(headers.pairs(), vec![("Authorization", "key-123")]);
    }
}
