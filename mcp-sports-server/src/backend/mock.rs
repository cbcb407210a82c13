//! In-memory gateway for tests

use std::sync::Mutex;

use serde_json::{Map, Value};

use super::{BackendResult, ForwardHeaders, SportsBackend};
use crate::error::GatewayError;

/// One call observed by [`StaticBackend`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub endpoint: String,
    pub params: Map<String, Value>,
    pub headers: ForwardHeaders,
}

/// Gateway that answers every request with the same canned reply
/// and remembers what it was asked
pub struct StaticBackend {
    reply: Result<Value, GatewayError>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StaticBackend {
    /// Reply with `payload`, normalized the same way the HTTP client does
    pub fn with_payload(payload: Value) -> Self {
        Self {
            reply: Ok(payload),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fail every request with `error`
    pub fn failing(error: GatewayError) -> Self {
        Self {
            reply: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Calls received so far, oldest first
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls().pop()
    }
}

#[async_trait::async_trait]
impl SportsBackend for StaticBackend {
    async fn request(
        &self,
        endpoint: &str,
        params: &Map<String, Value>,
        headers: &ForwardHeaders,
    ) -> Result<BackendResult, GatewayError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                endpoint: endpoint.to_string(),
                params: params.clone(),
                headers: headers.clone(),
            });
        }

        self.reply.clone().map(BackendResult::from_payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_static_backend_records_calls() {
        let backend = StaticBackend::with_payload(json!({"data": [1, 2]}));
        let mut params = Map::new();
        params.insert("season".to_string(), json!(2024));

        let result = backend
            .request("/v1/standings", &params, &ForwardHeaders::with_authorization("k"))
            .await
            .unwrap();

        assert_eq!(result.data, json!([1, 2]));
        let call = backend.last_call().unwrap();
        assert_eq!(call.endpoint, "/v1/standings");
        assert_eq!(call.params, params);
        assert_eq!(call.headers.authorization.as_deref(), Some("k"));
    }

    #[tokio::test]
    async fn test_failing_backend() {
        let backend = StaticBackend::failing(GatewayError::Connect);
        let err = backend
            .request("/v1/teams", &Map::new(), &ForwardHeaders::default())
            .await
            .unwrap_err();
        assert_eq!(err, GatewayError::Connect);
        assert_eq!(backend.calls().len(), 1);
    }
}
