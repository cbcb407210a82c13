//! HTTP client for the sports API

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::{debug, info, warn};

use super::query::build_query_string;
use super::{BackendResult, ForwardHeaders, SportsBackend};
use crate::config::BackendConfig;
use crate::error::GatewayError;

/// Client identifier sent on every outbound request
const CLIENT_USER_AGENT: &str = concat!("mcp-sports-server/", env!("CARGO_PKG_VERSION"));

/// Fallback when an error body carries no usable message
const DEFAULT_ERROR_MESSAGE: &str = "API request failed";

/// Cheapest listing call the API offers, used for reachability checks
const HEALTH_ENDPOINT: &str = "/v1/teams";

/// Outcome of a reachability check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Long-lived gateway to the sports API, shared by every tool
pub struct ApiClient {
    client: Client,
    base_url: String,
    debug: bool,
}

impl ApiClient {
    /// Create a new client
    pub fn new(config: &BackendConfig) -> Result<Self, GatewayError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        let client = Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            debug: config.debug,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, endpoint: &str, params: &Map<String, Value>) -> String {
        let query = build_query_string(params);
        if query.is_empty() {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}{}?{}", self.base_url, endpoint, query)
        }
    }

    /// Check that the sports API answers a minimal listing request
    pub async fn health_report(&self, headers: &ForwardHeaders) -> HealthReport {
        let mut params = Map::new();
        params.insert("per_page".to_string(), json!(1));

        match self.request(HEALTH_ENDPOINT, &params, headers).await {
            Ok(_) => HealthReport {
                healthy: true,
                error: None,
            },
            Err(e) => {
                warn!("Sports API health check failed: {}", e);
                HealthReport {
                    healthy: false,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    /// Boolean reachability; failures are logged, never propagated
    pub async fn health_check(&self, headers: &ForwardHeaders) -> bool {
        self.health_report(headers).await.healthy
    }
}

#[async_trait::async_trait]
impl SportsBackend for ApiClient {
    async fn request(
        &self,
        endpoint: &str,
        params: &Map<String, Value>,
        headers: &ForwardHeaders,
    ) -> Result<BackendResult, GatewayError> {
        let url = self.url_for(endpoint, params);

        if self.debug {
            let names: Vec<&str> = headers.pairs().into_iter().map(|(name, _)| name).collect();
            info!(url = %url, headers = ?names, "Outbound sports API request");
        }

        let mut request = self.client.get(&url);
        for (name, value) in headers.pairs() {
            request = request.header(name, value);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(url = %url, status = status.as_u16(), "Sports API responded");

        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        let payload = serde_json::from_str(&body).unwrap_or(Value::String(body));
        Ok(BackendResult::from_payload(payload))
    }
}

/// Compose the gateway failure for a non-2xx reply.
///
/// Message priority: plain-text body, JSON `error`, JSON `message`, fallback.
fn api_error(status: StatusCode, body: &str) -> GatewayError {
    GatewayError::Api {
        status: status.as_u16(),
        message: error_message(body),
    }
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::String(text)) if !text.is_empty() => text,
        Ok(Value::Object(object)) => ["error", "message"]
            .iter()
            .find_map(|field| object.get(*field).and_then(field_text))
            .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string()),
        Ok(_) => DEFAULT_ERROR_MESSAGE.to_string(),
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => DEFAULT_ERROR_MESSAGE.to_string(),
    }
}

fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend_config(base_url: &str) -> BackendConfig {
        BackendConfig {
            base_url: base_url.to_string(),
            timeout_ms: 1_000,
            debug: false,
        }
    }

    #[test]
    fn test_error_message_priority() {
        assert_eq!(error_message("Unauthorized"), "Unauthorized");
        assert_eq!(
            error_message(r#"{"error": "Invalid API key", "message": "ignored"}"#),
            "Invalid API key"
        );
        assert_eq!(error_message(r#"{"message": "Rate limited"}"#), "Rate limited");
        assert_eq!(error_message(r#"{"detail": "nope"}"#), DEFAULT_ERROR_MESSAGE);
        assert_eq!(error_message(""), DEFAULT_ERROR_MESSAGE);
        assert_eq!(error_message(r#""quoted text""#), "quoted text");
    }

    #[test]
    fn test_api_error_display() {
        let err = api_error(StatusCode::UNAUTHORIZED, "Unauthorized");
        assert_eq!(err.to_string(), "API Error (401): Unauthorized");
    }

    #[test]
    fn test_url_building() {
        let client = ApiClient::new(&backend_config("http://localhost:9999/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9999");

        let mut params = Map::new();
        assert_eq!(
            client.url_for("/v1/teams/1", &params),
            "http://localhost:9999/v1/teams/1"
        );

        params.insert("team_ids".to_string(), json!([1, 2]));
        assert_eq!(
            client.url_for("/v1/players", &params),
            "http://localhost:9999/v1/players?team_ids[]=1&team_ids[]=2"
        );
    }

    #[tokio::test]
    async fn test_unreachable_backend_reports_connect_failure() {
        // port 9 (discard) on loopback refuses connections in test environments
        let client = ApiClient::new(&backend_config("http://127.0.0.1:9")).unwrap();
        let err = client
            .request("/v1/teams", &Map::new(), &ForwardHeaders::default())
            .await
            .unwrap_err();
        assert_eq!(err, GatewayError::Connect);

        let report = client.health_report(&ForwardHeaders::default()).await;
        assert!(!report.healthy);
        assert_eq!(
            report.error.as_deref(),
            Some("Unable to connect to the sports API")
        );
        assert!(!client.health_check(&ForwardHeaders::default()).await);
    }
}
