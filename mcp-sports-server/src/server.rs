//! HTTP surface
//!
//! `POST /mcp` carries JSON-RPC; the remaining routes are plain JSON
//! discovery and probe endpoints.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::backend::{ApiClient, ForwardHeaders, SportsBackend};
use crate::catalogue;
use crate::config::Config;
use crate::error::{Result, ServerError};
use crate::mcp::{Dispatcher, RequestContext, ToolRegistry};

/// Caller identification header, recorded for observability only
const CLIENT_HEADER: &str = "x-bdl-client";

const SERVICE_NAME: &str = "mcp-sports-server";

/// Shared server state
pub struct AppState {
    pub dispatcher: Dispatcher,
    pub registry: Arc<ToolRegistry>,
    pub client: Arc<ApiClient>,
    pub config: Config,
}

/// MCP server
pub struct McpServer {
    state: Arc<AppState>,
}

impl McpServer {
    /// Create a server with the full sports catalogue behind a reqwest gateway
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let client = Arc::new(
            ApiClient::new(&config.backend).map_err(|e| ServerError::Config(e.to_string()))?,
        );
        let backend: Arc<dyn SportsBackend> = client.clone();
        let registry = ToolRegistry::from_catalogue(catalogue::all(backend))?;

        Ok(Self::from_parts(config, client, registry))
    }

    /// Assemble a server from already built parts
    pub fn from_parts(config: Config, client: Arc<ApiClient>, registry: ToolRegistry) -> Self {
        let registry = Arc::new(registry);
        let state = Arc::new(AppState {
            dispatcher: Dispatcher::new(registry.clone()),
            registry,
            client,
            config,
        });
        Self { state }
    }

    pub fn tool_count(&self) -> usize {
        self.state.registry.len()
    }

    /// Build the Axum router
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(health_endpoint))
            .route("/ready", get(readiness_endpoint))
            .route("/.well-known/mcp-config", get(mcp_config_endpoint))
            .route("/api/docs", get(docs_endpoint))
            .route("/mcp", post(mcp_endpoint))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Run the server until the listener fails
    pub async fn run(&self) -> Result<()> {
        let addr = &self.state.config.server.listen_addr;
        let listener = TcpListener::bind(addr).await?;

        info!("🚀 MCP sports server listening on http://{}", addr);
        info!("📊 Health check: http://{}/health", addr);
        info!("📖 API docs: http://{}/api/docs", addr);
        info!("🔌 MCP endpoint: http://{}/mcp", addr);

        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}

fn header_value(headers: &HeaderMap, name: impl axum::http::header::AsHeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// JSON-RPC endpoint
async fn mcp_endpoint(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let context = RequestContext {
        authorization: header_value(&headers, AUTHORIZATION),
        client: header_value(&headers, CLIENT_HEADER),
    };

    let (status, response) = state.dispatcher.dispatch(&body, &context).await;
    (status, Json(response))
}

/// Liveness probe
async fn health_endpoint(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "tools": state.registry.len(),
    }))
}

/// Readiness: can the sports API be reached with the caller's credentials
async fn readiness_endpoint(State(state): State<Arc<AppState>>, headers: HeaderMap) -> impl IntoResponse {
    let forward = ForwardHeaders {
        authorization: header_value(&headers, AUTHORIZATION),
    };
    let report = state.client.health_report(&forward).await;

    let status = if report.healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(report))
}

/// Server description for MCP registries
async fn mcp_config_endpoint(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "$schema": "https://static.modelcontextprotocol.io/schemas/2025-07-09/server.schema.json",
        "name": "io.balldontlie/mcp",
        "description": "Provides access to live sports data and analytics from BALLDONTLIE: The Sports API",
        "status": "active",
        "version": env!("CARGO_PKG_VERSION"),
        "remotes": [
            {
                "type": "streamable-http",
                "url": state.config.server.public_url,
                "headers": [
                    {
                        "name": "Authorization",
                        "description": "API key for authentication",
                        "is_required": true,
                        "is_secret": true
                    }
                ]
            }
        ]
    }))
}

/// Human-oriented overview of every tool, grouped by sport
async fn docs_endpoint(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    if state.registry.is_empty() {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "error": "Server not initialized" })),
        );
    }

    let mut grouped: BTreeMap<String, Vec<Value>> = BTreeMap::new();
    for tool in state.registry.tools() {
        let sport = tool
            .name
            .split('_')
            .next()
            .unwrap_or_default()
            .to_uppercase();
        grouped.entry(sport).or_default().push(tool.descriptor());
    }

    (
        StatusCode::OK,
        Json(json!({
            "server": {
                "name": SERVICE_NAME,
                "version": env!("CARGO_PKG_VERSION"),
                "description": "Remote MCP server providing access to comprehensive sports data",
            },
            "endpoints": {
                "mcp": "/mcp",
                "health": "/health",
                "ready": "/ready",
                "docs": "/api/docs",
            },
            "tools": grouped,
            "usage": {
                "authentication": "Include your BALLDONTLIE API key in the Authorization header",
                "example": {
                    "url": "/mcp",
                    "method": "POST",
                    "headers": {
                        "Content-Type": "application/json",
                        "Authorization": "<YOUR_API_KEY>",
                    },
                    "body": {
                        "jsonrpc": "2.0",
                        "id": 1,
                        "method": "tools/call",
                        "params": {
                            "name": "nba_get_teams",
                            "arguments": {},
                        },
                    },
                },
            },
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn test_config() -> Config {
        let mut config = Config::default();
        config.server.listen_addr = "127.0.0.1:0".to_string();
        config.backend.base_url = "http://127.0.0.1:9".to_string();
        config.backend.timeout_ms = 500;
        config
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_server_creation() {
        let server = McpServer::new(test_config()).unwrap();
        assert!(server.tool_count() > 100);
        let _router = server.router();
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = test_config();
        config.backend.base_url = "::not a url::".to_string();
        assert!(McpServer::new(config).is_err());
    }

    #[tokio::test]
    async fn test_health_reports_tool_count() {
        let server = McpServer::new(test_config()).unwrap();
        let (status, body) = get_json(server.router(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["tools"], json!(server.tool_count()));
    }

    #[tokio::test]
    async fn test_mcp_config_advertises_remote() {
        let server = McpServer::new(test_config()).unwrap();
        let (status, body) = get_json(server.router(), "/.well-known/mcp-config").await;
        assert_eq!(status, StatusCode::OK);
        let remote = &body["remotes"][0];
        assert_eq!(remote["type"], "streamable-http");
        assert_eq!(remote["url"], "https://mcp.balldontlie.io/mcp");
        assert_eq!(remote["headers"][0]["name"], "Authorization");
        assert_eq!(remote["headers"][0]["is_secret"], true);
    }

    #[tokio::test]
    async fn test_docs_group_tools_by_sport() {
        let server = McpServer::new(test_config()).unwrap();
        let (status, body) = get_json(server.router(), "/api/docs").await;
        assert_eq!(status, StatusCode::OK);
        let tools = body["tools"].as_object().unwrap();
        assert!(tools.contains_key("NBA"));
        assert!(tools.contains_key("UCL"));
        assert!(tools["NBA"]
            .as_array()
            .unwrap()
            .iter()
            .all(|t| t["name"].as_str().unwrap().starts_with("nba_")));
    }

    #[tokio::test]
    async fn test_docs_unavailable_without_tools() {
        let config = test_config();
        let client = Arc::new(ApiClient::new(&config.backend).unwrap());
        let server = McpServer::from_parts(config, client, ToolRegistry::new());
        let (status, body) = get_json(server.router(), "/api/docs").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "Server not initialized");
    }

    #[tokio::test]
    async fn test_ready_reports_unreachable_backend() {
        let server = McpServer::new(test_config()).unwrap();
        let (status, body) = get_json(server.router(), "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["healthy"], false);
        assert_eq!(body["error"], "Unable to connect to the sports API");
    }
}
