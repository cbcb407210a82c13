//! JSON-RPC dispatcher
//!
//! One request goes through: parse → envelope check → auth check → method
//! dispatch → exactly one response. The dispatcher keeps no state between
//! requests; the registry it reads is immutable.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use axum::http::StatusCode;
use futures::FutureExt;
use serde_json::{json, Value};
use tracing::field::Empty;
use tracing::{debug, error, info_span, warn, Instrument, Span};

use super::registry::ToolRegistry;
use super::{McpError, McpRequest, McpResponse, JSONRPC_VERSION, PROTOCOL_VERSION};
use crate::backend::ForwardHeaders;

/// Name reported in `initialize`
const SERVER_NAME: &str = "mcp-sports-server";

/// Transport-level facts about an inbound request
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Raw Authorization header, forwarded untouched
    pub authorization: Option<String>,
    /// Optional caller identification (`x-bdl-client`)
    pub client: Option<String>,
}

impl RequestContext {
    pub fn with_authorization(authorization: impl Into<String>) -> Self {
        Self {
            authorization: Some(authorization.into()),
            client: None,
        }
    }
}

pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Handle one raw request body, returning the HTTP status and the
    /// JSON-RPC response to send
    pub async fn dispatch(&self, body: &[u8], context: &RequestContext) -> (StatusCode, McpResponse) {
        let span = info_span!(
            "mcp_request",
            mcp_method = Empty,
            mcp_tool = Empty,
            has_auth = context.authorization.is_some(),
            client = context.client.as_deref().unwrap_or(""),
            error = Empty,
        );

        async {
            // the correlator is recovered up front so a fault can still echo it
            let raw: Value = match serde_json::from_slice(body) {
                Ok(value) => value,
                Err(e) => {
                    debug!("Rejecting unparsable request body: {}", e);
                    return reply_error(McpError::parse_error(), Value::Null);
                }
            };
            let id = raw.get("id").cloned().unwrap_or(Value::Null);

            match AssertUnwindSafe(self.handle(raw, context)).catch_unwind().await {
                Ok(reply) => reply,
                Err(panic) => {
                    let reason = panic_message(panic.as_ref());
                    error!("MCP request handler panicked: {}", reason);
                    Span::current().record("error", reason.as_str());
                    reply_error(McpError::internal_error("Internal error"), id)
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn handle(&self, raw: Value, context: &RequestContext) -> (StatusCode, McpResponse) {
        let id = raw.get("id").cloned().unwrap_or(Value::Null);

        let request = match serde_json::from_value::<McpRequest>(raw) {
            // an empty method name counts as absent
            Ok(request) if request.jsonrpc == JSONRPC_VERSION && !request.method.is_empty() => {
                request
            }
            _ => return reply_error(McpError::invalid_request(), id),
        };

        Span::current().record("mcp_method", request.method.as_str());

        let authorization = match &context.authorization {
            Some(value) => value.clone(),
            None => return reply_error(McpError::unauthorized(), id),
        };

        debug!("MCP request: method={}", request.method);

        match request.method.as_str() {
            "initialize" => reply(self.initialize(), id),
            "notifications/initialized" => reply(json!({}), id),
            "tools/list" => reply(json!({ "tools": self.registry.list_all() }), id),
            "tools/call" => {
                let headers = ForwardHeaders::with_authorization(authorization);
                match self.call_tool(&request.params, &headers).await {
                    Ok(result) => reply(result, id),
                    Err(err) => reply_error(err, id),
                }
            }
            other => reply_error(
                McpError::method_not_found(format!("Method not found: {}", other)),
                id,
            ),
        }
    }

    fn initialize(&self) -> Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": SERVER_NAME,
                "version": env!("CARGO_PKG_VERSION"),
            }
        })
    }

    async fn call_tool(&self, params: &Value, headers: &ForwardHeaders) -> Result<Value, McpError> {
        let name = match params.get("name") {
            Some(Value::String(name)) if !name.is_empty() => name.as_str(),
            _ => return Err(McpError::invalid_params("Invalid params: missing tool name")),
        };

        Span::current().record("mcp_tool", name);

        let tool = self
            .registry
            .lookup(name)
            .ok_or_else(|| McpError::method_not_found(format!("Unknown tool: {}", name)))?;

        let arguments = match params.get("arguments") {
            None | Some(Value::Null) => json!({}),
            Some(arguments) => arguments.clone(),
        };

        let output = tool.call(&arguments, headers).await.map_err(|e| {
            let message = e.to_string();
            warn!(tool = %name, "Tool execution failed: {}", message);
            Span::current().record("error", message.as_str());
            McpError::internal_error(format!("Tool execution failed: {}", message))
        })?;

        let text = serde_json::to_string_pretty(&output).map_err(|e| {
            error!(tool = %name, "Failed to serialize tool output: {}", e);
            McpError::internal_error("Internal error")
        })?;

        Ok(json!({
            "content": [
                {
                    "type": "text",
                    "text": text
                }
            ]
        }))
    }
}

fn reply(result: Value, id: Value) -> (StatusCode, McpResponse) {
    (StatusCode::OK, McpResponse::success(result, id))
}

fn reply_error(error: McpError, id: Value) -> (StatusCode, McpResponse) {
    (error.status(), McpResponse::error(error, id))
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
