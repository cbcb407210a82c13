//! MCP (Model Context Protocol) implementation
//!
//! JSON-RPC 2.0 envelope types plus the pieces that turn a `tools/call`
//! into a sports API request: schemas, tools, the registry, response
//! shaping and the dispatcher tying them together.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod dispatcher;
pub mod registry;
pub mod schema;
pub mod shaper;
pub mod tool;

pub use dispatcher::{Dispatcher, RequestContext};
pub use registry::ToolRegistry;
pub use schema::ParameterSchema;
pub use shaper::{Shaping, ToolOutput};
pub use tool::{EndpointHandler, ToolDefinition, ToolHandler};

/// Protocol version announced by `initialize`
pub const PROTOCOL_VERSION: &str = "2024-11-05";

pub const JSONRPC_VERSION: &str = "2.0";

pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;
pub const UNAUTHORIZED: i32 = -32001;

/// MCP JSON-RPC request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub params: Value,
    /// Opaque correlator, echoed back verbatim
    #[serde(default)]
    pub id: Value,
}

/// MCP JSON-RPC response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
    pub id: Value,
}

impl McpResponse {
    /// Create a successful response
    pub fn success(result: Value, id: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Create an error response
    pub fn error(error: McpError, id: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: None,
            error: Some(error),
            id,
        }
    }
}

/// MCP error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl McpError {
    fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn parse_error() -> Self {
        Self::new(PARSE_ERROR, "Parse error")
    }

    pub fn invalid_request() -> Self {
        Self::new(INVALID_REQUEST, "Invalid Request")
    }

    pub fn unauthorized() -> Self {
        Self::new(UNAUTHORIZED, "Unauthorized: Authorization header required")
    }

    pub fn method_not_found(message: impl Into<String>) -> Self {
        Self::new(METHOD_NOT_FOUND, message)
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(INVALID_PARAMS, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(INTERNAL_ERROR, message)
    }

    /// HTTP status the error is delivered with
    pub fn status(&self) -> StatusCode {
        match self.code {
            PARSE_ERROR | INVALID_REQUEST | INVALID_PARAMS => StatusCode::BAD_REQUEST,
            UNAUTHORIZED => StatusCode::UNAUTHORIZED,
            METHOD_NOT_FOUND => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_has_exactly_one_of_result_or_error() {
        let ok = serde_json::to_value(McpResponse::success(json!({}), json!(1))).unwrap();
        assert_eq!(ok, json!({"jsonrpc": "2.0", "result": {}, "id": 1}));

        let err = serde_json::to_value(McpResponse::error(
            McpError::method_not_found("Method not found: ping"),
            json!("abc"),
        ))
        .unwrap();
        assert_eq!(
            err,
            json!({
                "jsonrpc": "2.0",
                "error": {"code": -32601, "message": "Method not found: ping"},
                "id": "abc"
            })
        );
    }

    #[test]
    fn test_null_id_is_serialized() {
        let response = McpResponse::error(McpError::parse_error(), Value::Null);
        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value["id"], Value::Null);
        assert!(value.as_object().unwrap().contains_key("id"));
    }

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(McpError::parse_error().status(), StatusCode::BAD_REQUEST);
        assert_eq!(McpError::invalid_request().status(), StatusCode::BAD_REQUEST);
        assert_eq!(McpError::unauthorized().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(McpError::invalid_params("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(McpError::method_not_found("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            McpError::internal_error("x").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
