//! Error types for mcp-sports-server

use thiserror::Error;

/// Result type alias for startup and server operations
pub type Result<T> = std::result::Result<T, ServerError>;

/// Errors that prevent the server from starting
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Two catalogues declared the same tool name
    #[error("Registry error: duplicate tool name '{0}'")]
    Registry(String),

    #[error("Tool '{tool}' has an unusable schema: {message}")]
    Schema { tool: String, message: String },
}

impl From<config::ConfigError> for ServerError {
    fn from(err: config::ConfigError) -> Self {
        ServerError::Config(err.to_string())
    }
}

/// Failure talking to the upstream sports API.
///
/// The display strings are part of the tool-call contract: they end up
/// verbatim in `"Tool execution failed: ..."` messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Upstream answered with a non-2xx status
    #[error("API Error ({status}): {message}")]
    Api { status: u16, message: String },

    /// No response was received (DNS, connect, timeout)
    #[error("Unable to connect to the sports API")]
    Connect,

    /// Anything else (malformed URL, body read failure, ...)
    #[error("{}", other_message(.0))]
    Other(String),
}

fn other_message(message: &str) -> &str {
    if message.is_empty() {
        "Unknown error occurred"
    } else {
        message
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() || err.is_request() {
            GatewayError::Connect
        } else {
            GatewayError::Other(err.to_string())
        }
    }
}

/// Tool arguments do not satisfy the tool's parameter schema
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid arguments: {path}: {reason}")]
pub struct SchemaViolation {
    /// Location of the offending value, e.g. `arguments.per_page`
    pub path: String,
    /// Which rule was broken
    pub reason: String,
}

impl SchemaViolation {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Failure while executing a tool
#[derive(Error, Debug)]
pub enum ToolError {
    #[error(transparent)]
    Schema(#[from] SchemaViolation),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// Endpoint template references an argument the caller did not send
    #[error("Missing path parameter: {0}")]
    MissingPathParameter(String),

    #[error("Tool schema could not be compiled: {0}")]
    InvalidSchema(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_error_messages() {
        let err = GatewayError::Api {
            status: 401,
            message: "Unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "API Error (401): Unauthorized");
        assert_eq!(
            GatewayError::Connect.to_string(),
            "Unable to connect to the sports API"
        );
        assert_eq!(GatewayError::Other(String::new()).to_string(), "Unknown error occurred");
        assert_eq!(GatewayError::Other("boom".into()).to_string(), "boom");
    }

    #[test]
    fn test_tool_error_is_transparent_for_gateway() {
        let err: ToolError = GatewayError::Connect.into();
        assert_eq!(err.to_string(), "Unable to connect to the sports API");
    }

    #[test]
    fn test_schema_violation_display() {
        let err = SchemaViolation::new("arguments.id", "required property is missing");
        assert_eq!(
            err.to_string(),
            "Invalid arguments: arguments.id: required property is missing"
        );
    }
}
