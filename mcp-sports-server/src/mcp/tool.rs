//! MCP Tool definitions

use std::fmt;
use std::sync::{Arc, OnceLock};

use serde_json::{json, Map, Value};

use super::schema::{ArgumentValidator, ParameterSchema};
use super::shaper::{Shaping, ToolOutput};
use crate::backend::query::{encode_component, render_value};
use crate::backend::{BackendResult, ForwardHeaders, SportsBackend};
use crate::error::ToolError;

/// The single capability behind every tool
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    async fn invoke(
        &self,
        arguments: Map<String, Value>,
        headers: &ForwardHeaders,
    ) -> Result<BackendResult, ToolError>;
}

/// Forwards arguments to one fixed sports API endpoint.
///
/// `{name}` placeholders in the endpoint template are filled from (and
/// removed from) the arguments; whatever remains goes out as query
/// parameters.
pub struct EndpointHandler {
    backend: Arc<dyn SportsBackend>,
    endpoint: String,
    defaults: Map<String, Value>,
}

impl EndpointHandler {
    pub fn new(backend: Arc<dyn SportsBackend>, endpoint: impl Into<String>) -> Self {
        Self {
            backend,
            endpoint: endpoint.into(),
            defaults: Map::new(),
        }
    }

    /// Argument applied when the caller leaves it out
    pub fn with_default(mut self, name: &str, value: Value) -> Self {
        self.defaults.insert(name.to_string(), value);
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Substitute path placeholders, consuming them from `arguments`
    fn resolve_path(&self, arguments: &mut Map<String, Value>) -> Result<String, ToolError> {
        let mut path = String::with_capacity(self.endpoint.len());
        let mut rest = self.endpoint.as_str();

        while let Some(open) = rest.find('{') {
            let close = rest[open..]
                .find('}')
                .map(|offset| open + offset)
                .ok_or_else(|| ToolError::MissingPathParameter(rest[open + 1..].to_string()))?;
            let name = &rest[open + 1..close];

            let value = arguments
                .remove(name)
                .as_ref()
                .and_then(render_value)
                .ok_or_else(|| ToolError::MissingPathParameter(name.to_string()))?;

            path.push_str(&rest[..open]);
            path.push_str(&encode_component(&value));
            rest = &rest[close + 1..];
        }

        path.push_str(rest);
        Ok(path)
    }
}

#[async_trait::async_trait]
impl ToolHandler for EndpointHandler {
    async fn invoke(
        &self,
        mut arguments: Map<String, Value>,
        headers: &ForwardHeaders,
    ) -> Result<BackendResult, ToolError> {
        for (name, value) in &self.defaults {
            if arguments.get(name).map_or(true, Value::is_null) {
                arguments.insert(name.clone(), value.clone());
            }
        }

        let path = self.resolve_path(&mut arguments)?;
        Ok(self.backend.request(&path, &arguments, headers).await?)
    }
}

/// A named, schema-described tool
pub struct ToolDefinition {
    /// Tool name (e.g., "nba_get_teams")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Argument contract, advertised and enforced
    pub schema: ParameterSchema,
    /// Post-processing applied to the handler's result
    pub shaping: Shaping,
    handler: Arc<dyn ToolHandler>,
    validator: OnceLock<ArgumentValidator>,
}

impl ToolDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schema: impl Into<ParameterSchema>,
        handler: Arc<dyn ToolHandler>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schema: schema.into(),
            shaping: Shaping::None,
            handler,
            validator: OnceLock::new(),
        }
    }

    pub fn with_shaping(mut self, shaping: Shaping) -> Self {
        self.shaping = shaping;
        self
    }

    /// Entry for `tools/list`
    pub fn descriptor(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "inputSchema": self.schema.to_json(),
        })
    }

    /// Compiled form of `schema`, built on first use
    pub fn validator(&self) -> Result<&ArgumentValidator, ToolError> {
        if let Some(validator) = self.validator.get() {
            return Ok(validator);
        }
        let compiled = self.schema.compile().map_err(ToolError::InvalidSchema)?;
        Ok(self.validator.get_or_init(|| compiled))
    }

    /// Validate, invoke and shape
    pub async fn call(
        &self,
        arguments: &Value,
        headers: &ForwardHeaders,
    ) -> Result<ToolOutput, ToolError> {
        let mut arguments = arguments.clone();
        if let Value::Object(members) = &mut arguments {
            self.schema.normalize_dates(members);
        }
        self.validator()?.validate(&arguments)?;

        let mut arguments = match arguments {
            Value::Object(members) => members,
            _ => Map::new(),
        };
        let context = self.shaping.prepare(&mut arguments);
        let result = self.handler.invoke(arguments, headers).await?;

        Ok(self.shaping.apply(result, &context))
    }
}

impl fmt::Debug for ToolDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDefinition")
            .field("name", &self.name)
            .field("shaping", &self.shaping)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::StaticBackend;
    use crate::error::GatewayError;
    use crate::mcp::schema::{number, object, string};

    fn handler(backend: &Arc<StaticBackend>, endpoint: &str) -> EndpointHandler {
        EndpointHandler::new(backend.clone() as Arc<dyn SportsBackend>, endpoint)
    }

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_path_placeholder_is_substituted() {
        let backend = Arc::new(StaticBackend::with_payload(json!({"data": {"id": 1}})));
        let handler = handler(&backend, "/epl/v1/teams/{id}/season_stats");

        handler
            .invoke(args(json!({"id": 12, "season": 2024})), &ForwardHeaders::default())
            .await
            .unwrap();

        let call = backend.last_call().unwrap();
        assert_eq!(call.endpoint, "/epl/v1/teams/12/season_stats");
        assert_eq!(call.params, args(json!({"season": 2024})));
    }

    #[tokio::test]
    async fn test_integral_float_path_parameter() {
        let backend = Arc::new(StaticBackend::with_payload(json!({"data": {"id": 1}})));
        let tool = ToolDefinition::new(
            "nba_get_team_by_id",
            "Get a specific NBA team by ID",
            object().required_property("id", number()),
            Arc::new(handler(&backend, "/v1/teams/{id}")),
        );

        tool.call(&json!({"id": 1.0}), &ForwardHeaders::default())
            .await
            .unwrap();
        assert_eq!(backend.last_call().unwrap().endpoint, "/v1/teams/1");
    }

    #[tokio::test]
    async fn test_path_parameter_is_percent_encoded() {
        let backend = Arc::new(StaticBackend::with_payload(json!({})));
        handler(&backend, "/v1/season_averages/{category}")
            .invoke(args(json!({"category": "a b/c"})), &ForwardHeaders::default())
            .await
            .unwrap();
        assert_eq!(backend.last_call().unwrap().endpoint, "/v1/season_averages/a%20b%2Fc");
    }

    #[tokio::test]
    async fn test_declared_dates_are_normalized_before_forwarding() {
        let backend = Arc::new(StaticBackend::with_payload(json!({"data": []})));
        let tool = ToolDefinition::new(
            "nba_get_games",
            "Get NBA games",
            object()
                .property("start_date", string().date())
                .property("search", string()),
            Arc::new(handler(&backend, "/v1/games")),
        );

        tool.call(
            &json!({"start_date": "2024-01-15T18:30:00Z", "search": "2024-01-15T18:30:00Z"}),
            &ForwardHeaders::default(),
        )
        .await
        .unwrap();

        let params = backend.last_call().unwrap().params;
        assert_eq!(params["start_date"], json!("2024-01-15"));
        assert_eq!(params["search"], json!("2024-01-15T18:30:00Z"));
    }

    #[test]
    fn test_validator_is_compiled_once() {
        let backend = Arc::new(StaticBackend::with_payload(json!({})));
        let tool = ToolDefinition::new(
            "nba_get_teams",
            "Get NBA teams",
            object(),
            Arc::new(handler(&backend, "/v1/teams")),
        );
        let first = tool.validator().unwrap() as *const ArgumentValidator;
        let second = tool.validator().unwrap() as *const ArgumentValidator;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_missing_path_parameter() {
        let backend = Arc::new(StaticBackend::with_payload(json!({})));
        let err = handler(&backend, "/v1/teams/{id}")
            .invoke(Map::new(), &ForwardHeaders::default())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Missing path parameter: id");
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_defaults_fill_absent_arguments() {
        let backend = Arc::new(StaticBackend::with_payload(json!({"data": []})));
        let handler = handler(&backend, "/v1/season_averages/{category}")
            .with_default("season_type", json!("regular"));

        handler
            .invoke(
                args(json!({"category": "general", "season": 2024})),
                &ForwardHeaders::default(),
            )
            .await
            .unwrap();
        let call = backend.last_call().unwrap();
        assert_eq!(call.endpoint, "/v1/season_averages/general");
        assert_eq!(call.params["season_type"], json!("regular"));

        handler
            .invoke(
                args(json!({"category": "general", "season_type": "playoffs"})),
                &ForwardHeaders::default(),
            )
            .await
            .unwrap();
        assert_eq!(backend.last_call().unwrap().params["season_type"], json!("playoffs"));
    }

    #[tokio::test]
    async fn test_call_validates_before_invoking() {
        let backend = Arc::new(StaticBackend::with_payload(json!({"data": []})));
        let tool = ToolDefinition::new(
            "nba_get_team_by_id",
            "Get a specific NBA team by ID",
            object().required_property("id", number()),
            Arc::new(handler(&backend, "/v1/teams/{id}")),
        );

        let err = tool
            .call(&json!({"id": "one"}), &ForwardHeaders::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::Schema(_)));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_call_forwards_authorization() {
        let backend = Arc::new(StaticBackend::with_payload(json!({"data": {"id": 1}})));
        let tool = ToolDefinition::new(
            "nba_get_team_by_id",
            "Get a specific NBA team by ID",
            object().required_property("id", number()),
            Arc::new(handler(&backend, "/v1/teams/{id}")),
        );

        let output = tool
            .call(&json!({"id": 1}), &ForwardHeaders::with_authorization("secret"))
            .await
            .unwrap();

        assert_eq!(output.data, json!({"id": 1}));
        assert_eq!(
            backend.last_call().unwrap().headers.authorization.as_deref(),
            Some("secret")
        );
    }

    #[tokio::test]
    async fn test_gateway_failure_propagates() {
        let backend = Arc::new(StaticBackend::failing(GatewayError::Api {
            status: 404,
            message: "Not Found".to_string(),
        }));
        let tool = ToolDefinition::new(
            "nba_get_teams",
            "Get NBA teams",
            object().property("conference", string().one_of(&["East", "West"])),
            Arc::new(handler(&backend, "/v1/teams")),
        );

        let err = tool.call(&json!({}), &ForwardHeaders::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "API Error (404): Not Found");
    }

    #[test]
    fn test_descriptor() {
        let backend = Arc::new(StaticBackend::with_payload(json!({})));
        let tool = ToolDefinition::new(
            "nba_get_teams",
            "Get NBA teams",
            object(),
            Arc::new(handler(&backend, "/v1/teams")),
        );

        assert_eq!(
            tool.descriptor(),
            json!({
                "name": "nba_get_teams",
                "description": "Get NBA teams",
                "inputSchema": {"type": "object", "properties": {}, "additionalProperties": false}
            })
        );
    }
}
