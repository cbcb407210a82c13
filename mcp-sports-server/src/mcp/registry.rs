//! Tool registry

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use super::tool::ToolDefinition;
use crate::error::{Result, ServerError};

/// Name → tool mapping, populated once at startup and read-only afterwards
#[derive(Default)]
pub struct ToolRegistry {
    /// Tools in registration order
    tools: Vec<Arc<ToolDefinition>>,
    /// Index into `tools` by name
    by_name: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a single tool; a second tool with the same name is refused
    pub fn register(&mut self, tool: ToolDefinition) -> Result<()> {
        if self.by_name.contains_key(&tool.name) {
            return Err(ServerError::Registry(tool.name));
        }
        if let Err(err) = tool.validator() {
            return Err(ServerError::Schema {
                tool: tool.name.clone(),
                message: err.to_string(),
            });
        }

        debug!("Registering tool: {}", tool.name);
        self.by_name.insert(tool.name.clone(), self.tools.len());
        self.tools.push(Arc::new(tool));
        Ok(())
    }

    /// Register every tool of a catalogue
    pub fn register_catalogue(&mut self, catalogue: Vec<ToolDefinition>) -> Result<()> {
        for tool in catalogue {
            self.register(tool)?;
        }
        Ok(())
    }

    /// Build a registry from catalogues in one go
    pub fn from_catalogue(catalogue: Vec<ToolDefinition>) -> Result<Self> {
        let mut registry = Self::new();
        registry.register_catalogue(catalogue)?;
        Ok(registry)
    }

    /// Exact, case-sensitive lookup
    pub fn lookup(&self, name: &str) -> Option<Arc<ToolDefinition>> {
        self.by_name
            .get(name)
            .and_then(|index| self.tools.get(*index))
            .cloned()
    }

    /// `tools/list` descriptors, in registration order
    pub fn list_all(&self) -> Vec<Value> {
        self.tools.iter().map(|tool| tool.descriptor()).collect()
    }

    pub fn tools(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.iter().map(|tool| tool.as_ref())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{SportsBackend, StaticBackend};
    use crate::mcp::schema::object;
    use crate::mcp::tool::EndpointHandler;
    use serde_json::json;

    fn tool(name: &str) -> ToolDefinition {
        let backend: Arc<dyn SportsBackend> = Arc::new(StaticBackend::with_payload(json!({})));
        ToolDefinition::new(
            name,
            format!("Tool {}", name),
            object(),
            Arc::new(EndpointHandler::new(backend, "/v1/teams")),
        )
    }

    #[test]
    fn test_register_and_lookup() {
        let registry =
            ToolRegistry::from_catalogue(vec![tool("nba_get_teams"), tool("nfl_get_teams")]).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup("nfl_get_teams").unwrap().name, "nfl_get_teams");
        assert!(registry.lookup("NBA_GET_TEAMS").is_none());
        assert!(registry.lookup("does_not_exist").is_none());
    }

    #[test]
    fn test_list_all_keeps_registration_order() {
        let registry = ToolRegistry::from_catalogue(vec![
            tool("mlb_get_teams"),
            tool("epl_get_teams"),
            tool("nba_get_teams"),
        ])
        .unwrap();

        let names: Vec<Value> = registry.list_all().into_iter().map(|d| d["name"].clone()).collect();
        assert_eq!(
            names,
            vec![json!("mlb_get_teams"), json!("epl_get_teams"), json!("nba_get_teams")]
        );
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let mut registry = ToolRegistry::new();
        registry.register(tool("nba_get_teams")).unwrap();

        let err = registry.register(tool("nba_get_teams")).unwrap_err();
        assert!(matches!(err, ServerError::Registry(ref name) if name == "nba_get_teams"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registered_tools_have_compiled_validators() {
        let registry = ToolRegistry::from_catalogue(vec![tool("nba_get_teams")]).unwrap();
        let tool = registry.lookup("nba_get_teams").unwrap();
        let validator = tool.validator().unwrap();
        assert!(validator.validate(&json!({})).is_ok());
        assert!(validator.validate(&json!({"unexpected": 1})).is_err());
    }

    #[test]
    fn test_empty_registry() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.list_all().is_empty());
    }
}
