//! Per-sport tool catalogues
//!
//! Pure data: each sport lists its tools as (name, description, endpoint
//! template, parameter schema). The shared fragments below keep the
//! recurring argument shapes identical across sports.

use std::sync::Arc;

use crate::backend::SportsBackend;
use crate::mcp::schema::{array, number, object, string, ArraySchema, NumberSchema, ObjectSchema, StringSchema};
use crate::mcp::tool::{EndpointHandler, ToolDefinition};

mod epl;
mod mlb;
mod mma;
mod nba;
mod ncaa;
mod nfl;
mod nhl;
mod soccer;

/// Every tool of every sport, in a stable order
pub fn all(backend: Arc<dyn SportsBackend>) -> Vec<ToolDefinition> {
    let mut tools = Vec::new();
    tools.extend(nba::tools(&Sport::new(&backend, "/v1")));
    tools.extend(nfl::tools(&Sport::new(&backend, "/nfl/v1")));
    tools.extend(mlb::tools(&Sport::new(&backend, "/mlb/v1")));
    tools.extend(nhl::tools(&Sport::new(&backend, "/nhl/v1")));
    tools.extend(epl::tools(&Sport::new(&backend, "/epl/v1")));
    tools.extend(mma::tools(&Sport::new(&backend, "/mma/v1")));
    tools.extend(ncaa::football(&Sport::new(&backend, "/ncaaf/v1")));
    tools.extend(ncaa::basketball(&Sport::new(&backend, "/ncaab/v1")));
    for league in soccer::LEAGUES {
        let base = format!("/{}/v1", league.prefix);
        tools.extend(soccer::tools(&Sport::new(&backend, &base), league));
    }
    tools
}

/// Tool factory bound to one sport's endpoint prefix
pub(crate) struct Sport {
    backend: Arc<dyn SportsBackend>,
    base: String,
}

impl Sport {
    pub(crate) fn new(backend: &Arc<dyn SportsBackend>, base: &str) -> Self {
        Self {
            backend: backend.clone(),
            base: base.to_string(),
        }
    }

    /// Handler for `path` under this sport's prefix
    pub(crate) fn endpoint(&self, path: &str) -> EndpointHandler {
        EndpointHandler::new(self.backend.clone(), format!("{}{}", self.base, path))
    }

    /// Plain pass-through tool
    pub(crate) fn tool(&self, name: &str, description: &str, path: &str, schema: ObjectSchema) -> ToolDefinition {
        self.tool_with(name, description, self.endpoint(path), schema)
    }

    pub(crate) fn tool_with(
        &self,
        name: &str,
        description: &str,
        handler: EndpointHandler,
        schema: ObjectSchema,
    ) -> ToolDefinition {
        ToolDefinition::new(name, description, schema, Arc::new(handler))
    }
}

/// `cursor` + `per_page`
pub(crate) fn paging() -> ObjectSchema {
    object()
        .property("cursor", number().describe("Pagination cursor"))
        .property("per_page", per_page())
}

pub(crate) fn per_page() -> NumberSchema {
    number()
        .min(1)
        .max(100)
        .describe("Number of results per page (max 100)")
}

/// Single required numeric `id`
pub(crate) fn by_id(what: &str) -> ObjectSchema {
    object().required_property("id", number().describe(&format!("The ID of the {} to retrieve", what)))
}

pub(crate) fn ids(description: &str) -> ArraySchema {
    array(number()).describe(description)
}

pub(crate) fn strings(description: &str) -> ArraySchema {
    array(string()).describe(description)
}

pub(crate) fn dates(description: &str) -> ArraySchema {
    array(string().date()).describe(description)
}

pub(crate) fn date(description: &str) -> StringSchema {
    string().date().describe(description)
}

pub(crate) fn season() -> NumberSchema {
    number().describe("Season year")
}

/// Date range filter used by most game listings
pub(crate) fn date_range() -> ObjectSchema {
    object()
        .property("start_date", date("Start date for date range filter (YYYY-MM-DD)"))
        .property("end_date", date("End date for date range filter (YYYY-MM-DD)"))
}

/// Name search plus team/player filters shared by US league player listings
pub(crate) fn player_search() -> ObjectSchema {
    object()
        .property("search", string().describe("Search players by name"))
        .property("first_name", string().describe("Filter by first name"))
        .property("last_name", string().describe("Filter by last name"))
        .property("team_ids", ids("Filter by team IDs"))
        .property("player_ids", ids("Filter by specific player IDs"))
        .extend(paging())
}

pub(crate) fn injuries() -> ObjectSchema {
    object()
        .property("player_ids", ids("Filter by player IDs"))
        .property("team_ids", ids("Filter by team IDs"))
        .extend(paging())
}
