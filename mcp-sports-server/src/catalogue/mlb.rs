//! MLB tools (`/mlb/v1`)

use super::{by_id, dates, ids, injuries, paging, player_search, season, Sport};
use crate::mcp::schema::{boolean, number, object, string, ObjectSchema};
use crate::mcp::tool::ToolDefinition;

fn players() -> ObjectSchema {
    player_search()
        .property("position", string().describe("Filter by player position"))
        .property("active", boolean().describe("Filter by active status"))
}

pub(crate) fn tools(sport: &Sport) -> Vec<ToolDefinition> {
    vec![
        sport.tool(
            "mlb_get_teams",
            "Get all MLB teams with optional filtering by division or league",
            "/teams",
            object()
                .property(
                    "division",
                    string()
                        .one_of(&["East", "Central", "West"])
                        .describe("Filter teams by division"),
                )
                .property(
                    "league",
                    string()
                        .one_of(&["American", "National"])
                        .describe("Filter teams by league"),
                ),
        ),
        sport.tool("mlb_get_team_by_id", "Get a specific MLB team by ID", "/teams/{id}", by_id("team")),
        sport.tool(
            "mlb_get_players",
            "Get MLB players with optional filtering and pagination",
            "/players",
            players(),
        ),
        sport.tool(
            "mlb_get_player_by_id",
            "Get a specific MLB player by ID",
            "/players/{id}",
            by_id("player"),
        ),
        sport.tool(
            "mlb_get_active_players",
            "Get all currently active MLB players",
            "/players/active",
            players(),
        ),
        sport.tool(
            "mlb_get_games",
            "Get MLB games with optional filtering by date, season, team, etc.",
            "/games",
            object()
                .property("dates", dates("Filter by specific dates (YYYY-MM-DD format)"))
                .property("team_ids", ids("Filter by team IDs"))
                .property("seasons", ids("Filter by seasons"))
                .property("postseason", boolean().describe("Filter for postseason games"))
                .extend(paging()),
        ),
        sport.tool("mlb_get_game_by_id", "Get a specific MLB game by ID", "/games/{id}", by_id("game")),
        // the upstream resource really is singular
        sport.tool(
            "mlb_get_stats",
            "Get MLB player and game statistics with filtering options",
            "/stat",
            object()
                .property("player_ids", ids("Filter by player IDs"))
                .property("game_ids", ids("Filter by game IDs"))
                .property("seasons", ids("Filter by seasons"))
                .extend(paging()),
        ),
        sport.tool(
            "mlb_get_season_stats",
            "Get MLB player season statistics",
            "/season_stats",
            object()
                .required_property("season", season())
                .property("player_ids", ids("Filter by player IDs"))
                .property("team_id", number().describe("Filter by team ID"))
                .property("postseason", boolean().describe("Filter for postseason stats"))
                .property("sort_by", string().describe("Sort by field"))
                .property("sort_order", string().describe("Sort order (asc or desc)"))
                .extend(paging()),
        ),
        sport.tool(
            "mlb_get_team_season_stats",
            "Get MLB team season statistics",
            "/teams/season_stats",
            object()
                .required_property("season", number().describe("Season year (required)"))
                .property("team_id", number().describe("Filter by specific team ID"))
                .property("postseason", boolean().describe("Filter for postseason stats"))
                .extend(paging()),
        ),
        sport.tool(
            "mlb_get_standings",
            "Get MLB team standings by season, league, or division",
            "/standings",
            object().required_property("season", season()),
        ),
        sport.tool(
            "mlb_get_player_injuries",
            "Get MLB player injury reports and status",
            "/player_injuries",
            injuries(),
        ),
    ]
}
