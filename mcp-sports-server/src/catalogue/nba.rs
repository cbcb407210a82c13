//! NBA tools (`/v1`)

use serde_json::json;

use super::{by_id, date, date_range, dates, ids, injuries, paging, player_search, season, Sport};
use crate::mcp::schema::{boolean, number, object, string, ObjectSchema};
use crate::mcp::shaper::Shaping;
use crate::mcp::tool::ToolDefinition;

const DIVISIONS: &[&str] = &["Atlantic", "Central", "Southeast", "Northwest", "Pacific", "Southwest"];
const CONFERENCES: &[&str] = &["East", "West"];

const AVERAGE_CATEGORIES: &[&str] = &["general", "shooting", "defending", "playmaking", "efficiency", "misc"];
const LEADER_STATS: &[&str] = &["reb", "dreb", "tov", "ast", "oreb", "min", "pts", "stl", "blk"];

fn stats() -> ObjectSchema {
    object()
        .property("player_ids", ids("Filter by player IDs"))
        .property("game_ids", ids("Filter by game IDs"))
        .property("dates", dates("Filter by specific dates"))
        .property("seasons", ids("Filter by seasons"))
        .property("postseason", boolean().describe("Filter for postseason stats"))
        .extend(date_range())
        .extend(paging())
}

fn box_scores() -> ObjectSchema {
    object().required_property("date", date("Date in YYYY-MM-DD format"))
}

pub(crate) fn tools(sport: &Sport) -> Vec<ToolDefinition> {
    vec![
        sport.tool(
            "nba_get_teams",
            "Get all NBA teams with optional filtering by division or conference",
            "/teams",
            object()
                .property("division", string().one_of(DIVISIONS).describe("Filter teams by division"))
                .property(
                    "conference",
                    string().one_of(CONFERENCES).describe("Filter teams by conference"),
                ),
        ),
        sport.tool("nba_get_team_by_id", "Get a specific NBA team by ID", "/teams/{id}", by_id("team")),
        sport.tool(
            "nba_get_players",
            "Get NBA players with optional filtering and pagination",
            "/players",
            player_search(),
        ),
        sport.tool(
            "nba_get_player_by_id",
            "Get a specific NBA player by ID",
            "/players/{id}",
            by_id("player"),
        ),
        sport.tool(
            "nba_get_active_players",
            "Get all currently active NBA players",
            "/players/active",
            player_search(),
        ),
        sport.tool(
            "nba_get_games",
            "Get NBA games with optional filtering by date, season, team, etc.",
            "/games",
            object()
                .property("dates", dates("Filter by specific dates (YYYY-MM-DD format)"))
                .property("seasons", ids("Filter by seasons"))
                .property("team_ids", ids("Filter by team IDs"))
                .property("postseason", boolean().describe("Filter for postseason games"))
                .extend(date_range())
                .extend(paging()),
        ),
        sport.tool("nba_get_game_by_id", "Get a specific NBA game by ID", "/games/{id}", by_id("game")),
        sport.tool(
            "nba_get_stats",
            "Get NBA player and game statistics with filtering options",
            "/stats",
            stats(),
        ),
        sport.tool_with(
            "nba_get_season_averages",
            "Get NBA player season averages by category and type",
            sport
                .endpoint("/season_averages/{category}")
                .with_default("season_type", json!("regular")),
            object()
                .required_property(
                    "category",
                    string()
                        .one_of(AVERAGE_CATEGORIES)
                        .describe("Category of season averages"),
                )
                .required_property("season", season())
                .property(
                    "season_type",
                    string()
                        .one_of(&["regular", "playoffs"])
                        .default_value("regular")
                        .describe("Season type (regular or playoffs)"),
                )
                .required_property(
                    "type",
                    string().describe(
                        "Type of stats (varies by category, e.g. 'base' for general, '5ft_range' for shooting)",
                    ),
                )
                .property("player_ids", ids("Filter by player IDs")),
        ),
        sport.tool(
            "nba_get_advanced_stats",
            "Get NBA advanced statistics and analytics",
            "/stats/advanced",
            stats(),
        ),
        sport.tool(
            "nba_get_box_scores",
            "Get NBA game box scores with detailed player statistics",
            "/box_scores",
            box_scores(),
        ),
        sport.tool(
            "nba_get_live_box_scores",
            "Get live NBA game box scores for ongoing games",
            "/box_scores/live",
            box_scores(),
        ),
        sport.tool(
            "nba_get_standings",
            "Get NBA team standings by season, conference, or division",
            "/standings",
            object()
                .property("season", season())
                .property("conference", string().one_of(CONFERENCES).describe("Filter by conference"))
                .property("division", string().one_of(DIVISIONS).describe("Filter by division")),
        ),
        sport
            .tool(
                "nba_get_leaders",
                "Get NBA statistical leaders with cursor-based pagination",
                "/leaders",
                object()
                    .required_property("season", season())
                    .required_property(
                        "stat_type",
                        string()
                            .one_of(LEADER_STATS)
                            .describe("Type of statistic to get leaders for"),
                    )
                    .property(
                        "cursor",
                        number()
                            .min(0)
                            .describe("Cursor for pagination (starting index, 0-based)"),
                    )
                    .property(
                        "per_page",
                        number()
                            .min(1)
                            .max(100)
                            .default_value(25)
                            .describe("Number of results per page (max 100, default 25)"),
                    ),
            )
            .with_shaping(Shaping::cursor_paginate()),
        sport.tool(
            "nba_get_player_injuries",
            "Get NBA player injury reports and status",
            "/player_injuries",
            injuries(),
        ),
        sport.tool(
            "nba_get_betting_odds",
            "Get NBA betting odds and lines for games",
            "/odds",
            object()
                .property("dates", dates("Filter by specific dates (YYYY-MM-DD format)"))
                .property("game_ids", ids("Filter by game IDs"))
                .extend(paging()),
        ),
    ]
}
