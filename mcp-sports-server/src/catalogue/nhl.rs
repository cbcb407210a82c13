//! NHL tools (`/nhl/v1`)

use super::{by_id, dates, ids, paging, season, Sport};
use crate::mcp::schema::{boolean, number, object, string, ObjectSchema};
use crate::mcp::shaper::Shaping;
use crate::mcp::tool::ToolDefinition;

const PROP_TYPES: &[&str] = &[
    "anytime_goal",
    "anytime_goal_1p",
    "anytime_goal_2p",
    "anytime_goal_3p",
    "assists",
    "first_goal",
    "first_goal_2p",
    "first_goal_3p",
    "goals",
    "last_goal",
    "overtime_goal",
    "points",
    "points_1p",
    "points_2p",
    "points_3p",
    "power_play_points",
    "saves",
    "second_goal",
    "shots_on_goal",
    "shots_on_goal_1p",
    "shots_on_goal_2p",
    "shots_on_goal_3p",
    "third_goal",
];

fn season_stats(what: &str) -> ObjectSchema {
    object()
        .required_property("id", number().describe(&format!("The ID of the {}", what)))
        .required_property("season", season())
        .property("postseason", boolean().describe("Filter for postseason stats"))
}

fn leaders() -> ObjectSchema {
    object()
        .required_property("season", season())
        .required_property("type", string().describe("Type of statistic to get leaders for"))
        .property("postseason", boolean().describe("Filter for postseason stats"))
}

pub(crate) fn tools(sport: &Sport) -> Vec<ToolDefinition> {
    vec![
        sport.tool(
            "nhl_get_teams",
            "Get all NHL teams with optional filtering by conference or division",
            "/teams",
            object()
                .property("conference", string().describe("Filter teams by conference"))
                .property("division", string().describe("Filter teams by division"))
                .extend(paging()),
        ),
        sport.tool("nhl_get_team_by_id", "Get a specific NHL team by ID", "/teams/{id}", by_id("team")),
        sport.tool(
            "nhl_get_team_season_stats",
            "Get season statistics for a specific NHL team",
            "/teams/{id}/season_stats",
            season_stats("team"),
        ),
        sport.tool(
            "nhl_get_team_stats_leaders",
            "Get NHL team statistical leaders",
            "/team_stats/leaders",
            leaders(),
        ),
        sport.tool(
            "nhl_get_players",
            "Get NHL players with optional filtering and pagination",
            "/players",
            object()
                .property("player_ids", ids("Filter by specific player IDs"))
                .property("team_ids", ids("Filter by team IDs"))
                .property("name", string().describe("Filter by player name"))
                .property("seasons", ids("Filter by seasons"))
                .extend(paging()),
        ),
        sport.tool(
            "nhl_get_player_season_stats",
            "Get season statistics for a specific NHL player",
            "/players/{id}/season_stats",
            season_stats("player"),
        ),
        sport.tool(
            "nhl_get_player_stats_leaders",
            "Get NHL player statistical leaders",
            "/player_stats/leaders",
            leaders(),
        ),
        sport.tool(
            "nhl_get_games",
            "Get NHL games with optional filtering by date, season, team, etc.",
            "/games",
            object()
                .property("team_ids", ids("Filter by team IDs"))
                .property("dates", dates("Filter by specific dates (YYYY-MM-DD format)"))
                .property("seasons", ids("Filter by seasons"))
                .property("game_ids", ids("Filter by game IDs"))
                .property("postseason", boolean().describe("Filter for postseason games"))
                .extend(paging()),
        ),
        sport.tool(
            "nhl_get_standings",
            "Get NHL team standings by season, conference, or division",
            "/standings",
            object()
                .property("season", season())
                .property("conference", string().describe("Filter by conference"))
                .property("division", string().describe("Filter by division")),
        ),
        sport.tool(
            "nhl_get_box_scores",
            "Get NHL game box scores with detailed player and team statistics",
            "/box_scores",
            object()
                .property("player_ids", ids("Filter by player IDs"))
                .property("team_ids", ids("Filter by team IDs"))
                .property("dates", dates("Filter by specific dates"))
                .property("season", number().describe("Filter by season"))
                .property("game_ids", ids("Filter by game IDs"))
                .extend(paging()),
        ),
        sport.tool(
            "nhl_get_betting_odds",
            "Get NHL betting odds for games. Either dates or game_ids is required.",
            "/odds",
            object()
                .property("dates", dates("Filter by specific dates (YYYY-MM-DD format)"))
                .property("game_ids", ids("Filter by game IDs"))
                .extend(paging()),
        ),
        sport
            .tool(
                "nhl_get_player_props",
                "Get NHL player prop betting odds. Player prop data is LIVE and updated in real-time. \
                 Returns all player props for the specified game.",
                "/odds/player_props",
                object()
                    .required_property(
                        "game_id",
                        number().describe("The game ID to retrieve player props for (required)"),
                    )
                    .property("player_id", number().describe("Filter props for a specific player"))
                    .property("prop_type", string().one_of(PROP_TYPES).describe("Filter by prop type")),
            )
            .with_shaping(Shaping::truncate_unless("player_id")),
    ]
}
