//! NFL tools (`/nfl/v1`)

use super::{by_id, dates, ids, injuries, paging, player_search, season, strings, Sport};
use crate::mcp::schema::{boolean, number, object, string, ObjectSchema};
use crate::mcp::shaper::Shaping;
use crate::mcp::tool::ToolDefinition;

const PROP_TYPES: &[&str] = &[
    "anytime_td",
    "anytime_td_1h",
    "anytime_td_1q",
    "anytime_td_2h",
    "fg_made",
    "fg_made_1h",
    "first_td",
    "interceptions",
    "kicking_points",
    "longest_pass",
    "longest_reception",
    "longest_rush",
    "passing_attempts",
    "passing_completions",
    "passing_tds",
    "passing_tds_1h",
    "passing_yards",
    "passing_yards_1h",
    "receiving_yards",
    "receiving_yards_1h",
    "receptions",
    "rushing_attempts",
    "rushing_receiving_yards",
    "rushing_yards",
    "rushing_yards_1h",
];

fn players() -> ObjectSchema {
    player_search().property("position", string().describe("Filter by player position"))
}

fn advanced() -> ObjectSchema {
    object()
        .required_property("season", number().describe("Season year (required)"))
        .property("week", number().describe("Week number"))
        .property("player_id", number().describe("Filter by specific player ID"))
        .property("postseason", number().describe("Filter for postseason (0 or 1)"))
        .extend(paging())
}

pub(crate) fn tools(sport: &Sport) -> Vec<ToolDefinition> {
    vec![
        sport.tool(
            "nfl_get_teams",
            "Get all NFL teams with optional filtering by division or conference",
            "/teams",
            object()
                .property(
                    "division",
                    string()
                        .one_of(&["NORTH", "SOUTH", "EAST", "WEST"])
                        .describe("Filter teams by division"),
                )
                .property(
                    "conference",
                    string().one_of(&["AFC", "NFC"]).describe("Filter teams by conference"),
                ),
        ),
        sport.tool("nfl_get_team_by_id", "Get a specific NFL team by ID", "/teams/{id}", by_id("team")),
        sport.tool(
            "nfl_get_players",
            "Get NFL players with optional filtering and pagination",
            "/players",
            players(),
        ),
        sport.tool(
            "nfl_get_player_by_id",
            "Get a specific NFL player by ID",
            "/players/{id}",
            by_id("player"),
        ),
        sport.tool(
            "nfl_get_active_players",
            "Get all currently active NFL players",
            "/players/active",
            players(),
        ),
        sport.tool(
            "nfl_get_games",
            "Get NFL games with optional filtering by date, season, week, team, etc.",
            "/games",
            object()
                .property("dates", dates("Filter by specific dates (YYYY-MM-DD format)"))
                .property("team_ids", ids("Filter by team IDs"))
                .property("seasons", ids("Filter by seasons"))
                .property("postseason", boolean().describe("Filter for postseason games"))
                .property("weeks", ids("Filter by week numbers"))
                .extend(paging()),
        ),
        sport.tool("nfl_get_game_by_id", "Get a specific NFL game by ID", "/games/{id}", by_id("game")),
        sport.tool(
            "nfl_get_stats",
            "Get NFL player and game statistics with filtering options",
            "/stats",
            object()
                .property("player_ids", ids("Filter by player IDs"))
                .property("game_ids", ids("Filter by game IDs"))
                .property("seasons", ids("Filter by seasons"))
                .extend(paging()),
        ),
        sport.tool(
            "nfl_get_season_stats",
            "Get NFL player season statistics",
            "/season_stats",
            object()
                .required_property("season", season())
                .property("player_ids", ids("Filter by player IDs"))
                .property("team_id", number().describe("Filter by team ID"))
                .property("postseason", boolean().describe("Filter for postseason stats"))
                .property("sort_by", string().describe("Sort by field"))
                .property("sort_order", string().describe("Sort order (asc or desc)")),
        ),
        sport.tool(
            "nfl_get_standings",
            "Get NFL team standings by season, conference, or division",
            "/standings",
            object().required_property("season", season()),
        ),
        sport.tool(
            "nfl_get_player_injuries",
            "Get NFL player injury reports and status",
            "/player_injuries",
            injuries(),
        ),
        sport.tool(
            "nfl_get_advanced_rushing_stats",
            "Get NFL advanced rushing statistics and analytics",
            "/advanced_stats/rushing",
            advanced(),
        ),
        sport.tool(
            "nfl_get_advanced_passing_stats",
            "Get NFL advanced passing statistics and analytics",
            "/advanced_stats/passing",
            advanced(),
        ),
        sport.tool(
            "nfl_get_advanced_receiving_stats",
            "Get NFL advanced receiving statistics and analytics",
            "/advanced_stats/receiving",
            advanced(),
        ),
        sport.tool(
            "nfl_get_betting_odds",
            "Get NFL betting odds for games. Either (season and week) or game_ids is required. \
             Available starting from 2025 season, week 8 onwards.",
            "/odds",
            object()
                .property("season", number().describe("Filter by season (must be provided with week)"))
                .property("week", number().describe("Filter by week (must be provided with season)"))
                .property("game_ids", ids("Filter by game IDs"))
                .extend(paging()),
        ),
        sport.tool(
            "nfl_get_team_season_stats",
            "Get NFL team season stats including offense, defense, special teams, and opponent stats",
            "/team_season_stats",
            object()
                .required_property("team_ids", ids("Filter by team IDs (required)"))
                .required_property("season", number().describe("Filter by season (required)"))
                .property(
                    "postseason",
                    boolean().describe("Filter for postseason stats (true) or regular season (false)"),
                )
                .extend(paging()),
        ),
        sport.tool(
            "nfl_get_team_stats",
            "Get NFL team game statistics for individual games",
            "/team_stats",
            object()
                .property("team_ids", ids("Filter by team IDs"))
                .property("seasons", ids("Filter by seasons"))
                .property("game_ids", ids("Filter by game IDs"))
                .extend(paging()),
        ),
        sport.tool(
            "nfl_get_plays",
            "Get NFL play-by-play data for games, ordered chronologically by wallclock time",
            "/plays",
            object()
                .required_property("game_id", number().describe("Filter by game ID (required)"))
                .extend(paging()),
        ),
        sport.tool(
            "nfl_get_team_roster",
            "Get NFL team roster with depth chart information. \
             Roster data is only available starting with the 2025 season.",
            "/teams/{id}/roster",
            object()
                .required_property("id", number().describe("Team ID (required)"))
                .property(
                    "season",
                    number().describe("Season year (defaults to most recent season)"),
                ),
        ),
        sport
            .tool(
                "nfl_get_player_props",
                "Get NFL player prop betting odds. Player prop data is LIVE and updated in real-time. \
                 Returns all player props for the specified game.",
                "/odds/player_props",
                object()
                    .required_property(
                        "game_id",
                        number().describe("The game ID to retrieve player props for (required)"),
                    )
                    .property("player_id", number().describe("Filter props for a specific player"))
                    .property("prop_type", string().one_of(PROP_TYPES).describe("Filter by prop type"))
                    .property(
                        "vendors",
                        strings("Filter by specific sportsbook vendors (e.g., draftkings, betrivers)"),
                    ),
            )
            .with_shaping(Shaping::truncate_unless("player_id")),
    ]
}
