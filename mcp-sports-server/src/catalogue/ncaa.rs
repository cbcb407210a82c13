//! College football (`/ncaaf/v1`) and basketball (`/ncaab/v1`) tools.
//!
//! Both APIs expose the same resources; basketball adds tournament
//! brackets and betting odds, football requires a season for player
//! season stats.

use super::{by_id, date_range, dates, ids, paging, player_search, season, Sport};
use crate::mcp::schema::{number, object, string, ObjectSchema};
use crate::mcp::tool::ToolDefinition;

fn game_stats() -> ObjectSchema {
    object()
        .property("team_ids", ids("Filter by team IDs"))
        .property("game_ids", ids("Filter by game IDs"))
        .property("dates", dates("Filter by specific dates"))
        .property("seasons", ids("Filter by seasons"))
        .property("weeks", ids("Filter by week numbers"))
        .extend(date_range())
        .extend(paging())
}

fn shared(sport: &Sport, prefix: &str, label: &str, season_required: bool) -> Vec<ToolDefinition> {
    let name = |suffix: &str| format!("{}_{}", prefix, suffix);
    let players = player_search().property("position", string().describe("Filter by player position"));

    let mut player_season_stats = object()
        .property("season", season())
        .property("player_ids", ids("Filter by player IDs"))
        .property("team_ids", ids("Filter by team IDs"))
        .extend(paging());
    if season_required {
        player_season_stats = player_season_stats.require("season");
    }

    vec![
        sport.tool(
            &name("get_conferences"),
            &format!("Get all {} conferences", label),
            "/conferences",
            object(),
        ),
        sport.tool(
            &name("get_conference_by_id"),
            &format!("Get a specific {} conference by ID", label),
            "/conferences/{id}",
            by_id("conference"),
        ),
        sport.tool(
            &name("get_teams"),
            &format!("Get all {} teams with optional filtering", label),
            "/teams",
            object().property("conference", string().describe("Filter teams by conference")),
        ),
        sport.tool(
            &name("get_team_by_id"),
            &format!("Get a specific {} team by ID", label),
            "/teams/{id}",
            by_id("team"),
        ),
        sport.tool(
            &name("get_players"),
            &format!("Get {} players with optional filtering and pagination", label),
            "/players",
            players.clone(),
        ),
        sport.tool(
            &name("get_player_by_id"),
            &format!("Get a specific {} player by ID", label),
            "/players/{id}",
            by_id("player"),
        ),
        sport.tool(
            &name("get_active_players"),
            &format!("Get all currently active {} players", label),
            "/players/active",
            players,
        ),
        sport.tool(
            &name("get_standings"),
            &format!("Get {} team standings by season and conference", label),
            "/standings",
            object()
                .property("season", season())
                .property("conference_id", number().describe("Filter by conference ID")),
        ),
        sport.tool(
            &name("get_games"),
            &format!(
                "Get {} games with optional filtering by date, season, week, team, etc.",
                label
            ),
            "/games",
            object()
                .property("dates", dates("Filter by specific dates (YYYY-MM-DD format)"))
                .property("team_ids", ids("Filter by team IDs"))
                .property("seasons", ids("Filter by seasons"))
                .property("weeks", ids("Filter by week numbers"))
                .extend(date_range())
                .extend(paging()),
        ),
        sport.tool(
            &name("get_game_by_id"),
            &format!("Get a specific {} game by ID", label),
            "/games/{id}",
            by_id("game"),
        ),
        sport.tool(
            &name("get_rankings"),
            &format!("Get {} rankings by season and week", label),
            "/rankings",
            object()
                .property("season", season())
                .property("week", number().describe("Week number"))
                .extend(paging()),
        ),
        sport.tool(
            &name("get_plays"),
            &format!("Get {} play-by-play data for a specific game", label),
            "/plays",
            object().required_property("game_id", number().describe("Game ID (required)")),
        ),
        sport.tool(
            &name("get_player_stats"),
            &format!("Get {} player game statistics with filtering options", label),
            "/player_stats",
            game_stats().property("player_ids", ids("Filter by player IDs")),
        ),
        sport.tool(
            &name("get_team_stats"),
            &format!("Get {} team game statistics with filtering options", label),
            "/team_stats",
            game_stats(),
        ),
        sport.tool(
            &name("get_player_season_stats"),
            &format!("Get {} player season statistics", label),
            "/player_season_stats",
            player_season_stats,
        ),
        sport.tool(
            &name("get_team_season_stats"),
            &format!("Get {} team season statistics", label),
            "/team_season_stats",
            object()
                .required_property("season", number().describe("Season year (required)"))
                .property("team_ids", ids("Filter by team IDs"))
                .extend(paging()),
        ),
    ]
}

pub(crate) fn football(sport: &Sport) -> Vec<ToolDefinition> {
    shared(sport, "ncaaf", "NCAAF", true)
}

pub(crate) fn basketball(sport: &Sport) -> Vec<ToolDefinition> {
    let mut tools = shared(sport, "ncaab", "NCAAB", false);
    tools.push(sport.tool(
        "ncaab_get_brackets",
        "Get NCAAB tournament bracket information",
        "/brackets",
        object()
            .property("season", season())
            .property("round_id", number().describe("Filter by round ID"))
            .property("region_id", number().describe("Filter by region ID"))
            .extend(paging()),
    ));
    tools.push(sport.tool(
        "ncaab_get_betting_odds",
        "Get NCAAB betting odds for games. Either dates or game_ids is required.",
        "/odds",
        object()
            .property("dates", dates("Filter by specific dates (YYYY-MM-DD format)"))
            .property("game_ids", ids("Filter by game IDs"))
            .extend(paging()),
    ));
    tools
}
