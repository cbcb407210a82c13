//! EPL tools (`/epl/v1`)

use super::{date_range, dates, ids, paging, per_page, season, Sport};
use crate::mcp::schema::{array, number, object, string, ObjectSchema};
use crate::mcp::tool::ToolDefinition;

const TEAM_STATS: &[&str] = &[
    "wins",
    "losses",
    "touches",
    "own_goals",
    "total_yel_card",
    "total_red_card",
    "goals",
    "total_pass",
    "total_scoring_att",
    "total_offside",
    "hit_woodwork",
    "big_chance_missed",
    "total_tackle",
    "total_clearance",
    "clearance_off_line",
    "dispossessed",
    "clean_sheet",
    "saves",
    "penalty_save",
    "total_high_claim",
    "punches",
];

const PLAYER_STATS: &[&str] = &[
    "goals",
    "goal_assist",
    "clean_sheet",
    "appearances",
    "mins_played",
    "yellow_card",
    "red_card",
    "total_pass",
    "touches",
    "total_scoring_att",
    "hit_woodwork",
    "big_chance_missed",
    "total_offside",
    "total_tackle",
    "fouls",
    "dispossessed",
    "own_goals",
    "total_clearance",
    "clearance_off_line",
    "saves",
    "penalty_save",
    "total_high_claim",
    "punches",
];

fn season_stats(what: &str, stats: &[&str]) -> ObjectSchema {
    object()
        .required_property("id", number().describe(&format!("The ID of the {}", what)))
        .property("season", season())
        .property(
            "stat_types",
            array(string().one_of(stats)).describe("Types of statistics to retrieve"),
        )
}

fn leaders(stats: &[&str]) -> ObjectSchema {
    object()
        .property("season", season())
        .property(
            "type",
            string().one_of(stats).describe("Type of statistic to get leaders for"),
        )
        .property("per_page", per_page())
}

fn game(description: &str) -> ObjectSchema {
    object().required_property("id", number().describe(description))
}

pub(crate) fn tools(sport: &Sport) -> Vec<ToolDefinition> {
    vec![
        sport.tool(
            "epl_get_teams",
            "Get all EPL teams",
            "/teams",
            object()
                .property("season", number().describe("Season year (required for current data)"))
                .extend(paging()),
        ),
        sport.tool(
            "epl_get_team_players",
            "Get players for a specific EPL team",
            "/teams/{id}/players",
            object()
                .required_property("id", number().describe("The ID of the team"))
                .extend(paging()),
        ),
        sport.tool(
            "epl_get_team_season_stats",
            "Get season statistics for a specific EPL team",
            "/teams/{id}/season_stats",
            season_stats("team", TEAM_STATS),
        ),
        sport.tool(
            "epl_get_team_stats_leaders",
            "Get EPL team statistical leaders",
            "/team_stats/leaders",
            leaders(TEAM_STATS),
        ),
        sport.tool(
            "epl_get_standings",
            "Get EPL team standings",
            "/standings",
            object().property("season", season()),
        ),
        sport.tool(
            "epl_get_players",
            "Get EPL players with optional filtering and pagination",
            "/players",
            object()
                .required_property("season", number().describe("Season year (required)"))
                .property("search", string().describe("Search players by name"))
                .property("team_ids", ids("Filter by team IDs"))
                .property("player_ids", ids("Filter by specific player IDs"))
                .property("position", string().describe("Filter by player position"))
                .extend(paging()),
        ),
        sport.tool(
            "epl_get_player_season_stats",
            "Get season statistics for a specific EPL player",
            "/players/{id}/season_stats",
            season_stats("player", PLAYER_STATS),
        ),
        sport.tool(
            "epl_get_player_stats_leaders",
            "Get EPL player statistical leaders",
            "/player_stats/leaders",
            leaders(PLAYER_STATS),
        ),
        sport.tool(
            "epl_get_games",
            "Get EPL games with optional filtering by date, season, team, etc.",
            "/games",
            object()
                .property("dates", dates("Filter by specific dates (YYYY-MM-DD format)"))
                .property("seasons", ids("Filter by seasons"))
                .property("team_ids", ids("Filter by team IDs"))
                .property("weeks", ids("Filter by week numbers"))
                .extend(date_range())
                .extend(paging()),
        ),
        sport.tool(
            "epl_get_game_lineups",
            "Get lineups for a specific EPL game",
            "/games/{id}/lineups",
            game("The ID of the game"),
        ),
        sport.tool(
            "epl_get_game_goals",
            "Get goals scored in a specific EPL game",
            "/games/{id}/goals",
            game("The ID of the game"),
        ),
        sport.tool(
            "epl_get_game_team_stats",
            "Get team statistics for a specific EPL game",
            "/games/{id}/team_stats",
            game("The ID of the game"),
        ),
        sport.tool(
            "epl_get_game_player_stats",
            "Get player statistics for a specific EPL game",
            "/games/{id}/player_stats",
            game("The ID of the game"),
        ),
    ]
}
