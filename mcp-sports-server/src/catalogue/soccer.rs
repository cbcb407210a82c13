//! European soccer leagues sharing one API shape (`/<league>/v1`)

use super::{date_range, dates, ids, paging, Sport};
use crate::mcp::schema::{number, object, string, ObjectSchema};
use crate::mcp::shaper::Shaping;
use crate::mcp::tool::ToolDefinition;

pub(crate) struct League {
    /// Tool-name prefix and API path segment
    pub prefix: &'static str,
    /// Name used in descriptions
    pub label: &'static str,
    /// Only the Champions League publishes futures odds
    pub futures: bool,
}

pub(crate) const LEAGUES: &[League] = &[
    League { prefix: "laliga", label: "La Liga", futures: false },
    League { prefix: "seriea", label: "Serie A", futures: false },
    League { prefix: "bundesliga", label: "Bundesliga", futures: false },
    League { prefix: "ligue1", label: "Ligue 1", futures: false },
    League { prefix: "ucl", label: "UEFA Champions League", futures: true },
];

const PROP_TYPES: &[&str] = &[
    "anytime_goal",
    "assists",
    "first_goal",
    "first_half_goal",
    "goals_assists",
    "header_goal",
    "last_goal",
    "outside_box_goal",
    "saves",
    "second_half_goal",
    "shots",
    "shots_on_target",
    "tackles",
];

fn required_season() -> ObjectSchema {
    object().required_property("season", number().describe("Season year (required)"))
}

fn match_ids() -> ObjectSchema {
    object().property("match_ids", ids("Filter by match IDs"))
}

pub(crate) fn tools(sport: &Sport, league: &League) -> Vec<ToolDefinition> {
    let name = |suffix: &str| format!("{}_{}", league.prefix, suffix);
    let label = league.label;

    let mut tools = vec![
        sport.tool(
            &name("get_teams"),
            &format!("Get all {} teams for a given season", label),
            "/teams",
            required_season(),
        ),
        sport.tool(
            &name("get_rosters"),
            &format!(
                "Get {} team rosters with player information for a specific team and season",
                label
            ),
            "/rosters",
            object()
                .required_property("team_id", number().describe("Team ID (required)"))
                .property("season", number().describe("Season year"))
                .extend(paging()),
        ),
        sport.tool(
            &name("get_players"),
            &format!("Get {} players with optional filtering by team or search term", label),
            "/players",
            required_season()
                .property("team_ids", ids("Filter by team IDs"))
                .property("search", string().describe("Search players by name"))
                .extend(paging()),
        ),
        sport.tool(
            &name("get_standings"),
            &format!("Get {} standings for a specific season", label),
            "/standings",
            required_season(),
        ),
        sport.tool(
            &name("get_matches"),
            &format!(
                "Get {} matches with optional filtering by season, dates, or teams",
                label
            ),
            "/matches",
            object()
                .property("season", number().describe("Season year"))
                .property("team_ids", ids("Filter by team IDs"))
                .property("dates", dates("Filter by specific dates (YYYY-MM-DD format)"))
                .extend(date_range())
                .extend(paging()),
        ),
        sport.tool(
            &name("get_match_events"),
            &format!("Get {} match events (goals, cards, substitutions, etc.)", label),
            "/match_events",
            match_ids().extend(paging()),
        ),
        sport.tool(
            &name("get_match_lineups"),
            &format!("Get {} match lineups (starting and substitute players)", label),
            "/match_lineups",
            match_ids().extend(paging()),
        ),
        sport.tool(
            &name("get_player_match_stats"),
            &format!("Get {} player match statistics", label),
            "/player_match_stats",
            match_ids()
                .property("player_ids", ids("Filter by player IDs"))
                .extend(paging()),
        ),
        sport.tool(
            &name("get_team_match_stats"),
            &format!("Get {} team match statistics", label),
            "/team_match_stats",
            match_ids()
                .property("team_ids", ids("Filter by team IDs"))
                .extend(paging()),
        ),
        sport.tool(
            &name("get_betting_odds"),
            &format!(
                "Get {} betting odds for matches. Includes moneyline odds for home, away, and draw outcomes.",
                label
            ),
            "/odds",
            match_ids()
                .property("dates", dates("Filter by specific dates (YYYY-MM-DD format)"))
                .extend(paging()),
        ),
        sport
            .tool(
                &name("get_player_props"),
                &format!(
                    "Get {} player prop betting odds. Player prop data is LIVE and updated in real-time.",
                    label
                ),
                "/odds/player_props",
                object()
                    .required_property(
                        "match_id",
                        number().describe("The match ID to retrieve player props for (required)"),
                    )
                    .property("player_id", number().describe("Filter props for a specific player"))
                    .property("prop_type", string().one_of(PROP_TYPES).describe("Filter by prop type")),
            )
            .with_shaping(Shaping::truncate_unless("player_id")),
    ];

    if league.futures {
        tools.push(sport.tool(
            &name("get_futures_odds"),
            &format!(
                "Get {} futures betting odds (e.g., tournament winner). Only available for UCL.",
                label
            ),
            "/odds/futures",
            object(),
        ));
    }

    tools
}
