//! MMA tools (`/mma/v1`)

use super::{by_id, date, ids, paging, Sport};
use crate::mcp::schema::{number, object, string, ObjectSchema};
use crate::mcp::tool::ToolDefinition;

fn fights(subject: &str) -> ObjectSchema {
    object()
        .property("fight_ids", ids("Filter by specific fight IDs"))
        .property(
            "fighter_ids",
            ids(&format!("Filter {} for specific fighters", subject)),
        )
        .property("event_ids", ids(&format!("Filter {} by event IDs", subject)))
        .extend(paging())
}

pub(crate) fn tools(sport: &Sport) -> Vec<ToolDefinition> {
    vec![
        sport.tool(
            "mma_get_leagues",
            "Get all MMA leagues (UFC, Bellator, etc.)",
            "/leagues",
            object(),
        ),
        sport.tool(
            "mma_get_league_by_id",
            "Get a specific MMA league by ID",
            "/leagues/{id}",
            by_id("league"),
        ),
        sport.tool(
            "mma_get_events",
            "Get MMA events with optional filtering by date or year",
            "/events",
            object()
                .property("date", date("Filter by event date (YYYY-MM-DD)"))
                .property("year", number().describe("Filter by event year"))
                .extend(paging()),
        ),
        sport.tool(
            "mma_get_event_by_id",
            "Get a specific MMA event by ID",
            "/events/{id}",
            by_id("event"),
        ),
        sport.tool(
            "mma_get_fighters",
            "Get MMA fighters with optional search and filtering",
            "/fighters",
            object()
                .property("search", string().describe("Search fighters by name"))
                .property("fighter_ids", ids("Filter by specific fighter IDs"))
                .extend(paging()),
        ),
        sport.tool(
            "mma_get_fighter_by_id",
            "Get a specific MMA fighter by ID",
            "/fighters/{id}",
            by_id("fighter"),
        ),
        sport.tool(
            "mma_get_fights",
            "Get MMA fights with optional filtering by fight, fighter, or event IDs",
            "/fights",
            fights("fights"),
        ),
        sport.tool(
            "mma_get_fight_by_id",
            "Get a specific MMA fight by ID",
            "/fights/{id}",
            by_id("fight"),
        ),
        sport.tool(
            "mma_get_rankings",
            "Get current MMA fighter rankings by weight class and league",
            "/rankings",
            object(),
        ),
        sport.tool(
            "mma_get_fight_stats",
            "Get detailed MMA fight statistics with optional filtering",
            "/fight_stats",
            fights("statistics"),
        ),
        sport.tool(
            "mma_get_fight_stat_by_id",
            "Get statistics for a specific fight performance",
            "/fight_stats/{id}",
            by_id("fight stat"),
        ),
        sport.tool(
            "mma_get_betting_odds",
            "Get MMA betting odds for fights. Either event_id or fight_id is required.",
            "/odds",
            object()
                .property("event_id", number().describe("Filter odds by event ID"))
                .property("fight_id", number().describe("Filter odds by fight ID")),
        ),
    ]
}
