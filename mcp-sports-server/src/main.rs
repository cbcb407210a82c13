//! mcp-sports-server: MCP server for the BALLDONTLIE sports API

use mcp_sports_server::{Config, McpServer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "mcp_sports_server={level},tower_http={level}",
            level = config.logging.level
        )
        .into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    info!("Starting mcp-sports-server v{}", env!("CARGO_PKG_VERSION"));
    info!("Sports API: {}", config.backend.base_url);
    if config.backend.debug {
        info!("Outbound request logging enabled");
    }

    let server = McpServer::new(config)?;
    info!("Initialized {} sports API tools", server.tool_count());

    server.run().await?;

    Ok(())
}
