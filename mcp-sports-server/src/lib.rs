//! mcp-sports-server: sports statistics over the Model Context Protocol
//!
//! Exposes the BALLDONTLIE sports API as MCP tools. Every tool call is
//! validated against the tool's parameter schema, forwarded to one fixed
//! upstream endpoint with the caller's Authorization header, optionally
//! shaped (cursor pagination, truncation) and returned as text content.
//!
//! # Features
//!
//! - JSON-RPC 2.0 over a single `POST /mcp` endpoint
//! - Tool catalogues for NBA, NFL, MLB, NHL, EPL, NCAAF, NCAAB, MMA and
//!   five European soccer competitions
//! - Declarative argument validation shared by `tools/list` and `tools/call`
//! - Discovery (`/.well-known/mcp-config`, `/api/docs`) and probe
//!   (`/health`, `/ready`) endpoints
//!
//! # Example Configuration
//!
//! ```toml
//! [server]
//! listen_addr = "0.0.0.0:3000"
//! public_url = "https://mcp.example.com/mcp"
//!
//! [backend]
//! base_url = "https://api.balldontlie.io"
//! timeout_ms = 30000
//! debug = false
//!
//! [logging]
//! level = "info"
//! format = "json"
//! ```

pub mod backend;
pub mod catalogue;
pub mod config;
pub mod error;
pub mod mcp;
pub mod server;

pub use config::Config;
pub use error::{Result, ServerError};
pub use server::McpServer;
