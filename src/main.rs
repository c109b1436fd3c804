//! Apollo CRM MCP Server
//!
//! Dual-transport MCP server for the Apollo REST API: SSE on `/sse` +
//! `/messages/`, StreamableHTTP on `/mcp`.
//!
//! # Configuration
//! `APOLLO_API_KEY` provides the fallback credential when requests carry no
//! `x-auth-token` header; `APOLLO_MCP_SERVER_PORT` overrides the default
//! port.

use clap::Parser;

use apollo_mcp::config::{Cli, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    apollo_mcp::server::init_tracing(&cli.log_level)?;

    tracing::info!("Starting Apollo MCP Server");

    let config = Config::from_cli(&cli);
    apollo_mcp::server::run(config).await
}
