//! Process configuration.
//!
//! Settings come from the command line first, with environment overrides for
//! deployment concerns: `APOLLO_MCP_SERVER_PORT`, `APOLLO_API_KEY` (fallback
//! credential used when a request carries no `x-auth-token`), and
//! `APOLLO_API_BASE` (upstream base URL, overridable for testing).

use clap::Parser;

/// Default upstream REST base path (versioned).
pub const DEFAULT_API_BASE: &str = "https://api.apollo.io/api/v1";

/// Command line interface for the server binary.
#[derive(Debug, Parser)]
#[command(
    name = "apollo-mcp",
    version,
    about = "Apollo CRM MCP server with SSE and StreamableHTTP transports"
)]
pub struct Cli {
    /// Port to listen on for HTTP
    #[arg(long, env = "APOLLO_MCP_SERVER_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable buffered JSON responses for StreamableHTTP instead of SSE streams
    #[arg(long, default_value_t = false)]
    pub json_response: bool,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP listener binds to.
    pub port: u16,
    /// Buffered JSON response mode for the stateless transport.
    pub json_response: bool,
    /// Upstream REST base URL, without a trailing slash.
    pub api_base: String,
    /// Process-wide fallback credential, read once at startup.
    pub api_key: Option<String>,
}

impl Config {
    /// Build the runtime configuration from CLI arguments plus environment.
    pub fn from_cli(cli: &Cli) -> Self {
        let api_base = std::env::var("APOLLO_API_BASE")
            .ok()
            .filter(|base| !base.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Self {
            port: cli.port,
            json_response: cli.json_response,
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key: std::env::var("APOLLO_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
        }
    }
}
