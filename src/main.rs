//! FamilySearch MCP Server entry point.
//!
//! Loads configuration (`.env` first, then the process environment), sets up
//! stderr logging and serves the three Family Tree tools over the configured
//! transport.

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use familysearch_mcp_server::core::{Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!("Transport: {}", config.transport.description());

    if let Err(e) = run(config).await {
        error!("Server error: {}", e);
        return Err(e).context("FamilySearch MCP server failed");
    }

    info!("Server shutting down");
    Ok(())
}

/// Build the server and block on the configured transport.
async fn run(config: Config) -> familysearch_mcp_server::Result<()> {
    let server = McpServer::new(config.clone())?;
    info!("FamilySearch API at {}", config.familysearch.base_url);

    TransportService::new(config.transport).run(server).await?;
    Ok(())
}

/// Initialize the logging subsystem.
///
/// `RUST_LOG` wins over `MCP_LOG_LEVEL`; an unparsable level falls back to
/// `info`. Output always goes to stderr so the stdio transport stays clean.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.to_lowercase()))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
