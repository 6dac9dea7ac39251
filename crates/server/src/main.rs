//! mdn-mcp server entry point.
//!
//! This is the main binary that boots the MCP server on stdio transport.
//! Logging goes to stderr to avoid interfering with the JSON-RPC protocol on stdout.

use std::process::ExitCode;

use anyhow::Result;
use mdn_client::{MdnClient, MdnConfig};
use mdn_core::{AppConfig, ConfigError, Error};
use rmcp::service::serve_server;
use rmcp::transport::io::stdio;

mod handler;
mod logging;
mod tools;

#[tokio::main]
async fn main() -> ExitCode {
    let config = AppConfig::load();

    logging::init(config.as_ref().map(|c| c.log_format).unwrap_or_default());

    exit_code(run(config).await)
}

/// Map the outcome of `run` to the process exit status, logging fatal errors.
fn exit_code(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Fatal error in main(): {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Result<AppConfig, ConfigError>) -> Result<()> {
    let config = config.map_err(Error::from)?;

    tracing::debug!(base_url = %config.base_url, locale = %config.locale, "loaded configuration");

    let client = MdnClient::new(MdnConfig::from(&config)).map_err(Error::from)?;
    let handler = handler::McpMdnServer::new(client);
    let transport = stdio();
    let server = serve_server(handler, transport).await?;

    tracing::info!("MDN MCP Server running on stdio");

    server.waiting().await?;

    Ok(())
}
