use anyhow::Result;
use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod constants;
mod error;
mod formatters;
mod models;
mod service;

use service::Weather;

#[tokio::main]
async fn main() -> Result<()> {
    // Log to stderr; stdout belongs to the stdio transport.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "open_meteo_mcp_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting MCP weather server");

    let weather = Weather::new()?;
    let server = weather.serve(rmcp::transport::stdio()).await?;

    tracing::info!("MCP server ready, serving on stdio");

    server.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
