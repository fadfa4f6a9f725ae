use anyhow::Result;
use clap::Parser;
use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Command, Opts};
use crate::mcp::Co2Tool;
use crate::service::StatsService;

mod config;
mod constants;
mod error;
mod formatters;
mod geometry;
mod mcp;
mod models;
mod service;
mod web;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "co2_stats=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let opts = Opts::parse();
    let service = StatsService::new(opts.upstream.clone())?;

    match opts.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            tracing::info!("Starting CO2 statistics server on {}", opts.listen);

            let listener = tokio::net::TcpListener::bind(opts.listen).await?;
            axum::serve(listener, web::router(service)).await?;
        }
        Command::Mcp => {
            tracing::info!("Starting CO2 statistics MCP server");

            let server = Co2Tool::new(service).serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
        }
    }

    tracing::info!("Server shutdown complete");
    Ok(())
}
