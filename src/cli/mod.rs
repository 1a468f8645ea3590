use clap::{Parser, Subcommand};
use std::process::ExitCode;
use thiserror::Error;

use crate::clients::xroad::{XroadRemote, DEFAULT_BASE_URL};
use crate::domain::{BoundingBox, BridgeLookup};
use crate::infra::runtime::limits::make_http_client;

#[derive(Parser)]
#[command(name = "xroad-mcp-gateway")]
#[command(about = "xROAD MCP Gateway - bridge structure lookups over MCP")]
#[command(version)]
pub struct Cli {
    /// With no subcommand the gateway starts serving (MODE/PORT from env).
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Health check a running gateway
    Health {
        /// Gateway URL to check
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
    },
    /// Run one bridges lookup against the upstream service
    Lookup {
        /// Upstream base URL (defaults to the production xROAD endpoint)
        #[arg(short, long)]
        base: Option<String>,
        /// Search window as "lat_min,lat_max,lon_min,lon_max"
        #[arg(short, long)]
        area: String,
    },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unhealthy: status {0}")]
    Unhealthy(reqwest::StatusCode),
    #[error("area must be four comma-separated numbers")]
    BadArea,
}

pub async fn run_commands(command: Commands) -> ExitCode {
    match command {
        Commands::Health { url } => match health_check(&url).await {
            Ok(()) => {
                println!("gateway is healthy");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("health check failed: {e}");
                ExitCode::FAILURE
            }
        },
        Commands::Lookup { base, area } => match parse_area(&area) {
            Ok(bbox) => {
                let client =
                    XroadRemote::new(base.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()));
                println!("{}", client.bridges_by_area(&bbox).await.into_reply());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        },
    }
}

fn parse_area(area: &str) -> Result<BoundingBox, CliError> {
    let values: Vec<f64> = area
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|_| CliError::BadArea)?;
    BoundingBox::from_area(&values).ok_or(CliError::BadArea)
}

async fn health_check(url: &str) -> Result<(), CliError> {
    let http = make_http_client();
    let resp = http
        .get(format!("{}/healthz", url.trim_end_matches('/')))
        .send()
        .await
        .map_err(|e| CliError::Request(e.to_string()))?;
    if resp.status().is_success() {
        Ok(())
    } else {
        Err(CliError::Unhealthy(resp.status()))
    }
}
