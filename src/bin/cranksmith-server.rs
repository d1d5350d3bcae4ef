// ABOUTME: HTTP server binary for the CrankSmith drivetrain analysis API
// ABOUTME: Loads configuration and the component catalog, then serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

//! # CrankSmith Server Binary
//!
//! Starts the drivetrain compatibility and comparison API.

use anyhow::Result;
use clap::Parser;
use cranksmith::{
    config::environment::ServerConfig, logging, resources::ServerResources, server,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "cranksmith-server")]
#[command(about = "CrankSmith - drivetrain compatibility and gearing analysis API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,

    /// Load the component catalog from this JSON file instead of the embedded one
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using configuration from environment only");
            Args {
                http_port: None,
                host: None,
                catalog: None,
            }
        }
    };

    let mut config = ServerConfig::from_env()?;

    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(catalog) = args.catalog {
        config.catalog_path = Some(catalog);
    }

    logging::init_from_env()?;

    info!("Starting CrankSmith server");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::from_config(&config)?);

    display_available_endpoints(&config);

    if let Err(e) = server::run(config, resources).await {
        error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(config: &ServerConfig) {
    let host = &config.host;
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!("Health:");
    info!("   Liveness:          GET  http://{host}:{port}/health");
    info!("   Readiness:         GET  http://{host}:{port}/ready");
    info!("Analysis:");
    info!("   Compare Setups:    POST http://{host}:{port}/api/calculate");
    info!("   Check Setup:       POST http://{host}:{port}/api/compatibility");
    info!("Catalog:");
    info!("   List Components:   GET  http://{host}:{port}/api/components?bikeType={{type}}");
    info!("   Get Component:     GET  http://{host}:{port}/api/components/{{kind}}/{{id}}");
    info!("=== End of Endpoint List ===");
}
