// ABOUTME: Server binary for the Pantry Server grocery backend
// ABOUTME: Loads configuration, opens the database, and serves the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Server

//! # Pantry Server Binary
//!
//! Starts the HTTP API with the Groq provider, database management, and
//! structured logging.

use anyhow::Result;
use clap::Parser;
use pantry_server::{
    config::ServerConfig,
    database::Database,
    llm::{GroqProvider, LlmProvider},
    logging,
    server::ServerResources,
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "pantry-server")]
#[command(about = "Pantry Server - recipe ingredient estimation and inventory allocation")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Override port if specified
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting Pantry Server");
    info!("{}", config.summary());

    let database = Database::new(&config.database.url).await?;
    info!(
        "Database initialized successfully: {}",
        config.database.url.to_connection_string()
    );

    let provider = Arc::new(GroqProvider::new(config.llm.api_key.clone()));
    match provider.health_check().await {
        Ok(true) => info!("Model provider ready: {}", config.llm.model),
        Ok(false) => warn!("Model provider health check failed; completions may error"),
        Err(e) => warn!("Model provider health check errored: {e}"),
    }

    let config = Arc::new(config);
    let resources = Arc::new(ServerResources::new(database, provider, config.clone()));

    display_available_endpoints(&config);

    if let Err(e) = pantry_server::server::run(resources, config.http_port).await {
        error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints with their ports
fn display_available_endpoints(config: &ServerConfig) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!("Cart:");
    info!("   Add To Cart:       POST http://{host}:{port}/add_to_cart");
    info!("   Weekly Plan:       POST http://{host}:{port}/weekly_plan");
    info!("Monitoring:");
    info!("   Health Check:      GET  http://{host}:{port}/health");
    info!("   Readiness Check:   GET  http://{host}:{port}/ready");
    info!("=== End of Endpoint List ===");
}
