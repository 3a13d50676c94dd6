// ABOUTME: Server resources container and HTTP server assembly
// ABOUTME: Builds the axum router and serves it with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Server

//! # Server Module
//!
//! Centralized resource container for dependency injection plus router
//! assembly. Shared resources (database pool, model provider, configuration)
//! are constructed once at startup and handed to route handlers through an
//! `Arc<ServerResources>`.

use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::database::Database;
use crate::llm::LlmProvider;
use crate::recipes::RecipeResolver;
use crate::routes::{CartRoutes, HealthRoutes};

/// Centralized resource container for dependency injection
///
/// Holds the shared server resources so handlers never recreate expensive
/// objects like the connection pool or the HTTP client inside the provider.
pub struct ServerResources {
    /// Database handle over the shared pool
    pub database: Database,
    /// Recipe resolver bound to the configured model provider
    pub resolver: RecipeResolver,
    /// Immutable configuration loaded at startup
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create new server resources
    #[must_use]
    pub fn new(
        database: Database,
        provider: Arc<dyn LlmProvider>,
        config: Arc<ServerConfig>,
    ) -> Self {
        let resolver = RecipeResolver::new(provider, &config.llm);
        Self {
            database,
            resolver,
            config,
        }
    }
}

/// Build the full application router
#[must_use]
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(CartRoutes::routes(resources))
        .merge(HealthRoutes::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Serve the application until shutdown
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails
pub async fn run(resources: Arc<ServerResources>, port: u16) -> Result<()> {
    let app = build_router(resources);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Pantry Server listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Pantry Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {e}");
    }
}
