// ABOUTME: HTTP router assembly and server lifecycle for the CrankSmith API
// ABOUTME: Merges domain routes and applies tracing, request-id, body-limit and CORS layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

use crate::config::environment::ServerConfig;
use crate::constants::REQUEST_ID_HEADER;
use crate::middleware::{create_request_span, log_requests, setup_cors, RequestIdGenerator};
use crate::resources::ServerResources;
use crate::routes::{CalculateRoutes, ComponentRoutes, HealthRoutes};
use anyhow::{Context, Result};
use axum::{body::Body, extract::DefaultBodyLimit, middleware, Router};
use http::HeaderName;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Build the full application router
pub fn build_router(config: &ServerConfig, resources: Arc<ServerResources>) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(CalculateRoutes::routes(Arc::clone(&resources)))
        .merge(ComponentRoutes::routes(resources))
        // Enforced by the body extractors so oversized bodies get the JSON error shape
        .layer(DefaultBodyLimit::max(config.max_request_body_bytes))
        .layer(middleware::from_fn(log_requests))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), RequestIdGenerator))
                .layer(TraceLayer::new_for_http().make_span_with(create_request_span::<Body>))
                .layer(PropagateRequestIdLayer::new(request_id)),
        )
        .layer(setup_cors(config))
}

/// Bind and serve until Ctrl-C
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(config: ServerConfig, resources: Arc<ServerResources>) -> Result<()> {
    let app = build_router(&config, resources);
    let address = config.bind_address();

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    info!("HTTP server listening on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}
