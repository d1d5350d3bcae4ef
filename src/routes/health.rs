// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides liveness and readiness endpoints, readiness reporting catalog sizes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

//! Health check routes for service monitoring
//!
//! `/health` answers as soon as the process is up. `/ready` also reports the
//! size of the loaded catalog so a deployment with an empty catalog is visible.

use crate::constants::service_names;
use crate::resources::ServerResources;
use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::health_handler))
            .route("/ready", get(Self::ready_handler))
            .with_state(resources)
    }

    async fn health_handler() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "service": service_names::CRANKSMITH_SERVER,
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": Utc::now().to_rfc3339()
        }))
    }

    async fn ready_handler(State(resources): State<Arc<ServerResources>>) -> Json<Value> {
        let catalog = &resources.catalog;
        Json(json!({
            "status": "ready",
            "timestamp": Utc::now().to_rfc3339(),
            "catalog": {
                "cranksets": catalog.cranksets().len(),
                "cassettes": catalog.cassettes().len(),
                "rearDerailleurs": catalog.rear_derailleurs().len()
            }
        }))
    }
}
