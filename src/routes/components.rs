// ABOUTME: Route handlers for browsing the component catalog
// ABOUTME: Lists components per bike type and looks up single records by kind and id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

use crate::errors::{AppError, AppResult};
use crate::resources::ServerResources;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use cranksmith_analysis::CatalogDocument;
use cranksmith_core::models::{BikeType, Component, ComponentKind};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Query string of `GET /api/components`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentQuery {
    /// `road`, `gravel` or `mtb`; absent lists everything
    pub bike_type: Option<String>,
}

/// Catalog listing for one bike type
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentListResponse {
    /// Requested bike type, `null` for the full catalog
    pub bike_type: Option<BikeType>,
    /// Cranksets, cassettes and derailleurs in catalog order
    #[serde(flatten)]
    pub components: CatalogDocument,
}

/// Catalog routes implementation
pub struct ComponentRoutes;

impl ComponentRoutes {
    /// Create the catalog routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/components", get(Self::handle_list))
            .route("/api/components/:kind/:id", get(Self::handle_get))
            .with_state(resources)
    }

    /// Handle GET /api/components
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<ComponentQuery>,
    ) -> AppResult<Json<ComponentListResponse>> {
        let bike_type = query
            .bike_type
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .map(|value| {
                BikeType::parse(value).ok_or_else(|| {
                    AppError::invalid_input(format!(
                        "Unknown bike type '{value}', expected road, gravel or mtb"
                    ))
                })
            })
            .transpose()?;

        Ok(Json(ComponentListResponse {
            bike_type,
            components: resources.catalog.listing(bike_type),
        }))
    }

    /// Handle GET /api/components/:kind/:id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path((kind, id)): Path<(String, String)>,
    ) -> AppResult<Json<Component>> {
        let kind = ComponentKind::parse(&kind).ok_or_else(|| {
            AppError::invalid_input(format!(
                "Unknown component kind '{kind}', expected crankset, cassette or rear-derailleur"
            ))
        })?;

        let component = resources.catalog.find_by_id(kind, &id)?;
        Ok(Json(component))
    }
}
