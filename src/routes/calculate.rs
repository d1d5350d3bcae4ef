// ABOUTME: Route handlers for drivetrain setup comparison and single-setup compatibility checks
// ABOUTME: Validates request bodies, runs the analysis engine and shapes the JSON response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

//! Calculation routes
//!
//! `POST /api/calculate` compares a current and a proposed setup.
//! `POST /api/compatibility` checks one setup without comparing it.
//! Compatibility findings are part of a 200 response; only missing fields,
//! unknown ids and internal faults are errors.

use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::resources::ServerResources;
use crate::routes::extract::ApiJson;
use axum::{extract::State, routing::post, Json, Router};
use chrono::Utc;
use cranksmith_analysis::{
    calculate_chain_length, check_rear_derailleur, compare, resolve_setup, ChainLength,
    CompatibilityResult, SetupComparison,
};
use cranksmith_core::models::{BikeType, Setup, SetupSelection};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Body of `POST /api/calculate`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    /// Bike type family of the build
    #[serde(default)]
    pub bike_type: Option<BikeType>,
    /// Drivetrain currently on the bike
    #[serde(default)]
    pub current_setup: Option<SetupSelection>,
    /// Drivetrain being considered
    #[serde(default)]
    pub proposed_setup: Option<SetupSelection>,
}

/// Calculation metadata
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationMetadata {
    /// RFC 3339 timestamp
    pub calculated_at: String,
    /// Bike type from the request
    pub bike_type: BikeType,
    /// The proposed setup has compatibility errors
    pub has_compatibility_issues: bool,
    /// The proposed setup has compatibility warnings
    pub has_warnings: bool,
}

/// Response of `POST /api/calculate`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    /// `current`, `proposed` and `comparison`
    #[serde(flatten)]
    pub result: SetupComparison,
    /// Request metadata
    pub metadata: CalculationMetadata,
}

/// Response of `POST /api/compatibility`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResponse {
    /// Rule findings
    pub compatibility: CompatibilityResult,
    /// Chain estimate
    pub chain_length: ChainLength,
    /// Resolved components
    pub components: Setup,
}

/// Calculation routes implementation
pub struct CalculateRoutes;

impl CalculateRoutes {
    /// Create the calculation routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/calculate", post(Self::handle_calculate))
            .route("/api/compatibility", post(Self::handle_compatibility))
            .with_state(resources)
    }

    /// Handle POST /api/calculate
    async fn handle_calculate(
        State(resources): State<Arc<ServerResources>>,
        ApiJson(request): ApiJson<CalculateRequest>,
    ) -> AppResult<Json<CalculateResponse>> {
        Self::calculate(&resources, request)
            .map(Json)
            .map_err(|e| resources.client_error(e))
    }

    /// Validate a calculation request and run the comparison
    ///
    /// # Errors
    ///
    /// Returns a validation error for missing fields or unknown ids
    pub fn calculate(
        resources: &ServerResources,
        request: CalculateRequest,
    ) -> AppResult<CalculateResponse> {
        let bike_type = request
            .bike_type
            .ok_or_else(|| AppError::missing_field("bikeType"))?;
        let current = request
            .current_setup
            .ok_or_else(|| AppError::missing_field("currentSetup"))?;
        let proposed = request
            .proposed_setup
            .ok_or_else(|| AppError::missing_field("proposedSetup"))?;

        let result = compare(
            resources.catalog.as_ref(),
            &resources.analysis,
            &current,
            &proposed,
        )?;

        let proposed_compatibility = &result.proposed.compatibility;
        let metadata = CalculationMetadata {
            calculated_at: Utc::now().to_rfc3339(),
            bike_type,
            has_compatibility_issues: !proposed_compatibility.errors.is_empty(),
            has_warnings: !proposed_compatibility.warnings.is_empty(),
        };

        AppLogger::log_setup_comparison(
            bike_type.as_str(),
            result.comparison.weight_change,
            proposed_compatibility.errors.len(),
            proposed_compatibility.warnings.len(),
        );

        Ok(CalculateResponse { result, metadata })
    }

    /// Handle POST /api/compatibility
    async fn handle_compatibility(
        State(resources): State<Arc<ServerResources>>,
        ApiJson(selection): ApiJson<SetupSelection>,
    ) -> AppResult<Json<CompatibilityResponse>> {
        Self::check(&resources, &selection)
            .map(Json)
            .map_err(|e| resources.client_error(e))
    }

    fn check(
        resources: &ServerResources,
        selection: &SetupSelection,
    ) -> AppResult<CompatibilityResponse> {
        let setup = resolve_setup(resources.catalog.as_ref(), selection, "")?;

        let compatibility =
            check_rear_derailleur(&setup.rear_derailleur, &setup.cassette, &setup.crankset);
        let chain_length = calculate_chain_length(
            &setup.crankset,
            &setup.cassette,
            resources.analysis.chainstay_length_mm,
        )?;

        Ok(CompatibilityResponse {
            compatibility,
            chain_length,
            components: setup,
        })
    }
}
