// ABOUTME: HTTP integration tests for setup comparison and compatibility check routes
// ABOUTME: Covers success payloads, validation errors, body limits and error redaction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use axum::Router;
use cranksmith::config::environment::{Environment, ServerConfig};
use cranksmith::resources::ServerResources;
use cranksmith::routes::calculate::CalculateRequest;
use cranksmith::routes::CalculateRoutes;
use cranksmith::server::build_router;
use cranksmith_analysis::{AnalysisConfig, ComponentCatalog};
use cranksmith_core::errors::ErrorCode;
use cranksmith_core::models::{BikeType, Cassette, Crankset, RearDerailleur, SetupSelection};
use helpers::axum_test::AxumTestRequest;
use helpers::{cassette, crankset, derailleur, test_resources, test_router, test_router_with};
use serde_json::{json, Value};
use std::sync::Arc;

fn road_request() -> Value {
    json!({
        "bikeType": "road",
        "currentSetup": {
            "crankset": { "id": "shimano-105-r7000" },
            "cassette": { "id": "shimano-105-r7000-11-28" },
            "rearDerailleur": { "id": "shimano-105-r7000-ss" }
        },
        "proposedSetup": {
            "crankset": { "id": "shimano-105-r7000" },
            "cassette": { "id": "shimano-105-r7000-11-32" },
            "rearDerailleur": { "id": "shimano-105-r7000-gs" }
        }
    })
}

// ============================================================================
// POST /api/calculate
// ============================================================================

#[tokio::test]
async fn test_calculate_success() {
    let response = AxumTestRequest::post("/api/calculate")
        .json(&road_request())
        .send(test_router())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();

    assert_eq!(body["current"]["weights"]["total"], 1527);
    assert_eq!(body["proposed"]["weights"]["total"], 1592);
    assert_eq!(body["proposed"]["gears"].as_array().unwrap().len(), 22);
    assert_eq!(body["proposed"]["chainLength"]["links"], 111);
    assert_eq!(body["proposed"]["components"]["rearDerailleur"]["id"], "shimano-105-r7000-gs");
    assert_eq!(body["comparison"]["weightChange"], 65);
    assert_eq!(body["comparison"]["costChange"], 8);
    assert_eq!(body["comparison"]["recommendations"][0]["title"], "Weight Increase");
    assert_eq!(body["metadata"]["bikeType"], "road");
    assert_eq!(body["metadata"]["hasCompatibilityIssues"], false);
    assert_eq!(body["metadata"]["hasWarnings"], false);
    assert!(body["metadata"]["calculatedAt"].is_string());
}

#[tokio::test]
async fn test_calculate_flags_incompatible_proposal() {
    let mut request = road_request();
    request["proposedSetup"]["cassette"]["id"] = json!("sram-gx-eagle-10-52");

    let response = AxumTestRequest::post("/api/calculate")
        .json(&request)
        .send(test_router())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["metadata"]["hasCompatibilityIssues"], true);
    assert_eq!(body["metadata"]["hasWarnings"], true);
    assert_eq!(
        body["comparison"]["recommendations"][0]["kind"],
        "error"
    );
}

#[tokio::test]
async fn test_calculate_missing_bike_type() {
    let mut request = road_request();
    request.as_object_mut().unwrap().remove("bikeType");

    let response = AxumTestRequest::post("/api/calculate")
        .json(&request)
        .send(test_router())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["code"], "MISSING_REQUIRED_FIELD");
    assert_eq!(body["details"]["field"], "bikeType");
}

#[tokio::test]
async fn test_calculate_missing_setup() {
    let mut request = road_request();
    request.as_object_mut().unwrap().remove("currentSetup");

    let response = AxumTestRequest::post("/api/calculate")
        .json(&request)
        .send(test_router())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["details"]["field"], "currentSetup");
}

#[tokio::test]
async fn test_calculate_missing_component() {
    let mut request = road_request();
    request["proposedSetup"]
        .as_object_mut()
        .unwrap()
        .remove("rearDerailleur");

    let response = AxumTestRequest::post("/api/calculate")
        .json(&request)
        .send(test_router())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["code"], "MISSING_REQUIRED_FIELD");
    assert_eq!(body["details"]["field"], "proposedSetup.rearDerailleur");
}

#[tokio::test]
async fn test_calculate_unknown_component() {
    let mut request = road_request();
    request["currentSetup"]["crankset"]["id"] = json!("shimano-9000-imaginary");

    let response = AxumTestRequest::post("/api/calculate")
        .json(&request)
        .send(test_router())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
    assert_eq!(body["details"]["field"], "currentSetup.crankset");
    assert_eq!(body["details"]["id"], "shimano-9000-imaginary");
}

#[tokio::test]
async fn test_calculate_unknown_bike_type_is_invalid_input() {
    let mut request = road_request();
    request["bikeType"] = json!("tandem");

    let response = AxumTestRequest::post("/api/calculate")
        .json(&request)
        .send(test_router())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_calculate_malformed_json() {
    let response = AxumTestRequest::post("/api/calculate")
        .raw_body("application/json", "{ \"bikeType\": ")
        .send(test_router())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_calculate_requires_json_content_type() {
    let response = AxumTestRequest::post("/api/calculate")
        .raw_body("text/plain", road_request().to_string())
        .send(test_router())
        .await;

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_calculate_body_too_large() {
    let config = ServerConfig {
        max_request_body_bytes: 256,
        ..ServerConfig::default()
    };
    let mut request = road_request();
    request["padding"] = json!("x".repeat(1024));

    let response = AxumTestRequest::post("/api/calculate")
        .json(&request)
        .send(test_router_with(&config))
        .await;

    assert_eq!(response.status(), 413);
    let body: Value = response.json();
    assert_eq!(body["code"], "PAYLOAD_TOO_LARGE");
}

#[tokio::test]
async fn test_calculate_body_too_large_with_content_length() {
    let config = ServerConfig {
        max_request_body_bytes: 256,
        ..ServerConfig::default()
    };
    let mut request = road_request();
    request["padding"] = json!("x".repeat(1024));
    let payload = request.to_string();

    let response = AxumTestRequest::post("/api/calculate")
        .header("content-length", &payload.len().to_string())
        .raw_body("application/json", payload)
        .send(test_router_with(&config))
        .await;

    assert_eq!(response.status(), 413);
    let body: Value = response.json();
    assert_eq!(body["code"], "PAYLOAD_TOO_LARGE");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_calculate_body_within_limit_with_content_length() {
    let payload = road_request().to_string();

    let response = AxumTestRequest::post("/api/calculate")
        .header("content-length", &payload.len().to_string())
        .raw_body("application/json", payload)
        .send(test_router())
        .await;

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_calculate_without_http() {
    let resources = test_resources(Environment::Testing);
    let request = CalculateRequest {
        bike_type: Some(BikeType::Road),
        current_setup: Some(SetupSelection::of(
            "shimano-105-r7000",
            "shimano-105-r7000-11-28",
            "shimano-105-r7000-ss",
        )),
        proposed_setup: None,
    };

    let error = CalculateRoutes::calculate(&resources, request).unwrap_err();

    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert_eq!(error.details["field"], "proposedSetup");
}

// ============================================================================
// POST /api/compatibility
// ============================================================================

#[tokio::test]
async fn test_compatibility_check() {
    let response = AxumTestRequest::post("/api/compatibility")
        .json(&json!({
            "crankset": { "id": "shimano-105-r7000" },
            "cassette": { "id": "shimano-105-r7000-11-34" },
            "rearDerailleur": { "id": "shimano-105-r7000-ss" }
        }))
        .send(test_router())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(
        body["compatibility"]["errors"][0],
        "Shimano 105 R7000 has a max cog of 30T, but your cassette has 34T"
    );
    assert_eq!(
        body["compatibility"]["warnings"][0],
        "Total capacity needed: 39T, but Shimano 105 R7000 only supports 35T"
    );
    assert_eq!(body["chainLength"]["recommendation"], "Approximately 112 links needed");
    assert_eq!(body["components"]["cassette"]["id"], "shimano-105-r7000-11-34");
}

#[tokio::test]
async fn test_compatibility_missing_component() {
    let response = AxumTestRequest::post("/api/compatibility")
        .json(&json!({
            "crankset": { "id": "shimano-105-r7000" },
            "cassette": { "id": "shimano-105-r7000-11-34" }
        }))
        .send(test_router())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["details"]["field"], "rearDerailleur");
}

// ============================================================================
// Internal errors
// ============================================================================

/// Catalog that skips load-time validation, to reach the computation error path
struct UncheckedCatalog {
    cranksets: Vec<Crankset>,
    cassettes: Vec<Cassette>,
    rear_derailleurs: Vec<RearDerailleur>,
}

impl ComponentCatalog for UncheckedCatalog {
    fn cranksets(&self) -> &[Crankset] {
        &self.cranksets
    }

    fn cassettes(&self) -> &[Cassette] {
        &self.cassettes
    }

    fn rear_derailleurs(&self) -> &[RearDerailleur] {
        &self.rear_derailleurs
    }
}

fn broken_router(environment: Environment) -> Router {
    let catalog = UncheckedCatalog {
        cranksets: vec![crankset(&[50, 34], 700)],
        cassettes: vec![cassette(&[], 300)],
        rear_derailleurs: vec![derailleur(34, 40, 232)],
    };
    let resources = ServerResources::new(Arc::new(catalog), AnalysisConfig::default(), environment);
    build_router(&ServerConfig::default(), Arc::new(resources))
}

fn broken_request() -> Value {
    let setup = json!({
        "crankset": { "id": "test-crankset" },
        "cassette": { "id": "test-cassette" },
        "rearDerailleur": { "id": "test-rd" }
    });
    json!({ "bikeType": "road", "currentSetup": setup, "proposedSetup": setup })
}

#[tokio::test]
async fn test_computation_error_is_redacted_in_production() {
    let response = AxumTestRequest::post("/api/calculate")
        .json(&broken_request())
        .send(broken_router(Environment::Production))
        .await;

    assert_eq!(response.status(), 500);
    let body: Value = response.json();
    assert_eq!(body["code"], "COMPUTATION_ERROR");
    assert_eq!(body["error"], "Drivetrain calculation failed");
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_computation_error_is_detailed_in_development() {
    let response = AxumTestRequest::post("/api/calculate")
        .json(&broken_request())
        .send(broken_router(Environment::Development))
        .await;

    assert_eq!(response.status(), 500);
    let body: Value = response.json();
    assert_eq!(body["code"], "COMPUTATION_ERROR");
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("empty teeth list"));
    assert_eq!(body["details"]["component"], "test-cassette");
}
