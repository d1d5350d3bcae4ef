// ABOUTME: HTTP integration tests for component catalog routes
// ABOUTME: Covers bike-type listings and single-record lookups by kind and id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use cranksmith_analysis::ComponentCatalog;
use helpers::axum_test::AxumTestRequest;
use helpers::{embedded_catalog, test_router};
use serde_json::Value;

fn ids(list: &Value) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap().to_owned())
        .collect()
}

#[tokio::test]
async fn test_list_everything() {
    let catalog = embedded_catalog();

    let response = AxumTestRequest::get("/api/components").send(test_router()).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert!(body["bikeType"].is_null());
    assert_eq!(
        body["cranksets"].as_array().unwrap().len(),
        catalog.cranksets().len()
    );
    assert_eq!(
        body["rearDerailleurs"].as_array().unwrap().len(),
        catalog.rear_derailleurs().len()
    );
}

#[tokio::test]
async fn test_list_gravel_includes_mtb() {
    let response = AxumTestRequest::get("/api/components?bikeType=gravel")
        .send(test_router())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["bikeType"], "gravel");

    let cassettes = ids(&body["cassettes"]);
    assert!(cassettes.contains(&"sram-xplr-xg-1271-10-44".to_owned()));
    assert!(cassettes.contains(&"sram-gx-eagle-10-52".to_owned()));
    assert!(!cassettes.contains(&"shimano-105-r7000-11-28".to_owned()));
}

#[tokio::test]
async fn test_list_bike_type_is_case_insensitive() {
    let response = AxumTestRequest::get("/api/components?bikeType=MTB")
        .send(test_router())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["bikeType"], "mtb");
    assert!(body["cranksets"]
        .as_array()
        .unwrap()
        .iter()
        .all(|c| c["bikeType"] == "mtb"));
}

#[tokio::test]
async fn test_list_unknown_bike_type() {
    let response = AxumTestRequest::get("/api/components?bikeType=tandem")
        .send(test_router())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_get_component() {
    let response = AxumTestRequest::get("/api/components/rear-derailleur/shimano-grx-rx810")
        .send(test_router())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["kind"], "rear-derailleur");
    assert_eq!(body["id"], "shimano-grx-rx810");
    assert_eq!(body["hasClutch"], true);
    assert_eq!(body["maxCog"], 34);
}

#[tokio::test]
async fn test_get_component_unknown_id_is_404() {
    let response = AxumTestRequest::get("/api/components/cassette/shimano-105-r7000")
        .send(test_router())
        .await;

    assert_eq!(response.status(), 404);
    let body: Value = response.json();
    assert_eq!(body["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn test_get_component_unknown_kind_is_400() {
    let response = AxumTestRequest::get("/api/components/chainring/shimano-105-r7000")
        .send(test_router())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
}
