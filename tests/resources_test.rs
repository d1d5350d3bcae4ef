// ABOUTME: Tests for building shared server resources from configuration
// ABOUTME: Covers embedded and file-backed catalogs and startup failures on bad catalog files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use cranksmith::config::environment::{Environment, ServerConfig};
use cranksmith::errors::{AppError, ErrorCode};
use cranksmith::resources::ServerResources;
use std::fs;

#[test]
fn test_from_config_uses_embedded_catalog() {
    let config = ServerConfig::default();

    let resources = ServerResources::from_config(&config).unwrap();

    assert!(!resources.catalog.rear_derailleurs().is_empty());
    assert_eq!(resources.environment, Environment::Development);
    assert_eq!(resources.analysis, config.analysis);
}

#[test]
fn test_from_config_loads_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"{
            "cranksets": [
                {"id": "grx-1x", "model": "Shimano GRX RX600", "variant": "1x 40T",
                 "weight": 720, "bikeType": "gravel", "speeds": "11-speed", "teeth": [40]}
            ]
        }"#,
    )
    .unwrap();

    let config = ServerConfig {
        catalog_path: Some(path),
        environment: Environment::Production,
        ..ServerConfig::default()
    };
    let resources = ServerResources::from_config(&config).unwrap();

    assert_eq!(resources.catalog.cranksets().len(), 1);
    assert!(resources.catalog.cassettes().is_empty());
    assert!(resources.catalog.find_crankset("grx-1x").is_ok());
}

#[test]
fn test_from_config_rejects_duplicate_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"{
            "cassettes": [
                {"id": "dup", "model": "SRAM XG-1271", "variant": "10-44", "weight": 380,
                 "bikeType": "gravel", "speeds": "12-speed", "teeth": [10, 44]},
                {"id": "dup", "model": "SRAM XG-1271", "variant": "10-44", "weight": 380,
                 "bikeType": "gravel", "speeds": "12-speed", "teeth": [10, 44]}
            ]
        }"#,
    )
    .unwrap();

    let config = ServerConfig {
        catalog_path: Some(path),
        ..ServerConfig::default()
    };

    let Err(error) = ServerResources::from_config(&config) else {
        panic!("duplicate ids must fail startup");
    };
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_client_error_follows_environment() {
    let config = ServerConfig {
        environment: Environment::Production,
        ..ServerConfig::default()
    };
    let resources = ServerResources::from_config(&config).unwrap();

    let shaped = resources.client_error(AppError::computation("cassette 'x' has an empty teeth list"));

    assert_eq!(shaped.code, ErrorCode::ComputationError);
    assert_eq!(shaped.message, "Drivetrain calculation failed");
}
