// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the in-process HTTP harness and canned catalogs and selections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod axum_test;

use axum::Router;
use cranksmith::config::environment::{Environment, ServerConfig};
use cranksmith::resources::ServerResources;
use cranksmith::server::build_router;
use cranksmith_analysis::{AnalysisConfig, StaticCatalog};
use cranksmith_core::models::{
    BikeType, Cassette, ComponentBase, Crankset, RearDerailleur, Setup,
};
use std::sync::Arc;

/// Embedded catalog, panicking if it fails validation
pub fn embedded_catalog() -> StaticCatalog {
    StaticCatalog::embedded().expect("embedded catalog must load")
}

/// Resources over the embedded catalog
pub fn test_resources(environment: Environment) -> Arc<ServerResources> {
    Arc::new(ServerResources::new(
        Arc::new(embedded_catalog()),
        AnalysisConfig::default(),
        environment,
    ))
}

/// Full application router with default settings
pub fn test_router() -> Router {
    test_router_with(&ServerConfig::default())
}

/// Full application router for a given configuration
pub fn test_router_with(config: &ServerConfig) -> Router {
    build_router(config, test_resources(config.environment))
}

fn base(id: &str, model: &str, speeds: &str, weight: u32) -> ComponentBase {
    ComponentBase {
        id: id.to_owned(),
        model: model.to_owned(),
        variant: String::new(),
        weight,
        bike_type: BikeType::Road,
        speeds: speeds.to_owned(),
        price: None,
    }
}

/// Shimano 11-speed crankset with the given rings
pub fn crankset(teeth: &[u32], weight: u32) -> Crankset {
    Crankset {
        base: base("test-crankset", "Shimano Test", "11-speed", weight),
        teeth: teeth.to_vec(),
    }
}

/// Shimano 11-speed cassette with the given cogs
pub fn cassette(teeth: &[u32], weight: u32) -> Cassette {
    Cassette {
        base: base("test-cassette", "Shimano Test", "11-speed", weight),
        teeth: teeth.to_vec(),
        compatibility: vec!["Shimano 11-speed road".to_owned()],
    }
}

/// Mechanical Shimano 11-speed derailleur
pub fn derailleur(max_cog: u32, total_capacity: u32, weight: u32) -> RearDerailleur {
    RearDerailleur {
        base: base("test-rd", "Shimano Test RD", "11-speed", weight),
        max_cog,
        min_cog: Some(11),
        total_capacity,
        cage_length: None,
        compatibility: vec!["Shimano 11-speed road".to_owned()],
        is_electronic: false,
        is_wireless: false,
        has_clutch: false,
        is_direct_mount: false,
    }
}

/// Setup from three records
pub fn setup(crankset: Crankset, cassette: Cassette, rear_derailleur: RearDerailleur) -> Setup {
    Setup {
        crankset,
        cassette,
        rear_derailleur,
    }
}
