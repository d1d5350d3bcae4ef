// ABOUTME: Drivetrain analysis engine for compatibility validation and setup comparison
// ABOUTME: Pure, synchronous computation over read-only catalog records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

#![deny(unsafe_code)]

//! # CrankSmith Analysis
//!
//! The analytical core of CrankSmith. Data flows leaf-first:
//!
//! 1. [`catalog`] resolves component records by id and bike type
//! 2. [`compatibility`] evaluates the crankset/cassette/derailleur rule set
//! 3. [`metrics`] derives gear ratios, spread, chain length, weight and cost
//! 4. [`comparator`] runs both for a current and a proposed setup and diffs them
//! 5. [`recommendation_engine`] turns the comparison into ordered advice
//!
//! Nothing here keeps mutable state between calls; every operation is a
//! deterministic function of its inputs, so concurrent callers can share one
//! catalog behind an `Arc`.

/// Read-only component catalog accessor
pub mod catalog;
/// Mechanical compatibility rule evaluator
pub mod compatibility;
/// Setup comparator producing current/proposed deltas
pub mod comparator;
/// Tunable analysis parameters
pub mod config;
/// Analysis error types
pub mod errors;
/// Gear, chain, weight and cost calculations
pub mod metrics;
/// Advisory message generation from comparison results
pub mod recommendation_engine;

pub use catalog::{CatalogDocument, ComponentCatalog, StaticCatalog};
pub use compatibility::{
    check_rear_derailleur, required_capacity, BrandException, CompatibilityResult,
    BRAND_EXCEPTIONS,
};
pub use comparator::{
    analyze_setup, compare, resolve_setup, ComparisonResult, GearChanges, SetupAnalysis,
    SetupComparison, WeightDelta,
};
pub use config::{AnalysisConfig, RecommendationThresholds};
pub use errors::AnalysisError;
pub use metrics::{
    analyze_gear_spread, calculate_chain_length, calculate_cost, calculate_gear_ratios,
    calculate_system_weight, ChainLength, CostBreakdown, GearAnalysis, GearRatio,
    WeightBreakdown,
};
pub use recommendation_engine::{Recommendation, RecommendationEngine, RecommendationKind};
