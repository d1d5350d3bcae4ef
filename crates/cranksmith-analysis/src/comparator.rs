// ABOUTME: Resolves current and proposed setups, analyzes each and computes their deltas
// ABOUTME: Unknown or missing component references fail fast as validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

//! Setup Comparator
//!
//! Deltas are always `proposed - current`. The cost delta is only reported when
//! both setups are fully priced; a partial sum would be misleading.

use crate::catalog::ComponentCatalog;
use crate::compatibility::{check_rear_derailleur, CompatibilityResult};
use crate::config::AnalysisConfig;
use crate::errors::AnalysisError;
use crate::metrics::{
    analyze_gear_spread, calculate_chain_length, calculate_cost, calculate_gear_ratios,
    calculate_system_weight, ChainLength, CostBreakdown, GearAnalysis, GearRatio,
    WeightBreakdown,
};
use crate::recommendation_engine::{Recommendation, RecommendationEngine};
use cranksmith_core::errors::{AppError, AppResult};
use cranksmith_core::models::{ComponentRef, Setup, SetupSelection};
use serde::Serialize;
use tracing::{debug, warn};

/// Everything computed for one setup
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupAnalysis {
    /// Gear table sorted by ratio
    pub gears: Vec<GearRatio>,
    /// Range summary
    pub analysis: GearAnalysis,
    /// Weight breakdown
    pub weights: WeightBreakdown,
    /// Rule findings
    pub compatibility: CompatibilityResult,
    /// Chain estimate
    pub chain_length: ChainLength,
    /// Price breakdown
    pub costs: CostBreakdown,
    /// Resolved component records
    pub components: Setup,
}

/// Per-part weight deltas in grams
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightDelta {
    /// Crankset delta
    pub crankset: i64,
    /// Cassette delta
    pub cassette: i64,
    /// Rear derailleur delta
    pub rear_derailleur: i64,
}

/// Gear range deltas
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GearChanges {
    /// Spread delta
    pub spread: f64,
    /// Lowest ratio delta
    pub lowest: f64,
    /// Highest ratio delta
    pub highest: f64,
    /// Gear count delta
    pub total_gears: i64,
}

/// Differences between the two setups plus advice
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// Total weight delta in grams
    pub weight_change: i64,
    /// Per-part weight deltas
    pub weight_breakdown: WeightDelta,
    /// Gear range deltas
    pub gear_changes: GearChanges,
    /// Price delta; `null` unless both setups are fully priced
    pub cost_change: Option<i64>,
    /// Ordered recommendations
    pub recommendations: Vec<Recommendation>,
}

/// Full comparison payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupComparison {
    /// Current setup analysis
    pub current: SetupAnalysis,
    /// Proposed setup analysis
    pub proposed: SetupAnalysis,
    /// Deltas and recommendations
    pub comparison: ComparisonResult,
}

fn require_ref<'a>(slot: Option<&'a ComponentRef>, field: &str) -> AppResult<&'a str> {
    match slot {
        Some(component) if !component.id.trim().is_empty() => Ok(&component.id),
        _ => Err(AppError::missing_field(field)),
    }
}

/// Resolve a selection against the catalog.
///
/// `field_prefix` names the selection in error details (e.g. `proposedSetup`);
/// an empty prefix reports bare field names.
///
/// # Errors
/// Returns `MISSING_REQUIRED_FIELD` for an absent slot and `INVALID_INPUT` for
/// an id the catalog does not know
pub fn resolve_setup(
    catalog: &dyn ComponentCatalog,
    selection: &SetupSelection,
    field_prefix: &str,
) -> AppResult<Setup> {
    let field = |name: &str| {
        if field_prefix.is_empty() {
            name.to_owned()
        } else {
            format!("{field_prefix}.{name}")
        }
    };
    let crankset_field = field("crankset");
    let cassette_field = field("cassette");
    let rd_field = field("rearDerailleur");

    let crankset_id = require_ref(selection.crankset.as_ref(), &crankset_field)?;
    let cassette_id = require_ref(selection.cassette.as_ref(), &cassette_field)?;
    let rd_id = require_ref(selection.rear_derailleur.as_ref(), &rd_field)?;

    let crankset = catalog
        .find_crankset(crankset_id)
        .map_err(|e| e.into_validation_error(&crankset_field))?;
    let cassette = catalog
        .find_cassette(cassette_id)
        .map_err(|e| e.into_validation_error(&cassette_field))?;
    let rear_derailleur = catalog
        .find_rear_derailleur(rd_id)
        .map_err(|e| e.into_validation_error(&rd_field))?;

    Ok(Setup {
        crankset: crankset.clone(),
        cassette: cassette.clone(),
        rear_derailleur: rear_derailleur.clone(),
    })
}

/// Run the rule evaluator and the metrics calculator for one setup
///
/// # Errors
/// Returns an `AnalysisError` if a part has no tooth counts
pub fn analyze_setup(
    setup: Setup,
    config: &AnalysisConfig,
) -> Result<SetupAnalysis, AnalysisError> {
    let compatibility =
        check_rear_derailleur(&setup.rear_derailleur, &setup.cassette, &setup.crankset);
    let gears = calculate_gear_ratios(&setup.crankset, &setup.cassette)?;
    let analysis = analyze_gear_spread(&gears)?;
    let chain_length =
        calculate_chain_length(&setup.crankset, &setup.cassette, config.chainstay_length_mm)?;

    Ok(SetupAnalysis {
        gears,
        analysis,
        weights: calculate_system_weight(&setup),
        compatibility,
        chain_length,
        costs: calculate_cost(&setup),
        components: setup,
    })
}

fn delta(current: u32, proposed: u32) -> i64 {
    i64::from(proposed) - i64::from(current)
}

fn count_delta(current: usize, proposed: usize) -> i64 {
    let signed = |n: usize| i64::try_from(n).unwrap_or(i64::MAX);
    signed(proposed) - signed(current)
}

fn diff(
    current: &SetupAnalysis,
    proposed: &SetupAnalysis,
    engine: &RecommendationEngine,
) -> ComparisonResult {
    let (cw, pw) = (&current.weights, &proposed.weights);
    let (ca, pa) = (&current.analysis, &proposed.analysis);

    let cost_change = (current.costs.has_all_prices && proposed.costs.has_all_prices)
        .then(|| delta(current.costs.total, proposed.costs.total));

    ComparisonResult {
        weight_change: delta(cw.total, pw.total),
        weight_breakdown: WeightDelta {
            crankset: delta(cw.crankset, pw.crankset),
            cassette: delta(cw.cassette, pw.cassette),
            rear_derailleur: delta(cw.rear_derailleur, pw.rear_derailleur),
        },
        gear_changes: GearChanges {
            spread: pa.spread - ca.spread,
            lowest: pa.lowest - ca.lowest,
            highest: pa.highest - ca.highest,
            total_gears: count_delta(ca.total_gears, pa.total_gears),
        },
        cost_change,
        recommendations: engine.generate(current, proposed),
    }
}

/// Compare a current and a proposed selection
///
/// # Errors
/// Returns a validation error if any of the six references is missing or
/// unknown, or a computation error if catalog data is unusable
pub fn compare(
    catalog: &dyn ComponentCatalog,
    config: &AnalysisConfig,
    current: &SetupSelection,
    proposed: &SetupSelection,
) -> AppResult<SetupComparison> {
    let current_setup = resolve_setup(catalog, current, "currentSetup")?;
    let proposed_setup = resolve_setup(catalog, proposed, "proposedSetup")?;

    let current = analyze_setup(current_setup, config).inspect_err(|e| {
        warn!(error = %e, "Current setup analysis failed");
    })?;
    let proposed = analyze_setup(proposed_setup, config).inspect_err(|e| {
        warn!(error = %e, "Proposed setup analysis failed");
    })?;

    let engine = RecommendationEngine::new(config.recommendations.clone());
    let comparison = diff(&current, &proposed, &engine);

    debug!(
        weight_change = comparison.weight_change,
        cost_change = ?comparison.cost_change,
        recommendations = comparison.recommendations.len(),
        "Setups compared"
    );

    Ok(SetupComparison {
        current,
        proposed,
        comparison,
    })
}
