// ABOUTME: Gear ratio table, gear spread, chain length, system weight and cost calculations
// ABOUTME: All figures use fixed drivetrain constants (27" wheel, 257 g chain, 12.7 mm pitch)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

//! Gear & Chain Metrics Calculator
//!
//! The chain-length figure is a rule-of-thumb approximation, not a derailleur
//! geometry solver. Weight includes a fixed chain estimate rather than a
//! measured per-setup value.

use crate::errors::AnalysisError;
use cranksmith_core::constants::drivetrain::{
    CHAIN_LINK_PITCH_MM, CHAIN_SLACK_LINKS, CHAIN_WEIGHT_GRAMS, WHEEL_DIAMETER_INCHES,
    WHEEL_RADIUS_METERS,
};
use cranksmith_core::models::{Cassette, CatalogRecord, Crankset, Setup};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// One chainring/cog combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GearRatio {
    /// Chainring teeth
    pub chainring: u32,
    /// Cog teeth
    pub cog: u32,
    /// `chainring / cog`
    pub ratio: f64,
    /// Ratio times a 27" wheel
    pub gear_inches: f64,
    /// Meters travelled per crank revolution
    pub development: f64,
}

impl GearRatio {
    fn new(chainring: u32, cog: u32) -> Self {
        let ratio = f64::from(chainring) / f64::from(cog);
        Self {
            chainring,
            cog,
            ratio,
            gear_inches: ratio * WHEEL_DIAMETER_INCHES,
            development: ratio * 2.0 * PI * WHEEL_RADIUS_METERS,
        }
    }
}

/// Range summary of a gear table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GearAnalysis {
    /// Easiest gear ratio
    pub lowest: f64,
    /// Hardest gear ratio
    pub highest: f64,
    /// `highest / lowest`
    pub spread: f64,
    /// Number of combinations
    pub total_gears: usize,
    /// Geometric mean of consecutive ratio steps
    pub average_step: f64,
}

/// Weight of each part plus the chain estimate, in grams
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightBreakdown {
    /// Crankset weight
    pub crankset: u32,
    /// Cassette weight
    pub cassette: u32,
    /// Rear derailleur weight
    pub rear_derailleur: u32,
    /// Fixed chain estimate
    pub chain: u32,
    /// Sum of all of the above
    pub total: u32,
}

/// Chain length estimate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainLength {
    /// Links needed, rounded up
    pub links: u32,
    /// Human-readable guidance
    pub recommendation: String,
}

/// Prices per part and their sum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    /// Crankset price, when known
    pub crankset: Option<u32>,
    /// Cassette price, when known
    pub cassette: Option<u32>,
    /// Rear derailleur price, when known
    pub rear_derailleur: Option<u32>,
    /// Sum of the known prices
    pub total: u32,
    /// Every part has a price
    pub has_all_prices: bool,
}

fn require_teeth<T: CatalogRecord>(record: &T) -> Result<&[u32], AnalysisError> {
    match record.teeth() {
        Some(teeth) if !teeth.is_empty() => Ok(teeth),
        _ => Err(AnalysisError::empty_teeth(T::KIND, &record.base().id)),
    }
}

/// Every chainring/cog combination, sorted ascending by ratio.
///
/// The sort is stable, so equal ratios keep chainring-major generation order.
///
/// # Errors
/// Returns `AnalysisError::EmptyTeeth` if either part has no tooth counts
pub fn calculate_gear_ratios(
    crankset: &Crankset,
    cassette: &Cassette,
) -> Result<Vec<GearRatio>, AnalysisError> {
    let rings = require_teeth(crankset)?;
    let cogs = require_teeth(cassette)?;

    let mut gears: Vec<GearRatio> = rings
        .iter()
        .flat_map(|&ring| cogs.iter().map(move |&cog| GearRatio::new(ring, cog)))
        .collect();
    gears.sort_by(|a, b| a.ratio.total_cmp(&b.ratio));

    Ok(gears)
}

/// Summarize the range covered by a gear table
///
/// # Errors
/// Returns `AnalysisError::EmptyGearTable` for an empty slice
pub fn analyze_gear_spread(gears: &[GearRatio]) -> Result<GearAnalysis, AnalysisError> {
    if gears.is_empty() {
        return Err(AnalysisError::EmptyGearTable);
    }

    let (lowest, highest) = gears
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), gear| {
            (lo.min(gear.ratio), hi.max(gear.ratio))
        });
    let spread = highest / lowest;
    let total_gears = gears.len();

    // Product of consecutive quotients telescopes to highest / lowest
    let average_step = if total_gears <= 1 {
        1.0
    } else {
        spread.powf(1.0 / (total_gears - 1) as f64)
    };

    Ok(GearAnalysis {
        lowest,
        highest,
        spread,
        total_gears,
        average_step,
    })
}

/// Sum of part weights plus the fixed chain estimate, saturating at `u32::MAX`
#[must_use]
pub fn calculate_system_weight(setup: &Setup) -> WeightBreakdown {
    let crankset = setup.crankset.base.weight;
    let cassette = setup.cassette.base.weight;
    let rear_derailleur = setup.rear_derailleur.base.weight;

    WeightBreakdown {
        crankset,
        cassette,
        rear_derailleur,
        chain: CHAIN_WEIGHT_GRAMS,
        total: crankset
            .saturating_add(cassette)
            .saturating_add(rear_derailleur)
            .saturating_add(CHAIN_WEIGHT_GRAMS),
    }
}

/// Approximate chain length: `ceil(2 * chainstay / 12.7 + (big ring + big cog) / 2 + 2)`
///
/// # Errors
/// Returns `AnalysisError::EmptyTeeth` if either part has no tooth counts
pub fn calculate_chain_length(
    crankset: &Crankset,
    cassette: &Cassette,
    chainstay_length_mm: f64,
) -> Result<ChainLength, AnalysisError> {
    let big_ring = require_teeth(crankset)?.iter().copied().max().unwrap_or(0);
    let big_cog = require_teeth(cassette)?.iter().copied().max().unwrap_or(0);

    let base_length = 2.0 * chainstay_length_mm / CHAIN_LINK_PITCH_MM
        + (f64::from(big_ring) + f64::from(big_cog)) / 2.0
        + CHAIN_SLACK_LINKS;
    let links = base_length.ceil() as u32;

    Ok(ChainLength {
        links,
        recommendation: format!("Approximately {links} links needed"),
    })
}

/// Sum of known prices; `has_all_prices` is false if any price is missing
#[must_use]
pub fn calculate_cost(setup: &Setup) -> CostBreakdown {
    let crankset = setup.crankset.base.price;
    let cassette = setup.cassette.base.price;
    let rear_derailleur = setup.rear_derailleur.base.price;
    let prices = [crankset, cassette, rear_derailleur];

    CostBreakdown {
        crankset,
        cassette,
        rear_derailleur,
        total: prices
            .iter()
            .flatten()
            .fold(0_u32, |sum, price| sum.saturating_add(*price)),
        has_all_prices: prices.iter().all(Option::is_some),
    }
}
