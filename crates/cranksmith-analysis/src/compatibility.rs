// ABOUTME: Mechanical compatibility rules for a rear derailleur, cassette and crankset
// ABOUTME: Accumulates hard errors and advisory warnings without short-circuiting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

//! Compatibility Rule Evaluator
//!
//! Four rules run in a fixed order and every one of them is evaluated:
//!
//! 1. max cog (error)
//! 2. total capacity, multi-ring cranksets only (warning)
//! 3. speed count (error)
//! 4. brand (warning, with a table of known cross-compatible families)
//!
//! Findings are data, not failures: an incompatible setup still produces a
//! fully computed [`CompatibilityResult`].

use cranksmith_core::models::{Brand, Cassette, Crankset, RearDerailleur};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of evaluating the rule set for one setup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResult {
    /// Hard incompatibilities, in rule order
    pub errors: Vec<String>,
    /// Advisory findings, in rule order
    pub warnings: Vec<String>,
}

impl CompatibilityResult {
    /// No hard incompatibilities were found
    #[must_use]
    pub fn is_compatible(&self) -> bool {
        self.errors.is_empty()
    }

    /// At least one advisory finding was produced
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// A known cross-brand pairing that mounts and shifts correctly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandException {
    /// Both parts carry a compatibility tag containing this text
    SharedTag(&'static str),
    /// Derailleur model contains the first text and cassette model the second
    ModelFamilies {
        /// Derailleur product family
        derailleur: &'static str,
        /// Cassette product family
        cassette: &'static str,
    },
}

impl BrandException {
    fn allows(self, rd: &RearDerailleur, cassette: &Cassette) -> bool {
        match self {
            Self::SharedTag(tag) => {
                has_tag_containing(&rd.compatibility, tag)
                    && has_tag_containing(&cassette.compatibility, tag)
            }
            Self::ModelFamilies {
                derailleur,
                cassette: cassette_family,
            } => rd.base.model.contains(derailleur) && cassette.base.model.contains(cassette_family),
        }
    }
}

/// Cross-brand pairings that never warn. New exceptions are added here.
pub const BRAND_EXCEPTIONS: &[BrandException] = &[
    BrandException::SharedTag("Shimano"),
    // SRAM road XPLR derailleurs run Eagle MTB cassettes
    BrandException::ModelFamilies {
        derailleur: "XPLR",
        cassette: "Eagle",
    },
];

fn has_tag_containing(tags: &[String], needle: &str) -> bool {
    tags.iter().any(|tag| tag.contains(needle))
}

/// Evaluate every compatibility rule for one drivetrain.
///
/// Rules whose inputs are missing (an empty tooth list) are skipped rather than
/// reported; catalog validation keeps that from happening for loaded data.
#[must_use]
pub fn check_rear_derailleur(
    rd: &RearDerailleur,
    cassette: &Cassette,
    crankset: &Crankset,
) -> CompatibilityResult {
    let mut result = CompatibilityResult::default();

    if let Some(max_cog) = cassette.largest_cog() {
        if max_cog > rd.max_cog {
            result.errors.push(format!(
                "{} has a max cog of {}T, but your cassette has {}T",
                rd.base.model, rd.max_cog, max_cog
            ));
        }
    }

    if crankset.is_multi_ring() {
        if let Some(required) = required_capacity(crankset, cassette) {
            if required > rd.total_capacity {
                result.warnings.push(format!(
                    "Total capacity needed: {}T, but {} only supports {}T",
                    required, rd.base.model, rd.total_capacity
                ));
            }
        }
    }

    if !speeds_match(rd, cassette) {
        result.errors.push(format!(
            "Speed mismatch: {} is {}, cassette is {}",
            rd.base.model, rd.base.speeds, cassette.base.speeds
        ));
    }

    if !brands_compatible(rd, cassette) {
        result.warnings.push(format!(
            "Brand compatibility: {} with {} may require special consideration",
            rd.base.model, cassette.base.model
        ));
    }

    debug!(
        derailleur = %rd.base.id,
        cassette = %cassette.base.id,
        crankset = %crankset.base.id,
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "Compatibility rules evaluated"
    );

    result
}

/// Chainring delta plus cog delta the derailleur must absorb
#[must_use]
pub fn required_capacity(crankset: &Crankset, cassette: &Cassette) -> Option<u32> {
    let ring_delta = crankset.largest_ring()? - crankset.smallest_ring()?;
    let cog_delta = cassette.largest_cog()? - cassette.smallest_cog()?;
    Some(ring_delta + cog_delta)
}

/// An unparseable label never matches anything, including another unparseable label
fn speeds_match(rd: &RearDerailleur, cassette: &Cassette) -> bool {
    match (rd.base.speed_count(), cassette.base.speed_count()) {
        (Some(rd_speeds), Some(cassette_speeds)) => rd_speeds == cassette_speeds,
        _ => false,
    }
}

fn brands_compatible(rd: &RearDerailleur, cassette: &Cassette) -> bool {
    let rd_brand: Brand = rd.base.brand();
    if rd_brand == cassette.base.brand() {
        return true;
    }
    BRAND_EXCEPTIONS
        .iter()
        .any(|exception| exception.allows(rd, cassette))
}
