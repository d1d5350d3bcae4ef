// ABOUTME: Analysis engine configuration for chain estimates and recommendation thresholds
// ABOUTME: Defaults come from the documented drivetrain constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

//! Analysis Configuration
//!
//! Holds the few tunable numbers of the engine. Everything else (chain weight,
//! wheel size, link pitch) is a fixed constant in `cranksmith_core::constants`.

use cranksmith_core::constants::{drivetrain, recommendations};
use serde::{Deserialize, Serialize};

/// Analysis engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisConfig {
    /// Chainstay length used by the chain-length estimate (mm)
    pub chainstay_length_mm: f64,
    /// Thresholds for recommendation rules
    pub recommendations: RecommendationThresholds,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            chainstay_length_mm: drivetrain::DEFAULT_CHAINSTAY_LENGTH_MM,
            recommendations: RecommendationThresholds::default(),
        }
    }
}

impl AnalysisConfig {
    /// Override the chainstay length
    #[must_use]
    pub fn with_chainstay_length(mut self, chainstay_length_mm: f64) -> Self {
        self.chainstay_length_mm = chainstay_length_mm;
        self
    }
}

/// Thresholds for triggering recommendations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationThresholds {
    /// Proposed spread must exceed `current * ratio` to report a wider range
    pub spread_increase_ratio: f64,
    /// Absolute weight change (grams) that must be exceeded to report it
    pub significant_weight_change_grams: i64,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            spread_increase_ratio: recommendations::SPREAD_INCREASE_RATIO,
            significant_weight_change_grams: recommendations::SIGNIFICANT_WEIGHT_CHANGE_GRAMS,
        }
    }
}
