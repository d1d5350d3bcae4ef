// ABOUTME: Turns a current/proposed setup analysis into ordered advisory messages
// ABOUTME: Rules fire independently and are emitted in a fixed priority order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

//! Recommendation Generator
//!
//! Output order is part of the contract: compatibility errors, compatibility
//! warnings, gear range, weight, electronic shifting, wireless shifting, clutch.
//! Every applicable rule fires.

use crate::comparator::SetupAnalysis;
use crate::config::RecommendationThresholds;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Severity of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    /// Must be resolved before the build works
    Error,
    /// Worth checking before buying
    Warning,
    /// Informational upside
    Info,
}

/// Advisory message for the proposed setup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Severity
    pub kind: RecommendationKind,
    /// Short heading
    pub title: String,
    /// One-sentence explanation
    pub message: String,
    /// Individual findings backing the message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl Recommendation {
    fn new(kind: RecommendationKind, title: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.to_owned(),
            message: message.into(),
            details: None,
        }
    }

    fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = Some(details);
        self
    }
}

/// Recommendation generator configured with trigger thresholds
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    thresholds: RecommendationThresholds,
}

impl RecommendationEngine {
    /// Create an engine with custom thresholds
    #[must_use]
    pub const fn new(thresholds: RecommendationThresholds) -> Self {
        Self { thresholds }
    }

    /// Thresholds in use
    #[must_use]
    pub const fn thresholds(&self) -> &RecommendationThresholds {
        &self.thresholds
    }

    /// Produce recommendations for moving from `current` to `proposed`
    #[must_use]
    pub fn generate(
        &self,
        current: &SetupAnalysis,
        proposed: &SetupAnalysis,
    ) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        let compatibility = &proposed.compatibility;
        if !compatibility.errors.is_empty() {
            recommendations.push(
                Recommendation::new(
                    RecommendationKind::Error,
                    "Compatibility Issues",
                    "The proposed setup has compatibility problems that must be resolved",
                )
                .with_details(compatibility.errors.clone()),
            );
        }

        if !compatibility.warnings.is_empty() {
            recommendations.push(
                Recommendation::new(
                    RecommendationKind::Warning,
                    "Compatibility Warnings",
                    "The proposed setup may need adjustments to work reliably",
                )
                .with_details(compatibility.warnings.clone()),
            );
        }

        let current_spread = current.analysis.spread;
        let proposed_spread = proposed.analysis.spread;
        if proposed_spread > current_spread * self.thresholds.spread_increase_ratio {
            recommendations.push(Recommendation::new(
                RecommendationKind::Info,
                "Wider Gear Range",
                format!(
                    "Gear spread increases from {current_spread:.1} to {proposed_spread:.1}, giving easier climbing gears or a higher top end"
                ),
            ));
        }

        let weight_change =
            i64::from(proposed.weights.total) - i64::from(current.weights.total);
        if weight_change.abs() > self.thresholds.significant_weight_change_grams {
            let grams = weight_change.abs();
            recommendations.push(if weight_change > 0 {
                Recommendation::new(
                    RecommendationKind::Warning,
                    "Weight Increase",
                    format!("The proposed setup is {grams}g heavier than your current drivetrain"),
                )
            } else {
                Recommendation::new(
                    RecommendationKind::Info,
                    "Weight Savings",
                    format!("The proposed setup is {grams}g lighter than your current drivetrain"),
                )
            });
        }

        let current_rd = &current.components.rear_derailleur;
        let proposed_rd = &proposed.components.rear_derailleur;

        if !current_rd.is_electronic && proposed_rd.is_electronic {
            recommendations.push(Recommendation::new(
                RecommendationKind::Info,
                "Electronic Shifting",
                "Electronic shifting gives precise, consistent shifts that stay in adjustment",
            ));
        }

        if !current_rd.is_wireless && proposed_rd.is_wireless {
            recommendations.push(Recommendation::new(
                RecommendationKind::Info,
                "Wireless Shifting",
                "Wireless shifting removes cables and housing for a cleaner build and simpler maintenance",
            ));
        }

        if !current_rd.has_clutch && proposed_rd.has_clutch {
            recommendations.push(Recommendation::new(
                RecommendationKind::Info,
                "Clutch Derailleur",
                "A clutch derailleur improves chain retention on rough terrain",
            ));
        }

        debug!(
            count = recommendations.len(),
            weight_change, "Recommendations generated"
        );

        recommendations
    }
}
