// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for drivetrain math, recommendation thresholds and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Drivetrain measurement constants used by the metrics calculator
pub mod drivetrain;

/// Default thresholds for the recommendation engine
pub mod recommendations {
    /// A proposed gear spread above `current * SPREAD_INCREASE_RATIO` is reported
    pub const SPREAD_INCREASE_RATIO: f64 = 1.15;
    /// Weight changes strictly above this many grams are reported
    pub const SIGNIFICANT_WEIGHT_CHANGE_GRAMS: i64 = 50;
}

/// Service names
pub mod service_names {
    /// HTTP server binary
    pub const CRANKSMITH_SERVER: &str = "cranksmith-server";
}
