// ABOUTME: Physical constants and approximations used by gear, chain and weight calculations
// ABOUTME: Fixed values documented as estimates rather than per-bike measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

/// Estimated chain weight added to every system weight (grams)
pub const CHAIN_WEIGHT_GRAMS: u32 = 257;

/// Wheel diameter used for gear inches (700c approximation, inches)
pub const WHEEL_DIAMETER_INCHES: f64 = 27.0;

/// Wheel radius proxy used for development (meters)
pub const WHEEL_RADIUS_METERS: f64 = 1.05;

/// Default chainstay length for the chain-length estimate (millimeters)
pub const DEFAULT_CHAINSTAY_LENGTH_MM: f64 = 430.0;

/// Converts chainstay millimeters to chain-link units (half-inch pitch)
pub const CHAIN_LINK_PITCH_MM: f64 = 12.7;

/// Fixed slack allowance added to the chain-length estimate (links)
pub const CHAIN_SLACK_LINKS: f64 = 2.0;
