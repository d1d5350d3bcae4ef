// ABOUTME: Route module organization for CrankSmith HTTP endpoints
// ABOUTME: Groups health, calculation and catalog routes with thin handlers over the analysis crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

//! Route module for the CrankSmith server
//!
//! Each domain module holds only route definitions and thin handlers that
//! delegate to `cranksmith-analysis`.

/// Setup comparison and compatibility check routes
pub mod calculate;
/// Component catalog routes
pub mod components;
/// Request extractors with `AppError` rejections
pub mod extract;
/// Health check and readiness routes
pub mod health;

/// Calculation route handlers
pub use calculate::CalculateRoutes;
/// Catalog route handlers
pub use components::ComponentRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
