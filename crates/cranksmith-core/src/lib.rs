// ABOUTME: Core types and constants for the CrankSmith drivetrain analysis platform
// ABOUTME: Foundation crate with error handling, component models, and drivetrain constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

#![deny(unsafe_code)]

//! # CrankSmith Core
//!
//! Foundation crate providing shared types and constants for the CrankSmith
//! drivetrain analysis platform. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and catalog errors
//! - **constants**: Drivetrain constants (chain weight, wheel size, chain pitch)
//! - **models**: Component records (crankset, cassette, rear derailleur) and setup selections

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Drivetrain and service constants organized by domain
pub mod constants;

/// Component catalog records, bike types, brands and setup selections
pub mod models;
