// ABOUTME: Error types used by the HTTP layer, re-exported from the workspace crates
// ABOUTME: Adds environment-aware redaction of internal error details
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

//! # Unified Error Handling System
//!
//! `AppError` and `ErrorCode` live in `cranksmith-core`; domain errors from the
//! catalog and the analysis engine convert into them with `?`.

pub use cranksmith_analysis::AnalysisError;
pub use cranksmith_core::errors::{AppError, AppResult, CatalogError, ErrorCode, ErrorResponse};

use crate::config::environment::Environment;

/// Shape an error for the client.
///
/// Outside development, 5xx errors lose their message and details; client
/// errors always keep them.
#[must_use]
pub fn for_client(error: AppError, environment: Environment) -> AppError {
    if environment.is_development() {
        error
    } else {
        error.redacted()
    }
}
