// ABOUTME: Errors raised while computing drivetrain metrics
// ABOUTME: Converts into AppError as an internal computation failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

use cranksmith_core::errors::AppError;
use cranksmith_core::models::ComponentKind;
use serde_json::{json, Value};
use thiserror::Error;

/// Failures inside the metrics calculator.
///
/// These indicate bad catalog data that slipped past load-time validation,
/// never a problem with the client's request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// A crankset or cassette has no tooth counts
    #[error("{kind} '{component_id}' has an empty teeth list")]
    EmptyTeeth {
        /// Kind of the offending component
        kind: ComponentKind,
        /// Identifier of the offending component
        component_id: String,
    },
    /// Gear spread was requested for an empty gear table
    #[error("cannot analyze an empty gear table")]
    EmptyGearTable,
}

impl AnalysisError {
    /// Create an "empty teeth" error
    #[must_use]
    pub fn empty_teeth(kind: ComponentKind, component_id: impl Into<String>) -> Self {
        Self::EmptyTeeth {
            kind,
            component_id: component_id.into(),
        }
    }
}

impl From<AnalysisError> for AppError {
    fn from(error: AnalysisError) -> Self {
        let details = match &error {
            AnalysisError::EmptyTeeth { kind, component_id } => json!({
                "kind": kind,
                "component": component_id,
            }),
            AnalysisError::EmptyGearTable => Value::Null,
        };
        Self::computation(error.to_string())
            .with_details(details)
            .with_source(error)
    }
}
