// ABOUTME: Catalog-specific error types for component lookup and catalog loading
// ABOUTME: Provides structured errors that convert into the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

//! # Catalog Error Types
//!
//! Errors raised by the component catalog. Lookups never produce HTTP-shaped
//! errors themselves; the request layer decides whether a missing component is
//! a bad request (unknown id inside a setup) or a 404 (direct lookup).

use super::{AppError, ErrorCode};
use crate::models::ComponentKind;
use thiserror::Error;

/// Errors specific to catalog operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No component of the given kind carries this identifier
    #[error("{kind} '{id}' not found in catalog")]
    NotFound {
        /// Partition that was searched
        kind: ComponentKind,
        /// Identifier that did not resolve
        id: String,
    },
    /// Two records of the same kind share an identifier
    #[error("duplicate {kind} id '{id}' in catalog")]
    DuplicateId {
        /// Partition containing the duplicate
        kind: ComponentKind,
        /// Duplicated identifier
        id: String,
    },
    /// A record violates a catalog invariant
    #[error("invalid {kind} '{id}': {reason}")]
    InvalidRecord {
        /// Partition containing the record
        kind: ComponentKind,
        /// Identifier of the offending record
        id: String,
        /// Violated invariant
        reason: String,
    },
    /// The catalog document could not be read or parsed
    #[error("failed to load catalog: {0}")]
    Load(String),
}

impl CatalogError {
    /// Create a "not found" error
    #[must_use]
    pub fn not_found(kind: ComponentKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Create an "invalid record" error
    #[must_use]
    pub fn invalid_record(
        kind: ComponentKind,
        id: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidRecord {
            kind,
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Convert a lookup failure inside a submitted setup into a validation error.
    ///
    /// An unknown id in a calculation request is the client's fault, so it maps to
    /// 400 rather than 404.
    #[must_use]
    pub fn into_validation_error(self, field: &str) -> AppError {
        if let Self::NotFound { kind, id } = &self {
            return AppError::new(
                ErrorCode::InvalidInput,
                format!("Invalid {kind} selection: '{id}' does not exist"),
            )
            .with_details(serde_json::json!({
                "field": field,
                "kind": kind,
                "id": id,
            }));
        }
        AppError::from(self)
    }
}

impl From<CatalogError> for AppError {
    fn from(error: CatalogError) -> Self {
        let code = match &error {
            CatalogError::NotFound { .. } => ErrorCode::ResourceNotFound,
            CatalogError::DuplicateId { .. } | CatalogError::InvalidRecord { .. } => {
                ErrorCode::ConfigInvalid
            }
            CatalogError::Load(_) => ErrorCode::ConfigError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
