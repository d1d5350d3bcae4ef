// ABOUTME: Read-only component catalog with lookup by id and listing by bike type
// ABOUTME: Loads and validates the JSON catalog document once, then serves shared references
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

//! Component Catalog Accessor
//!
//! The catalog is static reference data. It is validated when loaded so that
//! the rule evaluator and metrics calculator can rely on non-empty tooth lists
//! and positive weights. Swapping in a new catalog means building a new
//! [`StaticCatalog`] and replacing the shared `Arc`, never mutating one in place.

use cranksmith_core::errors::CatalogError;
use cranksmith_core::models::{
    BikeType, Cassette, CatalogRecord, Component, ComponentKind, Crankset, RearDerailleur,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Catalog bundled with the crate
const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

/// Catalog document: one ordered partition per component kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    /// Cranksets in declaration order
    #[serde(default)]
    pub cranksets: Vec<Crankset>,
    /// Cassettes in declaration order
    #[serde(default)]
    pub cassettes: Vec<Cassette>,
    /// Rear derailleurs in declaration order
    #[serde(default)]
    pub rear_derailleurs: Vec<RearDerailleur>,
}

/// Read-only lookup over component records
pub trait ComponentCatalog: Send + Sync {
    /// All cranksets in declaration order
    fn cranksets(&self) -> &[Crankset];

    /// All cassettes in declaration order
    fn cassettes(&self) -> &[Cassette];

    /// All rear derailleurs in declaration order
    fn rear_derailleurs(&self) -> &[RearDerailleur];

    /// Crankset with this exact id
    ///
    /// # Errors
    /// Returns `CatalogError::NotFound` when no crankset carries the id
    fn find_crankset(&self, id: &str) -> Result<&Crankset, CatalogError> {
        find_record(self.cranksets(), id)
    }

    /// Cassette with this exact id
    ///
    /// # Errors
    /// Returns `CatalogError::NotFound` when no cassette carries the id
    fn find_cassette(&self, id: &str) -> Result<&Cassette, CatalogError> {
        find_record(self.cassettes(), id)
    }

    /// Rear derailleur with this exact id
    ///
    /// # Errors
    /// Returns `CatalogError::NotFound` when no derailleur carries the id
    fn find_rear_derailleur(&self, id: &str) -> Result<&RearDerailleur, CatalogError> {
        find_record(self.rear_derailleurs(), id)
    }

    /// Exact id match within one kind's partition
    ///
    /// # Errors
    /// Returns `CatalogError::NotFound` when the id does not resolve
    fn find_by_id(&self, kind: ComponentKind, id: &str) -> Result<Component, CatalogError> {
        match kind {
            ComponentKind::Crankset => self.find_crankset(id).cloned().map(Component::Crankset),
            ComponentKind::Cassette => self.find_cassette(id).cloned().map(Component::Cassette),
            ComponentKind::RearDerailleur => self
                .find_rear_derailleur(id)
                .cloned()
                .map(Component::RearDerailleur),
        }
    }

    /// Components of `kind` offered for `bike_type`, in declaration order.
    ///
    /// Gravel also draws from the MTB pool.
    fn list_for_bike_type(&self, kind: ComponentKind, bike_type: BikeType) -> Vec<Component> {
        match kind {
            ComponentKind::Crankset => {
                into_components(filter_records(self.cranksets(), Some(bike_type)))
            }
            ComponentKind::Cassette => {
                into_components(filter_records(self.cassettes(), Some(bike_type)))
            }
            ComponentKind::RearDerailleur => {
                into_components(filter_records(self.rear_derailleurs(), Some(bike_type)))
            }
        }
    }

    /// Every partition filtered for `bike_type`; `None` returns the whole catalog
    fn listing(&self, bike_type: Option<BikeType>) -> CatalogDocument {
        CatalogDocument {
            cranksets: filter_records(self.cranksets(), bike_type),
            cassettes: filter_records(self.cassettes(), bike_type),
            rear_derailleurs: filter_records(self.rear_derailleurs(), bike_type),
        }
    }
}

fn find_record<'a, T: CatalogRecord>(records: &'a [T], id: &str) -> Result<&'a T, CatalogError> {
    records
        .iter()
        .find(|record| record.base().id == id)
        .ok_or_else(|| CatalogError::not_found(T::KIND, id))
}

fn into_components<T: CatalogRecord>(records: Vec<T>) -> Vec<Component> {
    records.into_iter().map(CatalogRecord::into_component).collect()
}

fn filter_records<T: CatalogRecord>(records: &[T], bike_type: Option<BikeType>) -> Vec<T> {
    records
        .iter()
        .filter(|record| bike_type.is_none_or(|wanted| wanted.accepts(record.base().bike_type)))
        .cloned()
        .collect()
}

/// In-memory catalog loaded from a JSON document
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    document: CatalogDocument,
}

impl StaticCatalog {
    /// Validate and wrap a catalog document
    ///
    /// # Errors
    /// Returns an error when ids collide within a kind or a record breaks an invariant
    pub fn from_document(document: CatalogDocument) -> Result<Self, CatalogError> {
        validate_partition(&document.cranksets)?;
        validate_partition(&document.cassettes)?;
        validate_partition(&document.rear_derailleurs)?;

        for rd in &document.rear_derailleurs {
            if rd.max_cog == 0 {
                return Err(CatalogError::invalid_record(
                    ComponentKind::RearDerailleur,
                    &rd.base.id,
                    "maxCog must be positive",
                ));
            }
        }

        debug!(
            cranksets = document.cranksets.len(),
            cassettes = document.cassettes.len(),
            rear_derailleurs = document.rear_derailleurs.len(),
            "Catalog validated"
        );

        Ok(Self { document })
    }

    /// Parse and validate a JSON catalog
    ///
    /// # Errors
    /// Returns `CatalogError::Load` on malformed JSON, or a validation error
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            serde_json::from_str(json).map_err(|e| CatalogError::Load(e.to_string()))?;
        Self::from_document(document)
    }

    /// Read, parse and validate a JSON catalog file
    ///
    /// # Errors
    /// Returns `CatalogError::Load` when the file cannot be read or parsed
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| CatalogError::Load(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }

    /// Catalog bundled with the crate
    ///
    /// # Errors
    /// Returns an error only if the bundled data is corrupt
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json_str(EMBEDDED_CATALOG)
    }

    /// Underlying document
    #[must_use]
    pub const fn document(&self) -> &CatalogDocument {
        &self.document
    }
}

impl ComponentCatalog for StaticCatalog {
    fn cranksets(&self) -> &[Crankset] {
        &self.document.cranksets
    }

    fn cassettes(&self) -> &[Cassette] {
        &self.document.cassettes
    }

    fn rear_derailleurs(&self) -> &[RearDerailleur] {
        &self.document.rear_derailleurs
    }
}

fn validate_partition<T: CatalogRecord>(records: &[T]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(records.len());

    for record in records {
        let base = record.base();
        if base.id.trim().is_empty() {
            return Err(CatalogError::invalid_record(
                T::KIND,
                &base.model,
                "id must not be empty",
            ));
        }
        if !seen.insert(base.id.as_str()) {
            return Err(CatalogError::DuplicateId {
                kind: T::KIND,
                id: base.id.clone(),
            });
        }
        if base.weight == 0 {
            return Err(CatalogError::invalid_record(
                T::KIND,
                &base.id,
                "weight must be positive",
            ));
        }
        if let Some(teeth) = record.teeth() {
            if teeth.is_empty() {
                return Err(CatalogError::invalid_record(
                    T::KIND,
                    &base.id,
                    "teeth must not be empty",
                ));
            }
            if teeth.contains(&0) {
                return Err(CatalogError::invalid_record(
                    T::KIND,
                    &base.id,
                    "tooth counts must be positive",
                ));
            }
        }
    }

    Ok(())
}
