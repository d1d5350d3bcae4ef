// ABOUTME: Setup selections submitted by clients and setups resolved against the catalog
// ABOUTME: A setup bundles exactly one crankset, one cassette and one rear derailleur
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

use super::{Cassette, Crankset, RearDerailleur};
use serde::{Deserialize, Serialize};

/// Reference to a catalog component by identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRef {
    /// Catalog identifier
    pub id: String,
}

impl ComponentRef {
    /// Reference the component with this id
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Client-side selection of the three drivetrain parts.
///
/// Every slot is optional on the wire so a missing part can be reported as a
/// validation error naming the field instead of a generic parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupSelection {
    /// Selected crankset
    #[serde(default)]
    pub crankset: Option<ComponentRef>,
    /// Selected cassette
    #[serde(default)]
    pub cassette: Option<ComponentRef>,
    /// Selected rear derailleur
    #[serde(default)]
    pub rear_derailleur: Option<ComponentRef>,
}

impl SetupSelection {
    /// Build a complete selection from three ids
    pub fn of(
        crankset: impl Into<String>,
        cassette: impl Into<String>,
        rear_derailleur: impl Into<String>,
    ) -> Self {
        Self {
            crankset: Some(ComponentRef::new(crankset)),
            cassette: Some(ComponentRef::new(cassette)),
            rear_derailleur: Some(ComponentRef::new(rear_derailleur)),
        }
    }
}

/// A fully resolved drivetrain. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Setup {
    /// Crankset record
    pub crankset: Crankset,
    /// Cassette record
    pub cassette: Cassette,
    /// Rear derailleur record
    pub rear_derailleur: RearDerailleur,
}
