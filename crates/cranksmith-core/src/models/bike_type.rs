// ABOUTME: Bike type families used to partition the component catalog
// ABOUTME: Encodes the gravel-to-MTB mullet build expansion for catalog listings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bike type family a component is designed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BikeType {
    /// Road bikes
    Road,
    /// Gravel and all-road bikes
    Gravel,
    /// Mountain bikes
    Mtb,
}

impl BikeType {
    /// Every bike type, in catalog order
    pub const ALL: [Self; 3] = [Self::Road, Self::Gravel, Self::Mtb];

    /// Component families offered when building a bike of this type.
    ///
    /// Gravel builds may reuse MTB rear derailleurs and cassettes ("mullet" builds).
    #[must_use]
    pub const fn catalog_families(self) -> &'static [Self] {
        match self {
            Self::Road => &[Self::Road],
            Self::Gravel => &[Self::Gravel, Self::Mtb],
            Self::Mtb => &[Self::Mtb],
        }
    }

    /// Whether a component tagged `component_type` is offered for this bike type
    #[must_use]
    pub fn accepts(self, component_type: Self) -> bool {
        self.catalog_families().contains(&component_type)
    }

    /// Parse a wire identifier, ignoring case and surrounding whitespace
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|bike_type| bike_type.as_str().eq_ignore_ascii_case(value.trim()))
    }

    /// Lowercase identifier used on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Road => "road",
            Self::Gravel => "gravel",
            Self::Mtb => "mtb",
        }
    }
}

impl fmt::Display for BikeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
