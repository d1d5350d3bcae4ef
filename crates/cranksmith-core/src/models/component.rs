// ABOUTME: Drivetrain component records: crankset, cassette and rear derailleur
// ABOUTME: Tagged union over a shared base record with kind-specific fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

use super::{BikeType, Brand};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog partition a component belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    /// Front chainring assembly
    Crankset,
    /// Rear sprocket stack
    Cassette,
    /// Rear shifting mechanism
    RearDerailleur,
}

impl ComponentKind {
    /// Every kind, in catalog order
    pub const ALL: [Self; 3] = [Self::Crankset, Self::Cassette, Self::RearDerailleur];

    /// Parse a wire identifier such as `rear-derailleur`
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }

    /// Wire identifier (`crankset`, `cassette`, `rear-derailleur`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Crankset => "crankset",
            Self::Cassette => "cassette",
            Self::RearDerailleur => "rear-derailleur",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Crankset => f.write_str("crankset"),
            Self::Cassette => f.write_str("cassette"),
            Self::RearDerailleur => f.write_str("rear derailleur"),
        }
    }
}

/// Fields shared by every component kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentBase {
    /// Stable identifier, unique within its kind
    pub id: String,
    /// Display model; the leading token names the brand
    pub model: String,
    /// Display variant (cage length, ratio set, ...)
    pub variant: String,
    /// Weight in grams
    pub weight: u32,
    /// Bike type family
    pub bike_type: BikeType,
    /// Speed label such as `"12-speed"`
    pub speeds: String,
    /// Retail price, absent when unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
}

impl ComponentBase {
    /// Manufacturer derived from the model name
    #[must_use]
    pub fn brand(&self) -> Brand {
        Brand::from_model(&self.model)
    }

    /// Speed count parsed from the leading integer of `speeds`
    #[must_use]
    pub fn speed_count(&self) -> Option<u32> {
        parse_speed_count(&self.speeds)
    }
}

/// Parse the leading integer of a speed label (`"12-speed"` → 12).
///
/// Leading whitespace is skipped. A label that does not start with a digit
/// has no speed count, even if digits appear later (`"AXS 12"`).
#[must_use]
pub fn parse_speed_count(label: &str) -> Option<u32> {
    let trimmed = label.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

/// Front chainring assembly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crankset {
    /// Shared fields
    #[serde(flatten)]
    pub base: ComponentBase,
    /// Chainring tooth counts; one entry for a 1x crankset
    pub teeth: Vec<u32>,
}

impl Crankset {
    /// Largest chainring
    #[must_use]
    pub fn largest_ring(&self) -> Option<u32> {
        self.teeth.iter().copied().max()
    }

    /// Smallest chainring
    #[must_use]
    pub fn smallest_ring(&self) -> Option<u32> {
        self.teeth.iter().copied().min()
    }

    /// Whether the crankset has more than one chainring
    #[must_use]
    pub fn is_multi_ring(&self) -> bool {
        self.teeth.len() > 1
    }
}

/// Rear sprocket stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cassette {
    /// Shared fields
    #[serde(flatten)]
    pub base: ComponentBase,
    /// Cog tooth counts, in no guaranteed order
    pub teeth: Vec<u32>,
    /// Free-text compatibility tags
    #[serde(default)]
    pub compatibility: Vec<String>,
}

impl Cassette {
    /// Largest cog
    #[must_use]
    pub fn largest_cog(&self) -> Option<u32> {
        self.teeth.iter().copied().max()
    }

    /// Smallest cog
    #[must_use]
    pub fn smallest_cog(&self) -> Option<u32> {
        self.teeth.iter().copied().min()
    }
}

/// Rear shifting mechanism
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)] // catalog flags mirror product features one-to-one
pub struct RearDerailleur {
    /// Shared fields
    #[serde(flatten)]
    pub base: ComponentBase,
    /// Largest cog the derailleur can shift onto
    pub max_cog: u32,
    /// Smallest supported cog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_cog: Option<u32>,
    /// Maximum chainring delta plus cog delta the cage can absorb
    pub total_capacity: u32,
    /// Cage designation (SS, GS, Long, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cage_length: Option<String>,
    /// Free-text compatibility tags
    #[serde(default)]
    pub compatibility: Vec<String>,
    /// Electronic shifting
    #[serde(default)]
    pub is_electronic: bool,
    /// Wireless shifting
    #[serde(default)]
    pub is_wireless: bool,
    /// Clutch for chain retention
    #[serde(default)]
    pub has_clutch: bool,
    /// Mounts directly to the frame without a hanger
    #[serde(default)]
    pub is_direct_mount: bool,
}

/// Any catalog component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Component {
    /// Crankset record
    Crankset(Crankset),
    /// Cassette record
    Cassette(Cassette),
    /// Rear derailleur record
    RearDerailleur(RearDerailleur),
}

impl Component {
    /// Shared fields of the wrapped record
    #[must_use]
    pub const fn base(&self) -> &ComponentBase {
        match self {
            Self::Crankset(c) => &c.base,
            Self::Cassette(c) => &c.base,
            Self::RearDerailleur(rd) => &rd.base,
        }
    }

    /// Catalog partition of the wrapped record
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        match self {
            Self::Crankset(_) => ComponentKind::Crankset,
            Self::Cassette(_) => ComponentKind::Cassette,
            Self::RearDerailleur(_) => ComponentKind::RearDerailleur,
        }
    }

    /// Identifier of the wrapped record
    #[must_use]
    pub fn id(&self) -> &str {
        &self.base().id
    }
}

/// A record stored in one partition of the catalog
pub trait CatalogRecord: Clone {
    /// Partition this record type lives in
    const KIND: ComponentKind;

    /// Shared fields
    fn base(&self) -> &ComponentBase;

    /// Wrap into the tagged union
    fn into_component(self) -> Component;

    /// Tooth counts, when the kind carries them
    fn teeth(&self) -> Option<&[u32]> {
        None
    }
}

impl CatalogRecord for Crankset {
    const KIND: ComponentKind = ComponentKind::Crankset;

    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn into_component(self) -> Component {
        Component::Crankset(self)
    }

    fn teeth(&self) -> Option<&[u32]> {
        Some(&self.teeth)
    }
}

impl CatalogRecord for Cassette {
    const KIND: ComponentKind = ComponentKind::Cassette;

    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn into_component(self) -> Component {
        Component::Cassette(self)
    }

    fn teeth(&self) -> Option<&[u32]> {
        Some(&self.teeth)
    }
}

impl CatalogRecord for RearDerailleur {
    const KIND: ComponentKind = ComponentKind::RearDerailleur;

    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn into_component(self) -> Component {
        Component::RearDerailleur(self)
    }
}
