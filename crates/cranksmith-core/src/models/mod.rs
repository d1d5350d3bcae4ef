// ABOUTME: Domain models for drivetrain components, bike types, brands and setups
// ABOUTME: Re-exports component records and request-side setup selections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

//! Core data models
//!
//! Components are modeled as a tagged union over a shared [`ComponentBase`]
//! record plus kind-specific fields, so matches over [`Component`] stay
//! exhaustive at compile time.

mod bike_type;
mod brand;
mod component;
mod setup;

pub use bike_type::BikeType;
pub use brand::Brand;
pub use component::{
    parse_speed_count, Cassette, CatalogRecord, Component, ComponentBase, ComponentKind,
    Crankset, RearDerailleur,
};
pub use setup::{ComponentRef, Setup, SetupSelection};
