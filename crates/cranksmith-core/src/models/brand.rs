// ABOUTME: Manufacturer brand derived from a component's model name
// ABOUTME: Replaces free-text brand matching with an explicit enum comparison
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Component manufacturer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brand {
    /// Shimano
    Shimano,
    /// SRAM
    Sram,
    /// Campagnolo
    Campagnolo,
    /// Any other manufacturer, stored lowercase
    Other(String),
}

impl Brand {
    /// Derive the brand from the leading whitespace-delimited token of a model name.
    ///
    /// Matching is case-insensitive: "SRAM Red eTap AXS" and "sram red" are both SRAM.
    #[must_use]
    pub fn from_model(model: &str) -> Self {
        let token = model
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_lowercase();

        match token.as_str() {
            "shimano" => Self::Shimano,
            "sram" => Self::Sram,
            "campagnolo" => Self::Campagnolo,
            _ => Self::Other(token),
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shimano => f.write_str("Shimano"),
            Self::Sram => f.write_str("SRAM"),
            Self::Campagnolo => f.write_str("Campagnolo"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_from_model() {
        assert_eq!(Brand::from_model("Shimano 105 R7000"), Brand::Shimano);
        assert_eq!(Brand::from_model("SRAM Force XPLR eTap AXS"), Brand::Sram);
        assert_eq!(Brand::from_model("sram GX Eagle"), Brand::Sram);
        assert_eq!(Brand::from_model("Campagnolo Record"), Brand::Campagnolo);
        assert_eq!(
            Brand::from_model("Microshift Advent X"),
            Brand::Other("microshift".into())
        );
    }

    #[test]
    fn test_empty_model_is_other() {
        assert_eq!(Brand::from_model("   "), Brand::Other(String::new()));
    }
}
