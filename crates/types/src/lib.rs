//! # Foodpad Types
//!
//! Shared value types for the foodpad food-item authoring system.
//!
//! Contains:
//! - The closed [`NutrientKind`] catalog and [`NutrientEntry`] pairs
//! - The validated [`Percentage`] value type with lossy user-input parsing
//! - Wire-format records handed to the remote catalog service (`record` module)
//!
//! Form state and API seams live in `foodpad-core`; this crate holds only the
//! data vocabulary they share.

pub mod percentage;
pub mod record;

use serde::{Deserialize, Serialize};

pub use percentage::{Percentage, PercentageError};
pub use record::{FoodItemRecord, FundamentalFoodItem};

/// Errors that can occur when parsing nutrient kind identifiers.
#[derive(Debug, thiserror::Error)]
pub enum NutrientKindError {
    /// The identifier did not name any kind in the catalog
    #[error("unknown nutrient kind: {0}")]
    Unknown(String),
}

/// One fixed category of nutritional content.
///
/// The catalog is closed: the set of kinds is defined here once and never
/// changes at runtime. Declaration order is the catalog order used for
/// deterministic UI listing, see [`NutrientKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NutrientKind {
    Fat,
    SaturatedFat,
    Carbohydrate,
    Sugar,
    Fibre,
    Protein,
    Salt,
}

impl NutrientKind {
    /// Every kind in the catalog, in stable catalog order.
    pub const ALL: [NutrientKind; 7] = [
        NutrientKind::Fat,
        NutrientKind::SaturatedFat,
        NutrientKind::Carbohydrate,
        NutrientKind::Sugar,
        NutrientKind::Fibre,
        NutrientKind::Protein,
        NutrientKind::Salt,
    ];

    /// The kebab-case identifier used on the wire and in the UI.
    pub fn as_str(&self) -> &'static str {
        match self {
            NutrientKind::Fat => "fat",
            NutrientKind::SaturatedFat => "saturated-fat",
            NutrientKind::Carbohydrate => "carbohydrate",
            NutrientKind::Sugar => "sugar",
            NutrientKind::Fibre => "fibre",
            NutrientKind::Protein => "protein",
            NutrientKind::Salt => "salt",
        }
    }
}

impl std::fmt::Display for NutrientKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for NutrientKind {
    type Err = NutrientKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NutrientKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| NutrientKindError::Unknown(s.to_owned()))
    }
}

/// One nutrient measurement within a food item.
///
/// Within a single food item's nutrient list no two entries share a `kind`;
/// `foodpad-core` enforces that invariant on mutation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientEntry {
    pub kind: NutrientKind,
    pub percentage: Percentage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_is_stable() {
        let names: Vec<&str> = NutrientKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "fat",
                "saturated-fat",
                "carbohydrate",
                "sugar",
                "fibre",
                "protein",
                "salt"
            ]
        );
    }

    #[test]
    fn identifiers_round_trip() {
        for kind in NutrientKind::ALL {
            let parsed: NutrientKind = kind.as_str().parse().expect("parse identifier");
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn unknown_identifier_is_rejected() {
        let err = "caffeine".parse::<NutrientKind>().expect_err("should reject");
        match err {
            NutrientKindError::Unknown(name) => assert_eq!(name, "caffeine"),
        }
    }

    #[test]
    fn entry_serialises_with_kebab_case_kind() {
        let entry = NutrientEntry {
            kind: NutrientKind::SaturatedFat,
            percentage: Percentage::zero(),
        };
        let json = serde_json::to_string(&entry).expect("serialise entry");
        assert_eq!(json, r#"{"kind":"saturated-fat","percentage":0.0}"#);
    }
}
