//! Wire-format records for the remote catalog service.
//!
//! These structs mirror the catalog API's create-food-item request body. They
//! are built from form state at save time only; the form itself never stores
//! them. Brand and barcode are collected by the form but are not part of the
//! persisted record, matching the catalog schema as it stands today.

use crate::NutrientEntry;
use serde::{Deserialize, Serialize};

/// The core identity of a food item: its title and nutrient composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundamentalFoodItem {
    pub title: String,
    pub nutrients: Vec<NutrientEntry>,
}

/// The create-food-item request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItemRecord {
    pub fundamental: FundamentalFoodItem,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NutrientKind, Percentage};

    #[test]
    fn record_json_shape_matches_catalog_schema() {
        let record = FoodItemRecord {
            fundamental: FundamentalFoodItem {
                title: "Oat flakes".to_owned(),
                nutrients: vec![NutrientEntry {
                    kind: NutrientKind::Fibre,
                    percentage: Percentage::parse_lossy("9.1"),
                }],
            },
        };

        let json = serde_json::to_value(&record).expect("serialise record");
        assert_eq!(
            json,
            serde_json::json!({
                "fundamental": {
                    "title": "Oat flakes",
                    "nutrients": [{"kind": "fibre", "percentage": 9.1}]
                }
            })
        );
    }

    #[test]
    fn record_round_trips() {
        let record = FoodItemRecord {
            fundamental: FundamentalFoodItem {
                title: String::new(),
                nutrients: vec![],
            },
        };
        let json = serde_json::to_string(&record).expect("serialise record");
        let reparsed: FoodItemRecord = serde_json::from_str(&json).expect("reparse record");
        assert_eq!(record, reparsed);
    }
}
