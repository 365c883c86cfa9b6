use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum GoodsCategory {
    Electronics,
    Textiles,
    #[serde(rename = "Food Items", alias = "Food")]
    FoodItems,
    Machinery,
    Chemicals,
    Documents,
    Other,
}

impl GoodsCategory {
    pub const ALL: [GoodsCategory; 7] = [
        GoodsCategory::Electronics,
        GoodsCategory::Textiles,
        GoodsCategory::FoodItems,
        GoodsCategory::Machinery,
        GoodsCategory::Chemicals,
        GoodsCategory::Documents,
        GoodsCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GoodsCategory::Electronics => "Electronics",
            GoodsCategory::Textiles => "Textiles",
            GoodsCategory::FoodItems => "Food Items",
            GoodsCategory::Machinery => "Machinery",
            GoodsCategory::Chemicals => "Chemicals",
            GoodsCategory::Documents => "Documents",
            GoodsCategory::Other => "Other",
        }
    }
}

impl fmt::Display for GoodsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-text categories never fail to parse: anything unrecognized is `Other`.
impl FromStr for GoodsCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let category = match s.trim().to_lowercase().as_str() {
            "electronics" => GoodsCategory::Electronics,
            "textiles" => GoodsCategory::Textiles,
            "food items" | "food" => GoodsCategory::FoodItems,
            "machinery" => GoodsCategory::Machinery,
            "chemicals" => GoodsCategory::Chemicals,
            "documents" => GoodsCategory::Documents,
            _ => GoodsCategory::Other,
        };

        Ok(category)
    }
}
