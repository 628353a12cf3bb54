//! Saffir-Simpson category and ocean basin codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Storm intensity category as carried in IBTrACS-style track data.
///
/// Codes are `"TS"` and `"1"` through `"5"`. Anything else is preserved as
/// [`Category::Other`] and is displayed with tropical-storm styling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    #[default]
    TropicalStorm,
    One,
    Two,
    Three,
    Four,
    Five,
    Other(String),
}

impl Category {
    /// Parse a category code. Never fails.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "TS" => Category::TropicalStorm,
            "1" => Category::One,
            "2" => Category::Two,
            "3" => Category::Three,
            "4" => Category::Four,
            "5" => Category::Five,
            other => Category::Other(other.to_string()),
        }
    }

    /// The wire code for this category.
    pub fn code(&self) -> &str {
        match self {
            Category::TropicalStorm => "TS",
            Category::One => "1",
            Category::Two => "2",
            Category::Three => "3",
            Category::Four => "4",
            Category::Five => "5",
            Category::Other(code) => code,
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::TropicalStorm => "Tropical Storm",
            Category::One => "Category 1",
            Category::Two => "Category 2",
            Category::Three => "Category 3",
            Category::Four => "Category 4",
            Category::Five => "Category 5",
            Category::Other(_) => "Unknown",
        }
    }

    /// All known categories in ascending intensity.
    pub fn all() -> [Category; 6] {
        [
            Category::TropicalStorm,
            Category::One,
            Category::Two,
            Category::Three,
            Category::Four,
            Category::Five,
        ]
    }
}

impl From<String> for Category {
    fn from(code: String) -> Self {
        Category::from_code(&code)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.code().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Ocean basin where a storm formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Basin {
    NorthAtlantic,
    EastPacific,
    WestPacific,
    NorthIndian,
    SouthIndian,
    SouthPacific,
    Other(String),
}

impl Basin {
    /// Parse a two-letter basin code. Unknown codes are preserved.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "NA" => Basin::NorthAtlantic,
            "EP" => Basin::EastPacific,
            "WP" => Basin::WestPacific,
            "NI" => Basin::NorthIndian,
            "SI" => Basin::SouthIndian,
            "SP" => Basin::SouthPacific,
            _ => Basin::Other(code.trim().to_string()),
        }
    }

    /// The two-letter code.
    pub fn code(&self) -> &str {
        match self {
            Basin::NorthAtlantic => "NA",
            Basin::EastPacific => "EP",
            Basin::WestPacific => "WP",
            Basin::NorthIndian => "NI",
            Basin::SouthIndian => "SI",
            Basin::SouthPacific => "SP",
            Basin::Other(code) => code,
        }
    }

    /// Human readable name; unknown basins are labelled with their code.
    pub fn label(&self) -> &str {
        match self {
            Basin::NorthAtlantic => "North Atlantic",
            Basin::EastPacific => "East Pacific",
            Basin::WestPacific => "West Pacific",
            Basin::NorthIndian => "North Indian",
            Basin::SouthIndian => "South Indian",
            Basin::SouthPacific => "South Pacific",
            Basin::Other(code) => code,
        }
    }
}

impl From<String> for Basin {
    fn from(code: String) -> Self {
        Basin::from_code(&code)
    }
}

impl From<Basin> for String {
    fn from(basin: Basin) -> Self {
        basin.code().to_string()
    }
}

impl fmt::Display for Basin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
