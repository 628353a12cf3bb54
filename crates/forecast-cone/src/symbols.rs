//! Display lookups: storm symbols, category colours and the probability legend.

use serde::{Deserialize, Serialize};

use storm_common::{Category, TrackPoint};

/// Sustained wind (kt) at which a storm is drawn as a hurricane.
pub const HURRICANE_WIND_KT: f64 = 64.0;

/// Sustained wind (kt) at which a storm is drawn as a tropical storm.
pub const TROPICAL_STORM_WIND_KT: f64 = 34.0;

/// Marker glyph for a track point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StormSymbol {
    Hurricane,
    TropicalStorm,
    Depression,
}

impl StormSymbol {
    /// Symbol for a track point, from its wind speed alone.
    pub fn for_point(point: &TrackPoint) -> Self {
        storm_symbol(&point.category, point.wind_speed)
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            StormSymbol::Hurricane => "🌀",
            StormSymbol::TropicalStorm => "🌪️",
            StormSymbol::Depression => "⭕",
        }
    }
}

/// Pick the marker symbol for a category and wind speed.
///
/// Only the wind speed decides: ≥ 64 kt hurricane, ≥ 34 kt tropical storm,
/// anything lower (including NaN) a depression.
pub fn storm_symbol(_category: &Category, wind_speed: f64) -> StormSymbol {
    if wind_speed >= HURRICANE_WIND_KT {
        StormSymbol::Hurricane
    } else if wind_speed >= TROPICAL_STORM_WIND_KT {
        StormSymbol::TropicalStorm
    } else {
        StormSymbol::Depression
    }
}

/// Track and marker colour for a category. Unknown codes use the tropical-storm colour.
pub fn category_color(category: &Category) -> &'static str {
    match category {
        Category::TropicalStorm => "#00ff00",
        Category::One => "#ffff00",
        Category::Two => "#ff8000",
        Category::Three => "#ff0000",
        Category::Four => "#ff0080",
        Category::Five => "#8000ff",
        Category::Other(_) => "#00ff00",
    }
}

/// Colour for an arbitrary probability percentage, banded like the cone levels.
pub fn probability_color(probability: f64) -> &'static str {
    match probability {
        p if p >= 90.0 => "#800080",
        p if p >= 70.0 => "#FF0000",
        p if p >= 50.0 => "#FF8000",
        p if p >= 30.0 => "#FFFF00",
        p if p >= 10.0 => "#00FF00",
        _ => "#008000",
    }
}

/// One row of the wind-probability legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub probability: u8,
    pub label: &'static str,
    pub color: &'static str,
}

/// Legend rows, highest band first.
pub fn legend_entries() -> Vec<LegendEntry> {
    [
        (90, "90-100%"),
        (70, "70-89%"),
        (50, "50-69%"),
        (30, "30-49%"),
        (10, "10-29%"),
        (5, "5-9%"),
    ]
    .into_iter()
    .map(|(probability, label)| LegendEntry {
        probability,
        label,
        color: probability_color(f64::from(probability)),
    })
    .collect()
}
