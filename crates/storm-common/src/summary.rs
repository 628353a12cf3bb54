//! Condensed storm information for listings and popups.

use serde::{Deserialize, Serialize};

use crate::category::{Basin, Category};
use crate::storm::Storm;

/// Headline figures for one storm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StormSummary {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub basin: Basin,
    pub max_category: Category,
    pub max_wind_speed: f64,
    pub track_length_km: f64,
    pub landfall: bool,
}

impl StormSummary {
    pub fn from_storm(storm: &Storm) -> Self {
        Self {
            id: storm.id().to_string(),
            name: storm.name().to_string(),
            year: storm.year(),
            basin: storm.basin().clone(),
            max_category: storm.headline_category(),
            max_wind_speed: storm.max_wind_speed(),
            track_length_km: storm.metadata.track_length_km,
            landfall: storm.metadata.landfall,
        }
    }

    /// One-line description, e.g. `ANDREW (1992) - Category 5, North Atlantic`.
    pub fn headline(&self) -> String {
        format!(
            "{} ({}) - {}, {}",
            self.name,
            self.year,
            self.max_category.label(),
            self.basin.label()
        )
    }
}

impl From<&Storm> for StormSummary {
    fn from(storm: &Storm) -> Self {
        Self::from_storm(storm)
    }
}
