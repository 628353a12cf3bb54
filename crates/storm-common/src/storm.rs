//! Storm and track point types.

use serde::{Deserialize, Serialize};

use crate::bbox::BoundingBox;
use crate::category::{Basin, Category};
use crate::coord::LatLon;

/// Sea-level pressure assumed when a track point carries none (mb).
pub const DEFAULT_PRESSURE_MB: f64 = 1013.0;

/// One position sample along a storm track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    pub position: LatLon,
    /// Maximum sustained wind in knots, never negative.
    pub wind_speed: f64,
    /// Minimum central pressure in millibars.
    pub pressure: f64,
    pub category: Category,
}

impl TrackPoint {
    /// Create a track point, normalising the wind speed.
    pub fn new(position: LatLon, wind_speed: f64, pressure: f64, category: Category) -> Self {
        Self {
            position,
            wind_speed: sanitize_wind_speed(wind_speed),
            pressure,
            category,
        }
    }

    /// A track point with only a position; every other field takes its default.
    pub fn at(lat: f64, lon: f64) -> Self {
        Self::new(
            LatLon::new(lat, lon),
            0.0,
            DEFAULT_PRESSURE_MB,
            Category::default(),
        )
    }

    /// Builder-style wind speed setter.
    pub fn with_wind_speed(mut self, wind_speed: f64) -> Self {
        self.wind_speed = sanitize_wind_speed(wind_speed);
        self
    }

    /// Builder-style category setter.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Builder-style pressure setter.
    pub fn with_pressure(mut self, pressure: f64) -> Self {
        self.pressure = pressure;
        self
    }
}

/// Negative, NaN and infinite wind speeds become 0.
pub fn sanitize_wind_speed(wind_speed: f64) -> f64 {
    if wind_speed.is_finite() && wind_speed > 0.0 {
        wind_speed
    } else {
        0.0
    }
}

/// Identifying information carried alongside a track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StormMetadata {
    pub name: String,
    pub year: i32,
    pub basin: Basin,
    /// IBTrACS storm identifiers.
    #[serde(default)]
    pub sids: Vec<String>,
    /// Storm nature codes per track point (TS, ET, DS, ...).
    #[serde(default)]
    pub nature: Vec<String>,
    #[serde(default)]
    pub landfall: bool,
    #[serde(default)]
    pub track_length_km: f64,
}

impl StormMetadata {
    pub fn new(name: impl Into<String>, year: i32, basin: Basin) -> Self {
        Self {
            name: name.into(),
            year,
            basin,
            sids: Vec::new(),
            nature: Vec::new(),
            landfall: false,
            track_length_km: 0.0,
        }
    }
}

/// A named storm with its chronologically ordered track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Storm {
    pub metadata: StormMetadata,
    pub track: Vec<TrackPoint>,
}

impl Storm {
    pub fn new(metadata: StormMetadata, track: Vec<TrackPoint>) -> Self {
        Self { metadata, track }
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn year(&self) -> i32 {
        self.metadata.year
    }

    pub fn basin(&self) -> &Basin {
        &self.metadata.basin
    }

    /// Primary identifier: the first SID, or the name when there is none.
    pub fn id(&self) -> &str {
        self.metadata
            .sids
            .first()
            .map(String::as_str)
            .unwrap_or(self.metadata.name.as_str())
    }

    /// Highest wind speed on the track, 0 for an empty track.
    pub fn max_wind_speed(&self) -> f64 {
        self.track
            .iter()
            .map(|p| p.wind_speed)
            .fold(0.0, f64::max)
    }

    /// Category of the first track point, or tropical storm when the track is empty.
    ///
    /// Track data lists the peak category first, so this is used as the
    /// storm's headline category.
    pub fn headline_category(&self) -> Category {
        self.track
            .first()
            .map(|p| p.category.clone())
            .unwrap_or_default()
    }

    /// Track positions in order.
    pub fn positions(&self) -> impl Iterator<Item = &LatLon> + '_ {
        self.track.iter().map(|p| &p.position)
    }

    /// Extent of the track positions.
    pub fn bbox(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.positions())
    }
}
