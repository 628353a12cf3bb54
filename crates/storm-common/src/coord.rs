//! Geographic coordinate type.

use serde::{Deserialize, Serialize};

/// A geographic position in degrees, latitude first.
///
/// This is the only coordinate order used inside the workspace. Use
/// [`LatLon::from_geojson`] and [`LatLon::to_geojson`] at the GeoJSON edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    /// Create a new position from latitude and longitude in degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Build from a GeoJSON `[longitude, latitude]` position.
    pub fn from_geojson(position: [f64; 2]) -> Self {
        Self {
            lat: position[1],
            lon: position[0],
        }
    }

    /// Convert to a GeoJSON `[longitude, latitude]` position.
    pub fn to_geojson(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }

    /// Both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl From<(f64, f64)> for LatLon {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}
