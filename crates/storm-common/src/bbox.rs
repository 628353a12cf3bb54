//! Geographic bounding box used for storm and zone extents.

use serde::{Deserialize, Serialize};

use crate::coord::LatLon;

/// A geographic bounding box in degrees (EPSG:4326).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Smallest box containing every finite point, or `None` if there are none.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a LatLon>,
    {
        let mut bbox: Option<BoundingBox> = None;
        for p in points.into_iter().filter(|p| p.is_finite()) {
            bbox = Some(match bbox {
                None => BoundingBox::new(p.lon, p.lat, p.lon, p.lat),
                Some(b) => b.expanded_to(p),
            });
        }
        bbox
    }

    /// Grow the box so it includes `point`.
    pub fn expanded_to(&self, point: &LatLon) -> Self {
        Self {
            min_lon: self.min_lon.min(point.lon),
            min_lat: self.min_lat.min(point.lat),
            max_lon: self.max_lon.max(point.lon),
            max_lat: self.max_lat.max(point.lat),
        }
    }

    /// Union of two boxes.
    pub fn union(&self, other: &BoundingBox) -> Self {
        Self {
            min_lon: self.min_lon.min(other.min_lon),
            min_lat: self.min_lat.min(other.min_lat),
            max_lon: self.max_lon.max(other.max_lon),
            max_lat: self.max_lat.max(other.max_lat),
        }
    }

    /// Width in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Height in degrees of latitude.
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Check if a point is contained within this bbox.
    pub fn contains(&self, point: &LatLon) -> bool {
        point.lon >= self.min_lon
            && point.lon <= self.max_lon
            && point.lat >= self.min_lat
            && point.lat <= self.max_lat
    }

    /// GeoJSON `bbox` member: `[west, south, east, north]`.
    pub fn to_geojson(&self) -> [f64; 4] {
        [self.min_lon, self.min_lat, self.max_lon, self.max_lat]
    }
}
