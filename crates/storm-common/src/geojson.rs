//! GeoJSON input boundary for storm tracks.
//!
//! Tracks arrive as a `FeatureCollection` of `LineString` features in the
//! IBTrACS subset layout:
//!
//! ```json
//! {
//!   "type": "Feature",
//!   "geometry": { "type": "LineString", "coordinates": [[-80.0, 25.0], ...] },
//!   "properties": {
//!     "name": "ANDREW", "year": 1992, "basin": "NA",
//!     "sids": ["1992230N11325"], "nature": ["TS", ...],
//!     "wind_speed": [...], "pressure": [...], "category": ["TS", "1", ...],
//!     "landfall": true, "track_length": 2540.0
//!   }
//! }
//! ```
//!
//! `wind_speed`, `pressure` and `category` are index-aligned with the
//! coordinates. Positions are `[longitude, latitude]`; this module is the
//! only place that order is flipped into [`LatLon`].

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::io::Read;
use tracing::{debug, warn};

use crate::category::{Basin, Category};
use crate::coord::LatLon;
use crate::error::{StormError, StormResult};
use crate::storm::{Storm, StormMetadata, TrackPoint, DEFAULT_PRESSURE_MB};

/// Raw storm `FeatureCollection` as found on disk.
///
/// Features are kept as raw JSON so that one oddly shaped feature does not
/// fail the whole document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StormCollectionDocument {
    /// Type identifier (always "FeatureCollection").
    #[serde(rename = "type")]
    pub type_: String,

    #[serde(default, deserialize_with = "nullable")]
    pub features: Vec<Value>,
}

impl StormCollectionDocument {
    /// Parse a collection document from JSON text.
    pub fn from_json(json: &str) -> StormResult<Self> {
        let doc: Self = serde_json::from_str(json)?;
        doc.check_type()?;
        Ok(doc)
    }

    /// Parse a collection document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> StormResult<Self> {
        let doc: Self = serde_json::from_reader(reader)?;
        doc.check_type()?;
        Ok(doc)
    }

    fn check_type(&self) -> StormResult<()> {
        if self.type_ != "FeatureCollection" {
            return Err(StormError::UnexpectedType {
                expected: "FeatureCollection",
                found: self.type_.clone(),
            });
        }
        Ok(())
    }

    /// Convert every feature into a [`Storm`].
    ///
    /// Features that fail with a feature-level error are skipped and logged;
    /// the rest are returned in document order. Any other error aborts.
    pub fn into_storms(self) -> StormResult<Vec<Storm>> {
        let total = self.features.len();
        let mut storms = Vec::with_capacity(total);

        for (i, value) in self.features.into_iter().enumerate() {
            let name = value
                .pointer("/properties/name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();

            let converted =
                StormFeatureDocument::from_value(value).and_then(StormFeatureDocument::into_storm);
            match converted {
                Ok(storm) => storms.push(storm),
                Err(e) if e.is_feature_level() => {
                    warn!(feature = i, storm = %name, error = %e, "Skipping storm feature");
                }
                Err(e) => return Err(e),
            }
        }

        debug!(total, parsed = storms.len(), "Parsed storm collection");
        Ok(storms)
    }
}

/// Parse storm GeoJSON text straight into storms.
///
/// Document-level problems (bad JSON, wrong collection type) are errors;
/// individual bad features are skipped.
pub fn parse_storm_collection(json: &str) -> StormResult<Vec<Storm>> {
    StormCollectionDocument::from_json(json)?.into_storms()
}

/// Treat an explicit `null` like a missing key.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single raw storm feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StormFeatureDocument {
    /// Type identifier (always "Feature").
    #[serde(rename = "type")]
    pub type_: String,

    pub geometry: TrackGeometry,

    #[serde(default, deserialize_with = "nullable")]
    pub properties: StormProperties,
}

/// Geometry of a track feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackGeometry {
    #[serde(rename = "type")]
    pub type_: String,

    /// Raw coordinates. Only decoded once the geometry is known to be a
    /// `LineString`, as `[longitude, latitude]` positions; extra ordinates
    /// are ignored.
    #[serde(default)]
    pub coordinates: Value,
}

/// Storm feature properties. Every field is optional on the wire and an
/// explicit `null` means the same as a missing key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StormProperties {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,

    #[serde(default, deserialize_with = "nullable")]
    pub year: i32,

    #[serde(default, deserialize_with = "nullable")]
    pub basin: String,

    #[serde(default, deserialize_with = "nullable")]
    pub sids: Vec<String>,

    #[serde(default, deserialize_with = "nullable")]
    pub nature: Vec<String>,

    #[serde(default, deserialize_with = "nullable")]
    pub wind_speed: Vec<Option<f64>>,

    #[serde(default, deserialize_with = "nullable")]
    pub pressure: Vec<Option<f64>>,

    #[serde(default, deserialize_with = "nullable")]
    pub category: Vec<Option<String>>,

    #[serde(default, deserialize_with = "nullable")]
    pub landfall: bool,

    /// Track length in kilometres.
    #[serde(default, deserialize_with = "nullable")]
    pub track_length: f64,
}

impl StormFeatureDocument {
    /// Decode one raw feature. Shape mismatches are feature-level errors.
    pub fn from_value(value: Value) -> StormResult<Self> {
        serde_json::from_value(value).map_err(StormError::MalformedFeature)
    }

    /// Convert to a typed [`Storm`], applying per-point defaults.
    ///
    /// Missing wind speed becomes 0, missing pressure becomes
    /// [`DEFAULT_PRESSURE_MB`] and missing category becomes tropical storm.
    pub fn into_storm(self) -> StormResult<Storm> {
        if self.type_ != "Feature" {
            return Err(StormError::UnexpectedType {
                expected: "Feature",
                found: self.type_,
            });
        }
        if self.geometry.type_ != "LineString" {
            return Err(StormError::UnexpectedType {
                expected: "LineString",
                found: self.geometry.type_,
            });
        }

        let props = self.properties;
        let coordinates: Vec<Vec<f64>> = match self.geometry.coordinates {
            Value::Null => Vec::new(),
            value => serde_json::from_value(value).map_err(StormError::MalformedFeature)?,
        };
        if coordinates.is_empty() {
            return Err(StormError::EmptyTrack(props.name));
        }

        let mut track = Vec::with_capacity(coordinates.len());
        for (index, position) in coordinates.iter().enumerate() {
            let position = parse_position(index, position)?;

            let wind_speed = props.wind_speed.get(index).copied().flatten().unwrap_or(0.0);
            let pressure = props
                .pressure
                .get(index)
                .copied()
                .flatten()
                .unwrap_or(DEFAULT_PRESSURE_MB);
            let category = props
                .category
                .get(index)
                .and_then(|c| c.as_deref())
                .filter(|c| !c.trim().is_empty())
                .map(Category::from_code)
                .unwrap_or_default();

            track.push(TrackPoint::new(position, wind_speed, pressure, category));
        }

        let metadata = StormMetadata {
            name: props.name,
            year: props.year,
            basin: Basin::from_code(&props.basin),
            sids: props.sids,
            nature: props.nature,
            landfall: props.landfall,
            track_length_km: props.track_length,
        };

        Ok(Storm::new(metadata, track))
    }
}

fn parse_position(index: usize, position: &[f64]) -> StormResult<LatLon> {
    if position.len() < 2 {
        return Err(StormError::InvalidCoordinate {
            index,
            message: format!("expected [lon, lat], got {} values", position.len()),
        });
    }

    let lon = position[0];
    let lat = position[1];
    if !lon.is_finite() || !lat.is_finite() {
        return Err(StormError::InvalidCoordinate {
            index,
            message: "non-finite coordinate".to_string(),
        });
    }
    if !(-90.0..=90.0).contains(&lat) {
        return Err(StormError::InvalidCoordinate {
            index,
            message: format!("latitude {} out of range", lat),
        });
    }

    Ok(LatLon::from_geojson([lon, lat]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_STORM: &str = r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "geometry": { "type": "LineString", "coordinates": [[-80.0, 25.0], [-81.5, 26.0, 0.0]] },
            "properties": {
                "name": "ANDREW", "year": 1992, "basin": "NA",
                "sids": ["1992230N11325"],
                "wind_speed": [140, null],
                "pressure": [922],
                "category": ["5"],
                "landfall": true, "track_length": 2540.5
            }
        }]
    }"#;

    #[test]
    fn test_parse_flips_coordinate_order() {
        let storms = parse_storm_collection(ONE_STORM).unwrap();
        assert_eq!(storms.len(), 1);
        let storm = &storms[0];
        assert_eq!(storm.track[0].position, LatLon::new(25.0, -80.0));
        assert_eq!(storm.track[1].position, LatLon::new(26.0, -81.5));
    }

    #[test]
    fn test_parse_applies_defaults() {
        let storms = parse_storm_collection(ONE_STORM).unwrap();
        let storm = &storms[0];
        assert_eq!(storm.track[0].wind_speed, 140.0);
        assert_eq!(storm.track[0].pressure, 922.0);
        assert_eq!(storm.track[0].category, Category::Five);

        assert_eq!(storm.track[1].wind_speed, 0.0);
        assert_eq!(storm.track[1].pressure, DEFAULT_PRESSURE_MB);
        assert_eq!(storm.track[1].category, Category::TropicalStorm);

        assert_eq!(storm.metadata.basin, Basin::NorthAtlantic);
        assert!(storm.metadata.landfall);
        assert_eq!(storm.metadata.track_length_km, 2540.5);
    }

    #[test]
    fn test_wrong_collection_type() {
        let result = parse_storm_collection(r#"{"type": "Feature", "features": []}"#);
        assert!(matches!(
            result,
            Err(StormError::UnexpectedType {
                expected: "FeatureCollection",
                ..
            })
        ));
    }

    #[test]
    fn test_null_properties_use_defaults() {
        let feature = serde_json::json!({
            "type": "Feature",
            "geometry": { "type": "LineString", "coordinates": [[-80.0, 25.0]] },
            "properties": { "name": null, "year": null, "wind_speed": null, "landfall": null }
        });
        let storm = StormFeatureDocument::from_value(feature)
            .and_then(StormFeatureDocument::into_storm)
            .unwrap();
        assert_eq!(storm.name(), "");
        assert_eq!(storm.year(), 0);
        assert_eq!(storm.track[0].wind_speed, 0.0);
        assert!(!storm.metadata.landfall);
    }

    #[test]
    fn test_point_geometry_is_unexpected_type() {
        let feature = serde_json::json!({
            "type": "Feature",
            "geometry": { "type": "Point", "coordinates": [-80.0, 25.0] },
            "properties": { "name": "DOT" }
        });
        let result =
            StormFeatureDocument::from_value(feature).and_then(StormFeatureDocument::into_storm);
        assert!(matches!(
            result,
            Err(StormError::UnexpectedType {
                expected: "LineString",
                ..
            })
        ));
    }

    #[test]
    fn test_misshapen_coordinates_are_feature_level() {
        let feature = serde_json::json!({
            "type": "Feature",
            "geometry": { "type": "LineString", "coordinates": [-80.0, 25.0] },
            "properties": {}
        });
        let err = StormFeatureDocument::from_value(feature)
            .and_then(StormFeatureDocument::into_storm)
            .unwrap_err();
        assert!(matches!(err, StormError::MalformedFeature(_)));
        assert!(err.is_feature_level());
    }

    #[test]
    fn test_short_position_rejected() {
        let result = parse_position(4, &[-80.0]);
        assert!(matches!(
            result,
            Err(StormError::InvalidCoordinate { index: 4, .. })
        ));
    }

    #[test]
    fn test_latitude_out_of_range_rejected() {
        assert!(parse_position(0, &[10.0, 91.0]).is_err());
        assert!(parse_position(0, &[10.0, 90.0]).is_ok());
    }
}
