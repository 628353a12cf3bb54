//! GeoJSON output for map renderers.
//!
//! Produces an RFC 7946 `FeatureCollection` with three kinds of feature:
//! - `zone`: one `Polygon` per probability zone
//! - `track`: the storm path as a `LineString`
//! - `marker`: a `Point` per track point with non-zero wind
//!
//! Positions are written as `[longitude, latitude]`; this module is the only
//! place the internal [`LatLon`] order is flipped on the way out.

use serde::{Deserialize, Serialize};
use std::io::Write;

use storm_common::{BoundingBox, LatLon, Storm, StormSummary};

use crate::cone::{generate_forecast_cone, ProbabilityZone};
use crate::error::ConeResult;
use crate::symbols::{category_color, StormSymbol};

/// Stroke and fill settings applied to every zone polygon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneStyle {
    #[serde(default = "default_stroke_opacity")]
    pub stroke_opacity: f64,
    #[serde(default = "default_fill_opacity")]
    pub fill_opacity: f64,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_stroke_opacity() -> f64 {
    0.3
}

fn default_fill_opacity() -> f64 {
    0.15
}

fn default_weight() -> f64 {
    1.0
}

impl Default for ZoneStyle {
    fn default() -> Self {
        Self {
            stroke_opacity: default_stroke_opacity(),
            fill_opacity: default_fill_opacity(),
            weight: default_weight(),
        }
    }
}

/// Which features to include in a storm layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerOptions {
    pub track: bool,
    pub markers: bool,
    pub style: ZoneStyle,
}

impl Default for LayerOptions {
    fn default() -> Self {
        Self {
            track: true,
            markers: true,
            style: ZoneStyle::default(),
        }
    }
}

/// A GeoJSON FeatureCollection of cone features.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConeFeatureCollection {
    /// Type identifier (always "FeatureCollection").
    #[serde(rename = "type")]
    pub type_: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<[f64; 4]>,

    pub features: Vec<ConeFeature>,
}

impl ConeFeatureCollection {
    /// Create a new empty FeatureCollection.
    pub fn new() -> Self {
        Self {
            type_: "FeatureCollection".to_string(),
            bbox: None,
            features: Vec::new(),
        }
    }

    /// Add multiple features to the collection.
    pub fn with_features(mut self, features: Vec<ConeFeature>) -> Self {
        self.features.extend(features);
        self
    }

    /// Merge another collection into this one, widening the bbox.
    pub fn merge(&mut self, other: ConeFeatureCollection) {
        self.bbox = match (self.bbox, other.bbox) {
            (Some(a), Some(b)) => Some(bbox_from_array(a).union(&bbox_from_array(b)).to_geojson()),
            (a, b) => a.or(b),
        };
        self.features.extend(other.features);
    }

    /// Number of features of a given kind.
    pub fn count_kind(&self, kind: &str) -> usize {
        self.features
            .iter()
            .filter(|f| f.properties.kind() == kind)
            .count()
    }

    pub fn to_json(&self) -> ConeResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> ConeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize into a writer.
    pub fn write_to<W: Write>(&self, mut writer: W, pretty: bool) -> ConeResult<()> {
        if pretty {
            serde_json::to_writer_pretty(&mut writer, self)?;
        } else {
            serde_json::to_writer(&mut writer, self)?;
        }
        writer.write_all(b"\n")?;
        Ok(())
    }
}

impl Default for ConeFeatureCollection {
    fn default() -> Self {
        Self::new()
    }
}

fn bbox_from_array(b: [f64; 4]) -> BoundingBox {
    BoundingBox::new(b[0], b[1], b[2], b[3])
}

/// A GeoJSON Feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConeFeature {
    /// Type identifier (always "Feature").
    #[serde(rename = "type")]
    pub type_: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub geometry: ConeGeometry,

    pub properties: FeatureProperties,
}

impl ConeFeature {
    fn new(id: String, geometry: ConeGeometry, properties: FeatureProperties) -> Self {
        Self {
            type_: "Feature".to_string(),
            id: Some(id),
            geometry,
            properties,
        }
    }
}

/// GeoJSON geometry types used in cone layers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum ConeGeometry {
    /// Coordinates as [longitude, latitude].
    Point { coordinates: [f64; 2] },

    /// Array of [longitude, latitude] pairs.
    LineString { coordinates: Vec<[f64; 2]> },

    /// Linear rings of [longitude, latitude] pairs; cone zones have one ring.
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
}

impl ConeGeometry {
    pub fn point(position: &LatLon) -> Self {
        ConeGeometry::Point {
            coordinates: position.to_geojson(),
        }
    }

    pub fn line_string<'a>(positions: impl IntoIterator<Item = &'a LatLon>) -> Self {
        ConeGeometry::LineString {
            coordinates: positions.into_iter().map(LatLon::to_geojson).collect(),
        }
    }

    pub fn polygon(ring: &[LatLon]) -> Self {
        ConeGeometry::Polygon {
            coordinates: vec![ring.iter().map(LatLon::to_geojson).collect()],
        }
    }
}

/// Feature properties, tagged by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeatureProperties {
    Zone(ZoneProperties),
    Track(TrackProperties),
    Marker(MarkerProperties),
}

impl FeatureProperties {
    pub fn kind(&self) -> &'static str {
        match self {
            FeatureProperties::Zone(_) => "zone",
            FeatureProperties::Track(_) => "track",
            FeatureProperties::Marker(_) => "marker",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZoneProperties {
    pub storm_id: String,
    pub track_index: usize,
    pub probability: u8,
    pub radius_km: f64,
    pub color: String,
    pub label: String,
    pub stroke_opacity: f64,
    pub fill_opacity: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackProperties {
    pub storm_id: String,
    pub name: String,
    pub year: i32,
    pub basin: String,
    pub basin_label: String,
    pub max_category: String,
    pub max_category_label: String,
    pub max_wind_speed: f64,
    pub track_length_km: f64,
    pub landfall: bool,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarkerProperties {
    pub storm_id: String,
    pub name: String,
    pub track_index: usize,
    /// One-based position label, e.g. "Point 3".
    pub position_label: String,
    pub symbol: StormSymbol,
    pub glyph: String,
    pub wind_speed: f64,
    pub pressure: f64,
    pub category: String,
    pub category_label: String,
    pub color: String,
}

/// Convert zones to polygon features.
pub fn zones_to_features(storm_id: &str, zones: &[ProbabilityZone], style: &ZoneStyle) -> Vec<ConeFeature> {
    zones
        .iter()
        .map(|zone| {
            ConeFeature::new(
                format!("{}-{}-{}", storm_id, zone.track_index, zone.probability_percent()),
                ConeGeometry::polygon(&zone.polygon),
                FeatureProperties::Zone(ZoneProperties {
                    storm_id: storm_id.to_string(),
                    track_index: zone.track_index,
                    probability: zone.probability_percent(),
                    radius_km: zone.radius_km,
                    color: zone.color().to_string(),
                    label: zone.label(),
                    stroke_opacity: style.stroke_opacity,
                    fill_opacity: style.fill_opacity,
                    weight: style.weight,
                }),
            )
        })
        .collect()
}

fn track_feature(storm: &Storm) -> ConeFeature {
    let summary = StormSummary::from_storm(storm);
    ConeFeature::new(
        format!("{}-track", summary.id),
        ConeGeometry::line_string(storm.positions()),
        FeatureProperties::Track(TrackProperties {
            color: category_color(&summary.max_category).to_string(),
            storm_id: summary.id,
            name: summary.name,
            year: summary.year,
            basin: summary.basin.code().to_string(),
            basin_label: summary.basin.label().to_string(),
            max_category: summary.max_category.code().to_string(),
            max_category_label: summary.max_category.label().to_string(),
            max_wind_speed: summary.max_wind_speed,
            track_length_km: summary.track_length_km,
            landfall: summary.landfall,
        }),
    )
}

fn marker_features(storm: &Storm) -> Vec<ConeFeature> {
    let storm_id = storm.id();
    storm
        .track
        .iter()
        .enumerate()
        .filter(|(_, point)| point.wind_speed > 0.0)
        .map(|(index, point)| {
            let symbol = StormSymbol::for_point(point);
            ConeFeature::new(
                format!("{}-marker-{}", storm_id, index),
                ConeGeometry::point(&point.position),
                FeatureProperties::Marker(MarkerProperties {
                    storm_id: storm_id.to_string(),
                    name: storm.name().to_string(),
                    track_index: index,
                    position_label: format!("Point {}", index + 1),
                    symbol,
                    glyph: symbol.glyph().to_string(),
                    wind_speed: point.wind_speed,
                    pressure: point.pressure,
                    category: point.category.code().to_string(),
                    category_label: point.category.label().to_string(),
                    color: category_color(&point.category).to_string(),
                }),
            )
        })
        .collect()
}

/// Build the map layer for one storm: cone zones, then track, then markers.
///
/// The collection bbox covers every zone ring.
pub fn storm_layer(storm: &Storm, options: &LayerOptions) -> ConeFeatureCollection {
    let zones = generate_forecast_cone(storm);
    layer_from_zones(storm, &zones, options)
}

/// Same as [`storm_layer`] for zones the caller already generated.
pub fn layer_from_zones(
    storm: &Storm,
    zones: &[ProbabilityZone],
    options: &LayerOptions,
) -> ConeFeatureCollection {
    let bbox = zones
        .iter()
        .filter_map(ProbabilityZone::bbox)
        .reduce(|a, b| a.union(&b))
        .or_else(|| storm.bbox());

    let mut features = zones_to_features(storm.id(), zones, &options.style);
    if options.track && !storm.track.is_empty() {
        features.push(track_feature(storm));
    }
    if options.markers {
        features.extend(marker_features(storm));
    }

    ConeFeatureCollection {
        bbox: bbox.map(|b| b.to_geojson()),
        ..ConeFeatureCollection::new()
    }
    .with_features(features)
}

/// Build one collection holding the layers of several storms.
pub fn storms_layer<'a>(
    storms: impl IntoIterator<Item = &'a Storm>,
    options: &LayerOptions,
) -> ConeFeatureCollection {
    let mut collection = ConeFeatureCollection::new();
    for storm in storms {
        collection.merge(storm_layer(storm, options));
    }
    collection
}
