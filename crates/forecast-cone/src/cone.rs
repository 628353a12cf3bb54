//! Forecast cone generation.
//!
//! Uncertainty grows along the track: the base radius of point `i` is
//! `max(50, 25 * i) + wind / 2` km. Each point then gets one zone per
//! [`ProbabilityLevel`], scaled by the level's multiplier.

use serde::{Deserialize, Serialize};
use tracing::debug;

use storm_common::{BoundingBox, Category, LatLon, Storm, TrackPoint};

use crate::circle::create_circle;
use crate::levels::ProbabilityLevel;

/// Radius floor for every track point (km).
pub const MIN_BASE_RADIUS_KM: f64 = 50.0;

/// Radius added per track index (km).
pub const RADIUS_GROWTH_PER_POINT_KM: f64 = 25.0;

/// Base uncertainty radius in kilometres for track index `index`.
///
/// Negative or non-finite wind speeds count as 0, so the result is always
/// at least [`MIN_BASE_RADIUS_KM`].
pub fn base_radius_km(index: usize, wind_speed: f64) -> f64 {
    let wind = storm_common::storm::sanitize_wind_speed(wind_speed);
    let growth = index as f64 * RADIUS_GROWTH_PER_POINT_KM;
    MIN_BASE_RADIUS_KM.max(growth) + wind / 2.0
}

/// A track point together with its uncertainty radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub index: usize,
    pub position: LatLon,
    pub wind_speed: f64,
    pub pressure: f64,
    pub category: Category,
    /// Base uncertainty radius (km).
    pub radius_km: f64,
}

/// Compute the uncertainty model for each point of a track, in track order.
pub fn forecast_points(track: &[TrackPoint]) -> Vec<ForecastPoint> {
    track
        .iter()
        .enumerate()
        .map(|(index, point)| ForecastPoint {
            index,
            position: point.position,
            wind_speed: point.wind_speed,
            pressure: point.pressure,
            category: point.category.clone(),
            radius_km: base_radius_km(index, point.wind_speed),
        })
        .collect()
}

/// One probability band around one track point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityZone {
    /// Index of the track point this zone surrounds.
    pub track_index: usize,
    pub center: LatLon,
    pub probability: ProbabilityLevel,
    pub radius_km: f64,
    /// Closed ring, first point == last point.
    pub polygon: Vec<LatLon>,
}

impl ProbabilityZone {
    /// Build the zone for `level` around a forecast point.
    pub fn around(point: &ForecastPoint, level: ProbabilityLevel) -> Self {
        let radius_km = level.zone_radius_km(point.radius_km);
        Self {
            track_index: point.index,
            center: point.position,
            probability: level,
            radius_km,
            polygon: create_circle(point.position, radius_km),
        }
    }

    pub fn probability_percent(&self) -> u8 {
        self.probability.percent()
    }

    pub fn color(&self) -> &'static str {
        self.probability.color()
    }

    pub fn label(&self) -> String {
        self.probability.label()
    }

    /// Extent of the ring.
    pub fn bbox(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(&self.polygon)
    }
}

/// Generate all probability zones for a track.
///
/// Zones are grouped by track point in track order, and within a point run
/// from 90% down to 10%. The output has exactly `5 * track.len()` entries.
pub fn generate_cone_for_track(track: &[TrackPoint]) -> Vec<ProbabilityZone> {
    let points = forecast_points(track);
    let mut zones = Vec::with_capacity(points.len() * ProbabilityLevel::DESCENDING.len());

    for point in &points {
        for level in ProbabilityLevel::DESCENDING {
            zones.push(ProbabilityZone::around(point, level));
        }
    }

    zones
}

/// Generate the forecast cone for a storm.
pub fn generate_forecast_cone(storm: &Storm) -> Vec<ProbabilityZone> {
    let zones = generate_cone_for_track(&storm.track);
    debug!(
        storm = %storm.name(),
        points = storm.track.len(),
        zones = zones.len(),
        "Generated forecast cone"
    );
    zones
}
