//! Forecast-cone geometry for storm tracks.
//!
//! For every track point the generator computes an uncertainty radius that
//! grows along the track and with wind speed, then emits five nested
//! probability zones (90% innermost, 10% outermost) as closed circle rings.
//!
//! # Example
//!
//! ```rust
//! use forecast_cone::{generate_forecast_cone, ProbabilityLevel};
//! use storm_common::{Basin, Storm, StormMetadata, TrackPoint};
//!
//! let storm = Storm::new(
//!     StormMetadata::new("SAMPLE", 2024, Basin::NorthAtlantic),
//!     vec![TrackPoint::at(25.0, -80.0).with_wind_speed(100.0)],
//! );
//!
//! let zones = generate_forecast_cone(&storm);
//! assert_eq!(zones.len(), 5);
//! assert_eq!(zones[0].probability, ProbabilityLevel::P90);
//! assert_eq!(zones[0].radius_km, 30.0);
//! ```

pub mod circle;
pub mod cone;
pub mod error;
pub mod geojson;
pub mod levels;
pub mod symbols;

pub use circle::{create_circle, CIRCLE_POINT_COUNT, CIRCLE_SEGMENTS, EARTH_RADIUS_KM};
pub use cone::{
    base_radius_km, forecast_points, generate_cone_for_track, generate_forecast_cone,
    ForecastPoint, ProbabilityZone,
};
pub use error::{ConeError, ConeResult};
pub use geojson::{
    layer_from_zones, storm_layer, storms_layer, zones_to_features, ConeFeature,
    ConeFeatureCollection, ConeGeometry, FeatureProperties, LayerOptions, ZoneStyle,
};
pub use levels::ProbabilityLevel;
pub use symbols::{
    category_color, legend_entries, probability_color, storm_symbol, LegendEntry, StormSymbol,
};
