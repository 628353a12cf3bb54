//! Common types and utilities shared across the storm-cone workspace.
//!
//! Coordinates are held internally as [`LatLon`] (latitude first). GeoJSON
//! input uses `[longitude, latitude]`; the flip happens in [`geojson`] and
//! nowhere else.

pub mod bbox;
pub mod category;
pub mod coord;
pub mod error;
pub mod filters;
pub mod geojson;
pub mod storm;
pub mod summary;

pub use bbox::BoundingBox;
pub use category::{Basin, Category};
pub use coord::LatLon;
pub use error::{StormError, StormResult};
pub use filters::{filter_storm_names, unique_storm_names, unique_years, StormFilters};
pub use geojson::{parse_storm_collection, StormCollectionDocument, StormFeatureDocument};
pub use storm::{Storm, StormMetadata, TrackPoint, DEFAULT_PRESSURE_MB};
pub use summary::StormSummary;
