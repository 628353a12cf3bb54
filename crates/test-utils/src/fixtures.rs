//! Common storm fixtures for storm-cone tests.

use storm_common::{Basin, Category, LatLon, Storm, StormMetadata, TrackPoint};

/// Reference positions used across tests.
pub mod positions {
    /// Off the Florida Keys; the canonical single-point cone centre.
    pub const KEYS: (f64, f64) = (25.0, -80.0);

    /// Mid-Atlantic, well inside the tropical domain.
    pub const MID_ATLANTIC: (f64, f64) = (15.0, -45.0);

    /// North pole (latitude first).
    pub const NORTH_POLE: (f64, f64) = (90.0, 0.0);

    /// South pole (latitude first).
    pub const SOUTH_POLE: (f64, f64) = (-90.0, 0.0);
}

/// A one-point Category 3 storm at (25, -80) with 100 kt winds.
///
/// Its base uncertainty radius is 100 km.
pub fn single_point_storm() -> Storm {
    let (lat, lon) = positions::KEYS;
    Storm::new(
        StormMetadata::new("SINGLE", 2020, Basin::NorthAtlantic),
        vec![TrackPoint::at(lat, lon)
            .with_wind_speed(100.0)
            .with_pressure(950.0)
            .with_category(Category::Three)],
    )
}

/// A three-point storm whose last point carries 50 kt winds.
///
/// Point index 2 has a base radius of `max(50, 50) + 25 = 75` km.
pub fn three_point_storm() -> Storm {
    Storm::new(
        StormMetadata::new("TRIPLE", 2021, Basin::NorthAtlantic),
        vec![
            TrackPoint::at(18.0, -60.0).with_wind_speed(30.0),
            TrackPoint::at(19.0, -62.0)
                .with_wind_speed(40.0)
                .with_category(Category::TropicalStorm),
            TrackPoint::at(20.0, -64.0)
                .with_wind_speed(50.0)
                .with_category(Category::TropicalStorm),
        ],
    )
}

/// A storm whose only track point sits on the north pole.
pub fn polar_storm() -> Storm {
    let (lat, lon) = positions::NORTH_POLE;
    Storm::new(
        StormMetadata::new("POLAR", 2022, Basin::Other("AR".to_string())),
        vec![TrackPoint::at(lat, lon).with_wind_speed(40.0)],
    )
}

/// A storm with no track at all.
pub fn empty_storm() -> Storm {
    Storm::new(StormMetadata::new("EMPTY", 2001, Basin::EastPacific), Vec::new())
}

/// Centre position of [`single_point_storm`].
pub fn keys_center() -> LatLon {
    let (lat, lon) = positions::KEYS;
    LatLon::new(lat, lon)
}
