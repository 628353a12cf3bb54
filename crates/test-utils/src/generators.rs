//! Synthetic storm track generators.
//!
//! These create predictable tracks that make expected radii easy to
//! compute by hand.

use storm_common::{Basin, Category, Storm, StormMetadata, TrackPoint};

/// Creates a straight north-westward track with `len` points.
///
/// Point `i` sits at `(start_lat + 0.5 * i, start_lon - 0.75 * i)` and has
/// wind speed `wind_start + wind_step * i` knots.
///
/// # Example
///
/// ```
/// use test_utils::straight_track;
///
/// let storm = straight_track(4, (20.0, -60.0), 30.0, 10.0);
/// assert_eq!(storm.track.len(), 4);
/// assert_eq!(storm.track[3].wind_speed, 60.0);
/// ```
pub fn straight_track(len: usize, start: (f64, f64), wind_start: f64, wind_step: f64) -> Storm {
    let (start_lat, start_lon) = start;
    let track = (0..len)
        .map(|i| {
            let wind = wind_start + wind_step * i as f64;
            TrackPoint::at(start_lat + 0.5 * i as f64, start_lon - 0.75 * i as f64)
                .with_wind_speed(wind)
                .with_category(category_for_wind(wind))
        })
        .collect();

    Storm::new(
        StormMetadata::new(format!("STRAIGHT{}", len), 2024, Basin::NorthAtlantic),
        track,
    )
}

/// Creates a track where every point has the same position and wind.
pub fn stationary_track(len: usize, lat: f64, lon: f64, wind: f64) -> Storm {
    Storm::new(
        StormMetadata::new("STATIONARY", 2024, Basin::NorthAtlantic),
        (0..len)
            .map(|_| TrackPoint::at(lat, lon).with_wind_speed(wind))
            .collect(),
    )
}

/// Saffir-Simpson category for a sustained wind speed in knots.
pub fn category_for_wind(wind_kt: f64) -> Category {
    match wind_kt {
        w if w >= 137.0 => Category::Five,
        w if w >= 113.0 => Category::Four,
        w if w >= 96.0 => Category::Three,
        w if w >= 83.0 => Category::Two,
        w if w >= 64.0 => Category::One,
        _ => Category::TropicalStorm,
    }
}
