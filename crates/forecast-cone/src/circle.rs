//! Circle polygons on the sphere using an equirectangular approximation.
//!
//! Offsets are computed in radians relative to a spherical Earth and added
//! to the centre. This is accurate enough for drawing uncertainty zones a few
//! hundred kilometres across; it is not a geodesic buffer.

use std::f64::consts::PI;

use storm_common::LatLon;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Number of edges in a circle ring.
pub const CIRCLE_SEGMENTS: usize = 32;

/// Number of points in a circle ring (the first point is repeated at the end).
pub const CIRCLE_POINT_COUNT: usize = CIRCLE_SEGMENTS + 1;

/// Latitude bound used when scaling longitude offsets.
///
/// `cos(90°)` is zero, so the latitude that feeds the longitude scale is
/// clamped to this magnitude. Polar circles come out stretched but finite.
pub const MAX_SCALE_LATITUDE: f64 = 89.9;

/// Build a closed ring of [`CIRCLE_POINT_COUNT`] points around `center`.
///
/// Point `i` lies at bearing `i * 360 / 32` degrees (0° is north, 90° is
/// east). The last point is an exact copy of the first.
///
/// A zero, negative or non-finite radius collapses the ring onto the centre.
///
/// Output coordinates are not normalised. Longitudes are not wrapped into
/// [-180, 180] and latitudes are not clamped to ±90, so rings near the
/// antimeridian or a pole extend past those bounds (a 120 km ring at the
/// pole spans several hundred degrees of longitude). Rings stay contiguous that way.
pub fn create_circle(center: LatLon, radius_km: f64) -> Vec<LatLon> {
    if !center.is_finite() || !radius_km.is_finite() || radius_km <= 0.0 {
        return vec![center; CIRCLE_POINT_COUNT];
    }

    let angular_radius = radius_km / EARTH_RADIUS_KM;
    let scale_lat = center.lat.clamp(-MAX_SCALE_LATITUDE, MAX_SCALE_LATITUDE);
    let lon_scale = (scale_lat * PI / 180.0).cos();

    let mut ring = Vec::with_capacity(CIRCLE_POINT_COUNT);
    for i in 0..CIRCLE_SEGMENTS {
        let angle_deg = (i * 360) as f64 / CIRCLE_SEGMENTS as f64;
        let angle_rad = angle_deg * PI / 180.0;

        let delta_lat = angular_radius * angle_rad.cos();
        let delta_lon = angular_radius * angle_rad.sin() / lon_scale;

        ring.push(LatLon::new(
            center.lat + delta_lat * (180.0 / PI),
            center.lon + delta_lon * (180.0 / PI),
        ));
    }
    // 360° lands on the 0° point up to rounding; copy it so the ring closes exactly
    ring.push(ring[0]);

    ring
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_count_and_closure() {
        let ring = create_circle(LatLon::new(25.0, -80.0), 100.0);
        assert_eq!(ring.len(), CIRCLE_POINT_COUNT);
        assert_eq!(ring[0], ring[CIRCLE_SEGMENTS]);
    }

    #[test]
    fn test_first_point_is_due_north() {
        let center = LatLon::new(25.0, -80.0);
        let ring = create_circle(center, 100.0);
        let expected_dlat = 100.0 / EARTH_RADIUS_KM * 180.0 / PI;
        assert!((ring[0].lat - (center.lat + expected_dlat)).abs() < 1e-12);
        assert!((ring[0].lon - center.lon).abs() < 1e-12);
    }

    #[test]
    fn test_quarter_point_is_due_east() {
        let center = LatLon::new(0.0, 0.0);
        let ring = create_circle(center, 100.0);
        let expected = 100.0 / EARTH_RADIUS_KM * 180.0 / PI;
        assert!(ring[8].lat.abs() < 1e-9);
        assert!((ring[8].lon - expected).abs() < 1e-12);
    }

    #[test]
    fn test_zero_radius_collapses() {
        let center = LatLon::new(12.5, 140.0);
        let ring = create_circle(center, 0.0);
        assert_eq!(ring.len(), CIRCLE_POINT_COUNT);
        assert!(ring.iter().all(|p| *p == center));
    }

    #[test]
    fn test_negative_and_nan_radius_collapse() {
        let center = LatLon::new(12.5, 140.0);
        assert!(create_circle(center, -10.0).iter().all(|p| *p == center));
        assert!(create_circle(center, f64::NAN).iter().all(|p| *p == center));
    }

    #[test]
    fn test_polar_longitudes_not_wrapped() {
        let ring = create_circle(LatLon::new(90.0, 0.0), 120.0);
        let max_lon = ring.iter().map(|p| p.lon.abs()).fold(0.0, f64::max);
        assert!(max_lon > 180.0);
        assert!(max_lon.is_finite());
        // due east at 8/32
        assert!(ring[8].lon > 600.0);
        assert!((ring[8].lon + ring[24].lon).abs() < 1e-9);
    }

    #[test]
    fn test_antimeridian_ring_stays_contiguous() {
        let ring = create_circle(LatLon::new(10.0, 179.5), 200.0);
        assert!(ring[8].lon > 180.0);
        for pair in ring.windows(2) {
            assert!((pair[1].lon - pair[0].lon).abs() < 1.0);
        }
    }

    #[test]
    fn test_pole_stays_finite() {
        for lat in [90.0, -90.0] {
            let ring = create_circle(LatLon::new(lat, 0.0), 50.0);
            assert_eq!(ring.len(), CIRCLE_POINT_COUNT);
            assert!(ring.iter().all(LatLon::is_finite), "lat {lat}");
        }
    }
}
