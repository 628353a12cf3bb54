//! End-to-end tests: storm GeoJSON in, cone GeoJSON out.

use forecast_cone::{storm_layer, storms_layer, ConeGeometry, FeatureProperties, LayerOptions};
use storm_common::{parse_storm_collection, StormFilters};
use test_utils::sample_storms_json;

fn sample_storms() -> Vec<storm_common::Storm> {
    parse_storm_collection(&sample_storms_json()).unwrap()
}

#[test]
fn test_sample_collection_skips_empty_storm() {
    let storms = sample_storms();
    let names: Vec<&str> = storms.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["ANDREW", "KATRINA", "HAIYAN"]);
}

#[test]
fn test_layer_counts_for_all_storms() {
    let storms = sample_storms();
    let layer = storms_layer(&storms, &LayerOptions::default());

    // 6 + 3 + 2 track points
    assert_eq!(layer.count_kind("zone"), 55);
    assert_eq!(layer.count_kind("track"), 3);
    // HAIYAN's second point has a null wind speed and gets no marker
    assert_eq!(layer.count_kind("marker"), 10);
}

#[test]
fn test_output_rings_are_closed_lon_lat() {
    let storms = sample_storms();
    let andrew = &storms[0];
    let layer = storm_layer(andrew, &LayerOptions::default());

    let first_zone = &layer.features[0];
    match &first_zone.geometry {
        ConeGeometry::Polygon { coordinates } => {
            let ring = &coordinates[0];
            assert_eq!(ring.len(), 33);
            assert_eq!(ring.first(), ring.last());
            // centre is (24.0, -75.0); written as [lon, lat]
            assert!((ring[0][0] - -75.0).abs() < 1e-9);
            assert!(ring[0][1] > 24.0);
        }
        other => panic!("expected polygon, got {:?}", other),
    }
}

#[test]
fn test_track_line_preserves_input_order() {
    let storms = sample_storms();
    let katrina = &storms[1];
    let layer = storm_layer(katrina, &LayerOptions::default());
    let track = layer
        .features
        .iter()
        .find(|f| f.properties.kind() == "track")
        .unwrap();

    match &track.geometry {
        ConeGeometry::LineString { coordinates } => {
            assert_eq!(
                coordinates,
                &vec![[-85.0, 24.0], [-88.0, 26.0], [-89.6, 29.3]]
            );
        }
        other => panic!("expected line string, got {:?}", other),
    }
    match &track.properties {
        FeatureProperties::Track(props) => {
            assert_eq!(props.name, "KATRINA");
            assert_eq!(props.max_wind_speed, 150.0);
            assert_eq!(props.color, "#8000ff");
        }
        other => panic!("expected track properties, got {:?}", other),
    }
}

#[test]
fn test_filtered_layer() {
    let storms = sample_storms();
    let filters = StormFilters::new().with_year(2013);
    let layer = storms_layer(filters.apply(&storms), &LayerOptions::default());
    assert_eq!(layer.count_kind("zone"), 10);

    let bbox = layer.bbox.unwrap();
    assert!(bbox[0] < 124.0 && bbox[2] > 125.0);
}
