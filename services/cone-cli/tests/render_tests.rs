//! Pipeline tests for the storm-cone renderer.

use std::path::PathBuf;

use cone_cli::{render, run, ConeConfig};
use forecast_cone::FeatureProperties;
use storm_common::{Basin, StormFilters};
use test_utils::{sample_storms_json, sample_storms_path, temp_test_dir};

// ============================================================================
// render()
// ============================================================================

#[test]
fn test_render_all_sample_storms() {
    let (collection, report) = render(&ConeConfig::default(), &sample_storms_json()).unwrap();
    assert_eq!(report.storms_read, 3);
    assert_eq!(report.storms_rendered, 3);
    assert_eq!(report.zones, 55);
    assert_eq!(report.features, collection.features.len());
    assert_eq!(collection.features.len(), 55 + 3 + 10);
}

#[test]
fn test_render_max_radius() {
    let (_, report) = render(&ConeConfig::default(), &sample_storms_json()).unwrap();
    // ANDREW index 5: max(50, 125) + 100 / 2 = 175 km, times 1.2
    assert!((report.max_zone_radius_km - 210.0).abs() < 1e-9);
}

#[test]
fn test_report_matches_rendered_zones() {
    let (collection, report) = render(&ConeConfig::default(), &sample_storms_json()).unwrap();
    assert_eq!(report.zones, collection.count_kind("zone"));

    let max_feature_radius = collection
        .features
        .iter()
        .filter_map(|f| match &f.properties {
            FeatureProperties::Zone(zone) => Some(zone.radius_km),
            _ => None,
        })
        .fold(0.0, f64::max);
    assert_eq!(report.max_zone_radius_km, max_feature_radius);
}

#[test]
fn test_render_with_filters_and_layers() {
    let config = ConeConfig {
        filters: StormFilters::new().with_basin(Basin::NorthAtlantic).with_name("kat"),
        layers: cone_cli::LayersConfig {
            track: false,
            markers: false,
        },
        ..ConeConfig::default()
    };
    let (collection, report) = render(&config, &sample_storms_json()).unwrap();
    assert_eq!(report.storms_rendered, 1);
    assert_eq!(collection.features.len(), 15);
    assert_eq!(collection.count_kind("zone"), 15);
}

#[test]
fn test_render_no_matches() {
    let config = ConeConfig {
        filters: StormFilters::new().with_year(1850),
        ..ConeConfig::default()
    };
    let (collection, report) = render(&config, &sample_storms_json()).unwrap();
    assert_eq!(report.storms_rendered, 0);
    assert!(collection.features.is_empty());
    assert!(collection.bbox.is_none());
}

#[test]
fn test_render_rejects_bad_document() {
    assert!(render(&ConeConfig::default(), "not json").is_err());
}

// ============================================================================
// run()
// ============================================================================

#[test]
fn test_run_writes_output_file() {
    let dir = temp_test_dir();
    let output = dir.path().join("cones.geojson");
    let config = ConeConfig {
        input: Some(sample_storms_path()),
        output: Some(output.clone()),
        filters: StormFilters::new().with_year(2013),
        pretty: true,
        ..ConeConfig::default()
    };

    let report = run(&config).unwrap();
    assert_eq!(report.storms_rendered, 1);

    let written = std::fs::read_to_string(&output).unwrap();
    let json: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(json["type"], "FeatureCollection");
    assert_eq!(json["features"].as_array().unwrap().len(), report.features);
    assert!(written.contains('\n'));
}

#[test]
fn test_run_from_yaml_config() {
    let dir = temp_test_dir();
    let output = dir.path().join("out.geojson");
    let config_path = dir.path().join("storm-cone.yaml");
    std::fs::write(
        &config_path,
        format!(
            "input: {:?}\noutput: {:?}\nfilters:\n  name: andrew\nlayers:\n  track: false\n",
            sample_storms_path(),
            output
        ),
    )
    .unwrap();

    let config = ConeConfig::from_yaml_file(&config_path).unwrap();
    let report = run(&config).unwrap();
    assert_eq!(report.storms_rendered, 1);
    // 6 points: 30 zones + 6 markers, no track
    assert_eq!(report.features, 36);
    assert!(output.exists());
}

#[test]
fn test_run_missing_input() {
    let err = run(&ConeConfig::default()).unwrap_err();
    assert!(err.to_string().contains("No input file"));

    let config = ConeConfig {
        input: Some(PathBuf::from("/nonexistent/storms.geojson")),
        ..ConeConfig::default()
    };
    assert!(run(&config).is_err());
}
