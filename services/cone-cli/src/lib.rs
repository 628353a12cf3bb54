//! Forecast-cone layer rendering pipeline.
//!
//! Reads storm track GeoJSON, applies the configured storm filters and
//! writes one FeatureCollection holding the cone zones, track lines and
//! track markers of every selected storm.

pub mod config;

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::{info, warn};

use forecast_cone::{generate_forecast_cone, layer_from_zones, ConeFeatureCollection};
use storm_common::{parse_storm_collection, Storm, StormSummary};

pub use config::{ConeConfig, LayersConfig};

/// What a run produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderReport {
    pub storms_read: usize,
    pub storms_rendered: usize,
    pub zones: usize,
    pub features: usize,
    /// Largest zone radius across all rendered storms (km).
    pub max_zone_radius_km: f64,
}

/// Build the output layer from storm GeoJSON text.
pub fn render(config: &ConeConfig, storm_json: &str) -> Result<(ConeFeatureCollection, RenderReport)> {
    let storms = parse_storm_collection(storm_json).context("Failed to parse storm GeoJSON")?;
    Ok(render_storms(config, &storms))
}

/// Build the output layer from already parsed storms.
pub fn render_storms(config: &ConeConfig, storms: &[Storm]) -> (ConeFeatureCollection, RenderReport) {
    let selected = config.filters.apply(storms);
    if selected.is_empty() && !storms.is_empty() {
        warn!(filters = ?config.filters, "No storms matched the filters");
    }

    let options = config.layer_options();
    let mut collection = ConeFeatureCollection::new();
    let mut report = RenderReport {
        storms_read: storms.len(),
        storms_rendered: selected.len(),
        ..RenderReport::default()
    };

    for storm in selected {
        let zones = generate_forecast_cone(storm);
        let max_radius = zones.iter().map(|z| z.radius_km).fold(0.0, f64::max);
        report.zones += zones.len();
        report.max_zone_radius_km = report.max_zone_radius_km.max(max_radius);

        let summary = StormSummary::from_storm(storm);
        info!(
            storm = %summary.headline(),
            points = storm.track.len(),
            zones = zones.len(),
            max_radius_km = max_radius,
            "Rendered forecast cone"
        );

        collection.merge(layer_from_zones(storm, &zones, &options));
    }

    report.features = collection.features.len();
    (collection, report)
}

/// Read the configured input, render, and write the configured output.
pub fn run(config: &ConeConfig) -> Result<RenderReport> {
    let input = config
        .input
        .as_ref()
        .context("No input file configured (use --input or STORM_CONE_INPUT)")?;
    let storm_json = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read storm data: {:?}", input))?;

    let (collection, report) = render(config, &storm_json)?;

    if config.writes_to_stdout() {
        let stdout = io::stdout();
        write_collection(&collection, stdout.lock(), config.pretty)?;
    } else if let Some(path) = &config.output {
        let file = File::create(path).with_context(|| format!("Failed to create: {:?}", path))?;
        write_collection(&collection, BufWriter::new(file), config.pretty)?;
        info!(path = ?path, features = report.features, "Wrote cone layer");
    }

    Ok(report)
}

fn write_collection<W: Write>(collection: &ConeFeatureCollection, mut writer: W, pretty: bool) -> Result<()> {
    collection
        .write_to(&mut writer, pretty)
        .context("Failed to write cone layer")?;
    writer.flush().context("Failed to flush cone layer")?;
    Ok(())
}
