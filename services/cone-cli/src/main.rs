//! storm-cone
//!
//! Renders forecast-cone probability zones for storm tracks as GeoJSON.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use cone_cli::ConeConfig;
use storm_common::Basin;

#[derive(Parser, Debug)]
#[command(name = "storm-cone")]
#[command(about = "Render storm forecast cones as GeoJSON map layers")]
struct Args {
    /// Storm track GeoJSON file
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file ("-" for stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// YAML configuration file
    #[arg(short, long, env = "STORM_CONE_CONFIG")]
    config: Option<PathBuf>,

    /// Only storms whose name contains this text
    #[arg(long)]
    name: Option<String>,

    /// Only storms from this year
    #[arg(long)]
    year: Option<i32>,

    /// Only storms from this basin (NA, EP, WP, NI, SI, SP)
    #[arg(long)]
    basin: Option<String>,

    /// Leave out the track line
    #[arg(long)]
    no_track: bool,

    /// Leave out the track point markers
    #[arg(long)]
    no_markers: bool,

    /// Pretty-print the GeoJSON
    #[arg(long)]
    pretty: bool,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Logs go to stderr so stdout stays clean GeoJSON
    fmt()
        .with_env_filter(log_filter(&args.log_level))
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = load_config(&args)?;
    info!(
        input = ?config.input,
        output = ?config.output,
        filters = ?config.filters,
        "Starting storm-cone"
    );

    let report = cone_cli::run(&config)?;
    info!(
        storms_read = report.storms_read,
        storms_rendered = report.storms_rendered,
        zones = report.zones,
        features = report.features,
        max_zone_radius_km = report.max_zone_radius_km,
        "Finished"
    );

    Ok(())
}

/// `--log-level` already falls back to `RUST_LOG`, so the flag wins when both are set.
fn log_filter(level: &str) -> EnvFilter {
    EnvFilter::new(level)
}

/// Defaults, then the YAML file, then the environment, then flags.
fn load_config(args: &Args) -> Result<ConeConfig> {
    let base = match &args.config {
        Some(path) => ConeConfig::from_yaml_file(path)?,
        None => ConeConfig::default(),
    };
    let mut config = base.with_env()?;

    if let Some(input) = &args.input {
        config.input = Some(input.clone());
    }
    if let Some(output) = &args.output {
        config.output = Some(output.clone());
    }
    if let Some(name) = &args.name {
        config.filters.name = Some(name.clone());
    }
    if let Some(year) = args.year {
        config.filters.year = Some(year);
    }
    if let Some(basin) = &args.basin {
        config.filters.basin = Some(Basin::from_code(basin));
    }
    if args.no_track {
        config.layers.track = false;
    }
    if args.no_markers {
        config.layers.markers = false;
    }
    if args.pretty {
        config.pretty = true;
    }

    Ok(config)
}
