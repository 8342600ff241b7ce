//! ringo: drift-aware path reports for orchard survey snapshots.
//!
//! Reads a world-map snapshot JSON (an origin tag plus apple
//! detections), orders the apples by distance from the origin, and
//! prints a per-segment travel report with directional drift
//! compensation applied.
//!
//! Progress notes go to stderr; the report itself goes to stdout.
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin ringo -- [OPTIONS] [SNAPSHOT_PATH]
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use ringo_route::{DriftConfig, RouteError, Snapshot};

/// Drift-aware path reports for orchard survey snapshots.
///
/// Loads a snapshot, orders apple detections by distance from the
/// origin tag, and prints per-segment travel statistics with
/// directional drift compensation.
#[derive(Parser)]
#[command(name = "ringo", version)]
struct Cli {
    /// Path to the world-map snapshot JSON.
    #[arg(default_value = "multi_results/merged_world_map.json")]
    snapshot_path: PathBuf,

    /// Scale factor for leftward motion (dx > 0 under the flipped X axis).
    #[arg(long, default_value_t = DriftConfig::DEFAULT_LEFT_FACTOR)]
    left_factor: f64,

    /// Scale factor for rightward motion (dx < 0).
    #[arg(long, default_value_t = DriftConfig::DEFAULT_RIGHT_FACTOR)]
    right_factor: f64,

    /// Scale factor for forward/backward (Y axis) motion.
    #[arg(long, default_value_t = DriftConfig::DEFAULT_AXIAL_FACTOR)]
    axial_factor: f64,

    /// Full drift config as a JSON string.
    ///
    /// When provided, the individual factor flags are ignored. The
    /// JSON must be a valid `DriftConfig` serialization.
    #[arg(long)]
    config_json: Option<String>,
}

/// Errors that abort the run. All are fatal; there is no fallback path.
#[derive(Debug, thiserror::Error)]
enum CliError {
    /// The snapshot path does not exist on disk.
    #[error("snapshot file not found at {}", .0.display())]
    MissingFile(PathBuf),

    /// The snapshot file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Invalid `--config-json` value.
    #[error("error parsing --config-json: {0}")]
    ConfigJson(serde_json::Error),

    /// Planning failed: parse error, missing origin, or bad data.
    #[error(transparent)]
    Route(#[from] RouteError),
}

/// Build a [`DriftConfig`] from CLI arguments.
///
/// `--config-json` takes precedence over the individual factor flags.
fn config_from_cli(cli: &Cli) -> Result<DriftConfig, CliError> {
    if let Some(ref json) = cli.config_json {
        return serde_json::from_str(json).map_err(CliError::ConfigJson);
    }

    Ok(DriftConfig {
        left_factor: cli.left_factor,
        right_factor: cli.right_factor,
        axial_factor: cli.axial_factor,
    })
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = config_from_cli(cli)?;

    if !cli.snapshot_path.exists() {
        return Err(CliError::MissingFile(cli.snapshot_path.clone()));
    }
    let text = std::fs::read_to_string(&cli.snapshot_path).map_err(|source| CliError::Read {
        path: cli.snapshot_path.clone(),
        source,
    })?;

    let snapshot = Snapshot::from_json(&text)?;
    eprintln!(
        "Snapshot: {} ({} tags, {} apples)",
        cli.snapshot_path.display(),
        snapshot.tags.len(),
        snapshot.apples.len(),
    );

    let route = ringo_route::plan(&snapshot, &config)?;
    print!("{}", ringo_report::to_report(&route, &config));
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
