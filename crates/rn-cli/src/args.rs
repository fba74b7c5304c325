//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use rn_core::GeoPoint;
use rn_query::QueryConfig;

#[derive(Debug, Parser)]
#[command(name = "radius-near")]
#[command(about = "Find facilities within a radius of a reference point")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse free-form coordinate text and print the point
    Parse {
        /// Coordinate text, e.g. "14.5995, 120.9842" or 14°35'58"N 120°59'3"E
        text: String,
    },
    /// List facilities within a radius of a reference point
    Near {
        #[command(flatten)]
        reference: ReferenceArgs,
        /// Search radius in metres
        #[arg(long, short, default_value_t = 1000.0)]
        radius: f64,
        #[command(flatten)]
        data: DataArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List facilities whose id or property contains the text
    Find {
        text: String,
        #[command(flatten)]
        data: DataArgs,
        #[arg(long)]
        json: bool,
    },
}

/// Exactly one way of choosing the reference point.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct ReferenceArgs {
    /// Coordinate text in any format `parse` accepts
    #[arg(long)]
    pub at: Option<String>,
    /// Centre on a facility by id or property
    #[arg(long)]
    pub facility: Option<String>,
    /// Strict "lat,lng" from a positioning device
    #[arg(long, value_parser = parse_gps)]
    pub gps: Option<GeoPoint>,
}

#[derive(Debug, Args)]
pub struct DataArgs {
    /// Facility dataset (.json or .csv)
    #[arg(long, env = "RN_DATA")]
    pub data: PathBuf,
    /// Pre-built index payload; built in memory when omitted
    #[arg(long, env = "RN_INDEX")]
    pub index: Option<PathBuf>,
    /// Results shown per query
    #[arg(long, env = "RN_MAX_RESULTS", default_value_t = 50)]
    pub max_results: usize,
    /// Grid cell size in degrees for an in-memory index
    #[arg(long, env = "RN_CELL_SIZE", default_value_t = 0.01)]
    pub cell_size: f64,
}

impl DataArgs {
    pub fn query_config(&self) -> QueryConfig {
        QueryConfig {
            max_results: self.max_results,
            cell_size_deg: self.cell_size,
            ..QueryConfig::default()
        }
    }
}

fn parse_gps(s: &str) -> Result<GeoPoint, String> {
    let (lat, lng) = s.split_once(',').ok_or("expected \"lat,lng\"")?;
    let lat: f64 = lat.trim().parse().map_err(|e| format!("latitude: {e}"))?;
    let lng: f64 = lng.trim().parse().map_err(|e| format!("longitude: {e}"))?;
    GeoPoint::new(lat, lng).map_err(|e| e.to_string())
}
