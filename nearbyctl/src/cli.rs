//! Module describing all possible commands and sub-commands to the `nearbyctl` main driver
//!
//! - `rank` loads the alerts, volunteers and help requests snapshots (JSON arrays) and lists the
//!   closest ones around a position
//! - `distance` is the great-circle distance between two points
//! - `areas` lists the known affected areas
//!
//! `completion` is here just to configure the various shells completion system.
//!

use std::path::PathBuf;

use clap::{crate_authors, crate_description, crate_name, crate_version, Parser, Subcommand};
use clap_complete::shells::Shell;

/// CLI options
#[derive(Parser)]
#[command(disable_version_flag = true)]
#[clap(name = crate_name!(), about = crate_description!())]
#[clap(version = crate_version!(), author = crate_authors!())]
pub struct Opts {
    /// configuration file.
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,
    /// Output file (default is stdout).
    #[clap(short = 'o', long)]
    pub output: Option<PathBuf>,
    /// Hierarchical log output.
    #[clap(short = 'T', long)]
    pub tree: bool,
    /// Also log into hourly files in this directory.
    #[clap(long)]
    pub log_dir: Option<PathBuf>,
    /// Sub-commands (see below).
    #[clap(subcommand)]
    pub subcmd: SubCommand,
}

// ------

/// All sub-commands:
///
/// `areas`
/// `completion SHELL`
/// `distance LAT1 LNG1 LAT2 LNG2`
/// `rank [--lat F --lng F | --area NAME] [-n N] [-a FILE] [-v FILE] [-r FILE] [--json]`
/// `version`
///
#[derive(Debug, Subcommand)]
pub enum SubCommand {
    /// List all known affected areas.
    Areas,
    /// Generate Completion stuff
    Completion(ComplOpts),
    /// Distance between two points.
    Distance(DistOpts),
    /// List the closest alerts, volunteers and help requests.
    Rank(RankOpts),
    /// List all package versions.
    Version,
}

// ------

/// Options for `rank`.
///
#[derive(Debug, Parser)]
pub struct RankOpts {
    /// Latitude of the user, in degrees.
    #[clap(long, requires = "lng", allow_negative_numbers = true)]
    pub lat: Option<f64>,
    /// Longitude of the user, in degrees.
    #[clap(long, requires = "lat", allow_negative_numbers = true)]
    pub lng: Option<f64>,
    /// Use the centre of this affected area as position.
    #[clap(long, conflicts_with_all = ["lat", "lng"])]
    pub area: Option<String>,
    /// Maximum number of items (default is from config, or 8).
    #[clap(short = 'n', long)]
    pub limit: Option<usize>,
    /// Alerts file (JSON array).
    #[clap(short = 'a', long)]
    pub alerts: Option<PathBuf>,
    /// Volunteers file (JSON array).
    #[clap(short = 'v', long)]
    pub volunteers: Option<PathBuf>,
    /// Help requests file (JSON array).
    #[clap(short = 'r', long = "requests")]
    pub help_requests: Option<PathBuf>,
    /// Output JSON instead of a table.
    #[clap(short = 'j', long)]
    pub json: bool,
}

/// Options for `distance`.
///
#[derive(Debug, Parser)]
pub struct DistOpts {
    /// Latitude of the first point.
    #[clap(allow_negative_numbers = true)]
    pub from_lat: f64,
    /// Longitude of the first point.
    #[clap(allow_negative_numbers = true)]
    pub from_lng: f64,
    /// Latitude of the second point.
    #[clap(allow_negative_numbers = true)]
    pub to_lat: f64,
    /// Longitude of the second point.
    #[clap(allow_negative_numbers = true)]
    pub to_lng: f64,
}

/// Options for `completion`.
///
#[derive(Debug, Parser)]
pub struct ComplOpts {
    #[clap(value_parser)]
    pub shell: Shell,
}
