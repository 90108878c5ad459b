//! Utility listing the relief resources (alerts, volunteers and help requests) closest to a
//! given position.
//!
//! It uses an optional configuration file from `$HOME/.config/relief-nearby` or
//! `%LOCALAPPDATA%/relief-nearby` on UNIX/Linux and Windows.
//!

use std::fs;
use std::io;

use clap::{crate_version, CommandFactory, Parser};
use clap_complete::generate;
use eyre::Result;
use tracing::{info, trace};

use relief_common::{init_logging, list_areas, load_areas};

use crate::cli::{Opts, SubCommand};
use crate::cmds::{distance_between, rank_around};
use crate::config::Config;

mod cli;
mod cmds;
mod config;

/// Binary name, using a different binary name
pub const NAME: &str = env!("CARGO_BIN_NAME");
/// Binary version
pub const VERSION: &str = crate_version!();

#[tokio::main]
async fn main() -> Result<()> {
    let opts = Opts::parse();

    // Initialise logging early
    //
    let _guard = init_logging(NAME, opts.tree, opts.log_dir.clone())?;
    trace!("Logging initialised.");

    let cfg = Config::load(opts.config.as_deref())?;
    let areas = load_areas(cfg.areas.as_deref())?;

    trace!("Execute commands.");
    let out = match opts.subcmd {
        SubCommand::Areas => format!("{}\n", list_areas(&areas)),
        SubCommand::Completion(copts) => {
            let mut cmd = Opts::command();
            generate(copts.shell, &mut cmd, NAME, &mut io::stdout());
            return Ok(());
        }
        SubCommand::Distance(dopts) => distance_between(&dopts),
        SubCommand::Rank(ropts) => rank_around(&cfg, areas, &ropts).await?,
        SubCommand::Version => format!("{} v{} ({})\n", NAME, VERSION, relief_common::version()),
    };

    match &opts.output {
        Some(fname) => {
            info!("Writing into {}", fname.display());
            fs::write(fname, out)?;
        }
        None => print!("{out}"),
    }
    Ok(())
}
