//! Configuration for `nearbyctl`.
//!
//! ```hcl
//! version = 1
//!
//! limit         = 8
//! alerts        = "alerts.json"
//! volunteers    = "volunteers.json"
//! help_requests = "requests.json"
//! areas         = "areas.hcl"
//! ```
//!
//! Relative paths are from the directory holding the file.
//!

use std::path::{Path, PathBuf};

use eyre::Result;
use relief_common::{default_file, ConfigFile, Versioned};
use relief_nearby::DEFAULT_LIMIT;
use serde::Deserialize;
use tracing::debug;

/// Current version
pub const CVERSION: usize = 1;

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct Config {
    pub version: usize,
    /// How many items to show
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Default snapshots
    pub alerts: Option<PathBuf>,
    pub volunteers: Option<PathBuf>,
    pub help_requests: Option<PathBuf>,
    /// Affected areas, default is the built-in list
    pub areas: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CVERSION,
            limit: DEFAULT_LIMIT,
            alerts: None,
            volunteers: None,
            help_requests: None,
            areas: None,
        }
    }
}

impl Versioned for Config {
    fn version(&self) -> usize {
        self.version
    }
}

impl Config {
    /// Load `fname`, or the default file if it exists.  No file at all is fine.
    ///
    #[tracing::instrument]
    pub fn load(fname: Option<&Path>) -> Result<Config> {
        let fname = match fname {
            Some(fname) => fname.to_path_buf(),
            None => {
                let def = default_file();
                if !def.exists() {
                    debug!("no config file, using defaults");
                    return Ok(Config::default());
                }
                def
            }
        };

        let file = ConfigFile::<Config>::load(Some(&fname), CVERSION)?;
        let resolve = |p: &Option<PathBuf>| p.as_deref().map(|p| file.resolve(p));

        let cfg = file.inner();
        Ok(Config {
            version: cfg.version,
            limit: cfg.limit,
            alerts: resolve(&cfg.alerts),
            volunteers: resolve(&cfg.volunteers),
            help_requests: resolve(&cfg.help_requests),
            areas: resolve(&cfg.areas),
        })
    }
}
