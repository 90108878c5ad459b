//! This is the `ConfigFile` struct.
//!
//! This is for finding the right default locations for various configuration files for
//! `relief-nearby`.  This is a configuration file/struct neutral loading engine, storing only the
//! base directory and with `load()` read the proper file or the default one.
//!
//! This encapsulates the configuration file, available with `.inner()`, relative
//! paths inside it are resolved from the directory it was loaded from.
//!

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use eyre::Result;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::{makepath, Status, Versioned};

/// Config filename
const CONFIG: &str = "config.hcl";

/// Main name for the directory base
const TAG: &str = "relief-nearby";

/// Generic configuration file holder, `T` is the actual content.
///
#[derive(Debug)]
pub struct ConfigFile<T: Debug + DeserializeOwned + Versioned> {
    /// This is the base directory for all files.
    basedir: PathBuf,
    inner: T,
}

/// Returns the default configuration directory.
///
/// On UNIX this is `$HOME/.config/relief-nearby`, `%LOCALAPPDATA%\relief-nearby` on Windows.
///
pub fn config_path() -> PathBuf {
    match BaseDirs::new() {
        Some(base) => {
            #[cfg(unix)]
            let base = base.home_dir().join(".config");

            #[cfg(windows)]
            let base = base.data_local_dir().to_path_buf();

            debug!("base = {base:?}");
            makepath!(base, TAG)
        }
        None => makepath!(".", TAG),
    }
}

/// Returns the path of the default config file
///
pub fn default_file() -> PathBuf {
    config_path().join(CONFIG)
}

impl<T> ConfigFile<T>
where
    T: Debug + DeserializeOwned + Versioned,
{
    /// Load the file and return a struct T in the right format.
    ///
    /// Use the following search path:
    /// - file specified on CLI
    /// - default basedir (base on $HOME or $LOCALAPPDATA)
    ///
    /// `version` is the one `T` must carry.
    ///
    #[tracing::instrument]
    pub fn load(fname: Option<&Path>, version: usize) -> Result<ConfigFile<T>> {
        let fname = match fname {
            Some(fname) => fname.to_path_buf(),
            None => default_file(),
        };

        if !fname.exists() {
            return Err(Status::MissingConfig(fname.to_string_lossy().to_string()).into());
        }
        let fname = fname.canonicalize()?;
        let basedir = fname
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(config_path);

        trace!("Loading config file {fname:?} from {basedir:?}");

        let data = fs::read_to_string(&fname)?;
        debug!("string data = {data}");

        let inner: T = hcl::from_str(&data)?;
        debug!("struct data = {inner:?}");

        if inner.version() != version {
            return Err(Status::BadFileVersion(inner.version(), version).into());
        }
        Ok(ConfigFile { basedir, inner })
    }

    /// Resolve `p` relative to the configuration directory.
    ///
    pub fn resolve(&self, p: &Path) -> PathBuf {
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            self.basedir.join(p)
        }
    }

    /// Return the inner configuration file
    ///
    pub fn inner(&self) -> &T {
        &self.inner
    }
}
