//! Error module
//!

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Status {
    #[error("Bad file version {0}, expected {1}")]
    BadFileVersion(usize, usize),
    #[error("Missing configuration file, use -c or create {0}")]
    MissingConfig(String),
    #[error("Unknown area {0}")]
    UnknownArea(String),
}
