//! This library is there to share some common code amongst all relief-nearby modules.
//!

mod area;
mod config;
mod error;
mod location;
mod logging;
mod macros;

use clap::{crate_name, crate_version};
pub use area::*;
pub use config::*;
pub use error::*;
pub use location::*;
pub use logging::*;

const NAME: &str = crate_name!();
const VERSION: &str = crate_version!();

pub fn version() -> String {
    format!("{}/{}", NAME, VERSION)
}

/// Every file we load carries a version number, checked before use.
///
pub trait Versioned {
    fn version(&self) -> usize;
}
