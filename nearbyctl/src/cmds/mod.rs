//! Actual sub-command implementations.
//!

pub use distance::*;
pub use rank::*;

mod distance;
mod rank;
