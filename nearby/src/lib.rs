//! Nearby resources.
//!
//! Given the user position and the current snapshots of alerts, volunteers and help requests,
//! compute the distance to each of them and keep the closest ones.
//!
//! - `entity` has the data model, one closed `enum` over the three kinds of records
//! - `rank` is the ranking itself, a pure function
//! - `origin` tracks the (asynchronous) acquisition of the user position
//! - `display` and `panel` turn all this into text
//!

pub use display::*;
pub use entity::*;
pub use error::*;
pub use origin::*;
pub use panel::*;
pub use rank::*;

mod display;
mod entity;
mod error;
mod origin;
mod panel;
mod rank;
