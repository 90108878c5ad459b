//! Error module
//!

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum Status {
    #[error("Location already settled")]
    AlreadySettled,
}

/// Why the platform could not give us a position.
///
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LocationError {
    #[error("Geolocation is not supported by this browser.")]
    Unsupported,
    #[error("User denied Geolocation")]
    PermissionDenied,
    #[error("Position unavailable")]
    Unavailable,
    #[error("Timeout expired")]
    Timeout,
    #[error("{0}")]
    Other(String),
}
