//! Location related module
//!
//! v1: basic point, only Lat, Lng and great-circle distance
//! v2: added bounding boxes for the affected areas
//!
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// A position on Earth, in decimal degrees.
///
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct GeoPoint {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Finite and within `[-90, 90]` / `[-180, 180]`.
    ///
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Great-circle distance to `other` in kilometres.
    ///
    #[inline]
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        haversine(self, other)
    }
}

impl Display for GeoPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}, {:.3}", self.lat, self.lng)
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// Haversine distance between `a` and `b`, in kilometres.
///
/// `h` can drift slightly outside of `[0, 1]` through rounding so it is clamped before
/// going through `atan2()`.  Non-finite input gives a `NaN` result.
///
pub fn haversine(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Bounding box in degrees.
///
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct BB {
    /// Latitude - Y0
    pub min_lat: f64,
    /// Longitude - X0
    pub min_lng: f64,
    /// Latitude - Y1
    pub max_lat: f64,
    /// Longitude - X1
    pub max_lng: f64,
}

impl BB {
    pub fn new(min_lat: f64, min_lng: f64, max_lat: f64, max_lng: f64) -> Self {
        Self {
            min_lat,
            min_lng,
            max_lat,
            max_lng,
        }
    }

    /// Bounds are strict, a point sitting on an edge is outside.
    ///
    pub fn contains(&self, pt: &GeoPoint) -> bool {
        pt.lat > self.min_lat && pt.lat < self.max_lat && pt.lng > self.min_lng && pt.lng < self.max_lng
    }

    /// Geometric centre of the box.
    ///
    pub fn center(&self) -> GeoPoint {
        GeoPoint {
            lat: (self.min_lat + self.max_lat) / 2.0,
            lng: (self.min_lng + self.max_lng) / 2.0,
        }
    }
}

impl Display for BB {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.2}, {:.2}, {:.2}, {:.2}",
            self.min_lat, self.min_lng, self.max_lat, self.max_lng
        )
    }
}
