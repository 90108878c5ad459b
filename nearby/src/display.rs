//! Text rendering of ranked entities and of the location status.
//!
//! Distances are shown with exactly one decimal, the computation keeps full precision.
//!

use std::fmt::{Display, Formatter};

use relief_common::{find_area, Area, GeoPoint};

use crate::{Entity, Geotagged, Origin, RankedEntity};

/// `1.2km`, or `?km` when the distance is unknown.
///
pub fn format_distance(km: f64) -> String {
    if km.is_finite() {
        format!("{km:.1}km")
    } else {
        "?km".to_string()
    }
}

/// Kind-specific extra information, if any.
///
pub fn badge(entity: &Entity) -> Option<String> {
    match entity {
        Entity::Alert(a) => a.severity.map(|s| format!("[{s}]")),
        Entity::Volunteer(v) if !v.availability.is_empty() => Some(format!("({})", v.availability)),
        Entity::Volunteer(_) | Entity::HelpRequest(_) => None,
    }
}

impl Display for RankedEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let dist = format_distance(self.distance_km);
        let label = self.entity.label();
        match self.entity.location() {
            "" => write!(f, "{label} ({dist} away)")?,
            loc => write!(f, "{label} ({loc} • {dist} away)")?,
        }
        if let Some(badge) = badge(&self.entity) {
            write!(f, " {badge}")?;
        }
        Ok(())
    }
}

/// What we tell the user about their own position.
///
#[derive(Clone, Debug, PartialEq)]
pub enum LocationStatus {
    Locating,
    Inside { area: String, point: GeoPoint },
    Outside { point: GeoPoint },
    Unavailable(String),
}

impl LocationStatus {
    pub fn new(origin: &Origin, areas: &[Area]) -> Self {
        match origin {
            Origin::Pending => LocationStatus::Locating,
            Origin::Failed(reason) => LocationStatus::Unavailable(reason.clone()),
            Origin::Resolved(point) => match find_area(areas, point) {
                Some(area) => LocationStatus::Inside {
                    area: area.name.clone(),
                    point: *point,
                },
                None => LocationStatus::Outside { point: *point },
            },
        }
    }
}

impl Display for LocationStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationStatus::Locating => write!(f, "Getting location..."),
            LocationStatus::Inside { area, point } => {
                write!(f, "Your location: {area} ({point})")
            }
            LocationStatus::Outside { point } => {
                write!(f, "Location: {point} (Outside affected area)")
            }
            LocationStatus::Unavailable(reason) => write!(f, "Location unavailable: {reason}"),
        }
    }
}
