//! Geotagged records we can rank.
//!
//! Each kind has its own `struct` as it comes from the data layer (one JSON array per kind) and
//! `Entity` puts them under a single closed type.  JSON records carry `lat`/`lng` at the top
//! level, next to the other fields.
//!

use relief_common::GeoPoint;
use serde::{Deserialize, Serialize};
use strum::EnumString;

/// Alert severity
///
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    strum::Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// An alert issued for some place.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Alert {
    pub id: u32,
    pub title: String,
    /// Not every feed grades its alerts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(flatten)]
    pub point: GeoPoint,
    /// Free text description of the place
    #[serde(default)]
    pub location: String,
}

/// A registered volunteer.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Volunteer {
    pub id: u32,
    pub name: String,
    /// Free text, like "Available now"
    #[serde(default)]
    pub availability: String,
    #[serde(flatten)]
    pub point: GeoPoint,
    #[serde(default)]
    pub location: String,
}

/// Someone asking for help.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct HelpRequest {
    pub id: u32,
    pub title: String,
    #[serde(flatten)]
    pub point: GeoPoint,
    #[serde(default)]
    pub location: String,
}

/// Anything with an id, a label and a position.
///
pub trait Geotagged {
    fn id(&self) -> u32;
    fn label(&self) -> &str;
    fn point(&self) -> GeoPoint;
}

impl Geotagged for Alert {
    fn id(&self) -> u32 {
        self.id
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn point(&self) -> GeoPoint {
        self.point
    }
}

impl Geotagged for Volunteer {
    fn id(&self) -> u32 {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn point(&self) -> GeoPoint {
        self.point
    }
}

impl Geotagged for HelpRequest {
    fn id(&self) -> u32 {
        self.id
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn point(&self) -> GeoPoint {
        self.point
    }
}

/// Kind of entity, without the payload.
///
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
    Alert,
    Volunteer,
    HelpRequest,
}

/// One of the three kinds of records.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entity {
    Alert(Alert),
    Volunteer(Volunteer),
    HelpRequest(HelpRequest),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Alert(_) => EntityKind::Alert,
            Entity::Volunteer(_) => EntityKind::Volunteer,
            Entity::HelpRequest(_) => EntityKind::HelpRequest,
        }
    }

    /// Free text description of the place
    ///
    pub fn location(&self) -> &str {
        match self {
            Entity::Alert(a) => &a.location,
            Entity::Volunteer(v) => &v.location,
            Entity::HelpRequest(r) => &r.location,
        }
    }
}

impl Geotagged for Entity {
    fn id(&self) -> u32 {
        match self {
            Entity::Alert(a) => a.id(),
            Entity::Volunteer(v) => v.id(),
            Entity::HelpRequest(r) => r.id(),
        }
    }

    fn label(&self) -> &str {
        match self {
            Entity::Alert(a) => a.label(),
            Entity::Volunteer(v) => v.label(),
            Entity::HelpRequest(r) => r.label(),
        }
    }

    fn point(&self) -> GeoPoint {
        match self {
            Entity::Alert(a) => a.point(),
            Entity::Volunteer(v) => v.point(),
            Entity::HelpRequest(r) => r.point(),
        }
    }
}

impl From<Alert> for Entity {
    fn from(value: Alert) -> Self {
        Entity::Alert(value)
    }
}

impl From<Volunteer> for Entity {
    fn from(value: Volunteer) -> Self {
        Entity::Volunteer(value)
    }
}

impl From<HelpRequest> for Entity {
    fn from(value: HelpRequest) -> Self {
        Entity::HelpRequest(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[test]
    fn test_alert_from_json() -> eyre::Result<()> {
        let data = r#"{"id": 1, "title": "Flooding", "severity": "critical", "lat": 17.4, "lng": 78.48, "location": "Banjara Hills"}"#;

        let a: Alert = serde_json::from_str(data)?;
        assert_eq!(Some(Severity::Critical), a.severity);
        assert_eq!(GeoPoint::new(17.4, 78.48), a.point);
        assert_eq!("Banjara Hills", a.location);
        Ok(())
    }

    #[test]
    fn test_alert_without_severity() -> eyre::Result<()> {
        let data = r#"{"id": 2, "title": "Road closed", "lat": 17.4, "lng": 78.48}"#;

        let a: Alert = serde_json::from_str(data)?;
        assert_eq!(None, a.severity);

        let v = serde_json::to_value(&a)?;
        assert!(v.get("severity").is_none());
        Ok(())
    }

    #[test]
    fn test_volunteer_from_json_defaults() -> eyre::Result<()> {
        let data = r#"{"id": 3, "name": "Priya", "lat": 17.395, "lng": 78.486}"#;

        let v: Volunteer = serde_json::from_str(data)?;
        assert_eq!("Priya", v.label());
        assert!(v.availability.is_empty());
        assert!(v.location.is_empty());
        Ok(())
    }

    #[test]
    fn test_entity_to_json_is_tagged() -> eyre::Result<()> {
        let e = Entity::from(HelpRequest {
            id: 7,
            title: "Need water".to_string(),
            point: GeoPoint::new(17.38, 78.49),
            location: String::new(),
        });

        let v = serde_json::to_value(&e)?;
        assert_eq!("help_request", v["kind"]);
        assert_eq!(17.38, v["lat"]);
        assert_eq!("Need water", v["title"]);
        Ok(())
    }

    #[rstest]
    #[case(EntityKind::Alert, "alert")]
    #[case(EntityKind::Volunteer, "volunteer")]
    #[case(EntityKind::HelpRequest, "help_request")]
    fn test_kind_display(#[case] kind: EntityKind, #[case] s: &str) {
        assert_eq!(s, kind.to_string());
    }

    #[rstest]
    #[case("low", Severity::Low)]
    #[case("CRITICAL", Severity::Critical)]
    #[case("High", Severity::High)]
    fn test_severity_from_str(#[case] s: &str, #[case] sev: Severity) {
        assert_eq!(sev, Severity::from_str(s).unwrap());
    }

    #[test]
    fn test_entity_accessors() {
        let e = Entity::from(Volunteer {
            id: 2,
            name: "Ravi".to_string(),
            availability: "Available now".to_string(),
            point: GeoPoint::new(17.395, 78.486),
            location: "Ameerpet".to_string(),
        });

        assert_eq!(EntityKind::Volunteer, e.kind());
        assert_eq!(2, e.id());
        assert_eq!("Ravi", e.label());
        assert_eq!("Ameerpet", e.location());
        assert_eq!(GeoPoint::new(17.395, 78.486), e.point());
    }
}
