//! Proximity ranking.
//!
//! Every entity gets its great-circle distance to the origin, the three collections are merged
//! (alerts, then volunteers, then help requests), stable-sorted by distance and cut to `limit`.
//!
//! An entity with a broken position (`NaN` or infinite coordinates) is kept, its distance is
//! not finite and it goes after every entity with a real distance, in input order.
//!

use std::cmp::Ordering;

use relief_common::{haversine, GeoPoint};
use serde::Serialize;
use tracing::{debug, trace};

use crate::{Alert, Entity, EntityKind, Geotagged, HelpRequest, Volunteer};

/// How many entities we show by default
pub const DEFAULT_LIMIT: usize = 8;

/// An entity with its distance to the origin.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankedEntity {
    #[serde(flatten)]
    pub entity: Entity,
    /// Kilometres, full precision
    pub distance_km: f64,
}

impl RankedEntity {
    pub fn kind(&self) -> EntityKind {
        self.entity.kind()
    }

    /// Unique key across all kinds, ids are only unique within one kind.
    ///
    pub fn key(&self) -> String {
        format!("{}-{}", self.kind(), self.entity.id())
    }
}

/// Rank the three collections around `origin`.
///
/// No origin (position not known yet, or failed) means nothing to show.
///
pub fn rank_nearby(
    origin: Option<GeoPoint>,
    alerts: &[Alert],
    volunteers: &[Volunteer],
    help_requests: &[HelpRequest],
    limit: usize,
) -> Vec<RankedEntity> {
    trace!(
        "rank_nearby({} alerts, {} volunteers, {} requests)",
        alerts.len(),
        volunteers.len(),
        help_requests.len()
    );

    let all = alerts
        .iter()
        .cloned()
        .map(Entity::from)
        .chain(volunteers.iter().cloned().map(Entity::from))
        .chain(help_requests.iter().cloned().map(Entity::from));
    rank_entities(origin, all, limit)
}

/// Same as `rank_nearby()` for an already merged sequence, input order is the tie-breaker.
///
pub fn rank_entities<I>(origin: Option<GeoPoint>, entities: I, limit: usize) -> Vec<RankedEntity>
where
    I: IntoIterator<Item = Entity>,
{
    let Some(origin) = origin else {
        trace!("no origin");
        return Vec::new();
    };

    let mut ranked: Vec<RankedEntity> = entities
        .into_iter()
        .map(|entity| {
            let distance_km = haversine(&origin, &entity.point());
            RankedEntity {
                entity,
                distance_km,
            }
        })
        .collect();
    let total = ranked.len();

    // `sort_by()` is stable
    ranked.sort_by(|a, b| by_distance(a.distance_km, b.distance_km));
    ranked.truncate(limit);

    debug!("kept {}/{} entities around {}", ranked.len(), total, origin);
    ranked
}

/// Finite distances first in ascending order, all the others are equal and last.
///
fn by_distance(a: f64, b: f64) -> Ordering {
    match (a.is_finite(), b.is_finite()) {
        (true, true) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Severity;
    use proptest::prelude::*;
    use rstest::{fixture, rstest};

    const HYDERABAD: GeoPoint = GeoPoint::new(17.385, 78.4867);

    fn alert(id: u32, lat: f64, lng: f64) -> Alert {
        Alert {
            id,
            title: format!("alert {id}"),
            severity: Some(Severity::High),
            point: GeoPoint::new(lat, lng),
            location: String::new(),
        }
    }

    fn volunteer(id: u32, lat: f64, lng: f64) -> Volunteer {
        Volunteer {
            id,
            name: format!("volunteer {id}"),
            availability: "Available now".to_string(),
            point: GeoPoint::new(lat, lng),
            location: String::new(),
        }
    }

    fn request(id: u32, lat: f64, lng: f64) -> HelpRequest {
        HelpRequest {
            id,
            title: format!("request {id}"),
            point: GeoPoint::new(lat, lng),
            location: String::new(),
        }
    }

    #[fixture]
    fn snapshot() -> (Vec<Alert>, Vec<Volunteer>, Vec<HelpRequest>) {
        (
            vec![alert(1, 17.400, 78.480), alert(2, 17.450, 78.390)],
            vec![volunteer(1, 17.395, 78.486), volunteer(2, 17.300, 78.550)],
            vec![request(1, 17.386, 78.487), request(2, 17.500, 78.400)],
        )
    }

    fn keys(ranked: &[RankedEntity]) -> Vec<String> {
        ranked.iter().map(RankedEntity::key).collect()
    }

    #[test]
    fn test_hyderabad_scenario() {
        let alerts = vec![alert(1, 17.400, 78.480)];
        let volunteers = vec![volunteer(1, 17.395, 78.486)];

        let ranked = rank_nearby(Some(HYDERABAD), &alerts, &volunteers, &[], 8);

        assert_eq!(2, ranked.len());
        assert_eq!(EntityKind::Volunteer, ranked[0].kind());
        assert_eq!(EntityKind::Alert, ranked[1].kind());
        assert_eq!("1.1", format!("{:.1}", ranked[0].distance_km));
        assert_eq!("1.8", format!("{:.1}", ranked[1].distance_km));
        assert!(ranked.iter().all(|r| r.distance_km.is_finite() && r.distance_km >= 0.0));
    }

    #[rstest]
    fn test_no_origin(snapshot: (Vec<Alert>, Vec<Volunteer>, Vec<HelpRequest>)) {
        let (a, v, h) = snapshot;

        assert!(rank_nearby(None, &a, &v, &h, 8).is_empty());
    }

    #[rstest]
    fn test_limit_zero(snapshot: (Vec<Alert>, Vec<Volunteer>, Vec<HelpRequest>)) {
        let (a, v, h) = snapshot;

        assert!(rank_nearby(Some(HYDERABAD), &a, &v, &h, 0).is_empty());
    }

    #[rstest]
    #[case(1, vec!["help_request-1"])]
    #[case(3, vec!["help_request-1", "volunteer-1", "alert-1"])]
    #[case(100, vec!["help_request-1", "volunteer-1", "alert-1", "volunteer-2", "alert-2", "help_request-2"])]
    fn test_limit_and_order(
        snapshot: (Vec<Alert>, Vec<Volunteer>, Vec<HelpRequest>),
        #[case] limit: usize,
        #[case] expected: Vec<&str>,
    ) {
        let (a, v, h) = snapshot;

        let ranked = rank_nearby(Some(HYDERABAD), &a, &v, &h, limit);
        assert_eq!(expected, keys(&ranked));
    }

    #[test]
    fn test_same_place_keeps_input_order() {
        let (lat, lng) = (HYDERABAD.lat, HYDERABAD.lng);

        let ranked = rank_nearby(
            Some(HYDERABAD),
            &[alert(1, lat, lng)],
            &[volunteer(1, lat, lng)],
            &[request(1, lat, lng)],
            8,
        );

        assert_eq!(vec!["alert-1", "volunteer-1", "help_request-1"], keys(&ranked));
        assert!(ranked.iter().all(|r| r.distance_km == 0.0));
    }

    #[test]
    fn test_duplicate_ids_across_kinds_are_kept() {
        let ranked = rank_nearby(
            Some(HYDERABAD),
            &[alert(5, 17.40, 78.48)],
            &[volunteer(5, 17.40, 78.48)],
            &[],
            8,
        );

        assert_eq!(vec!["alert-5", "volunteer-5"], keys(&ranked));
    }

    #[test]
    fn test_broken_positions_go_last() {
        let ranked = rank_nearby(
            Some(HYDERABAD),
            &[alert(1, f64::NAN, 78.48), alert(2, 17.45, 78.39)],
            &[volunteer(1, 17.395, f64::INFINITY)],
            &[request(1, 17.386, 78.487)],
            8,
        );

        assert_eq!(
            vec!["help_request-1", "alert-2", "alert-1", "volunteer-1"],
            keys(&ranked)
        );
        assert!(ranked[2].distance_km.is_nan());
        assert!(!ranked[3].distance_km.is_finite());
    }

    #[test]
    fn test_rank_entities_mixed_feed() {
        let feed: Vec<Entity> = vec![
            request(1, 17.50, 78.40).into(),
            alert(1, 17.386, 78.487).into(),
        ];

        let ranked = rank_entities(Some(HYDERABAD), feed, 1);
        assert_eq!(vec!["alert-1"], keys(&ranked));
    }

    #[test]
    fn test_ranked_to_json() -> eyre::Result<()> {
        let ranked = rank_nearby(Some(HYDERABAD), &[alert(1, 17.400, 78.480)], &[], &[], 8);

        let v = serde_json::to_value(&ranked)?;
        assert_eq!("alert", v[0]["kind"]);
        assert_eq!("high", v[0]["severity"]);
        assert!(v[0]["distance_km"].as_f64().is_some());
        Ok(())
    }

    fn point() -> impl Strategy<Value = GeoPoint> {
        (17.0f64..18.0, 78.0f64..79.0).prop_map(GeoPoint::from)
    }

    fn collections() -> impl Strategy<Value = (Vec<Alert>, Vec<Volunteer>, Vec<HelpRequest>)> {
        (
            prop::collection::vec(point(), 0..10),
            prop::collection::vec(point(), 0..10),
            prop::collection::vec(point(), 0..10),
        )
            .prop_map(|(a, v, h)| {
                (
                    a.iter().enumerate().map(|(i, p)| alert(i as u32, p.lat, p.lng)).collect::<Vec<_>>(),
                    v.iter().enumerate().map(|(i, p)| volunteer(i as u32, p.lat, p.lng)).collect::<Vec<_>>(),
                    h.iter().enumerate().map(|(i, p)| request(i as u32, p.lat, p.lng)).collect::<Vec<_>>(),
                )
            })
    }

    proptest! {
        #[test]
        fn prop_sorted_and_bounded(origin in point(), (a, v, h) in collections(), limit in 0usize..40) {
            let ranked = rank_nearby(Some(origin), &a, &v, &h, limit);

            prop_assert_eq!(limit.min(a.len() + v.len() + h.len()), ranked.len());
            prop_assert!(ranked.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));
        }

        #[test]
        fn prop_deterministic(origin in point(), (a, v, h) in collections()) {
            let first = rank_nearby(Some(origin), &a, &v, &h, DEFAULT_LIMIT);
            let second = rank_nearby(Some(origin), &a, &v, &h, DEFAULT_LIMIT);

            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_no_origin_is_empty((a, v, h) in collections(), limit in 0usize..40) {
            prop_assert!(rank_nearby(None, &a, &v, &h, limit).is_empty());
        }

        #[test]
        fn prop_ties_keep_input_order((a, v, h) in collections()) {
            // Everything at the same place as the origin
            let origin = GeoPoint::new(17.5, 78.5);
            let a: Vec<_> = a.into_iter().map(|x| alert(x.id, origin.lat, origin.lng)).collect();
            let v: Vec<_> = v.into_iter().map(|x| volunteer(x.id, origin.lat, origin.lng)).collect();
            let h: Vec<_> = h.into_iter().map(|x| request(x.id, origin.lat, origin.lng)).collect();

            let ranked = rank_nearby(Some(origin), &a, &v, &h, usize::MAX);
            let expected: Vec<String> = a.iter().map(|x| format!("alert-{}", x.id))
                .chain(v.iter().map(|x| format!("volunteer-{}", x.id)))
                .chain(h.iter().map(|x| format!("help_request-{}", x.id)))
                .collect();
            prop_assert_eq!(expected, keys(&ranked));
        }
    }
}
