use relief_common::{haversine, GeoPoint};
use relief_nearby::format_distance;
use tracing::warn;

use crate::cli::DistOpts;

/// Great-circle distance between the two points of `opts`.
///
#[tracing::instrument]
pub fn distance_between(opts: &DistOpts) -> String {
    let from = GeoPoint::new(opts.from_lat, opts.from_lng);
    let to = GeoPoint::new(opts.to_lat, opts.to_lng);

    [from, to]
        .iter()
        .filter(|pt| !pt.is_valid())
        .for_each(|pt| warn!("{pt} is not a valid position"));

    let d = haversine(&from, &to);
    format!("Distance ({from}) -> ({to}): {} ({d:.6} km)\n", format_distance(d))
}
