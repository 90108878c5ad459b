//! `rank` sub-command.
//!

use std::fs;
use std::path::Path;

use eyre::Result;
use relief_common::{area_by_name, Area, GeoPoint};
use relief_nearby::{
    Alert, FixedLocation, Geotagged, HelpRequest, NearbyPanel, NoGeolocation, Volunteer,
};
use serde::de::DeserializeOwned;
use tracing::{debug, info, trace, warn};

use crate::cli::RankOpts;
use crate::config::Config;

/// Load one snapshot, a JSON array of `T`.
///
/// Records with a broken position are kept (they end up last), we only complain.
///
#[tracing::instrument]
pub fn load_entities<T>(fname: &Path) -> Result<Vec<T>>
where
    T: DeserializeOwned + Geotagged,
{
    trace!("enter");

    let data = fs::read_to_string(fname)?;
    let list: Vec<T> = serde_json::from_str(&data)?;

    list.iter()
        .filter(|e| !e.point().is_valid())
        .for_each(|e| warn!("{}: bad position for {} ({})", fname.display(), e.id(), e.label()));

    debug!("{} records from {}", list.len(), fname.display());
    Ok(list)
}

/// Either the file given on the CLI, the one in the configuration or nothing.
///
fn snapshot<T>(cli: Option<&Path>, cfg: Option<&Path>) -> Result<Vec<T>>
where
    T: DeserializeOwned + Geotagged,
{
    match cli.or(cfg) {
        Some(fname) => load_entities(fname),
        None => Ok(Vec::new()),
    }
}

/// Rank all snapshots around the position given in `opts`.
///
#[tracing::instrument(skip(cfg, areas))]
pub async fn rank_around(cfg: &Config, areas: Vec<Area>, opts: &RankOpts) -> Result<String> {
    let alerts: Vec<Alert> = snapshot(opts.alerts.as_deref(), cfg.alerts.as_deref())?;
    let volunteers: Vec<Volunteer> =
        snapshot(opts.volunteers.as_deref(), cfg.volunteers.as_deref())?;
    let help_requests: Vec<HelpRequest> =
        snapshot(opts.help_requests.as_deref(), cfg.help_requests.as_deref())?;

    let area_center = match &opts.area {
        Some(name) => Some(area_by_name(&areas, name)?.bb.center()),
        None => None,
    };

    let limit = opts.limit.unwrap_or(cfg.limit);
    let mut panel = NearbyPanel::new(areas).limit(limit);

    // Wait for the position before ranking
    //
    let position = match (opts.lat, opts.lng) {
        (Some(lat), Some(lng)) => Some(GeoPoint::new(lat, lng)),
        _ => area_center,
    };
    match position {
        Some(pt) => {
            info!("Position: {pt}");
            panel.locate(FixedLocation(pt)).await?;
        }
        None => {
            info!("No position given");
            panel.locate(NoGeolocation).await?;
        }
    }

    panel.refresh(&alerts, &volunteers, &help_requests);

    if opts.json {
        let mut out = serde_json::to_string_pretty(panel.items())?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(panel.render())
    }
}
