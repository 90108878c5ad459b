//! The "nearby resources" panel.
//!
//! Owns the position acquisition for as long as it lives and recomputes the ranking from the
//! latest snapshots every time it is asked to, nothing is cached between two `refresh()`.
//!

use relief_common::Area;
use tabled::builder::Builder;
use tabled::settings::Style;
use tokio::task::JoinHandle;
use tracing::trace;

use crate::{
    badge, format_distance, rank_nearby, Acquisition, Alert, Geotagged, HelpRequest,
    LocationService, LocationStatus, Origin, RankedEntity, Volunteer, DEFAULT_LIMIT,
};

#[derive(Debug)]
pub struct NearbyPanel {
    acquisition: Acquisition,
    areas: Vec<Area>,
    limit: usize,
    /// Origin the current `items` were ranked from
    ranked_from: Origin,
    items: Vec<RankedEntity>,
}

impl NearbyPanel {
    pub fn new(areas: Vec<Area>) -> Self {
        Self {
            acquisition: Acquisition::new(),
            areas,
            limit: DEFAULT_LIMIT,
            ranked_from: Origin::default(),
            items: Vec::new(),
        }
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn acquisition(&self) -> &Acquisition {
        &self.acquisition
    }

    /// Start getting the user position, see `Acquisition::spawn()`.
    ///
    pub fn locate<S: LocationService>(&self, service: S) -> JoinHandle<bool> {
        self.acquisition.spawn(service)
    }

    pub fn origin(&self) -> Origin {
        self.acquisition.origin()
    }

    pub fn status(&self) -> LocationStatus {
        LocationStatus::new(&self.origin(), &self.areas)
    }

    /// Rank the current snapshots.
    ///
    pub fn refresh(
        &mut self,
        alerts: &[Alert],
        volunteers: &[Volunteer],
        help_requests: &[HelpRequest],
    ) -> &[RankedEntity] {
        trace!("refresh");
        self.ranked_from = self.acquisition.origin();
        self.items = rank_nearby(
            self.ranked_from.point(),
            alerts,
            volunteers,
            help_requests,
            self.limit,
        );
        &self.items
    }

    pub fn items(&self) -> &[RankedEntity] {
        &self.items
    }

    /// Status line followed by the table of nearby items, if any.
    ///
    /// Both come from the last `refresh()`, a position that arrived after it shows up on the
    /// next one.
    ///
    pub fn render(&self) -> String {
        let status = LocationStatus::new(&self.ranked_from, &self.areas);

        if self.items.is_empty() {
            let msg = match status {
                LocationStatus::Locating => "Getting your location for nearby resources...",
                LocationStatus::Unavailable(_) => "Location unavailable",
                _ => "Nothing nearby.",
            };
            return format!("{status}\n{msg}\n");
        }

        let mut builder = Builder::default();
        builder.push_record(["Kind", "Name", "Where", "Distance", "Info"]);

        self.items.iter().for_each(|item| {
            builder.push_record([
                item.kind().to_string(),
                item.entity.label().to_string(),
                item.entity.location().to_string(),
                format_distance(item.distance_km),
                badge(&item.entity).unwrap_or_default(),
            ]);
        });

        let table = builder.build().with(Style::modern()).to_string();
        format!("{status}\nNearby ({} items)\n{table}\n", self.items.len())
    }
}
