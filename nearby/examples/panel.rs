//! Mount a panel, get a (slow) position and rank a few records around it.
//!
use std::thread;
use std::time::Duration;

use eyre::Result;
use relief_common::{load_areas, GeoPoint};
use relief_nearby::{Alert, HelpRequest, LocationError, NearbyPanel, Severity, Volunteer};

#[tokio::main]
async fn main() -> Result<()> {
    let alerts = vec![Alert {
        id: 1,
        title: "Flash flooding".to_string(),
        severity: Some(Severity::Critical),
        point: GeoPoint::new(17.400, 78.480),
        location: "Banjara Hills".to_string(),
    }];
    let volunteers = vec![Volunteer {
        id: 1,
        name: "Priya Reddy".to_string(),
        availability: "Available now".to_string(),
        point: GeoPoint::new(17.395, 78.486),
        location: "Ameerpet".to_string(),
    }];
    let requests = vec![HelpRequest {
        id: 1,
        title: "Need drinking water".to_string(),
        point: GeoPoint::new(17.386, 78.487),
        location: "Nampally".to_string(),
    }];

    let mut panel = NearbyPanel::new(load_areas(None)?);

    let handle = panel.locate(|| -> Result<GeoPoint, LocationError> {
        thread::sleep(Duration::from_millis(200));
        Ok(GeoPoint::new(17.385, 78.4867))
    });

    panel.refresh(&alerts, &volunteers, &requests);
    println!("{}", panel.render());

    handle.await?;
    panel.refresh(&alerts, &volunteers, &requests);
    println!("{}", panel.render());

    for item in panel.items() {
        println!("{item}");
    }
    Ok(())
}
