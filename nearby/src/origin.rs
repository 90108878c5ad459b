//! User position.
//!
//! The position is asked once per mount and arrives later, or never.  `Origin` is the state,
//! `Acquisition` is the per-mount handle getting it from a `LocationService`.  Once the handle
//! is torn down, a late answer is dropped.
//!
//! The ranking never waits on any of this, it only gets `Origin::point()`.
//!

use std::sync::{Arc, Mutex, MutexGuard};

use relief_common::GeoPoint;
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

use crate::{LocationError, Status};

/// Where we are in getting the user position.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Origin {
    #[default]
    Pending,
    Resolved(GeoPoint),
    /// Human-readable reason
    Failed(String),
}

impl Origin {
    /// Only a resolved origin has a point, failed is the same as pending for ranking.
    ///
    pub fn point(&self) -> Option<GeoPoint> {
        match self {
            Origin::Resolved(pt) => Some(*pt),
            _ => None,
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, Origin::Pending)
    }

    /// Move out of `Pending`, this happens only once.
    ///
    pub fn settle(&mut self, outcome: Result<GeoPoint, LocationError>) -> Result<(), Status> {
        if self.is_settled() {
            return Err(Status::AlreadySettled);
        }
        *self = match outcome {
            Ok(pt) => Origin::Resolved(pt),
            Err(e) => Origin::Failed(e.to_string()),
        };
        trace!("origin settled: {self:?}");
        Ok(())
    }
}

/// The platform service giving us the current position.
///
/// This may block, `Acquisition::spawn()` runs it outside of the async workers.
///
pub trait LocationService: Send + Sync + 'static {
    fn current_position(&self) -> Result<GeoPoint, LocationError>;
}

impl<F> LocationService for F
where
    F: Fn() -> Result<GeoPoint, LocationError> + Send + Sync + 'static,
{
    fn current_position(&self) -> Result<GeoPoint, LocationError> {
        self()
    }
}

/// Always at the same place.
///
#[derive(Clone, Copy, Debug)]
pub struct FixedLocation(pub GeoPoint);

impl LocationService for FixedLocation {
    fn current_position(&self) -> Result<GeoPoint, LocationError> {
        Ok(self.0)
    }
}

/// No location capability at all.
///
#[derive(Clone, Copy, Debug, Default)]
pub struct NoGeolocation;

impl LocationService for NoGeolocation {
    fn current_position(&self) -> Result<GeoPoint, LocationError> {
        Err(LocationError::Unsupported)
    }
}

#[derive(Debug, Default)]
struct Slot {
    origin: Origin,
    mounted: bool,
}

/// Per-mount handle.
///
/// Dropping it is the same as `teardown()`.
///
#[derive(Debug)]
pub struct Acquisition {
    slot: Arc<Mutex<Slot>>,
}

impl Default for Acquisition {
    fn default() -> Self {
        Self::new()
    }
}

impl Acquisition {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot {
                origin: Origin::Pending,
                mounted: true,
            })),
        }
    }

    /// Snapshot of the current state.
    ///
    pub fn origin(&self) -> Origin {
        lock(&self.slot).origin.clone()
    }

    pub fn point(&self) -> Option<GeoPoint> {
        lock(&self.slot).origin.point()
    }

    pub fn is_mounted(&self) -> bool {
        lock(&self.slot).mounted
    }

    /// Callback to hand over to whoever will answer.
    ///
    pub fn completion(&self) -> Completion {
        Completion {
            slot: Arc::clone(&self.slot),
        }
    }

    /// Ask `service` for the position in the background.
    ///
    /// The handle yields `true` if the answer was applied.  Needs a tokio runtime.
    ///
    #[tracing::instrument(skip_all)]
    pub fn spawn<S: LocationService>(&self, service: S) -> JoinHandle<bool> {
        let completion = self.completion();
        tokio::task::spawn_blocking(move || {
            let outcome = service.current_position();
            completion.apply(outcome)
        })
    }

    /// The consuming view is gone.
    ///
    pub fn teardown(&self) {
        lock(&self.slot).mounted = false;
    }
}

impl Drop for Acquisition {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// One-shot callback settling an `Acquisition`.
///
#[derive(Debug)]
pub struct Completion {
    slot: Arc<Mutex<Slot>>,
}

impl Completion {
    /// Apply the answer unless the view has been torn down or the origin is already settled.
    ///
    pub fn apply(self, outcome: Result<GeoPoint, LocationError>) -> bool {
        let mut slot = lock(&self.slot);
        if !slot.mounted {
            debug!("view gone, dropping location answer");
            return false;
        }
        match slot.origin.settle(outcome) {
            Ok(()) => true,
            Err(e) => {
                warn!("{e}, ignoring");
                false
            }
        }
    }
}

/// A panic while holding the lock leaves the slot usable, nothing in it can be half-written.
///
fn lock(slot: &Mutex<Slot>) -> MutexGuard<'_, Slot> {
    slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
