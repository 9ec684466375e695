// ── Location store ──

use std::sync::Arc;

use tokio::sync::watch;

use super::slot::Slot;
use crate::model::Location;

/// Locations near the configured zip code. Populated once per session;
/// stays empty after a failed load so a later load can retry.
pub struct LocationStore {
    slot: Slot<Vec<Location>>,
}

impl LocationStore {
    pub(crate) fn new() -> Self {
        Self {
            slot: Slot::new(Vec::new()),
        }
    }

    pub fn snapshot(&self) -> Arc<Vec<Location>> {
        self.slot.get()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.get().is_empty()
    }

    pub fn find(&self, location_id: &str) -> Option<Location> {
        self.slot
            .get()
            .iter()
            .find(|l| l.location_id == location_id)
            .cloned()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<Vec<Location>>> {
        self.slot.subscribe()
    }

    pub(crate) fn populate(&self, locations: Vec<Location>) {
        self.slot.set(locations);
    }
}
