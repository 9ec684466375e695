// ── Selected location store ──

use std::sync::Arc;

use tokio::sync::watch;

use super::slot::Slot;
use crate::model::Location;

/// The location searches run against. Last write wins.
pub struct SelectedLocationStore {
    slot: Slot<Option<Location>>,
}

impl SelectedLocationStore {
    pub(crate) fn new() -> Self {
        Self {
            slot: Slot::new(None),
        }
    }

    pub fn current(&self) -> Option<Location> {
        Option::clone(&self.slot.get())
    }

    pub fn location_id(&self) -> Option<String> {
        Option::as_ref(&self.slot.get()).map(|l| l.location_id.clone())
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<Option<Location>>> {
        self.slot.subscribe()
    }

    pub(crate) fn select(&self, location: Location) {
        self.slot.set(Some(location));
    }
}
