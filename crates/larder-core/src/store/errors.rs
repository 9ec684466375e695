// ── Error store ──

use std::sync::Arc;

use tokio::sync::watch;

use super::slot::Slot;
use crate::error::CoreError;

/// Most recent fetch failure. Cleared by the next successful fetch.
pub struct ErrorStore {
    slot: Slot<Option<CoreError>>,
}

impl ErrorStore {
    pub(crate) fn new() -> Self {
        Self {
            slot: Slot::new(None),
        }
    }

    pub fn current(&self) -> Option<CoreError> {
        Option::clone(&self.slot.get())
    }

    /// Banner text for the current error.
    pub fn message(&self) -> Option<String> {
        Option::as_ref(&self.slot.get()).map(CoreError::user_message)
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<Option<CoreError>>> {
        self.slot.subscribe()
    }

    pub(crate) fn set(&self, err: CoreError) {
        self.slot.set(Some(err));
    }

    pub(crate) fn clear(&self) {
        if self.slot.get().is_some() {
            self.slot.set(None);
        }
    }
}
