// ── Product page store ──

use std::sync::Arc;

use tokio::sync::watch;

use super::slot::Slot;
use crate::model::{PaginationMeta, ProductPage};

/// The page currently on screen, or `None` before the first search (and
/// after a location change).
pub struct ProductPageStore {
    slot: Slot<Option<ProductPage>>,
}

impl ProductPageStore {
    pub(crate) fn new() -> Self {
        Self {
            slot: Slot::new(None),
        }
    }

    pub fn current(&self) -> Option<ProductPage> {
        Option::clone(&self.slot.get())
    }

    pub fn meta(&self) -> Option<PaginationMeta> {
        Option::as_ref(&self.slot.get()).map(|p| p.meta)
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<Option<ProductPage>>> {
        self.slot.subscribe()
    }

    pub(crate) fn replace(&self, page: ProductPage) {
        self.slot.set(Some(page));
    }

    pub(crate) fn reset(&self) {
        self.slot.set(None);
    }
}
