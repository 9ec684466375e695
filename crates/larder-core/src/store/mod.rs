// ── Search state stores ──
//
// Four independent reactive cells, composed by `SearchStore`. Each is
// mutated only through its typed operations; readers subscribe through
// `watch` receivers.

mod errors;
mod locations;
mod products;
mod selected;
mod slot;

pub use errors::ErrorStore;
pub use locations::LocationStore;
pub use products::ProductPageStore;
pub use selected::SelectedLocationStore;

use crate::model::Location;

/// All state the search flow renders from.
pub struct SearchStore {
    pub locations: LocationStore,
    pub selected: SelectedLocationStore,
    pub page: ProductPageStore,
    pub error: ErrorStore,
}

impl SearchStore {
    pub fn new() -> Self {
        Self {
            locations: LocationStore::new(),
            selected: SelectedLocationStore::new(),
            page: ProductPageStore::new(),
            error: ErrorStore::new(),
        }
    }

    /// Overwrite the selection and drop the page that belonged to the
    /// previous one.
    pub(crate) fn select_location(&self, location: Location) {
        self.selected.select(location);
        self.page.reset();
    }
}

impl Default for SearchStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::model::{PaginationMeta, ProductPage};

    fn location(id: &str) -> Location {
        Location {
            location_id: id.into(),
            name: format!("Store {id}"),
            chain: None,
            phone: None,
            address: None,
        }
    }

    fn page(start: u32) -> ProductPage {
        ProductPage {
            items: Vec::new(),
            meta: PaginationMeta {
                start,
                limit: 25,
                total: 100,
            },
        }
    }

    #[test]
    fn select_resets_page() {
        let store = SearchStore::new();
        store.select_location(location("1"));
        store.page.replace(page(25));
        assert!(store.page.current().is_some());

        store.select_location(location("2"));
        assert_eq!(store.selected.location_id().as_deref(), Some("2"));
        assert!(store.page.current().is_none());
    }

    #[test]
    fn reselecting_same_location_still_resets() {
        let store = SearchStore::new();
        store.select_location(location("1"));
        store.page.replace(page(0));
        store.select_location(location("1"));
        assert!(store.page.meta().is_none());
    }

    #[test]
    fn location_lookup_by_id() {
        let store = SearchStore::new();
        assert!(store.locations.is_empty());
        store.locations.populate(vec![location("1"), location("2")]);
        assert_eq!(store.locations.find("2").map(|l| l.name), Some("Store 2".into()));
        assert!(store.locations.find("3").is_none());
    }

    #[test]
    fn error_set_and_clear() {
        let store = SearchStore::new();
        store.error.set(CoreError::Timeout);
        assert_eq!(store.error.message().as_deref(), Some("Catalog request timed out"));
        store.error.clear();
        assert!(store.error.current().is_none());
    }
}
